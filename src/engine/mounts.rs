//! Mount normalization
//!
//! Turns raw `--mount HOSTPATH[:CONTAINERPATH]` strings into validated bind
//! specifications: host directories are created if missing and resolved to
//! absolute, symlink-free paths. Output order matches input order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DevconError, Result};

/// Container path used when a mount spec omits one.
pub const DEFAULT_CONTAINER_PATH: &str = "/app/workspace";

/// Host directory (relative to the invocation dir) mounted when no mounts
/// are given at all.
pub const DEFAULT_WORKSPACE_DIR: &str = "workspace";

/// One `--mount` argument, split but not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMount {
    pub host: String,
    pub container: String,
}

impl RawMount {
    /// Parse a raw `HOSTPATH[:CONTAINERPATH]` spec.
    ///
    /// More than one separator, or an empty half, is a configuration error.
    pub fn parse(raw: &str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(':').collect();
        match parts.as_slice() {
            [host] if !host.is_empty() => Ok(RawMount {
                host: (*host).to_string(),
                container: DEFAULT_CONTAINER_PATH.to_string(),
            }),
            [host, container] if !host.is_empty() && !container.is_empty() => Ok(RawMount {
                host: (*host).to_string(),
                container: (*container).to_string(),
            }),
            _ => Err(DevconError::Config(format!(
                "invalid mount spec '{}': expected HOSTPATH[:CONTAINERPATH]",
                raw
            ))),
        }
    }
}

/// Validated host-to-container binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub host_path: PathBuf,
    pub container_path: String,
}

impl MountSpec {
    /// The `-v` argument value for container creation.
    pub fn bind_flag(&self) -> String {
        format!("{}:{}", self.host_path.display(), self.container_path)
    }
}

/// Resolve raw mounts into bind specs, anchored at `workdir`.
///
/// An empty list yields exactly one binding of `<workdir>/workspace` to the
/// default container path. Relative host paths are taken relative to
/// `workdir`, created if missing, and canonicalized.
pub fn normalize(raw: &[RawMount], workdir: &Path) -> Result<Vec<MountSpec>> {
    if raw.is_empty() {
        let host = workdir.join(DEFAULT_WORKSPACE_DIR);
        return Ok(vec![resolve(&host, DEFAULT_CONTAINER_PATH)?]);
    }

    raw.iter()
        .map(|mount| {
            let host = workdir.join(&mount.host);
            resolve(&host, &mount.container)
        })
        .collect()
}

fn resolve(host: &Path, container: &str) -> Result<MountSpec> {
    fs::create_dir_all(host)?;
    let host_path = host.canonicalize()?;
    Ok(MountSpec {
        host_path,
        container_path: container.to_string(),
    })
}
