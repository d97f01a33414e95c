//! State prober
//!
//! Derives the managed container's state fresh on every invocation by
//! querying the runtime's listings. Listings are requested as JSON rows and
//! the `Names` field is compared for exact equality, so a container named
//! `devcon2` never satisfies a probe for `devcon`.

use serde::Deserialize;

use crate::error::{DevconError, Result};
use crate::runtime::ContainerRuntime;

/// Observed state of the managed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Absent,
    Stopped,
    Running,
}

/// One row of `docker ps --format '{{json .}}'`.
#[derive(Debug, Deserialize)]
struct ContainerRow {
    #[serde(rename = "Names")]
    names: String,
}

/// Determine the container's current state.
///
/// Checks the running-containers list first, then the all-containers list.
/// A listing failure is surfaced as an error, never treated as absence.
pub fn probe(runtime: &dyn ContainerRuntime, container: &str) -> Result<ContainerState> {
    if list_containers(runtime, container, false)?
        .iter()
        .any(|name| name == container)
    {
        return Ok(ContainerState::Running);
    }

    if list_containers(runtime, container, true)?
        .iter()
        .any(|name| name == container)
    {
        return Ok(ContainerState::Stopped);
    }

    Ok(ContainerState::Absent)
}

/// True if an image matching `image` exists locally.
pub fn image_exists(runtime: &dyn ContainerRuntime, image: &str) -> Result<bool> {
    let args = vec![
        "images".to_string(),
        "--filter".to_string(),
        format!("reference={}", image),
        "--format".to_string(),
        "{{json .}}".to_string(),
    ];
    let output = runtime.capture(&args)?;
    if !output.success() {
        return Err(DevconError::runtime_op(
            "list images",
            image,
            output.stderr.trim(),
        ));
    }
    Ok(output.stdout.lines().any(|line| !line.trim().is_empty()))
}

/// Names from `docker ps [--all]` filtered to the probed container.
///
/// The name filter is anchored, but docker filters still match by pattern,
/// so callers compare the returned names exactly.
fn list_containers(runtime: &dyn ContainerRuntime, container: &str, all: bool) -> Result<Vec<String>> {
    let mut args = vec!["ps".to_string()];
    if all {
        args.push("--all".to_string());
    }
    args.extend([
        "--filter".to_string(),
        format!("name=^{}$", container),
        "--format".to_string(),
        "{{json .}}".to_string(),
    ]);

    let output = runtime.capture(&args)?;
    if !output.success() {
        return Err(DevconError::runtime_op(
            "list containers",
            container,
            output.stderr.trim(),
        ));
    }

    let mut names = Vec::new();
    for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
        let row: ContainerRow = serde_json::from_str(line).map_err(|e| {
            DevconError::runtime_op("list containers", container, format!("unexpected listing output: {}", e))
        })?;
        names.push(row.names);
    }
    Ok(names)
}
