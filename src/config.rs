//! Invocation configuration
//!
//! The original tool this replaces kept its image/container/user names in
//! mutable globals. Here everything an action needs is collected once from
//! the parsed arguments into an immutable `Config` and passed down
//! explicitly, including the working directory captured at startup so that
//! mount defaulting does not depend on ambient process state.

use std::env;
use std::path::PathBuf;

use crate::cli::Args;
use crate::engine::mounts::RawMount;
use crate::error::Result;

/// Immutable per-invocation configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Image name used by `build` and container creation.
    pub image: String,
    /// Name of the single managed container.
    pub container: String,
    /// User the container runs as.
    pub username: String,
    /// Dockerfile consumed by `build`.
    pub dockerfile: PathBuf,
    /// Parsed `--mount` specifications, in input order.
    pub mounts: Vec<RawMount>,
    /// Directory the tool was invoked from; anchors the default mount.
    pub workdir: PathBuf,
    /// Verbose diagnostics.
    pub verbose: bool,
}

impl Config {
    /// Build a `Config` from parsed arguments.
    ///
    /// Mount specifications are parsed here so that a malformed spec is
    /// reported as a configuration error before any runtime call is made.
    pub fn from_args(args: &Args) -> Result<Self> {
        let mounts = args
            .mounts
            .iter()
            .map(|raw| RawMount::parse(raw))
            .collect::<Result<Vec<_>>>()?;

        Ok(Config {
            image: args.image_name.clone(),
            container: args.container_name.clone(),
            username: args.username.clone(),
            dockerfile: args.dockerfile.clone(),
            mounts,
            workdir: env::current_dir()?,
            verbose: args.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Args {
        Args::parse_from(argv.iter().copied())
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(&parse(&["devcon"])).unwrap();
        assert_eq!(config.image, "devcon-image");
        assert_eq!(config.container, "devcon");
        assert_eq!(config.username, "dev");
        assert!(config.mounts.is_empty());
        assert!(config.workdir.is_absolute());
    }

    #[test]
    fn test_mounts_parsed_in_order() {
        let args = parse(&["devcon", "--mount", "/a", "--mount", "/b:/srv/b"]);
        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.mounts.len(), 2);
        assert_eq!(config.mounts[0].host, "/a");
        assert_eq!(config.mounts[1].container, "/srv/b");
    }

    #[test]
    fn test_malformed_mount_is_config_error() {
        let args = parse(&["devcon", "--mount", "/a:/b:/c"]);
        assert!(Config::from_args(&args).is_err());
    }
}
