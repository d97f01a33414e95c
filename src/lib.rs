//! Devcon - manage a disposable Docker-based development container
//!
//! Devcon probes the runtime for a single named container and performs
//! exactly one action per invocation: attach to it if running, resume and
//! attach if stopped, or create it from the configured image with validated
//! bind mounts if absent. The Docker daemon remains the sole source of
//! truth; nothing is cached or persisted between invocations.
//!
//! # Example
//!
//! ```no_run
//! use devcon::{reconcile, Config, DockerCli};
//! use clap::Parser;
//!
//! let args = devcon::cli::Args::parse_from(["devcon", "run"]);
//! let config = Config::from_args(&args).unwrap();
//! let runtime = DockerCli::discover().unwrap();
//! let exit_code = reconcile(&runtime, &config).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod runtime;

pub use config::Config;
pub use engine::{build, clean, image_exists, probe, rebuild, reconcile, stop, ContainerState, MountSpec, RawMount};
pub use error::{DevconError, Result};
pub use runtime::{CommandOutput, ContainerRuntime, DockerCli};
