//! Container runtime boundary
//!
//! Every interaction with the external container engine goes through the
//! `ContainerRuntime` trait so the engine logic can be exercised against a
//! recording fake in tests. The real implementation shells out to the
//! `docker` binary.

pub mod docker;

#[cfg(test)]
pub(crate) mod fake;

pub use docker::DockerCli;

use crate::error::Result;

/// Collected result of a non-interactive runtime call.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub status_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status_code == 0
    }
}

/// Operations consumed from the external container engine.
pub trait ContainerRuntime {
    /// Run a runtime subcommand and collect its output.
    fn capture(&self, args: &[String]) -> Result<CommandOutput>;

    /// Run a runtime subcommand with inherited stdio and return its exit
    /// code. Blocks until the command (for attach: the user's shell) exits.
    fn interactive(&self, args: &[String]) -> Result<i32>;
}
