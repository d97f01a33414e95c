//! Docker CLI runtime implementation

use std::path::PathBuf;
use std::process::Command;

use super::{CommandOutput, ContainerRuntime};
use crate::error::{DevconError, Result};

/// The `docker` command-line client.
#[derive(Debug, Clone)]
pub struct DockerCli {
    binary: PathBuf,
}

impl DockerCli {
    /// Locate the docker binary on PATH.
    ///
    /// Done once at startup so an unreachable runtime is reported up front
    /// instead of surfacing as a spawn failure mid-action.
    pub fn discover() -> Result<Self> {
        let binary = which::which("docker").map_err(|_| DevconError::RuntimeUnavailable)?;
        Ok(DockerCli { binary })
    }

    /// Path of the docker binary in use.
    pub fn binary(&self) -> &PathBuf {
        &self.binary
    }
}

impl ContainerRuntime for DockerCli {
    fn capture(&self, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(&self.binary).args(args).output()?;
        let status_code = output
            .status
            .code()
            .unwrap_or(if output.status.success() { 0 } else { 1 });
        Ok(CommandOutput {
            status_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn interactive(&self, args: &[String]) -> Result<i32> {
        let status = Command::new(&self.binary).args(args).status()?;
        Ok(status.code().unwrap_or(if status.success() { 0 } else { 1 }))
    }
}
