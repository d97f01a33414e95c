//! Container lifecycle reconciler
//!
//! Maps the probed container state to exactly one action:
//!
//! - Running: attach an interactive shell.
//! - Stopped: start the container, then attach. A failed start aborts.
//! - Absent: verify the image exists, normalize mounts, create and attach.
//!
//! Fire-and-forget against the runtime's own state management: no retries,
//! no polling. The returned value is the interactive shell's exit code.

use crate::config::Config;
use crate::engine::mounts::{self, MountSpec, DEFAULT_CONTAINER_PATH};
use crate::engine::probe::{image_exists, probe, ContainerState};
use crate::error::{DevconError, Result};
use crate::runtime::ContainerRuntime;

/// Shell opened inside the container.
const CONTAINER_SHELL: &str = "/bin/bash";

/// Probe the container and perform the single matching action.
pub fn reconcile(runtime: &dyn ContainerRuntime, config: &Config) -> Result<i32> {
    let state = probe(runtime, &config.container)?;
    if config.verbose {
        println!("Container '{}' is {:?}", config.container, state);
    }

    match state {
        ContainerState::Running => {
            println!("Attaching to running container '{}'", config.container);
            attach(runtime, config)
        }
        ContainerState::Stopped => {
            println!("Resuming stopped container '{}'", config.container);
            start(runtime, config)?;
            attach(runtime, config)
        }
        ContainerState::Absent => {
            if !image_exists(runtime, &config.image)? {
                return Err(DevconError::Precondition(format!(
                    "image '{}' not found. Run `devcon build` first",
                    config.image
                )));
            }
            let mounts = mounts::normalize(&config.mounts, &config.workdir)?;
            println!(
                "Creating container '{}' from image '{}'",
                config.container, config.image
            );
            create(runtime, config, &mounts)
        }
    }
}

fn start(runtime: &dyn ContainerRuntime, config: &Config) -> Result<()> {
    let output = runtime.capture(&["start".to_string(), config.container.clone()])?;
    if !output.success() {
        return Err(DevconError::runtime_op(
            "start",
            &config.container,
            output.stderr.trim(),
        ));
    }
    Ok(())
}

fn attach(runtime: &dyn ContainerRuntime, config: &Config) -> Result<i32> {
    let args = vec![
        "exec".to_string(),
        "-it".to_string(),
        config.container.clone(),
        CONTAINER_SHELL.to_string(),
    ];
    let code = runtime.interactive(&args)?;
    check_runtime_code("attach", &config.container, code)
}

fn create(runtime: &dyn ContainerRuntime, config: &Config, mounts: &[MountSpec]) -> Result<i32> {
    let mut args = vec![
        "run".to_string(),
        "-it".to_string(),
        "--name".to_string(),
        config.container.clone(),
        "--user".to_string(),
        config.username.clone(),
        "--workdir".to_string(),
        DEFAULT_CONTAINER_PATH.to_string(),
    ];
    for mount in mounts {
        if config.verbose {
            println!("Binding {}", mount.bind_flag());
        }
        args.push("-v".to_string());
        args.push(mount.bind_flag());
    }
    args.push(config.image.clone());
    args.push(CONTAINER_SHELL.to_string());

    let code = runtime.interactive(&args)?;
    check_runtime_code("create", &config.container, code)
}

/// Docker reserves 125-127 for its own failures (daemon error, command not
/// invocable, command not found); anything else is the shell's exit code
/// and propagates to the caller.
fn check_runtime_code(action: &str, target: &str, code: i32) -> Result<i32> {
    if (125..=127).contains(&code) {
        return Err(DevconError::runtime_op(
            action,
            target,
            format!("runtime exited with status {}", code),
        ));
    }
    Ok(code)
}
