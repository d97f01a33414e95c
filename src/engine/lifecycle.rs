//! Image and container lifecycle commands
//!
//! Thin, checked forwarding to the runtime. `clean` is best-effort teardown:
//! each step reports failure and continues, matching the expectation that a
//! half-removed environment can still be cleaned again.

use std::path::Path;

use crate::config::Config;
use crate::error::{DevconError, Result};
use crate::runtime::ContainerRuntime;

/// Build the image from the configured Dockerfile.
pub fn build(runtime: &dyn ContainerRuntime, config: &Config) -> Result<()> {
    if !config.dockerfile.is_file() {
        return Err(DevconError::Precondition(format!(
            "Dockerfile '{}' not found",
            config.dockerfile.display()
        )));
    }

    let context = config
        .dockerfile
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let args = vec![
        "build".to_string(),
        "-t".to_string(),
        config.image.clone(),
        "-f".to_string(),
        config.dockerfile.display().to_string(),
        context.display().to_string(),
    ];

    // Streamed to the terminal so build progress is visible.
    let code = runtime.interactive(&args)?;
    if code != 0 {
        return Err(DevconError::runtime_op(
            "build",
            &config.image,
            format!("exited with status {}", code),
        ));
    }
    println!("Built image '{}'", config.image);
    Ok(())
}

/// Stop the container.
pub fn stop(runtime: &dyn ContainerRuntime, config: &Config) -> Result<()> {
    let output = runtime.capture(&["stop".to_string(), config.container.clone()])?;
    if !output.success() {
        return Err(DevconError::runtime_op(
            "stop",
            &config.container,
            output.stderr.trim(),
        ));
    }
    println!("Stopped container '{}'", config.container);
    Ok(())
}

/// Remove the container and its image. Best-effort: a failing step prints a
/// warning and the next step still runs.
pub fn clean(runtime: &dyn ContainerRuntime, config: &Config) -> Result<()> {
    let steps: [(&str, Vec<String>); 3] = [
        ("stop", vec!["stop".to_string(), config.container.clone()]),
        ("remove container", vec!["rm".to_string(), config.container.clone()]),
        ("remove image", vec!["rmi".to_string(), config.image.clone()]),
    ];

    for (step, args) in steps {
        match runtime.capture(&args) {
            Ok(output) if output.success() => {
                if config.verbose {
                    println!("{}: ok", step);
                }
            }
            Ok(output) => {
                eprintln!("Warning: {} failed: {}", step, output.stderr.trim());
            }
            Err(e) => {
                eprintln!("Warning: {} failed: {}", step, e);
            }
        }
    }
    Ok(())
}

/// Tear the environment down and build the image again.
pub fn rebuild(runtime: &dyn ContainerRuntime, config: &Config) -> Result<()> {
    clean(runtime, config)?;
    build(runtime, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::fake::{err_output, ok_output, FakeRuntime};
    use std::fs::File;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_with_dockerfile(temp_dir: &TempDir) -> Config {
        let dockerfile = temp_dir.path().join("Dockerfile");
        let mut file = File::create(&dockerfile).unwrap();
        writeln!(file, "FROM debian:stable").unwrap();

        Config {
            image: "devcon-image".to_string(),
            container: "devcon".to_string(),
            username: "dev".to_string(),
            dockerfile,
            mounts: Vec::new(),
            workdir: temp_dir.path().to_path_buf(),
            verbose: false,
        }
    }

    #[test]
    fn test_build_missing_dockerfile_makes_no_runtime_calls() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = config_with_dockerfile(&temp_dir);
        config.dockerfile = PathBuf::from("no/such/Dockerfile");

        let runtime = FakeRuntime::new(|_| ok_output(""));
        let err = build(&runtime, &config).unwrap_err();
        assert!(matches!(err, DevconError::Precondition(_)));
        assert!(runtime.recorded().is_empty());
    }

    #[test]
    fn test_build_invokes_runtime_with_tag_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_dockerfile(&temp_dir);
        let runtime = FakeRuntime::new(|_| ok_output(""));

        build(&runtime, &config).unwrap();

        let calls = runtime.recorded();
        assert_eq!(calls[0][0], "build");
        assert!(calls[0].contains(&"devcon-image".to_string()));
        assert!(calls[0].contains(&config.dockerfile.display().to_string()));
    }

    #[test]
    fn test_build_failure_is_runtime_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_dockerfile(&temp_dir);
        let runtime = FakeRuntime::new(|_| ok_output("")).with_interactive_code(1);

        assert!(build(&runtime, &config).is_err());
    }

    #[test]
    fn test_stop_failure_is_runtime_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_dockerfile(&temp_dir);
        let runtime = FakeRuntime::new(|_| err_output("no such container"));

        let err = stop(&runtime, &config).unwrap_err();
        assert!(err.to_string().contains("stop"));
    }

    #[test]
    fn test_clean_continues_past_failures() {
        let temp_dir = TempDir::new().unwrap();
        let config = config_with_dockerfile(&temp_dir);
        let runtime = FakeRuntime::new(|args| match args[0].as_str() {
            "stop" => err_output("no such container"),
            _ => ok_output(""),
        });

        clean(&runtime, &config).unwrap();

        assert!(runtime.invoked("stop"));
        assert!(runtime.invoked("rm"));
        assert!(runtime.invoked("rmi"));
    }
}
