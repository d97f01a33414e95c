//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "devcon")]
#[command(author, version, about = "Manage a disposable Docker-based development container", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<SubCommand>,

    /// Image name to build and run
    #[arg(long, global = true, value_name = "NAME", default_value = "devcon-image")]
    pub image_name: String,

    /// Container name to manage
    #[arg(long, global = true, value_name = "NAME", default_value = "devcon")]
    pub container_name: String,

    /// User to run as inside the container
    #[arg(long, global = true, value_name = "NAME", default_value = "dev")]
    pub username: String,

    /// Path to the Dockerfile used by `build`
    #[arg(long, global = true, value_name = "PATH", default_value = "Dockerfile")]
    pub dockerfile: PathBuf,

    /// Bind mount in the form HOSTPATH[:CONTAINERPATH] (repeatable)
    #[arg(long = "mount", global = true, value_name = "HOSTPATH[:CONTAINERPATH]")]
    pub mounts: Vec<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubCommand {
    /// Enter the container, creating or resuming it as needed (default)
    #[default]
    Run,

    /// Build the image from the Dockerfile
    Build,

    /// Stop the container
    Stop,

    /// Remove the container and its image (best-effort)
    Clean,

    /// Clean, then build the image again
    Rebuild,
}
