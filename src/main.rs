//! Devcon CLI - a disposable Docker-based development container

use clap::Parser;
use devcon::cli::{Args, SubCommand};
use devcon::{engine, reconcile, Config, DockerCli};

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> devcon::Result<i32> {
    // Configuration errors are reported before the runtime is touched.
    let command = args.command.unwrap_or_default();
    let config = Config::from_args(&args)?;
    let runtime = DockerCli::discover()?;

    if config.verbose {
        println!("Using runtime at {}", runtime.binary().display());
    }

    match command {
        SubCommand::Run => reconcile(&runtime, &config),
        SubCommand::Build => {
            engine::build(&runtime, &config)?;
            Ok(0)
        }
        SubCommand::Stop => {
            engine::stop(&runtime, &config)?;
            Ok(0)
        }
        SubCommand::Clean => {
            engine::clean(&runtime, &config)?;
            Ok(0)
        }
        SubCommand::Rebuild => {
            engine::rebuild(&runtime, &config)?;
            Ok(0)
        }
    }
}
