//! `cyclebench` - times explicit loops against iterator chains.
//!
//! With no arguments, runs the `small` and `big` profiles and writes one SVG
//! chart per profile into the working directory.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use owo_colors::OwoColorize;
use thiserror::Error;
use tracing::{info, Level};

use cyclebench_config::{BenchConfig, ConfigError, ProfileConfig};
use cyclebench_harness::{BenchError, CompositeRenderer, Harness, SizeSweep};

mod args;

use args::Cli;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bench(#[from] BenchError),

    #[error("cannot determine working directory: {0}")]
    WorkingDir(#[source] std::io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let cwd = std::env::current_dir().map_err(CliError::WorkingDir)?;
    let config = cli.resolve_config(&cwd)?;

    if cli.list_profiles {
        list_profiles(&config);
        return Ok(());
    }

    if !cli.quiet {
        if cli.verbose {
            cyclebench_console::init_with_level(Level::DEBUG);
        } else {
            cyclebench_console::init();
        }
    }

    for profile in config.select_profiles(&cli.profiles)? {
        let written = run_profile(&config, profile)?;
        if cli.quiet {
            for path in written {
                println!("{}", path.display());
            }
        }
    }
    Ok(())
}

fn run_profile(config: &BenchConfig, profile: &ProfileConfig) -> Result<Vec<PathBuf>, CliError> {
    let sweep = SizeSweep::try_from(profile)?;
    let start = Instant::now();

    info!(
        event = "profile_start",
        profile = profile.name.as_str(),
        sizes = sweep.len() as u64,
        repetitions = config.repetitions as u64,
    );

    let harness = Harness::new(sweep.clone()).with_repetitions(config.repetitions);
    let mut renderer = CompositeRenderer::for_formats(&config.formats, &sweep);
    let destination = config.output_dir.join(profile.artifact_name());
    let written = harness.process(&mut renderer, destination)?;

    info!(
        event = "profile_end",
        profile = profile.name.as_str(),
        duration_ms = start.elapsed().as_millis() as u64,
    );
    Ok(written)
}

fn list_profiles(config: &BenchConfig) {
    for profile in &config.profiles {
        println!(
            "{:<12} {:>5} sizes, step {:>7} -> {}",
            profile.name.bold(),
            profile.count,
            profile.step,
            profile.artifact_name()
        );
    }
}
