// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! effest - weighted efficiency-loss estimator
//!
//! Entry point for the effest CLI application.

use clap::Parser;

use effest::cli::{Cli, Commands};
use effest::commands;
use effest::config::CoefficientSet;
use effest::error::{EstimatorError, Result};

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", error_message(&err));
        std::process::exit(1);
    }
}

/// User-facing form of a failed run.
fn error_message(err: &EstimatorError) -> String {
    format!("Error: {}", err)
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    // `-v` turns on crate diagnostics; `RUST_LOG` still takes precedence.
    if cli.verbose > 0 {
        if let Ok(parsed) = "effest=debug".parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Bind coefficients once for the whole run
    let coefficients = match cli.coefficients {
        Some(ref path) => CoefficientSet::load_from(path)?,
        None => CoefficientSet::load()?,
    };

    match cli.command {
        Commands::Analyze(ref args) => {
            commands::analyze::execute(args, coefficients, &cli.format)?;
        }
        Commands::Coefficients => {
            commands::coefficients::execute(&coefficients, &cli.format)?;
        }
    }

    Ok(())
}
