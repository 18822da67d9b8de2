// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! copy-task - copy a stat between task-results files
//!
//! Entry point for the copy-task CLI application.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use copytask::cli::Cli;
use copytask::commands;
use copytask::config::Settings;
use copytask::error::CopyTaskError;
use copytask::rewrites::TaskRewrites;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<CopyTaskError>()
                .map(CopyTaskError::exit_code)
                .unwrap_or(1);
            // The usage line has already gone to stdout.
            if !matches!(err.downcast_ref::<CopyTaskError>(), Some(CopyTaskError::Usage)) {
                eprintln!("Error: {}", err);
            }
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Usage comes first so a broken settings file cannot hide it.
    let request = commands::copy::parse_request(&cli.args, &mut out)?;

    let settings = Settings::resolve(cli.config.as_deref())?;
    tracing::debug!("Settings: {:?}", settings);

    let copier = TaskRewrites::new(settings);
    commands::copy::run(&request, &copier, &mut out)?;
    Ok(())
}

/// Logs go to stderr; stdout carries only the usage or confirmation line.
fn init_tracing(verbose: u8) {
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    let directive = match verbose {
        0 => None,
        1 => Some("copytask=debug"),
        _ => Some("copytask=trace"),
    };
    if let Some(parsed) = directive.and_then(|d| d.parse().ok()) {
        env_filter = env_filter.add_directive(parsed);
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}
