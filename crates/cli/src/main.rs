// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Whiplace CLI entry point.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use whiplace::cli::Cli;
use whiplace::error::ExitCode;

mod cmd_replace;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("WHIPLACE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("whiplace: {}", e);
            match e.downcast_ref::<whiplace::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cmd_replace::run(&cli)
}
