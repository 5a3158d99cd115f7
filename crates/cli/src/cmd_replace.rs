// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Substitution command implementation.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use whiplace::cli::Cli;
use whiplace::config::{self, Config};
use whiplace::discovery;
use whiplace::error::{Error, ExitCode};
use whiplace::matcher::StreamMatcher;
use whiplace::patterns;
use whiplace::reader::FileReader;
use whiplace::stream::{self, StreamStats};
use whiplace::verbose::VerboseLogger;

/// Check if debug logging is enabled via WHIPLACE_DEBUG env var.
fn debug_logging() -> bool {
    std::env::var("WHIPLACE_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Run the substitution.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let verbose = VerboseLogger::new(cli.verbose || debug_logging());
    let cwd = std::env::current_dir()?;

    let source = discovery::resolve_config(cli.config.as_deref(), &cwd)?;
    verbose.log(&format!("config: {source}"));
    let config = match source.path() {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };

    let separator = cli.separator(&config);
    cli.validate(separator)?;

    // Build the whole trie before touching the output, so a bad pattern
    // set never leaves partial output behind.
    let build_start = Instant::now();
    let trie = patterns::load(&cli.patterns, separator, &FileReader::new())?;
    verbose.trie(&trie);
    verbose.log(&format!("build time: {:?}", build_start.elapsed()));

    if cli.check {
        println!("{}: {} patterns", cli.patterns.display(), trie.len());
        return Ok(ExitCode::Success);
    }

    let (mut out, label) = open_output(cli.output.as_deref())?;
    let matcher = StreamMatcher::new(&trie);
    let chunking = cli.chunking(&config);

    let stream_start = Instant::now();
    let mut stats = StreamStats::default();
    for input in cli.inputs() {
        stats += stream::substitute(&matcher, chunking, &input, &mut out, &label)?;
    }
    out.flush().map_err(|source| Error::Io {
        path: label.clone(),
        source,
    })?;

    verbose.stream(&stats);
    verbose.log(&format!("stream time: {:?}", stream_start.elapsed()));

    Ok(ExitCode::Success)
}

/// Buffered output sink plus the name used for it in errors.
fn open_output(path: Option<&Path>) -> Result<(Box<dyn Write>, PathBuf), Error> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Ok((Box::new(BufWriter::new(file)), path.to_path_buf()))
        }
        None => Ok((
            Box::new(BufWriter::new(io::stdout().lock())),
            PathBuf::from("<stdout>"),
        )),
    }
}
