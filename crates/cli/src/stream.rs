// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Chunked input processing.
//!
//! Inputs are read one chunk at a time and each chunk is substituted on
//! its own (see [`crate::matcher`]). With [`Chunking::Line`] a chunk is a
//! line including its `\n`; with [`Chunking::Whole`] the input is read
//! completely and matched as a single chunk.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::matcher::{ChunkStats, StreamMatcher};

/// How input is divided into independently matched chunks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chunking {
    /// One chunk per line. Patterns never match across line breaks.
    #[default]
    Line,
    /// The whole input is a single chunk.
    Whole,
}

/// An input to substitute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Interpret a command-line argument; `-` means stdin.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Input::Stdin
        } else {
            Input::File(arg.to_path_buf())
        }
    }

    /// Path used in error messages.
    pub fn label(&self) -> &Path {
        match self {
            Input::Stdin => Path::new("<stdin>"),
            Input::File(path) => path,
        }
    }

    fn open(&self) -> io::Result<Box<dyn BufRead>> {
        Ok(match self {
            Input::Stdin => Box::new(io::stdin().lock()),
            Input::File(path) => Box::new(BufReader::new(File::open(path)?)),
        })
    }
}

/// Totals over every chunk of one or more inputs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreamStats {
    pub chunks: usize,
    pub totals: ChunkStats,
}

impl std::ops::AddAssign for StreamStats {
    fn add_assign(&mut self, other: Self) {
        self.chunks += other.chunks;
        self.totals += other.totals;
    }
}

/// Open `input` and substitute it into `out`.
///
/// `output` names the sink in write errors.
pub fn substitute<W: Write + ?Sized>(
    matcher: &StreamMatcher<'_>,
    chunking: Chunking,
    input: &Input,
    out: &mut W,
    output: &Path,
) -> Result<StreamStats> {
    let read_err = |source| Error::Io {
        path: input.label().to_path_buf(),
        source,
    };
    let reader = input.open().map_err(read_err)?;

    let stats = run(matcher, chunking, reader, out).map_err(|e| match e {
        StreamError::Read(source) => read_err(source),
        StreamError::Write(source) => Error::Io {
            path: output.to_path_buf(),
            source,
        },
    })?;

    tracing::debug!(
        input = %input.label().display(),
        chunks = stats.chunks,
        bytes = stats.totals.bytes,
        replacements = stats.totals.replacements,
        "substituted input"
    );
    Ok(stats)
}

/// Which side of the stream failed.
#[derive(Debug)]
pub enum StreamError {
    Read(io::Error),
    Write(io::Error),
}

/// Substitute every chunk of `input` into `out`.
pub fn run<R: BufRead, W: Write + ?Sized>(
    matcher: &StreamMatcher<'_>,
    chunking: Chunking,
    mut input: R,
    out: &mut W,
) -> std::result::Result<StreamStats, StreamError> {
    let mut stats = StreamStats::default();
    let mut chunk = Vec::new();

    loop {
        chunk.clear();
        let read = match chunking {
            Chunking::Line => input.read_until(b'\n', &mut chunk),
            Chunking::Whole => input.read_to_end(&mut chunk),
        }
        .map_err(StreamError::Read)?;
        if read == 0 {
            break;
        }

        stats.totals += matcher
            .process(&chunk, out)
            .map_err(StreamError::Write)?;
        stats.chunks += 1;

        if chunking == Chunking::Whole {
            break;
        }
    }

    Ok(stats)
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
