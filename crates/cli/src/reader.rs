// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated reading of pattern files.
//!
//! Pattern files are loaded whole before the trie is built, so they are
//! capped at [`MAX_FILE_SIZE`]. Input streams never go through here; they
//! are read chunk by chunk in [`crate::stream`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log a notice about large pattern files (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum pattern file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Size-gated file reader.
#[derive(Debug, Clone)]
pub struct FileReader {
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file as bytes, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size.
    pub fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large pattern file"
            );
        }

        let mut buffer = Vec::with_capacity(size as usize);
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut buffer))
            .map_err(io_err)?;

        Ok(buffer)
    }

    /// Read a file that must be valid UTF-8.
    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        String::from_utf8(self.read(path)?).map_err(|_| Error::InvalidUtf8 {
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
