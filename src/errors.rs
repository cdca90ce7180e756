//! Error types for loading sequence files.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a sequence file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("the file '{}' was not found", .path.display())]
    NotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Any other I/O failure while opening or reading the file.
    #[error("error while reading '{}': {source}", .path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl LoadError {
    /// Classifies an I/O error raised for `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound { path }
        } else {
            LoadError::Io { path, source }
        }
    }
}
