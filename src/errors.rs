//! Defines library error types.
//!
//! Every failure of a combine run surfaces as one [`Error`] variant carrying
//! enough context (usually the offending path) to be shown to the user as a
//! single human-readable message.

use std::path::Path;
use thiserror::Error;

/// Errors produced by discovery, combining and the filesystem adapters.
#[derive(Error, Debug)]
pub enum Error {
    /// The configured input folder does not exist.
    #[error("Input directory not found: '{path}'")]
    DirectoryNotFound {
        /// The input folder as configured.
        path: String,
    },

    /// Discovery finished but no file survived the extension and exclusion filters.
    #[error("No '{extension}' files found under '{path}' after applying exclusions")]
    NoMatchingFiles {
        /// The normalized extension that was searched for.
        extension: String,
        /// The input folder that was searched.
        path: String,
    },

    /// A source file could not be read (permissions, invalid UTF-8, removed mid-run).
    #[error("Failed to read source file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created, written, flushed or removed.
    #[error("Failed to write output file '{path}': {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem access failure (listing, metadata, canonicalization).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration settings.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Library result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Creates an [`Error::Io`] with path context.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Creates an [`Error::Read`] with path context.
pub fn read_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Read {
        path: path.as_ref().display().to_string(),
        source,
    }
}

/// Creates an [`Error::Write`] with path context.
pub fn write_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Write {
        path: path.as_ref().display().to_string(),
        source,
    }
}
