//! Line storage
//!
//! The catalog never touches files itself; callers move record lines through a [`LineStore`].

use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or writing record lines.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File path
        path: PathBuf,

        /// Underlying IO error
        source: io::Error,
    },

    /// The file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File path
        path: PathBuf,

        /// Underlying IO error
        source: io::Error,
    },
}

/// Reads and writes whole files as lines of text.
pub trait LineStore {
    /// Read every line at `path`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the lines cannot be read.
    fn read_all_lines(&self, path: &Path) -> Result<Vec<String>, StorageError>;

    /// Replace the contents at `path` with `lines`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the lines cannot be written.
    fn write_all_lines(&self, path: &Path, lines: &[String]) -> Result<(), StorageError>;
}

/// [`LineStore`] backed by the local file system.
///
/// A missing file reads as no lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineStore;

impl LineStore for FsLineStore {
    fn read_all_lines(&self, path: &Path) -> Result<Vec<String>, StorageError> {
        match fs::read_to_string(path) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(source) if source.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no file to read");
                Ok(Vec::new())
            }
            Err(source) => Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write_all_lines(&self, path: &Path, lines: &[String]) -> Result<(), StorageError> {
        let contents = lines.iter().fold(String::new(), |mut contents, line| {
            contents.push_str(line);
            contents.push('\n');
            contents
        });

        fs::write(path, contents).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
