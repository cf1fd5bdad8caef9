//! Error types for the file boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reading, writing or choosing board files.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum FileError {
    /// The file could not be opened or read
    #[error("Could not open file '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file could not be created or written
    #[error("Could not write file '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file dialog collaborator failed
    #[error("File dialog failed: {reason}")]
    Dialog { reason: String },
}

impl FileError {
    /// The path involved, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            FileError::Open { path, .. } | FileError::Write { path, .. } => Some(path),
            FileError::Dialog { .. } => None,
        }
    }

    /// Check if the file was missing
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FileError::Open { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }

    pub fn is_open_error(&self) -> bool {
        matches!(self, FileError::Open { .. })
    }

    pub fn is_write_error(&self) -> bool {
        matches!(self, FileError::Write { .. })
    }
}

impl From<FileError> for crate::Error {
    fn from(err: FileError) -> Self {
        crate::Error::File(err)
    }
}
