use std::collections::TryReserveError;
use std::{io, path::PathBuf};

/// Failure modes of a single removal attempt.
#[derive(thiserror::Error, Debug)]
pub enum RemoveError {
    /// stat, unlink or rmdir failed at the OS level.
    #[error("I/O error while accessing {0}")]
    Io(PathBuf, #[source] io::Error),

    /// A directory was encountered while recursive mode is off.
    #[error("{0} is a directory and recursive mode is off")]
    DirectoryNotRecursive(PathBuf),

    /// A directory could not be opened for enumeration.
    #[error("could not enumerate directory {0}")]
    OpenDir(PathBuf, #[source] io::Error),

    /// Growing a path buffer failed.
    #[error("could not grow a path buffer")]
    Allocation(#[from] TryReserveError),
}

impl RemoveError {
    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }

    pub fn open_dir(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::OpenDir(path.into(), error)
    }

    pub fn not_recursive(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotRecursive(path.into())
    }
}

/// Shared result alias for the removal engine.
pub type Result<T> = std::result::Result<T, RemoveError>;
