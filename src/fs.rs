use crate::errors::RemoveError;
use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

/// Streamed directory enumeration: child names in the order the underlying
/// storage yields them, without the `.` and `..` pseudo-entries. Dropping the
/// iterator closes the enumeration handle.
pub type DirEntries = Box<dyn Iterator<Item = io::Result<OsString>>>;

/// Filesystem abstraction boundary for the removal engine.
///
/// Keeping this trait narrow makes it easy to write deterministic tests and
/// allows alternative backends (e.g. an in-memory fs) if a front end needs
/// one. Every operation is fallible and must report failure through the
/// result instead of terminating the process.
pub trait FileSystem: Send + Sync {
    /// Reads entry metadata without following symbolic links.
    fn symlink_metadata(&self, path: &Path) -> crate::Result<Metadata>;

    /// Unlinks a non-directory entry (regular file, symlink, device node, ...).
    fn remove_file(&self, path: &Path) -> crate::Result<()>;

    /// Opens a directory for streamed enumeration.
    fn read_dir(&self, path: &Path) -> crate::Result<DirEntries>;

    /// Removes an empty directory.
    fn remove_dir(&self, path: &Path) -> crate::Result<()>;
}

/// Default filesystem implementation backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn symlink_metadata(&self, path: &Path) -> crate::Result<Metadata> {
        fs::symlink_metadata(path).map_err(|err| RemoveError::io(path, err))
    }

    fn remove_file(&self, path: &Path) -> crate::Result<()> {
        fs::remove_file(path).map_err(|err| RemoveError::io(path, err))
    }

    fn read_dir(&self, path: &Path) -> crate::Result<DirEntries> {
        let entries = fs::read_dir(path).map_err(|err| RemoveError::open_dir(path, err))?;
        Ok(Box::new(entries.map(|entry| entry.map(|e| e.file_name()))))
    }

    fn remove_dir(&self, path: &Path) -> crate::Result<()> {
        fs::remove_dir(path).map_err(|err| RemoveError::io(path, err))
    }
}
