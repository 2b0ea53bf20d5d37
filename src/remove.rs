use crate::errors::RemoveError;
use crate::fs::FileSystem;
use crate::options::Options;
use crate::prompt::ConfirmationPrompt;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Removal engine. Applies the scanned flag state to one entry at a time,
/// borrowing its filesystem backend and confirmation prompt from the caller.
pub struct Remover<'a> {
    fs: &'a dyn FileSystem,
    prompt: &'a mut dyn ConfirmationPrompt,
    options: Options,
}

impl<'a> Remover<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        prompt: &'a mut dyn ConfirmationPrompt,
        options: Options,
    ) -> Self {
        Remover {
            fs,
            prompt,
            options,
        }
    }

    /// Removes one entry.
    ///
    /// In interactive mode the prompt is consulted first, before the entry is
    /// even stat'ed, and declining counts as success. Symbolic links are never
    /// followed: the link itself is the entry. Directories are refused unless
    /// recursive mode is on, in which case their contents go first.
    pub fn delete_entry(&mut self, path: &Path) -> crate::Result<()> {
        if self.options.interactive && !self.prompt.confirm(path) {
            return Ok(());
        }

        let metadata = self.fs.symlink_metadata(path)?;
        if metadata.is_dir() {
            if self.options.recursive {
                self.delete_tree(path)
            } else {
                Err(RemoveError::not_recursive(path))
            }
        } else {
            self.fs.remove_file(path)
        }
    }

    /// Removes a directory's children, then the directory itself.
    ///
    /// A child failure neither stops the walk nor decides the outcome: the
    /// final `remove_dir` does. A directory with a surviving child fails
    /// there with the OS's not-empty error. Enumeration errors end the walk
    /// early, and a failed path-buffer allocation abandons the directory
    /// altogether.
    fn delete_tree(&mut self, dir: &Path) -> crate::Result<()> {
        let entries = self.fs.read_dir(dir)?;
        for entry in entries {
            let Ok(name) = entry else { break };
            let child = join_child(dir, &name)?;
            let _ = self.delete_entry(&child);
        }
        self.fs.remove_dir(dir)
    }
}

/// Joins a child name onto its directory's path, reporting allocation
/// failure instead of aborting the process on it.
fn join_child(dir: &Path, name: &OsStr) -> crate::Result<PathBuf> {
    let mut buf = OsString::new();
    buf.try_reserve(dir.as_os_str().len() + name.len() + 1)?;
    buf.push(dir.as_os_str());
    let mut child = PathBuf::from(buf);
    child.push(name);
    Ok(child)
}
