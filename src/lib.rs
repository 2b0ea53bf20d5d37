//! Shared Rust foundation for the `rm` command line front end.
//! This crate intentionally stays dependency-light and focuses on stable,
//! reusable primitives: argument scanning, the removal engine, and the
//! filesystem and prompt boundaries it talks through.

pub mod errors;
pub mod fs;
pub mod options;
pub mod prompt;
pub mod remove;

pub use errors::{RemoveError, Result};
pub use fs::{DirEntries, FileSystem, RealFileSystem};
pub use options::{Invocation, Options};
pub use prompt::{ConfirmationPrompt, InteractivePrompt};
pub use remove::Remover;

/// Re-export a small stable API surface for front-end crates.
pub mod prelude {
    pub use crate::{
        errors::{RemoveError, Result},
        fs::{FileSystem, RealFileSystem},
        options::{Invocation, Options},
        prompt::{ConfirmationPrompt, InteractivePrompt},
        remove::Remover,
    };
}
