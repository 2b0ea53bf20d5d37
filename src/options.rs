use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Flag state scanned from the option arguments.
///
/// `forced` and `interactive` are mutually exclusive: whichever appears last
/// wins and clears the other. `recursive` is independent and has no disabling
/// counterpart.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub recursive: bool,
    pub interactive: bool,
    pub forced: bool,
}

impl Options {
    /// Applies one `-xyz` option token, byte by byte. Unrecognized bytes,
    /// the leading dash included, are ignored. The flag bytes are ASCII, so
    /// they can never be mistaken for part of a multi-byte character.
    fn apply(&mut self, token: &OsStr) {
        for &byte in token.as_encoded_bytes() {
            match byte {
                b'f' => {
                    self.forced = true;
                    self.interactive = false;
                }
                b'i' => {
                    self.interactive = true;
                    self.forced = false;
                }
                b'r' | b'R' => self.recursive = true,
                _ => {}
            }
        }
    }
}

/// A scanned command line: option state plus the target paths in order.
#[derive(Debug)]
pub struct Invocation {
    pub options: Options,
    pub targets: Vec<PathBuf>,
}

impl Invocation {
    /// Scans the arguments (program name already stripped). Tokens whose
    /// first byte is `-` are option blocks until the first token whose first
    /// byte is not; that token and everything after it are targets, even
    /// when they look like options.
    pub fn parse(args: Vec<OsString>) -> Self {
        let mut options = Options::default();
        let mut targets = Vec::new();

        let mut iter = args.into_iter();
        for arg in iter.by_ref() {
            if arg.as_encoded_bytes().first() == Some(&b'-') {
                options.apply(&arg);
            } else {
                targets.push(PathBuf::from(arg));
                break;
            }
        }
        targets.extend(iter.map(PathBuf::from));

        Invocation { options, targets }
    }
}
