use std::io::{self, BufRead, Write};
use std::path::Path;

/// Asks whether a single entry should be removed.
///
/// The engine consults the prompt before looking at the entry at all, so a
/// declined answer suppresses even the existence check. Implementations other
/// than [`InteractivePrompt`] are mostly useful in tests and embeddings.
pub trait ConfirmationPrompt {
    /// Returns `true` when the entry at `path` may be removed.
    fn confirm(&mut self, path: &Path) -> bool;
}

/// Prompt backed by the process's stdin and stderr.
///
/// The question is written to stderr so it shows up even when stdout is
/// redirected, and the answer is one line of stdin. Only the first character
/// of the line counts: `y` or `Y` affirms, anything else declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct InteractivePrompt;

impl ConfirmationPrompt for InteractivePrompt {
    fn confirm(&mut self, path: &Path) -> bool {
        let mut stderr = io::stderr().lock();
        write!(
            stderr,
            "rm: Do you really want to delete '{}' (y/N)? ",
            path.display()
        )
        .and_then(|()| stderr.flush())
        .expect("unable to write prompt to stderr");

        read_answer(&mut io::stdin().lock())
    }
}

/// Interprets one answer line. Read failures and end of input decline.
fn read_answer(input: &mut impl BufRead) -> bool {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(_) => line
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&'y')),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> bool {
        read_answer(&mut Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn leading_y_affirms_in_either_case() {
        assert!(answer("y\n"));
        assert!(answer("Y\n"));
        assert!(answer("yes please\n"));
    }

    #[test]
    fn anything_else_declines() {
        assert!(!answer("n\n"));
        assert!(!answer("N\n"));
        assert!(!answer(" y\n"));
        assert!(!answer("maybe y\n"));
        assert!(!answer("\n"));
    }

    #[test]
    fn end_of_input_declines() {
        assert!(!answer(""));
    }

    #[test]
    fn only_one_line_is_consumed() {
        let mut input = Cursor::new(b"n\ny\n".to_vec());
        assert!(!read_answer(&mut input));
        assert!(read_answer(&mut input));
    }
}
