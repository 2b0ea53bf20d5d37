use rm_cli_core::{
    ConfirmationPrompt, FileSystem, InteractivePrompt, Invocation, RealFileSystem, Remover,
};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};

const INVALID_SYNTAX_MSG: &str =
    "Invalid syntax.\n\nSyntax is:\nrm [-iRr] file...\nrm -f [-iRr] [file...]\n";

/// Runs one invocation against the given collaborators and returns the exit
/// code. Split from `main` so the whole driver can be exercised in tests.
///
/// Failures never stop the run; every remaining target still gets its
/// attempt. In forced mode failures are silent and do not affect the exit
/// code, and an empty target list is allowed.
fn run(
    args: Vec<OsString>,
    fs: &dyn FileSystem,
    prompt: &mut dyn ConfirmationPrompt,
    stderr: &mut dyn Write,
) -> i32 {
    let invocation = Invocation::parse(args);

    if invocation.targets.is_empty() {
        if invocation.options.forced {
            return 0;
        }
        stderr
            .write_all(INVALID_SYNTAX_MSG.as_bytes())
            .expect("unable to write usage to stderr");
        return 1;
    }

    let forced = invocation.options.forced;
    let mut remover = Remover::new(fs, prompt, invocation.options);
    let mut exit_code = 0;
    for target in &invocation.targets {
        if remover.delete_entry(target).is_err() && !forced {
            writeln!(stderr, "rm: Failed to delete '{}'.", target.display())
                .expect("unable to write diagnostic to stderr");
            exit_code = 1;
        }
    }
    exit_code
}

fn main() {
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    std::process::exit(run(
        args,
        &RealFileSystem,
        &mut InteractivePrompt,
        &mut io::stderr().lock(),
    ));
}
