//! Reads one line of commands from stdin, runs it against a fresh tree, and
//! prints the result of the traversal command, if the line reached one.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut line = String::new();
    if let Err(err) = io::stdin().read_line(&mut line) {
        eprintln!("error: failed to read input: {err}");
        return ExitCode::FAILURE;
    }

    match avl::command::run_line(&line) {
        Ok(output) => {
            println!("{}", output.unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
