//! todo-report - print a status report for a project's TODO.md

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = todo_report::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
