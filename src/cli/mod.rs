//! # Command-Line Interface
//!
//! ```bash
//! todo-report [DIRECTORY] [--query TEXT] [--config PATH] [--verbose]
//! ```
//!
//! Every TODO file found in DIRECTORY (default: the current directory) is
//! parsed and printed as a report, each preceded by an 80-column rule.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr:
//! ```bash
//! todo-report --verbose ~/project
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the command.

mod app;
mod agent;
mod output;
mod report;
mod request;

pub use app::{run, Cli};
pub use agent::TodoAgent;
pub use output::Output;
pub use report::{no_todo_message, Reporter};
pub use request::{is_todo_request, RequestMatcher, DEFAULT_KEYWORDS};
