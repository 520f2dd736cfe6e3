//! Domain models for the TODO report
//!
//! Parsing, status classification and summarizing, without any I/O concerns.

mod status;
mod document;
mod parser;
mod summary;

pub use status::TaskStatus;
pub use document::{Document, Section, Task};
pub use parser::{build_document, indent_level, parse_header, parse_task, Header};
pub use summary::Summary;
