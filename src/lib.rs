//! todo-report - reads a project's TODO.md and presents its tasks
//!
//! The file is split into sections at Markdown headers. List items under a
//! section become tasks, classified as completed, in progress or pending
//! from their checkbox, and the report prints per-status counts followed by
//! every section.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{Document, Section, Summary, Task, TaskStatus};
