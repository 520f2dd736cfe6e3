//! Parsed document model
//!
//! A [`Document`] is a flat list of [`Section`]s, each holding the [`Task`]s
//! that followed its header. All values are built once by the parser and
//! never mutated afterwards.

use super::parser;
use super::status::TaskStatus;

/// A single actionable list item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Item text with list markers and surrounding whitespace removed (never empty)
    pub content: String,

    /// Status taken from the checkbox marker
    pub status: TaskStatus,

    /// 1-based nesting depth: one level per two leading whitespace characters
    pub level: usize,

    /// 1-based line number in the source document
    pub source_line: usize,
}

/// A header and the tasks collected under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Header text without the leading `#` marker
    pub title: String,

    /// Number of `#` in the header (informational, sections are never nested)
    pub depth: u8,

    /// Tasks in document order
    pub tasks: Vec<Task>,

    /// Line on which the section was closed: the next header's line, or the
    /// document's line count for the final section
    pub source_line: usize,
}

impl Section {
    /// Keyword guess at what the section holds, based on its title
    pub fn category(&self) -> TaskStatus {
        TaskStatus::from_section_title(&self.title)
    }

    /// Returns true if the section has no tasks
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// One parsed task-list file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    /// Parses Markdown text into sections and tasks
    ///
    /// Never fails: lines that are neither headers nor tasks are skipped.
    pub fn parse(text: &str) -> Self {
        parser::build_document(text.lines())
    }

    /// Returns true if no headers were found
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates over every task across all sections, in document order
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.sections.iter().flat_map(|s| s.tasks.iter())
    }
}
