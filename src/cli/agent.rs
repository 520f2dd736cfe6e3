//! Request handling: locate, parse and render every TODO file in a directory

use std::path::Path;

use super::output::Output;
use super::report::{no_todo_message, Reporter};
use crate::domain::{Document, Summary};
use crate::storage::{read_source, TodoLocator};

/// Width of the rule printed before each file's report
const FILE_RULE_WIDTH: usize = 80;

/// Produces the combined report for one directory
pub struct TodoAgent<'a> {
    locator: TodoLocator,
    reporter: Reporter,
    output: &'a Output,
}

impl<'a> TodoAgent<'a> {
    pub fn new(locator: TodoLocator, reporter: Reporter, output: &'a Output) -> Self {
        Self {
            locator,
            reporter,
            output,
        }
    }

    /// Builds the text printed for the directory
    ///
    /// Unreadable files are reported on the error channel and rendered as if
    /// they held no sections; the remaining files are still processed.
    pub fn handle_request(&self) -> String {
        let files = self.locator.find();
        self.output.verbose_ctx(
            "locate",
            &format!("Found {} TODO file(s) in {}", files.len(), self.locator.dir().display()),
        );

        if files.is_empty() {
            return no_todo_message(self.locator.dir());
        }

        let rule = "=".repeat(FILE_RULE_WIDTH);
        files
            .iter()
            .map(|path| {
                let document = self.parse_file(path);
                format!("\n\n{}\n\n{}", rule, self.reporter.render(&document, path))
            })
            .collect()
    }

    /// Reads and parses one file, falling back to an empty document
    pub fn parse_file(&self, path: &Path) -> Document {
        let text = match read_source(path) {
            Ok(text) => text,
            Err(e) => {
                self.output.error(&e.to_string());
                return Document::default();
            }
        };

        let document = Document::parse(&text);
        self.output.verbose_ctx(
            "parse",
            &format!(
                "{}: {} line(s), {} section(s)",
                path.display(),
                text.lines().count(),
                document.sections.len()
            ),
        );

        if self.output.is_verbose() {
            for section in &document.sections {
                self.output.verbose_ctx(
                    "parse",
                    &format!(
                        "section '{}' (depth {}, looks {}) with {} task(s), closed at line {}",
                        section.title,
                        section.depth,
                        section.category(),
                        section.tasks.len(),
                        section.source_line
                    ),
                );
            }

            let summary = Summary::of(&document);
            self.output.verbose_ctx(
                "parse",
                &format!(
                    "{} task(s): {} completed, {} in progress, {} pending, {} unclassified",
                    summary.total,
                    summary.completed,
                    summary.in_progress,
                    summary.pending,
                    summary.unknown()
                ),
            );
        }

        document
    }
}
