//! Report rendering
//!
//! Turns a parsed [`Document`] into the text printed for one TODO file.

use std::fmt::Write;
use std::path::Path;

use crate::domain::{Document, Section, Summary, Task, TaskStatus};
use crate::storage::MarkerStyle;

/// Width of the rule under a report header
const HEADER_RULE_WIDTH: usize = 60;

/// Renders documents as human-readable reports
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    markers: MarkerStyle,
}

impl Reporter {
    pub fn new(markers: MarkerStyle) -> Self {
        Self { markers }
    }

    /// Marker shown in front of a task with the given status
    pub fn marker(&self, status: TaskStatus) -> &'static str {
        match (self.markers, status) {
            (MarkerStyle::Emoji, TaskStatus::Completed) => "✅",
            (MarkerStyle::Emoji, TaskStatus::InProgress) => "🚧",
            (MarkerStyle::Emoji, TaskStatus::Pending) => "📋",
            (MarkerStyle::Emoji, TaskStatus::Unknown) => "❓",
            (MarkerStyle::Ascii, TaskStatus::Completed) => "[x]",
            (MarkerStyle::Ascii, TaskStatus::InProgress) => "[~]",
            (MarkerStyle::Ascii, TaskStatus::Pending) => "[ ]",
            (MarkerStyle::Ascii, TaskStatus::Unknown) => "[?]",
        }
    }

    /// Renders the report for one file
    pub fn render(&self, document: &Document, path: &Path) -> String {
        if document.is_empty() {
            return format!("📄 TODO file found at {} but no tasks detected.", path.display());
        }

        let summary = Summary::of(document);
        let mut out = String::new();

        let _ = writeln!(out, "📄 TODO Report from: {}", path.display());
        out.push_str(&"=".repeat(HEADER_RULE_WIDTH));
        out.push('\n');

        self.render_summary(&mut out, &summary);

        for section in &document.sections {
            self.render_section(&mut out, section);
        }

        // Lines are newline-joined, not newline-terminated
        out.truncate(out.trim_end_matches('\n').len());
        out
    }

    fn render_summary(&self, out: &mut String, summary: &Summary) {
        let _ = writeln!(out);
        let _ = writeln!(out, "📊 Task Summary:");
        let _ = writeln!(out, "   Total Tasks: {}", summary.total);
        let _ = writeln!(out, "   {} Completed: {}", self.marker(TaskStatus::Completed), summary.completed);
        let _ = writeln!(out, "   {} In Progress: {}", self.marker(TaskStatus::InProgress), summary.in_progress);
        let _ = writeln!(out, "   {} Pending: {}", self.marker(TaskStatus::Pending), summary.pending);

        if let Some(rate) = summary.completion_rate() {
            let _ = writeln!(out, "   📈 Completion Rate: {:.1}%", rate);
        }
    }

    fn render_section(&self, out: &mut String, section: &Section) {
        let _ = writeln!(out);
        let _ = writeln!(out, "## {}", section.title);

        if section.is_empty() {
            let _ = writeln!(out, "(No tasks)");
            return;
        }

        for task in &section.tasks {
            let _ = writeln!(out, "{}", self.task_line(task));
        }
    }

    /// One task line, indented two spaces per level past the first
    pub fn task_line(&self, task: &Task) -> String {
        let indent = "  ".repeat(task.level.saturating_sub(1));
        format!("{}{} {}", indent, self.marker(task.status), task.content)
    }
}

/// Message shown when a directory has no TODO file
pub fn no_todo_message(dir: &Path) -> String {
    format!(
        "❌ No TODO.md file found in {}\n\n\
         💡 To use this agent, create a TODO.md file with your tasks.\n   \
         Example format:\n   \
         # My Project TODO\n   \
         \n   \
         ## Completed\n   \
         - [x] Finished task\n   \
         \n   \
         ## In Progress\n   \
         - [~] Current task\n   \
         \n   \
         ## Pending\n   \
         - [ ] Future task",
        dir.display()
    )
}
