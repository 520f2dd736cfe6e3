//! Task status and the two classifiers that produce it
//!
//! A task's status comes from its checkbox marker. A section's status is a
//! keyword guess from its title and never overrides the tasks it holds.

use std::fmt;

/// Completion status of a task (or, heuristically, of a section title)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    Completed,
    InProgress,
    Pending,
    #[default]
    Unknown,
}

impl TaskStatus {
    /// Returns the canonical snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "completed",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Pending => "pending",
            TaskStatus::Unknown => "unknown",
        }
    }

    /// Classifies the character between checkbox brackets (`[x]` -> `'x'`)
    ///
    /// Returns `None` for characters that don't form a recognized checkbox;
    /// such lines fall back to plain-bullet handling.
    pub fn from_checkbox(mark: char) -> Option<Self> {
        match mark {
            'x' | 'X' => Some(TaskStatus::Completed),
            ' ' => Some(TaskStatus::Pending),
            '~' | 'o' => Some(TaskStatus::InProgress),
            _ => None,
        }
    }

    /// Guesses a status from a section title
    ///
    /// Keyword groups are checked in priority order: completed, in progress,
    /// pending. Matching is a case-insensitive substring test.
    pub fn from_section_title(title: &str) -> Self {
        const COMPLETED: &[&str] = &["completed", "done", "finished", "✅"];
        const IN_PROGRESS: &[&str] = &["progress", "working", "current", "🚧"];
        const PENDING: &[&str] = &["pending", "todo", "planned", "upcoming", "📋"];

        let lower = title.to_lowercase();
        let has_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

        if has_any(COMPLETED) {
            TaskStatus::Completed
        } else if has_any(IN_PROGRESS) {
            TaskStatus::InProgress
        } else if has_any(PENDING) {
            TaskStatus::Pending
        } else {
            TaskStatus::Unknown
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_marks() {
        assert_eq!(TaskStatus::from_checkbox('x'), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::from_checkbox('X'), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::from_checkbox(' '), Some(TaskStatus::Pending));
        assert_eq!(TaskStatus::from_checkbox('~'), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::from_checkbox('o'), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::from_checkbox('O'), None);
        assert_eq!(TaskStatus::from_checkbox('-'), None);
    }

    #[test]
    fn section_title_keywords() {
        assert_eq!(TaskStatus::from_section_title("Completed"), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_section_title("DONE this week"), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_section_title("✅ Shipped"), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_section_title("In Progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::from_section_title("Currently working"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::from_section_title("Upcoming"), TaskStatus::Pending);
        assert_eq!(TaskStatus::from_section_title("My Project TODO"), TaskStatus::Pending);
        assert_eq!(TaskStatus::from_section_title("Notes"), TaskStatus::Unknown);
    }

    #[test]
    fn section_keyword_priority() {
        // "done" wins over "todo" and "progress"
        assert_eq!(TaskStatus::from_section_title("Todo: done"), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_section_title("Progress on todo list"), TaskStatus::InProgress);
    }

    #[test]
    fn status_names() {
        assert_eq!(TaskStatus::InProgress.to_string(), "in_progress");
        assert_eq!(TaskStatus::default(), TaskStatus::Unknown);
    }
}
