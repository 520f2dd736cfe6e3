//! Per-status task counts for a document

use super::document::Document;
use super::status::TaskStatus;

/// Task counts across every section of a document
///
/// Unknown-status tasks only contribute to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub completed: usize,
    pub in_progress: usize,
    pub pending: usize,
    pub total: usize,
}

impl Summary {
    /// Counts tasks by status
    pub fn of(document: &Document) -> Self {
        document.tasks().fold(Self::default(), |mut summary, task| {
            match task.status {
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Pending => summary.pending += 1,
                TaskStatus::Unknown => {}
            }
            summary.total += 1;
            summary
        })
    }

    /// Tasks counted in `total` but in none of the status buckets
    pub fn unknown(&self) -> usize {
        self.total - self.completed - self.in_progress - self.pending
    }

    /// Percentage of tasks completed, or `None` for an empty document
    pub fn completion_rate(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.completed as f64 / self.total as f64 * 100.0)
    }
}
