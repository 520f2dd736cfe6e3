//! Line recognizers and the single-pass document builder
//!
//! Each raw line is classified as a header, a task, or neither. Headers are
//! checked first; a line that is a header is never also a task.
//!
//! ## Recognized forms
//!
//! | Line | Result |
//! |------|--------|
//! | `# Title` .. `###### Title` | Header (depth = number of `#`) |
//! | `- [x] text`, `- [X] text` | Task, completed |
//! | `- [ ] text` | Task, pending |
//! | `- [~] text`, `- [o] text` | Task, in progress |
//! | `- text`, `* text`, `+ text` | Task, pending |
//!
//! Tasks seen before the first header are dropped.

use std::sync::OnceLock;

use regex::Regex;

use super::document::{Document, Section, Task};
use super::status::TaskStatus;

/// Header marker run is capped at six; extra `#` characters become title text.
const MAX_HEADER_DEPTH: usize = 6;

/// A recognized Markdown header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: String,
    pub depth: u8,
}

fn header_re() -> &'static Regex {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    HEADER_RE.get_or_init(|| {
        Regex::new(&format!(r"^(#{{1,{}}})\s*(.+)", MAX_HEADER_DEPTH)).expect("header pattern is valid")
    })
}

fn checkbox_re() -> &'static Regex {
    static CHECKBOX_RE: OnceLock<Regex> = OnceLock::new();
    CHECKBOX_RE.get_or_init(|| Regex::new(r"^\s*-\s*\[([xX ~o])\]\s*(.+)").expect("checkbox pattern is valid"))
}

fn bullet_re() -> &'static Regex {
    static BULLET_RE: OnceLock<Regex> = OnceLock::new();
    BULLET_RE.get_or_init(|| Regex::new(r"^\s*[-*+]\s*(.+)").expect("bullet pattern is valid"))
}

/// Recognizes a header line
///
/// The line is trimmed before matching, so indented headers count. A lone `#`
/// is not a header, but a longer run is: the last `#` becomes the title
/// (`##` is depth 1 titled `#`).
pub fn parse_header(line: &str) -> Option<Header> {
    let caps = header_re().captures(line.trim())?;
    let title = caps[2].trim();

    Some(Header {
        title: title.to_string(),
        depth: caps[1].len() as u8,
    })
}

/// Recognizes a task line
///
/// `line` must be the raw line: indentation is measured before trimming.
/// Returns `None` for blank lines and lines without a list marker.
pub fn parse_task(line: &str, line_number: usize) -> Option<Task> {
    let stripped = line.trim_end();
    if stripped.is_empty() {
        return None;
    }

    let (status, content) = if let Some(caps) = checkbox_re().captures(stripped) {
        let mark = caps[1].chars().next()?;
        (TaskStatus::from_checkbox(mark)?, caps.get(2)?.as_str())
    } else {
        let caps = bullet_re().captures(stripped)?;
        (TaskStatus::Pending, caps.get(1)?.as_str())
    };

    Some(Task {
        content: content.trim().to_string(),
        status,
        level: indent_level(line),
        source_line: line_number,
    })
}

/// Nesting level: every two leading whitespace characters add one, starting at 1
pub fn indent_level(line: &str) -> usize {
    let leading = line.chars().take_while(|c| c.is_whitespace()).count();
    leading / 2 + 1
}

enum BuilderState {
    NoSectionOpen,
    SectionOpen { header: Header, tasks: Vec<Task> },
}

impl BuilderState {
    /// Closes the open section, if any, tagging it with `line_number`
    fn close(self, line_number: usize) -> Option<Section> {
        match self {
            BuilderState::NoSectionOpen => None,
            BuilderState::SectionOpen { header, tasks } => Some(Section {
                title: header.title,
                depth: header.depth,
                tasks,
                source_line: line_number,
            }),
        }
    }
}

/// Folds lines into a document in a single pass
///
/// A section is closed when the next header arrives and is tagged with that
/// header's line number. The last section is tagged with the total line count.
pub fn build_document<'a, I>(lines: I) -> Document
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sections = Vec::new();
    let mut state = BuilderState::NoSectionOpen;
    let mut line_count = 0;

    for (idx, line) in lines.into_iter().enumerate() {
        let line_number = idx + 1;
        line_count = line_number;

        if let Some(header) = parse_header(line) {
            let previous = std::mem::replace(
                &mut state,
                BuilderState::SectionOpen { header, tasks: Vec::new() },
            );
            sections.extend(previous.close(line_number));
            continue;
        }

        if let Some(task) = parse_task(line, line_number) {
            if let BuilderState::SectionOpen { tasks, .. } = &mut state {
                tasks.push(task);
            }
        }
    }

    sections.extend(state.close(line_count));
    Document { sections }
}
