//! # Storage Layer
//!
//! The read-only file side of the report: locating TODO files, reading
//! them, and loading user configuration.
//!
//! ## Files
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Task list | Markdown | `<dir>/TODO.md` (or a case variant) |
//! | Config | TOML | `~/.config/todo-report/config.toml` or `--config` |
//!
//! Nothing is ever written.

mod config;
mod locator;

pub use config::{Config, ConfigError, MarkerStyle, ReportConfig, RequestConfig};
pub use locator::{read_source, SourceError, TodoLocator, CANDIDATE_NAMES};
