//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::agent::TodoAgent;
use super::output::Output;
use super::report::Reporter;
use super::request::RequestMatcher;
use crate::storage::{Config, TodoLocator};

#[derive(Parser)]
#[command(name = "todo-report")]
#[command(author, version, about = "Reads and presents TODO.md files from a project directory")]
pub struct Cli {
    /// Directory to search for TODO.md files (defaults to current directory)
    pub directory: Option<PathBuf>,

    /// User query/request (for testing request detection)
    #[arg(long, short = 'q', default_value = "")]
    pub query: String,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, env = "TODO_REPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.verbose);

    output.verbose("todo-report starting");

    let config = Config::load(cli.config.as_deref())?;
    output.verbose_ctx("config", &format!("Marker style: {:?}", config.report.markers));

    if !cli.query.is_empty() {
        let matcher = RequestMatcher::new(&config.request.extra_keywords);
        output.verbose_ctx(
            "request",
            &format!(
                "Query {:?} is {}a TODO request",
                cli.query,
                if matcher.is_todo_request(&cli.query) { "" } else { "not " }
            ),
        );
    }

    let locator = match cli.directory {
        Some(dir) => TodoLocator::new(dir),
        None => TodoLocator::current()?,
    };
    for candidate in locator.candidates() {
        output.verbose_ctx("locate", &format!("Checking {}", candidate.display()));
    }

    let agent = TodoAgent::new(locator, Reporter::new(config.report.markers), &output);
    output.report(&agent.handle_request());

    output.verbose("Command completed successfully");
    Ok(())
}
