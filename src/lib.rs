// ABOUTME: Main library module for wfcheck, a GitHub Actions workflow checker
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod engine;
pub mod output;
pub mod parser;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use engine::{RunAggregator, RunStatus, RunSummary};
pub use output::{ConsoleReporter, Reporter};
pub use parser::{ValidationError, ValidationReport, WorkflowDocument, WorkflowValidator};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
