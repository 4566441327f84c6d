// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and the check/validate subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wfcheck")]
#[command(about = "Check GitHub Actions workflow files for syntax and structure problems")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Check a single workflow file, including condition patterns
    Check {
        #[arg(help = "Path to workflow YAML file (defaults to the configured release workflow)")]
        workflow: Option<PathBuf>,
    },

    /// Validate a list of workflow files and print a pass count
    Validate {
        #[arg(help = "Workflow YAML files (defaults to the configured list)")]
        workflows: Vec<PathBuf>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Subcommand to run; `validate` with the configured files when none is given
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Validate {
            workflows: Vec::new(),
        })
    }
}
