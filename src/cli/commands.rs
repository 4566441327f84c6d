// ABOUTME: Command implementations for the wfcheck CLI
// ABOUTME: Handles execution of the single-file check and multi-file validate commands

use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

use super::config::Config;
use crate::engine::RunAggregator;
use crate::output::formatter::TextFormatter;
use crate::output::{ConsoleReporter, Reporter};
use crate::parser::WorkflowValidator;

/// Check one workflow file. Returns whether it passed.
pub async fn check_workflow(workflow: Option<PathBuf>, config: &Config) -> Result<bool> {
    let path = workflow.unwrap_or_else(|| config.workflow_file.clone());
    let mut reporter = ConsoleReporter::new(io::stdout())
        .with_formatter(TextFormatter::new().with_job_listing(true));

    check_workflow_with(&path, config, &mut reporter).await
}

pub async fn check_workflow_with<R: Reporter>(
    path: &Path,
    config: &Config,
    reporter: &mut R,
) -> Result<bool> {
    info!("Checking workflow file: {}", path.display());

    let validator = validator_for(config);
    reporter.run_started(&format!("Checking workflow file: {}", path.display()))?;

    let report = validator.validate_file(path).await;
    reporter.file_report(path, &report)?;
    reporter.finished(report.is_valid)?;

    info!("Check finished: valid={}", report.is_valid);
    Ok(report.is_valid)
}

/// Validate several workflow files. Returns whether the run passed.
pub async fn validate_workflows(workflows: Vec<PathBuf>, config: &Config) -> Result<bool> {
    let mut reporter = ConsoleReporter::new(io::stdout());
    validate_workflows_with(workflows, config, &mut reporter).await
}

pub async fn validate_workflows_with<R: Reporter>(
    workflows: Vec<PathBuf>,
    config: &Config,
    reporter: &mut R,
) -> Result<bool> {
    let paths = if workflows.is_empty() {
        config.workflow_files.clone()
    } else {
        workflows
    };

    reporter.run_started("Validating workflow syntax...")?;

    let aggregator = RunAggregator::new(validator_for(config));
    let summary = aggregator
        .run(&paths, reporter)
        .await
        .context("Failed to write validation output")?;

    let passed = summary.all_passed();
    reporter.finished(passed)?;
    Ok(passed)
}

fn validator_for(config: &Config) -> WorkflowValidator {
    WorkflowValidator::new().with_release_tag(config.release_tag.clone())
}
