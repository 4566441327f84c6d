// ABOUTME: Runs the workflow validator over an ordered list of candidate files
// ABOUTME: Skips files that do not exist and tallies the rest into a run summary

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use super::result::RunSummary;
use crate::output::Reporter;
use crate::parser::WorkflowValidator;

pub struct RunAggregator {
    validator: WorkflowValidator,
}

impl RunAggregator {
    pub fn new(validator: WorkflowValidator) -> Self {
        Self { validator }
    }

    /// Validate each candidate in order, reporting as it goes.
    ///
    /// Files are checked one at a time. Only a failure to write the report
    /// is returned as an error.
    pub async fn run<R: Reporter>(
        &self,
        paths: &[PathBuf],
        reporter: &mut R,
    ) -> io::Result<RunSummary> {
        let mut summary = RunSummary::new();
        info!("Checking {} candidate workflow files", paths.len());

        for path in paths {
            if !Self::exists(path).await {
                warn!("Skipping missing workflow file: {}", path.display());
                reporter.file_skipped(path)?;
                summary.skip(path.clone());
                continue;
            }

            reporter.file_started(path)?;
            let report = self.validator.validate_file(path).await;
            reporter.file_report(path, &report)?;

            debug!(
                "{}: valid={} errors={} warnings={}",
                path.display(),
                report.is_valid,
                report.errors.len(),
                report.warnings.len()
            );
            summary.record(path.clone(), report);
        }

        info!("Run finished: {}", summary.summary_line());
        reporter.summary(&summary)?;
        Ok(summary)
    }

    async fn exists(path: &Path) -> bool {
        fs::try_exists(path).await.unwrap_or(false)
    }
}

impl Default for RunAggregator {
    fn default() -> Self {
        Self::new(WorkflowValidator::new())
    }
}
