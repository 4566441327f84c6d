// ABOUTME: Per-file outcome and run summary types
// ABOUTME: Tallies considered and passing files across a multi-file validation run

use std::path::PathBuf;

use crate::parser::ValidationReport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
    /// No candidate file existed
    NothingToCheck,
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub report: ValidationReport,
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    /// Candidates that did not exist; not counted in `total`
    pub skipped: Vec<PathBuf>,
    pub files: Vec<FileOutcome>,
}

impl FileOutcome {
    pub fn passed(&self) -> bool {
        self.report.is_valid
    }
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: PathBuf, report: ValidationReport) {
        self.total += 1;
        if report.is_valid {
            self.passed += 1;
        }
        self.files.push(FileOutcome { path, report });
    }

    pub fn skip(&mut self, path: PathBuf) {
        self.skipped.push(path);
    }

    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn status(&self) -> RunStatus {
        if self.total == 0 {
            RunStatus::NothingToCheck
        } else if self.passed == self.total {
            RunStatus::Passed
        } else {
            RunStatus::Failed
        }
    }

    /// True only when at least one file was checked and all of them passed
    pub fn all_passed(&self) -> bool {
        self.status() == RunStatus::Passed
    }

    pub fn summary_line(&self) -> String {
        format!("{}/{} files passed", self.passed, self.total)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Passed => write!(f, "passed"),
            RunStatus::Failed => write!(f, "failed"),
            RunStatus::NothingToCheck => write!(f, "nothing_to_check"),
        }
    }
}
