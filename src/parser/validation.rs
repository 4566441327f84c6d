// ABOUTME: Workflow validation logic for GitHub Actions workflow files
// ABOUTME: Runs pattern checks, YAML parsing and structural checks and collects a report

use serde_yaml::Value;
use std::path::Path;
use tracing::{debug, info};

use super::error::{ExpectedType, ParserError, ValidationError};
use super::patterns::{self, PatternMatch};
use super::workflow::{key_label, WorkflowDocument, WorkflowParser};

/// Tag marker that identifies a release build trigger under `on.push.tags`
pub const DEFAULT_RELEASE_TAG: &str = "*reF1nd*";

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
    /// Informational findings about the trigger configuration
    pub notes: Vec<String>,
    /// Job names in document order, filled when `jobs` is a mapping
    pub jobs: Vec<String>,
    pub top_level_keys: Vec<String>,
    pub yaml_parsed: bool,
    pub is_valid: bool,
}

pub struct WorkflowValidator {
    release_tag: String,
}

impl WorkflowValidator {
    pub fn new() -> Self {
        Self {
            release_tag: DEFAULT_RELEASE_TAG.to_string(),
        }
    }

    pub fn with_release_tag(mut self, tag: impl Into<String>) -> Self {
        self.release_tag = tag.into();
        self
    }

    /// Read and validate a workflow file.
    ///
    /// A file that cannot be read or decoded yields a failing report with a
    /// single `FileRead` error rather than an `Err`.
    pub async fn validate_file<P: AsRef<Path>>(&self, path: P) -> ValidationReport {
        let path = path.as_ref();
        info!("Validating workflow: {}", path.display());

        match WorkflowParser::new().read_source(path).await {
            Ok(content) => self.validate_source(&content),
            Err(e) => {
                debug!("Could not read {}: {}", path.display(), e);
                ValidationReport::read_failure(&e)
            }
        }
    }

    /// Validate workflow source text
    pub fn validate_source(&self, content: &str) -> ValidationReport {
        let mut report = ValidationReport::new();

        self.check_patterns(content, &mut report);

        match WorkflowDocument::from_yaml(content) {
            Ok(document) => {
                report.yaml_parsed = true;
                report.top_level_keys = document.top_level_keys();
                self.validate_document(&document, &mut report);
            }
            Err(e) => {
                debug!("YAML parse failed: {}", e);
                report.errors.push(ValidationError::YamlSyntax {
                    message: e.detail(),
                });
            }
        }

        report.is_valid = report.yaml_parsed && report.errors.is_empty();
        report
    }

    /// Structural checks and trigger inspection on an already parsed document
    pub fn validate_document(&self, document: &WorkflowDocument, report: &mut ValidationReport) {
        self.validate_required_fields(document, report);
        self.validate_jobs(document, report);
        self.inspect_trigger(document, report);
    }

    fn check_patterns(&self, content: &str, report: &mut ValidationReport) {
        for hit in patterns::scan(content) {
            match hit {
                PatternMatch::UnwrappedSecretCondition { line } => {
                    report
                        .errors
                        .push(ValidationError::UnwrappedSecretCondition { line });
                }
                PatternMatch::EnvComparison { line } => {
                    report.warnings.push(format!(
                        "Line {}: env variable compared in a condition, check whether a secret was meant",
                        line
                    ));
                }
            }
        }
    }

    fn validate_required_fields(&self, document: &WorkflowDocument, report: &mut ValidationReport) {
        if !document.contains_key("name") {
            report.errors.push(ValidationError::missing("name"));
        }

        if !document.has_trigger() {
            report.errors.push(ValidationError::missing("on"));
        }
    }

    fn validate_jobs(&self, document: &WorkflowDocument, report: &mut ValidationReport) {
        let jobs = match document.jobs() {
            None => {
                report.errors.push(ValidationError::missing("jobs"));
                return;
            }
            Some(Value::Mapping(jobs)) => jobs,
            Some(_) => {
                report
                    .errors
                    .push(ValidationError::invalid_type("jobs", ExpectedType::Mapping));
                return;
            }
        };

        if jobs.is_empty() {
            report.warnings.push("No jobs defined".to_string());
        }

        for (key, job) in jobs {
            let job_name = key_label(key);
            self.validate_single_job(&job_name, job, report);
            report.jobs.push(job_name);
        }
    }

    fn validate_single_job(&self, job_name: &str, job: &Value, report: &mut ValidationReport) {
        let Some(job) = job.as_mapping() else {
            report
                .errors
                .push(ValidationError::invalid_type(job_name, ExpectedType::Mapping));
            return;
        };

        if !job.contains_key("runs-on") {
            report
                .errors
                .push(ValidationError::missing(format!("{}.runs-on", job_name)));
        }

        match job.get("steps") {
            None => report
                .errors
                .push(ValidationError::missing(format!("{}.steps", job_name))),
            Some(Value::Sequence(_)) => {}
            Some(_) => report.errors.push(ValidationError::invalid_type(
                format!("{}.steps", job_name),
                ExpectedType::Sequence,
            )),
        }
    }

    /// Notes about how the workflow is triggered; never affects the verdict
    fn inspect_trigger(&self, document: &WorkflowDocument, report: &mut ValidationReport) {
        let Some(trigger) = document.trigger().and_then(Value::as_mapping) else {
            return;
        };

        let tags = trigger
            .get("push")
            .and_then(|push| push.get("tags"))
            .and_then(Value::as_sequence);
        if let Some(tags) = tags {
            if tags
                .iter()
                .any(|tag| tag.as_str() == Some(self.release_tag.as_str()))
            {
                report
                    .notes
                    .push(format!("Release tag trigger found ({})", self.release_tag));
            }
        }

        if trigger.contains_key("workflow_dispatch") {
            report.notes.push("Manual trigger supported".to_string());
        }
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            notes: Vec::new(),
            jobs: Vec::new(),
            top_level_keys: Vec::new(),
            yaml_parsed: false,
            is_valid: false,
        }
    }

    pub fn read_failure(error: &ParserError) -> Self {
        let mut report = Self::new();
        report.errors.push(ValidationError::FileRead {
            reason: error.detail(),
        });
        report
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// The read error, if the file never made it to parsing
    pub fn read_error(&self) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|e| matches!(e, ValidationError::FileRead { .. }))
    }
}

impl Default for WorkflowValidator {
    fn default() -> Self {
        Self::new()
    }
}
