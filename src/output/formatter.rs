// ABOUTME: Text formatting for validation reports and run summaries
// ABOUTME: Produces the emoji-annotated lines shown on the console

use std::path::Path;

use crate::engine::RunSummary;
use crate::parser::{ValidationError, ValidationReport};

const HEAVY_RULE: usize = 40;
const LIGHT_RULE: usize = 30;

#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    list_jobs: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// List job names under a parsed file instead of its top-level keys
    pub fn with_job_listing(mut self, list_jobs: bool) -> Self {
        self.list_jobs = list_jobs;
        self
    }

    pub fn header(&self, title: &str) -> Vec<String> {
        vec![format!("🔍 {}", title), "=".repeat(HEAVY_RULE)]
    }

    pub fn file_started(&self, path: &Path) -> Vec<String> {
        vec![
            String::new(),
            format!("📄 Validating file: {}", path.display()),
            "-".repeat(LIGHT_RULE),
        ]
    }

    pub fn file_skipped(&self, path: &Path) -> Vec<String> {
        vec![format!("⚠️ {} - file not found, skipping", path.display())]
    }

    pub fn file_report(&self, path: &Path, report: &ValidationReport) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(ValidationError::FileRead { reason }) = report.read_error() {
            lines.push(format!("❌ {} - file read error:", path.display()));
            lines.push(format!("   {}", reason));
            return lines;
        }

        let mut structural = Vec::new();
        let mut conditions = Vec::new();
        for error in &report.errors {
            match error {
                ValidationError::YamlSyntax { message } => {
                    lines.push(format!("❌ {} - YAML syntax error:", path.display()));
                    for detail in message.lines() {
                        lines.push(format!("   {}", detail));
                    }
                }
                ValidationError::UnwrappedSecretCondition { .. } => conditions.push(error),
                other => structural.push(other),
            }
        }

        if report.yaml_parsed {
            lines.push(format!("✅ {} - YAML syntax OK", path.display()));
            if self.list_jobs {
                if !report.jobs.is_empty() {
                    lines.push(format!("✅ Found {} jobs", report.jobs.len()));
                    lines.extend(report.jobs.iter().map(|job| format!("  • {}", job)));
                }
            } else if report.top_level_keys.is_empty() {
                lines.push("   Top-level keys: None".to_string());
            } else {
                lines.push(format!(
                    "   Top-level keys: {}",
                    report.top_level_keys.join(", ")
                ));
            }
        }

        if !conditions.is_empty() {
            lines.push("❌ Condition errors:".to_string());
            lines.extend(conditions.iter().map(|e| format!("   • {}", e)));
        }

        if !structural.is_empty() {
            lines.push("❌ Workflow errors:".to_string());
            lines.extend(structural.iter().map(|e| format!("   • {}", e)));
        } else if report.yaml_parsed {
            lines.push("✅ Workflow structure OK".to_string());
        }

        if report.has_warnings() {
            lines.push("⚠️ Workflow warnings:".to_string());
            lines.extend(report.warnings.iter().map(|w| format!("   • {}", w)));
        }

        lines.extend(report.notes.iter().map(|note| format!("✅ {}", note)));
        lines
    }

    pub fn summary(&self, summary: &RunSummary) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            "=".repeat(HEAVY_RULE),
            format!("📊 Results: {}", summary.summary_line()),
        ];

        if summary.failed() > 0 {
            lines.push(format!("   {} failed:", summary.failed()));
            lines.extend(
                summary
                    .files
                    .iter()
                    .filter(|outcome| !outcome.passed())
                    .map(|outcome| format!("   • {}", outcome.path.display())),
            );
        }
        lines
    }

    pub fn verdict(&self, passed: bool) -> Vec<String> {
        if passed {
            vec!["🎉 All workflow checks passed, ready to commit!".to_string()]
        } else {
            vec!["❌ Fix the issues above before committing.".to_string()]
        }
    }
}
