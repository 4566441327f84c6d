// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides a workflow YAML builder and temporary repository layouts

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

pub const RELEASE_WORKFLOW: &str = ".github/workflows/ref1nd-release.yml";
pub const TEST_WORKFLOW: &str = ".github/workflows/ref1nd-test.yml";

pub enum TriggerKey {
    On,
    BooleanTrue,
    Missing,
}

pub struct TestJob {
    pub id: String,
    pub runs_on: Option<String>,
    pub steps: Option<Vec<String>>,
    pub condition: Option<String>,
}

pub struct TestWorkflowBuilder {
    name: Option<String>,
    trigger: TriggerKey,
    push_tags: Vec<String>,
    workflow_dispatch: bool,
    jobs: Vec<TestJob>,
    jobs_section: bool,
}

impl TestWorkflowBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            trigger: TriggerKey::On,
            push_tags: Vec::new(),
            workflow_dispatch: false,
            jobs: Vec::new(),
            jobs_section: true,
        }
    }

    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    pub fn with_trigger_key(mut self, trigger: TriggerKey) -> Self {
        self.trigger = trigger;
        self
    }

    pub fn with_push_tag(mut self, tag: &str) -> Self {
        self.push_tags.push(tag.to_string());
        self
    }

    pub fn with_workflow_dispatch(mut self) -> Self {
        self.workflow_dispatch = true;
        self
    }

    pub fn without_jobs(mut self) -> Self {
        self.jobs_section = false;
        self
    }

    pub fn add_job(mut self, id: &str) -> Self {
        self.jobs.push(TestJob {
            id: id.to_string(),
            runs_on: Some("ubuntu-latest".to_string()),
            steps: Some(vec!["echo building".to_string()]),
            condition: None,
        });
        self
    }

    pub fn add_job_without_runs_on(mut self, id: &str) -> Self {
        self.jobs.push(TestJob {
            id: id.to_string(),
            runs_on: None,
            steps: Some(vec!["echo building".to_string()]),
            condition: None,
        });
        self
    }

    pub fn add_job_without_steps(mut self, id: &str) -> Self {
        self.jobs.push(TestJob {
            id: id.to_string(),
            runs_on: Some("ubuntu-latest".to_string()),
            steps: None,
            condition: None,
        });
        self
    }

    pub fn add_conditional_job(mut self, id: &str, condition: &str) -> Self {
        self.jobs.push(TestJob {
            id: id.to_string(),
            runs_on: Some("ubuntu-latest".to_string()),
            steps: Some(vec!["echo deploying".to_string()]),
            condition: Some(condition.to_string()),
        });
        self
    }

    pub fn generate_yaml(&self) -> String {
        let mut yaml = String::new();

        if let Some(ref name) = self.name {
            yaml.push_str(&format!("name: {}\n\n", name));
        }

        let key = match self.trigger {
            TriggerKey::On => Some("on"),
            TriggerKey::BooleanTrue => Some("true"),
            TriggerKey::Missing => None,
        };
        if let Some(key) = key {
            yaml.push_str(&format!("{}:\n", key));
            yaml.push_str("  push:\n");
            if self.push_tags.is_empty() {
                yaml.push_str("    branches: [main]\n");
            } else {
                yaml.push_str("    tags:\n");
                for tag in &self.push_tags {
                    yaml.push_str(&format!("      - \"{}\"\n", tag));
                }
            }
            if self.workflow_dispatch {
                yaml.push_str("  workflow_dispatch:\n");
            }
            yaml.push('\n');
        }

        if !self.jobs_section {
            return yaml;
        }

        yaml.push_str("jobs:\n");
        for job in &self.jobs {
            yaml.push_str(&format!("  {}:\n", job.id));
            if let Some(ref runs_on) = job.runs_on {
                yaml.push_str(&format!("    runs-on: {}\n", runs_on));
            }
            if let Some(ref condition) = job.condition {
                yaml.push_str(&format!("    if: {}\n", condition));
            }
            if let Some(ref steps) = job.steps {
                yaml.push_str("    steps:\n");
                yaml.push_str("      - uses: actions/checkout@v4\n");
                for step in steps {
                    yaml.push_str(&format!("      - run: {}\n", step));
                }
            }
        }

        yaml
    }

    pub async fn write_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, self.generate_yaml()).await?;
        Ok(())
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, relative: &str) -> PathBuf {
        self.path().join(relative)
    }

    /// Path of a config file that does not exist, to keep tests off any user config
    pub fn no_config(&self) -> PathBuf {
        self.path().join("no-config.yaml")
    }

    pub async fn create_workflow_file(
        &self,
        relative: &str,
        builder: &TestWorkflowBuilder,
    ) -> PathBuf {
        let workflow_file = self.file(relative);
        builder
            .write_to_file(&workflow_file)
            .await
            .expect("Failed to write workflow file");
        workflow_file
    }

    pub async fn write_raw(&self, relative: &str, content: &[u8]) -> PathBuf {
        let path = self.file(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .expect("Failed to create directory");
        }
        fs::write(&path, content)
            .await
            .expect("Failed to write file");
        path
    }
}

pub fn release_workflow() -> TestWorkflowBuilder {
    TestWorkflowBuilder::new("reF1nd Release")
        .with_push_tag("*reF1nd*")
        .with_workflow_dispatch()
        .add_job("build")
        .add_conditional_job("publish", "${{ secrets.RELEASE_TOKEN != '' }}")
}
