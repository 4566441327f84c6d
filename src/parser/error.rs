// ABOUTME: Error types for workflow parsing and validation
// ABOUTME: Defines the parser failures and the issues recorded against a workflow file

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to read workflow file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl ParserError {
    /// Message of the underlying failure, without the wrapping context
    pub fn detail(&self) -> String {
        match self {
            ParserError::IoError(e) => e.to_string(),
            ParserError::YamlError(e) => e.to_string(),
        }
    }
}

/// Shape a workflow value was expected to have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    Mapping,
    Sequence,
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedType::Mapping => write!(f, "mapping"),
            ExpectedType::Sequence => write!(f, "sequence"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("File read error: {reason}")]
    FileRead { reason: String },

    #[error("YAML syntax error: {message}")]
    YamlSyntax { message: String },

    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("'{field}' must be a {expected}")]
    InvalidType {
        field: String,
        expected: ExpectedType,
    },

    #[error("Line {line}: secrets condition is not wrapped, use ${{{{ secrets.NAME }}}}")]
    UnwrappedSecretCondition { line: usize },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        ValidationError::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid_type(field: impl Into<String>, expected: ExpectedType) -> Self {
        ValidationError::InvalidType {
            field: field.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
