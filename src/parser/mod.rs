// ABOUTME: Parser module for GitHub Actions workflow files
// ABOUTME: Exports document loading, pattern checks, and structural validation

pub mod error;
pub mod patterns;
pub mod validation;
pub mod workflow;

pub use error::{ExpectedType, ParserError, ValidationError};
pub use validation::{ValidationReport, WorkflowValidator, DEFAULT_RELEASE_TAG};
pub use workflow::{WorkflowDocument, WorkflowParser};
