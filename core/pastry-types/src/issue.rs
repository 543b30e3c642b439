//! Field-level validation issues.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// The value has the wrong JSON type, or a required field is missing.
    InvalidType,
    /// A string is too short or a number is not positive.
    TooSmall,
    /// A string is too long.
    TooBig,
    /// A value is not one of the allowed literals.
    InvalidEnumValue,
    /// The payload carries keys the schema does not declare.
    UnrecognizedKeys,
    /// A payload-level rule, e.g. an update with no fields.
    Custom,
}

/// One violated rule, located by a dotted field path (`""` for the payload root).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub field: String,
    pub message: String,
    #[serde(rename = "code")]
    pub kind: IssueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

impl Issue {
    pub fn new(field: impl Into<String>, kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
            expected: None,
            received: None,
        }
    }

    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    #[must_use]
    pub fn with_received(mut self, received: impl Into<String>) -> Self {
        self.received = Some(received.into());
        self
    }

    pub(crate) fn invalid_type(field: impl Into<String>, expected: &str, received: &str) -> Self {
        Self::new(
            field,
            IssueKind::InvalidType,
            format!("Expected {expected}, received {received}"),
        )
        .with_expected(expected)
        .with_received(received)
    }
}

/// Result type for schema validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A payload failed validation. Holds every issue found, in field order.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed with {} issue(s)", .issues.len())]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }
}

impl From<Issue> for ValidationError {
    fn from(issue: Issue) -> Self {
        Self::new(vec![issue])
    }
}
