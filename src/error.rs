use std::fmt;
use thiserror::Error;

/// What went wrong with a single field of a step record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    /// A required field is absent.
    Missing,
    /// The field is present but has the wrong JSON shape.
    WrongShape {
        expected: &'static str,
        found: &'static str,
    },
    /// `type` holds a string that is not one of the known step kinds.
    UnknownKind(String),
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing => write!(f, "is required but missing"),
            Problem::WrongShape { expected, found } => {
                write!(f, "expected {}, but found {}", expected, found)
            }
            Problem::UnknownKind(kind) => write!(f, "'{}' is not a recognized step type", kind),
        }
    }
}

/// A single failed field, keyed by its wire name (e.g. `tabId`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub problem: Problem,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}", self.field, self.problem)
    }
}

/// Raised when raw input does not conform to the step record shape.
///
/// Every failing field is reported, not only the first one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid step record: {}", format_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    pub(crate) fn single(field: &'static str, problem: Problem) -> Self {
        Self {
            issues: vec![FieldIssue { field, problem }],
        }
    }

    /// Returns the issue recorded for `field`, if any.
    pub fn issue_for(&self, field: &str) -> Option<&FieldIssue> {
        self.issues.iter().find(|issue| issue.field == field)
    }

    pub fn has_issue(&self, field: &str) -> bool {
        self.issue_for(field).is_some()
    }
}

fn format_issues(issues: &[FieldIssue]) -> String {
    itertools::join(issues, "; ")
}

/// Errors that can occur while loading a workflow file.
#[derive(Error, Debug)]
pub enum WorkflowError {
    #[error("Could not read workflow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse workflow JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Step {index} is invalid: {source}")]
    Step {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Step {index} could not be filled with inputs: {source}")]
    Template {
        index: usize,
        #[source]
        source: TemplateError,
    },

    #[error("Invalid workflow: {0}")]
    Invalid(String),
}

/// Errors raised while substituting `{placeholders}` into recorded text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Input variable '{0}' is not provided")]
    MissingVariable(String),

    #[error("Unbalanced '{brace}' at byte {position} in template")]
    UnbalancedBrace { brace: char, position: usize },
}

/// Errors raised while evaluating a stop condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Failed to evaluate condition '{condition}': {message}")]
    Script { condition: String, message: String },

    #[error("expected_text is required for a contains_text check")]
    MissingExpectedText,

    #[error("Unsupported DOM check type: '{0}'")]
    UnsupportedCheck(String),

    #[error("Step is not a conditional stop")]
    NotConditional,

    #[error(transparent)]
    Template(#[from] TemplateError),
}
