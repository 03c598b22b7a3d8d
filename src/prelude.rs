//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kiroku crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiroku::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow = Workflow::from_file("path/to/recording.workflow.json")?;
//! for step in &workflow.steps {
//!     println!("{}: {:?}", step.kind, variant_fields(step));
//! }
//! # Ok(())
//! # }
//! ```

// Step model and validation
pub use crate::step::{
    ElementTarget, Selector, StepAction, StepField, StepFields, StepKind, StepOutput, StepRecord,
    validate, variant_fields,
};

// Editor shapes
pub use crate::ui::{FlowNode, MenuView, NodeConfigMenuProps, NodeData, StepView};

// Workflows and inputs
pub use crate::data::WorkflowInputs;
pub use crate::workflow::{IntoWorkflow, Workflow};

// Conditions
pub use crate::condition::{ConditionEvaluator, DomCheck, DomCondition, ScriptEngine, StopReason};

// Formatting
pub use crate::plan::{FormatOptions, StepFormatter};

// Error types
pub use crate::error::{
    ConditionError, FieldIssue, Problem, TemplateError, ValidationError, WorkflowError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
