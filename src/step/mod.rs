//! Step records: the recorded browser actions a workflow is made of.

pub mod action;
pub mod kind;
pub mod record;
mod validate;

pub use action::{ElementTarget, Selector, StepAction, variant_fields};
pub use kind::{StepKind, UnknownStepKind};
pub use record::{StepField, StepFields, StepOutput, StepRecord};
pub use validate::validate;
