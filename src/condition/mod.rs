//! Stop conditions for `conditional_stop` steps.

pub mod dom;
pub mod evaluator;

pub use dom::{DomCheck, DomCondition};
pub use evaluator::{ConditionEvaluator, ScriptEngine, StopReason, truthy};
