use super::dom::DomCondition;
use crate::data::WorkflowInputs;
use crate::error::ConditionError;
use crate::step::{StepAction, StepRecord};
use crate::template;
use serde_json::Value;

/// Runs a JavaScript expression in the current page and returns its result.
///
/// This is the seam to whatever drives the browser; the crate ships no
/// implementation of its own.
pub trait ScriptEngine {
    fn evaluate(&self, script: &str) -> Result<Value, String>;
}

impl<F> ScriptEngine for F
where
    F: Fn(&str) -> Result<Value, String>,
{
    fn evaluate(&self, script: &str) -> Result<Value, String> {
        self(script)
    }
}

/// Why a conditional stop fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopReason {
    pub condition: String,
    pub message: String,
}

/// Evaluates step conditions through a [`ScriptEngine`].
pub struct ConditionEvaluator<E> {
    engine: E,
}

impl<E: ScriptEngine> ConditionEvaluator<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Evaluates `condition`, coercing the result to a boolean.
    ///
    /// Placeholders are filled from `inputs` leniently. `negate` inverts
    /// the coerced result.
    pub fn evaluate(
        &self,
        condition: &str,
        inputs: Option<&WorkflowInputs>,
        negate: bool,
    ) -> Result<bool, ConditionError> {
        let script = match inputs {
            Some(inputs) => template::render_lenient(condition, inputs),
            None => condition.to_string(),
        };
        tracing::info!(condition = %script, "Evaluating condition");

        let value = self.engine.evaluate(&script).map_err(|message| {
            tracing::error!(condition, error = %message, "Condition evaluation failed");
            ConditionError::Script {
                condition: condition.to_string(),
                message,
            }
        })?;

        let result = match value {
            Value::Bool(b) => b,
            other => {
                let coerced = truthy(&other);
                tracing::warn!(result = %other, coerced, "Condition result was not boolean");
                coerced
            }
        };

        let outcome = result != negate;
        tracing::info!(outcome, original = result, negate, "Condition evaluated");
        Ok(outcome)
    }

    pub fn evaluate_dom(
        &self,
        condition: &DomCondition,
        inputs: Option<&WorkflowInputs>,
    ) -> Result<bool, ConditionError> {
        self.evaluate(&condition.script(inputs), None, false)
    }

    /// Checks a `conditional_stop` step.
    ///
    /// Returns `Some` when the step's condition holds and the workflow
    /// should stop. A step without a condition never stops.
    pub fn should_stop(
        &self,
        step: &StepRecord,
        inputs: Option<&WorkflowInputs>,
    ) -> Result<Option<StopReason>, ConditionError> {
        let StepAction::ConditionalStop {
            condition,
            stop_message,
        } = step.action()
        else {
            return Err(ConditionError::NotConditional);
        };
        let Some(condition) = condition else {
            return Ok(None);
        };

        if !self.evaluate(condition, inputs, false)? {
            return Ok(None);
        }
        let message = stop_message
            .map(str::to_string)
            .unwrap_or_else(|| format!("Condition met: {}", condition));
        Ok(Some(StopReason {
            condition: condition.to_string(),
            message,
        }))
    }
}

/// Truthiness of a script result: `null`, `false`, `0`, `""`, `[]` and `{}` are false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
