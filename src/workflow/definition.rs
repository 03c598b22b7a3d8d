use crate::data::WorkflowInputs;
use crate::error::{TemplateError, WorkflowError};
use crate::step::{self, StepField, StepRecord};
use crate::template;
use crate::ui::{FlowNode, NodeData};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

/// A named, ordered list of recorded steps, as saved by the recorder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Workflow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub steps: Vec<StepRecord>,
    /// Top-level keys the crate does not model, kept untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
struct WorkflowHeader {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Workflow {
    pub fn new(name: impl Into<String>, steps: Vec<StepRecord>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            version: None,
            steps,
            extra: Map::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, WorkflowError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Loads a workflow from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, WorkflowError> {
        let content = fs::read_to_string(path).map_err(|source| WorkflowError::Io {
            path: path.to_string(),
            source,
        })?;
        let workflow = Self::from_json(&content)?;
        tracing::info!(
            path,
            name = workflow.display_name(),
            step_count = workflow.steps.len(),
            "Loaded workflow"
        );
        Ok(workflow)
    }

    /// Validates every step; the first invalid one is reported with its index.
    pub fn from_value(value: Value) -> Result<Self, WorkflowError> {
        let Value::Object(mut object) = value else {
            return Err(WorkflowError::Invalid(
                "workflow must be a JSON object".to_string(),
            ));
        };

        let raw_steps = match object.remove("steps") {
            Some(Value::Array(steps)) => steps,
            Some(_) => {
                return Err(WorkflowError::Invalid(
                    "'steps' must be an array".to_string(),
                ));
            }
            None => return Err(WorkflowError::Invalid("missing 'steps'".to_string())),
        };

        let header: WorkflowHeader = serde_json::from_value(Value::Object(object))?;

        let steps = raw_steps
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                step::validate(raw).map_err(|source| {
                    tracing::warn!(index, error = %source, "Invalid step in workflow");
                    WorkflowError::Step { index, source }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: header.name,
            description: header.description,
            version: header.version,
            steps,
            extra: header.extra,
        })
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Builds one editor node per step, with ids `step-1`, `step-2`, ...
    pub fn nodes(&self) -> Vec<FlowNode> {
        self.steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                FlowNode::new(
                    node_id(index),
                    NodeData::new(step.description.clone(), step.clone()),
                )
            })
            .collect()
    }

    /// Finds the step behind an editor node id produced by [`nodes`](Self::nodes).
    pub fn step_for_node(&self, id: &str) -> Option<&StepRecord> {
        let number: usize = id.strip_prefix("step-")?.parse().ok()?;
        self.steps.get(number.checked_sub(1)?)
    }

    /// Input variables referenced by step URLs and values, in order of first use.
    pub fn required_inputs(&self) -> Result<Vec<String>, TemplateError> {
        let mut names: Vec<String> = Vec::new();
        for step in &self.steps {
            for field in [StepField::Url, StepField::Value] {
                if let Some(text) = step.field(field) {
                    for name in template::placeholders(text)? {
                        if !names.contains(&name) {
                            names.push(name);
                        }
                    }
                }
            }
        }
        Ok(names)
    }

    /// Returns a copy with every step's placeholders filled from `inputs`.
    pub fn with_inputs(&self, inputs: &WorkflowInputs) -> Result<Self, WorkflowError> {
        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                step.with_inputs(inputs)
                    .map_err(|source| WorkflowError::Template { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            steps,
            ..self.clone()
        })
    }
}

impl TryFrom<Value> for Workflow {
    type Error = WorkflowError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

fn node_id(index: usize) -> String {
    format!("step-{}", index + 1)
}
