use crate::step::StepRecord;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Data attached to a workflow-editor node: a label, the step it stands
/// for, and whatever else the editor chose to store on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    #[serde(rename = "stepData", alias = "step_data")]
    pub step_data: StepRecord,
    /// Keys beyond `label` and `stepData`, kept untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeData {
    pub fn new(label: impl Into<String>, step_data: StepRecord) -> Self {
        Self {
            label: label.into(),
            step_data,
            extra: Map::new(),
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// UI node with ID and data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    pub data: NodeData,
}

impl FlowNode {
    pub fn new(id: impl Into<String>, data: NodeData) -> Self {
        Self {
            id: id.into(),
            node_type: None,
            data,
        }
    }

    pub fn step(&self) -> &StepRecord {
        &self.data.step_data
    }
}
