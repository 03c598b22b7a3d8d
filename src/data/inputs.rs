use crate::error::WorkflowError;
use ahash::AHashMap;
use serde_json::Value;
use std::fs;

/// One row of input values used to fill `{placeholders}` in a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowInputs {
    values: AHashMap<String, String>,
}

impl WorkflowInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an input row from a JSON object file.
    pub fn from_file(path: &str) -> Result<Self, WorkflowError> {
        let content = fs::read_to_string(path).map_err(|source| WorkflowError::Io {
            path: path.to_string(),
            source,
        })?;
        let value: Value = serde_json::from_str(&content)?;
        Self::from_json(&value)
    }

    /// Builds inputs from a JSON object. Scalars are stringified, `null` becomes "".
    pub fn from_json(value: &Value) -> Result<Self, WorkflowError> {
        let object = value
            .as_object()
            .ok_or_else(|| WorkflowError::Invalid("inputs must be a JSON object".to_string()))?;

        let mut values = AHashMap::with_capacity(object.len());
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                Value::Array(_) | Value::Object(_) => {
                    return Err(WorkflowError::Invalid(format!(
                        "input '{}' must be a scalar value",
                        key
                    )));
                }
            };
            values.insert(key.clone(), text);
        }
        Ok(Self { values })
    }

    /// Parses a `key=value` assignment as given on the command line.
    pub fn parse_assignment(assignment: &str) -> Result<(String, String), WorkflowError> {
        match assignment.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.to_string()))
            }
            _ => Err(WorkflowError::Invalid(format!(
                "expected key=value, got '{}'",
                assignment
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a reference to the raw values.
    pub fn values(&self) -> &AHashMap<String, String> {
        &self.values
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for WorkflowInputs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Extend<(String, String)> for WorkflowInputs {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
