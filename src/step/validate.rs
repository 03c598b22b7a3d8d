use super::kind::StepKind;
use super::record::{StepField, StepFields, StepOutput, StepRecord};
use crate::error::{FieldIssue, Problem, ValidationError};
use serde_json::{Map, Number, Value};

/// Checks raw JSON against the step record shape and builds a [`StepRecord`].
///
/// Optional fields are passed through as-is; absent and `null` both become
/// `None`. `timestamp` and `tabId` accept any JSON number. Unknown keys are
/// ignored. No kind-specific field is required.
pub fn validate(raw: &Value) -> Result<StepRecord, ValidationError> {
    let Some(object) = raw.as_object() else {
        return Err(ValidationError::single(
            "<record>",
            Problem::WrongShape {
                expected: "object",
                found: json_type(raw),
            },
        ));
    };

    let mut issues = Vec::new();

    let description = match object.get("description") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(other) => {
            issues.push(wrong_shape("description", "string", other));
            None
        }
        None => {
            issues.push(missing("description"));
            None
        }
    };

    let kind = match object.get("type") {
        Some(Value::String(name)) => match name.parse::<StepKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                issues.push(FieldIssue {
                    field: "type",
                    problem: Problem::UnknownKind(name.clone()),
                });
                None
            }
        },
        Some(other) => {
            issues.push(wrong_shape("type", "string", other));
            None
        }
        None => {
            issues.push(missing("type"));
            None
        }
    };

    let timestamp = number_or_null(object, "timestamp", &mut issues);
    let tab_id = number_or_null(object, "tabId", &mut issues);

    let output = object.get("output").cloned().and_then(StepOutput::from_json);
    let fields = collect_fields(object);

    match (description, kind) {
        (Some(description), Some(kind)) if issues.is_empty() => Ok(StepRecord {
            description,
            output,
            timestamp,
            tab_id,
            kind,
            fields,
        }),
        _ => {
            tracing::debug!(issue_count = issues.len(), "Rejected step record");
            Err(ValidationError::new(issues))
        }
    }
}

fn number_or_null(
    object: &Map<String, Value>,
    field: &'static str,
    issues: &mut Vec<FieldIssue>,
) -> Option<Number> {
    match object.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.clone()),
        Some(other) => {
            issues.push(wrong_shape(field, "number or null", other));
            None
        }
    }
}

// Non-string values under a known key are kept verbatim in `other`.
fn collect_fields(object: &Map<String, Value>) -> StepFields {
    let mut fields = StepFields::default();
    for field in StepField::ALL {
        match object.get(field.wire_name()) {
            None | Some(Value::Null) => {}
            Some(Value::String(text)) => fields.set(field, Some(text.clone())),
            Some(other) => {
                fields.other.insert(field.wire_name().to_string(), other.clone());
            }
        }
    }
    fields
}

fn missing(field: &'static str) -> FieldIssue {
    FieldIssue {
        field,
        problem: Problem::Missing,
    }
}

fn wrong_shape(field: &'static str, expected: &'static str, found: &Value) -> FieldIssue {
    FieldIssue {
        field,
        problem: Problem::WrongShape {
            expected,
            found: json_type(found),
        },
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
