use super::action::StepAction;
use super::kind::StepKind;
use crate::data::WorkflowInputs;
use crate::error::{TemplateError, ValidationError};
use crate::template;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One recorded browser-automation action, as stored in a workflow.
///
/// Deserialization goes through [`validate`](super::validate), so a
/// `StepRecord` obtained from JSON always satisfies the shape rules.
/// Optional fields are kept flat in [`StepFields`]; use
/// [`StepRecord::action`] for a view restricted to the record's kind.
///
/// `timestamp` and `tabId` keep the exact JSON number they were read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct StepRecord {
    pub description: String,
    pub output: Option<StepOutput>,
    pub timestamp: Option<Number>,
    #[serde(rename = "tabId")]
    pub tab_id: Option<Number>,
    #[serde(rename = "type")]
    pub kind: StepKind,
    #[serde(flatten)]
    pub fields: StepFields,
}

impl StepRecord {
    pub fn new(kind: StepKind, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            output: None,
            timestamp: None,
            tab_id: None,
            kind,
            fields: StepFields::default(),
        }
    }

    pub fn with_field(mut self, field: StepField, value: impl Into<String>) -> Self {
        self.fields.set(field, Some(value.into()));
        self
    }

    pub fn with_output(mut self, output: Value) -> Self {
        self.output = StepOutput::from_json(output);
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<Number>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn with_tab_id(mut self, tab_id: impl Into<Number>) -> Self {
        self.tab_id = Some(tab_id.into());
        self
    }

    /// Borrowed tagged view over the fields relevant to this record's kind.
    pub fn action(&self) -> StepAction<'_> {
        StepAction::of(self)
    }

    /// Shorthand for reading a single optional field.
    pub fn field(&self, field: StepField) -> Option<&str> {
        self.fields.get(field)
    }

    /// Returns a copy with the `url` and `value` placeholders filled from `inputs`.
    pub fn with_inputs(&self, inputs: &WorkflowInputs) -> Result<StepRecord, TemplateError> {
        let mut rendered = self.clone();
        for field in [StepField::Url, StepField::Value] {
            if let Some(text) = self.field(field) {
                rendered.fields.set(field, Some(template::render(text, inputs)?));
            }
        }
        Ok(rendered)
    }
}

impl TryFrom<Value> for StepRecord {
    type Error = ValidationError;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        super::validate(&raw)
    }
}

/// The optional, kind-specific string fields of a step.
///
/// The shape does not tie any field to a kind; every field may be present
/// on every record. A known key holding something other than a string is
/// kept verbatim in `other` and written back as it was read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xpath: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "stop_message", skip_serializing_if = "Option::is_none")]
    pub stop_message: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl StepFields {
    pub fn get(&self, field: StepField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: StepField, value: Option<String>) {
        self.other.remove(field.wire_name());
        *self.slot_mut(field) = value;
    }

    /// The non-string value recorded under `field`, if any.
    pub fn raw_value(&self, field: StepField) -> Option<&Value> {
        self.other.get(field.wire_name())
    }

    /// Iterates the fields that are set, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (StepField, &str)> {
        StepField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    fn slot(&self, field: StepField) -> &Option<String> {
        match field {
            StepField::Url => &self.url,
            StepField::CssSelector => &self.css_selector,
            StepField::Xpath => &self.xpath,
            StepField::ElementTag => &self.element_tag,
            StepField::ElementText => &self.element_text,
            StepField::SelectedText => &self.selected_text,
            StepField::Value => &self.value,
            StepField::Goal => &self.goal,
            StepField::Condition => &self.condition,
            StepField::StopMessage => &self.stop_message,
        }
    }

    fn slot_mut(&mut self, field: StepField) -> &mut Option<String> {
        match field {
            StepField::Url => &mut self.url,
            StepField::CssSelector => &mut self.css_selector,
            StepField::Xpath => &mut self.xpath,
            StepField::ElementTag => &mut self.element_tag,
            StepField::ElementText => &mut self.element_text,
            StepField::SelectedText => &mut self.selected_text,
            StepField::Value => &mut self.value,
            StepField::Goal => &mut self.goal,
            StepField::Condition => &mut self.condition,
            StepField::StopMessage => &mut self.stop_message,
        }
    }
}

/// Names of the optional string fields in [`StepFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepField {
    Url,
    CssSelector,
    Xpath,
    ElementTag,
    ElementText,
    SelectedText,
    Value,
    Goal,
    Condition,
    StopMessage,
}

impl StepField {
    pub const ALL: [StepField; 10] = [
        StepField::Url,
        StepField::CssSelector,
        StepField::Xpath,
        StepField::ElementTag,
        StepField::ElementText,
        StepField::SelectedText,
        StepField::Value,
        StepField::Goal,
        StepField::Condition,
        StepField::StopMessage,
    ];

    /// The JSON key used for this field.
    pub fn wire_name(&self) -> &'static str {
        match self {
            StepField::Url => "url",
            StepField::CssSelector => "cssSelector",
            StepField::Xpath => "xpath",
            StepField::ElementTag => "elementTag",
            StepField::ElementText => "elementText",
            StepField::SelectedText => "selectedText",
            StepField::Value => "value",
            StepField::Goal => "goal",
            StepField::Condition => "condition",
            StepField::StopMessage => "stop_message",
        }
    }
}

/// Opaque result payload attached to an executed step.
///
/// The crate never interprets it; components that know a step's semantics
/// can [`decode`](StepOutput::decode) it into their own type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepOutput(serde_json::Value);

impl StepOutput {
    /// Wraps a JSON value. `null` means "no output" and yields `None`.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        if value.is_null() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_json(self) -> serde_json::Value {
        self.0
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.0)
    }
}
