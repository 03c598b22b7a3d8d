use crate::data::WorkflowInputs;
use crate::error::ConditionError;
use crate::template;

/// Common checks against a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCheck {
    Exists,
    NotExists,
    Visible,
    ContainsText(String),
}

impl DomCheck {
    /// Parses a check name (`exists`, `not_exists`, `visible`, `contains_text`).
    pub fn parse(check_type: &str, expected_text: Option<&str>) -> Result<Self, ConditionError> {
        match check_type {
            "exists" => Ok(DomCheck::Exists),
            "not_exists" => Ok(DomCheck::NotExists),
            "visible" => Ok(DomCheck::Visible),
            "contains_text" => match expected_text {
                Some(text) if !text.is_empty() => Ok(DomCheck::ContainsText(text.to_string())),
                _ => Err(ConditionError::MissingExpectedText),
            },
            other => Err(ConditionError::UnsupportedCheck(other.to_string())),
        }
    }
}

/// A DOM check bound to a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomCondition {
    pub selector: String,
    pub check: DomCheck,
}

impl DomCondition {
    pub fn new(selector: impl Into<String>, check: DomCheck) -> Self {
        Self {
            selector: selector.into(),
            check,
        }
    }

    /// The JavaScript expression implementing this check.
    ///
    /// Placeholders in the selector and expected text are filled from
    /// `inputs` when given; unknown placeholders are left as written.
    pub fn script(&self, inputs: Option<&WorkflowInputs>) -> String {
        let fill = |text: &str| match inputs {
            Some(inputs) => template::render_lenient(text, inputs),
            None => text.to_string(),
        };
        let selector = js_string(&fill(&self.selector));

        match &self.check {
            DomCheck::Exists => format!("document.querySelector({}) !== null", selector),
            DomCheck::NotExists => format!("document.querySelector({}) === null", selector),
            DomCheck::Visible => format!(
                "(() => {{ const el = document.querySelector({}); \
                 return el !== null && el.offsetParent !== null; }})()",
                selector
            ),
            DomCheck::ContainsText(text) => format!(
                "(() => {{ const el = document.querySelector({}); \
                 return el !== null && el.textContent.includes({}); }})()",
                selector,
                js_string(&fill(text))
            ),
        }
    }
}

/// Quotes `text` as a single-quoted JavaScript string literal.
fn js_string(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('\'');
    for c in text.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            other => quoted.push(other),
        }
    }
    quoted.push('\'');
    quoted
}
