use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The discriminant of a step record, serialized as the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Navigation,
    Click,
    SelectChange,
    Input,
    KeyPress,
    Scroll,
    ExtractPageContent,
    ConditionalStop,
}

impl StepKind {
    pub const ALL: [StepKind; 8] = [
        StepKind::Navigation,
        StepKind::Click,
        StepKind::SelectChange,
        StepKind::Input,
        StepKind::KeyPress,
        StepKind::Scroll,
        StepKind::ExtractPageContent,
        StepKind::ConditionalStop,
    ];

    /// The wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Navigation => "navigation",
            StepKind::Click => "click",
            StepKind::SelectChange => "select_change",
            StepKind::Input => "input",
            StepKind::KeyPress => "key_press",
            StepKind::Scroll => "scroll",
            StepKind::ExtractPageContent => "extract_page_content",
            StepKind::ConditionalStop => "conditional_stop",
        }
    }

    /// Whether steps of this kind address a page element.
    pub fn targets_element(&self) -> bool {
        matches!(
            self,
            StepKind::Click
                | StepKind::SelectChange
                | StepKind::Input
                | StepKind::KeyPress
                | StepKind::Scroll
        )
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown kind name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStepKind(pub String);

impl fmt::Display for UnknownStepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown step type '{}'", self.0)
    }
}

impl std::error::Error for UnknownStepKind {}

impl FromStr for StepKind {
    type Err = UnknownStepKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StepKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownStepKind(s.to_string()))
    }
}
