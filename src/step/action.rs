use super::kind::StepKind;
use super::record::{StepField, StepRecord};
use ahash::AHashMap;

/// A step's payload, split by kind.
///
/// This borrows from the underlying [`StepRecord`]; fields that are not
/// relevant to the record's kind are not reachable through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction<'a> {
    Navigation {
        url: Option<&'a str>,
    },
    Click(ElementTarget<'a>),
    SelectChange {
        target: ElementTarget<'a>,
        selected_text: Option<&'a str>,
        value: Option<&'a str>,
    },
    Input {
        target: ElementTarget<'a>,
        value: Option<&'a str>,
    },
    KeyPress {
        target: ElementTarget<'a>,
        value: Option<&'a str>,
    },
    Scroll(ElementTarget<'a>),
    ExtractPageContent {
        goal: Option<&'a str>,
    },
    ConditionalStop {
        condition: Option<&'a str>,
        stop_message: Option<&'a str>,
    },
}

/// How an element-targeting step locates its element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementTarget<'a> {
    pub css_selector: Option<&'a str>,
    pub xpath: Option<&'a str>,
    pub element_tag: Option<&'a str>,
    pub element_text: Option<&'a str>,
}

/// A locator to try against the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    Css(&'a str),
    XPath(&'a str),
}

impl<'a> ElementTarget<'a> {
    fn of(record: &'a StepRecord) -> Self {
        Self {
            css_selector: record.field(StepField::CssSelector),
            xpath: record.field(StepField::Xpath),
            element_tag: record.field(StepField::ElementTag),
            element_text: record.field(StepField::ElementText),
        }
    }

    /// Locators in the order a runner should try them: CSS first, XPath as fallback.
    pub fn selectors(&self) -> impl Iterator<Item = Selector<'a>> {
        self.css_selector
            .map(Selector::Css)
            .into_iter()
            .chain(self.xpath.map(Selector::XPath))
    }

    fn fields(&self) -> [(StepField, Option<&'a str>); 4] {
        [
            (StepField::CssSelector, self.css_selector),
            (StepField::Xpath, self.xpath),
            (StepField::ElementTag, self.element_tag),
            (StepField::ElementText, self.element_text),
        ]
    }
}

impl<'a> StepAction<'a> {
    pub fn of(record: &'a StepRecord) -> Self {
        let field = |f| record.field(f);
        match record.kind {
            StepKind::Navigation => StepAction::Navigation {
                url: field(StepField::Url),
            },
            StepKind::Click => StepAction::Click(ElementTarget::of(record)),
            StepKind::SelectChange => StepAction::SelectChange {
                target: ElementTarget::of(record),
                selected_text: field(StepField::SelectedText),
                value: field(StepField::Value),
            },
            StepKind::Input => StepAction::Input {
                target: ElementTarget::of(record),
                value: field(StepField::Value),
            },
            StepKind::KeyPress => StepAction::KeyPress {
                target: ElementTarget::of(record),
                value: field(StepField::Value),
            },
            StepKind::Scroll => StepAction::Scroll(ElementTarget::of(record)),
            StepKind::ExtractPageContent => StepAction::ExtractPageContent {
                goal: field(StepField::Goal),
            },
            StepKind::ConditionalStop => StepAction::ConditionalStop {
                condition: field(StepField::Condition),
                stop_message: field(StepField::StopMessage),
            },
        }
    }

    pub fn kind(&self) -> StepKind {
        match self {
            StepAction::Navigation { .. } => StepKind::Navigation,
            StepAction::Click(_) => StepKind::Click,
            StepAction::SelectChange { .. } => StepKind::SelectChange,
            StepAction::Input { .. } => StepKind::Input,
            StepAction::KeyPress { .. } => StepKind::KeyPress,
            StepAction::Scroll(_) => StepKind::Scroll,
            StepAction::ExtractPageContent { .. } => StepKind::ExtractPageContent,
            StepAction::ConditionalStop { .. } => StepKind::ConditionalStop,
        }
    }

    pub fn target(&self) -> Option<&ElementTarget<'a>> {
        match self {
            StepAction::Click(target) | StepAction::Scroll(target) => Some(target),
            StepAction::SelectChange { target, .. }
            | StepAction::Input { target, .. }
            | StepAction::KeyPress { target, .. } => Some(target),
            _ => None,
        }
    }

    /// The relevant fields that are actually set, in a stable order.
    pub fn fields(&self) -> Vec<(StepField, &'a str)> {
        let slots: Vec<(StepField, Option<&'a str>)> = match *self {
            StepAction::Navigation { url } => vec![(StepField::Url, url)],
            StepAction::Click(target) | StepAction::Scroll(target) => target.fields().to_vec(),
            StepAction::SelectChange {
                target,
                selected_text,
                value,
            } => {
                let mut slots = target.fields().to_vec();
                slots.push((StepField::SelectedText, selected_text));
                slots.push((StepField::Value, value));
                slots
            }
            StepAction::Input { target, value } | StepAction::KeyPress { target, value } => {
                let mut slots = target.fields().to_vec();
                slots.push((StepField::Value, value));
                slots
            }
            StepAction::ExtractPageContent { goal } => vec![(StepField::Goal, goal)],
            StepAction::ConditionalStop {
                condition,
                stop_message,
            } => vec![
                (StepField::Condition, condition),
                (StepField::StopMessage, stop_message),
            ],
        };

        slots
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field, v)))
            .collect()
    }
}

/// Returns the fields relevant to `record`'s kind, keyed by wire name.
///
/// Fields absent on the record are omitted; this never fails.
pub fn variant_fields(record: &StepRecord) -> AHashMap<&'static str, &str> {
    record
        .action()
        .fields()
        .into_iter()
        .map(|(field, value)| (field.wire_name(), value))
        .collect()
}
