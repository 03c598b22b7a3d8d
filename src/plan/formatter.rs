use crate::step::{ElementTarget, StepAction, StepRecord, variant_fields};
use crate::workflow::Workflow;
use itertools::Itertools;

/// What to include besides the instruction lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Append the raw relevant fields (`key=value`), sorted by key.
    pub show_fields: bool,
    /// Append the recorded timestamp and tab id when known.
    pub show_recording: bool,
}

/// Formats steps into human-readable instructions, e.g. for walking
/// through a workflow by hand.
#[derive(Debug, Clone, Default)]
pub struct StepFormatter {
    options: FormatOptions,
}

impl StepFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Format one step; `number` is its 1-based position in the workflow.
    pub fn format_step(&self, number: usize, step: &StepRecord) -> String {
        let mut result = format!("Step {}: {}\n", number, step.description);
        result.push_str(&format!("  Type: {}\n", step.kind));

        for line in Self::instruction_lines(&step.action()) {
            result.push_str(&format!("  {}\n", line));
        }

        if self.options.show_recording {
            if let Some(timestamp) = &step.timestamp {
                result.push_str(&format!("  Recorded at: {}\n", timestamp));
            }
            if let Some(tab_id) = &step.tab_id {
                result.push_str(&format!("  Tab: {}\n", tab_id));
            }
        }

        if self.options.show_fields {
            let fields = variant_fields(step);
            if !fields.is_empty() {
                let joined = fields
                    .iter()
                    .sorted_by_key(|(key, _)| **key)
                    .map(|(key, value)| format!("{}={}", key, value))
                    .join(", ");
                result.push_str(&format!("  Fields: {}\n", joined));
            }
        }
        result
    }

    /// Format every step of a workflow, separated by blank lines.
    pub fn format_workflow(&self, workflow: &Workflow) -> String {
        let header = format!(
            "Workflow: {} ({} steps)\n",
            workflow.display_name(),
            workflow.steps.len()
        );
        let body = workflow
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| self.format_step(index + 1, step))
            .join("\n");
        format!("{}\n{}", header, body)
    }

    fn instruction_lines(action: &StepAction<'_>) -> Vec<String> {
        let mut lines = Vec::new();
        match action {
            StepAction::Navigation { url } => match url {
                Some(url) => lines.push(format!("→ Navigate to: {}", url)),
                None => lines.push("→ Navigate (no URL recorded)".to_string()),
            },
            StepAction::Click(target) => {
                lines.push("→ Click element:".to_string());
                Self::push_target(&mut lines, target);
            }
            StepAction::SelectChange {
                target,
                selected_text,
                value,
            } => {
                lines.push("→ Select option in element:".to_string());
                Self::push_target(&mut lines, target);
                Self::push_detail(&mut lines, "Option", *selected_text);
                Self::push_detail(&mut lines, "Value", *value);
            }
            StepAction::Input { target, value } => {
                lines.push("→ Input into element:".to_string());
                Self::push_target(&mut lines, target);
                Self::push_detail(&mut lines, "Value", *value);
            }
            StepAction::KeyPress { target, value } => {
                lines.push("→ Press key in element:".to_string());
                Self::push_target(&mut lines, target);
                Self::push_detail(&mut lines, "Key", *value);
            }
            StepAction::Scroll(target) => {
                lines.push("→ Scroll element:".to_string());
                Self::push_target(&mut lines, target);
            }
            StepAction::ExtractPageContent { goal } => {
                lines.push("→ Extract page content".to_string());
                Self::push_detail(&mut lines, "Goal", *goal);
            }
            StepAction::ConditionalStop {
                condition,
                stop_message,
            } => {
                match condition {
                    Some(condition) => lines.push(format!("→ Stop if: {}", condition)),
                    None => lines.push("→ Stop if: (no condition recorded)".to_string()),
                }
                Self::push_detail(&mut lines, "Message", *stop_message);
            }
        }
        lines
    }

    fn push_target(lines: &mut Vec<String>, target: &ElementTarget<'_>) {
        Self::push_detail(lines, "CSS", target.css_selector);
        Self::push_detail(lines, "XPath", target.xpath);
        Self::push_detail(lines, "Tag", target.element_tag);
        Self::push_detail(lines, "Text", target.element_text);
    }

    fn push_detail(lines: &mut Vec<String>, label: &str, value: Option<&str>) {
        if let Some(value) = value {
            lines.push(format!("  {}: {}", label, value));
        }
    }
}
