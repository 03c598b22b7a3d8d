//! Common test utilities for building step records and workflows.
use kiroku::prelude::*;
use serde_json::{Value, json};

/// Minimal raw step: only `description` and `type`.
#[allow(dead_code)]
pub fn minimal_raw_step(kind: &str) -> Value {
    json!({
        "description": format!("A {} step", kind),
        "type": kind,
    })
}

/// A fully populated raw step as the recorder emits it.
#[allow(dead_code)]
pub fn recorded_click_json() -> Value {
    json!({
        "description": "Click the search button",
        "output": null,
        "timestamp": 1718000000123u64,
        "tabId": 7,
        "type": "click",
        "cssSelector": "button#search",
        "xpath": "//button[@id='search']",
        "elementTag": "BUTTON",
        "elementText": "Search",
        "url": "https://example.com/ignored-for-click"
    })
}

/// Workflow: open a candidate page, type a note, stop on a 404 page.
#[allow(dead_code)]
pub const CANDIDATE_WORKFLOW_JSON: &str = r#"{
  "name": "Candidate scout",
  "description": "Open a candidate and leave a note",
  "version": "1.0",
  "input_schema": [{ "name": "candidateId", "type": "string", "required": true }],
  "steps": [
    {
      "description": "Open candidate page",
      "output": null,
      "timestamp": 1718000000000,
      "tabId": 1,
      "type": "navigation",
      "url": "https://example.com/candidates/{candidateId}"
    },
    {
      "description": "Stop on missing candidate",
      "output": null,
      "timestamp": null,
      "tabId": null,
      "type": "conditional_stop",
      "condition": "document.title.includes('404')",
      "stop_message": "Candidate {candidateId} not found"
    },
    {
      "description": "Type a note",
      "output": null,
      "timestamp": 1718000004000,
      "tabId": 1,
      "type": "input",
      "cssSelector": "textarea.note",
      "elementTag": "TEXTAREA",
      "value": "Contacted {candidateId}"
    },
    {
      "description": "Pick a status",
      "output": { "selected": true },
      "timestamp": 1718000006000,
      "tabId": 1,
      "type": "select_change",
      "cssSelector": "select#status",
      "selectedText": "Contacted",
      "value": "contacted"
    },
    {
      "description": "Summarize the profile",
      "output": null,
      "timestamp": null,
      "tabId": null,
      "type": "extract_page_content",
      "goal": "Summarize the candidate's experience"
    }
  ]
}"#;

#[allow(dead_code)]
pub fn candidate_inputs() -> WorkflowInputs {
    [("candidateId", "42")].into_iter().collect()
}

/// A navigation record built in code rather than parsed.
#[allow(dead_code)]
pub fn navigation_step(url: &str) -> StepRecord {
    StepRecord::new(StepKind::Navigation, "Open page").with_field(StepField::Url, url)
}
