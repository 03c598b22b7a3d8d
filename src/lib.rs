//! # Kiroku - Recorded Browser Steps for Workflow Editors
//!
//! **Kiroku** validates and models the steps a browser recorder produces
//! (navigations, clicks, inputs, conditional stops, ...) and the contracts a
//! node-based workflow editor uses to display them.
//!
//! ## Core Workflow
//!
//! 1.  **Validate**: Turn raw JSON into a [`StepRecord`](step::StepRecord) with
//!     [`step::validate`], or load a whole [`Workflow`](workflow::Workflow).
//! 2.  **Inspect**: Match on [`StepRecord::action`](step::StepRecord::action) for a
//!     per-kind view, or call [`step::variant_fields`] for the relevant fields.
//! 3.  **Display**: Convert the workflow into editor nodes and hand one to a
//!     [`NodeConfigMenuProps`](ui::NodeConfigMenuProps).
//! 4.  **Replay**: Fill `{placeholders}` from an input row and check
//!     `conditional_stop` steps through a [`ScriptEngine`](condition::ScriptEngine).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kiroku::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let raw = json!({
//!         "description": "Open the candidate page",
//!         "type": "navigation",
//!         "url": "https://example.com/candidates/{candidateId}",
//!         "timestamp": 1718000000000u64,
//!         "tabId": 3,
//!         "output": null
//!     });
//!
//!     let step = validate(&raw)?;
//!     if let StepAction::Navigation { url: Some(url) } = step.action() {
//!         println!("navigates to {}", url);
//!     }
//!
//!     let inputs: WorkflowInputs = [("candidateId", "42")].into_iter().collect();
//!     let ready = step.with_inputs(&inputs)?;
//!     println!("{}", StepFormatter::new().format_step(1, &ready));
//!
//!     let workflow = Workflow::new("demo", vec![ready]);
//!     let props = NodeConfigMenuProps::new(
//!         workflow.nodes().into_iter().next(),
//!         || println!("closed"),
//!         Some("demo.workflow.json".to_string()),
//!     );
//!     if let Some(step) = props.selected_step() {
//!         println!("{:?}", variant_fields(step));
//!     }
//!     props.close();
//!     Ok(())
//! }
//! ```

pub mod condition;
pub mod data;
pub mod error;
pub mod plan;
pub mod prelude;
pub mod step;
pub mod template;
pub mod ui;
pub mod workflow;
