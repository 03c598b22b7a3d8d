use super::definition::Workflow;
use crate::error::WorkflowError;
use crate::step::StepRecord;

/// A trait for recorder formats that can be converted into a [`Workflow`].
///
/// Implement it on your own structs to feed recordings from another tool
/// into the editor.
///
/// # Example
///
/// ```rust,no_run
/// use kiroku::prelude::*;
/// use std::result::Result;
///
/// struct Visit { url: String }
/// struct History { visits: Vec<Visit> }
///
/// impl IntoWorkflow for History {
///     fn into_workflow(self) -> Result<Workflow, WorkflowError> {
///         let steps = self
///             .visits
///             .into_iter()
///             .map(|v| {
///                 StepRecord::new(StepKind::Navigation, format!("Open {}", v.url))
///                     .with_field(StepField::Url, v.url)
///             })
///             .collect();
///         Ok(Workflow::new("history", steps))
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into a workflow.
    fn into_workflow(self) -> Result<Workflow, WorkflowError>;
}

impl IntoWorkflow for serde_json::Value {
    fn into_workflow(self) -> Result<Workflow, WorkflowError> {
        Workflow::from_value(self)
    }
}

/// A bare list of steps becomes an unnamed workflow.
impl IntoWorkflow for Vec<StepRecord> {
    fn into_workflow(self) -> Result<Workflow, WorkflowError> {
        Ok(Workflow {
            name: None,
            description: None,
            version: None,
            steps: self,
            extra: Default::default(),
        })
    }
}
