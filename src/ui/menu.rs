use super::node::FlowNode;
use crate::step::{StepField, StepKind, StepRecord};
use serde_json::Number;
use std::fmt;
use std::sync::Arc;

/// Callback a menu invokes to ask its owner to dismiss it.
pub type CloseHandler = Arc<dyn Fn() + Send + Sync>;

/// What a node configuration menu receives from its owner.
///
/// `node` is `None` when nothing is selected, and `workflow_filename` is
/// `None` until the workflow has been saved. The step is only reachable
/// through [`selected_step`](Self::selected_step), which forces callers to
/// handle the empty selection.
#[derive(Clone)]
pub struct NodeConfigMenuProps {
    node: Option<FlowNode>,
    on_close: CloseHandler,
    workflow_filename: Option<String>,
}

impl NodeConfigMenuProps {
    pub fn new<F>(node: Option<FlowNode>, on_close: F, workflow_filename: Option<String>) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            node,
            on_close: Arc::new(on_close),
            workflow_filename,
        }
    }

    pub fn node(&self) -> Option<&FlowNode> {
        self.node.as_ref()
    }

    pub fn selected_step(&self) -> Option<&StepRecord> {
        self.node.as_ref().map(FlowNode::step)
    }

    pub fn workflow_filename(&self) -> Option<&str> {
        self.workflow_filename.as_deref()
    }

    /// Requests the menu be dismissed. May be called any number of times.
    pub fn close(&self) {
        tracing::debug!(
            node_id = self.node.as_ref().map(|n| n.id.as_str()),
            "Node config menu close requested"
        );
        (self.on_close)();
    }

    /// The read-only content a renderer should draw.
    pub fn view(&self) -> MenuView<'_> {
        match &self.node {
            None => MenuView::Empty,
            Some(node) => {
                let step = node.step();
                MenuView::Step(StepView {
                    node_id: &node.id,
                    label: &node.data.label,
                    description: &step.description,
                    kind: step.kind,
                    fields: step.action().fields(),
                    timestamp: step.timestamp.as_ref(),
                    tab_id: step.tab_id.as_ref(),
                    has_output: step.output.is_some(),
                    workflow_filename: self.workflow_filename(),
                })
            }
        }
    }
}

impl fmt::Debug for NodeConfigMenuProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeConfigMenuProps")
            .field("node", &self.node)
            .field("on_close", &"<callback>")
            .field("workflow_filename", &self.workflow_filename)
            .finish()
    }
}

/// Either nothing selected, or the selected step's details.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuView<'a> {
    Empty,
    Step(StepView<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepView<'a> {
    pub node_id: &'a str,
    pub label: &'a str,
    pub description: &'a str,
    pub kind: StepKind,
    /// Only the fields relevant to `kind` that are set.
    pub fields: Vec<(StepField, &'a str)>,
    pub timestamp: Option<&'a Number>,
    pub tab_id: Option<&'a Number>,
    pub has_output: bool,
    pub workflow_filename: Option<&'a str>,
}
