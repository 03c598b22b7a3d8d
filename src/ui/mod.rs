//! Shapes exchanged with the workflow editor UI.

pub mod menu;
pub mod node;

pub use menu::{CloseHandler, MenuView, NodeConfigMenuProps, StepView};
pub use node::{FlowNode, NodeData};
