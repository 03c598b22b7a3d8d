pub mod inputs;

pub use inputs::WorkflowInputs;
