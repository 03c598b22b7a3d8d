pub mod formatter;

pub use formatter::{FormatOptions, StepFormatter};
