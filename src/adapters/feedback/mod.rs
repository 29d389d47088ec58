//! Editor feedback adapters.

mod tracing_feedback;

pub use tracing_feedback::TracingEditorFeedback;
