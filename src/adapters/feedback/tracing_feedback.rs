//! Editor feedback that only records notices in the service log.
//!
//! The HTTP client renders its own toasts from response bodies, so on the
//! server side notices and navigation requests are just traced.

use crate::ports::EditorFeedback;

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEditorFeedback;

impl EditorFeedback for TracingEditorFeedback {
    fn notify_success(&self, message: &str) {
        tracing::info!(notice = message, "Editor success notice");
    }

    fn navigate(&self, route: &str) {
        tracing::debug!(route = route, "Editor navigation requested");
    }
}
