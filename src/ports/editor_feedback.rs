//! Editor feedback port - notices and navigation for the admin editor.
//!
//! Both calls are fire-and-forget: the editor never waits on them and
//! ignores whatever the client does with them.

/// Sink for user-facing notices and navigation requests.
pub trait EditorFeedback: Send + Sync {
    /// Show a success notice.
    fn notify_success(&self, message: &str);

    /// Move the admin client to another screen.
    fn navigate(&self, route: &str);
}
