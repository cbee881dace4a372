//! Change-notification contract for store mutations.

use std::sync::Arc;
use thiserror::Error;

/// Result type for listener notification.
pub type ListenerResult = Result<(), ListenerError>;

/// Sink notified with a human-readable message on every store mutation.
///
/// Listeners are invoked synchronously, in registration order, once per
/// mutation. A listener that returns an error does not stop delivery to the
/// remaining listeners; the store reports the failure and continues.
pub trait ChangeListener: Send + Sync {
    /// Delivers one mutation message.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError`] when the sink cannot accept the message.
    /// The failure is isolated at the notification boundary.
    fn on_change(&self, message: &str) -> ListenerResult;
}

/// Failure raised by a change listener during notification.
#[derive(Debug, Clone, Error)]
#[error("listener failure: {0}")]
pub struct ListenerError(Arc<dyn std::error::Error + Send + Sync>);

impl ListenerError {
    /// Wraps an underlying sink error.
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Arc::new(err))
    }

    /// Creates a listener error from a plain message.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self(Arc::new(std::io::Error::other(message.into())))
    }
}
