//! Tracing-backed change listener.

use crate::task::ports::{ChangeListener, ListenerResult};

/// Forwards store notifications to the `tracing` subscriber as info events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl ChangeListener for TracingListener {
    fn on_change(&self, message: &str) -> ListenerResult {
        tracing::info!(target: "eisenhower::store", "{message}");
        Ok(())
    }
}
