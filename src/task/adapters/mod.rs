//! Adapter implementations of the task ports.

mod logging;

pub use logging::TracingListener;
