//! Port contracts for task-list management.
//!
//! Ports define the trait interfaces the store consumes without knowing
//! their implementations: search matching and change notification.

pub mod listener;
pub mod matcher;

pub use listener::{ChangeListener, ListenerError, ListenerResult};
pub use matcher::{DescriptionMatch, MatchPredicate, TitleMatch};
