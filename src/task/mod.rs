//! Task-list management for Eisenhower.
//!
//! This module owns the one shared collection of task records and
//! everything that operates on it: validated record construction, snapshot
//! history for undo/redo, pluggable search matching, change notification
//! fan-out, and reified store commands. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store and command services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
