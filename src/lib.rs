//! Eisenhower: in-memory task-list management core.
//!
//! This crate provides the in-memory store behind a task list:
//! validated record creation, status and priority updates, snapshot-based
//! undo/redo history, pluggable search matching, change-notification
//! fan-out, and reified store commands. It also ships the JSON interchange
//! boundary used to exchange records with external formats.
//!
//! # Architecture
//!
//! Eisenhower follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for pluggable behaviour
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: The task store, its domain model, and its services
//! - [`interchange`]: JSON conversion at the external boundary
//!
//! # Concurrency
//!
//! The store is designed for one caller at a time: every operation is a
//! synchronous in-memory computation. Handles are clonable and internally
//! locked, so accidental concurrent use is safe, but listener notification
//! runs in-line with the triggering mutation, so a slow listener blocks its
//! caller.

pub mod interchange;
pub mod task;
