//! Tasklens: task lifecycle and history-derivation engine.
//!
//! This crate turns a task document, its append-only history log and the
//! viewing user into a fully resolved presentation: the set of lifecycle
//! actions the user may take and localised text for each aspect of the task.
//!
//! # Architecture
//!
//! Tasklens follows hexagonal architecture principles:
//!
//! - **Domain**: Pure task, history and actor model with no I/O
//! - **Ports**: Abstract trait interfaces for rosters, translation, recency
//!   and the action endpoint
//! - **Adapters**: In-memory implementations of the ports
//!
//! # Modules
//!
//! - [`task`]: Availability evaluation, facet rendering and action submission

pub mod task;
