//! Task presentation for discussion task panels.
//!
//! Given a task snapshot, its history log and the viewing actor, this module
//! derives which lifecycle actions the actor may take and how each facet of
//! the task (deadline, desired date, performer, cancellation) is presented.
//! Evaluation is synchronous and pure; submitting the resulting actions is a
//! separate, caller-owned concern. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Presentation and submission services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
