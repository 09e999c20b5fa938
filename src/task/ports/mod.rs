//! Port contracts consumed by the task presentation engine.
//!
//! Ports define infrastructure-agnostic interfaces: people lookup,
//! translation, recency, and the action endpoint the caller submits to.

pub mod action_service;
pub mod recency;
pub mod roster;
pub mod translator;

pub use action_service::{
    ActionOutcome, ActionRequest, TaskActionError, TaskActionResult, TaskActionService,
};
pub use recency::RecencyOracle;
pub use roster::{Gender, Roster, ShareUserInfo, UserInfo};
pub use translator::{Substitutions, Translator};
