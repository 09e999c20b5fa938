//! In-process implementations of the task presentation ports.

mod action_service;
mod recency;
mod roster;
mod translator;

pub use action_service::{InMemoryTaskActionService, SubmittedAction};
pub use recency::LastVisitRecency;
pub use roster::InMemoryRoster;
pub use translator::CatalogTranslator;
