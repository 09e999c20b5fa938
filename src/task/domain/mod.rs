//! Domain model for task presentation.
//!
//! Tasks, their append-only history log, the viewing actor and the plain
//! data the presentation engine produces. Nothing in this module performs
//! I/O or reads the clock.

mod action;
mod actor;
pub mod capability;
pub mod date;
mod error;
mod facet;
mod history;
mod ids;
mod status;
mod task;

pub use action::{ActionAvailabilitySet, FacetVisibility, LatchSlot, TaskAction};
pub use actor::{Actor, WriteAccess};
pub use error::{ParseTaskStatusError, TaskDomainError};
pub use facet::{Facet, FacetContent, FacetKind, FacetPresentation};
pub use history::{
    DeadlineChange, HistoryEntry, HistoryEntryKind, HistoryLog, PerformerIdentity,
    RawHistoryEntry, StatusChange,
};
pub use ids::{Role, TaskId, TenantDomain, UserLogin};
pub use status::{StateCode, TaskStatus};
pub use task::{SharePerformer, Task, TaskDocument};
