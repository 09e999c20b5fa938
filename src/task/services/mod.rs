//! Application services: availability evaluation, facet rendering,
//! presentation and caller-side action submission.

pub mod availability;
mod config;
mod date_format;
mod dispatch;
pub mod facets;
mod presenter;
pub mod scanner;

pub use config::TaskPresentationConfig;
pub use date_format::{DateFormatter, format_work_duration, shorten_name};
pub use dispatch::{TaskActionDispatcher, deadline_request, performer_change_request};
pub use presenter::{
    TaskPresentation, TaskPresentationError, TaskPresentationResult, TaskPresenter,
};
