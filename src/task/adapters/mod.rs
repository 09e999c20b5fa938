//! Adapters for the task presentation ports.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryRoster`]: fixed people lookup
//! - [`memory::CatalogTranslator`]: template catalogue rendered with
//!   `minijinja`
//! - [`memory::LastVisitRecency`]: "unseen since last visit" oracle
//! - [`memory::InMemoryTaskActionService`]: recording action endpoint for
//!   tests and local tooling

pub mod memory;
