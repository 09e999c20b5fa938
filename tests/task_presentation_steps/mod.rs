//! Step definitions for task presentation scenarios.

mod given;
mod then;
mod when;
pub mod world;
