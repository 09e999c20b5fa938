//! Unit tests for the task module.
//!
//! Tests are organised by component: wire decoding, availability rules,
//! facet decision tables, the presenter and caller-side submission.

mod dispatch_tests;
mod support;
mod task_document_tests;
