//! Exception dumps for logscope
//!
//! This crate lists exception files newest first and reads or deletes single
//! dumps after their path has been validated.

mod index;
mod store;

pub use index::{EXCEPTION_EXTENSION, ExceptionIndex};
pub use store::{ExceptionStore, NOT_FOUND_PLACEHOLDER};

// Re-export types used in our public API
pub use logscope_types::{DeleteOutcome, ExceptionRecord};
