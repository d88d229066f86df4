//! Path validation and file discovery for logscope
//!
//! Every file-identified request goes through [`PathResolver`] before any
//! read or delete. [`FileCatalog`] lists the files under a root.

mod catalog;
mod resolver;

pub use catalog::{CatalogError, FileCatalog, basename};
pub use resolver::{PathResolver, ResolveError};

// Re-export types used in our public API
pub use logscope_types::FileRef;
