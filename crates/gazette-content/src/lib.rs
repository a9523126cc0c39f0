//! Headline templates, resource loading, and the content catalog for the
//! Gazette headline generator.
//!
//! This crate owns everything the generator reads but does not generate:
//! the line-oriented resource format, the compiled headline templates, the
//! per-cadence template store, and the item/location catalog.
//!
//! # Modules
//!
//! - [`resource`] -- The shared line-oriented resource text format
//!   (blank-line and `#`-comment skipping, numeric list parsing).
//! - [`template`] -- The headline template compiler: raw strings with
//!   `%` substitution escapes become ordered [`Token`] sequences.
//! - [`store`] -- Per-cadence template lists with a built-in fallback so
//!   the generator never sees an empty candidate set.
//! - [`catalog`] -- The explicitly constructed [`ContentCatalog`]: item
//!   names and prices, per-category item lists, and location names.
//! - [`error`] -- Error types for resource I/O.

pub mod catalog;
pub mod error;
pub mod resource;
pub mod store;
pub mod template;

// Re-export primary types at crate root.
pub use catalog::{ContentCatalog, ItemInfo};
pub use error::ContentError;
pub use store::{FALLBACK_HEADLINE, TemplateStore};
pub use template::{CodeTable, HeadlineTemplate, Token};
