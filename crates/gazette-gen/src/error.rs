//! Error types for the `gazette-gen` crate.
//!
//! Generation itself is infallible by design -- malformed templates and
//! missing content degrade to visible fallbacks. The only hard failure is
//! wiring a generator to content that was never loaded.

/// Errors that can occur when setting up the generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The content catalog holds no items and no locations.
    #[error("content catalog is empty: load items and locations before wiring the generator")]
    EmptyCatalog,
}
