//! Deterministic headline event generation for Gazette.
//!
//! Given a cadence, an in-game date, and a session identifier, this crate
//! reproducibly selects one headline template, fills in its substitution
//! slots, and emits an immutable economy [`Event`](gazette_types::Event).
//! The same inputs always produce bit-identical output, which is what lets
//! a session replay its active events from nothing but the date and the
//! session id.
//!
//! # Modules
//!
//! - [`seed`] -- Per-cadence seed derivation (bit-packed date, XOR session)
//! - [`provider`] -- The [`ContentProvider`] capability and its
//!   catalog-backed implementation
//! - [`instantiate`] -- Token-by-token template resolution into an event
//! - [`generate`] -- The [`EventGenerator`] facade tying the above together
//! - [`rollover`] -- The three-slot period-keyed [`EventBoard`]
//! - [`error`] -- Setup error types
//!
//! Everything is single-threaded, synchronous, pure computation; the one
//! piece of mutable state is the provider's random source, which is owned
//! by exactly one generation call at a time.

pub mod error;
pub mod generate;
pub mod instantiate;
pub mod provider;
pub mod rollover;
pub mod seed;

// Re-export primary types at crate root.
pub use error::GeneratorError;
pub use generate::EventGenerator;
pub use instantiate::instantiate;
pub use provider::{CatalogProvider, ContentProvider};
pub use rollover::{EventBoard, PeriodKey, Rollover};
