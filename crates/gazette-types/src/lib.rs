//! Shared type definitions for the Gazette headline generator.
//!
//! This crate is the single source of truth for the value types that flow
//! between the content layer (templates, catalog) and the generation layer
//! (seeding, instantiation, rollover). Everything here is a plain,
//! side-effect-free value.
//!
//! # Modules
//!
//! - [`ids`] -- Integer newtype wrappers for item and session identifiers
//! - [`enums`] -- Cadence, season, and substitution-category enumerations
//! - [`date`] -- The in-game calendar date and its derived period indices
//! - [`event`] -- The immutable economy [`Event`] record

pub mod date;
pub mod enums;
pub mod event;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use date::{DAYS_PER_SEASON, GameDate};
pub use enums::{Cadence, Category, FlavorCategory, ItemCategory, Season};
pub use event::{Event, NO_AFFECTED_ITEM};
pub use ids::{ItemId, SessionId};
