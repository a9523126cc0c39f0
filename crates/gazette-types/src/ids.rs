//! Integer newtype wrappers for Gazette identifiers.
//!
//! The host game keys items and play sessions by small integers, so the
//! identifiers here are plain integer newtypes rather than UUIDs. The
//! wrappers exist purely to prevent accidental mixing of identifier kinds
//! at compile time.

use serde::{Deserialize, Serialize};

/// Identifier of an item in the content catalog.
///
/// Item ids are non-negative in well-formed catalogs; the signed
/// representation exists because the event record uses `-1` as its
/// "no affected item" sentinel (see [`crate::event::NO_AFFECTED_ITEM`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub i32);

impl ItemId {
    /// Create an item id from its raw integer value.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Return the raw integer value.
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ItemId {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<ItemId> for i32 {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

/// Stable per-playthrough identifier used to diversify seeds across
/// different players and save files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a session id from its raw integer value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw integer value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SessionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<SessionId> for u64 {
    fn from(id: SessionId) -> Self {
        id.0
    }
}
