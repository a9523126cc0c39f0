//! Per-cadence seed derivation.
//!
//! Each cadence derives its seed by bit-packing the year and its period
//! index, then XOR-ing in the session identifier. The packing keeps the
//! seed stable for repeated calls within one period and distinct between
//! periods, and folding the season index into the biweekly and weekly
//! formulas keeps the same four weekly headlines from recurring every
//! season. This is a content-shuffling seed, not a security boundary.

use gazette_types::{Cadence, GameDate, SessionId};

/// Derive the seed for a cadence at a given date and session.
///
/// - Monthly: `((year << 2) | season) ^ session`
/// - Biweekly: `((year << 3) | (season << 1) | half) ^ session`
/// - Weekly: `((year << 4) | (season << 2) | week) ^ session`
pub const fn derive(cadence: Cadence, date: GameDate, session: SessionId) -> u64 {
    let year = date.year() as u64;
    let season = date.season_index();
    let packed = match cadence {
        Cadence::Monthly => (year << 2) | season,
        Cadence::Biweekly => (year << 3) | (season << 1) | date.half_month_index(),
        Cadence::Weekly => (year << 4) | (season << 2) | date.week_of_month_index(),
    };
    packed ^ session.into_inner()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
