//! The in-game calendar date and its derived period indices.
//!
//! The host calendar has four seasons of 28 days each. All cadence
//! boundaries are derived from the date itself -- the date is the single
//! source of truth, and the half-month and week-of-month indices are
//! computed, never stored.

use serde::{Deserialize, Serialize};

use crate::enums::Season;

/// Number of days in every season.
pub const DAYS_PER_SEASON: u8 = 28;

/// A validated in-game date: a year (1-based), a season, and a day of the
/// season in `1..=28`.
///
/// Construction goes through [`GameDate::new`], which rejects out-of-range
/// values, so every `GameDate` in circulation satisfies the invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameDate {
    year: u32,
    season: Season,
    day: u8,
}

impl GameDate {
    /// Create a date from its parts.
    ///
    /// Returns `None` if `year` is 0 or `day` is outside `1..=28`.
    pub const fn new(year: u32, season: Season, day: u8) -> Option<Self> {
        if year == 0 || day == 0 || day > DAYS_PER_SEASON {
            return None;
        }
        Some(Self { year, season, day })
    }

    /// The year (1-based).
    pub const fn year(self) -> u32 {
        self.year
    }

    /// The season.
    pub const fn season(self) -> Season {
        self.season
    }

    /// The day of the season (`1..=28`).
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Zero-based index of the season within the year (0..=3).
    pub const fn season_index(self) -> u64 {
        self.season.index()
    }

    /// Which half of the season this day falls in: 0 for days 1-14,
    /// 1 for days 15-28.
    pub const fn half_month_index(self) -> u64 {
        (self.day.saturating_sub(1) / 14) as u64
    }

    /// Zero-based week of the season (0..=3): days 1-7 are week 0,
    /// days 8-14 week 1, and so on.
    pub const fn week_of_month_index(self) -> u64 {
        (self.day.saturating_sub(1) / 7) as u64
    }

    /// The date of the following day, rolling over seasons and years.
    ///
    /// Returns `None` only if the year counter would overflow.
    pub const fn next_day(self) -> Option<Self> {
        if self.day < DAYS_PER_SEASON {
            return Some(Self {
                year: self.year,
                season: self.season,
                day: self.day.saturating_add(1),
            });
        }
        match self.season {
            Season::Winter => match self.year.checked_add(1) {
                Some(year) => Some(Self {
                    year,
                    season: Season::Spring,
                    day: 1,
                }),
                None => None,
            },
            season => Some(Self {
                year: self.year,
                season: season.next(),
                day: 1,
            }),
        }
    }
}

impl core::fmt::Display for GameDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}, Year {}", self.season, self.day, self.year)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
