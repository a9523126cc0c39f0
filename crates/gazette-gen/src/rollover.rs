//! The three-slot cadence rollover board.
//!
//! Each cadence owns one slot holding its currently active event, keyed by
//! the period that produced it (season for monthly, half-season for
//! biweekly, week for weekly). Advancing the board to a date regenerates
//! any slot whose period key no longer matches; the replaced event is
//! handed back so the caller can reverse its price effect before applying
//! the new one.
//!
//! Because seeds are period-stable, advancing twice within one period is
//! idempotent, and an unset slot filled mid-period produces exactly the
//! event that a day-1 fill would have.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use gazette_types::{Cadence, Event, GameDate, Season, SessionId};

use crate::generate::EventGenerator;

/// The period a cadence slot was generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodKey {
    /// The year.
    pub year: u32,
    /// The season.
    pub season: Season,
    /// Sub-period within the season: always 0 for monthly, the half-month
    /// index for biweekly, the week-of-month index for weekly.
    pub sub_period: u64,
}

impl PeriodKey {
    /// The period key a cadence is in at the given date.
    pub const fn of(cadence: Cadence, date: GameDate) -> Self {
        let sub_period = match cadence {
            Cadence::Monthly => 0,
            Cadence::Biweekly => date.half_month_index(),
            Cadence::Weekly => date.week_of_month_index(),
        };
        Self {
            year: date.year(),
            season: date.season(),
            sub_period,
        }
    }
}

/// An occupied cadence slot: the active event and the period it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Slot {
    key: PeriodKey,
    event: Event,
}

/// One rollover performed by [`EventBoard::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rollover {
    /// The cadence that rolled over.
    pub cadence: Cadence,
    /// The prior event, whose price effect must be reversed externally.
    /// `None` when the slot was previously unset.
    pub expired: Option<Event>,
    /// The newly issued event.
    pub issued: Event,
}

/// Per-cadence active events with period-keyed rollover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBoard {
    slots: BTreeMap<Cadence, Slot>,
}

impl EventBoard {
    /// Create a board with all slots unset.
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// Bring the board up to date, regenerating every slot whose period
    /// has rolled over. Returns one [`Rollover`] per regenerated slot, in
    /// cadence order; an empty vector means the board was already current.
    pub fn advance(
        &mut self,
        generator: &EventGenerator,
        date: GameDate,
        session: SessionId,
    ) -> Vec<Rollover> {
        let mut rollovers = Vec::new();
        for cadence in Cadence::ALL {
            let key = PeriodKey::of(cadence, date);
            let current = self.slots.get(&cadence);
            if current.is_some_and(|slot| slot.key == key) {
                continue;
            }
            let issued = generator.generate(cadence, date, session);
            let expired = self
                .slots
                .insert(
                    cadence,
                    Slot {
                        key,
                        event: issued.clone(),
                    },
                )
                .map(|slot| slot.event);
            rollovers.push(Rollover {
                cadence,
                expired,
                issued,
            });
        }
        rollovers
    }

    /// The active event for a cadence, if its slot has been filled.
    pub fn current(&self, cadence: Cadence) -> Option<&Event> {
        self.slots.get(&cadence).map(|slot| &slot.event)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
