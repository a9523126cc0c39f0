//! The immutable economy event record.
//!
//! An [`Event`] is constructed once by the instantiator, persisted as part
//! of session state, and replaced -- never mutated -- when its cadence
//! rolls over. Applying (and later reversing) the price effect against the
//! game world is the caller's responsibility.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

/// Sentinel value of [`Event::affected_item_id`] for events that carry no
/// item substitution at all (flavor-only headlines).
pub const NO_AFFECTED_ITEM: i32 = -1;

/// A fully resolved economy event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Fully resolved display text.
    pub headline: String,

    /// Identifier of the first item substitution resolved in the template,
    /// or [`NO_AFFECTED_ITEM`] if the template contained none.
    pub affected_item_id: i32,

    /// Canonical price of the affected item at generation time; 0 when no
    /// item is affected.
    pub original_price: u32,

    /// Signed percentage delta, always a multiple of 5 in `[-25, 25]`.
    pub percent_change: i8,
}

impl Event {
    /// Build an event that affects an item's price.
    pub const fn affecting(
        headline: String,
        item: ItemId,
        original_price: u32,
        percent_change: i8,
    ) -> Self {
        Self {
            headline,
            affected_item_id: item.into_inner(),
            original_price,
            percent_change,
        }
    }

    /// Build a flavor-only event with no affected item.
    pub const fn flavor_only(headline: String, percent_change: i8) -> Self {
        Self {
            headline,
            affected_item_id: NO_AFFECTED_ITEM,
            original_price: 0,
            percent_change,
        }
    }

    /// The affected item, if any.
    pub const fn affected_item(&self) -> Option<ItemId> {
        if self.affected_item_id == NO_AFFECTED_ITEM {
            None
        } else {
            Some(ItemId::new(self.affected_item_id))
        }
    }

    /// The price of the affected item after applying the percentage delta:
    /// `original + floor(original * percent / 100)`.
    ///
    /// The flooring is true mathematical floor (toward negative infinity),
    /// so a negative delta always rounds the reduction up in magnitude.
    /// With `percent_change` bounded at -25 the result can never go below
    /// zero for any `original_price`; an increase that would exceed
    /// `u32::MAX` saturates there.
    pub fn new_price(&self) -> u32 {
        let original = i64::from(self.original_price);
        let delta = original
            .saturating_mul(i64::from(self.percent_change))
            .div_euclid(100);
        u32::try_from(original.saturating_add(delta)).unwrap_or(u32::MAX)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_price_exact_percentages() {
        let event = Event::affecting("x".to_owned(), ItemId::new(24), 100, -10);
        assert_eq!(event.new_price(), 90);
    }

    #[test]
    fn new_price_floors_fractional_gains() {
        // 37 * 15 / 100 = 5.55, floored to 5.
        let event = Event::affecting("x".to_owned(), ItemId::new(24), 37, 15);
        assert_eq!(event.new_price(), 42);
    }

    #[test]
    fn new_price_floors_toward_negative_infinity() {
        // 37 * -10 / 100 = -3.7, floored to -4 (not truncated to -3).
        let event = Event::affecting("x".to_owned(), ItemId::new(24), 37, -10);
        assert_eq!(event.new_price(), 33);
    }

    #[test]
    fn new_price_saturates_at_the_upper_bound() {
        // An increase that would exceed u32::MAX clamps there instead of
        // wrapping or collapsing.
        let event = Event::affecting("x".to_owned(), ItemId::new(24), u32::MAX, 25);
        assert_eq!(event.new_price(), u32::MAX);

        let event = Event::affecting("x".to_owned(), ItemId::new(24), u32::MAX, -25);
        // 4294967295 * -25 / 100 floors to -1073741824.
        assert_eq!(event.new_price(), 3_221_225_471);
    }

    #[test]
    fn new_price_of_flavor_event_is_zero() {
        let event = Event::flavor_only("Nothing to report.".to_owned(), -25);
        assert_eq!(event.new_price(), 0);
        assert_eq!(event.affected_item(), None);
    }

    #[test]
    fn affected_item_round_trips_through_sentinel() {
        let event = Event::affecting("x".to_owned(), ItemId::new(613), 200, 5);
        assert_eq!(event.affected_item(), Some(ItemId::new(613)));
        assert_eq!(event.affected_item_id, 613);
    }

    #[test]
    fn event_serde_round_trip() {
        let event = Event::affecting("Crops up".to_owned(), ItemId::new(7), 120, 20);
        let json = serde_json::to_string(&event).unwrap_or_default();
        let back: Event = serde_json::from_str(&json).unwrap_or_else(|_| Event::flavor_only(String::new(), 0));
        assert_eq!(back, event);
    }
}
