//! Walking a compiled template into a concrete [`Event`].
//!
//! Tokens are resolved strictly in template order against a
//! [`ContentProvider`], so the draw sequence -- and therefore the output --
//! is fully determined by the provider's seed. The first item slot that
//! resolves fixes the event's affected item and original price; later item
//! slots still contribute their names to the headline but do not rebind
//! the price effect.

use std::collections::BTreeSet;

use rand::{Rng, RngCore};
use tracing::warn;

use gazette_content::{HeadlineTemplate, Token};
use gazette_types::{Event, ItemId};

use crate::provider::ContentProvider;

/// The eleven admissible percent changes: multiples of 5 in `[-25, 25]`.
const PERCENT_CHOICES: [i8; 11] = [-25, -20, -15, -10, -5, 0, 5, 10, 15, 20, 25];

/// Resolve a template into a freshly constructed, immutable [`Event`].
///
/// Pure generation: no state outside the provider's random source is
/// touched. Applying the resulting price change to the game world is the
/// caller's concern.
pub fn instantiate(template: &HeadlineTemplate, provider: &mut dyn ContentProvider) -> Event {
    let mut headline = String::new();
    let mut affected: Option<(ItemId, u32)> = None;

    for token in template.tokens() {
        match token {
            Token::Literal(text) => headline.push_str(text),
            Token::ItemSlot(candidates) => {
                let Some(category) = choose(candidates, provider.rng()) else {
                    continue;
                };
                let Some(id) = provider.random_item(category) else {
                    continue;
                };
                match provider.lookup_item(id) {
                    Some(info) => {
                        headline.push_str(&info.name);
                        // First item slot in token order wins.
                        if affected.is_none() {
                            affected = Some((id, info.price));
                        }
                    }
                    None => warn!(%id, "item id resolved but missing from catalog"),
                }
            }
            Token::FlavorSlot(candidates) => {
                let Some(category) = choose(candidates, provider.rng()) else {
                    continue;
                };
                let text = provider.flavor_text(category);
                headline.push_str(&text);
            }
        }
    }

    // Always drawn, even for flavor-only events, so the draw sequence does
    // not depend on catalog contents.
    let percent_change = draw_percent_change(provider.rng());

    match affected {
        Some((item, original_price)) => {
            Event::affecting(headline, item, original_price, percent_change)
        }
        None => Event::flavor_only(headline, percent_change),
    }
}

/// Choose one candidate category from a slot's set.
///
/// A single-candidate slot resolves directly without consuming randomness;
/// larger sets draw uniformly from the shared source.
fn choose<T: Copy + Ord>(candidates: &BTreeSet<T>, rng: &mut dyn RngCore) -> Option<T> {
    match candidates.len() {
        0 => None,
        1 => candidates.iter().next().copied(),
        len => {
            let index = rng.random_range(0..len);
            candidates.iter().nth(index).copied()
        }
    }
}

/// Draw a uniformly random multiple of 5 in `[-25, 25]`.
fn draw_percent_change(rng: &mut dyn RngCore) -> i8 {
    let index = rng.random_range(0..PERCENT_CHOICES.len());
    PERCENT_CHOICES.get(index).copied().unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
