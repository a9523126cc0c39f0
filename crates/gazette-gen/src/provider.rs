//! The content provider capability consumed by the instantiator.
//!
//! The instantiator never touches the catalog or the random source
//! directly; it goes through [`ContentProvider`], which bundles the shared
//! deterministic random source with the category queries. The production
//! implementation is [`CatalogProvider`], which borrows a
//! [`ContentCatalog`] and owns a seeded [`SmallRng`].
//!
//! The random source is threaded explicitly, never ambient: reseeding
//! fully determines every subsequent draw, which is what makes replaying
//! a prior event bit-identical.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::warn;

use gazette_content::{ContentCatalog, ItemInfo};
use gazette_types::{FlavorCategory, ItemCategory, ItemId};

/// Earthquake magnitudes are drawn in tenths, rendered as `d.d`.
const MAGNITUDE_TENTHS: core::ops::Range<u32> = 10..100;

/// Fatality counts for disaster headlines.
const FATALITIES: core::ops::Range<u32> = 2..88;

/// Capability surface giving the instantiator category-specific content
/// plus the shared deterministic random source.
///
/// Canonical lookups ([`lookup_item`](Self::lookup_item)) are pure: the
/// same id always yields the same answer. Random queries advance the
/// shared random state and must be called in token order to stay
/// deterministic.
pub trait ContentProvider {
    /// The shared random source.
    fn rng(&mut self) -> &mut dyn RngCore;

    /// Canonical name and price for an item id.
    fn lookup_item(&self, id: ItemId) -> Option<ItemInfo>;

    /// A random item id of the given category, advancing the shared
    /// random state. `None` if the category has no items.
    fn random_item(&mut self, category: ItemCategory) -> Option<ItemId>;

    /// Display text for a flavor category, advancing the shared random
    /// state.
    fn flavor_text(&mut self, category: FlavorCategory) -> String;
}

/// The production [`ContentProvider`]: a borrowed [`ContentCatalog`] plus
/// an owned, explicitly seeded [`SmallRng`].
#[derive(Debug)]
pub struct CatalogProvider<'a> {
    catalog: &'a ContentCatalog,
    rng: SmallRng,
}

impl<'a> CatalogProvider<'a> {
    /// Create a provider over `catalog`, seeding the random source from
    /// `seed`.
    pub fn new(catalog: &'a ContentCatalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Reset the shared random source to a fresh seed. All subsequent
    /// draws are fully determined by the new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Concrete access to the random source (for callers that need an
    /// `impl Rng` rather than a trait object).
    pub fn rng_mut(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

impl ContentProvider for CatalogProvider<'_> {
    fn rng(&mut self) -> &mut dyn RngCore {
        &mut self.rng
    }

    fn lookup_item(&self, id: ItemId) -> Option<ItemInfo> {
        self.catalog.lookup(id).cloned()
    }

    fn random_item(&mut self, category: ItemCategory) -> Option<ItemId> {
        let ids = self.catalog.category_items(category);
        if ids.is_empty() {
            warn!(?category, "category has no items, slot resolves to nothing");
            return None;
        }
        let index = self.rng.random_range(0..ids.len());
        ids.get(index).copied()
    }

    fn flavor_text(&mut self, category: FlavorCategory) -> String {
        match category {
            FlavorCategory::Earthquake => {
                let tenths = self.rng.random_range(MAGNITUDE_TENTHS);
                format!("{}.{}", tenths / 10, tenths % 10)
            }
            FlavorCategory::Fatalities => self.rng.random_range(FATALITIES).to_string(),
            FlavorCategory::Location => {
                let names = self.catalog.locations();
                if names.is_empty() {
                    warn!("no locations loaded, location slot resolves to nothing");
                    return String::new();
                }
                let index = self.rng.random_range(0..names.len());
                names.get(index).cloned().unwrap_or_default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
