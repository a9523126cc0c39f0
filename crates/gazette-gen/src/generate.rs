//! The generator facade: seed, pick, instantiate.
//!
//! [`EventGenerator`] owns the template store and the content catalog and
//! exposes one operation: produce the event for a `(cadence, date,
//! session)` triple. The data flow is fixed: derive the seed, seed a fresh
//! random source, pick one template for the cadence with it, then resolve
//! the template's tokens against the same source.

use gazette_content::{ContentCatalog, TemplateStore};
use gazette_types::{Cadence, Event, GameDate, SessionId};

use crate::error::GeneratorError;
use crate::instantiate::instantiate;
use crate::provider::CatalogProvider;
use crate::seed;

/// Deterministic headline event generator.
#[derive(Debug, Clone)]
pub struct EventGenerator {
    store: TemplateStore,
    catalog: ContentCatalog,
}

impl EventGenerator {
    /// Wire a generator to its content.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyCatalog`] if the catalog holds no
    /// items and no locations -- generating against unloaded content is a
    /// setup error and fails fast rather than producing blank headlines
    /// forever. (An empty template list can never reach this point: the
    /// store substitutes its built-in fallback.)
    pub fn new(store: TemplateStore, catalog: ContentCatalog) -> Result<Self, GeneratorError> {
        if catalog.is_empty() {
            return Err(GeneratorError::EmptyCatalog);
        }
        Ok(Self { store, catalog })
    }

    /// The template store this generator selects from.
    pub const fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// The content catalog this generator resolves against.
    pub const fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// Generate the event for a cadence at a date, for a session.
    ///
    /// Fully deterministic: the same `(cadence, date-period, session)`
    /// always produces a bit-identical [`Event`], so a prior event can be
    /// replayed exactly by calling this again with the same inputs.
    pub fn generate(&self, cadence: Cadence, date: GameDate, session: SessionId) -> Event {
        let seed = seed::derive(cadence, date, session);
        let mut provider = CatalogProvider::new(&self.catalog, seed);
        let template = self.store.pick(cadence, provider.rng_mut());
        instantiate(template, &mut provider)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
