//! Per-cadence template lists with a guaranteed-non-empty contract.
//!
//! The store owns one ordered list of compiled [`HeadlineTemplate`] per
//! [`Cadence`]. If loading would leave a cadence with no templates, the
//! built-in fallback headline is substituted, so the generator can always
//! select a template without handling an empty candidate set.

use std::path::Path;

use rand::Rng;
use tracing::{info, warn};

use gazette_types::Cadence;

use crate::error::ContentError;
use crate::resource;
use crate::template::HeadlineTemplate;

/// Headline of the built-in fallback template, used whenever a cadence's
/// template list would otherwise be empty.
pub const FALLBACK_HEADLINE: &str = "Nothing to report.";

/// Resource file name for a cadence's template list.
const fn template_file_name(cadence: Cadence) -> &'static str {
    match cadence {
        Cadence::Monthly => "monthly.txt",
        Cadence::Biweekly => "biweekly.txt",
        Cadence::Weekly => "weekly.txt",
    }
}

/// Compiled headline templates, one non-empty ordered list per cadence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStore {
    monthly: Vec<HeadlineTemplate>,
    biweekly: Vec<HeadlineTemplate>,
    weekly: Vec<HeadlineTemplate>,
    fallback: HeadlineTemplate,
}

impl TemplateStore {
    /// Build a store from already-compiled template lists.
    ///
    /// Any empty list is replaced by the single built-in fallback template.
    pub fn new(
        monthly: Vec<HeadlineTemplate>,
        biweekly: Vec<HeadlineTemplate>,
        weekly: Vec<HeadlineTemplate>,
    ) -> Self {
        Self {
            monthly: ensure_non_empty(Cadence::Monthly, monthly),
            biweekly: ensure_non_empty(Cadence::Biweekly, biweekly),
            weekly: ensure_non_empty(Cadence::Weekly, weekly),
            fallback: HeadlineTemplate::parse(FALLBACK_HEADLINE),
        }
    }

    /// Build a store by compiling three raw resource texts, one per
    /// cadence, in the shared line format.
    pub fn from_resources(monthly: &str, biweekly: &str, weekly: &str) -> Self {
        Self::new(
            compile_lines(monthly),
            compile_lines(biweekly),
            compile_lines(weekly),
        )
    }

    /// Load a store from `monthly.txt`, `biweekly.txt`, and `weekly.txt`
    /// inside the given directory. Missing files load as empty lists and
    /// therefore fall back to the built-in template.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if a present file cannot be read.
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        let mut lists = Vec::with_capacity(Cadence::ALL.len());
        for cadence in Cadence::ALL {
            let raw = resource::read_optional(&dir.join(template_file_name(cadence)))?;
            let compiled = compile_lines(&raw);
            info!(%cadence, count = compiled.len(), "loaded headline templates");
            lists.push(compiled);
        }
        let mut lists = lists.into_iter();
        let monthly = lists.next().unwrap_or_default();
        let biweekly = lists.next().unwrap_or_default();
        let weekly = lists.next().unwrap_or_default();
        Ok(Self::new(monthly, biweekly, weekly))
    }

    /// The template list for a cadence. Guaranteed non-empty.
    pub fn templates(&self, cadence: Cadence) -> &[HeadlineTemplate] {
        match cadence {
            Cadence::Monthly => &self.monthly,
            Cadence::Biweekly => &self.biweekly,
            Cadence::Weekly => &self.weekly,
        }
    }

    /// Select one template for a cadence using the shared random source.
    ///
    /// The index is sampled even when only one template is loaded, so the
    /// same seed replays the same selection and the same downstream draws.
    pub fn pick(&self, cadence: Cadence, rng: &mut impl Rng) -> &HeadlineTemplate {
        let list = self.templates(cadence);
        let index = rng.random_range(0..list.len());
        list.get(index).unwrap_or(&self.fallback)
    }
}

/// Compile each entry of a raw resource text into a template.
fn compile_lines(raw: &str) -> Vec<HeadlineTemplate> {
    resource::entries(raw)
        .iter()
        .map(|line| HeadlineTemplate::parse(line))
        .collect()
}

/// Replace an empty template list with the built-in fallback.
fn ensure_non_empty(cadence: Cadence, list: Vec<HeadlineTemplate>) -> Vec<HeadlineTemplate> {
    if list.is_empty() {
        warn!(%cadence, "no templates loaded, substituting built-in fallback");
        vec![HeadlineTemplate::parse(FALLBACK_HEADLINE)]
    } else {
        list
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn empty_cadence_gets_the_fallback_template() {
        let store = TemplateStore::from_resources("", "Real headline %2", "weekly one");
        let monthly = store.templates(Cadence::Monthly);
        assert_eq!(
            monthly,
            &[HeadlineTemplate::parse(FALLBACK_HEADLINE)]
        );
        assert_eq!(store.templates(Cadence::Biweekly).len(), 1);
    }

    #[test]
    fn comment_and_blank_lines_load_to_exactly_one_template() {
        let raw = "\n   \n# comment\nReal headline %2\n";
        let store = TemplateStore::from_resources(raw, "x", "x");
        let monthly = store.templates(Cadence::Monthly);
        assert_eq!(monthly.len(), 1);
        assert_eq!(
            monthly.first().map(HeadlineTemplate::tokens),
            Some(HeadlineTemplate::parse("Real headline %2").tokens())
        );
    }

    #[test]
    fn pick_is_deterministic_for_a_fixed_seed() {
        let raw = "one\ntwo\nthree\nfour %2\nfive";
        let store = TemplateStore::from_resources(raw, "x", "x");

        let mut rng_a = SmallRng::seed_from_u64(99);
        let mut rng_b = SmallRng::seed_from_u64(99);
        let pick_a = store.pick(Cadence::Monthly, &mut rng_a);
        let pick_b = store.pick(Cadence::Monthly, &mut rng_b);
        assert_eq!(pick_a, pick_b);
    }

    #[test]
    fn pick_from_singleton_list_returns_that_template() {
        let store = TemplateStore::from_resources("only %3", "x", "x");
        let mut rng = SmallRng::seed_from_u64(0);
        let picked = store.pick(Cadence::Monthly, &mut rng);
        assert_eq!(picked, &HeadlineTemplate::parse("only %3"));
        assert!(picked.has_item_slot());
    }
}
