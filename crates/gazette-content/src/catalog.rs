//! The explicitly constructed content catalog.
//!
//! The catalog holds everything a headline slot can resolve against: the
//! item table (id to name and canonical price), one item-id list per
//! [`ItemCategory`], and the location name list. It is built once at
//! startup by whoever wires up the generator and passed by reference --
//! never a lazily initialized global.
//!
//! # Item table format
//!
//! One item per line, in the shared resource line format, with three
//! `|`-separated fields: `id|name|price`. Example:
//!
//! ```text
//! 24|Parsnip|35
//! 613|Apple|100
//! ```
//!
//! Malformed lines are dropped with a warning. Category lists are plain
//! numeric resources; ids that do not appear in the item table are dropped
//! at load time so lookups during generation cannot dangle.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use gazette_types::{ItemCategory, ItemId};

use crate::error::ContentError;
use crate::resource;

/// Canonical name and price of a catalog item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    /// Display name spliced into headlines.
    pub name: String,
    /// Canonical price in gold at generation time.
    pub price: u32,
}

/// Resource file name for an item category's id list.
const fn category_file_name(category: ItemCategory) -> &'static str {
    match category {
        ItemCategory::Crop => "crops.txt",
        ItemCategory::Mineral => "minerals.txt",
        ItemCategory::Foraged => "foraged.txt",
        ItemCategory::RiverFish => "river_fish.txt",
        ItemCategory::OceanFish => "ocean_fish.txt",
        ItemCategory::Artisan => "artisan.txt",
        ItemCategory::Cooked => "cooked.txt",
    }
}

/// All item categories, in code order.
const ITEM_CATEGORIES: [ItemCategory; 7] = [
    ItemCategory::Crop,
    ItemCategory::Mineral,
    ItemCategory::Foraged,
    ItemCategory::RiverFish,
    ItemCategory::OceanFish,
    ItemCategory::Artisan,
    ItemCategory::Cooked,
];

/// The content catalog: item table, per-category id lists, and location
/// names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentCatalog {
    items: BTreeMap<ItemId, ItemInfo>,
    categories: BTreeMap<ItemCategory, Vec<ItemId>>,
    locations: Vec<String>,
}

impl ContentCatalog {
    /// Build a catalog from parts, validating category lists against the
    /// item table.
    ///
    /// Category ids with no item-table entry are dropped (with a warning)
    /// so that generation-time lookups always succeed.
    pub fn new(
        items: BTreeMap<ItemId, ItemInfo>,
        categories: BTreeMap<ItemCategory, Vec<ItemId>>,
        locations: Vec<String>,
    ) -> Self {
        let categories = categories
            .into_iter()
            .map(|(category, ids)| {
                let kept: Vec<ItemId> = ids
                    .into_iter()
                    .filter(|id| {
                        let known = items.contains_key(id);
                        if !known {
                            warn!(?category, %id, "dropping category id missing from item table");
                        }
                        known
                    })
                    .collect();
                (category, kept)
            })
            .collect();
        Self {
            items,
            categories,
            locations,
        }
    }

    /// Load a catalog from a directory containing `items.txt`,
    /// `locations.txt`, and one numeric id list per item category
    /// (`crops.txt`, `minerals.txt`, ...). Missing files load as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if a present file cannot be read.
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        let items = parse_item_table(&resource::read_optional(&dir.join("items.txt"))?);
        let locations = resource::entries(&resource::read_optional(&dir.join("locations.txt"))?);

        let mut categories = BTreeMap::new();
        for category in ITEM_CATEGORIES {
            let raw = resource::read_optional(&dir.join(category_file_name(category)))?;
            let ids: Vec<ItemId> = resource::numeric_entries(&raw)
                .into_iter()
                .map(ItemId::new)
                .collect();
            categories.insert(category, ids);
        }

        let catalog = Self::new(items, categories, locations);
        info!(
            items = catalog.items.len(),
            locations = catalog.locations.len(),
            "loaded content catalog"
        );
        Ok(catalog)
    }

    /// Look up an item's canonical name and price. Pure: the same id
    /// always yields the same result for a given catalog.
    pub fn lookup(&self, id: ItemId) -> Option<&ItemInfo> {
        self.items.get(&id)
    }

    /// The item ids belonging to a category, in resource order.
    pub fn category_items(&self, category: ItemCategory) -> &[ItemId] {
        self.categories
            .get(&category)
            .map_or(&[], |ids| ids.as_slice())
    }

    /// The location name list, in resource order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Whether the catalog holds no items and no locations at all.
    /// Wiring a generator to such a catalog is a setup error.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.locations.is_empty()
    }
}

/// Parse the item table resource (`id|name|price` lines).
fn parse_item_table(raw: &str) -> BTreeMap<ItemId, ItemInfo> {
    let mut items = BTreeMap::new();
    for line in resource::entries(raw) {
        let Some((id, info)) = parse_item_line(&line) else {
            warn!(line = %line, "dropping malformed item table line");
            continue;
        };
        if items.insert(id, info).is_some() {
            warn!(%id, "duplicate item id in item table, keeping the last entry");
        }
    }
    items
}

/// Parse one `id|name|price` line. Returns `None` if the line does not
/// have exactly three fields, the id is negative or unparseable, the name
/// is empty, or the price does not parse.
fn parse_item_line(line: &str) -> Option<(ItemId, ItemInfo)> {
    let mut fields = line.splitn(3, '|');
    let id: i32 = fields.next()?.trim().parse().ok()?;
    let name = fields.next()?.trim();
    let price: u32 = fields.next()?.trim().parse().ok()?;
    if id < 0 || name.is_empty() {
        return None;
    }
    Some((
        ItemId::new(id),
        ItemInfo {
            name: name.to_owned(),
            price,
        },
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_from_resources(items: &str, crops: &str, locations: &str) -> ContentCatalog {
        let mut categories = BTreeMap::new();
        categories.insert(
            ItemCategory::Crop,
            resource::numeric_entries(crops)
                .into_iter()
                .map(ItemId::new)
                .collect(),
        );
        ContentCatalog::new(parse_item_table(items), categories, resource::entries(locations))
    }

    #[test]
    fn item_table_parses_well_formed_lines() {
        let catalog = catalog_from_resources("24|Parsnip|35\n613|Apple|100\n", "", "");
        assert_eq!(
            catalog.lookup(ItemId::new(24)),
            Some(&ItemInfo {
                name: "Parsnip".to_owned(),
                price: 35
            })
        );
        assert_eq!(catalog.lookup(ItemId::new(999)), None);
    }

    #[test]
    fn malformed_item_lines_are_dropped() {
        let raw = "24|Parsnip|35\nnot a line\n-5|Bad|10\n30||40\n31|NoPrice|\n";
        let catalog = catalog_from_resources(raw, "", "");
        assert_eq!(catalog.lookup(ItemId::new(24)).map(|i| i.price), Some(35));
        assert_eq!(catalog.lookup(ItemId::new(-5)), None);
        assert_eq!(catalog.lookup(ItemId::new(30)), None);
        assert_eq!(catalog.lookup(ItemId::new(31)), None);
    }

    #[test]
    fn item_names_may_contain_separator_free_punctuation() {
        let catalog = catalog_from_resources("72|Aged Cheese, Sharp|220\n", "", "");
        assert_eq!(
            catalog.lookup(ItemId::new(72)).map(|i| i.name.as_str()),
            Some("Aged Cheese, Sharp")
        );
    }

    #[test]
    fn category_ids_missing_from_item_table_are_dropped() {
        let catalog = catalog_from_resources("24|Parsnip|35\n", "24\n999\n", "");
        assert_eq!(
            catalog.category_items(ItemCategory::Crop),
            &[ItemId::new(24)]
        );
    }

    #[test]
    fn unknown_category_resolves_to_empty_slice() {
        let catalog = catalog_from_resources("24|Parsnip|35\n", "24\n", "");
        assert!(catalog.category_items(ItemCategory::Artisan).is_empty());
    }

    #[test]
    fn lookup_is_repeatable() {
        let catalog = catalog_from_resources("24|Parsnip|35\n", "24\n", "");
        let first = catalog.lookup(ItemId::new(24)).cloned();
        let second = catalog.lookup(ItemId::new(24)).cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn emptiness_requires_both_items_and_locations_empty() {
        let empty = catalog_from_resources("", "", "");
        assert!(empty.is_empty());

        let only_locations = catalog_from_resources("", "", "The Docks\n");
        assert!(!only_locations.is_empty());
    }
}
