//! Enumeration types for the Gazette headline generator.
//!
//! Defines the in-game seasons, the three event cadences, and the closed
//! set of substitution categories that headline templates may reference by
//! numeric code.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Season
// ---------------------------------------------------------------------------

/// A season of the in-game year. Every year has exactly four seasons of
/// [`DAYS_PER_SEASON`](crate::date::DAYS_PER_SEASON) days each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// First season of the year (index 0).
    Spring,
    /// Second season of the year (index 1).
    Summer,
    /// Third season of the year (index 2).
    Fall,
    /// Fourth season of the year (index 3).
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Fall, Self::Winter];

    /// Zero-based index of this season within the year (0..=3).
    pub const fn index(self) -> u64 {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Fall => 2,
            Self::Winter => 3,
        }
    }

    /// Season following this one, wrapping from winter back to spring.
    pub const fn next(self) -> Self {
        match self {
            Self::Spring => Self::Summer,
            Self::Summer => Self::Fall,
            Self::Fall => Self::Winter,
            Self::Winter => Self::Spring,
        }
    }

    /// Parse a season from its lowercase name (`"spring"`, `"summer"`,
    /// `"fall"`, `"winter"`). Returns `None` for anything else.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "spring" => Some(Self::Spring),
            "summer" => Some(Self::Summer),
            "fall" => Some(Self::Fall),
            "winter" => Some(Self::Winter),
            _ => None,
        }
    }
}

impl core::fmt::Display for Season {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Cadence
// ---------------------------------------------------------------------------

/// Recurrence class of an economy event. Each cadence owns its own template
/// list and its own seed formula, and rolls over independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// One event per season, issued on day 1.
    Monthly,
    /// One event per half-season, issued on days 1 and 15.
    Biweekly,
    /// One event per week, issued on days 1, 8, 15, and 22.
    Weekly,
}

impl Cadence {
    /// All cadences, from slowest to fastest.
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Biweekly, Self::Weekly];
}

impl core::fmt::Display for Cadence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Monthly => "monthly",
            Self::Biweekly => "biweekly",
            Self::Weekly => "weekly",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Substitution categories
// ---------------------------------------------------------------------------

/// An item substitution category. Resolving a slot of one of these
/// categories yields a concrete catalog item whose name is spliced into the
/// headline and whose id and price may become the event's affected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    /// A farmed crop.
    Crop,
    /// A mined mineral or gem.
    Mineral,
    /// A wild foraged good.
    Foraged,
    /// A freshwater fish.
    RiverFish,
    /// A saltwater fish.
    OceanFish,
    /// An artisan good (cheese, wine, preserves).
    Artisan,
    /// A cooked dish.
    Cooked,
}

/// A flavor substitution category. Resolving one of these yields display
/// text only; it never binds the event's affected item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FlavorCategory {
    /// An earthquake magnitude, rendered to one decimal place.
    Earthquake,
    /// A place name drawn from the catalog's location list.
    Location,
    /// A casualty count, rendered as a plain integer.
    Fatalities,
}

/// A substitution category tagged with its supertype: either an item
/// category (binds prices) or a flavor category (text only).
///
/// The numeric codes used in raw template text map onto this type via
/// [`Category::from_code`]; the mapping is fixed and closed:
///
/// | Code | Category   | Supertype |
/// |------|------------|-----------|
/// | 0    | Earthquake | Flavor    |
/// | 1    | Location   | Flavor    |
/// | 2    | Crop       | Item      |
/// | 3    | Mineral    | Item      |
/// | 4    | Fatalities | Flavor    |
/// | 5    | Foraged    | Item      |
/// | 6    | `RiverFish`  | Item      |
/// | 7    | `OceanFish`  | Item      |
/// | 8    | Artisan    | Item      |
/// | 9    | Cooked     | Item      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// An item category (resolves to a catalog item).
    Item(ItemCategory),
    /// A flavor category (resolves to display text).
    Flavor(FlavorCategory),
}

impl Category {
    /// Look up the category for a numeric template code.
    ///
    /// Returns `None` for codes outside 0..=9; the template parser treats
    /// an unrecognized code as a signal to degrade the whole escape to
    /// literal text.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Flavor(FlavorCategory::Earthquake)),
            1 => Some(Self::Flavor(FlavorCategory::Location)),
            2 => Some(Self::Item(ItemCategory::Crop)),
            3 => Some(Self::Item(ItemCategory::Mineral)),
            4 => Some(Self::Flavor(FlavorCategory::Fatalities)),
            5 => Some(Self::Item(ItemCategory::Foraged)),
            6 => Some(Self::Item(ItemCategory::RiverFish)),
            7 => Some(Self::Item(ItemCategory::OceanFish)),
            8 => Some(Self::Item(ItemCategory::Artisan)),
            9 => Some(Self::Item(ItemCategory::Cooked)),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
