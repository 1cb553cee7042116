//! Per-category ingestion rules for item affixes

use super::ItemCategory;
use std::collections::{BTreeMap, BTreeSet};

/// Raw elemental damage ranges; only the damage formulas read these
pub const BASE_IGNORES: &[&str] = &[
    "arcane-damage",
    "fire-damage",
    "lightning-damage",
    "poison-damage",
    "cold-damage",
    "holy-damage",
];

/// Affix remaps applied before the ignore check
const BASE_REMAPS: &[(&str, &str)] = &[("plus-block", "block-chance")];

/// Which affixes an item contributes, and under which names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionRules {
    pub ignored: BTreeSet<&'static str>,
    pub remap: BTreeMap<&'static str, &'static str>,
}

impl IngestionRules {
    /// Baseline rules plus the extras for a category
    ///
    /// Items with no category only get the baseline.
    pub fn for_category(category: Option<ItemCategory>) -> Self {
        let extra: &[&'static str] = match category {
            Some(ItemCategory::Generic) | None => &[],
            // Base armor is read from stats, never from affixes
            Some(ItemCategory::Armor) => &["armor"],
            // Weapon damage and speed are consumed from stats by the damage formulas
            Some(ItemCategory::Weapon) => &[
                "armor",
                "attack-speed",
                "max-damage",
                "min-damage",
                "plus-damage",
                "minmax-damage",
            ],
            Some(ItemCategory::Shield) => &["armor", "plus-block", "block-chance"],
        };

        IngestionRules {
            ignored: BASE_IGNORES.iter().chain(extra).copied().collect(),
            remap: BASE_REMAPS.iter().copied().collect(),
        }
    }

    /// Attribute name an affix is stored under
    pub fn target<'a>(&self, affix: &'a str) -> &'a str {
        self.remap.get(affix).copied().unwrap_or(affix)
    }

    /// Whether an attribute name is dropped for this category
    pub fn ignores(&self, attr: &str) -> bool {
        self.ignored.contains(attr)
    }

    /// Resolve an affix to the attribute it feeds, or `None` if ignored
    pub fn resolve<'a>(&self, affix: &'a str) -> Option<&'a str> {
        let target = self.target(affix);
        (!self.ignores(target)).then_some(target)
    }
}
