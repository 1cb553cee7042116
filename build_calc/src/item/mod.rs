//! Item classification - which ingestion rules apply to an item type

mod rules;

pub use rules::{IngestionRules, BASE_IGNORES};

use serde::{Deserialize, Serialize};

/// Equipment category an item type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Generic,
    Armor,
    Weapon,
    Shield,
}

const GENERIC_TYPES: &[&str] = &["amulet", "ring", "mojo", "source", "quiver"];

const ARMOR_TYPES: &[&str] = &[
    "belt",
    "boots",
    "bracers",
    "chest",
    "cloak",
    "gloves",
    "helm",
    "pants",
    "mighty-belt",
    "shoulders",
    "spirit-stone",
    "voodoo-mask",
    "wizard-hat",
];

const WEAPON_TYPES: &[&str] = &[
    "2h-mace",
    "2h-axe",
    "bow",
    "daibo",
    "crossbow",
    "2h-mighty",
    "polearm",
    "staff",
    "2h-sword",
    "axe",
    "ceremonial-knife",
    "hand-crossbow",
    "dagger",
    "fist-weapon",
    "mace",
    "mighty-weapon",
    "spear",
    "sword",
    "wand",
];

const SHIELD_TYPES: &[&str] = &["shield"];

impl ItemCategory {
    /// Get all categories
    pub fn all() -> &'static [ItemCategory] {
        &[
            ItemCategory::Generic,
            ItemCategory::Armor,
            ItemCategory::Weapon,
            ItemCategory::Shield,
        ]
    }

    /// Item-type tags belonging to this category
    pub fn item_types(&self) -> &'static [&'static str] {
        match self {
            ItemCategory::Generic => GENERIC_TYPES,
            ItemCategory::Armor => ARMOR_TYPES,
            ItemCategory::Weapon => WEAPON_TYPES,
            ItemCategory::Shield => SHIELD_TYPES,
        }
    }

    /// Ingestion rules for items of this category
    pub fn rules(&self) -> IngestionRules {
        IngestionRules::for_category(Some(*self))
    }
}

/// Classify a raw item-type tag; unknown tags have no category
pub fn classify(item_type: &str) -> Option<ItemCategory> {
    ItemCategory::all()
        .iter()
        .copied()
        .find(|category| category.item_types().iter().any(|t| *t == item_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_types() {
        assert_eq!(classify("ring"), Some(ItemCategory::Generic));
        assert_eq!(classify("voodoo-mask"), Some(ItemCategory::Armor));
        assert_eq!(classify("2h-mighty"), Some(ItemCategory::Weapon));
        assert_eq!(classify("shield"), Some(ItemCategory::Shield));
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(classify("not matching"), None);
        assert_eq!(classify(""), None);
        assert_eq!(classify("Helm"), None);
    }

    #[test]
    fn test_every_tag_in_exactly_one_category() {
        let mut total = 0;
        for category in ItemCategory::all() {
            for tag in category.item_types() {
                total += 1;
                let owners = ItemCategory::all()
                    .iter()
                    .filter(|c| c.item_types().contains(tag))
                    .count();
                assert_eq!(owners, 1, "{} is in {} categories", tag, owners);
                assert_eq!(classify(tag), Some(*category));
            }
        }
        assert_eq!(total, 38);
    }

    proptest! {
        #[test]
        fn prop_classify_is_total(tag in "[a-z0-9-]{0,20}") {
            let known = ItemCategory::all()
                .iter()
                .any(|c| c.item_types().iter().any(|t| *t == tag.as_str()));
            prop_assert_eq!(classify(&tag).is_some(), known);
        }
    }
}
