//! Damage system - Weapon hits, attack speed and DPS

mod dps;
mod speed;
mod weapon;

pub use dps::{dps, scram};
pub use speed::{attack_speeds, weapon_speed};
pub use weapon::{damage_stats, elemental_percent, weapon_damage};

use crate::item::{classify, ItemCategory};
use crate::stat_block::to_number;
use crate::types::{EquipmentSlot, Item};
use serde_json::Value;

/// A weapon-holding slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    MainHand,
    OffHand,
}

impl Hand {
    pub fn all() -> &'static [Hand] {
        &[Hand::MainHand, Hand::OffHand]
    }

    pub fn slot(&self) -> EquipmentSlot {
        match self {
            Hand::MainHand => EquipmentSlot::MainHand,
            Hand::OffHand => EquipmentSlot::OffHand,
        }
    }

    /// Attribute holding this hand's weapon-damage gem bonus
    pub fn gem_key(&self) -> &'static str {
        match self {
            Hand::MainHand => "ruby-damage-mh",
            Hand::OffHand => "ruby-damage-oh",
        }
    }
}

/// Whether an item is a weapon by its type tag
pub fn is_weapon(item: &Item) -> bool {
    classify(&item.item_type) == Some(ItemCategory::Weapon)
}

/// Numeric affix on an item (0 if missing)
fn affix(item: &Item, key: &str) -> f64 {
    item.attrs.get(key).map(to_number).unwrap_or(0.0)
}

/// `{min, max}` pair from a structured value; missing parts are 0
fn range(value: Option<&Value>) -> (f64, f64) {
    match value {
        Some(v) => (
            v.get("min").map(to_number).unwrap_or(0.0),
            v.get("max").map(to_number).unwrap_or(0.0),
        ),
        None => (0.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_range() {
        assert_eq!(range(Some(&json!({"min": 3, "max": "7"}))), (3.0, 7.0));
        assert_eq!(range(Some(&json!({"max": 7}))), (0.0, 7.0));
        assert_eq!(range(Some(&json!(12))), (0.0, 0.0));
        assert_eq!(range(None), (0.0, 0.0));
    }

    #[test]
    fn test_is_weapon() {
        assert!(is_weapon(&Item::new("sword")));
        assert!(!is_weapon(&Item::new("shield")));
        assert!(!is_weapon(&Item::new("mystery")));
    }
}
