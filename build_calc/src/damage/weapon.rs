//! Weapon damage - Per-hand hit ranges
//!
//! A weapon's listed damage already includes its own affixes. The base is
//! recovered by stripping them, then every bonus in the attribute store is
//! applied on top:
//! - base = listed / (1 + plus-damage/100) - item flat damage
//! - bonus = item flat damage + store flat damage + hand gem
//! - hit = (base + bonus) * (1 + plus-damage/100) + elemental range

use super::{affix, is_weapon, range, Hand};
use crate::item::BASE_IGNORES;
use crate::stat_block::{AttributeStore, DamageStats, WeaponDamage};
use crate::types::{EquipmentSlot, Item};
use std::collections::BTreeMap;

/// Elemental damage percent bonuses that scale the average hit
const ELEMENTAL_PERCENTS: &[&str] = &[
    "plus-fire-damage",
    "plus-cold-damage",
    "plus-lightning-damage",
    "plus-poison-damage",
    "plus-arcane-damage",
    "plus-holy-damage",
];

/// Summed elemental damage percent from the store
pub fn elemental_percent(stats: &AttributeStore) -> f64 {
    ELEMENTAL_PERCENTS.iter().map(|key| stats.get(key)).sum()
}

/// Hit damage for the weapon in one hand
///
/// Returns `None` if the item is not a weapon or lists no damage.
pub fn weapon_damage(hand: Hand, item: &Item, stats: &AttributeStore) -> Option<WeaponDamage> {
    if !is_weapon(item) {
        return None;
    }
    let (listed_min, listed_max) = range(Some(item.stats.get("damage")?));

    let multiplier = 1.0 + affix(item, "plus-damage") / 100.0;
    let (item_minmax_min, item_minmax_max) = range(item.attrs.get("minmax-damage"));
    let flat_min = affix(item, "min-damage") + item_minmax_min;
    let flat_max = affix(item, "max-damage") + item_minmax_max;

    let base_min = listed_min / multiplier - flat_min;
    let base_max = listed_max / multiplier - flat_max;

    let (store_minmax_min, store_minmax_max) = range(stats.structured("minmax-damage"));
    let gem = stats.get(hand.gem_key());
    let bonus_min = flat_min + stats.get("min-damage") + store_minmax_min + gem;
    let bonus_max = flat_max + stats.get("max-damage") + store_minmax_max + gem;

    let (elemental_min, elemental_max) = BASE_IGNORES
        .iter()
        .map(|key| range(item.attrs.get(*key)))
        .fold((0.0, 0.0), |(lo, hi), (min, max)| (lo + min, hi + max));

    let min = (base_min + bonus_min) * multiplier + elemental_min;
    let max = (base_max + bonus_max) * multiplier + elemental_max;
    let average = (min + max) / 2.0 * (1.0 + elemental_percent(stats) / 100.0);

    Some(WeaponDamage { min, max, average })
}

/// Damage for both hands; a hand without a weapon is left empty
pub fn damage_stats(gear: &BTreeMap<EquipmentSlot, Item>, stats: &AttributeStore) -> DamageStats {
    let hit = |hand: Hand| {
        gear.get(&hand.slot())
            .and_then(|item| weapon_damage(hand, item, stats))
    };
    DamageStats {
        mainhand: hit(Hand::MainHand),
        offhand: hit(Hand::OffHand),
    }
}
