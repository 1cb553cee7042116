//! Attack speed - Per-hand attacks per second and frame breakpoints

use super::{affix, is_weapon, Hand};
use crate::config::Settings;
use crate::stat_block::{to_number, AttributeStore, SpeedStats, WeaponSpeed};
use crate::types::{EquipmentSlot, Item};
use std::collections::BTreeMap;

/// Attack rate for a weapon's base attacks per second
///
/// `aps = base * (1 + attack-speed/100 + baseline)`, then snapped to the
/// animation frame grid. The frame divisor never drops below 1.
pub fn weapon_speed(base: f64, stats: &AttributeStore, settings: &Settings) -> WeaponSpeed {
    let f = &settings.formulas;
    let aps = base * (1.0 + stats.get("attack-speed") / 100.0 + f.baseline_attack_speed);
    let frames = (f.frames_per_tick / aps).floor().max(1.0);
    WeaponSpeed {
        aps,
        ticks: f.ticks_per_second / frames,
    }
}

/// Listed speed plus the item's own `plus-aps`, if it lists a speed
fn base_speed(item: &Item) -> Option<f64> {
    let speed = item.stats.get("speed").map(to_number)?;
    Some(speed + affix(item, "plus-aps"))
}

/// Speeds for both hands
///
/// A non-weapon off-hand (quiver, mojo, source) speeds up the main hand
/// instead of attacking itself.
pub fn attack_speeds(
    gear: &BTreeMap<EquipmentSlot, Item>,
    stats: &AttributeStore,
    settings: &Settings,
) -> SpeedStats {
    let offhand = gear.get(&Hand::OffHand.slot());
    let off_bonus = offhand
        .filter(|item| !is_weapon(item))
        .map(|item| affix(item, "plus-aps"))
        .unwrap_or(0.0);

    let mainhand = gear
        .get(&Hand::MainHand.slot())
        .and_then(base_speed)
        .map(|base| weapon_speed(base + off_bonus, stats, settings));

    let offhand = offhand
        .filter(|item| is_weapon(item))
        .and_then(base_speed)
        .map(|base| weapon_speed(base, stats, settings));

    SpeedStats { mainhand, offhand }
}
