//! DPS - The SCRAM model
//!
//! `dps = S * C * R * A * M`
//! - S: 1 + primary attribute * primary_scaling
//! - C: 1 + crit chance * crit damage
//! - R: attacks per second (mean of equipped hands)
//! - A: average hit (mean of equipped hands)
//! - M: reserved skill multiplier, always 1

use crate::config::Settings;
use crate::stat_block::{AttributeStore, DamageStats, DpsStats, Scram, SpeedStats};
use crate::types::HeroClass;

/// SCRAM factors for a class and its weapons
pub fn scram(
    class: HeroClass,
    stats: &AttributeStore,
    damage: &DamageStats,
    speeds: &SpeedStats,
    settings: &Settings,
) -> Scram {
    let primary = stats.get(class.primary().key());
    Scram {
        s: 1.0 + primary * settings.formulas.primary_scaling,
        c: 1.0 + (stats.get("critical-hit") / 100.0) * (stats.get("critical-hit-damage") / 100.0),
        r: speeds.attacks_per_second(),
        a: damage.average_hit(),
        m: 1.0,
    }
}

/// DPS overall and against demons and elites
pub fn dps(
    class: HeroClass,
    stats: &AttributeStore,
    damage: &DamageStats,
    speeds: &SpeedStats,
    settings: &Settings,
) -> DpsStats {
    let scram = scram(class, stats, damage, speeds, settings);
    let dps = scram.product();
    let demon = 1.0 + stats.get("demon-damage") / 100.0;
    let elite = 1.0 + stats.get("elite-damage") / 100.0;
    DpsStats {
        dps,
        dps_demon: dps * demon,
        dps_elite: dps * elite,
        dps_elite_demon: dps * demon * elite,
        scram,
    }
}
