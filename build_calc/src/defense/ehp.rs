//! Effective health - Life divided by the fraction of damage that lands

use crate::config::Settings;
use crate::stat_block::{AttributeStore, EhpStats, Reductions};
use crate::types::HeroClass;

/// Fraction of a hit that gets through armor and one resistance
///
/// Melee classes take a flat share less on top of their mitigation.
pub fn damage_taken(
    armor_reduction: f64,
    resist_reduction: f64,
    class: HeroClass,
    settings: &Settings,
) -> f64 {
    let class_factor = if class.is_melee() {
        1.0 - settings.formulas.melee_mitigation
    } else {
        1.0
    };
    (1.0 - armor_reduction) * (1.0 - resist_reduction) * class_factor
}

/// Effective health pools for a build
///
/// The overall pool uses the mean resist reduction. Situational pools divide
/// by what is left after `melee-reduce`, `range-reduce` and `elite-reduce`.
pub fn effective_health(
    life: f64,
    reductions: &Reductions,
    class: HeroClass,
    stats: &AttributeStore,
    settings: &Settings,
) -> EhpStats {
    let by_type = reductions
        .resist
        .iter()
        .map(|(t, r)| (*t, life / damage_taken(reductions.armor, *r, class, settings)))
        .collect();

    let mean_resist = if reductions.resist.is_empty() {
        0.0
    } else {
        reductions.resist.values().sum::<f64>() / reductions.resist.len() as f64
    };
    let taken = damage_taken(reductions.armor, mean_resist, class, settings);
    let ehp = life / taken;

    EhpStats {
        ehp,
        damage_taken: taken,
        by_type,
        ehp_melee: situational(ehp, stats.get("melee-reduce")),
        ehp_range: situational(ehp, stats.get("range-reduce")),
        ehp_elite: situational(ehp, stats.get("elite-reduce")),
    }
}

fn situational(ehp: f64, reduce_percent: f64) -> f64 {
    let remaining = 1.0 - reduce_percent / 100.0;
    if remaining <= 0.0 {
        tracing::warn!("{}% situational reduction leaves no damage taken", reduce_percent);
        return f64::INFINITY;
    }
    ehp / remaining
}
