//! Armor - Physical mitigation with diminishing returns

use crate::config::Settings;
use crate::stat_block::AttributeStore;

/// Total armor: armor from gear plus one per point of strength
pub fn armor(stats: &AttributeStore) -> f64 {
    stats.get("armor") + stats.get("strength")
}

/// Fraction of incoming damage armor absorbs
///
/// `Reduction = Armor / (armor_per_level * vs_level + Armor)`
///
/// The level term keeps the denominator positive for any non-negative
/// armor as long as `vs_level` is at least 1.
pub fn armor_reduction(armor: f64, settings: &Settings) -> f64 {
    let vs_level = settings.vs_level.max(1) as f64;
    armor / (settings.formulas.armor_per_level * vs_level + armor)
}
