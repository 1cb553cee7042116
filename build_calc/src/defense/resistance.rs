//! Resistance - Per-element mitigation
//!
//! Formula:
//! - resist_all = resist-all + intelligence / 10
//! - resist[t] = resist_all + resist-t
//! - reduction[t] = resist[t] / (resist_per_level * vs_level + resist[t])

use crate::config::Settings;
use crate::stat_block::AttributeStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Damage types a character can resist
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResistType {
    Physical,
    Fire,
    Cold,
    Lightning,
    Poison,
    Arcane,
}

impl ResistType {
    pub fn all() -> &'static [ResistType] {
        &[
            ResistType::Physical,
            ResistType::Fire,
            ResistType::Cold,
            ResistType::Lightning,
            ResistType::Poison,
            ResistType::Arcane,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResistType::Physical => "physical",
            ResistType::Fire => "fire",
            ResistType::Cold => "cold",
            ResistType::Lightning => "lightning",
            ResistType::Poison => "poison",
            ResistType::Arcane => "arcane",
        }
    }

    /// Attribute key holding the single-element resist from gear
    pub fn key(&self) -> &'static str {
        match self {
            ResistType::Physical => "resist-physical",
            ResistType::Fire => "resist-fire",
            ResistType::Cold => "resist-cold",
            ResistType::Lightning => "resist-lightning",
            ResistType::Poison => "resist-poison",
            ResistType::Arcane => "resist-arcane",
        }
    }
}

impl fmt::Display for ResistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resistance to all elements, including the intelligence bonus
pub fn resist_all(stats: &AttributeStore) -> f64 {
    stats.get("resist-all") + stats.get("intelligence") / 10.0
}

/// Total resistance per damage type
pub fn resistances(stats: &AttributeStore) -> BTreeMap<ResistType, f64> {
    let all = resist_all(stats);
    ResistType::all()
        .iter()
        .map(|t| (*t, all + stats.get(t.key())))
        .collect()
}

/// Fraction of incoming damage a resistance value absorbs
pub fn resist_reduction(resist: f64, settings: &Settings) -> f64 {
    let vs_level = settings.vs_level.max(1) as f64;
    resist / (settings.formulas.resist_per_level * vs_level + resist)
}
