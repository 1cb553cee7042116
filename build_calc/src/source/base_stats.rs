//! BaseStatsSource - Attributes from class, level and paragon

use super::{priority, StatSource};
use crate::error::CalcError;
use crate::stat_block::AttributeStore;
use crate::types::{Build, HeroClass};

/// Base critical hit chance every character starts with
const BASE_CRIT_CHANCE: f64 = 5.0;
/// Base critical hit damage every character starts with
const BASE_CRIT_DAMAGE: f64 = 50.0;
/// Magic and gold find granted per paragon level
const FIND_PER_PARAGON: f64 = 3.0;

/// Stats from class, level and paragon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseStatsSource {
    pub class: HeroClass,
    /// Character level, at least 1
    pub level: u32,
    pub paragon: u32,
}

impl BaseStatsSource {
    /// Create a new base stats source
    pub fn new(class: HeroClass, level: u32, paragon: u32) -> Self {
        BaseStatsSource {
            class,
            level: level.max(1),
            paragon,
        }
    }

    /// Resolve a build's class; unknown classes cannot be seeded
    pub fn from_build(build: &Build) -> Result<Self, CalcError> {
        let class = build.class().map_err(CalcError::InvalidBuild)?;
        Ok(Self::new(class, build.level, build.paragon))
    }

    /// Per-level multiplier for an attribute
    ///
    /// The class's primary attribute grows by 3, vitality by 2, the rest by 1.
    fn multiplier(&self, attr: &str) -> f64 {
        if attr == self.class.primary().key() {
            3.0
        } else if attr == "vitality" {
            2.0
        } else {
            1.0
        }
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        priority::BASE_STATS
    }

    fn apply(&self, stats: &mut AttributeStore) {
        let growth = (self.level + self.paragon) as f64;
        for attr in ["strength", "dexterity", "intelligence", "vitality"] {
            stats.add(attr, 7.0 + self.multiplier(attr) * growth);
        }

        if self.paragon > 0 {
            let find = FIND_PER_PARAGON * self.paragon as f64;
            stats.add("plus-magic-find", find);
            stats.add("plus-gold-find", find);
        }

        stats.add("critical-hit", BASE_CRIT_CHANCE);
        stats.add("critical-hit-damage", BASE_CRIT_DAMAGE);
    }
}
