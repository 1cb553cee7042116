//! DerivedStatsCalculator - Frozen store and gear in, DerivedStats out

use crate::config::Settings;
use crate::damage::{attack_speeds, damage_stats, dps};
use crate::defense::{armor, armor_reduction, effective_health, life, resist_reduction, resistances};
use crate::stat_block::{AttributeStore, DerivedStats, Reductions};
use crate::types::{EquipmentSlot, HeroClass, Item};
use std::collections::BTreeMap;

/// Pure formula pass over a finished attribute store
#[derive(Debug, Clone, Copy)]
pub struct DerivedStatsCalculator<'a> {
    settings: &'a Settings,
}

impl<'a> DerivedStatsCalculator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        DerivedStatsCalculator { settings }
    }

    /// Compute every derived stat
    ///
    /// Gear is read for weapon damage and speed, which come from item stats
    /// rather than from the store.
    pub fn calculate(
        &self,
        class: HeroClass,
        level: u32,
        stats: &AttributeStore,
        gear: &BTreeMap<EquipmentSlot, Item>,
    ) -> DerivedStats {
        let armor = armor(stats);
        let life = life(level, stats);
        let resists = resistances(stats);

        let reductions = Reductions {
            armor: armor_reduction(armor, self.settings),
            resist: resists
                .iter()
                .map(|(t, r)| (*t, resist_reduction(*r, self.settings)))
                .collect(),
        };

        let damage = damage_stats(gear, stats);
        let speeds = attack_speeds(gear, stats, self.settings);
        let dps = dps(class, stats, &damage, &speeds, self.settings);
        let ehp = effective_health(life, &reductions, class, stats, self.settings);

        DerivedStats {
            armor,
            life,
            resists,
            reductions,
            damage,
            speeds,
            dps,
            ehp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defense::ResistType;
    use serde_json::json;

    fn barbarian_stats() -> AttributeStore {
        let mut stats = AttributeStore::new();
        stats.add("strength", 217.0);
        stats.add("vitality", 147.0);
        stats.add("intelligence", 77.0);
        stats.add("critical-hit", 5.0);
        stats.add("critical-hit-damage", 50.0);
        stats
    }

    #[test]
    fn test_naked_barbarian() {
        let settings = Settings::default();
        let derived = DerivedStatsCalculator::new(&settings).calculate(
            HeroClass::Barbarian,
            70,
            &barbarian_stats(),
            &BTreeMap::new(),
        );

        assert!((derived.armor - 217.0).abs() < 1e-9);
        assert!((derived.life - 6931.0).abs() < 1e-9);
        assert!((derived.resists[&ResistType::Arcane] - 7.7).abs() < 1e-9);
        assert_eq!(derived.dps.dps, 0.0);
        assert!(derived.ehp.ehp > derived.life);
    }

    #[test]
    fn test_armed_barbarian() {
        let settings = Settings::default();
        let mut gear = BTreeMap::new();
        gear.insert(
            EquipmentSlot::MainHand,
            Item::new("mighty-weapon")
                .with_stat("damage", json!({"min": 100, "max": 200}))
                .with_stat("speed", 1.0),
        );
        let derived = DerivedStatsCalculator::new(&settings).calculate(
            HeroClass::Barbarian,
            70,
            &barbarian_stats(),
            &gear,
        );

        // s = 3.17, c = 1.025, r = 1.15, a = 150
        let expected = 3.17 * 1.025 * 1.15 * 150.0;
        assert!((derived.dps.dps - expected).abs() < 1e-6);
        assert!((derived.dps.scram.r - 1.15).abs() < 1e-9);
    }
}
