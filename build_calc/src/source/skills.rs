//! Skill resolution and PassiveSource

use super::{priority, StatSource};
use crate::config::{GameData, SkillDefinition};
use crate::effect::EffectInterpreter;
use crate::stat_block::AttributeStore;
use crate::types::{EquipmentSlot, HeroClass, Item};
use serde_json::Value;
use std::collections::BTreeMap;

/// Skills a build selected, looked up in game data
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSkills {
    /// Active skill payloads; carried along but not interpreted
    pub actives: BTreeMap<String, Value>,
    /// Passive definitions in the order the build lists them
    pub passives: Vec<(String, SkillDefinition)>,
}

impl ResolvedSkills {
    /// Look up every selected skill for a class
    ///
    /// Unknown ids are skipped. A passive listed twice resolves once, at
    /// its first position.
    pub fn resolve(
        class: HeroClass,
        actives: &[String],
        passives: &[String],
        game_data: &GameData,
    ) -> Self {
        let mut resolved = ResolvedSkills::default();

        for skill in actives {
            match game_data.active(class, skill) {
                Some(payload) => {
                    resolved.actives.insert(skill.clone(), payload.clone());
                }
                None => tracing::warn!("unknown {} active '{}'", class, skill),
            }
        }

        for skill in passives {
            if resolved.has_passive(skill) {
                continue;
            }
            match game_data.passive(class, skill) {
                Some(definition) => resolved.passives.push((skill.clone(), definition.clone())),
                None => tracing::warn!("unknown {} passive '{}'", class, skill),
            }
        }

        resolved
    }

    pub fn has_passive(&self, skill: &str) -> bool {
        self.passives.iter().any(|(id, _)| id == skill)
    }

    /// Add or replace a passive; new ones go to the end of the order
    pub fn insert_passive(&mut self, skill: impl Into<String>, definition: SkillDefinition) {
        let skill = skill.into();
        match self.passives.iter_mut().find(|(id, _)| *id == skill) {
            Some(entry) => entry.1 = definition,
            None => self.passives.push((skill, definition)),
        }
    }

    pub fn clear(&mut self) {
        self.actives.clear();
        self.passives.clear();
    }
}

/// Effects of resolved passives, run in build order
pub struct PassiveSource<'a> {
    passives: &'a [(String, SkillDefinition)],
    /// Equipped gear, for switch effects
    gear: &'a BTreeMap<EquipmentSlot, Item>,
}

impl<'a> PassiveSource<'a> {
    pub fn new(
        passives: &'a [(String, SkillDefinition)],
        gear: &'a BTreeMap<EquipmentSlot, Item>,
    ) -> Self {
        PassiveSource { passives, gear }
    }
}

impl StatSource for PassiveSource<'_> {
    fn id(&self) -> &str {
        "passives"
    }

    fn priority(&self) -> i32 {
        priority::PASSIVES
    }

    fn apply(&self, stats: &mut AttributeStore) {
        let interpreter = EffectInterpreter::new();
        for (skill, definition) in self.passives {
            let applied = interpreter.apply_all(&definition.effect, stats, self.gear);
            tracing::debug!("passive '{}': {} effect(s) applied", skill, applied);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_data() -> GameData {
        GameData::from_json_str(
            r#"{
                "actives": { "barbarian": { "cleave": { "damage": 1.2 } } },
                "passives": {
                    "barbarian": {
                        "ruthless": { "effect": { "percent": { "strength": 10 } } },
                        "brawler": { "effect": { "activate": { "strength": 100 } } },
                        "nerves-of-steel": { "effect": { "convert": { "from": "vitality", "to": "armor", "ratio": 1 } } },
                        "weapons-master": {
                            "effect": {
                                "switch": {
                                    "lookup": "type", "against": "mainhand",
                                    "cases": [ { "caseOf": "sword|dagger", "effect": { "plus-damage": 8 } } ]
                                }
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap()
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolve_skips_unknown() {
        let data = game_data();
        let skills = ResolvedSkills::resolve(
            HeroClass::Barbarian,
            &ids(&["cleave", "whirlwind"]),
            &ids(&["ruthless", "no-such-passive"]),
            &data,
        );
        assert_eq!(skills.actives.len(), 1);
        assert_eq!(skills.passives.len(), 1);
        assert!(skills.has_passive("ruthless"));
    }

    #[test]
    fn test_resolve_wrong_class() {
        let data = game_data();
        let skills = ResolvedSkills::resolve(HeroClass::Wizard, &[], &ids(&["ruthless"]), &data);
        assert!(skills.passives.is_empty());
    }

    #[test]
    fn test_resolve_keeps_order_and_dedups() {
        let data = game_data();
        let skills = ResolvedSkills::resolve(
            HeroClass::Barbarian,
            &[],
            &ids(&["nerves-of-steel", "ruthless", "nerves-of-steel"]),
            &data,
        );
        let order: Vec<&str> = skills.passives.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(order, vec!["nerves-of-steel", "ruthless"]);
    }

    #[test]
    fn test_passive_order_changes_result() {
        let data = game_data();
        let gear = BTreeMap::new();

        let run = |order: &[&str]| {
            let skills = ResolvedSkills::resolve(HeroClass::Barbarian, &[], &ids(order), &data);
            let mut stats = AttributeStore::new();
            stats.add("strength", 100.0);
            PassiveSource::new(&skills.passives, &gear).apply(&mut stats);
            stats.get("strength")
        };

        // The percent passive scales whatever strength exists when it runs
        assert!((run(&["brawler", "ruthless"]) - 220.0).abs() < 1e-9);
        assert!((run(&["ruthless", "brawler"]) - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_convert_passive() {
        let data = game_data();
        let skills =
            ResolvedSkills::resolve(HeroClass::Barbarian, &[], &ids(&["nerves-of-steel"]), &data);
        let mut stats = AttributeStore::new();
        stats.add("vitality", 150.0);
        PassiveSource::new(&skills.passives, &BTreeMap::new()).apply(&mut stats);
        assert!((stats.get("armor") - 150.0).abs() < 1e-9);
        assert!((stats.get("vitality") - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_passive_switch_reads_gear() {
        let data = game_data();
        let skills =
            ResolvedSkills::resolve(HeroClass::Barbarian, &[], &ids(&["weapons-master"]), &data);

        let mut gear = BTreeMap::new();
        gear.insert(EquipmentSlot::MainHand, Item::new("dagger"));
        let mut stats = AttributeStore::new();
        PassiveSource::new(&skills.passives, &gear).apply(&mut stats);
        assert!((stats.get("plus-damage") - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_insert_passive_replaces() {
        let mut skills = ResolvedSkills::default();
        skills.insert_passive("a", SkillDefinition::default());
        skills.insert_passive("b", SkillDefinition::default());
        skills.insert_passive("a", SkillDefinition { name: Some("A".into()), ..Default::default() });
        assert_eq!(skills.passives.len(), 2);
        assert_eq!(skills.passives[0].1.name.as_deref(), Some("A"));
    }
}
