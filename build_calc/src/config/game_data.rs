//! Game data table: skills, set bonuses and gem effects
//!
//! The table is parsed once and shared read-only between calculators.

use super::{load_json, ConfigError};
use crate::types::HeroClass;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Externally supplied, immutable game data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    /// class -> skill id -> opaque payload
    #[serde(default)]
    pub actives: BTreeMap<String, BTreeMap<String, Value>>,
    /// class -> skill id -> passive definition
    #[serde(default)]
    pub passives: BTreeMap<String, BTreeMap<String, SkillDefinition>>,
    #[serde(default)]
    pub sets: BTreeMap<String, SetDefinition>,
    #[serde(default)]
    pub gem_effects: BTreeMap<String, GemEffect>,
}

impl GameData {
    /// Parse game data from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Active skill payload for a class
    pub fn active(&self, class: HeroClass, skill: &str) -> Option<&Value> {
        self.actives.get(class.key())?.get(skill)
    }

    /// Passive skill definition for a class
    pub fn passive(&self, class: HeroClass, skill: &str) -> Option<&SkillDefinition> {
        self.passives.get(class.key())?.get(skill)
    }

    pub fn set(&self, set_id: &str) -> Option<&SetDefinition> {
        self.sets.get(set_id)
    }

    pub fn gem(&self, gem_id: &str) -> Option<&GemEffect> {
        self.gem_effects.get(gem_id)
    }
}

/// Load game data from a JSON file
pub fn load_game_data(path: &Path) -> Result<GameData, ConfigError> {
    load_json(path)
}

/// A passive skill: effect kind -> payload, in authored order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub effect: Map<String, Value>,
}

/// Set bonus table: required piece count -> effect map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub effect: Map<String, Value>,
}

impl SetDefinition {
    /// Bonus unlocked at exactly `pieces` items, if it is an effect map
    pub fn bonus(&self, pieces: u32) -> Option<&Map<String, Value>> {
        self.effect.get(&pieces.to_string())?.as_object()
    }
}

/// Gem effect row: `[name, head, weapon, other]`
///
/// Each effect column is an `[attribute, value]` pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GemEffect(pub Vec<Value>);

impl GemEffect {
    pub const HEAD: usize = 1;
    pub const WEAPON: usize = 2;
    pub const OTHER: usize = 3;

    /// The `[attribute, value]` pair in a column, if well-formed
    pub fn column(&self, index: usize) -> Option<(&str, &Value)> {
        let pair = self.0.get(index)?.as_array()?;
        let attr = pair.first()?.as_str()?;
        let value = pair.get(1)?;
        Some((attr, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> GameData {
        GameData::from_json_str(
            r#"{
                "actives": { "barbarian": { "bash": { "damage": 1.35 } } },
                "passives": {
                    "barbarian": {
                        "ruthless": { "effect": { "percent": { "strength": 10 }, "activate": { "critical-hit": 5 } } }
                    }
                },
                "sets": {
                    "immortal-kings-call": { "effect": { "2": { "strength": 50 }, "3": "text only" } }
                },
                "gemEffects": {
                    "radiant-star-ruby": ["Radiant Star Ruby", ["plus-experience", 35], ["ruby-damage", 80], ["strength", 58]]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_lookups() {
        let data = sample();
        assert!(data.active(HeroClass::Barbarian, "bash").is_some());
        assert!(data.passive(HeroClass::Barbarian, "ruthless").is_some());
        assert!(data.passive(HeroClass::Wizard, "ruthless").is_none());
        assert!(data.set("immortal-kings-call").is_some());
    }

    #[test]
    fn test_effect_kind_order_preserved() {
        let data = sample();
        let passive = data.passive(HeroClass::Barbarian, "ruthless").unwrap();
        let kinds: Vec<&String> = passive.effect.keys().collect();
        assert_eq!(kinds, vec!["percent", "activate"]);
    }

    #[test]
    fn test_set_bonus_only_for_effect_maps() {
        let data = sample();
        let set = data.set("immortal-kings-call").unwrap();
        assert!(set.bonus(1).is_none());
        assert_eq!(set.bonus(2).unwrap().get("strength"), Some(&json!(50)));
        assert!(set.bonus(3).is_none());
    }

    #[test]
    fn test_gem_columns() {
        let data = sample();
        let gem = data.gem("radiant-star-ruby").unwrap();
        assert_eq!(gem.column(GemEffect::HEAD), Some(("plus-experience", &json!(35))));
        assert_eq!(gem.column(GemEffect::WEAPON), Some(("ruby-damage", &json!(80))));
        assert_eq!(gem.column(0), None);
        assert_eq!(gem.column(9), None);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(
            GameData::from_json_str("{ not json"),
            Err(ConfigError::JsonError(_))
        ));
    }
}
