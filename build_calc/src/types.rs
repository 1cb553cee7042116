//! Core input types: classes, slots, items and builds

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Playable class archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeroClass {
    Barbarian,
    DemonHunter,
    Monk,
    WitchDoctor,
    Wizard,
}

impl HeroClass {
    /// Get all classes
    pub fn all() -> &'static [HeroClass] {
        &[
            HeroClass::Barbarian,
            HeroClass::DemonHunter,
            HeroClass::Monk,
            HeroClass::WitchDoctor,
            HeroClass::Wizard,
        ]
    }

    /// Key used for this class in builds and game data
    pub fn key(&self) -> &'static str {
        match self {
            HeroClass::Barbarian => "barbarian",
            HeroClass::DemonHunter => "demon-hunter",
            HeroClass::Monk => "monk",
            HeroClass::WitchDoctor => "witch-doctor",
            HeroClass::Wizard => "wizard",
        }
    }

    /// The attribute this class scales its damage with
    pub fn primary(&self) -> PrimaryAttribute {
        match self {
            HeroClass::Barbarian => PrimaryAttribute::Strength,
            HeroClass::DemonHunter | HeroClass::Monk => PrimaryAttribute::Dexterity,
            HeroClass::WitchDoctor | HeroClass::Wizard => PrimaryAttribute::Intelligence,
        }
    }

    /// Melee classes get an innate damage reduction
    pub fn is_melee(&self) -> bool {
        matches!(self, HeroClass::Barbarian | HeroClass::Monk)
    }
}

impl FromStr for HeroClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeroClass::all()
            .iter()
            .copied()
            .find(|class| class.key() == s)
            .ok_or_else(|| format!("unknown class '{}'", s))
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Attributes that can act as a class's primary stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryAttribute {
    Strength,
    Dexterity,
    Intelligence,
}

impl PrimaryAttribute {
    /// Attribute store key
    pub fn key(&self) -> &'static str {
        match self {
            PrimaryAttribute::Strength => "strength",
            PrimaryAttribute::Dexterity => "dexterity",
            PrimaryAttribute::Intelligence => "intelligence",
        }
    }
}

/// Equipment slot for gear
///
/// Builds may carry slots the calculator has no special rules for; those
/// are kept verbatim in `Other` so switch effects can still target them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EquipmentSlot {
    Helm,
    Shoulders,
    Amulet,
    Chest,
    Gloves,
    Bracers,
    Belt,
    Pants,
    Boots,
    Ring1,
    Ring2,
    MainHand,
    OffHand,
    Other(String),
}

impl EquipmentSlot {
    /// Get all known equipment slots
    pub fn all() -> &'static [EquipmentSlot] {
        &[
            EquipmentSlot::Helm,
            EquipmentSlot::Shoulders,
            EquipmentSlot::Amulet,
            EquipmentSlot::Chest,
            EquipmentSlot::Gloves,
            EquipmentSlot::Bracers,
            EquipmentSlot::Belt,
            EquipmentSlot::Pants,
            EquipmentSlot::Boots,
            EquipmentSlot::Ring1,
            EquipmentSlot::Ring2,
            EquipmentSlot::MainHand,
            EquipmentSlot::OffHand,
        ]
    }

    /// Key used for this slot in builds
    pub fn key(&self) -> &str {
        match self {
            EquipmentSlot::Helm => "helm",
            EquipmentSlot::Shoulders => "shoulders",
            EquipmentSlot::Amulet => "amulet",
            EquipmentSlot::Chest => "chest",
            EquipmentSlot::Gloves => "gloves",
            EquipmentSlot::Bracers => "bracers",
            EquipmentSlot::Belt => "belt",
            EquipmentSlot::Pants => "pants",
            EquipmentSlot::Boots => "boots",
            EquipmentSlot::Ring1 => "ring1",
            EquipmentSlot::Ring2 => "ring2",
            EquipmentSlot::MainHand => "mainhand",
            EquipmentSlot::OffHand => "offhand",
            EquipmentSlot::Other(name) => name,
        }
    }
}

impl From<String> for EquipmentSlot {
    fn from(s: String) -> Self {
        EquipmentSlot::all()
            .iter()
            .find(|slot| slot.key() == s)
            .cloned()
            .unwrap_or(EquipmentSlot::Other(s))
    }
}

impl From<&str> for EquipmentSlot {
    fn from(s: &str) -> Self {
        EquipmentSlot::from(s.to_string())
    }
}

impl From<EquipmentSlot> for String {
    fn from(slot: EquipmentSlot) -> Self {
        slot.key().to_string()
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single equipped item as it appears in a build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Raw item-type tag, e.g. `"helm"` or `"2h-axe"`
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Base weapon/armor numbers (damage range, speed, base armor)
    #[serde(default)]
    pub stats: BTreeMap<String, Value>,
    /// Rolled affixes
    #[serde(default)]
    pub attrs: BTreeMap<String, Value>,
    /// Socketed gem ids
    #[serde(default)]
    pub sockets: Vec<String>,
    /// Set this item belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
}

impl Item {
    /// Create an item of the given type with no stats
    pub fn new(item_type: impl Into<String>) -> Self {
        Item {
            item_type: item_type.into(),
            ..Default::default()
        }
    }

    /// Add a base stat
    pub fn with_stat(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.stats.insert(key.into(), value.into());
        self
    }

    /// Add an affix
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Socket a gem
    pub fn with_socket(mut self, gem_id: impl Into<String>) -> Self {
        self.sockets.push(gem_id.into());
        self
    }

    /// Mark as part of a set
    pub fn with_set(mut self, set_id: impl Into<String>) -> Self {
        self.set = Some(set_id.into());
        self
    }

    /// Read a field of the item as a string, for switch matching
    ///
    /// `type`, `set` and `name` read the item's own fields; any other key is
    /// looked up in the affixes, then the base stats.
    pub fn lookup(&self, key: &str) -> Option<String> {
        match key {
            "type" => Some(self.item_type.clone()),
            "set" => self.set.clone(),
            "name" => self.name.clone(),
            _ => self
                .attrs
                .get(key)
                .or_else(|| self.stats.get(key))
                .map(|value| match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                }),
        }
    }
}

/// A character build: the calculator's only input besides game data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Build {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Class key; resolved to a `HeroClass` when base stats are computed
    #[serde(rename = "class", default)]
    pub hero_class: String,
    #[serde(default = "default_level")]
    pub level: u32,
    #[serde(default)]
    pub paragon: u32,
    #[serde(default)]
    pub gear: BTreeMap<EquipmentSlot, Item>,
    #[serde(default)]
    pub actives: Vec<String>,
    #[serde(default)]
    pub passives: Vec<String>,
}

fn default_level() -> u32 {
    1
}

impl Build {
    /// Create an empty build for a class at a level
    pub fn new(hero_class: impl Into<String>, level: u32) -> Self {
        Build {
            hero_class: hero_class.into(),
            level,
            ..Default::default()
        }
    }

    /// Set the paragon level
    pub fn with_paragon(mut self, paragon: u32) -> Self {
        self.paragon = paragon;
        self
    }

    /// Equip an item
    pub fn with_item(mut self, slot: impl Into<EquipmentSlot>, item: Item) -> Self {
        self.gear.insert(slot.into(), item);
        self
    }

    /// Select a passive skill
    pub fn with_passive(mut self, skill: impl Into<String>) -> Self {
        self.passives.push(skill.into());
        self
    }

    /// Select an active skill
    pub fn with_active(mut self, skill: impl Into<String>) -> Self {
        self.actives.push(skill.into());
        self
    }

    /// Resolve the class key
    pub fn class(&self) -> Result<HeroClass, String> {
        self.hero_class.parse()
    }
}
