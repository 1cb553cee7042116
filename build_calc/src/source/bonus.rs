//! BonusSource - caller-supplied attribute bonuses (shrines, buffs, what-ifs)

use super::{priority, StatSource};
use crate::effect::EffectInterpreter;
use crate::stat_block::AttributeStore;
use serde_json::{Map, Value};

/// Named bundle of flat and percent attribute bonuses
#[derive(Debug, Clone)]
pub struct BonusSource {
    pub bonus_id: String,
    priority: i32,
    /// Written like an `activate` effect
    attrs: Map<String, Value>,
    /// Applied like a `percent` effect, after `attrs`
    percents: Map<String, Value>,
}

impl BonusSource {
    /// Create an empty bonus that applies after passives
    pub fn new(bonus_id: impl Into<String>) -> Self {
        BonusSource {
            bonus_id: bonus_id.into(),
            priority: priority::BONUSES,
            attrs: Map::new(),
            percents: Map::new(),
        }
    }

    /// Add a flat (or structured) attribute bonus
    pub fn with_attr(mut self, attr: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(attr.into(), value);
        self
    }

    /// Add a percent increase of an attribute's current value
    pub fn with_percent(mut self, attr: impl Into<String>, percent: f64) -> Self {
        self.percents.insert(attr.into(), Value::from(percent));
        self
    }

    /// Move the bonus to a different point in the pipeline
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl StatSource for BonusSource {
    fn id(&self) -> &str {
        &self.bonus_id
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn apply(&self, stats: &mut AttributeStore) {
        let interpreter = EffectInterpreter::new();
        interpreter.activate(&self.attrs, stats);
        interpreter.percent(&self.percents, stats);
    }
}
