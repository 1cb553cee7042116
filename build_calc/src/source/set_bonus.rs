//! SetBonusSource - Threshold bonuses for wearing several pieces of a set

use super::{priority, StatSource};
use crate::config::GameData;
use crate::effect::EffectInterpreter;
use crate::stat_block::AttributeStore;
use crate::types::Item;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Count of equipped items per set id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetTally {
    counts: BTreeMap<String, u32>,
}

impl SetTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an item if it belongs to a set, returning the new count
    pub fn record(&mut self, item: &Item) -> Option<u32> {
        let set_id = item.set.as_ref()?;
        let count = self.counts.entry(set_id.clone()).or_insert(0);
        *count += 1;
        Some(*count)
    }

    /// Pieces equipped for a set
    pub fn count(&self, set_id: &str) -> u32 {
        self.counts.get(set_id).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(id, count)| (id.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }
}

/// Set bonuses unlocked by a tally
///
/// Every tier up to the equipped count applies: four pieces of a set with
/// 2- and 4-piece bonuses grant both.
pub struct SetBonusSource<'a> {
    tally: &'a SetTally,
    game_data: &'a GameData,
}

impl<'a> SetBonusSource<'a> {
    pub fn new(tally: &'a SetTally, game_data: &'a GameData) -> Self {
        SetBonusSource { tally, game_data }
    }
}

impl StatSource for SetBonusSource<'_> {
    fn id(&self) -> &str {
        "set_bonuses"
    }

    fn priority(&self) -> i32 {
        priority::SET_BONUSES
    }

    fn apply(&self, stats: &mut AttributeStore) {
        let interpreter = EffectInterpreter::new();
        for (set_id, pieces) in self.tally.iter() {
            let Some(set) = self.game_data.set(set_id) else {
                tracing::debug!("no bonus table for set '{}'", set_id);
                continue;
            };
            for tier in 1..=pieces {
                if let Some(bonus) = set.bonus(tier) {
                    tracing::debug!("set '{}' {}-piece bonus active", set_id, tier);
                    interpreter.activate(bonus, stats);
                }
            }
        }
    }
}
