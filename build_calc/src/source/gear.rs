//! GearSource - Attributes from one equipped item

use super::{priority, StatSource};
use crate::config::{GameData, GemEffect};
use crate::item::{classify, IngestionRules, ItemCategory};
use crate::stat_block::AttributeStore;
use crate::types::{EquipmentSlot, Item};

/// Gem effect that is tracked per weapon hand
const RUBY_DAMAGE: &str = "ruby-damage";

/// Stats from an equipped item
pub struct GearSource<'a> {
    /// Which slot this item is in
    pub slot: &'a EquipmentSlot,
    /// The equipped item
    pub item: &'a Item,
    /// Gem table for socket lookups
    game_data: &'a GameData,
}

impl<'a> GearSource<'a> {
    /// Create a new gear source
    pub fn new(slot: &'a EquipmentSlot, item: &'a Item, game_data: &'a GameData) -> Self {
        GearSource {
            slot,
            item,
            game_data,
        }
    }

    pub fn category(&self) -> Option<ItemCategory> {
        classify(&self.item.item_type)
    }

    /// Which gem-table column applies to this item
    fn gem_column(&self) -> usize {
        if *self.slot == EquipmentSlot::Helm {
            GemEffect::HEAD
        } else if self.category() == Some(ItemCategory::Weapon) {
            GemEffect::WEAPON
        } else {
            GemEffect::OTHER
        }
    }

    /// Gem attribute name, split per hand for weapon damage gems
    fn gem_attr(&self, attr: &str) -> String {
        if attr != RUBY_DAMAGE {
            return attr.to_string();
        }
        match self.slot {
            EquipmentSlot::MainHand => format!("{}-mh", RUBY_DAMAGE),
            EquipmentSlot::OffHand => format!("{}-oh", RUBY_DAMAGE),
            _ => attr.to_string(),
        }
    }

    fn apply_sockets(&self, stats: &mut AttributeStore) {
        let column = self.gem_column();
        for gem_id in &self.item.sockets {
            let Some(gem) = self.game_data.gem(gem_id) else {
                tracing::debug!("unknown gem '{}' in {}", gem_id, self.slot);
                continue;
            };
            let Some((attr, value)) = gem.column(column) else {
                tracing::debug!("gem '{}' has no usable column {}", gem_id, column);
                continue;
            };
            stats.write(self.gem_attr(attr), value);
        }
    }
}

impl StatSource for GearSource<'_> {
    fn id(&self) -> &str {
        self.slot.key()
    }

    fn priority(&self) -> i32 {
        priority::GEAR
    }

    fn apply(&self, stats: &mut AttributeStore) {
        let rules = IngestionRules::for_category(self.category());

        // Base stats always count
        for (stat, value) in &self.item.stats {
            stats.write(stat.as_str(), value);
        }

        for (affix, value) in &self.item.attrs {
            if let Some(attr) = rules.resolve(affix) {
                stats.write(attr, value);
            }
        }

        self.apply_sockets(stats);
    }
}
