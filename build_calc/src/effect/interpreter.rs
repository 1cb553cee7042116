//! EffectInterpreter - executes effect programs against an attribute store

use super::{ConvertEffect, EffectProgram, SwitchEffect};
use crate::stat_block::{to_number, AttributeStore};
use crate::types::{EquipmentSlot, Item};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Stateless executor for [`EffectProgram`]s
///
/// Every handler degrades to a no-op on missing data; `apply` reports
/// whether the program actually ran.
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectInterpreter;

impl EffectInterpreter {
    pub fn new() -> Self {
        EffectInterpreter
    }

    /// Run one program; `gear` is consulted by switch effects
    pub fn apply(
        &self,
        program: &EffectProgram,
        store: &mut AttributeStore,
        gear: &BTreeMap<EquipmentSlot, Item>,
    ) -> bool {
        match program {
            EffectProgram::Activate(payload) => {
                self.activate(payload, store);
                true
            }
            EffectProgram::Convert(convert) => self.convert(convert, store),
            EffectProgram::Percent(payload) => {
                self.percent(payload, store);
                true
            }
            EffectProgram::Switch(switch) => self.switch(switch, store, gear),
        }
    }

    /// Parse and run a raw `kind -> payload` entry, logging anything unusable
    pub fn apply_raw(
        &self,
        kind: &str,
        payload: &Value,
        store: &mut AttributeStore,
        gear: &BTreeMap<EquipmentSlot, Item>,
    ) -> bool {
        match EffectProgram::parse(kind, payload) {
            Ok(program) => self.apply(&program, store, gear),
            Err(e) => {
                tracing::warn!("skipping effect: {}", e);
                false
            }
        }
    }

    /// Run every entry of an effect map in order, returning how many applied
    pub fn apply_all(
        &self,
        effects: &Map<String, Value>,
        store: &mut AttributeStore,
        gear: &BTreeMap<EquipmentSlot, Item>,
    ) -> usize {
        effects
            .iter()
            .filter(|(kind, payload)| self.apply_raw(kind, payload, store, gear))
            .count()
    }

    /// Write each attribute/value pair
    pub fn activate(&self, payload: &Map<String, Value>, store: &mut AttributeStore) {
        for (attr, value) in payload {
            store.write(attr.as_str(), value);
        }
    }

    /// Add `from * ratio` to `to`; `from` is left untouched
    pub fn convert(&self, convert: &ConvertEffect, store: &mut AttributeStore) -> bool {
        let (Some(from), Some(to)) = (&convert.from, &convert.to) else {
            tracing::debug!("convert effect without from/to, skipping");
            return false;
        };
        let amount = store.get(from) * to_number(&convert.ratio);
        store.add(to.as_str(), amount);
        true
    }

    /// Increase each attribute by a percentage of its value right now
    ///
    /// Two percent effects on the same attribute compound: the second scales
    /// the total left by the first.
    pub fn percent(&self, payload: &Map<String, Value>, store: &mut AttributeStore) {
        for (attr, pct) in payload {
            let amount = store.get(attr) * to_number(pct) / 100.0;
            store.add(attr.as_str(), amount);
        }
    }

    /// Apply every case matching a field of the item in `against`
    pub fn switch(
        &self,
        switch: &SwitchEffect,
        store: &mut AttributeStore,
        gear: &BTreeMap<EquipmentSlot, Item>,
    ) -> bool {
        let slot = EquipmentSlot::from(switch.against.as_str());
        let Some(item) = gear.get(&slot) else {
            tracing::debug!("switch against empty slot '{}'", slot);
            return false;
        };
        let Some(value) = item.lookup(&switch.lookup) else {
            return false;
        };

        let mut matched = false;
        for case in switch.cases.iter().filter(|case| case.matches(&value)) {
            self.activate(&case.effect, store);
            matched = true;
        }
        matched
    }
}
