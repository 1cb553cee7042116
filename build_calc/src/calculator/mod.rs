//! Calc - Runs a build through the stat pipeline
//!
//! Stages, in order:
//! 1. reset
//! 2. base stats from class, level and paragon
//! 3. item ingestion (stats, affixes, gems, set tally)
//! 4. set bonuses
//! 5. skill resolution
//! 6. passive effect activation
//! 7. derived stats

mod derived;

pub use derived::DerivedStatsCalculator;

use crate::config::{GameData, Settings};
use crate::effect::EffectInterpreter;
use crate::error::CalcError;
use crate::source::{
    priority, BaseStatsSource, GearSource, PassiveSource, ResolvedSkills, SetBonusSource,
    SetTally, StatSource,
};
use crate::stat_block::{AttributeStore, DerivedStats};
use crate::types::{Build, EquipmentSlot, HeroClass, Item};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Build calculator
///
/// Owns its copy of the build and everything computed from it. Game data
/// is shared read-only, so calculators for different builds can run on
/// different threads.
#[derive(Debug, Clone)]
pub struct Calc {
    game_data: Arc<GameData>,
    settings: Settings,
    build: Option<Build>,
    class: Option<HeroClass>,
    attrs: AttributeStore,
    sets: SetTally,
    skills: ResolvedSkills,
    stats: Option<DerivedStats>,
}

impl Calc {
    /// Create a calculator with default settings and no build
    pub fn new(game_data: Arc<GameData>) -> Self {
        Calc {
            game_data,
            settings: Settings::default(),
            build: None,
            class: None,
            attrs: AttributeStore::new(),
            sets: SetTally::new(),
            skills: ResolvedSkills::default(),
            stats: None,
        }
    }

    /// Assign a build and run it
    pub fn with_build(game_data: Arc<GameData>, build: Build) -> Result<Self, CalcError> {
        let mut calc = Calc::new(game_data);
        calc.set_build(build).run()?;
        Ok(calc)
    }

    /// Replace the settings; `vs_level` is clamped to at least 1
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings.validated();
        self
    }

    /// Assign a build; results from any previous build are discarded
    pub fn set_build(&mut self, build: Build) -> &mut Self {
        self.build = Some(build);
        self.reset();
        self
    }

    /// Clear everything computed, keeping the build
    pub fn reset(&mut self) {
        self.class = None;
        self.attrs.reset();
        self.sets.clear();
        self.skills.clear();
        self.stats = None;
    }

    /// Run the full pipeline
    pub fn run(&mut self) -> Result<&DerivedStats, CalcError> {
        self.run_with_sources(&[])
    }

    /// Run the full pipeline with extra sources
    ///
    /// Each extra source is applied after every built-in stage whose
    /// priority is at or below its own (see [`priority`]).
    pub fn run_with_sources(
        &mut self,
        extra: &[&dyn StatSource],
    ) -> Result<&DerivedStats, CalcError> {
        if self.build.is_none() {
            return Err(CalcError::NoBuild);
        }
        self.reset();

        let mut pending: Vec<&dyn StatSource> = extra.to_vec();
        pending.sort_by_key(|s| s.priority());
        let mut pending = pending.into_iter().peekable();

        let mut flush_below = |attrs: &mut AttributeStore, stage: i32| {
            while let Some(source) = pending.next_if(|s| s.priority() < stage) {
                tracing::debug!("applying source '{}'", source.id());
                source.apply(attrs);
            }
        };

        flush_below(&mut self.attrs, priority::BASE_STATS);
        self.calc_base()?;
        flush_below(&mut self.attrs, priority::GEAR);
        self.parse_items()?;
        flush_below(&mut self.attrs, priority::SET_BONUSES);
        self.parse_set_bonuses();
        self.parse_skills()?;
        flush_below(&mut self.attrs, priority::PASSIVES);
        self.activate_skills();
        flush_below(&mut self.attrs, i32::MAX);
        for source in pending {
            tracing::debug!("applying source '{}'", source.id());
            source.apply(&mut self.attrs);
        }

        self.calc_stats()
    }

    /// Seed base attributes from class, level and paragon
    pub fn calc_base(&mut self) -> Result<(), CalcError> {
        let build = self.build.as_ref().ok_or(CalcError::NoBuild)?;
        let base = BaseStatsSource::from_build(build)?;
        tracing::debug!(
            "base stats: {} level {} paragon {}",
            base.class,
            base.level,
            base.paragon
        );
        base.apply(&mut self.attrs);
        self.class = Some(base.class);
        Ok(())
    }

    /// Ingest every equipped item
    pub fn parse_items(&mut self) -> Result<(), CalcError> {
        let build = self.build.as_ref().ok_or(CalcError::NoBuild)?;
        for (slot, item) in &build.gear {
            ingest(slot, item, &self.game_data, &mut self.attrs, &mut self.sets);
        }
        Ok(())
    }

    /// Ingest one item as if equipped in `slot`
    pub fn parse_item(&mut self, slot: &EquipmentSlot, item: &Item) {
        ingest(slot, item, &self.game_data, &mut self.attrs, &mut self.sets);
    }

    /// Apply every set bonus the tally has unlocked
    pub fn parse_set_bonuses(&mut self) {
        SetBonusSource::new(&self.sets, &self.game_data).apply(&mut self.attrs);
    }

    /// Resolve the build's skill ids against game data
    pub fn parse_skills(&mut self) -> Result<(), CalcError> {
        let build = self.build.as_ref().ok_or(CalcError::NoBuild)?;
        let class = match self.class {
            Some(class) => class,
            None => build.class().map_err(CalcError::InvalidBuild)?,
        };
        self.skills =
            ResolvedSkills::resolve(class, &build.actives, &build.passives, &self.game_data);
        tracing::debug!(
            "resolved {} active(s), {} passive(s)",
            self.skills.actives.len(),
            self.skills.passives.len()
        );
        Ok(())
    }

    /// Run resolved passives in build order
    pub fn activate_skills(&mut self) {
        let empty = BTreeMap::new();
        let gear = self.build.as_ref().map(|b| &b.gear).unwrap_or(&empty);
        PassiveSource::new(&self.skills.passives, gear).apply(&mut self.attrs);
    }

    /// Run a single raw effect against the store
    pub fn process_effect(&mut self, kind: &str, payload: &Value) -> bool {
        let empty = BTreeMap::new();
        let gear = self.build.as_ref().map(|b| &b.gear).unwrap_or(&empty);
        EffectInterpreter::new().apply_raw(kind, payload, &mut self.attrs, gear)
    }

    /// Compute the derived snapshot from the current store
    pub fn calc_stats(&mut self) -> Result<&DerivedStats, CalcError> {
        let build = self.build.as_ref().ok_or(CalcError::NoBuild)?;
        let class = match self.class {
            Some(class) => class,
            None => build.class().map_err(CalcError::InvalidBuild)?,
        };
        let derived = DerivedStatsCalculator::new(&self.settings).calculate(
            class,
            build.level.max(1),
            &self.attrs,
            &build.gear,
        );
        tracing::debug!(
            "derived stats: dps {:.1}, ehp {:.1}",
            derived.dps.dps,
            derived.ehp.ehp
        );
        Ok(&*self.stats.insert(derived))
    }

    /// Current numeric value of an attribute
    pub fn attr(&self, key: &str) -> f64 {
        self.attrs.get(key)
    }

    pub fn attrs(&self) -> &AttributeStore {
        &self.attrs
    }

    /// Item equipped in a slot
    pub fn get_item(&self, slot: &EquipmentSlot) -> Option<&Item> {
        self.build.as_ref()?.gear.get(slot)
    }

    /// Derived stats from the last run
    pub fn stats(&self) -> Option<&DerivedStats> {
        self.stats.as_ref()
    }

    pub fn build(&self) -> Option<&Build> {
        self.build.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn actives(&self) -> &BTreeMap<String, Value> {
        &self.skills.actives
    }

    pub fn passives(&self) -> &ResolvedSkills {
        &self.skills
    }

    pub fn set_tally(&self) -> &SetTally {
        &self.sets
    }
}

/// Write one item into the store and count its set
fn ingest(
    slot: &EquipmentSlot,
    item: &Item,
    game_data: &GameData,
    attrs: &mut AttributeStore,
    sets: &mut SetTally,
) {
    GearSource::new(slot, item, game_data).apply(attrs);
    if let Some(count) = sets.record(item) {
        tracing::debug!("{} in {} ({} piece(s))", item.item_type, slot, count);
    }
}
