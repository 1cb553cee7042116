//! build_calc - Character build calculator
//!
//! This library provides:
//! - AttributeStore: Additive attribute accumulator fed by stat sources
//! - Item ingestion: Equipment classification, affix rules and socketed gems
//! - Set bonuses and passive skill effects
//! - EffectInterpreter: activate, convert, percent and switch effect programs
//! - DerivedStats: Armor, life, resistances, damage, attack speed, DPS and EHP
//! - Calc: The pipeline that turns a Build into DerivedStats
//! - Sandbox: Side-by-side comparison of several builds

pub mod calculator;
pub mod config;
pub mod damage;
pub mod defense;
pub mod effect;
pub mod error;
pub mod item;
pub mod prelude;
pub mod sandbox;
pub mod source;
pub mod stat_block;
pub mod types;

// Re-export core types for convenience
pub use calculator::{Calc, DerivedStatsCalculator};
pub use config::{load_game_data, ConfigError, GameData, Settings};
pub use defense::ResistType;
pub use effect::{EffectError, EffectInterpreter, EffectProgram};
pub use error::CalcError;
pub use item::{classify, IngestionRules, ItemCategory};
pub use sandbox::{Sandbox, StatDiff};
pub use source::{
    BaseStatsSource, BonusSource, GearSource, PassiveSource, SetBonusSource, SetTally, StatSource,
};
pub use stat_block::{AttributeStore, DerivedStats};
pub use types::{Build, EquipmentSlot, HeroClass, Item, PrimaryAttribute};
