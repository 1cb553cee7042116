//! Prelude module for convenient imports
//!
//! ```rust
//! use build_calc::prelude::*;
//! ```

// Core types
pub use crate::stat_block::{AttributeStore, DerivedStats};
pub use crate::types::{Build, EquipmentSlot, HeroClass, Item};

// Calculator
pub use crate::calculator::Calc;
pub use crate::error::CalcError;
pub use crate::sandbox::{Sandbox, StatDiff};

// Sources
pub use crate::source::{BonusSource, StatSource};

// Config
pub use crate::config::{load_game_data, GameData, Settings};
