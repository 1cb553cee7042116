//! StatSource - Trait and implementations for attribute providers

mod base_stats;
mod bonus;
mod gear;
mod set_bonus;
mod skills;

pub use base_stats::BaseStatsSource;
pub use bonus::BonusSource;
pub use gear::GearSource;
pub use set_bonus::{SetBonusSource, SetTally};
pub use skills::{PassiveSource, ResolvedSkills};

use crate::stat_block::AttributeStore;

/// Priority of the built-in pipeline stages
pub mod priority {
    pub const BASE_STATS: i32 = -100;
    pub const GEAR: i32 = 0;
    pub const SET_BONUSES: i32 = 50;
    pub const PASSIVES: i32 = 100;
    pub const BONUSES: i32 = 200;
}

/// Trait for anything that contributes attributes to a build
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    ///
    /// Order matters once percent effects are involved, since they scale
    /// whatever has been accumulated so far. See [`priority`] for the
    /// built-in stages.
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's attributes to the store
    fn apply(&self, stats: &mut AttributeStore);
}

/// Apply sources in priority order; equal priorities keep their given order
pub fn apply_sources(stats: &mut AttributeStore, sources: &[&dyn StatSource]) {
    let mut sorted: Vec<&dyn StatSource> = sources.to_vec();
    sorted.sort_by_key(|s| s.priority());
    for source in sorted {
        tracing::debug!("applying source '{}'", source.id());
        source.apply(stats);
    }
}
