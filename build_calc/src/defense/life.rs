//! Life - Hit points from level and vitality

use crate::stat_block::AttributeStore;

/// Level at which vitality starts scaling with level
const VITALITY_SCALING_LEVEL: u32 = 35;

/// Maximum life for a character level
///
/// Below level 35 each point of vitality is worth 10 life; from 35 on it
/// is worth `level - 25`. The total is then scaled by `plus-life` percent.
pub fn life(level: u32, stats: &AttributeStore) -> f64 {
    let level_f = level as f64;
    let vitality = stats.get("vitality");
    let life_per_vitality = if level < VITALITY_SCALING_LEVEL {
        10.0
    } else {
        level_f - 25.0
    };
    let base = 36.0 + 4.0 * level_f + life_per_vitality * vitality;
    base * (1.0 + stats.get("plus-life") / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vitality(v: f64) -> AttributeStore {
        let mut stats = AttributeStore::new();
        stats.add("vitality", v);
        stats
    }

    #[test]
    fn test_low_level_life() {
        // 36 + 4 * 10 + 10 * 27
        assert!((life(10, &vitality(27.0)) - 346.0).abs() < 1e-9);
    }

    #[test]
    fn test_tier_boundary() {
        // At 34 vitality is worth 10, at 35 it is worth 10 as well (35 - 25)
        assert!((life(34, &vitality(100.0)) - (36.0 + 136.0 + 1000.0)).abs() < 1e-9);
        assert!((life(35, &vitality(100.0)) - (36.0 + 140.0 + 1000.0)).abs() < 1e-9);
    }

    #[test]
    fn test_level_70_life() {
        // 36 + 280 + 45 * 147 = 6931
        assert!((life(70, &vitality(147.0)) - 6931.0).abs() < 1e-9);
    }

    #[test]
    fn test_plus_life_scales() {
        let mut stats = vitality(147.0);
        stats.add("plus-life", 10.0);
        assert!((life(70, &stats) - 6931.0 * 1.1).abs() < 1e-6);
    }
}
