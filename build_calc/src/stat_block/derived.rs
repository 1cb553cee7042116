//! DerivedStats - read-only snapshot produced at the end of a run

use crate::defense::ResistType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final computed stats for a build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DerivedStats {
    pub armor: f64,
    pub life: f64,
    /// Resistance per damage type (resist-all included)
    pub resists: BTreeMap<ResistType, f64>,
    pub reductions: Reductions,
    pub damage: DamageStats,
    pub speeds: SpeedStats,
    pub dps: DpsStats,
    pub ehp: EhpStats,
}

/// Damage reduction fractions (0.0 - 1.0) against the configured monster level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Reductions {
    pub armor: f64,
    pub resist: BTreeMap<ResistType, f64>,
}

/// Per-hand hit damage
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DamageStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mainhand: Option<WeaponDamage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offhand: Option<WeaponDamage>,
}

impl DamageStats {
    /// Average hit across equipped hands (dual-wield averages both)
    pub fn average_hit(&self) -> f64 {
        mean(
            [self.mainhand.as_ref(), self.offhand.as_ref()]
                .into_iter()
                .flatten()
                .map(|w| w.average),
        )
    }
}

/// Damage range and average hit for one weapon
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponDamage {
    pub min: f64,
    pub max: f64,
    pub average: f64,
}

/// Per-hand attack speed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SpeedStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mainhand: Option<WeaponSpeed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offhand: Option<WeaponSpeed>,
}

impl SpeedStats {
    /// Attacks per second across equipped hands (dual-wield averages both)
    pub fn attacks_per_second(&self) -> f64 {
        mean(
            [self.mainhand.as_ref(), self.offhand.as_ref()]
                .into_iter()
                .flatten()
                .map(|w| w.aps),
        )
    }
}

/// Attack rate for one weapon
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponSpeed {
    /// Attacks per second
    pub aps: f64,
    /// Breakpoint value: ticks per second over whole frames per attack
    pub ticks: f64,
}

/// Damage per second under the SCRAM model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DpsStats {
    pub dps: f64,
    pub dps_demon: f64,
    pub dps_elite: f64,
    pub dps_elite_demon: f64,
    pub scram: Scram,
}

/// The individual SCRAM factors
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scram {
    /// Primary stat scaling
    pub s: f64,
    /// Critical hit multiplier
    pub c: f64,
    /// Attacks per second
    pub r: f64,
    /// Average hit
    pub a: f64,
    /// Reserved multiplier
    pub m: f64,
}

impl Scram {
    pub fn product(&self) -> f64 {
        self.s * self.c * self.r * self.a * self.m
    }
}

/// Effective health pools
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct EhpStats {
    pub ehp: f64,
    /// Damage-taken fraction used for the overall pool
    pub damage_taken: f64,
    pub by_type: BTreeMap<ResistType, f64>,
    pub ehp_melee: f64,
    pub ehp_range: f64,
    pub ehp_elite: f64,
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_hit_dual_wield() {
        let damage = DamageStats {
            mainhand: Some(WeaponDamage { min: 10.0, max: 20.0, average: 15.0 }),
            offhand: Some(WeaponDamage { min: 20.0, max: 30.0, average: 25.0 }),
        };
        assert!((damage.average_hit() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_weapons_average_zero() {
        assert_eq!(DamageStats::default().average_hit(), 0.0);
        assert_eq!(SpeedStats::default().attacks_per_second(), 0.0);
    }

    #[test]
    fn test_scram_product() {
        let scram = Scram { s: 2.0, c: 1.5, r: 1.2, a: 100.0, m: 1.0 };
        assert!((scram.product() - 360.0).abs() < 1e-9);
    }
}
