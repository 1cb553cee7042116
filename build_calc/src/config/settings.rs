//! Calculator settings and formula constants

use super::{parse_toml, ConfigError};
use serde::{Deserialize, Serialize};

/// Settings fixed for one calculation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Monster level the mitigation formulas are evaluated against
    #[serde(default = "default_vs_level")]
    pub vs_level: u32,
    #[serde(default)]
    pub formulas: FormulaConstants,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            vs_level: default_vs_level(),
            formulas: FormulaConstants::default(),
        }
    }
}

fn default_vs_level() -> u32 {
    70
}

impl Settings {
    /// Settings against a specific monster level
    pub fn with_vs_level(vs_level: u32) -> Self {
        Settings {
            vs_level,
            ..Default::default()
        }
    }

    /// Parse settings from TOML, clamping out-of-range values
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = parse_toml(content)?;
        settings.validate()?;
        Ok(settings.validated())
    }

    /// Reject constants that can never produce a finite result
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.formulas;
        if f.armor_per_level <= 0.0 || f.resist_per_level <= 0.0 {
            return Err(ConfigError::ValidationError(
                "mitigation constants must be positive".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&f.melee_mitigation) {
            return Err(ConfigError::ValidationError(format!(
                "melee_mitigation must be in [0, 1), got {}",
                f.melee_mitigation
            )));
        }
        if f.frames_per_tick <= 0.0 {
            return Err(ConfigError::ValidationError(
                "frames_per_tick must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy with `vs_level` clamped to at least 1
    ///
    /// A zero monster level would zero the mitigation denominators.
    pub fn validated(&self) -> Self {
        let mut settings = self.clone();
        if settings.vs_level == 0 {
            tracing::warn!("vs_level 0 is degenerate, clamping to 1");
            settings.vs_level = 1;
        }
        settings
    }
}

/// Tunable constants used by the derived-stat formulas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaConstants {
    /// Armor reduction: armor / (armor_per_level * vs_level + armor)
    #[serde(default = "default_armor_per_level")]
    pub armor_per_level: f64,
    /// Resist reduction: resist / (resist_per_level * vs_level + resist)
    #[serde(default = "default_resist_per_level")]
    pub resist_per_level: f64,
    /// Innate damage reduction for melee classes
    #[serde(default = "default_melee_mitigation")]
    pub melee_mitigation: f64,
    /// Attack speed bonus every build gets
    #[serde(default = "default_baseline_attack_speed")]
    pub baseline_attack_speed: f64,
    /// Damage bonus per point of primary attribute
    #[serde(default = "default_primary_scaling")]
    pub primary_scaling: f64,
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: f64,
    /// Animation frames per attack are snapped to whole ticks of this size
    #[serde(default = "default_frames_per_tick")]
    pub frames_per_tick: f64,
}

impl Default for FormulaConstants {
    fn default() -> Self {
        FormulaConstants {
            armor_per_level: default_armor_per_level(),
            resist_per_level: default_resist_per_level(),
            melee_mitigation: default_melee_mitigation(),
            baseline_attack_speed: default_baseline_attack_speed(),
            primary_scaling: default_primary_scaling(),
            ticks_per_second: default_ticks_per_second(),
            frames_per_tick: default_frames_per_tick(),
        }
    }
}

fn default_armor_per_level() -> f64 {
    50.0
}
fn default_resist_per_level() -> f64 {
    5.0
}
fn default_melee_mitigation() -> f64 {
    0.30
}
fn default_baseline_attack_speed() -> f64 {
    0.15
}
fn default_primary_scaling() -> f64 {
    0.01
}
fn default_ticks_per_second() -> f64 {
    60.0
}
fn default_frames_per_tick() -> f64 {
    20.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.vs_level, 70);
        assert!((settings.formulas.armor_per_level - 50.0).abs() < f64::EPSILON);
        assert!((settings.formulas.melee_mitigation - 0.30).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml = r#"
vs_level = 63

[formulas]
melee_mitigation = 0.25
"#;
        let settings = Settings::from_toml_str(toml).unwrap();
        assert_eq!(settings.vs_level, 63);
        assert!((settings.formulas.melee_mitigation - 0.25).abs() < f64::EPSILON);
        assert!((settings.formulas.resist_per_level - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_vs_level_clamped() {
        let settings = Settings::from_toml_str("vs_level = 0").unwrap();
        assert_eq!(settings.vs_level, 1);
    }

    #[test]
    fn test_invalid_constants_rejected() {
        let toml = r#"
[formulas]
melee_mitigation = 1.5
"#;
        assert!(matches!(
            Settings::from_toml_str(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_negative_vs_level_is_parse_error() {
        assert!(matches!(
            Settings::from_toml_str("vs_level = -5"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
