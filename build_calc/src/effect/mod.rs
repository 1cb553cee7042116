//! Effect programs - the closed vocabulary skill and set data is written in
//!
//! Effects arrive from game data as `kind -> payload` pairs. Each pair is
//! parsed into an [`EffectProgram`] and executed against an
//! [`AttributeStore`](crate::stat_block::AttributeStore) by the
//! [`EffectInterpreter`].

mod interpreter;

pub use interpreter::EffectInterpreter;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Why an effect entry could not be turned into a program
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EffectError {
    #[error("unknown effect kind '{0}'")]
    UnknownKind(String),
    #[error("malformed '{kind}' payload: {reason}")]
    MalformedPayload { kind: String, reason: String },
}

/// One executable effect
#[derive(Debug, Clone, PartialEq)]
pub enum EffectProgram {
    /// Write every attribute/value pair
    Activate(Map<String, Value>),
    /// Add `from * ratio` to `to`
    Convert(ConvertEffect),
    /// Scale each attribute by a percentage of its current value
    Percent(Map<String, Value>),
    /// Apply effects depending on a field of an equipped item
    Switch(SwitchEffect),
}

/// Payload of a convert effect
///
/// Missing names are kept as `None` so the interpreter can report the
/// conversion as not applied instead of writing to a bogus key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConvertEffect {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub ratio: Value,
}

/// Payload of a switch effect
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwitchEffect {
    /// Item field to read, e.g. `type`
    pub lookup: String,
    /// Slot holding the item to inspect
    pub against: String,
    #[serde(default)]
    pub cases: Vec<SwitchCase>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SwitchCase {
    /// Pipe-separated alternatives, e.g. `"helm|chest"`
    #[serde(rename = "caseOf")]
    pub case_of: String,
    #[serde(default)]
    pub effect: Map<String, Value>,
}

impl SwitchCase {
    /// Exact membership in the pipe-separated alternatives
    pub fn matches(&self, value: &str) -> bool {
        self.case_of.split('|').any(|alt| alt == value)
    }
}

impl EffectProgram {
    /// Parse one `kind -> payload` entry
    pub fn parse(kind: &str, payload: &Value) -> Result<Self, EffectError> {
        let malformed = |reason: String| EffectError::MalformedPayload {
            kind: kind.to_string(),
            reason,
        };

        match kind {
            "activate" => payload
                .as_object()
                .cloned()
                .map(EffectProgram::Activate)
                .ok_or_else(|| malformed("expected an object".to_string())),
            "percent" => payload
                .as_object()
                .cloned()
                .map(EffectProgram::Percent)
                .ok_or_else(|| malformed("expected an object".to_string())),
            "convert" => ConvertEffect::deserialize(payload)
                .map(EffectProgram::Convert)
                .map_err(|e| malformed(e.to_string())),
            "switch" => SwitchEffect::deserialize(payload)
                .map(EffectProgram::Switch)
                .map_err(|e| malformed(e.to_string())),
            other => Err(EffectError::UnknownKind(other.to_string())),
        }
    }

    /// Parse every entry of an effect map, keeping authored order
    ///
    /// Entries that fail to parse are returned as errors in place so the
    /// caller decides how to report them.
    pub fn parse_all(effects: &Map<String, Value>) -> Vec<Result<Self, EffectError>> {
        effects
            .iter()
            .map(|(kind, payload)| EffectProgram::parse(kind, payload))
            .collect()
    }

    /// Effect kind name as it appears in game data
    pub fn kind(&self) -> &'static str {
        match self {
            EffectProgram::Activate(_) => "activate",
            EffectProgram::Convert(_) => "convert",
            EffectProgram::Percent(_) => "percent",
            EffectProgram::Switch(_) => "switch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_kinds() {
        let activate = EffectProgram::parse("activate", &json!({"strength": 10})).unwrap();
        assert_eq!(activate.kind(), "activate");

        let convert = EffectProgram::parse(
            "convert",
            &json!({"from": "strength", "to": "vitality", "ratio": 0.5}),
        )
        .unwrap();
        match convert {
            EffectProgram::Convert(c) => {
                assert_eq!(c.from.as_deref(), Some("strength"));
                assert_eq!(c.ratio, json!(0.5));
            }
            other => panic!("expected convert, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_with_empty_payload_parses() {
        let convert = EffectProgram::parse("convert", &json!({})).unwrap();
        assert_eq!(convert, EffectProgram::Convert(ConvertEffect::default()));
    }

    #[test]
    fn test_unknown_kind() {
        assert_eq!(
            EffectProgram::parse("teleport", &json!({})),
            Err(EffectError::UnknownKind("teleport".to_string()))
        );
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(
            EffectProgram::parse("percent", &json!(10)),
            Err(EffectError::MalformedPayload { .. })
        ));
        assert!(matches!(
            EffectProgram::parse("switch", &json!({"lookup": "type"})),
            Err(EffectError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_case_of_alternatives() {
        let case = SwitchCase {
            case_of: "sword|axe|mace".to_string(),
            effect: Map::new(),
        };
        assert!(case.matches("axe"));
        assert!(!case.matches("ax"));
        assert!(!case.matches("sword|axe"));
    }
}
