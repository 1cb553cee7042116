//! Sandbox - Named calculators side by side

use crate::calculator::Calc;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name used when neither a name nor a build id is given
const UNNAMED: &str = "unnamed";

/// Difference between two builds (first minus second)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatDiff {
    pub dps: f64,
    pub ehp: f64,
}

/// A set of calculators keyed by name
#[derive(Debug, Clone, Default)]
pub struct Sandbox {
    calcs: BTreeMap<String, Calc>,
}

impl Sandbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a calculator, replacing any with the same name
    ///
    /// Without a name the build id is used.
    pub fn add(&mut self, calc: Calc, name: Option<&str>) -> &mut Self {
        let name = name
            .map(str::to_string)
            .or_else(|| calc.build().and_then(|b| b.id.clone()))
            .unwrap_or_else(|| UNNAMED.to_string());
        if self.calcs.insert(name.clone(), calc).is_some() {
            tracing::debug!("sandbox: replaced '{}'", name);
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Calc> {
        self.calcs.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Calc> {
        self.calcs.get_mut(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.calcs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.calcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calcs.is_empty()
    }

    /// Remove every calculator
    pub fn reset(&mut self) -> &mut Self {
        self.calcs.clear();
        self
    }

    /// Pairwise differences, keyed `"<a>_<b>"` with `a < b`
    ///
    /// A calculator that has not run counts as 0 dps and 0 ehp.
    pub fn compare(&self) -> BTreeMap<String, StatDiff> {
        let totals: Vec<(&str, f64, f64)> = self
            .calcs
            .iter()
            .map(|(name, calc)| {
                let (dps, ehp) = calc
                    .stats()
                    .map(|s| (s.dps.dps, s.ehp.ehp))
                    .unwrap_or((0.0, 0.0));
                (name.as_str(), dps, ehp)
            })
            .collect();

        let mut diff = BTreeMap::new();
        for (i, (a, a_dps, a_ehp)) in totals.iter().enumerate() {
            for (b, b_dps, b_ehp) in &totals[i + 1..] {
                diff.insert(
                    format!("{}_{}", a, b),
                    StatDiff {
                        dps: a_dps - b_dps,
                        ehp: a_ehp - b_ehp,
                    },
                );
            }
        }
        diff
    }
}
