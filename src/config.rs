//! Serde-backed configuration: input decks and report settings.
//!
//! Decks are deliberately lenient. A missing or malformed entry leaves its
//! slot unresolved so the report shows "N/A" for it and everything derived
//! from it, instead of aborting the run.
//!
//! A `scale` must name a rung on the entry's dimension ladder. Some ladders
//! are narrowed: voltage has only volt, kilovolt and megavolt, so a millivolt
//! literal (`"scale": "milli"`) is rejected with `InvalidScale` and reports
//! as "N/A". Write such values in volts instead (`"value": 0.0005`). Area
//! spans nm^2 to km^2 and resistivity nOhm m to Ohm m.
use crate::error::{Error, Result};
use crate::quantity::Quantity;
use crate::store::Model;
use crate::units::{self, Prefix};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// One configured literal. Dimension and scale stay strings until applied so
/// that one bad entry cannot reject the whole deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputEntry {
    pub name: String,
    pub dimension: String,
    #[serde(default)]
    pub value: Option<f64>,
    /// Prefix name ("nano", "kilo", ...); absent means the base unit. The
    /// prefix must be on the dimension's ladder, so voltage takes no "milli".
    #[serde(default)]
    pub scale: Option<String>,
}

impl InputEntry {
    /// `Ok(None)` when no value was supplied.
    pub fn resolve(&self) -> Result<Option<Quantity>> {
        let dimension = units::lookup(&self.dimension)?;
        let Some(value) = self.value else {
            return Ok(None);
        };
        let prefix: Prefix = self.scale.as_deref().unwrap_or("base").parse()?;
        Quantity::with_prefix(dimension, value, prefix).map(Some)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputDeck {
    #[serde(default)]
    pub parameters: Vec<InputEntry>,
}

impl InputDeck {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Declares every entry into `model`, reusing slots that already exist.
    /// Returns how many slots ended up holding a valid input.
    pub fn apply(&self, model: &mut Model) -> usize {
        let mut resolved = 0;
        for entry in &self.parameters {
            let id = match model.find(&entry.name) {
                Some(id) => {
                    warn!(model = %model.name, slot = %entry.name, "input declared twice; later entry wins");
                    id
                }
                None => match model.declare_slot(&entry.name) {
                    Ok(id) => id,
                    Err(e) => {
                        warn!(model = %model.name, slot = %entry.name, error = %e, "cannot declare input");
                        continue;
                    }
                },
            };

            let outcome = match entry.resolve() {
                Ok(Some(q)) => model.set_input(id, q),
                Ok(None) => {
                    warn!(model = %model.name, slot = %entry.name, "input has no value");
                    continue;
                }
                Err(e) => {
                    warn!(model = %model.name, slot = %entry.name, error = %e, "malformed input");
                    model.invalidate(id, e)
                }
            };
            match outcome {
                Ok(()) if model.get(id).is_some_and(|p| p.is_valid()) => resolved += 1,
                Ok(()) => {}
                Err(e) => warn!(model = %model.name, slot = %entry.name, error = %e, "input rejected"),
            }
        }
        resolved
    }

    /// A fresh model holding this deck's inputs.
    pub fn build_model(&self, name: &str) -> Model {
        let mut model = Model::new(name);
        self.apply(&mut model);
        model
    }
}

/// Settings for the Report Formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// "dense" or "padded"; parsed when the report is rendered.
    pub mode: String,
    pub label_width: usize,
    /// Decimals printed before trailing zeros are trimmed.
    pub precision: usize,
    pub sentinel: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            mode: "padded".to_string(),
            label_width: 30,
            precision: 3,
            sentinel: "N/A".to_string(),
        }
    }
}

impl ReportConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(Error::from)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
