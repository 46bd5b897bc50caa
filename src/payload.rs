//! JSON request payload, its validation, and built-in sample payloads.
//!
//! The wire shape keeps the unit-suffixed fuel keys (`"gas(euro/MWh)"` etc.)
//! and free-form `type` tags. [`Payload::into_request`] is the only place a
//! tag becomes a [`UnitKind`].

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::plan::{DispatchError, FuelPrices, GenerationUnit, PlanRequest, UnitKind};

/// A production plan request as posted by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Load to cover (MW).
    pub load: f64,
    /// Fuel price snapshot.
    pub fuels: FuelsPayload,
    /// Units in caller order.
    pub powerplants: Vec<PowerplantPayload>,
}

/// Fuel prices with their unit-suffixed keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelsPayload {
    #[serde(rename = "gas(euro/MWh)")]
    pub gas: f64,
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine: f64,
    #[serde(rename = "co2(euro/ton)")]
    pub co2: f64,
    #[serde(rename = "wind(%)")]
    pub wind: f64,
}

/// One powerplant entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerplantPayload {
    pub name: String,
    /// Kind tag: `gasfired`, `turbojet` or `windturbine`.
    #[serde(rename = "type")]
    pub kind: String,
    pub efficiency: f64,
    pub pmin: f64,
    pub pmax: f64,
}

/// Payload validation error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Dotted field path (e.g., `"powerplants[2].pmin"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid payload: {} {}", self.field, self.message)
    }
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Failure to obtain a payload from a file, string, or preset name.
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("cannot read \"{path}\": {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("malformed payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown preset \"{name}\", available: {}", Payload::PRESETS.join(", "))]
    UnknownPreset { name: String },
}

impl Payload {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "high_load", "calm"];

    /// Loads a payload from a named preset.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::UnknownPreset`] if the name is not in [`Self::PRESETS`].
    pub fn from_preset(name: &str) -> Result<Self, PayloadError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "high_load" => Ok(Self::high_load()),
            "calm" => Ok(Self::calm()),
            _ => Err(PayloadError::UnknownPreset {
                name: name.to_string(),
            }),
        }
    }

    /// Parses a payload from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns a `PayloadError` if the file cannot be read or the JSON is malformed.
    pub fn from_json_file(path: &Path) -> Result<Self, PayloadError> {
        let content = fs::read_to_string(path).map_err(|source| PayloadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Parses a payload from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Parse`] if the JSON does not match the payload shape.
    pub fn from_json_str(s: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(s)?)
    }

    /// The reference fleet at 480 MW with 60 % wind.
    pub fn baseline() -> Self {
        Self {
            load: 480.0,
            fuels: FuelsPayload {
                gas: 13.4,
                kerosine: 50.8,
                co2: 20.0,
                wind: 60.0,
            },
            powerplants: reference_fleet(),
        }
    }

    /// The reference fleet at 910 MW with 60 % wind.
    pub fn high_load() -> Self {
        Self {
            load: 910.0,
            ..Self::baseline()
        }
    }

    /// The reference fleet at 480 MW without wind.
    ///
    /// The greedy order leaves 20 MW for a unit with a 100 MW floor, so this
    /// preset always ends in manual intervention.
    pub fn calm() -> Self {
        let mut payload = Self::baseline();
        payload.fuels.wind = 0.0;
        payload
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the payload is valid. Kind tags are not
    /// checked here; an unknown tag surfaces as
    /// [`DispatchError::InvalidUnitKind`] from [`Self::into_request`].
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !self.load.is_finite() || self.load < 0.0 {
            errors.push(ValidationError::new("load", "must be a finite number >= 0"));
        }

        let f = &self.fuels;
        if !(f.gas > 0.0 && f.gas.is_finite()) {
            errors.push(ValidationError::new("fuels.gas(euro/MWh)", "must be > 0"));
        }
        if !(f.kerosine > 0.0 && f.kerosine.is_finite()) {
            errors.push(ValidationError::new("fuels.kerosine(euro/MWh)", "must be > 0"));
        }
        if !(f.co2 >= 0.0 && f.co2.is_finite()) {
            errors.push(ValidationError::new("fuels.co2(euro/ton)", "must be >= 0"));
        }
        if !(0.0..=100.0).contains(&f.wind) {
            errors.push(ValidationError::new("fuels.wind(%)", "must be in [0, 100]"));
        }

        if self.powerplants.is_empty() {
            errors.push(ValidationError::new("powerplants", "must not be empty"));
        }

        let mut seen = HashSet::new();
        for (i, plant) in self.powerplants.iter().enumerate() {
            let field = |name: &str| format!("powerplants[{i}].{name}");

            if plant.name.is_empty() {
                errors.push(ValidationError::new(field("name"), "must not be empty"));
            } else if !seen.insert(plant.name.as_str()) {
                errors.push(ValidationError::new(
                    field("name"),
                    format!("duplicate name \"{}\"", plant.name),
                ));
            }
            if !(plant.efficiency > 0.0 && plant.efficiency.is_finite()) {
                errors.push(ValidationError::new(field("efficiency"), "must be > 0"));
            }
            let pmin_ok = plant.pmin >= 0.0 && plant.pmin.is_finite();
            let pmax_ok = plant.pmax >= 0.0 && plant.pmax.is_finite();
            if !pmin_ok {
                errors.push(ValidationError::new(field("pmin"), "must be >= 0"));
            }
            if !pmax_ok {
                errors.push(ValidationError::new(field("pmax"), "must be >= 0"));
            }
            if pmin_ok && pmax_ok && plant.pmin > plant.pmax {
                errors.push(ValidationError::new(
                    field("pmin"),
                    format!("must be <= pmax ({})", plant.pmax),
                ));
            }
        }

        errors
    }

    /// Converts the payload into a typed engine request.
    ///
    /// Every kind tag is parsed before any unit is handed to the engine, so
    /// an unsupported tag anywhere in the list rejects the whole request.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidUnitKind`] for the first unknown tag.
    pub fn into_request(self) -> Result<PlanRequest, DispatchError> {
        let units = self
            .powerplants
            .into_iter()
            .map(|plant| {
                let kind = UnitKind::from_tag(&plant.kind).ok_or_else(|| {
                    DispatchError::InvalidUnitKind {
                        unit: plant.name.clone(),
                        tag: plant.kind.clone(),
                    }
                })?;
                Ok(GenerationUnit::new(
                    plant.name,
                    kind,
                    plant.efficiency,
                    plant.pmin,
                    plant.pmax,
                ))
            })
            .collect::<Result<Vec<_>, DispatchError>>()?;

        Ok(PlanRequest {
            load: self.load,
            fuels: FuelPrices {
                gas: self.fuels.gas,
                distillate: self.fuels.kerosine,
                carbon: self.fuels.co2,
                wind_percent: self.fuels.wind,
            },
            units,
        })
    }
}

fn plant(name: &str, kind: UnitKind, efficiency: f64, pmin: f64, pmax: f64) -> PowerplantPayload {
    PowerplantPayload {
        name: name.to_string(),
        kind: kind.tag().to_string(),
        efficiency,
        pmin,
        pmax,
    }
}

fn reference_fleet() -> Vec<PowerplantPayload> {
    vec![
        plant("gasfiredbig1", UnitKind::Gas, 0.53, 100.0, 460.0),
        plant("gasfiredbig2", UnitKind::Gas, 0.53, 100.0, 460.0),
        plant("gasfiredsomewhatsmaller", UnitKind::Gas, 0.37, 40.0, 210.0),
        plant("tj1", UnitKind::Distillate, 0.3, 0.0, 16.0),
        plant("windpark1", UnitKind::Wind, 1.0, 0.0, 150.0),
        plant("windpark2", UnitKind::Wind, 1.0, 0.0, 36.0),
    ]
}
