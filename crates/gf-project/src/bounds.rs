//! Input bounds and defaults shared by both scenarios.
//!
//! One table keyed by field, consumed identically whichever configuration
//! is selected. Only the default values differ per scenario.

use crate::validate::ValidationError;
use gf_stoich::{ScenarioKind, field};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    GasEquivalents,
    GasMolecularWeight,
    GasMassDensity,
    LiquidFlowRate,
    LiquidConcentration,
    ResidenceTime,
    ReactorVolume,
    Pressure,
}

impl FieldName {
    pub const ALL: [FieldName; 8] = [
        FieldName::GasEquivalents,
        FieldName::GasMolecularWeight,
        FieldName::GasMassDensity,
        FieldName::LiquidFlowRate,
        FieldName::LiquidConcentration,
        FieldName::ResidenceTime,
        FieldName::ReactorVolume,
        FieldName::Pressure,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::GasEquivalents => field::GAS_EQUIVALENTS,
            Self::GasMolecularWeight => field::GAS_MOLECULAR_WEIGHT,
            Self::GasMassDensity => field::GAS_MASS_DENSITY,
            Self::LiquidFlowRate => field::LIQUID_FLOW_RATE,
            Self::LiquidConcentration => field::LIQUID_CONCENTRATION,
            Self::ResidenceTime => field::RESIDENCE_TIME,
            Self::ReactorVolume => field::REACTOR_VOLUME,
            Self::Pressure => field::PRESSURE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GasEquivalents => "Gas equivalents",
            Self::GasMolecularWeight => "Gas molecular weight",
            Self::GasMassDensity => "Gas density",
            Self::LiquidFlowRate => "Flow rate of the liquid",
            Self::LiquidConcentration => "Concentration of substrate in solution",
            Self::ResidenceTime => "Residence time",
            Self::ReactorVolume => "Reactor volume",
            Self::Pressure => "Pressure (BPR + pressure drop)",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::GasEquivalents => "-",
            Self::GasMolecularWeight => "mg/mmol",
            Self::GasMassDensity => "mg/mL",
            Self::LiquidFlowRate => "mL/min",
            Self::LiquidConcentration => "mmol/mL",
            Self::ResidenceTime => "min",
            Self::ReactorVolume => "mL",
            Self::Pressure => "bar",
        }
    }

    /// Fields collected for a scenario, in form order.
    pub fn for_kind(kind: ScenarioKind) -> &'static [FieldName] {
        match kind {
            ScenarioKind::LoopFilling => &[
                FieldName::GasEquivalents,
                FieldName::GasMolecularWeight,
                FieldName::GasMassDensity,
                FieldName::LiquidFlowRate,
                FieldName::LiquidConcentration,
            ],
            ScenarioKind::ContinuousFlow => &[
                FieldName::ResidenceTime,
                FieldName::ReactorVolume,
                FieldName::Pressure,
                FieldName::GasEquivalents,
                FieldName::GasMolecularWeight,
                FieldName::GasMassDensity,
                FieldName::LiquidConcentration,
            ],
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for FieldName {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        FieldName::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| ValidationError::UnknownField {
                field: s.to_string(),
            })
    }
}

/// Allowed range and input step for a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    pub bounds: BTreeMap<FieldName, FieldBounds>,
    pub loop_filling_defaults: BTreeMap<FieldName, f64>,
    pub continuous_flow_defaults: BTreeMap<FieldName, f64>,
}

impl Default for FormConfig {
    fn default() -> Self {
        use FieldName::*;

        let bounds = BTreeMap::from([
            (GasEquivalents, FieldBounds::new(0.0, 40.0, 0.1)),
            (GasMolecularWeight, FieldBounds::new(0.0, 1500.0, 1.0)),
            (GasMassDensity, FieldBounds::new(0.0, 5.0, 0.01)),
            (LiquidFlowRate, FieldBounds::new(0.0, 1.5, 0.005)),
            (LiquidConcentration, FieldBounds::new(0.0, 5.0, 0.05)),
            (ResidenceTime, FieldBounds::new(0.0, 30.0, 0.5)),
            (ReactorVolume, FieldBounds::new(0.0, 15.0, 0.1)),
            (Pressure, FieldBounds::new(0.0, 45.0, 1.0)),
        ]);
        let loop_filling_defaults = BTreeMap::from([
            (GasEquivalents, 10.0),
            (GasMolecularWeight, 80.0),
            (GasMassDensity, 1.0),
            (LiquidFlowRate, 0.5),
            (LiquidConcentration, 0.5),
        ]);
        let continuous_flow_defaults = BTreeMap::from([
            (ResidenceTime, 10.0),
            (ReactorVolume, 5.0),
            (Pressure, 9.0),
            (GasEquivalents, 10.0),
            (GasMolecularWeight, 80.0),
            (GasMassDensity, 1.8),
            (LiquidConcentration, 0.1),
        ]);

        Self {
            bounds,
            loop_filling_defaults,
            continuous_flow_defaults,
        }
    }
}

impl FormConfig {
    /// Replace the bounds of individual fields.
    pub fn with_overrides(mut self, overrides: &BTreeMap<FieldName, FieldBounds>) -> Self {
        for (field, bounds) in overrides {
            self.bounds.insert(*field, *bounds);
        }
        self
    }

    pub fn bounds(&self, field: FieldName) -> Option<&FieldBounds> {
        self.bounds.get(&field)
    }

    pub fn default_value(&self, kind: ScenarioKind, field: FieldName) -> Option<f64> {
        let defaults = match kind {
            ScenarioKind::LoopFilling => &self.loop_filling_defaults,
            ScenarioKind::ContinuousFlow => &self.continuous_flow_defaults,
        };
        defaults.get(&field).copied()
    }

    /// Range check of a collected value. Fields without bounds only need to
    /// be finite.
    pub fn check(&self, field: FieldName, value: f64) -> Result<(), ValidationError> {
        match self.bounds(field) {
            Some(b) if !b.contains(value) => Err(ValidationError::OutOfBounds {
                field,
                value,
                min: b.min,
                max: b.max,
            }),
            None if !value.is_finite() => Err(ValidationError::OutOfBounds {
                field,
                value,
                min: f64::NEG_INFINITY,
                max: f64::INFINITY,
            }),
            _ => Ok(()),
        }
    }

    /// Sanity of the table itself.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, b) in &self.bounds {
            if !b.min.is_finite() || !b.max.is_finite() || b.min > b.max {
                return Err(ValidationError::InvalidBounds {
                    field: *field,
                    reason: "min and max must be finite with min <= max".to_string(),
                });
            }
            if !b.step.is_finite() || b.step <= 0.0 {
                return Err(ValidationError::InvalidBounds {
                    field: *field,
                    reason: "step must be positive".to_string(),
                });
            }
        }
        for kind in [ScenarioKind::LoopFilling, ScenarioKind::ContinuousFlow] {
            for field in FieldName::for_kind(kind) {
                let value = self.default_value(kind, *field).ok_or_else(|| {
                    ValidationError::InvalidBounds {
                        field: *field,
                        reason: format!("no default for {}", kind.label()),
                    }
                })?;
                self.check(*field, value)?;
            }
        }
        Ok(())
    }
}
