//! Scenario file schema.

use crate::bounds::{FieldBounds, FieldName, FormConfig};
use gf_stoich::{GasProperties, ScenarioInputs, ScenarioKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScenarioFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Per-file replacements for the default bounds table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bounds: BTreeMap<FieldName, FieldBounds>,
    pub scenario: ScenarioDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScenarioDef {
    LoopFilling {
        liquid_flow_rate: f64,
        liquid_concentration: f64,
        gas_equivalents: f64,
        gas: GasDef,
    },
    ContinuousFlow {
        pressure: f64,
        gas_equivalents: f64,
        liquid_concentration: f64,
        gas: GasDef,
        residence_time: f64,
        reactor_volume: f64,
    },
}

/// A gas given either by catalog name or by explicit properties.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum GasDef {
    Catalog {
        catalog: String,
    },
    Properties {
        molecular_weight: f64,
        mass_density: f64,
    },
}

impl ScenarioDef {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            Self::LoopFilling { .. } => ScenarioKind::LoopFilling,
            Self::ContinuousFlow { .. } => ScenarioKind::ContinuousFlow,
        }
    }

    pub fn gas(&self) -> &GasDef {
        match self {
            Self::LoopFilling { gas, .. } | Self::ContinuousFlow { gas, .. } => gas,
        }
    }

    /// Scenario populated from the form defaults.
    pub fn from_defaults(kind: ScenarioKind, config: &FormConfig) -> Self {
        let value = |field| config.default_value(kind, field).unwrap_or_default();
        let gas = GasDef::Properties {
            molecular_weight: value(FieldName::GasMolecularWeight),
            mass_density: value(FieldName::GasMassDensity),
        };
        match kind {
            ScenarioKind::LoopFilling => Self::LoopFilling {
                liquid_flow_rate: value(FieldName::LiquidFlowRate),
                liquid_concentration: value(FieldName::LiquidConcentration),
                gas_equivalents: value(FieldName::GasEquivalents),
                gas,
            },
            ScenarioKind::ContinuousFlow => Self::ContinuousFlow {
                pressure: value(FieldName::Pressure),
                gas_equivalents: value(FieldName::GasEquivalents),
                liquid_concentration: value(FieldName::LiquidConcentration),
                gas,
                residence_time: value(FieldName::ResidenceTime),
                reactor_volume: value(FieldName::ReactorVolume),
            },
        }
    }

    /// Numeric fields keyed for bounds checking, in form order.
    ///
    /// Gas properties are listed only when given explicitly; a catalog gas
    /// has to go through [`GasDef::resolve`] first.
    pub fn field_values(&self) -> Vec<(FieldName, f64)> {
        let gas = match self.gas() {
            GasDef::Properties {
                molecular_weight,
                mass_density,
            } => vec![
                (FieldName::GasMolecularWeight, *molecular_weight),
                (FieldName::GasMassDensity, *mass_density),
            ],
            GasDef::Catalog { .. } => Vec::new(),
        };
        match self {
            Self::LoopFilling {
                liquid_flow_rate,
                liquid_concentration,
                gas_equivalents,
                ..
            } => [
                vec![(FieldName::GasEquivalents, *gas_equivalents)],
                gas,
                vec![
                    (FieldName::LiquidFlowRate, *liquid_flow_rate),
                    (FieldName::LiquidConcentration, *liquid_concentration),
                ],
            ]
            .concat(),
            Self::ContinuousFlow {
                pressure,
                gas_equivalents,
                liquid_concentration,
                residence_time,
                reactor_volume,
                ..
            } => [
                vec![
                    (FieldName::ResidenceTime, *residence_time),
                    (FieldName::ReactorVolume, *reactor_volume),
                    (FieldName::Pressure, *pressure),
                    (FieldName::GasEquivalents, *gas_equivalents),
                ],
                gas,
                vec![(FieldName::LiquidConcentration, *liquid_concentration)],
            ]
            .concat(),
        }
    }
}

impl From<GasProperties> for GasDef {
    fn from(gas: GasProperties) -> Self {
        GasDef::Properties {
            molecular_weight: gas.molecular_weight,
            mass_density: gas.mass_density,
        }
    }
}

impl From<&ScenarioInputs> for ScenarioDef {
    fn from(inputs: &ScenarioInputs) -> Self {
        match inputs {
            ScenarioInputs::LoopFilling(i) => Self::LoopFilling {
                liquid_flow_rate: i.liquid_flow_rate,
                liquid_concentration: i.liquid_concentration,
                gas_equivalents: i.gas_equivalents,
                gas: i.gas.into(),
            },
            ScenarioInputs::ContinuousFlow(i) => Self::ContinuousFlow {
                pressure: i.pressure,
                gas_equivalents: i.gas_equivalents,
                liquid_concentration: i.liquid_concentration,
                gas: i.gas.into(),
                residence_time: i.residence_time,
                reactor_volume: i.reactor_volume,
            },
        }
    }
}
