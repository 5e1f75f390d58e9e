//! Scenario file validation.
//!
//! This is the range check a form performs before handing values to the
//! calculators. Physical validity (positive pressure and the like) is checked
//! again by the calculators themselves.

use crate::LATEST_VERSION;
use crate::bounds::{FieldName, FormConfig};
use crate::schema::{GasDef, ScenarioFile};
use gf_stoich::{GasProperties, find_gas};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Value out of bounds: {field} = {value} (allowed {min} to {max})")]
    OutOfBounds {
        field: FieldName,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Invalid bounds for {field}: {reason}")]
    InvalidBounds { field: FieldName, reason: String },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Unknown gas: {name}")]
    UnknownGas { name: String },

    #[error("Scenario name must not be empty")]
    EmptyName,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

impl GasDef {
    /// Properties in bench units, looking catalog gases up by name.
    pub fn resolve(&self) -> Result<GasProperties, ValidationError> {
        match self {
            GasDef::Catalog { catalog } => find_gas(catalog)
                .map(|entry| entry.properties())
                .ok_or_else(|| ValidationError::UnknownGas {
                    name: catalog.clone(),
                }),
            GasDef::Properties {
                molecular_weight,
                mass_density,
            } => Ok(GasProperties::new(*molecular_weight, *mass_density)),
        }
    }
}

/// The bounds table in force for a file: defaults plus its overrides.
pub fn effective_config(file: &ScenarioFile) -> FormConfig {
    FormConfig::default().with_overrides(&file.bounds)
}

pub fn validate_scenario(file: &ScenarioFile) -> Result<(), ValidationError> {
    if file.version == 0 || file.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }
    if file.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let config = effective_config(file);
    config.validate()?;

    for (field, value) in file.scenario.field_values() {
        config.check(field, value)?;
    }

    let gas = file.scenario.gas().resolve()?;
    config.check(FieldName::GasMolecularWeight, gas.molecular_weight)?;
    config.check(FieldName::GasMassDensity, gas.mass_density)?;

    Ok(())
}
