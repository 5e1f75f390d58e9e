//! Input records for the flow-rate calculators.
//!
//! Every record is a plain value in bench units (mL, min, mg, mmol, bar).
//! Records are built from whatever the front-end collected, validated once
//! by the calculator, and dropped.

use crate::error::{StoichError, StoichResult};
use gf_core::units::{Density, MolarMass, to_mg_per_ml, to_mg_per_mmol};
use gf_core::{Real, ensure_finite, ensure_non_negative, ensure_positive};

/// Field keys shared with the bounds table and scenario files.
pub mod field {
    pub const LIQUID_FLOW_RATE: &str = "liquid_flow_rate";
    pub const LIQUID_CONCENTRATION: &str = "liquid_concentration";
    pub const GAS_EQUIVALENTS: &str = "gas_equivalents";
    pub const GAS_MOLECULAR_WEIGHT: &str = "gas_molecular_weight";
    pub const GAS_MASS_DENSITY: &str = "gas_mass_density";
    pub const PRESSURE: &str = "pressure";
    pub const RESIDENCE_TIME: &str = "residence_time";
    pub const REACTOR_VOLUME: &str = "reactor_volume";
}

/// Physical properties of the reacting gas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GasProperties {
    /// Molecular weight [mg/mmol]
    pub molecular_weight: Real,
    /// Mass density at standard conditions [mg/mL]
    pub mass_density: Real,
}

impl GasProperties {
    pub fn new(molecular_weight: Real, mass_density: Real) -> Self {
        Self {
            molecular_weight,
            mass_density,
        }
    }

    /// Build from SI quantities, converting to bench units.
    pub fn from_quantities(molar_mass: MolarMass, density: Density) -> Self {
        Self::new(to_mg_per_mmol(molar_mass), to_mg_per_ml(density))
    }

    /// Volume of one mmol of gas at standard conditions [mL/mmol].
    ///
    /// Only meaningful after [`GasProperties::validate`] succeeded.
    pub fn stp_molar_volume(&self) -> Real {
        self.molecular_weight / self.mass_density
    }

    /// Molecular weight must be strictly positive. A density that is not
    /// strictly positive makes the molar-volume conversion undefined and is
    /// reported as a domain error.
    pub fn validate(&self) -> StoichResult<()> {
        ensure_positive(self.molecular_weight, field::GAS_MOLECULAR_WEIGHT)?;
        let density = ensure_finite(self.mass_density, field::GAS_MASS_DENSITY)?;
        if density <= 0.0 {
            return Err(StoichError::Domain {
                what: "non-positive density",
            });
        }
        Ok(())
    }
}

/// Inputs for the loop-filling configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopFillingInputs {
    /// Liquid flow rate [mL/min]
    pub liquid_flow_rate: Real,
    /// Substrate concentration [mmol/mL]
    pub liquid_concentration: Real,
    /// Gas:substrate stoichiometric ratio [-]
    pub gas_equivalents: Real,
    pub gas: GasProperties,
}

impl LoopFillingInputs {
    pub fn validate(&self) -> StoichResult<()> {
        ensure_non_negative(self.liquid_flow_rate, field::LIQUID_FLOW_RATE)?;
        ensure_non_negative(self.liquid_concentration, field::LIQUID_CONCENTRATION)?;
        ensure_non_negative(self.gas_equivalents, field::GAS_EQUIVALENTS)?;
        self.gas.validate()
    }
}

/// Inputs for the continuous-flow configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousFlowInputs {
    /// Process pressure, back-pressure regulator plus pressure drop [bar]
    pub pressure: Real,
    /// Gas:substrate stoichiometric ratio [-]
    pub gas_equivalents: Real,
    /// Substrate concentration [mmol/mL]
    pub liquid_concentration: Real,
    pub gas: GasProperties,
    /// Target residence time [min]
    pub residence_time: Real,
    /// Inner reactor volume [mL]
    pub reactor_volume: Real,
}

impl ContinuousFlowInputs {
    pub fn validate(&self) -> StoichResult<()> {
        ensure_positive(self.pressure, field::PRESSURE)?;
        ensure_non_negative(self.gas_equivalents, field::GAS_EQUIVALENTS)?;
        ensure_non_negative(self.liquid_concentration, field::LIQUID_CONCENTRATION)?;
        ensure_positive(self.residence_time, field::RESIDENCE_TIME)?;
        ensure_non_negative(self.reactor_volume, field::REACTOR_VOLUME)?;
        self.gas.validate()
    }

    /// Total volumetric flow at process pressure that yields the target
    /// residence time [mL/min].
    pub fn required_total_flow(&self) -> Real {
        self.reactor_volume / self.residence_time
    }
}
