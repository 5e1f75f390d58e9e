//! Secondary quantities shown next to the flow rates.

use crate::inputs::{ContinuousFlowInputs, LoopFillingInputs};
use crate::result::FlowResult;
use gf_core::Real;

/// Molar gas flow [mmol/min] from a volumetric flow at STP [mL/min].
///
/// Inverse of the STP conversion used by the calculators; independent of
/// temperature and pressure.
pub fn molar_gas_flow_rate(
    volumetric_gas_flow_rate: Real,
    mass_density: Real,
    molecular_weight: Real,
) -> Real {
    volumetric_gas_flow_rate * mass_density / molecular_weight
}

/// Gas flow actually occupying the reactor at process pressure [mL/min].
pub fn gas_flow_at_pressure(gas_flow_stp: Real, pressure: Real) -> Real {
    gas_flow_stp / pressure
}

/// Derived values for one computed scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedMetrics {
    /// Substrate molar flow [mmol/min]
    pub substrate_molar_flow: Real,
    /// Gas molar flow [mmol/min]
    pub gas_molar_flow: Real,
    /// Gas flow at process pressure [mL/min]
    pub gas_flow_at_pressure: Option<Real>,
    /// Gas + liquid flow at process pressure [mL/min]
    pub total_flow_at_pressure: Option<Real>,
    /// Gas:liquid volume ratio at process pressure, `None` without liquid flow
    pub gas_liquid_ratio: Option<Real>,
}

impl DerivedMetrics {
    pub fn loop_filling(inputs: &LoopFillingInputs, result: &FlowResult) -> Self {
        Self {
            substrate_molar_flow: inputs.liquid_concentration * inputs.liquid_flow_rate,
            gas_molar_flow: molar_gas_flow_rate(
                result.gas_flow_rate,
                inputs.gas.mass_density,
                inputs.gas.molecular_weight,
            ),
            gas_flow_at_pressure: None,
            total_flow_at_pressure: None,
            gas_liquid_ratio: None,
        }
    }

    pub fn continuous_flow(inputs: &ContinuousFlowInputs, result: &FlowResult) -> Self {
        let liquid = result.liquid_flow_rate.unwrap_or(0.0);
        let gas_p = gas_flow_at_pressure(result.gas_flow_rate, inputs.pressure);
        let ratio = (liquid != 0.0).then(|| gas_p / liquid);
        Self {
            substrate_molar_flow: inputs.liquid_concentration * liquid,
            gas_molar_flow: molar_gas_flow_rate(
                result.gas_flow_rate,
                inputs.gas.mass_density,
                inputs.gas.molecular_weight,
            ),
            gas_flow_at_pressure: Some(gas_p),
            total_flow_at_pressure: Some(gas_p + liquid),
            gas_liquid_ratio: ratio,
        }
    }
}
