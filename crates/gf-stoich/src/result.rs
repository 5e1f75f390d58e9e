//! Flow rates returned by the calculators.

use gf_core::Real;
use gf_core::units::{VolumeRate, ml_per_min};

/// Flow rates produced by a calculator.
///
/// The gas flow is reported at standard conditions (the value set on the mass
/// flow controller). The liquid flow is only computed in continuous flow; in
/// loop filling it is an input.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowResult {
    /// Volumetric gas flow rate at STP [mL/min]
    pub gas_flow_rate: Real,
    /// Volumetric liquid flow rate [mL/min]
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub liquid_flow_rate: Option<Real>,
}

impl FlowResult {
    pub fn gas_only(gas_flow_rate: Real) -> Self {
        Self {
            gas_flow_rate,
            liquid_flow_rate: None,
        }
    }

    pub fn gas_and_liquid(gas_flow_rate: Real, liquid_flow_rate: Real) -> Self {
        Self {
            gas_flow_rate,
            liquid_flow_rate: Some(liquid_flow_rate),
        }
    }

    pub fn gas_flow_quantity(&self) -> VolumeRate {
        ml_per_min(self.gas_flow_rate)
    }

    pub fn liquid_flow_quantity(&self) -> Option<VolumeRate> {
        self.liquid_flow_rate.map(ml_per_min)
    }

    /// True when any reported flow is negative.
    pub fn has_negative_flow(&self) -> bool {
        self.gas_flow_rate < 0.0 || self.liquid_flow_rate.is_some_and(|q| q < 0.0)
    }
}
