//! Loop filling: a fixed gas volume is pre-loaded into a loop, so the gas
//! flow depends only on the molar flow of substrate. Pressure and reactor
//! geometry do not enter.

use crate::calculator::FlowCalculator;
use crate::error::{StoichError, StoichResult};
use crate::inputs::LoopFillingInputs;
use crate::result::FlowResult;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy)]
pub struct LoopFillingCalculator;

impl FlowCalculator for LoopFillingCalculator {
    type Inputs = LoopFillingInputs;

    fn name(&self) -> &'static str {
        "loop filling"
    }

    fn compute(&self, inputs: &LoopFillingInputs) -> StoichResult<FlowResult> {
        inputs.validate()?;
        debug!(?inputs, "loop filling inputs");

        // (MW / rho) * Eq * c * v_liquid
        let gas_flow_rate = inputs.gas.stp_molar_volume()
            * inputs.gas_equivalents
            * inputs.liquid_concentration
            * inputs.liquid_flow_rate;
        if !gas_flow_rate.is_finite() {
            return Err(StoichError::Domain {
                what: "gas flow rate overflow",
            });
        }

        info!(
            calculator = self.name(),
            gas_flow_rate,
            "gas flow (STP, mL/min)"
        );
        Ok(FlowResult::gas_only(gas_flow_rate))
    }
}

/// Gas flow rate at STP [mL/min] needed for the requested stoichiometry in
/// the loop-filling configuration.
pub fn compute_loop_filling(inputs: LoopFillingInputs) -> StoichResult<FlowResult> {
    LoopFillingCalculator.compute(&inputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::GasProperties;

    fn inputs(flow: f64, conc: f64, eq: f64, mw: f64, rho: f64) -> LoopFillingInputs {
        LoopFillingInputs {
            liquid_flow_rate: flow,
            liquid_concentration: conc,
            gas_equivalents: eq,
            gas: GasProperties::new(mw, rho),
        }
    }

    #[test]
    fn reference_case() {
        // (80 / 1) * 10 * 0.5 * 0.5
        let r = compute_loop_filling(inputs(0.5, 0.5, 10.0, 80.0, 1.0)).unwrap();
        assert!((r.gas_flow_rate - 200.0).abs() < 1e-12);
        assert_eq!(r.liquid_flow_rate, None);
    }

    #[test]
    fn unit_inputs_give_unity() {
        let r = compute_loop_filling(inputs(1.0, 1.0, 1.0, 2.5, 2.5)).unwrap();
        assert_eq!(r.gas_flow_rate, 1.0);
    }

    #[test]
    fn zero_equivalents_give_zero_flow() {
        let r = compute_loop_filling(inputs(0.5, 0.5, 0.0, 80.0, 1.0)).unwrap();
        assert_eq!(r.gas_flow_rate, 0.0);
    }

    #[test]
    fn zero_density_fails_before_dividing() {
        let err = compute_loop_filling(inputs(0.5, 0.5, 10.0, 80.0, 0.0)).unwrap_err();
        assert_eq!(
            err,
            StoichError::Domain {
                what: "non-positive density"
            }
        );
    }

    #[test]
    fn negative_density_is_a_domain_error() {
        let err = compute_loop_filling(inputs(0.5, 0.5, 10.0, 80.0, -1.0)).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn negative_inputs_fail_validation() {
        for bad in [
            inputs(-0.5, 0.5, 10.0, 80.0, 1.0),
            inputs(0.5, -0.5, 10.0, 80.0, 1.0),
            inputs(0.5, 0.5, -10.0, 80.0, 1.0),
        ] {
            assert!(compute_loop_filling(bad).unwrap_err().is_validation());
        }
    }

    #[test]
    fn calculators_have_distinct_names() {
        use crate::continuous_flow::ContinuousFlowCalculator;
        assert_eq!(LoopFillingCalculator.name(), "loop filling");
        assert_ne!(LoopFillingCalculator.name(), ContinuousFlowCalculator.name());
    }

    #[test]
    fn overflow_reported() {
        let err = compute_loop_filling(inputs(1e300, 1e300, 1.0, 80.0, 1.0)).unwrap_err();
        assert!(err.is_domain());
    }
}
