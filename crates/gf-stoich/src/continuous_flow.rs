//! Continuous flow: gas and liquid are fed continuously at process pressure.
//!
//! The two flows are coupled by
//!
//! ```text
//! [ 1/p   1  ] [q_gas   ]   [V / tau]
//! [ 1    -k  ] [q_liquid] = [   0   ]      k = MW * Eq * c / rho
//! ```
//!
//! Row 1 makes the total flow at process pressure match the residence time;
//! row 2 is the stoichiometry. Pressure is taken as 1 bar = 1 atm, which
//! costs about 1% accuracy.

use crate::calculator::FlowCalculator;
use crate::error::StoichResult;
use crate::inputs::ContinuousFlowInputs;
use crate::linear::solve_2x2;
use crate::result::FlowResult;
use gf_core::Real;
use nalgebra::{Matrix2, Vector2};
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct ContinuousFlowCalculator;

/// Gas volume at STP required per mL of liquid [-].
pub fn stoichiometric_gas_factor(inputs: &ContinuousFlowInputs) -> Real {
    inputs.gas.stp_molar_volume() * inputs.gas_equivalents * inputs.liquid_concentration
}

/// Coefficient matrix and right-hand side of the flow system.
pub fn flow_system(inputs: &ContinuousFlowInputs) -> (Matrix2<Real>, Vector2<Real>) {
    let a = Matrix2::new(
        1.0 / inputs.pressure,
        1.0,
        1.0,
        -stoichiometric_gas_factor(inputs),
    );
    let b = Vector2::new(inputs.required_total_flow(), 0.0);
    (a, b)
}

impl FlowCalculator for ContinuousFlowCalculator {
    type Inputs = ContinuousFlowInputs;

    fn name(&self) -> &'static str {
        "continuous flow"
    }

    fn compute(&self, inputs: &ContinuousFlowInputs) -> StoichResult<FlowResult> {
        inputs.validate()?;

        let (a, b) = flow_system(inputs);
        debug!(?inputs, a11 = a[(0, 0)], a22 = a[(1, 1)], b1 = b[0], "continuous flow system");

        let x = solve_2x2(&a, &b)?;
        let result = FlowResult::gas_and_liquid(x[0], x[1]);

        // Kept as-is; callers decide whether a negative flow is acceptable.
        if result.has_negative_flow() {
            warn!(
                gas_flow_rate = x[0],
                liquid_flow_rate = x[1],
                "continuous flow solution contains a negative flow rate"
            );
        }
        info!(
            calculator = self.name(),
            gas_flow_rate = x[0],
            liquid_flow_rate = x[1],
            "flow rates (gas at STP, mL/min)"
        );
        Ok(result)
    }
}

/// Gas (STP) and liquid flow rates [mL/min] meeting both the residence-time
/// and the stoichiometry constraint.
pub fn compute_continuous_flow(inputs: ContinuousFlowInputs) -> StoichResult<FlowResult> {
    ContinuousFlowCalculator.compute(&inputs)
}
