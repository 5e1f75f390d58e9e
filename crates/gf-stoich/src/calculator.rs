//! Calculator trait shared by both experimental configurations.

use crate::error::StoichResult;
use crate::result::FlowResult;

/// A stateless flow-rate calculator.
///
/// Implementors hold no state, so a single instance may be shared freely
/// between threads.
pub trait FlowCalculator: Send + Sync {
    type Inputs;

    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    fn compute(&self, inputs: &Self::Inputs) -> StoichResult<FlowResult>;
}
