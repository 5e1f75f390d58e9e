//! Two-way dispatch between the experimental configurations.

use crate::calculator::FlowCalculator;
use crate::continuous_flow::ContinuousFlowCalculator;
use crate::error::StoichResult;
use crate::inputs::{ContinuousFlowInputs, LoopFillingInputs};
use crate::loop_filling::LoopFillingCalculator;
use crate::metrics::DerivedMetrics;
use crate::result::FlowResult;

/// Modelling assumptions behind both calculators.
pub const ASSUMPTIONS: [&str; 3] = [
    "1 bar = 1 atm (~1% error)",
    "validity of the ideal gas law",
    "negligible effect of geometry (e.g., shorter capillary with larger ID vs. longer one with smaller ID)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScenarioKind {
    LoopFilling,
    ContinuousFlow,
}

impl ScenarioKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::LoopFilling => "Loop filling",
            Self::ContinuousFlow => "Continuous flow",
        }
    }
}

/// Inputs for one of the two configurations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScenarioInputs {
    LoopFilling(LoopFillingInputs),
    ContinuousFlow(ContinuousFlowInputs),
}

/// Flow rates plus derived quantities for one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScenarioOutcome {
    pub kind: ScenarioKind,
    pub flows: FlowResult,
    pub metrics: DerivedMetrics,
}

impl ScenarioInputs {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            Self::LoopFilling(_) => ScenarioKind::LoopFilling,
            Self::ContinuousFlow(_) => ScenarioKind::ContinuousFlow,
        }
    }

    /// Run the matching calculator.
    pub fn compute(&self) -> StoichResult<FlowResult> {
        match self {
            Self::LoopFilling(inputs) => LoopFillingCalculator.compute(inputs),
            Self::ContinuousFlow(inputs) => ContinuousFlowCalculator.compute(inputs),
        }
    }

    /// Run the matching calculator and derive the secondary quantities.
    pub fn evaluate(&self) -> StoichResult<ScenarioOutcome> {
        let flows = self.compute()?;
        let metrics = match self {
            Self::LoopFilling(inputs) => DerivedMetrics::loop_filling(inputs, &flows),
            Self::ContinuousFlow(inputs) => DerivedMetrics::continuous_flow(inputs, &flows),
        };
        Ok(ScenarioOutcome {
            kind: self.kind(),
            flows,
            metrics,
        })
    }
}

impl From<LoopFillingInputs> for ScenarioInputs {
    fn from(inputs: LoopFillingInputs) -> Self {
        Self::LoopFilling(inputs)
    }
}

impl From<ContinuousFlowInputs> for ScenarioInputs {
    fn from(inputs: ContinuousFlowInputs) -> Self {
        Self::ContinuousFlow(inputs)
    }
}
