//! Stoichiometry of gas-liquid flow reactions.
//!
//! Computes the gas (and, in continuous flow, liquid) volumetric flow rates
//! that deliver a target gas:substrate ratio. Two configurations are covered:
//! loop filling, a closed-form product, and continuous flow, a 2×2 linear
//! system coupling stoichiometry to residence time.
//!
//! Every calculator is a pure function of its inputs.

pub mod calculator;
pub mod continuous_flow;
pub mod error;
pub mod gases;
pub mod inputs;
pub mod linear;
pub mod loop_filling;
pub mod metrics;
pub mod result;
pub mod scenario;

pub use calculator::FlowCalculator;
pub use continuous_flow::{ContinuousFlowCalculator, compute_continuous_flow};
pub use error::{StoichError, StoichResult};
pub use gases::{GasCatalogEntry, find_gas, gas_catalog};
pub use inputs::{ContinuousFlowInputs, GasProperties, LoopFillingInputs, field};
pub use loop_filling::{LoopFillingCalculator, compute_loop_filling};
pub use metrics::{DerivedMetrics, molar_gas_flow_rate};
pub use result::FlowResult;
pub use scenario::{ASSUMPTIONS, ScenarioInputs, ScenarioKind, ScenarioOutcome};
