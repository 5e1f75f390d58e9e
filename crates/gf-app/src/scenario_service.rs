//! Scenario loading, evaluation and introspection.

use std::path::Path;

use gf_project::{FieldBounds, FieldName, FormConfig, ScenarioFile, effective_config};
use gf_stoich::{ScenarioInputs, ScenarioKind};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::form::InputForm;
use crate::report::FlowReport;

/// Row of the bounds listing.
#[derive(Debug, Clone)]
pub struct BoundsSummary {
    pub field: FieldName,
    pub bounds: FieldBounds,
    pub loop_filling_default: Option<f64>,
    pub continuous_flow_default: Option<f64>,
}

/// Load and validate a scenario file (YAML, or JSON by extension).
pub fn load_scenario(path: &Path) -> AppResult<ScenarioFile> {
    let file = gf_project::load(path).map_err(|e| AppError::ScenarioLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(name = %file.name, kind = file.scenario.kind().label(), "scenario loaded");
    Ok(file)
}

/// Calculator inputs for a loaded scenario, range-checked against its bounds.
pub fn scenario_inputs(file: &ScenarioFile) -> AppResult<ScenarioInputs> {
    InputForm::from_def(&file.scenario, effective_config(file))?.build()
}

/// Run the calculator for `inputs` and assemble the report.
pub fn evaluate(name: &str, inputs: &ScenarioInputs) -> AppResult<FlowReport> {
    info!(scenario = name, kind = inputs.kind().label(), "evaluating scenario");
    let outcome = inputs.evaluate()?;
    let report = FlowReport::build(name, inputs, outcome);
    for warning in &report.warnings {
        warn!(scenario = name, "{}", warning);
    }
    Ok(report)
}

pub fn run_file(path: &Path) -> AppResult<FlowReport> {
    let file = load_scenario(path)?;
    let inputs = scenario_inputs(&file)?;
    evaluate(&file.name, &inputs)
}

/// Full check of a scenario file: parse, bounds, and the calculation itself.
pub fn validate_file(path: &Path) -> AppResult<ScenarioFile> {
    let file = load_scenario(path)?;
    let inputs = scenario_inputs(&file)?;
    inputs.compute()?;
    Ok(file)
}

pub fn list_bounds(config: &FormConfig) -> Vec<BoundsSummary> {
    FieldName::ALL
        .iter()
        .filter_map(|field| {
            config.bounds(*field).map(|bounds| BoundsSummary {
                field: *field,
                bounds: *bounds,
                loop_filling_default: config.default_value(ScenarioKind::LoopFilling, *field),
                continuous_flow_default: config
                    .default_value(ScenarioKind::ContinuousFlow, *field),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_listing_covers_every_field() {
        let rows = list_bounds(&FormConfig::default());
        assert_eq!(rows.len(), FieldName::ALL.len());
        let pressure = rows
            .iter()
            .find(|r| r.field == FieldName::Pressure)
            .unwrap();
        assert_eq!(pressure.bounds.max, 45.0);
        assert_eq!(pressure.loop_filling_default, None);
        assert_eq!(pressure.continuous_flow_default, Some(9.0));
    }

    #[test]
    fn calculation_errors_surface_as_app_errors() {
        let inputs = InputForm::new(ScenarioKind::LoopFilling, FormConfig::default())
            .set(FieldName::GasMassDensity, 0.0)
            .unwrap()
            .build()
            .unwrap();
        let err = evaluate("zero density", &inputs).unwrap_err();
        assert!(matches!(err, AppError::Calculation(_)));
        assert!(err.to_string().contains("non-positive density"));
    }
}
