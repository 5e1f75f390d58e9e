//! Presentation-neutral summary of a computed scenario.

use crate::error::AppResult;
use gf_project::ScenarioDef;
use gf_stoich::{ScenarioInputs, ScenarioKind, ScenarioOutcome};
use serde::Serialize;

/// One labelled value with its unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    pub label: String,
    pub value: f64,
    pub unit: &'static str,
    #[serde(skip)]
    pub precision: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl ReportLine {
    fn new(label: impl Into<String>, value: f64, unit: &'static str, precision: usize) -> Self {
        Self {
            label: label.into(),
            value,
            unit,
            precision,
            hint: None,
        }
    }

    fn hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn render(&self) -> String {
        let mut line = format!(
            "{}: {:.prec$} {}",
            self.label,
            self.value,
            self.unit,
            prec = self.precision
        );
        if let Some(hint) = self.hint {
            line.push_str(&format!("  ({})", hint));
        }
        line
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowReport {
    pub name: String,
    pub kind: ScenarioKind,
    pub inputs: Vec<ReportLine>,
    pub results: Vec<ReportLine>,
    pub outcome: ScenarioOutcome,
    pub warnings: Vec<String>,
}

impl FlowReport {
    pub fn build(name: &str, inputs: &ScenarioInputs, outcome: ScenarioOutcome) -> Self {
        let input_lines = ScenarioDef::from(inputs)
            .field_values()
            .into_iter()
            .map(|(field, value)| ReportLine::new(field.label(), value, field.unit(), 3))
            .collect();

        let flows = outcome.flows;
        let metrics = outcome.metrics;
        let mut results = Vec::new();
        match inputs {
            ScenarioInputs::LoopFilling(_) => {
                results.push(
                    ReportLine::new(
                        "Volumetric gas flow rate (STP)",
                        flows.gas_flow_rate,
                        "mL/min",
                        2,
                    )
                    .hint("Set this one on the MFC"),
                );
            }
            ScenarioInputs::ContinuousFlow(i) => {
                results.push(
                    ReportLine::new(
                        "Volumetric gas flow rate (STP)",
                        flows.gas_flow_rate,
                        "mL/min",
                        3,
                    )
                    .hint("Set this one on the MFC"),
                );
                if let Some(q) = metrics.gas_flow_at_pressure {
                    results.push(ReportLine::new(
                        format!("Volumetric gas flow rate at {} bar", i.pressure),
                        q,
                        "mL/min",
                        3,
                    ));
                }
                if let Some(q) = flows.liquid_flow_rate {
                    results.push(
                        ReportLine::new("Volumetric liquid flow rate", q, "mL/min", 3)
                            .hint("Set this one on the pump"),
                    );
                }
                if let Some(ratio) = metrics.gas_liquid_ratio {
                    results.push(ReportLine::new(
                        format!("Gas : Liquid ratio (vol.) at {} bar", i.pressure),
                        ratio,
                        ": 1",
                        1,
                    ));
                }
            }
        }
        results.push(ReportLine::new(
            "Substrate molar flow",
            metrics.substrate_molar_flow,
            "mmol/min",
            4,
        ));
        results.push(ReportLine::new(
            "Gas molar flow",
            metrics.gas_molar_flow,
            "mmol/min",
            4,
        ));

        let mut warnings = Vec::new();
        if flows.has_negative_flow() {
            warnings.push("negative flow rate: check the inputs for physical sense".to_string());
        }

        Self {
            name: name.to_string(),
            kind: outcome.kind,
            inputs: input_lines,
            results,
            outcome,
            warnings,
        }
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("{} ({})\n", self.name, self.kind.label());
        out.push_str("\nInputs:\n");
        for line in &self.inputs {
            out.push_str(&format!("  {}\n", line.render()));
        }
        out.push_str("\nResults:\n");
        for line in &self.results {
            out.push_str(&format!("  {}\n", line.render()));
        }
        for warning in &self.warnings {
            out.push_str(&format!("\nwarning: {}\n", warning));
        }
        out
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_stoich::{ContinuousFlowInputs, GasProperties};

    fn report() -> FlowReport {
        let inputs = ScenarioInputs::ContinuousFlow(ContinuousFlowInputs {
            pressure: 9.0,
            gas_equivalents: 10.0,
            liquid_concentration: 0.1,
            gas: GasProperties::new(80.0, 1.0),
            residence_time: 10.0,
            reactor_volume: 5.0,
        });
        let outcome = inputs.evaluate().unwrap();
        FlowReport::build("reference", &inputs, outcome)
    }

    #[test]
    fn continuous_flow_lines_use_metric_precision() {
        let text = report().render_text();
        assert!(text.contains("Volumetric gas flow rate (STP): 4.045 mL/min"));
        assert!(text.contains("Volumetric gas flow rate at 9 bar: 0.449 mL/min"));
        assert!(text.contains("Volumetric liquid flow rate: 0.051 mL/min"));
        assert!(text.contains("Gas : Liquid ratio (vol.) at 9 bar: 8.9 : 1"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn json_carries_outcome() {
        let json = report().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "continuous_flow");
        let gas = value["outcome"]["flows"]["gas_flow_rate"].as_f64().unwrap();
        assert!((gas - 360.0 / 89.0).abs() < 1e-12);
    }
}
