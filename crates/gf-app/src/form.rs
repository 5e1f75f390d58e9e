//! Input collection shared by both scenarios.
//!
//! A form starts from the scenario defaults of a [`FormConfig`], accepts
//! values keyed by [`FieldName`], range-checks them against the one bounds
//! table and produces [`ScenarioInputs`] for the calculators.

use crate::error::{AppError, AppResult};
use gf_project::{FieldName, FormConfig, ScenarioDef};
use gf_stoich::{
    ContinuousFlowInputs, GasCatalogEntry, GasProperties, LoopFillingInputs, ScenarioInputs,
    ScenarioKind, find_gas,
};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct InputForm {
    kind: ScenarioKind,
    config: FormConfig,
    values: BTreeMap<FieldName, f64>,
}

impl InputForm {
    /// Form pre-filled with the scenario defaults.
    pub fn new(kind: ScenarioKind, config: FormConfig) -> Self {
        let values = FieldName::for_kind(kind)
            .iter()
            .filter_map(|field| config.default_value(kind, *field).map(|v| (*field, v)))
            .collect();
        Self {
            kind,
            config,
            values,
        }
    }

    /// Form holding the values of a scenario file entry.
    pub fn from_def(def: &ScenarioDef, config: FormConfig) -> AppResult<Self> {
        let mut form = Self::new(def.kind(), config);
        for (field, value) in def.field_values() {
            form = form.set(field, value)?;
        }
        form.with_gas_properties(def.gas().resolve()?)
    }

    pub fn kind(&self) -> ScenarioKind {
        self.kind
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn value(&self, field: FieldName) -> Option<f64> {
        self.values.get(&field).copied()
    }

    /// Set a field. Fields the scenario does not use are rejected.
    pub fn set(mut self, field: FieldName, value: f64) -> AppResult<Self> {
        if !FieldName::for_kind(self.kind).contains(&field) {
            return Err(AppError::InvalidInput(format!(
                "{} is not used in the {} configuration",
                field,
                self.kind.label()
            )));
        }
        self.values.insert(field, value);
        Ok(self)
    }

    pub fn with_gas_properties(self, gas: GasProperties) -> AppResult<Self> {
        self.set(FieldName::GasMolecularWeight, gas.molecular_weight)?
            .set(FieldName::GasMassDensity, gas.mass_density)
    }

    pub fn with_catalog_gas(self, entry: &GasCatalogEntry) -> AppResult<Self> {
        self.with_gas_properties(entry.properties())
    }

    /// Range-check every field and assemble the calculator inputs.
    pub fn build(&self) -> AppResult<ScenarioInputs> {
        for field in FieldName::for_kind(self.kind) {
            self.config.check(*field, self.required(*field)?)?;
        }

        let gas = GasProperties::new(
            self.required(FieldName::GasMolecularWeight)?,
            self.required(FieldName::GasMassDensity)?,
        );
        let inputs = match self.kind {
            ScenarioKind::LoopFilling => ScenarioInputs::LoopFilling(LoopFillingInputs {
                liquid_flow_rate: self.required(FieldName::LiquidFlowRate)?,
                liquid_concentration: self.required(FieldName::LiquidConcentration)?,
                gas_equivalents: self.required(FieldName::GasEquivalents)?,
                gas,
            }),
            ScenarioKind::ContinuousFlow => ScenarioInputs::ContinuousFlow(ContinuousFlowInputs {
                pressure: self.required(FieldName::Pressure)?,
                gas_equivalents: self.required(FieldName::GasEquivalents)?,
                liquid_concentration: self.required(FieldName::LiquidConcentration)?,
                gas,
                residence_time: self.required(FieldName::ResidenceTime)?,
                reactor_volume: self.required(FieldName::ReactorVolume)?,
            }),
        };
        Ok(inputs)
    }

    fn required(&self, field: FieldName) -> AppResult<f64> {
        self.value(field)
            .ok_or_else(|| AppError::InvalidInput(format!("missing value for {}", field)))
    }
}

pub fn lookup_gas(name: &str) -> AppResult<&'static GasCatalogEntry> {
    find_gas(name).ok_or_else(|| AppError::UnknownGas(name.to_string()))
}
