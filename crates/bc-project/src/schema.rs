//! Case file schema definitions.

use bc_cycle::constants::{DEFAULT_CP, DEFAULT_GAMMA};
use bc_cycle::{
    ComponentEfficiencies, CycleInputs, SweepDefinition, SweepError, SweepType, SweepVariable,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cycle: CycleDef,
    #[serde(default)]
    pub sweeps: Vec<SweepDef>,
}

/// Operating point. Optional fields fall back to air with ideal components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleDef {
    pub t1_k: f64,
    pub p1_pa: f64,
    pub pressure_ratio: f64,
    pub t_max_k: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cp_j_per_kg_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_compressor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eta_turbine: Option<f64>,
}

impl CycleDef {
    pub fn to_inputs(&self) -> CycleInputs {
        CycleInputs::new(self.t1_k, self.p1_pa, self.pressure_ratio, self.t_max_k)
            .with_cp(self.cp_j_per_kg_k.unwrap_or(DEFAULT_CP))
            .with_gamma(self.gamma.unwrap_or(DEFAULT_GAMMA))
            .with_efficiencies(ComponentEfficiencies::new(
                self.eta_compressor.unwrap_or(1.0),
                self.eta_turbine.unwrap_or(1.0),
            ))
    }

    /// Inverse of [`CycleDef::to_inputs`]; default-valued fields are omitted.
    pub fn from_inputs(inputs: &CycleInputs) -> Self {
        let non_default = |v: f64, d: f64| (v != d).then_some(v);
        Self {
            t1_k: inputs.t1,
            p1_pa: inputs.p1,
            pressure_ratio: inputs.pressure_ratio,
            t_max_k: inputs.t_max,
            cp_j_per_kg_k: non_default(inputs.cp, DEFAULT_CP),
            gamma: non_default(inputs.gamma, DEFAULT_GAMMA),
            eta_compressor: non_default(inputs.efficiencies.compressor, 1.0),
            eta_turbine: non_default(inputs.efficiencies.turbine, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SweepVariableDef {
    PressureRatio,
    MaxTemperature,
}

impl From<SweepVariableDef> for SweepVariable {
    fn from(def: SweepVariableDef) -> Self {
        match def {
            SweepVariableDef::PressureRatio => SweepVariable::PressureRatio,
            SweepVariableDef::MaxTemperature => SweepVariable::MaxTemperature,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpacingDef {
    #[default]
    Linear,
    Logarithmic,
}

impl From<SpacingDef> for SweepType {
    fn from(def: SpacingDef) -> Self {
        match def {
            SpacingDef::Linear => SweepType::Linear,
            SpacingDef::Logarithmic => SweepType::Logarithmic,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepDef {
    pub id: String,
    pub variable: SweepVariableDef,
    pub start: f64,
    pub end: f64,
    pub points: usize,
    #[serde(default)]
    pub spacing: SpacingDef,
}

impl SweepDef {
    pub fn to_definition(&self) -> Result<SweepDefinition, SweepError> {
        SweepDefinition::new(
            self.variable.into(),
            self.start,
            self.end,
            self.points,
            self.spacing.into(),
        )
    }
}
