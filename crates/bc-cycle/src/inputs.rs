//! Operating-point inputs for a single cycle evaluation.

use crate::constants::{DEFAULT_CP, DEFAULT_GAMMA};
use crate::error::{DomainError, DomainResult};
use bc_core::numeric::ensure_finite;
use bc_core::units::{Pressure, Ratio, SpecHeatCapacity, Temperature, to_k, to_pa};
use serde::{Deserialize, Serialize};

/// Isentropic efficiencies of the rotating components.
///
/// Both default to 1.0, which is the ideal cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentEfficiencies {
    /// Compressor isentropic efficiency (0 < eta <= 1)
    pub compressor: f64,
    /// Turbine isentropic efficiency (0 < eta <= 1)
    pub turbine: f64,
}

impl ComponentEfficiencies {
    pub const IDEAL: Self = Self {
        compressor: 1.0,
        turbine: 1.0,
    };

    pub fn new(compressor: f64, turbine: f64) -> Self {
        Self {
            compressor,
            turbine,
        }
    }

    pub fn is_ideal(&self) -> bool {
        self.compressor == 1.0 && self.turbine == 1.0
    }
}

impl Default for ComponentEfficiencies {
    fn default() -> Self {
        Self::IDEAL
    }
}

/// Inputs for one evaluation of the cycle, in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleInputs {
    /// Ambient/inlet temperature [K]
    pub t1: f64,
    /// Ambient/inlet pressure [Pa]
    pub p1: f64,
    /// Compressor pressure ratio P2/P1
    pub pressure_ratio: f64,
    /// Turbine inlet temperature after combustion [K]
    pub t_max: f64,
    /// Specific heat at constant pressure [J/(kg·K)]
    #[serde(default = "default_cp")]
    pub cp: SpecHeatCapacity,
    /// Heat capacity ratio cp/cv
    #[serde(default = "default_gamma")]
    pub gamma: f64,
    #[serde(default)]
    pub efficiencies: ComponentEfficiencies,
}

fn default_cp() -> SpecHeatCapacity {
    DEFAULT_CP
}

fn default_gamma() -> f64 {
    DEFAULT_GAMMA
}

impl CycleInputs {
    /// Inputs for air (`cp = 1005`, `γ = 1.4`) with ideal components.
    pub fn new(t1: f64, p1: f64, pressure_ratio: f64, t_max: f64) -> Self {
        Self {
            t1,
            p1,
            pressure_ratio,
            t_max,
            cp: DEFAULT_CP,
            gamma: DEFAULT_GAMMA,
            efficiencies: ComponentEfficiencies::IDEAL,
        }
    }

    /// Build inputs from unit-checked quantities.
    pub fn from_quantities(
        t1: Temperature,
        p1: Pressure,
        pressure_ratio: Ratio,
        t_max: Temperature,
    ) -> Self {
        Self::new(to_k(t1), to_pa(p1), pressure_ratio.value, to_k(t_max))
    }

    pub fn with_cp(mut self, cp: SpecHeatCapacity) -> Self {
        self.cp = cp;
        self
    }

    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_efficiencies(mut self, efficiencies: ComponentEfficiencies) -> Self {
        self.efficiencies = efficiencies;
        self
    }

    pub fn with_pressure_ratio(mut self, pressure_ratio: f64) -> Self {
        self.pressure_ratio = pressure_ratio;
        self
    }

    pub fn with_t_max(mut self, t_max: f64) -> Self {
        self.t_max = t_max;
        self
    }

    /// Check every field, stopping at the first violation.
    ///
    /// Fields are checked in declaration order, so the reported field is
    /// stable for a given set of inputs.
    pub fn validate(&self) -> DomainResult<()> {
        positive(self.t1, "t1")?;
        positive(self.p1, "p1")?;
        finite(self.pressure_ratio, "pressure_ratio")?;
        if self.pressure_ratio <= 1.0 {
            return Err(DomainError::invalid("pressure_ratio", "must be > 1"));
        }
        positive(self.t_max, "t_max")?;
        positive(self.cp, "cp")?;
        finite(self.gamma, "gamma")?;
        if self.gamma <= 1.0 {
            return Err(DomainError::invalid("gamma", "must be > 1"));
        }
        efficiency(self.efficiencies.compressor, "eta_compressor")?;
        efficiency(self.efficiencies.turbine, "eta_turbine")?;
        Ok(())
    }
}

fn finite(value: f64, field: &'static str) -> DomainResult<()> {
    ensure_finite(value, field).map_err(|_| DomainError::invalid(field, "must be finite"))?;
    Ok(())
}

fn positive(value: f64, field: &'static str) -> DomainResult<()> {
    finite(value, field)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(DomainError::invalid(field, "must be > 0"))
    }
}

fn efficiency(value: f64, field: &'static str) -> DomainResult<()> {
    finite(value, field)?;
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(DomainError::invalid(field, "must be in (0, 1]"))
    }
}
