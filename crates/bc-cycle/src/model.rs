//! Four-stage Brayton cycle evaluation.

use crate::error::{DomainError, DomainResult};
use crate::inputs::CycleInputs;
use crate::relations;
use bc_core::numeric::ensure_finite;
use bc_core::units::{Pressure, SpecEnergy, Temperature, k, pa};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Advisory raised when the operating point is valid but not useful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CycleWarning {
    /// Turbine inlet temperature equals compressor exit temperature; the
    /// actual efficiency is reported as zero.
    NoHeatAddition,
    /// Turbine inlet temperature is below compressor exit temperature, so the
    /// combustor would have to reject heat.
    NegativeHeatAddition,
}

impl fmt::Display for CycleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHeatAddition => write!(f, "no heat added; actual efficiency reported as 0"),
            Self::NegativeHeatAddition => {
                write!(f, "maximum temperature is below compressor exit temperature")
            }
        }
    }
}

/// Numbered station around the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Station {
    Inlet,
    CompressorExit,
    TurbineInlet,
    TurbineExit,
}

impl Station {
    pub const ALL: [Station; 4] = [
        Station::Inlet,
        Station::CompressorExit,
        Station::TurbineInlet,
        Station::TurbineExit,
    ];

    pub fn number(self) -> u8 {
        match self {
            Self::Inlet => 1,
            Self::CompressorExit => 2,
            Self::TurbineInlet => 3,
            Self::TurbineExit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Inlet => "1 (Inlet)",
            Self::CompressorExit => "2 (Post-Comp)",
            Self::TurbineInlet => "3 (Max T)",
            Self::TurbineExit => "4 (Post-Turb)",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Temperature and pressure at one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationState {
    pub station: Station,
    pub temperature: Temperature,
    pub pressure: Pressure,
}

/// Everything derived from one evaluation, per unit mass flow.
///
/// Field names and units are stable; front ends bind to them directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    /// Inlet temperature [K]
    pub t1: f64,
    /// Inlet pressure [Pa]
    pub p1: f64,
    /// Compressor exit temperature [K]
    pub t2: f64,
    /// Compressor exit pressure [Pa]
    pub p2: f64,
    /// Turbine inlet temperature [K]
    pub t3: f64,
    /// Turbine inlet pressure [Pa]
    pub p3: f64,
    /// Turbine exit temperature [K]
    pub t4: f64,
    /// Turbine exit pressure [Pa]
    pub p4: f64,
    /// Compressor work input [J/kg]
    pub w_compressor: SpecEnergy,
    /// Turbine work output [J/kg]
    pub w_turbine: SpecEnergy,
    /// Heat added in the combustor [J/kg]
    pub q_in: SpecEnergy,
    /// Net work output [J/kg]
    pub w_net: SpecEnergy,
    /// Ideal Brayton efficiency
    pub eta_ideal: f64,
    /// Net work over heat added
    pub eta_actual: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<CycleWarning>,
}

impl CycleResult {
    /// State at a single station.
    pub fn station(&self, station: Station) -> StationState {
        let (t, p) = match station {
            Station::Inlet => (self.t1, self.p1),
            Station::CompressorExit => (self.t2, self.p2),
            Station::TurbineInlet => (self.t3, self.p3),
            Station::TurbineExit => (self.t4, self.p4),
        };
        StationState {
            station,
            temperature: k(t),
            pressure: pa(p),
        }
    }

    /// All four stations in cycle order. Station 1 also closes the loop.
    pub fn stations(&self) -> [StationState; 4] {
        Station::ALL.map(|s| self.station(s))
    }

    /// Compressor work as a fraction of turbine work.
    pub fn back_work_ratio(&self) -> Option<f64> {
        if self.w_turbine == 0.0 {
            None
        } else {
            Some(self.w_compressor / self.w_turbine)
        }
    }
}

/// Evaluate the cycle for one operating point.
///
/// Stages:
/// 1. 1→2 isentropic compression (derated by `eta_compressor`)
/// 2. 2→3 constant-pressure heat addition up to `t_max`
/// 3. 3→4 isentropic expansion back to inlet pressure (derated by `eta_turbine`)
///
/// # Errors
/// Returns [`DomainError`](crate::DomainError) for the first invalid input,
/// or when a valid but extreme input overflows a derived quantity. The error
/// names the input driving the overflow.
pub fn run(inputs: &CycleInputs) -> DomainResult<CycleResult> {
    inputs.validate()?;

    let CycleInputs {
        t1,
        p1,
        pressure_ratio: rp,
        t_max,
        cp,
        gamma,
        efficiencies,
    } = *inputs;

    // 1 → 2: compression
    let t2s = finite(relations::compressor_exit_temperature(t1, rp, gamma)?, "pressure_ratio")?;
    let t2 = finite(
        relations::derated_compressor_exit_temperature(t1, t2s, efficiencies.compressor)?,
        "eta_compressor",
    )?;
    let p2 = finite(relations::compressor_exit_pressure(p1, rp), "pressure_ratio")?;

    // 2 → 3: heat addition, pressure unchanged
    let t3 = t_max;
    let p3 = p2;

    // 3 → 4: expansion to ambient pressure
    let t4s = relations::turbine_exit_temperature(t3, rp, gamma)?;
    let t4 = finite(
        relations::derated_turbine_exit_temperature(t3, t4s, efficiencies.turbine)?,
        "eta_turbine",
    )?;
    let p4 = p1;

    let w_compressor = finite(relations::compressor_work(cp, t2, t1), "cp")?;
    let w_turbine = finite(relations::turbine_work(cp, t3, t4), "cp")?;
    let q_in = finite(relations::heat_added(cp, t3, t2), "cp")?;
    let w_net = finite(w_turbine - w_compressor, "cp")?;

    let eta_ideal = relations::ideal_efficiency(rp, gamma)?;
    let (eta_actual, warning) = if q_in == 0.0 {
        (0.0, Some(CycleWarning::NoHeatAddition))
    } else if q_in < 0.0 {
        (w_net / q_in, Some(CycleWarning::NegativeHeatAddition))
    } else {
        (w_net / q_in, None)
    };
    let eta_actual = finite(eta_actual, "t_max")?;

    if let Some(w) = warning {
        warn!(t2, t_max, "cycle evaluated with advisory: {w}");
    }
    debug!(rp, t2, t4, w_net, q_in, eta_ideal, eta_actual, "cycle evaluated");

    Ok(CycleResult {
        t1,
        p1,
        t2,
        p2,
        t3,
        p3,
        t4,
        p4,
        w_compressor,
        w_turbine,
        q_in,
        w_net,
        eta_ideal,
        eta_actual,
        warning,
    })
}

fn finite(value: f64, field: &'static str) -> DomainResult<f64> {
    ensure_finite(value, field)
        .map_err(|_| DomainError::invalid(field, "yields a non-finite result"))
}
