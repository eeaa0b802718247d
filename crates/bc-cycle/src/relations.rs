//! Closed-form relations for an ideal gas with constant specific heats.
//!
//! Every function here is pure. Functions that exponentiate check their
//! arguments first and return [`DomainError`] instead of producing NaN.
//!
//! ## Model
//!
//! Isentropic compression and expansion over a pressure ratio `rp`:
//!
//! ```text
//! T_out = T_in * rp^((γ-1)/γ)        (compression)
//! T_out = T_in * (1/rp)^((γ-1)/γ)    (expansion)
//! ```
//!
//! Work and heat per unit mass flow are `cp * ΔT`. The ideal Brayton
//! efficiency depends only on the pressure ratio and `γ`:
//!
//! ```text
//! η = 1 - rp^(-(γ-1)/γ)
//! ```

use crate::error::{DomainError, DomainResult};
use bc_core::units::{SpecEnergy, SpecHeatCapacity};

/// Isentropic exponent `(γ-1)/γ`.
///
/// Rejects non-finite `γ`, `γ = 0` (division by zero) and `γ = 1` (no
/// temperature change at all, which makes every efficiency degenerate).
pub fn isentropic_exponent(gamma: f64) -> DomainResult<f64> {
    if !gamma.is_finite() {
        return Err(DomainError::invalid("gamma", "must be finite"));
    }
    if gamma == 0.0 {
        return Err(DomainError::invalid("gamma", "must be non-zero"));
    }
    if gamma == 1.0 {
        return Err(DomainError::invalid("gamma", "must not equal 1"));
    }
    Ok((gamma - 1.0) / gamma)
}

fn check_pressure_ratio(rp: f64) -> DomainResult<f64> {
    if !rp.is_finite() {
        return Err(DomainError::invalid("pressure_ratio", "must be finite"));
    }
    if rp <= 0.0 {
        return Err(DomainError::invalid("pressure_ratio", "must be > 0"));
    }
    Ok(rp)
}

fn check_efficiency(eta: f64, field: &'static str) -> DomainResult<f64> {
    if !eta.is_finite() || eta <= 0.0 || eta > 1.0 {
        return Err(DomainError::invalid(field, "must be in (0, 1]"));
    }
    Ok(eta)
}

/// Isentropic compressor exit temperature [K].
pub fn compressor_exit_temperature(t_in: f64, rp: f64, gamma: f64) -> DomainResult<f64> {
    let rp = check_pressure_ratio(rp)?;
    let exponent = isentropic_exponent(gamma)?;
    Ok(t_in * rp.powf(exponent))
}

/// Compressor exit pressure [Pa].
pub fn compressor_exit_pressure(p_in: f64, rp: f64) -> f64 {
    p_in * rp
}

/// Isentropic turbine exit temperature [K] after expanding back through `rp`.
pub fn turbine_exit_temperature(t_in: f64, rp: f64, gamma: f64) -> DomainResult<f64> {
    let rp = check_pressure_ratio(rp)?;
    let exponent = isentropic_exponent(gamma)?;
    Ok(t_in * (1.0 / rp).powf(exponent))
}

/// Work absorbed by the compressor [J/kg].
pub fn compressor_work(cp: SpecHeatCapacity, t_exit: f64, t_inlet: f64) -> SpecEnergy {
    cp * (t_exit - t_inlet)
}

/// Work delivered by the turbine [J/kg].
pub fn turbine_work(cp: SpecHeatCapacity, t_inlet: f64, t_exit: f64) -> SpecEnergy {
    cp * (t_inlet - t_exit)
}

/// Heat added at constant pressure [J/kg].
pub fn heat_added(cp: SpecHeatCapacity, t_hot: f64, t_cold: f64) -> SpecEnergy {
    cp * (t_hot - t_cold)
}

/// Thermal efficiency of the ideal Brayton cycle.
pub fn ideal_efficiency(rp: f64, gamma: f64) -> DomainResult<f64> {
    let rp = check_pressure_ratio(rp)?;
    let exponent = isentropic_exponent(gamma)?;
    Ok(1.0 - rp.powf(-exponent))
}

/// Actual compressor exit temperature for isentropic efficiency `eta_c`.
///
/// `T2 = T1 + (T2s - T1) / η_c`. With `η_c = 1` the isentropic value is
/// returned unchanged.
pub fn derated_compressor_exit_temperature(
    t_in: f64,
    t_exit_isentropic: f64,
    eta_c: f64,
) -> DomainResult<f64> {
    let eta_c = check_efficiency(eta_c, "eta_compressor")?;
    if eta_c == 1.0 {
        return Ok(t_exit_isentropic);
    }
    Ok(t_in + (t_exit_isentropic - t_in) / eta_c)
}

/// Actual turbine exit temperature for isentropic efficiency `eta_t`.
///
/// `T4 = T3 - η_t * (T3 - T4s)`. With `η_t = 1` the isentropic value is
/// returned unchanged.
pub fn derated_turbine_exit_temperature(
    t_in: f64,
    t_exit_isentropic: f64,
    eta_t: f64,
) -> DomainResult<f64> {
    let eta_t = check_efficiency(eta_t, "eta_turbine")?;
    if eta_t == 1.0 {
        return Ok(t_exit_isentropic);
    }
    Ok(t_in - eta_t * (t_in - t_exit_isentropic))
}
