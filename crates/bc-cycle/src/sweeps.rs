//! Parametric sweep definitions.
//!
//! A sweep varies one operating parameter over a range while every other
//! input stays fixed. Used to build efficiency and net-work curves.

use crate::inputs::CycleInputs;
use crate::sweep_executor::SweepError;
use std::fmt;

/// Operating parameter being swept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepVariable {
    /// Compressor pressure ratio (dimensionless)
    PressureRatio,
    /// Turbine inlet temperature [K]
    MaxTemperature,
}

impl SweepVariable {
    /// Copy of `base` with this variable set to `value`.
    pub fn apply(self, base: &CycleInputs, value: f64) -> CycleInputs {
        match self {
            Self::PressureRatio => base.with_pressure_ratio(value),
            Self::MaxTemperature => base.with_t_max(value),
        }
    }

    /// Column name used in tables and CSV headers.
    pub fn key(self) -> &'static str {
        match self {
            Self::PressureRatio => "pressure_ratio",
            Self::MaxTemperature => "t_max_k",
        }
    }
}

impl fmt::Display for SweepVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PressureRatio => write!(f, "Pressure Ratio"),
            Self::MaxTemperature => write!(f, "Maximum Temperature"),
        }
    }
}

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

/// Definition of a single parameter sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    /// Parameter being swept
    pub variable: SweepVariable,
    /// First value (SI)
    pub start: f64,
    /// Last value (SI)
    pub end: f64,
    /// Number of points to generate
    pub num_points: usize,
    /// Spacing type
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    /// Create a validated sweep.
    pub fn new(
        variable: SweepVariable,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "Sweep bounds must be finite".to_string(),
            ));
        }

        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "Sweep must have at least 2 points".to_string(),
            ));
        }

        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "Start and end values must be different".to_string(),
            ));
        }

        Ok(Self {
            variable,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Linear pressure-ratio sweep.
    pub fn pressure_ratio(start: f64, end: f64, num_points: usize) -> Result<Self, SweepError> {
        Self::new(
            SweepVariable::PressureRatio,
            start,
            end,
            num_points,
            SweepType::Linear,
        )
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        match self.sweep_type {
            SweepType::Linear => self.generate_linear(),
            SweepType::Logarithmic => self.generate_logarithmic(),
        }
    }

    fn generate_linear(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    fn generate_logarithmic(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        if self.start <= 0.0 || self.end <= 0.0 {
            return self.generate_linear();
        }

        let log_start = self.start.ln();
        let log_delta = (self.end.ln() - log_start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| (log_start + i as f64 * log_delta).exp())
            .collect();

        // Ensure exact endpoints
        points[0] = self.start;
        points[self.num_points - 1] = self.end;
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points, {})",
            self.variable, self.start, self.end, self.num_points, self.sweep_type
        )
    }
}
