//! Sweep execution across an ordered sequence of operating points.
//!
//! Each point is an independent call to [`run`], so points are evaluated in
//! parallel with rayon. Indexed parallel iterators keep the output in input
//! order, which plotting code relies on.

use crate::error::{DomainError, DomainResult};
use crate::inputs::CycleInputs;
use crate::model::{CycleResult, run};
use crate::sweeps::{SweepDefinition, SweepVariable};
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

/// Error in sweep configuration or execution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Too many failures ({successful} succeeded, {failed} failed): {first}")]
    TooManyFailures {
        successful: usize,
        failed: usize,
        first: DomainError,
    },
}

/// Evaluate many operating points, preserving order.
pub fn evaluate_all(inputs: &[CycleInputs]) -> Vec<DomainResult<CycleResult>> {
    inputs.par_iter().map(run).collect()
}

/// Result of a parametric sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// Parameter that was swept
    pub variable: SweepVariable,
    /// Swept values, in generation order
    pub values: Vec<f64>,
    /// Cycle results aligned with `values` (None where validation failed)
    pub results: Vec<Option<CycleResult>>,
    /// Index and error of every failed point
    pub failures: Vec<(usize, DomainError)>,
}

impl SweepResult {
    /// Number of successful evaluations
    pub fn num_successful(&self) -> usize {
        self.results.len() - self.failures.len()
    }

    /// Number of failed evaluations
    pub fn num_failed(&self) -> usize {
        self.failures.len()
    }

    /// (swept value, result) pairs for successful points, in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, &CycleResult)> + '_ {
        self.values
            .iter()
            .zip(&self.results)
            .filter_map(|(v, r)| r.as_ref().map(|r| (*v, r)))
    }

    /// Get independent values corresponding to successful results
    pub fn successful_values(&self) -> Vec<f64> {
        self.points().map(|(v, _)| v).collect()
    }

    /// Ideal efficiency series (excluding failed points)
    pub fn eta_ideal(&self) -> Vec<f64> {
        self.points().map(|(_, r)| r.eta_ideal).collect()
    }

    /// Actual efficiency series (excluding failed points)
    pub fn eta_actual(&self) -> Vec<f64> {
        self.points().map(|(_, r)| r.eta_actual).collect()
    }

    /// Net work series [J/kg] (excluding failed points)
    pub fn w_net(&self) -> Vec<f64> {
        self.points().map(|(_, r)| r.w_net).collect()
    }

    /// Point with the largest net work output.
    pub fn max_net_work(&self) -> Option<(f64, &CycleResult)> {
        self.points().max_by(|(_, a), (_, b)| a.w_net.total_cmp(&b.w_net))
    }
}

/// Execute a sweep around `base`, varying the parameter named by `sweep_def`.
///
/// Individual points that fail validation are recorded in
/// [`SweepResult::failures`]. The sweep only fails as a whole when no point
/// could be evaluated.
pub fn execute_sweep(
    base: &CycleInputs,
    sweep_def: &SweepDefinition,
) -> Result<SweepResult, SweepError> {
    let values = sweep_def.generate_points();
    info!(
        variable = sweep_def.variable.key(),
        points = values.len(),
        "starting sweep"
    );

    let inputs: Vec<CycleInputs> = values
        .iter()
        .map(|&v| sweep_def.variable.apply(base, v))
        .collect();

    let mut results = Vec::with_capacity(values.len());
    let mut failures = Vec::new();
    for (i, outcome) in evaluate_all(&inputs).into_iter().enumerate() {
        match outcome {
            Ok(result) => results.push(Some(result)),
            Err(err) => {
                results.push(None);
                failures.push((i, err));
            }
        }
    }

    if failures.len() == values.len() {
        let (_, first) = failures.swap_remove(0);
        return Err(SweepError::TooManyFailures {
            successful: 0,
            failed: values.len(),
            first,
        });
    }

    info!(
        variable = sweep_def.variable.key(),
        failed = failures.len(),
        "sweep finished"
    );

    Ok(SweepResult {
        variable: sweep_def.variable,
        values,
        results,
        failures,
    })
}
