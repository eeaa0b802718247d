//! Case evaluation service.

use std::path::Path;

use bc_cycle::{CycleInputs, CycleResult, SweepDefinition, SweepResult, execute_sweep, run};
use bc_project::CaseFile;
use tracing::info;

use crate::error::AppResult;

/// A sweep from a case file together with its results.
#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub id: String,
    pub definition: SweepDefinition,
    pub result: SweepResult,
}

/// Everything computed for one case file.
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub inputs: CycleInputs,
    pub result: CycleResult,
    pub sweeps: Vec<SweepOutcome>,
}

/// Load and validate a case file (YAML or JSON).
pub fn load_case(path: &Path) -> AppResult<CaseFile> {
    let case = bc_project::load_case(path)?;
    info!(path = %path.display(), name = %case.name, "case loaded");
    Ok(case)
}

/// Evaluate a single operating point.
pub fn evaluate_point(inputs: &CycleInputs) -> AppResult<CycleResult> {
    Ok(run(inputs)?)
}

/// Run one sweep around `base`.
pub fn run_sweep(base: &CycleInputs, definition: &SweepDefinition) -> AppResult<SweepResult> {
    Ok(execute_sweep(base, definition)?)
}

/// Evaluate the case operating point and every sweep it defines.
pub fn evaluate_case(case: &CaseFile) -> AppResult<CaseReport> {
    let inputs = case.cycle.to_inputs();
    let result = evaluate_point(&inputs)?;

    let mut sweeps = Vec::with_capacity(case.sweeps.len());
    for sweep in &case.sweeps {
        let definition = sweep.to_definition()?;
        let result = run_sweep(&inputs, &definition)?;
        sweeps.push(SweepOutcome {
            id: sweep.id.clone(),
            definition,
            result,
        });
    }

    Ok(CaseReport {
        name: case.name.clone(),
        inputs,
        result,
        sweeps,
    })
}
