//! Shared application service layer for the Brayton cycle tools.
//!
//! Centralizes case loading, evaluation and result rendering so that any
//! front end (the CLI today) only deals with `AppResult` and plain text.

pub mod case_service;
pub mod error;
pub mod report;

// Re-export key types for convenience
pub use case_service::{
    CaseReport, SweepOutcome, evaluate_case, evaluate_point, load_case, run_sweep,
};
pub use error::{AppError, AppResult};
pub use report::{
    SweepSummary, render_result, render_station_table, render_sweep_table, summarize_sweep,
    sweep_csv,
};
