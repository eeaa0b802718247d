//! bc-cycle: ideal and efficiency-derated open Brayton cycle.
//!
//! Provides:
//! - Closed-form isentropic relations (compression, expansion, work, heat)
//! - Operating-point inputs with validation
//! - Single-point cycle evaluation producing an immutable result record
//! - Parametric sweeps over pressure ratio or maximum temperature
//!
//! # Architecture
//!
//! `relations` holds the pure thermodynamic formulas. `model::run` sequences
//! them through the four stations (compression, heat addition, expansion,
//! exhaust) and returns a [`CycleResult`]. Nothing here holds state, so many
//! evaluations can run concurrently; the sweep executor does exactly that
//! with rayon.
//!
//! # Example
//!
//! ```
//! use bc_cycle::{CycleInputs, run};
//!
//! let inputs = CycleInputs::new(288.0, 101_325.0, 10.0, 1400.0);
//! let result = run(&inputs).unwrap();
//!
//! assert_eq!(result.p2, 101_325.0 * 10.0);
//! println!("Net work: {:.0} J/kg, efficiency {:.3}", result.w_net, result.eta_actual);
//! ```

pub mod constants;
pub mod error;
pub mod inputs;
pub mod model;
pub mod relations;
pub mod sweep_executor;
pub mod sweeps;

// Re-exports for ergonomics
pub use error::{DomainError, DomainResult};
pub use inputs::{ComponentEfficiencies, CycleInputs};
pub use model::{CycleResult, CycleWarning, Station, StationState, run};
pub use sweep_executor::{SweepError, SweepResult, evaluate_all, execute_sweep};
pub use sweeps::{SweepDefinition, SweepType, SweepVariable};
