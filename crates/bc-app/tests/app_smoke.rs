//! Smoke test for the bc-app service layer against the bundled cases.

use std::path::PathBuf;

use bc_app::{AppError, evaluate_case, evaluate_point, load_case, summarize_sweep};
use bc_cycle::CycleInputs;

fn case_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("cases");
    path.push(name);
    path
}

#[test]
fn baseline_case_evaluates_with_sweeps() {
    let case = load_case(&case_path("turbojet_baseline.yaml")).expect("Failed to load case");
    let report = evaluate_case(&case).expect("Evaluation should succeed");

    assert_eq!(report.name, "Baseline turbojet");
    assert_eq!(report.sweeps.len(), 2);
    assert!((report.result.eta_ideal - 0.482_05).abs() < 1e-4);

    let rp = &report.sweeps[0];
    assert_eq!(rp.id, "rp_study");
    assert_eq!(rp.result.values.len(), 100);
    let summary = summarize_sweep(&rp.result).unwrap();
    assert_eq!(summary.failed, 0);
}

#[test]
fn derated_case_is_less_efficient_than_ideal() {
    let case = load_case(&case_path("derated_turbofan_core.yaml")).expect("Failed to load case");
    let report = evaluate_case(&case).unwrap();

    assert!(report.result.eta_actual < report.result.eta_ideal);
    assert!(!report.inputs.efficiencies.is_ideal());
}

#[test]
fn invalid_point_surfaces_domain_error() {
    let err = evaluate_point(&CycleInputs::new(288.0, 101_325.0, 1.0, 1400.0)).unwrap_err();
    match err {
        AppError::Domain(domain) => assert_eq!(domain.field(), "pressure_ratio"),
        other => panic!("unexpected error: {other}"),
    }
}
