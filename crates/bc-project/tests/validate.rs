use bc_project::*;

fn case_with(cycle: CycleDef, sweeps: Vec<SweepDef>) -> CaseFile {
    CaseFile {
        version: 1,
        name: "Validation".to_string(),
        description: None,
        cycle,
        sweeps,
    }
}

fn cycle() -> CycleDef {
    CycleDef {
        t1_k: 288.0,
        p1_pa: 101_325.0,
        pressure_ratio: 10.0,
        t_max_k: 1400.0,
        cp_j_per_kg_k: None,
        gamma: None,
        eta_compressor: None,
        eta_turbine: None,
    }
}

fn sweep(id: &str, points: usize) -> SweepDef {
    SweepDef {
        id: id.to_string(),
        variable: SweepVariableDef::PressureRatio,
        start: 2.0,
        end: 30.0,
        points,
        spacing: SpacingDef::Linear,
    }
}

#[test]
fn valid_case_passes() {
    let case = case_with(cycle(), vec![sweep("a", 10), sweep("b", 20)]);
    validate_case(&case).unwrap();
}

#[test]
fn future_version_rejected() {
    let mut case = case_with(cycle(), vec![]);
    case.version = 99;
    let err = validate_case(&case).unwrap_err();
    assert!(matches!(err, ValidationError::UnsupportedVersion { version: 99 }));
}

#[test]
fn duplicate_sweep_ids_rejected() {
    let case = case_with(cycle(), vec![sweep("rp", 10), sweep("rp", 20)]);
    let err = validate_case(&case).unwrap_err();
    assert!(matches!(err, ValidationError::DuplicateId { ref id, .. } if id == "rp"));
}

#[test]
fn short_sweep_rejected() {
    let case = case_with(cycle(), vec![sweep("rp", 1)]);
    let err = validate_case(&case).unwrap_err();
    assert!(err.to_string().contains("at least 2 points"));
}

#[test]
fn invalid_gamma_names_field() {
    let mut c = cycle();
    c.gamma = Some(1.0);
    let err = validate_case(&case_with(c, vec![])).unwrap_err();
    match err {
        ValidationError::Cycle(domain) => assert_eq!(domain.field(), "gamma"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_name_rejected() {
    let mut case = case_with(cycle(), vec![]);
    case.name = "  ".to_string();
    assert!(matches!(
        validate_case(&case),
        Err(ValidationError::InvalidValue { .. })
    ));
}
