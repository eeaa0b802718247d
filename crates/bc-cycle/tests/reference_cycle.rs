//! Reference operating point and model-level invariants.

use bc_core::{Tolerances, nearly_equal};
use bc_cycle::{ComponentEfficiencies, CycleInputs, CycleResult, run};
use proptest::prelude::*;

fn reference_inputs() -> CycleInputs {
    CycleInputs::new(288.0, 101_325.0, 10.0, 1400.0)
        .with_cp(1005.0)
        .with_gamma(1.4)
}

fn bits(r: &CycleResult) -> Vec<u64> {
    [
        r.t1,
        r.p1,
        r.t2,
        r.p2,
        r.t3,
        r.p3,
        r.t4,
        r.p4,
        r.w_compressor,
        r.w_turbine,
        r.q_in,
        r.w_net,
        r.eta_ideal,
        r.eta_actual,
    ]
    .iter()
    .map(|v| v.to_bits())
    .collect()
}

#[test]
fn turbojet_reference_point() {
    let r = run(&reference_inputs()).unwrap();
    let tol = Tolerances::relative(1e-2);

    // Published figures for this operating point
    assert!(nearly_equal(r.t2, 555.93, tol), "T2 = {}", r.t2);
    assert!(nearly_equal(r.t4, 725.14, tol), "T4 = {}", r.t4);
    assert!(nearly_equal(r.w_compressor, 269_210.0, tol));
    assert!(nearly_equal(r.w_turbine, 677_780.0, tol));
    assert!(nearly_equal(r.q_in, 847_460.0, tol));
    assert!(nearly_equal(r.w_net, 408_570.0, tol));
    assert!(nearly_equal(r.eta_ideal, 0.4825, tol));
    assert!(nearly_equal(r.eta_actual, 0.4821, tol));

    // Tighter check against the closed-form values
    let tight = Tolerances::relative(1e-9);
    assert!(nearly_equal(r.t2, 556.040_945_918_376, tight));
    assert!(nearly_equal(r.w_net, 408_866.761_984_2, tight));
}

#[test]
fn run_is_bit_identical_across_calls() {
    let inputs = reference_inputs().with_efficiencies(ComponentEfficiencies::new(0.87, 0.91));
    let a = run(&inputs).unwrap();
    let b = run(&inputs).unwrap();
    assert_eq!(bits(&a), bits(&b));
    assert_eq!(a.warning, b.warning);
}

#[test]
fn ideal_components_match_default_bit_for_bit() {
    let default = run(&reference_inputs()).unwrap();
    let explicit = run(&reference_inputs().with_efficiencies(ComponentEfficiencies::new(1.0, 1.0)))
        .unwrap();
    assert_eq!(bits(&default), bits(&explicit));
}

#[test]
fn concurrent_runs_agree_with_serial() {
    let inputs = reference_inputs();
    let serial = run(&inputs).unwrap();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || run(&inputs).unwrap()))
        .collect();
    for h in handles {
        let r = h.join().unwrap();
        assert_eq!(bits(&r), bits(&serial));
    }
}

#[test]
fn result_serializes_with_stable_field_names() {
    let r = run(&reference_inputs()).unwrap();
    let json = serde_json::to_value(r).unwrap();
    for key in [
        "t2",
        "t3",
        "t4",
        "w_compressor",
        "w_turbine",
        "q_in",
        "w_net",
        "eta_ideal",
        "eta_actual",
    ] {
        assert!(json.get(key).is_some(), "missing {key}");
    }
    assert!(json.get("warning").is_none());
}

proptest! {
    #[test]
    fn pressures_are_exact(
        t1 in 200.0_f64..330.0,
        p1 in 20_000.0_f64..200_000.0,
        rp in 1.01_f64..50.0,
        t_max in 800.0_f64..2200.0,
        gamma in 1.1_f64..1.67,
    ) {
        let inputs = CycleInputs::new(t1, p1, rp, t_max).with_gamma(gamma);
        let r = run(&inputs).unwrap();
        prop_assert_eq!(r.p2, p1 * rp);
        prop_assert_eq!(r.p3, r.p2);
        prop_assert_eq!(r.p4, p1);
        prop_assert!(r.t2 > t1);
        prop_assert!(r.t4 < r.t3);
    }

    #[test]
    fn actual_efficiency_round_trips(
        rp in 1.5_f64..40.0,
        t_max in 900.0_f64..2000.0,
        eta_c in 0.7_f64..=1.0,
        eta_t in 0.7_f64..=1.0,
    ) {
        let inputs = CycleInputs::new(288.0, 101_325.0, rp, t_max)
            .with_efficiencies(ComponentEfficiencies::new(eta_c, eta_t));
        let r = run(&inputs).unwrap();
        if r.q_in != 0.0 {
            prop_assert_eq!(r.eta_actual, r.w_net / r.q_in);
        }
    }

    #[test]
    fn ideal_efficiency_ignores_temperatures(
        t1 in 200.0_f64..330.0,
        t_max in 800.0_f64..2200.0,
        rp in 1.5_f64..40.0,
    ) {
        let a = run(&CycleInputs::new(t1, 101_325.0, rp, t_max)).unwrap();
        let b = run(&CycleInputs::new(288.0, 101_325.0, rp, 1400.0)).unwrap();
        prop_assert_eq!(a.eta_ideal.to_bits(), b.eta_ideal.to_bits());
    }
}
