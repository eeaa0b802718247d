//! Plain-text and CSV rendering of cycle results.

use std::fmt::Write as _;

use bc_core::units::{to_k, to_kpa};
use bc_cycle::{CycleInputs, CycleResult, SweepResult};

/// Headline numbers of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub points: usize,
    pub failed: usize,
    /// Swept value with the largest net work
    pub best_value: f64,
    pub best_w_net: f64,
    pub eta_ideal_min: f64,
    pub eta_ideal_max: f64,
}

/// Summarize a sweep. `None` when no point succeeded.
pub fn summarize_sweep(sweep: &SweepResult) -> Option<SweepSummary> {
    let (best_value, best) = sweep.max_net_work()?;
    let etas = sweep.eta_ideal();
    let eta_ideal_min = etas.iter().copied().fold(f64::INFINITY, f64::min);
    let eta_ideal_max = etas.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(SweepSummary {
        points: sweep.values.len(),
        failed: sweep.num_failed(),
        best_value,
        best_w_net: best.w_net,
        eta_ideal_min,
        eta_ideal_max,
    })
}

/// Human-readable report for one evaluation.
pub fn render_result(inputs: &CycleInputs, result: &CycleResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "--- Inputs ---");
    let _ = writeln!(out, "Inlet Temperature (T1): {:.2} K", inputs.t1);
    let _ = writeln!(out, "Inlet Pressure (P1): {:.3} kPa", inputs.p1 / 1000.0);
    let _ = writeln!(out, "Pressure Ratio (rp): {:.3}", inputs.pressure_ratio);
    let _ = writeln!(out, "Maximum Temperature (Tmax): {:.2} K", inputs.t_max);
    let _ = writeln!(out, "cp: {:.1} J/kg·K, gamma: {:.3}", inputs.cp, inputs.gamma);
    if !inputs.efficiencies.is_ideal() {
        let _ = writeln!(
            out,
            "Compressor Efficiency: {:.3}, Turbine Efficiency: {:.3}",
            inputs.efficiencies.compressor, inputs.efficiencies.turbine
        );
    }

    let _ = writeln!(out, "\n--- Temperature Analysis ---");
    let _ = writeln!(out, "Compressor Exit Temperature (T2): {:.2} K", result.t2);
    let _ = writeln!(out, "Turbine Inlet Temperature (T3): {:.2} K", result.t3);
    let _ = writeln!(out, "Turbine Exit Temperature (T4): {:.2} K", result.t4);

    let _ = writeln!(out, "\n--- Energy Analysis ---");
    let _ = writeln!(out, "Compressor Work Input: {:.2} J/kg", result.w_compressor);
    let _ = writeln!(out, "Turbine Work Output: {:.2} J/kg", result.w_turbine);
    let _ = writeln!(out, "Heat Added in Combustion Chamber: {:.2} J/kg", result.q_in);
    let _ = writeln!(out, "Net Work Output: {:.2} J/kg", result.w_net);
    if let Some(bwr) = result.back_work_ratio() {
        let _ = writeln!(out, "Back Work Ratio: {:.3}", bwr);
    }

    let _ = writeln!(out, "\n--- Efficiency Analysis ---");
    let _ = writeln!(out, "Ideal Thermal Efficiency: {:.2}%", result.eta_ideal * 100.0);
    let _ = writeln!(out, "Actual Thermal Efficiency: {:.2}%", result.eta_actual * 100.0);

    if let Some(warning) = result.warning {
        let _ = writeln!(out, "\nWarning: {}", warning);
    }

    out
}

/// Station table for the P–T cycle path.
pub fn render_station_table(result: &CycleResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {:>12} {:>14}", "Station", "T [K]", "P [kPa]");
    for state in result.stations() {
        let _ = writeln!(
            out,
            "{:<16} {:>12.2} {:>14.3}",
            state.station.label(),
            to_k(state.temperature),
            to_kpa(state.pressure)
        );
    }
    out
}

/// Fixed-width table of a sweep (successful points only).
pub fn render_sweep_table(sweep: &SweepResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>14} {:>10} {:>10} {:>14} {:>10} {:>10}",
        sweep.variable.key(),
        "T2 [K]",
        "T4 [K]",
        "w_net [J/kg]",
        "eta_ideal",
        "eta_act"
    );
    for (value, r) in sweep.points() {
        let _ = writeln!(
            out,
            "{:>14.4} {:>10.2} {:>10.2} {:>14.1} {:>10.4} {:>10.4}",
            value, r.t2, r.t4, r.w_net, r.eta_ideal, r.eta_actual
        );
    }
    for (index, err) in &sweep.failures {
        let _ = writeln!(
            out,
            "  skipped {} = {}: {}",
            sweep.variable.key(),
            sweep.values[*index],
            err
        );
    }
    out
}

/// CSV of a sweep, one row per successful point, in sweep order.
pub fn sweep_csv(sweep: &SweepResult) -> String {
    let mut csv = format!(
        "{},t2_k,t4_k,w_compressor_j_per_kg,w_turbine_j_per_kg,q_in_j_per_kg,w_net_j_per_kg,eta_ideal,eta_actual\n",
        sweep.variable.key()
    );
    for (value, r) in sweep.points() {
        let _ = writeln!(
            csv,
            "{},{},{},{},{},{},{},{},{}",
            value,
            r.t2,
            r.t4,
            r.w_compressor,
            r.w_turbine,
            r.q_in,
            r.w_net,
            r.eta_ideal,
            r.eta_actual
        );
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_cycle::{ComponentEfficiencies, SweepDefinition, execute_sweep, run};

    fn baseline() -> CycleInputs {
        CycleInputs::new(288.0, 101_325.0, 10.0, 1400.0)
    }

    #[test]
    fn result_report_has_all_sections() {
        let inputs = baseline();
        let text = render_result(&inputs, &run(&inputs).unwrap());
        assert!(text.contains("--- Temperature Analysis ---"));
        assert!(text.contains("--- Energy Analysis ---"));
        assert!(text.contains("--- Efficiency Analysis ---"));
        assert!(text.contains("Compressor Exit Temperature (T2): 556.04 K"));
        assert!(text.contains("Ideal Thermal Efficiency: 48.21%"));
        assert!(!text.contains("Warning"));
        assert!(!text.contains("Compressor Efficiency"));
    }

    #[test]
    fn derated_report_lists_component_efficiencies() {
        let inputs = baseline().with_efficiencies(ComponentEfficiencies::new(0.85, 0.9));
        let text = render_result(&inputs, &run(&inputs).unwrap());
        assert!(text.contains("Compressor Efficiency: 0.850, Turbine Efficiency: 0.900"));
    }

    #[test]
    fn warning_is_reported() {
        let inputs = baseline().with_t_max(500.0);
        let text = render_result(&inputs, &run(&inputs).unwrap());
        assert!(text.contains("Warning: maximum temperature is below"));
    }

    #[test]
    fn station_table_has_four_rows() {
        let text = render_station_table(&run(&baseline()).unwrap());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[2].starts_with("2 (Post-Comp)"));
        assert!(lines[2].contains("1013.250"));
    }

    #[test]
    fn csv_rows_follow_sweep_order() {
        let def = SweepDefinition::pressure_ratio(2.0, 10.0, 5).unwrap();
        let sweep = execute_sweep(&baseline(), &def).unwrap();
        let csv = sweep_csv(&sweep);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("pressure_ratio,t2_k"));
        let first: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(first.len(), 9);
        assert_eq!(first[0], "2");
        assert!(lines[5].starts_with("10,"));
    }

    #[test]
    fn summary_reports_peak_and_range() {
        let def = SweepDefinition::pressure_ratio(2.0, 30.0, 100).unwrap();
        let sweep = execute_sweep(&baseline(), &def).unwrap();
        let summary = summarize_sweep(&sweep).unwrap();

        assert_eq!(summary.points, 100);
        assert_eq!(summary.failed, 0);
        assert!(summary.best_value > 14.0 && summary.best_value < 18.0);
        assert!(summary.eta_ideal_min < summary.eta_ideal_max);
    }
}
