use bc_app::{
    AppError, AppResult, case_service, render_result, render_station_table, render_sweep_table,
    summarize_sweep, sweep_csv,
};
use bc_core::units::constants::SEA_LEVEL_PRESSURE_PA;
use bc_cycle::constants::{DEFAULT_CP, DEFAULT_GAMMA};
use bc_cycle::{
    ComponentEfficiencies, CycleInputs, SweepDefinition, SweepResult, SweepType, SweepVariable,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "brayton")]
#[command(about = "Brayton cycle evaluator - ideal and derated gas turbine cycles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single operating point
    Run {
        #[command(flatten)]
        point: PointArgs,
        /// Take the operating point from a case file instead of flags
        #[arg(long)]
        case: Option<PathBuf>,
        /// Print the result record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep pressure ratio or maximum temperature around an operating point
    Sweep {
        #[command(flatten)]
        point: PointArgs,
        /// Parameter to sweep
        #[arg(long, value_enum, default_value_t = VariableArg::PressureRatio)]
        variable: VariableArg,
        /// First swept value
        #[arg(long)]
        start: f64,
        /// Last swept value
        #[arg(long)]
        end: f64,
        /// Number of points
        #[arg(long, default_value_t = 100)]
        points: usize,
        /// Use logarithmic spacing
        #[arg(long)]
        log: bool,
        /// Output CSV file path (optional, prints a table otherwise)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate case file syntax and values
    Validate {
        /// Path to the case YAML/JSON file
        case_path: PathBuf,
    },
    /// Evaluate a case file and all of its sweeps
    Case {
        /// Path to the case YAML/JSON file
        case_path: PathBuf,
        /// Directory to write one CSV per sweep
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },
}

/// Operating point flags shared by `run` and `sweep`.
#[derive(Args, Debug, Clone)]
struct PointArgs {
    /// Inlet temperature [K]
    #[arg(long, default_value_t = 288.0)]
    t1: f64,
    /// Inlet pressure [Pa]
    #[arg(long, default_value_t = SEA_LEVEL_PRESSURE_PA)]
    p1: f64,
    /// Compressor pressure ratio
    #[arg(long, default_value_t = 10.0)]
    rp: f64,
    /// Maximum (turbine inlet) temperature [K]
    #[arg(long, default_value_t = 1400.0)]
    t_max: f64,
    /// Specific heat at constant pressure [J/(kg·K)]
    #[arg(long, default_value_t = DEFAULT_CP)]
    cp: f64,
    /// Heat capacity ratio
    #[arg(long, default_value_t = DEFAULT_GAMMA)]
    gamma: f64,
    /// Compressor isentropic efficiency
    #[arg(long, default_value_t = 1.0)]
    eta_c: f64,
    /// Turbine isentropic efficiency
    #[arg(long, default_value_t = 1.0)]
    eta_t: f64,
}

impl PointArgs {
    fn to_inputs(&self) -> CycleInputs {
        CycleInputs::new(self.t1, self.p1, self.rp, self.t_max)
            .with_cp(self.cp)
            .with_gamma(self.gamma)
            .with_efficiencies(ComponentEfficiencies::new(self.eta_c, self.eta_t))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum VariableArg {
    PressureRatio,
    MaxTemperature,
}

impl From<VariableArg> for SweepVariable {
    fn from(arg: VariableArg) -> Self {
        match arg {
            VariableArg::PressureRatio => SweepVariable::PressureRatio,
            VariableArg::MaxTemperature => SweepVariable::MaxTemperature,
        }
    }
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { point, case, json } => cmd_run(&point, case.as_deref(), json),
        Commands::Sweep {
            point,
            variable,
            start,
            end,
            points,
            log,
            output,
        } => {
            let sweep_type = if log {
                SweepType::Logarithmic
            } else {
                SweepType::Linear
            };
            let definition = SweepDefinition::new(variable.into(), start, end, points, sweep_type)?;
            cmd_sweep(&point.to_inputs(), &definition, output.as_deref())
        }
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Case {
            case_path,
            export_dir,
        } => cmd_case(&case_path, export_dir.as_deref()),
    }
}

fn cmd_run(point: &PointArgs, case: Option<&Path>, json: bool) -> AppResult<()> {
    let inputs = match case {
        Some(path) => case_service::load_case(path)?.cycle.to_inputs(),
        None => point.to_inputs(),
    };
    let result = case_service::evaluate_point(&inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("---- Brayton Cycle Simulation ----\n");
    print!("{}", render_result(&inputs, &result));
    println!();
    print!("{}", render_station_table(&result));
    Ok(())
}

fn cmd_sweep(
    base: &CycleInputs,
    definition: &SweepDefinition,
    output: Option<&Path>,
) -> AppResult<()> {
    println!("{}", definition);
    let sweep = case_service::run_sweep(base, definition)?;

    match output {
        Some(path) => write_csv(path, &sweep)?,
        None => print!("{}", render_sweep_table(&sweep)),
    }
    print_sweep_summary(&sweep);
    Ok(())
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = case_service::load_case(case_path)?;
    println!("✓ Case is valid: {} ({} sweeps)", case.name, case.sweeps.len());
    Ok(())
}

fn cmd_case(case_path: &Path, export_dir: Option<&Path>) -> AppResult<()> {
    let case = case_service::load_case(case_path)?;
    let report = case_service::evaluate_case(&case)?;

    println!("---- {} ----\n", report.name);
    print!("{}", render_result(&report.inputs, &report.result));
    println!();
    print!("{}", render_station_table(&report.result));

    for outcome in &report.sweeps {
        println!("\nSweep '{}': {}", outcome.id, outcome.definition);
        print_sweep_summary(&outcome.result);

        if let Some(dir) = export_dir {
            std::fs::create_dir_all(dir).map_err(|source| AppError::OutputWrite {
                path: dir.to_path_buf(),
                source,
            })?;
            write_csv(&dir.join(format!("{}.csv", outcome.id)), &outcome.result)?;
        }
    }
    Ok(())
}

fn write_csv(path: &Path, sweep: &SweepResult) -> AppResult<()> {
    std::fs::write(path, sweep_csv(sweep)).map_err(|source| AppError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    println!(
        "✓ Exported {} data points to {}",
        sweep.num_successful(),
        path.display()
    );
    Ok(())
}

fn print_sweep_summary(sweep: &SweepResult) {
    match summarize_sweep(sweep) {
        Some(summary) => {
            println!("  Points: {} ({} skipped)", summary.points, summary.failed);
            println!(
                "  Peak net work: {:.1} J/kg at {} = {:.4}",
                summary.best_w_net,
                sweep.variable.key(),
                summary.best_value
            );
            println!(
                "  Ideal efficiency: {:.2}% .. {:.2}%",
                summary.eta_ideal_min * 100.0,
                summary.eta_ideal_max * 100.0
            );
        }
        None => println!("  No successful points"),
    }
}
