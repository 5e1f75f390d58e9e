use clap::{Args, Parser, Subcommand};
use gf_app::{AppResult, FlowReport, InputForm, lookup_gas, scenario_service};
use gf_project::{FieldName, FormConfig};
use gf_stoich::{ASSUMPTIONS, ScenarioKind, gas_catalog};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "gf")]
#[command(about = "Gas-liquid flow stoichiometry calculator", long_about = None)]
struct Cli {
    /// Log calculation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Gas flow for a pre-loaded gas loop
    LoopFilling {
        /// Flow rate of the liquid [mL/min]
        #[arg(long)]
        liquid_flow_rate: Option<f64>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Gas and liquid flows for continuous feeding at process pressure
    ContinuousFlow {
        /// Pressure, BPR plus pressure drop [bar]
        #[arg(long)]
        pressure: Option<f64>,
        /// Residence time [min]
        #[arg(long)]
        residence_time: Option<f64>,
        /// Reactor volume [mL]
        #[arg(long)]
        reactor_volume: Option<f64>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Compute a scenario stored in a YAML or JSON file
    Run {
        /// Path to the scenario file
        path: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a scenario file without printing results
    Validate {
        /// Path to the scenario file
        path: PathBuf,
    },
    /// List input bounds and defaults
    Bounds,
    /// List the built-in gases
    Gases,
    /// Print the modelling assumptions
    Assumptions,
}

#[derive(Args)]
struct CommonArgs {
    /// Gas:substrate stoichiometric ratio
    #[arg(long)]
    gas_equivalents: Option<f64>,
    /// Concentration of substrate in solution [mmol/mL]
    #[arg(long)]
    liquid_concentration: Option<f64>,
    /// Built-in gas to take molecular weight and density from
    #[arg(long, conflicts_with_all = ["molecular_weight", "density"])]
    gas: Option<String>,
    /// Gas molecular weight [mg/mmol]
    #[arg(long)]
    molecular_weight: Option<f64>,
    /// Gas density [mg/mL]
    #[arg(long)]
    density: Option<f64>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::LoopFilling {
            liquid_flow_rate,
            common,
        } => cmd_calculate(
            ScenarioKind::LoopFilling,
            &[(FieldName::LiquidFlowRate, liquid_flow_rate)],
            &common,
        ),
        Commands::ContinuousFlow {
            pressure,
            residence_time,
            reactor_volume,
            common,
        } => cmd_calculate(
            ScenarioKind::ContinuousFlow,
            &[
                (FieldName::Pressure, pressure),
                (FieldName::ResidenceTime, residence_time),
                (FieldName::ReactorVolume, reactor_volume),
            ],
            &common,
        ),
        Commands::Run { path, json } => cmd_run(&path, json),
        Commands::Validate { path } => cmd_validate(&path),
        Commands::Bounds => {
            cmd_bounds();
            Ok(())
        }
        Commands::Gases => {
            cmd_gases();
            Ok(())
        }
        Commands::Assumptions => {
            for assumption in ASSUMPTIONS {
                println!("- {}", assumption);
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_calculate(
    kind: ScenarioKind,
    specific: &[(FieldName, Option<f64>)],
    common: &CommonArgs,
) -> AppResult<()> {
    let mut form = InputForm::new(kind, FormConfig::default());

    if let Some(name) = &common.gas {
        form = form.with_catalog_gas(lookup_gas(name)?)?;
    }
    let given = specific.iter().copied().chain([
        (FieldName::GasEquivalents, common.gas_equivalents),
        (FieldName::LiquidConcentration, common.liquid_concentration),
        (FieldName::GasMolecularWeight, common.molecular_weight),
        (FieldName::GasMassDensity, common.density),
    ]);
    for (field, value) in given {
        if let Some(value) = value {
            form = form.set(field, value)?;
        }
    }

    let inputs = form.build()?;
    let report = scenario_service::evaluate(kind.label(), &inputs)?;
    print_report(&report, common.json)
}

fn cmd_run(path: &Path, json: bool) -> AppResult<()> {
    let report = scenario_service::run_file(path)?;
    print_report(&report, json)
}

fn cmd_validate(path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", path.display());
    let file = scenario_service::validate_file(path)?;
    println!(
        "✓ Scenario '{}' ({}) is valid",
        file.name,
        file.scenario.kind().label()
    );
    Ok(())
}

fn cmd_bounds() {
    println!(
        "{:<24} {:>9} {:>9} {:>8} {:>8} {:>8}  unit",
        "field", "min", "max", "step", "loop", "cont."
    );
    for row in scenario_service::list_bounds(&FormConfig::default()) {
        let fmt_default =
            |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{}", v));
        println!(
            "{:<24} {:>9} {:>9} {:>8} {:>8} {:>8}  {}",
            row.field.key(),
            row.bounds.min,
            row.bounds.max,
            row.bounds.step,
            fmt_default(row.loop_filling_default),
            fmt_default(row.continuous_flow_default),
            row.field.unit()
        );
    }
}

fn cmd_gases() {
    println!(
        "{:<8} {:<16} {:>10} {:>10} {:>10}",
        "formula", "name", "mg/mmol", "mg/mL", "mL/mmol"
    );
    for entry in gas_catalog() {
        let gas = entry.properties();
        println!(
            "{:<8} {:<16} {:>10.3} {:>10.4} {:>10.2}",
            entry.formula,
            entry.display_name,
            gas.molecular_weight,
            gas.mass_density,
            gas.stp_molar_volume()
        );
    }
}

fn print_report(report: &FlowReport, json: bool) -> AppResult<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
