//! `protosim`: run one Monte-Carlo protocol simulation and print the result
//! as JSON on stdout. Logs go to stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use protosim_core::config::{CliOverrides, SimConfig};
use protosim_core::constants::DEFAULT_TEMPLATE_ID;
use protosim_core::errors::{ProtosimErrorCode, SimResult};
use protosim_core::models::{ExecutionMode, SimulationParams};
use protosim_core::tracing::init_tracing_with_level;
use protosim_engine::MonteCarloAggregator;

#[derive(Parser, Debug)]
#[command(name = "protosim")]
#[command(about = "Stochastic Monte-Carlo simulation of laboratory protocols")]
#[command(version)]
struct Args {
    /// Protocol template id
    #[arg(long, short = 't', default_value = DEFAULT_TEMPLATE_ID)]
    template: String,

    /// Samples per run
    #[arg(long, short = 'n', default_value_t = 10)]
    samples: usize,

    /// Number of independent runs
    #[arg(long, short = 'r', default_value_t = 5)]
    runs: usize,

    /// Master seed; omit for an entropy-seeded stream
    #[arg(long)]
    seed: Option<u64>,

    /// Initial yield per sample (mg)
    #[arg(long)]
    initial_yield: Option<f64>,

    /// Initial volume per sample (ml)
    #[arg(long)]
    initial_volume: Option<f64>,

    /// Run iterations on the rayon pool with per-run streams
    #[arg(long)]
    parallel: bool,

    /// Config file; defaults to ./protosim.toml when present
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// List available template ids and exit
    #[arg(long)]
    list_templates: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}

/// Resolve config, run the request, and render what goes to stdout.
fn run(args: &Args) -> SimResult<String> {
    let config = load_config(args)?;
    init_tracing_with_level(config.observability.effective_log_level());
    tracing::debug!(?config, "configuration resolved");

    let mut simulator = MonteCarloAggregator::from_config(&config)?;

    if args.list_templates {
        return Ok(simulator.catalog().template_ids().join("\n"));
    }

    let params = SimulationParams {
        initial_yield: args.initial_yield,
        initial_volume: args.initial_volume,
    };
    let result = simulator.run_simulation(&args.template, args.samples, args.runs, &params)?;

    if args.compact {
        result.to_json()
    } else {
        result.to_json_pretty()
    }
}

fn load_config(args: &Args) -> SimResult<SimConfig> {
    let overrides = CliOverrides {
        seed: args.seed,
        execution_mode: args.parallel.then_some(ExecutionMode::Parallel),
        log_level: args.log_level.clone(),
    };
    let config = match &args.config {
        Some(path) => SimConfig::load_file(path, Some(&overrides))?,
        None => SimConfig::load(Path::new("."), Some(&overrides))?,
    };
    Ok(config)
}
