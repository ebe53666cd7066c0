//! LOTKA - CLI Entry Point
//!
//! Predator-prey scenario runner.

use clap::{Parser, Subcommand};
use lotka::analysis::ExportSystem;
use lotka::{benchmark, Config, Evaluator, ExperimentRunner, PredatorPreyModel};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lotka")]
#[command(version)]
#[command(about = "Discrete-time predator-prey (Lotka-Volterra) simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every configured scenario and export the results
    Run {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Output directory (overrides the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Run scenarios in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },

    /// Time the integrator
    Benchmark {
        /// Simulated time horizon
        #[arg(short, long, default_value = "3650")]
        final_time: f64,

        /// Number of replications
        #[arg(short, long, default_value = "64")]
        replications: usize,

        /// Integrate replications in parallel
        #[arg(short, long)]
        parallel: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            output,
            parallel,
            quiet,
        } => run_scenarios(config, output, parallel, quiet),

        Commands::Init { output } => {
            init_logging("info");
            generate_config(output)
        }

        Commands::Benchmark {
            final_time,
            replications,
            parallel,
        } => {
            init_logging("info");
            run_benchmark(final_time, replications, parallel)
        }
    }
}

fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn run_scenarios(
    config_path: PathBuf,
    output: Option<PathBuf>,
    parallel: bool,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Load or create config
    let (mut config, loaded) = if config_path.exists() {
        (Config::from_file(&config_path)?, true)
    } else {
        (Config::default(), false)
    };
    init_logging(&config.logging.log_level);

    if loaded {
        log::info!("Loaded config from {:?}", config_path);
    } else {
        log::info!("{:?} not found, using default configuration", config_path);
    }

    if parallel {
        config.run.evaluator = Evaluator::Parallel;
    }
    if let Some(dir) = output {
        config.output.directory = dir;
    }

    let scenarios = config.effective_scenarios();
    let model = PredatorPreyModel::default();
    let runner = ExperimentRunner::new(config.run.evaluator);

    let start = Instant::now();
    let outcomes = runner.run(&model, &scenarios)?;
    let elapsed = start.elapsed();

    if !quiet {
        println!();
        println!("=== Scenarios ===");
        for outcome in &outcomes {
            println!("{:<20} {}", outcome.scenario.name, outcome.summary.summary());
        }
        println!();
    }

    let manifest = ExportSystem::export_all(
        &outcomes,
        &config.output.directory,
        config.output.write_csv,
        config.output.write_summary,
    )?;

    println!("=== Run Complete ===");
    println!("Scenarios: {}", outcomes.len());
    println!("Time: {:.3}s", elapsed.as_secs_f64());
    println!("CSV files: {}", manifest.csv_files.len());
    if let Some(path) = manifest.summary_file {
        println!("Summary: {:?}", path);
    }

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Configuration saved to: {:?}", output);
    Ok(())
}

fn run_benchmark(
    final_time: f64,
    replications: usize,
    parallel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let evaluator = if parallel {
        Evaluator::Parallel
    } else {
        Evaluator::Sequential
    };

    println!("=== LOTKA Benchmark ===");
    println!("Final time: {}", final_time);
    println!("Replications: {}", replications);
    println!();

    let result = benchmark(final_time, replications, evaluator)?;
    println!("{}", result);

    Ok(())
}
