//! # LOTKA
//!
//! Discrete-time predator-prey (Lotka-Volterra) simulator.
//!
//! ## Features
//!
//! - **Deterministic**: explicit Euler integration, bitwise-reproducible
//! - **Parallel**: replications and scenarios can run on all cores via Rayon
//! - **Interchangeable**: outcomes (`TIME`, `predators`, `prey`) share one
//!   shape with any other [`ModelBackend`]
//! - **Configurable**: YAML configuration files
//!
//! ## Quick Start
//!
//! ```rust
//! use lotka::{simulate, SimulationParameters};
//!
//! let params = SimulationParameters {
//!     final_time: 1.0,
//!     ..Default::default()
//! };
//! let result = simulate(&params).unwrap();
//!
//! assert_eq!(result.shape(), (1, 5));
//! assert_eq!(result.prey_population[[0, 1]], 49.9375);
//! ```
//!
//! ## Scenarios
//!
//! ```rust
//! use lotka::{Evaluator, ExperimentRunner, PredatorPreyModel, Scenario, SimulationParameters};
//!
//! let scenarios = vec![
//!     Scenario::new("base", SimulationParameters::default()),
//!     Scenario::new(
//!         "crowded",
//!         SimulationParameters { initial_predators: 60.0, ..Default::default() },
//!     ),
//! ];
//!
//! let outcomes = ExperimentRunner::new(Evaluator::Parallel)
//!     .run(&PredatorPreyModel::default(), &scenarios)
//!     .unwrap();
//!
//! for outcome in &outcomes {
//!     println!("{}: {}", outcome.scenario.name, outcome.summary.summary());
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod integrator;
pub mod model;
pub mod params;
pub mod series;
pub mod stats;

// Re-export main types
pub use config::Config;
pub use error::{SimError, SimResult};
pub use integrator::{simulate, simulate_with, Evaluator};
pub use model::{ExperimentOutcome, ExperimentRunner, ModelBackend, PredatorPreyModel, Scenario};
pub use params::SimulationParameters;
pub use series::{PopulationState, TimeSeriesResult};
pub use stats::PopulationSummary;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run a quick benchmark of the integrator
pub fn benchmark(final_time: f64, replications: usize, evaluator: Evaluator) -> SimResult<BenchmarkResult> {
    use std::time::Instant;

    let params = SimulationParameters {
        final_time,
        replications,
        ..Default::default()
    };

    let start = Instant::now();
    let result = simulate_with(&params, evaluator)?;
    let elapsed = start.elapsed().as_secs_f64();

    let (replications, step_count) = result.shape();
    let total_steps = (replications * step_count) as u64;

    Ok(BenchmarkResult {
        replications,
        step_count,
        evaluator,
        elapsed_secs: elapsed,
        steps_per_second: if elapsed > 0.0 { total_steps as f64 / elapsed } else { f64::INFINITY },
        final_prey: result.prey_population[[0, step_count - 1]],
        final_predators: result.predator_population[[0, step_count - 1]],
    })
}

/// Benchmark result
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub replications: usize,
    pub step_count: usize,
    pub evaluator: Evaluator,
    pub elapsed_secs: f64,
    pub steps_per_second: f64,
    pub final_prey: f64,
    pub final_predators: f64,
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Benchmark Results ===")?;
        writeln!(f, "Shape: {} x {}", self.replications, self.step_count)?;
        writeln!(f, "Evaluator: {}", self.evaluator.name())?;
        writeln!(f, "Time: {:.4}s", self.elapsed_secs)?;
        writeln!(f, "Speed: {:.0} steps/s", self.steps_per_second)?;
        writeln!(f, "Final prey: {:.3}", self.final_prey)?;
        writeln!(f, "Final predators: {:.3}", self.final_predators)?;
        Ok(())
    }
}
