//! Explicit Euler integrator for the Lotka-Volterra equations:
//!
//!   dprey/dt      = a * prey - b * prey * predators
//!   dpredators/dt = c * predators * prey - d * predators
//!
//! Both populations are clamped at zero after every step; the clamped value
//! feeds the next derivative.

use crate::error::SimResult;
use crate::params::SimulationParameters;
use crate::series::TimeSeriesResult;
use ndarray::{ArrayViewMut1, Zip};
use serde::{Deserialize, Serialize};

/// How independent units of work (replications, scenarios) are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluator {
    /// One after another on the calling thread
    #[default]
    Sequential,
    /// Spread over the rayon thread pool
    Parallel,
}

impl Evaluator {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

/// Run the model sequentially. See [`simulate_with`].
pub fn simulate(params: &SimulationParameters) -> SimResult<TimeSeriesResult> {
    simulate_with(params, Evaluator::Sequential)
}

/// Run the model, integrating replications with the given evaluator.
///
/// Parameters are validated before anything is allocated. The model is
/// deterministic, so every replication row is bitwise identical and the
/// result does not depend on `evaluator`.
pub fn simulate_with(
    params: &SimulationParameters,
    evaluator: Evaluator,
) -> SimResult<TimeSeriesResult> {
    if let Err(e) = params.validate() {
        log::warn!("Rejected parameters: {}", e);
        return Err(e);
    }

    let step_count = params.step_count();
    log::debug!(
        "Integrating {} replication(s) x {} steps ({})",
        params.replications,
        step_count,
        evaluator.name()
    );

    let mut result = TimeSeriesResult::zeros(params.replications, step_count);
    let TimeSeriesResult {
        elapsed_time,
        predator_population,
        prey_population,
    } = &mut result;

    let rows = Zip::from(elapsed_time.rows_mut())
        .and(prey_population.rows_mut())
        .and(predator_population.rows_mut());

    match evaluator {
        Evaluator::Sequential => {
            rows.for_each(|time, prey, predators| integrate_replication(params, time, prey, predators))
        }
        Evaluator::Parallel => rows
            .par_for_each(|time, prey, predators| integrate_replication(params, time, prey, predators)),
    }

    Ok(result)
}

/// Fill one replication row in place.
fn integrate_replication(
    params: &SimulationParameters,
    mut time: ArrayViewMut1<f64>,
    mut prey: ArrayViewMut1<f64>,
    mut predators: ArrayViewMut1<f64>,
) {
    let dt = params.dt;
    let mut x = params.initial_prey;
    let mut y = params.initial_predators;

    time[0] = 0.0;
    prey[0] = x;
    predators[0] = y;

    for t in 1..time.len() {
        let dprey = params.prey_birth_rate * x - params.predation_rate * x * y;
        let dpredator = params.predator_efficiency * y * x - params.predator_loss_rate * y;

        x = (x + dprey * dt).max(0.0);
        y = (y + dpredator * dt).max(0.0);

        time[t] = t as f64 * dt;
        prey[t] = x;
        predators[t] = y;
    }
}
