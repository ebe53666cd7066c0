//! Time series container returned by the integrator.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Outcome name for the elapsed-time array
pub const TIME: &str = "TIME";
/// Outcome name for the predator array
pub const PREDATORS: &str = "predators";
/// Outcome name for the prey array
pub const PREY: &str = "prey";

/// All outcome names, in export order
pub const OUTCOME_NAMES: [&str; 3] = [TIME, PREDATORS, PREY];

/// State of one replication at one step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationState {
    pub time: f64,
    pub prey: f64,
    pub predators: f64,
}

/// Discretized trajectories, shape `(replications, step_count)` for every array.
///
/// Row `r`, column `t` holds the state at time `t * dt` for replication `r`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesResult {
    pub elapsed_time: Array2<f64>,
    pub predator_population: Array2<f64>,
    pub prey_population: Array2<f64>,
}

impl TimeSeriesResult {
    /// Zero-filled result of the given shape
    pub(crate) fn zeros(replications: usize, step_count: usize) -> Self {
        let shape = (replications, step_count);
        Self {
            elapsed_time: Array2::zeros(shape),
            predator_population: Array2::zeros(shape),
            prey_population: Array2::zeros(shape),
        }
    }

    pub fn replications(&self) -> usize {
        self.elapsed_time.nrows()
    }

    pub fn step_count(&self) -> usize {
        self.elapsed_time.ncols()
    }

    /// `(replications, step_count)`
    pub fn shape(&self) -> (usize, usize) {
        self.elapsed_time.dim()
    }

    /// Look up an array by outcome name (`TIME`, `predators`, `prey`).
    pub fn outcome(&self, name: &str) -> Option<&Array2<f64>> {
        match name {
            TIME => Some(&self.elapsed_time),
            PREDATORS => Some(&self.predator_population),
            PREY => Some(&self.prey_population),
            _ => None,
        }
    }

    /// State of replication `replication` at step `step`
    pub fn state_at(&self, replication: usize, step: usize) -> Option<PopulationState> {
        let idx = [replication, step];
        Some(PopulationState {
            time: *self.elapsed_time.get(idx)?,
            prey: *self.prey_population.get(idx)?,
            predators: *self.predator_population.get(idx)?,
        })
    }

    /// Last stored state of a replication
    pub fn final_state(&self, replication: usize) -> Option<PopulationState> {
        let last = self.step_count().checked_sub(1)?;
        self.state_at(replication, last)
    }
}
