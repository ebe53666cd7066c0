//! Summary statistics over a simulated trajectory.

use crate::series::{PopulationState, TimeSeriesResult};
use serde::{Deserialize, Serialize};

/// Summary of one replication
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationSummary {
    /// Replication index this summary describes
    pub replication: usize,
    /// Highest prey count and when it first occurred
    pub peak_prey: f64,
    pub peak_prey_time: f64,
    /// Highest predator count and when it first occurred
    pub peak_predators: f64,
    pub peak_predators_time: f64,
    /// Lowest counts over the run
    pub min_prey: f64,
    pub min_predators: f64,
    /// Mean counts over all stored steps
    pub mean_prey: f64,
    pub mean_predators: f64,
    /// State at the final step
    pub final_state: PopulationState,
    /// Final prey count is exactly zero
    pub prey_extinct: bool,
    /// Final predator count is exactly zero
    pub predators_extinct: bool,
}

impl PopulationSummary {
    /// Summarize one replication; `None` if it is out of range.
    pub fn from_result(result: &TimeSeriesResult, replication: usize) -> Option<Self> {
        if replication >= result.replications() || result.step_count() == 0 {
            return None;
        }

        let time = result.elapsed_time.row(replication);
        let prey = result.prey_population.row(replication);
        let predators = result.predator_population.row(replication);

        let (peak_prey_step, peak_prey) = argmax(prey.iter().copied());
        let (peak_predators_step, peak_predators) = argmax(predators.iter().copied());
        let n = result.step_count() as f64;

        let final_state = result.final_state(replication)?;

        Some(Self {
            replication,
            peak_prey,
            peak_prey_time: time[peak_prey_step],
            peak_predators,
            peak_predators_time: time[peak_predators_step],
            min_prey: prey.iter().copied().fold(f64::INFINITY, f64::min),
            min_predators: predators.iter().copied().fold(f64::INFINITY, f64::min),
            mean_prey: prey.sum() / n,
            mean_predators: predators.sum() / n,
            final_state,
            prey_extinct: final_state.prey == 0.0,
            predators_extinct: final_state.predators == 0.0,
        })
    }

    /// Format as a one-line summary
    pub fn summary(&self) -> String {
        format!(
            "T:{:8.2} | Prey:{:9.3} (peak {:.3} @ {:.2}) | Pred:{:9.3} (peak {:.3} @ {:.2}){}",
            self.final_state.time,
            self.final_state.prey,
            self.peak_prey,
            self.peak_prey_time,
            self.final_state.predators,
            self.peak_predators,
            self.peak_predators_time,
            match (self.prey_extinct, self.predators_extinct) {
                (true, true) => " | both extinct",
                (true, false) => " | prey extinct",
                (false, true) => " | predators extinct",
                (false, false) => "",
            }
        )
    }
}

/// First index of the maximum value
fn argmax(values: impl Iterator<Item = f64>) -> (usize, f64) {
    values
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, v)| if v > best.1 { (i, v) } else { best })
}
