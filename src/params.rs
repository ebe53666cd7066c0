//! Model parameters for the predator-prey integrator.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Largest step index whose `t as f64` is still exact (2^53).
const MAX_STEP_INDEX: f64 = (1u64 << 53) as f64;

/// Parameter set for one simulation call.
///
/// Missing fields in a YAML/JSON record fall back to [`Default`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Per-capita prey growth rate
    pub prey_birth_rate: f64,
    /// Prey lost per prey-predator encounter
    pub predation_rate: f64,
    /// Predators gained per prey-predator encounter
    pub predator_efficiency: f64,
    /// Per-capita predator death rate
    pub predator_loss_rate: f64,
    /// Prey population at t = 0
    pub initial_prey: f64,
    /// Predator population at t = 0
    pub initial_predators: f64,
    /// Integration step size
    pub dt: f64,
    /// Simulated time horizon
    pub final_time: f64,
    /// Number of (identical) replications
    pub replications: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            prey_birth_rate: 0.025,
            predation_rate: 0.0015,
            predator_efficiency: 0.002,
            predator_loss_rate: 0.06,
            initial_prey: 50.0,
            initial_predators: 20.0,
            dt: 0.25,
            final_time: 365.0,
            replications: 1,
        }
    }
}

impl SimulationParameters {
    /// Number of stored time points: `floor(final_time / dt) + 1`.
    ///
    /// Only meaningful on validated parameters.
    pub fn step_count(&self) -> usize {
        (self.final_time / self.dt).floor() as usize + 1
    }

    /// Validate every field before integration.
    ///
    /// Rates and initial values must be finite and non-negative; `dt` and
    /// `final_time` must be finite and strictly positive.
    pub fn validate(&self) -> SimResult<()> {
        let non_negative = [
            ("prey_birth_rate", self.prey_birth_rate),
            ("predation_rate", self.predation_rate),
            ("predator_efficiency", self.predator_efficiency),
            ("predator_loss_rate", self.predator_loss_rate),
            ("initial_prey", self.initial_prey),
            ("initial_predators", self.initial_predators),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() {
                return Err(SimError::invalid(name, format!("must be finite, got {value}")));
            }
            if value < 0.0 {
                return Err(SimError::invalid(name, format!("must be >= 0, got {value}")));
            }
        }

        for (name, value) in [("dt", self.dt), ("final_time", self.final_time)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::invalid(
                    name,
                    format!("must be finite and > 0, got {value}"),
                ));
            }
        }

        if self.replications == 0 {
            return Err(SimError::invalid("replications", "must be >= 1"));
        }

        // Beyond 2^53 consecutive step indices are no longer distinct f64 values
        let ratio = (self.final_time / self.dt).floor();
        if !ratio.is_finite() || ratio >= MAX_STEP_INDEX {
            return Err(SimError::invalid(
                "final_time",
                format!("final_time / dt = {ratio} is not a representable step count"),
            ));
        }

        let cells = self
            .replications
            .checked_mul(self.step_count())
            .filter(|&n| n <= isize::MAX as usize / std::mem::size_of::<f64>());
        if cells.is_none() {
            return Err(SimError::invalid(
                "replications",
                format!(
                    "{} replications x {} steps exceeds addressable memory",
                    self.replications,
                    self.step_count()
                ),
            ));
        }

        Ok(())
    }
}
