//! Model backend interface and scenario execution.
//!
//! Orchestration tooling supplies fully formed scenarios and consumes
//! [`TimeSeriesResult`]s; every backend produces the same outcome shape.

use crate::error::{SimError, SimResult};
use crate::integrator::{simulate_with, Evaluator};
use crate::params::SimulationParameters;
use crate::series::TimeSeriesResult;
use crate::stats::PopulationSummary;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;

/// A named parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub params: SimulationParameters,
}

impl Scenario {
    pub fn new(name: impl Into<String>, params: SimulationParameters) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Anything that turns a scenario into predator/prey/time outcomes.
pub trait ModelBackend: Send + Sync {
    fn name(&self) -> &str;

    fn run_experiment(&self, scenario: &Scenario) -> SimResult<TimeSeriesResult>;

    /// Check a scenario without running it
    fn validate(&self, scenario: &Scenario) -> SimResult<()> {
        scenario.params.validate()
    }
}

/// Native Euler-integrated Lotka-Volterra model
#[derive(Debug, Clone, Default)]
pub struct PredatorPreyModel {
    /// How replications inside one experiment are executed
    pub evaluator: Evaluator,
}

impl PredatorPreyModel {
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }
}

impl ModelBackend for PredatorPreyModel {
    fn name(&self) -> &str {
        "lotka-volterra"
    }

    fn run_experiment(&self, scenario: &Scenario) -> SimResult<TimeSeriesResult> {
        simulate_with(&scenario.params, self.evaluator)
    }
}

/// Result of one scenario
#[derive(Debug, Clone)]
pub struct ExperimentOutcome {
    pub scenario: Scenario,
    pub result: TimeSeriesResult,
    /// Summary of replication 0
    pub summary: PopulationSummary,
}

/// Runs a batch of scenarios against a backend
#[derive(Debug, Clone, Default)]
pub struct ExperimentRunner {
    /// How scenarios are distributed
    pub evaluator: Evaluator,
}

impl ExperimentRunner {
    pub fn new(evaluator: Evaluator) -> Self {
        Self { evaluator }
    }

    /// Validate every scenario, then run them all.
    ///
    /// Any invalid scenario, blank or duplicate name fails the whole batch before
    /// anything runs. Output order matches input order.
    pub fn run<M: ModelBackend + ?Sized>(
        &self,
        model: &M,
        scenarios: &[Scenario],
    ) -> SimResult<Vec<ExperimentOutcome>> {
        let mut seen = HashSet::new();
        for scenario in scenarios {
            if scenario.name.trim().is_empty() {
                return Err(SimError::Config("scenario name must not be empty".to_string()));
            }
            if !seen.insert(scenario.name.as_str()) {
                return Err(SimError::DuplicateScenario(scenario.name.clone()));
            }
            model.validate(scenario)?;
        }

        log::info!(
            "Running {} scenario(s) on {} ({})",
            scenarios.len(),
            model.name(),
            self.evaluator.name()
        );
        let start = Instant::now();

        let outcomes = match self.evaluator {
            Evaluator::Sequential => scenarios
                .iter()
                .map(|s| run_one(model, s))
                .collect::<SimResult<Vec<_>>>()?,
            Evaluator::Parallel => scenarios
                .par_iter()
                .map(|s| run_one(model, s))
                .collect::<SimResult<Vec<_>>>()?,
        };

        log::info!(
            "Completed {} scenario(s) in {:.3}s",
            outcomes.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(outcomes)
    }
}

fn run_one<M: ModelBackend + ?Sized>(model: &M, scenario: &Scenario) -> SimResult<ExperimentOutcome> {
    let result = model.run_experiment(scenario)?;
    let summary = PopulationSummary::from_result(&result, 0).ok_or_else(|| {
        SimError::invalid(
            "replications",
            format!("scenario `{}` produced no replications", scenario.name),
        )
    })?;
    log::debug!("[{}] {}", scenario.name, summary.summary());

    Ok(ExperimentOutcome {
        scenario: scenario.clone(),
        result,
        summary,
    })
}
