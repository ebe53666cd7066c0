//! Configuration system for the predator-prey runner.
//!
//! Supports YAML configuration files with sensible defaults.

use crate::error::{SimError, SimResult};
use crate::integrator::Evaluator;
use crate::model::Scenario;
use crate::params::SimulationParameters;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Model defaults; used as the `base` scenario when none are listed
    #[serde(default)]
    pub model: SimulationParameters,
    #[serde(default)]
    pub run: RunConfig,
    /// Scenarios supplied by the experiment design
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Execution configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Sequential or parallel scenario execution
    pub evaluator: Evaluator,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory for exported files
    pub directory: PathBuf,
    /// Write one CSV per scenario
    pub write_csv: bool,
    /// Write summary.json
    pub write_summary: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (off, error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("output"),
            write_csv: true,
            write_summary: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> SimResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SimResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        std::fs::write(path, yaml)?;
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> SimResult<()> {
        self.model.validate()?;

        let mut names = HashSet::new();
        for scenario in &self.scenarios {
            if scenario.name.trim().is_empty() {
                return Err(SimError::Config("scenario name must not be empty".to_string()));
            }
            if !names.insert(scenario.name.as_str()) {
                return Err(SimError::DuplicateScenario(scenario.name.clone()));
            }
            scenario.params.validate()?;
        }

        if !matches!(
            self.logging.log_level.as_str(),
            "error" | "warn" | "info" | "debug" | "trace" | "off"
        ) {
            return Err(SimError::Config(format!(
                "unknown log_level `{}`",
                self.logging.log_level
            )));
        }
        Ok(())
    }

    /// Scenarios to run: the configured list, or the model defaults as `base`.
    pub fn effective_scenarios(&self) -> Vec<Scenario> {
        if self.scenarios.is_empty() {
            vec![Scenario::new("base", self.model)]
        } else {
            self.scenarios.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let loaded: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(config.model, loaded.model);
        assert_eq!(loaded.run.evaluator, Evaluator::Sequential);
    }

    #[test]
    fn test_scenarios_from_yaml() {
        let yaml = r#"
run:
  evaluator: parallel
scenarios:
  - name: low_prey
    params:
      initial_prey: 10.0
  - name: long_run
    params:
      final_time: 730.0
      replications: 2
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.run.evaluator, Evaluator::Parallel);
        assert_eq!(config.scenarios.len(), 2);
        assert_eq!(config.scenarios[0].params.initial_prey, 10.0);
        assert_eq!(config.scenarios[0].params.dt, 0.25);
        assert_eq!(config.scenarios[1].params.replications, 2);
    }

    #[test]
    fn test_effective_scenarios_fallback() {
        let config = Config::default();
        let scenarios = config.effective_scenarios();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].name, "base");
        assert_eq!(scenarios[0].params, config.model);
    }

    #[test]
    fn test_invalid_scenario_rejected() {
        let mut config = Config::default();
        config.scenarios.push(Scenario::new(
            "broken",
            SimulationParameters {
                final_time: -1.0,
                ..Default::default()
            },
        ));
        assert!(config.validate().unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn test_duplicate_scenario_rejected() {
        let mut config = Config::default();
        config.scenarios.push(Scenario::new("a", SimulationParameters::default()));
        config.scenarios.push(Scenario::new("a", SimulationParameters::default()));
        assert!(matches!(config.validate(), Err(SimError::DuplicateScenario(_))));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut config = Config::default();
        config.logging.log_level = "loud".to_string();
        assert!(matches!(config.validate(), Err(SimError::Config(_))));
    }

    #[test]
    fn test_every_documented_log_level_accepted() {
        for level in ["off", "error", "warn", "info", "debug", "trace"] {
            let mut config = Config::default();
            config.logging.log_level = level.to_string();
            assert!(config.validate().is_ok(), "level {level}");
        }
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut config = Config::default();
        config.model.initial_predators = 7.0;
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.model.initial_predators, 7.0);
    }
}
