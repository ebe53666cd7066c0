//! Data export for analysis and plotting in external tools.

use crate::model::ExperimentOutcome;
use crate::params::SimulationParameters;
use crate::series::TimeSeriesResult;
use crate::stats::PopulationSummary;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Error, ErrorKind, Result, Write};
use std::path::{Path, PathBuf};

/// Export system for saving simulation data
pub struct ExportSystem;

impl ExportSystem {
    /// Export a time series to CSV, one row per (replication, step)
    pub fn export_csv<P: AsRef<Path>>(result: &TimeSeriesResult, path: P) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);

        writeln!(file, "replication,step,time,prey,predators")?;

        for r in 0..result.replications() {
            for t in 0..result.step_count() {
                writeln!(
                    file,
                    "{},{},{},{},{}",
                    r,
                    t,
                    result.elapsed_time[[r, t]],
                    result.prey_population[[r, t]],
                    result.predator_population[[r, t]],
                )?;
            }
        }

        file.flush()
    }

    /// Export per-scenario summaries to JSON
    pub fn export_summary_json<P: AsRef<Path>>(outcomes: &[ExperimentOutcome], path: P) -> Result<()> {
        let records: Vec<ScenarioRecord> = outcomes.iter().map(ScenarioRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)?;
        std::fs::write(path, json)
    }

    /// Export every outcome plus a summary into `base_path`
    pub fn export_all<P: AsRef<Path>>(
        outcomes: &[ExperimentOutcome],
        base_path: P,
        write_csv: bool,
        write_summary: bool,
    ) -> Result<ExportManifest> {
        let base = base_path.as_ref();

        // Resolve every file name before touching the disk
        let mut csv_files = Vec::new();
        if write_csv {
            let mut stems = HashSet::new();
            for outcome in outcomes {
                let name = &outcome.scenario.name;
                let stem = sanitize(name);
                if name.trim().is_empty() {
                    return Err(Error::new(ErrorKind::InvalidInput, "scenario name must not be empty"));
                }
                if !stems.insert(stem.clone()) {
                    return Err(Error::new(
                        ErrorKind::AlreadyExists,
                        format!("scenario `{name}` maps to {stem}.csv, already used by another scenario"),
                    ));
                }
                csv_files.push(base.join(format!("{stem}.csv")));
            }
        }

        std::fs::create_dir_all(base)?;
        for (outcome, path) in outcomes.iter().zip(&csv_files) {
            Self::export_csv(&outcome.result, path)?;
        }

        let summary_file = if write_summary {
            let path = base.join("summary.json");
            Self::export_summary_json(outcomes, &path)?;
            Some(path)
        } else {
            None
        };

        log::info!(
            "Exported {} CSV file(s) to {}",
            csv_files.len(),
            base.display()
        );

        Ok(ExportManifest {
            csv_files,
            summary_file,
        })
    }
}

/// Manifest of exported files
#[derive(Debug)]
pub struct ExportManifest {
    pub csv_files: Vec<PathBuf>,
    pub summary_file: Option<PathBuf>,
}

/// Scenario names end up in file names
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

#[derive(Serialize)]
struct ScenarioRecord<'a> {
    scenario: &'a str,
    params: &'a SimulationParameters,
    replications: usize,
    step_count: usize,
    summary: &'a PopulationSummary,
}

impl<'a> From<&'a ExperimentOutcome> for ScenarioRecord<'a> {
    fn from(outcome: &'a ExperimentOutcome) -> Self {
        Self {
            scenario: &outcome.scenario.name,
            params: &outcome.scenario.params,
            replications: outcome.result.replications(),
            step_count: outcome.result.step_count(),
            summary: &outcome.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::Evaluator;
    use crate::model::{ExperimentRunner, PredatorPreyModel, Scenario};
    use std::fs;
    use tempfile::tempdir;

    fn outcomes() -> Vec<ExperimentOutcome> {
        let params = SimulationParameters {
            final_time: 1.0,
            replications: 2,
            ..Default::default()
        };
        let scenarios = vec![
            Scenario::new("base", params),
            Scenario::new("more prey/v2", SimulationParameters { initial_prey: 90.0, ..params }),
        ];
        ExperimentRunner::new(Evaluator::Sequential)
            .run(&PredatorPreyModel::default(), &scenarios)
            .unwrap()
    }

    #[test]
    fn test_export_csv() {
        let outcomes = outcomes();
        let dir = tempdir().unwrap();
        let path = dir.path().join("base.csv");

        ExportSystem::export_csv(&outcomes[0].result, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "replication,step,time,prey,predators");
        // 2 replications x 5 steps
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "0,0,0,50,20");
        assert!(lines[2].starts_with("0,1,0.25,49.9375,"));
        assert!(lines[6].starts_with("1,0,"));
    }

    #[test]
    fn test_export_summary_json() {
        let outcomes = outcomes();
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.json");

        ExportSystem::export_summary_json(&outcomes, &path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let records = value.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["scenario"], "base");
        assert_eq!(records[0]["step_count"], 5);
        assert_eq!(records[1]["params"]["initial_prey"], 90.0);
    }

    #[test]
    fn test_export_all() {
        let outcomes = outcomes();
        let dir = tempdir().unwrap();
        let base_path = dir.path().join("export");

        let manifest = ExportSystem::export_all(&outcomes, &base_path, true, true).unwrap();

        assert_eq!(manifest.csv_files.len(), 2);
        assert!(manifest.csv_files.iter().all(|p| p.exists()));
        assert!(base_path.join("more_prey_v2.csv").exists());
        assert!(manifest.summary_file.unwrap().exists());
    }

    #[test]
    fn test_export_all_summary_only() {
        let outcomes = outcomes();
        let dir = tempdir().unwrap();

        let manifest = ExportSystem::export_all(&outcomes, dir.path(), false, true).unwrap();

        assert!(manifest.csv_files.is_empty());
        assert!(manifest.summary_file.is_some());
    }

    #[test]
    fn test_export_all_rejects_colliding_file_names() {
        let params = SimulationParameters {
            final_time: 1.0,
            ..Default::default()
        };
        let scenarios = vec![
            Scenario::new("a/b", params),
            Scenario::new("a_b", SimulationParameters { initial_prey: 90.0, ..params }),
        ];
        let outcomes = ExperimentRunner::default()
            .run(&PredatorPreyModel::default(), &scenarios)
            .unwrap();

        let dir = tempdir().unwrap();
        let base_path = dir.path().join("export");
        let err = ExportSystem::export_all(&outcomes, &base_path, true, true).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert!(!base_path.exists(), "nothing should be written on collision");
    }

    #[test]
    fn test_export_all_rejects_blank_name() {
        let mut outcomes = outcomes();
        outcomes[0].scenario.name = "  ".to_string();

        let dir = tempdir().unwrap();
        let err = ExportSystem::export_all(&outcomes, dir.path(), true, false).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
