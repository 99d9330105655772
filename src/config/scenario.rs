use crate::constants::*;
use crate::error::Result;
use crate::models::ue::DEFAULT_ZONES;
use crate::models::{Trajectory, ZoneBounds};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Everything that determines a run. Missing fields in a JSON file fall back
/// to the reference scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub seed: u32,
    pub ue_count: usize,
    pub satellites_per_trajectory: usize,
    pub time_unit: f64,      // seconds per slot
    pub total_duration: f64, // seconds
    pub feasible: bool,
    pub parallel: bool,
    pub zones: Vec<ZoneBounds>,
    pub trajectories: Vec<Trajectory>,
}

impl ScenarioConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading scenario config from {:?}", path);
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Three pairs of parallel tracks at 300, 700 and 1100 km.
    pub fn reference_trajectories() -> Vec<Trajectory> {
        vec![
            Trajectory::new(0.0, 300.0, 250.0, (0.0, 100.0), 200.0, 1),
            Trajectory::new(0.0, 300.0, 250.0, (100.0, -100.0), 200.0, 1),
            Trajectory::new(-45.0, 700.0, 250.0, (-50.0, 191.4), 200.0, 2),
            Trajectory::new(-45.0, 700.0, 250.0, (-50.0 - 50.0 * 1.414, -20.7), 200.0, 2),
            Trajectory::new(45.0, 1100.0, 250.0, (-150.0, -8.6), 200.0, 3),
            Trajectory::new(45.0, 1100.0, 250.0, (-150.0 + 50.0 * 1.414, -220.7), 200.0, 3),
        ]
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            seed: DEFAULT_SEED,
            ue_count: DEFAULT_UE_COUNT,
            satellites_per_trajectory: DEFAULT_SATELLITES_PER_TRAJECTORY,
            time_unit: DEFAULT_TIME_UNIT,
            total_duration: DEFAULT_TOTAL_DURATION,
            feasible: true,
            parallel: false,
            zones: DEFAULT_ZONES.to_vec(),
            trajectories: Self::reference_trajectories(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_is_reference_scenario() {
        let config = ScenarioConfig::default();
        assert_eq!(config.seed, 20702017);
        assert_eq!(config.ue_count, 20);
        assert_eq!(config.trajectories.len(), 6);
        assert_eq!(config.zones.len(), 5);
        assert!(config.feasible);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let json = r#"{"seed": 42, "ue_count": 3, "feasible": false}"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = ScenarioConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.ue_count, 3);
        assert!(!config.feasible);
        assert_eq!(config.time_unit, DEFAULT_TIME_UNIT);
        assert_eq!(config.trajectories, ScenarioConfig::reference_trajectories());
    }

    #[test]
    fn test_trajectories_from_file() {
        let json = r#"{
            "trajectories": [
                {"heading": 90.0, "altitude": 550.0, "spacing": 100.0,
                 "lead": [10.0, -20.0], "coverage_radius": 150.0, "id": 7}
            ],
            "zones": [{"x": [0.0, 1.0], "y": [2.0, 3.0]}]
        }"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let config = ScenarioConfig::from_json_file(file.path()).unwrap();
        assert_eq!(
            config.trajectories,
            vec![Trajectory::new(90.0, 550.0, 100.0, (10.0, -20.0), 150.0, 7)]
        );
        assert_eq!(config.zones, vec![ZoneBounds::new((0.0, 1.0), (2.0, 3.0))]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ScenarioConfig::from_json_file("/nonexistent/scenario.json");
        assert!(matches!(result, Err(crate::error::CoverMapError::IoError(_))));
    }
}
