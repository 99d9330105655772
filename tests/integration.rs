use covermap::config::ScenarioConfig;
use covermap::coverage::{build_coverage, build_coverage_parallel};
use covermap::export::binary::read_tensor;
use covermap::export::records::{read_duration, read_json, SatelliteRecord, UeRecord};
use covermap::export::{self, MetadataFormat};
use covermap::models::{Trajectory, Ue};
use covermap::Scenario;
use nalgebra as na;
use std::fs::{self, File};
use std::io::BufReader;
use tempfile::TempDir;

// Reference constellation on a coarser grid so the test stays quick
fn small_config() -> ScenarioConfig {
    ScenarioConfig {
        time_unit: 0.5,
        total_duration: 200.0,
        ..ScenarioConfig::default()
    }
}

#[test]
fn reference_scenario_shape() -> Result<(), Box<dyn std::error::Error>> {
    let scenario = Scenario::assemble(small_config())?;
    let tensor = scenario.coverage()?;
    assert_eq!(tensor.shape(), (20, 49, 400));

    for ue in 0..20 {
        assert!(tensor.row(ue, 48).iter().all(|&b| b == 1));
    }

    let stripped = tensor.without_feasibility_channel();
    assert_eq!(stripped.shape(), (20, 48, 400));
    // UEs sit within 50 km of the origin, right under the lead satellites
    assert!(stripped.count_covered() > 0);
    Ok(())
}

#[test]
fn reference_grid_slot_count() -> Result<(), Box<dyn std::error::Error>> {
    let config = ScenarioConfig {
        ue_count: 1,
        satellites_per_trajectory: 1,
        ..ScenarioConfig::default()
    };
    let scenario = Scenario::assemble(config)?;
    let tensor = scenario.coverage()?;
    assert_eq!(tensor.shape(), (1, 7, 20_000));
    Ok(())
}

#[test]
fn coverage_is_deterministic_and_order_independent() -> Result<(), Box<dyn std::error::Error>> {
    let sequential = Scenario::assemble(small_config())?.coverage()?;
    let again = Scenario::assemble(small_config())?.coverage()?;
    let parallel = Scenario::assemble(ScenarioConfig {
        parallel: true,
        ..small_config()
    })?
    .coverage()?;
    assert_eq!(sequential, again);
    assert_eq!(sequential, parallel);

    // evaluate cells in reverse order one by one
    let scenario = Scenario::assemble(small_config())?;
    let (ues, channels, slots) = sequential.shape();
    for u in (0..ues).rev() {
        for s in (0..channels - 1).rev() {
            for t in (0..slots).rev().step_by(7) {
                let covered = scenario.satellites[s].covers(
                    &scenario.ues[u].position(),
                    t as f64,
                    scenario.config.time_unit,
                );
                assert_eq!(sequential.get(u, s, t), covered);
            }
        }
    }
    Ok(())
}

#[test]
fn lead_satellite_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let trajectory = Trajectory::new(0.0, 300.0, 250.0, (0.0, 100.0), 200.0, 1);
    let satellite = trajectory.generate_satellite(0)?;
    assert_eq!(satellite.position(), na::Vector2::new(0.0, 100.0));
    assert_eq!(satellite.heading(), 0.0);

    let ues = vec![Ue::new(0.0, 100.0), Ue::new(0.0, 500.0)];
    let tensor = build_coverage(false, 0.01, 1.0, &ues, &[satellite])?;
    assert_eq!(tensor.shape(), (2, 1, 100));
    assert!(tensor.get(0, 0, 0));
    assert!(!tensor.get(1, 0, 0));
    Ok(())
}

#[test]
fn wider_footprint_only_adds_coverage() -> Result<(), Box<dyn std::error::Error>> {
    let scenario = Scenario::assemble(small_config())?;
    let narrow: Vec<Trajectory> = scenario
        .config
        .trajectories
        .iter()
        .map(|t| Trajectory {
            coverage_radius: 60.0,
            ..t.clone()
        })
        .collect();
    let narrow_sats: Vec<_> = narrow
        .iter()
        .map(|t| t.satellites(2))
        .collect::<Result<Vec<_>, _>>()?
        .concat();
    let wide_sats: Vec<_> = scenario
        .config
        .trajectories
        .iter()
        .map(|t| t.satellites(2))
        .collect::<Result<Vec<_>, _>>()?
        .concat();

    let narrow = build_coverage_parallel(false, 1.0, 200.0, &scenario.ues, &narrow_sats)?;
    let wide = build_coverage_parallel(false, 1.0, 200.0, &scenario.ues, &wide_sats)?;
    for (n, w) in narrow.as_slice().iter().zip(wide.as_slice()) {
        assert!(*n <= *w);
    }
    assert!(wide.count_covered() >= narrow.count_covered());
    Ok(())
}

#[test]
fn export_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let scenario = Scenario::assemble(small_config())?;
    let tensor = scenario.coverage()?;

    let written = export::export_run(
        dir.path(),
        &scenario.ues,
        &scenario.satellites,
        &tensor,
        scenario.config.total_duration,
        MetadataFormat::Json,
    )?;
    assert_eq!(written.len(), 5);
    for path in &written {
        assert!(path.exists(), "{:?} missing", path);
    }

    let mut reader = BufReader::new(File::open(dir.path().join(export::TENSOR_FILE))?);
    assert_eq!(read_tensor(&mut reader)?, tensor);

    let satellites: Vec<SatelliteRecord> =
        read_json(File::open(dir.path().join("satellites.json"))?)?;
    assert_eq!(satellites.len(), 48);
    assert_eq!(satellites[5].index, 5);
    assert_eq!(satellites[5].tid, 3);

    let ues: Vec<UeRecord> = read_json(File::open(dir.path().join("UEs.json"))?)?;
    assert_eq!(ues.len(), 20);
    assert_eq!(ues[3].x, scenario.ues[3].position().x);

    let duration = read_duration(File::open(dir.path().join(export::DURATION_FILE))?)?;
    assert_eq!(duration, 200.0);

    let footprints = fs::read_to_string(dir.path().join(export::FOOTPRINT_FILE))?;
    assert!(footprints.starts_with("index,tid,r,start_x,start_y,end_x,end_y\n"));
    assert_eq!(footprints.lines().count(), 49);
    Ok(())
}

#[test]
fn export_csv_metadata() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let scenario = Scenario::assemble(ScenarioConfig {
        ue_count: 4,
        satellites_per_trajectory: 1,
        total_duration: 10.0,
        time_unit: 1.0,
        ..ScenarioConfig::default()
    })?;
    let tensor = scenario.coverage()?;
    export::export_run(
        dir.path(),
        &scenario.ues,
        &scenario.satellites,
        &tensor,
        10.0,
        MetadataFormat::Csv,
    )?;

    let satellites = fs::read_to_string(dir.path().join("satellites.csv"))?;
    assert!(satellites.starts_with("index,x,y,h,v,r,sind,cosd,tid\n"));
    assert_eq!(satellites.lines().count(), 7);
    let ues = fs::read_to_string(dir.path().join("UEs.csv"))?;
    assert_eq!(ues.lines().count(), 5);
    assert!(!dir.path().join("satellites.json").exists());
    Ok(())
}
