use crate::config::ScenarioConfig;
use crate::coverage::{build_coverage, build_coverage_parallel, slot_count, CoverageTensor};
use crate::error::Result;
use crate::models::ue::placement_rng;
use crate::models::{Satellite, Ue, UePlacement};
use tracing::info;

/// The wired-up entities of one run.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub config: ScenarioConfig,
    pub ues: Vec<Ue>,
    pub satellites: Vec<Satellite>,
}

impl Scenario {
    /// Places the UEs from a fresh seeded generator and lays out the
    /// satellites slot-major: the n-th satellite of every trajectory, in
    /// trajectory order, before any (n+1)-th.
    pub fn assemble(config: ScenarioConfig) -> Result<Self> {
        let placement = UePlacement::new(config.zones.clone())?;
        let mut rng = placement_rng(config.seed);
        let ues = placement.generate_many(&mut rng, config.ue_count);

        let mut satellites =
            Vec::with_capacity(config.satellites_per_trajectory * config.trajectories.len());
        for n in 0..config.satellites_per_trajectory {
            for trajectory in &config.trajectories {
                satellites.push(trajectory.generate_satellite(n)?);
            }
        }

        info!(
            "Assembled scenario: {} UEs, {} satellites on {} trajectories (seed {})",
            ues.len(),
            satellites.len(),
            config.trajectories.len(),
            config.seed
        );

        Ok(Scenario {
            config,
            ues,
            satellites,
        })
    }

    /// One channel per satellite, plus the always-covered one when feasible.
    pub fn channel_count(&self) -> usize {
        self.satellites.len() + self.config.feasible as usize
    }

    /// Builds the coverage tensor with the configured grid and flags.
    pub fn coverage(&self) -> Result<CoverageTensor> {
        let c = &self.config;
        info!(
            "Building coverage: {} UEs × {} channels × {} slots of {} s, feasible = {}, parallel = {}",
            self.ues.len(),
            self.channel_count(),
            slot_count(c.time_unit, c.total_duration)?,
            c.time_unit,
            c.feasible,
            c.parallel
        );

        let build = if c.parallel {
            build_coverage_parallel
        } else {
            build_coverage
        };
        build(
            c.feasible,
            c.time_unit,
            c.total_duration,
            &self.ues,
            &self.satellites,
        )
    }
}
