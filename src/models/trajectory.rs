use super::satellite::Satellite;
use crate::constants::PI;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A straight ground track that lays out equally spaced satellites.
///
/// Satellites are anchored behind the lead point (along `heading + 180°`) and
/// each one then moves forward along `heading`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub heading: f64,         // degrees
    pub altitude: f64,        // km
    pub spacing: f64,         // km between neighbouring satellites
    pub lead: (f64, f64),     // km
    pub coverage_radius: f64, // km
    pub id: u32,
}

impl Trajectory {
    pub fn new(
        heading: f64,
        altitude: f64,
        spacing: f64,
        lead: (f64, f64),
        coverage_radius: f64,
        id: u32,
    ) -> Self {
        Trajectory {
            heading,
            altitude,
            spacing,
            lead,
            coverage_radius,
            id,
        }
    }

    /// The `n`-th satellite behind the lead point.
    pub fn generate_satellite(&self, n: usize) -> Result<Satellite> {
        let dis = self.spacing * n as f64;
        let back = PI * (self.heading + 180.0) / 180.0;
        let y = self.lead.1 + dis * back.sin();
        let x = self.lead.0 + dis * back.cos();
        Satellite::new(
            self.altitude,
            self.heading,
            x,
            y,
            self.coverage_radius,
            self.id,
        )
    }

    /// The first `count` satellites of this trajectory, lead satellite first.
    pub fn satellites(&self, count: usize) -> Result<Vec<Satellite>> {
        debug!(
            "Trajectory {}: generating {} satellites at heading {}°, altitude {} km",
            self.id, count, self.heading, self.altitude
        );
        (0..count).map(|n| self.generate_satellite(n)).collect()
    }
}
