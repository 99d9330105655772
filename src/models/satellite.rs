use crate::constants::PI;
use crate::error::Result;
use crate::physics::orbital::OrbitalMechanics;
use nalgebra as na;

/// A satellite moving over a flat ground plane along a straight line.
///
/// All lengths are in km and speeds in km/s. The heading is measured in
/// degrees from the +x axis towards +y. Nothing is mutated after construction;
/// positions are computed on demand from the epoch position.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    position: na::Vector2<f64>,
    altitude: f64,
    heading: f64,
    sin_d: f64,
    cos_d: f64,
    speed: f64,
    coverage_radius: f64,
    trajectory_id: u32,
}

impl Satellite {
    pub fn new(
        altitude: f64,
        heading: f64,
        x: f64,
        y: f64,
        coverage_radius: f64,
        trajectory_id: u32,
    ) -> Result<Self> {
        let speed = OrbitalMechanics::checked_speed_km_s(altitude)?;
        let heading_rad = PI * heading / 180.0;

        Ok(Satellite {
            position: na::Vector2::new(x, y),
            altitude,
            heading,
            sin_d: heading_rad.sin(),
            cos_d: heading_rad.cos(),
            speed,
            coverage_radius,
            trajectory_id,
        })
    }

    /// Ground position after `t` slots of `time_unit` seconds each.
    pub fn position_at(&self, t: f64, time_unit: f64) -> na::Vector2<f64> {
        let dis = self.speed * t * time_unit; // km/s * s
        self.position + na::Vector2::new(dis * self.cos_d, dis * self.sin_d)
    }

    /// True when `point` lies strictly inside the footprint at slot `t`.
    /// A point exactly on the footprint edge is not covered.
    pub fn covers(&self, point: &na::Vector2<f64>, t: f64, time_unit: f64) -> bool {
        let s_pos = self.position_at(t, time_unit);
        (point - s_pos).norm() < self.coverage_radius
    }

    pub fn position(&self) -> na::Vector2<f64> {
        self.position
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn sin_d(&self) -> f64 {
        self.sin_d
    }

    pub fn cos_d(&self) -> f64 {
        self.cos_d
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn coverage_radius(&self) -> f64 {
        self.coverage_radius
    }

    pub fn trajectory_id(&self) -> u32 {
        self.trajectory_id
    }
}
