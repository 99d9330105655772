use crate::error::{CoverMapError, Result};
use nalgebra as na;
use rand::RngCore;
use rand_mt::Mt19937GenRand32;
use serde::{Deserialize, Serialize};

/// A stationary piece of user equipment on the ground plane (km).
#[derive(Debug, Clone, PartialEq)]
pub struct Ue {
    position: na::Vector2<f64>,
}

impl Ue {
    pub fn new(x: f64, y: f64) -> Self {
        Ue {
            position: na::Vector2::new(x, y),
        }
    }

    pub fn position(&self) -> na::Vector2<f64> {
        self.position
    }
}

/// Axis-aligned box a UE can be dropped into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl ZoneBounds {
    pub const fn new(x: (f64, f64), y: (f64, f64)) -> Self {
        ZoneBounds { x, y }
    }

    fn is_valid(&self) -> bool {
        let ok = |(lo, hi): (f64, f64)| lo.is_finite() && hi.is_finite() && lo <= hi;
        ok(self.x) && ok(self.y)
    }
}

/// Five clusters: one around the origin and one per quadrant.
pub const DEFAULT_ZONES: [ZoneBounds; 5] = [
    ZoneBounds::new((-5.0, 5.0), (-5.0, 5.0)),
    ZoneBounds::new((-35.0, -25.0), (25.0, 35.0)),
    ZoneBounds::new((-35.0, -25.0), (-35.0, -25.0)),
    ZoneBounds::new((25.0, 35.0), (25.0, 35.0)),
    ZoneBounds::new((25.0, 35.0), (-35.0, -25.0)),
];

/// Draws UEs into equally likely zones.
///
/// Each UE consumes exactly three uniform draws from the source: the zone
/// selector, then x, then y. Keeping that order is what makes a seeded run
/// reproducible.
pub struct UePlacement {
    zones: Vec<ZoneBounds>,
}

impl UePlacement {
    pub fn new(zones: Vec<ZoneBounds>) -> Result<Self> {
        if zones.is_empty() {
            return Err(CoverMapError::InvalidZones("no zones given".to_string()));
        }
        if let Some(i) = zones.iter().position(|z| !z.is_valid()) {
            return Err(CoverMapError::InvalidZones(format!(
                "zone {} has non-finite or inverted bounds",
                i
            )));
        }
        Ok(Self { zones })
    }

    pub fn zones(&self) -> &[ZoneBounds] {
        &self.zones
    }

    /// Index of the zone whose probability band contains `selector` in [0, 1).
    fn zone_index(&self, selector: f64) -> usize {
        let n = self.zones.len();
        (0..n - 1)
            .find(|&i| selector < (i + 1) as f64 / n as f64)
            .unwrap_or(n - 1)
    }

    pub fn generate<R: RngCore + ?Sized>(&self, rng: &mut R) -> Ue {
        let selector = canonical(rng);
        let zone = &self.zones[self.zone_index(selector)];
        let x = uniform(rng, zone.x);
        let y = uniform(rng, zone.y);
        Ue::new(x, y)
    }

    pub fn generate_many<R: RngCore + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Ue> {
        (0..count).map(|_| self.generate(rng)).collect()
    }
}

impl Default for UePlacement {
    fn default() -> Self {
        Self {
            zones: DEFAULT_ZONES.to_vec(),
        }
    }
}

/// Placement generator for a seed: 32-bit Mersenne Twister (mt19937), whose
/// output sequence is fixed by its definition.
pub fn placement_rng(seed: u32) -> Mt19937GenRand32 {
    Mt19937GenRand32::new(seed)
}

const TWO_POW_32: f64 = 4294967296.0;
const TWO_POW_64: f64 = 18446744073709551616.0;

/// Uniform double in [0, 1) from two 32-bit words, low word first, summed in
/// double precision and scaled by 2^-64. Same bits as libstdc++'s
/// `generate_canonical<double, 53>` over mt19937.
pub fn canonical<R: RngCore + ?Sized>(rng: &mut R) -> f64 {
    let low = rng.next_u32() as f64;
    let high = rng.next_u32() as f64;
    let u = (low + high * TWO_POW_32) / TWO_POW_64;
    if u >= 1.0 {
        1.0 - f64::EPSILON / 2.0
    } else {
        u
    }
}

/// Uniform draw in [lo, hi); a degenerate range still consumes one draw.
fn uniform<R: RngCore + ?Sized>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    canonical(rng) * (hi - lo) + lo
}
