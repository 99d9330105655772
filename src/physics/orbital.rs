use crate::constants::{G, M_EARTH, R_EARTH};
use crate::error::{CoverMapError, Result};

pub struct OrbitalMechanics;

impl OrbitalMechanics {
    /// Circular orbit speed [m/s] at orbital radius `r` [m], v = sqrt(GM / r).
    pub fn compute_circular_velocity(r: f64) -> f64 {
        ((G * M_EARTH) / r).sqrt()
    }

    /// Circular orbit speed [m/s] at altitude `h` [m] above the mean Earth radius.
    ///
    /// No domain checks: an altitude at or below `-R_EARTH` yields inf or NaN.
    pub fn speed_from_altitude(h: f64) -> f64 {
        Self::compute_circular_velocity(h + R_EARTH)
    }

    /// Ground-track speed [km/s] for an altitude given in km.
    ///
    /// Fails with `InvalidAltitude` rather than returning a non-finite or
    /// non-positive speed.
    pub fn checked_speed_km_s(altitude_km: f64) -> Result<f64> {
        let r = altitude_km * 1000.0 + R_EARTH;
        if !r.is_finite() || r <= 0.0 {
            return Err(CoverMapError::InvalidAltitude { altitude_km });
        }

        let v = Self::speed_from_altitude(altitude_km * 1000.0) / 1000.0;
        if !v.is_finite() || v <= 0.0 {
            return Err(CoverMapError::InvalidAltitude { altitude_km });
        }
        Ok(v)
    }
}
