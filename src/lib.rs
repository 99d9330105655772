//! Satellite-to-UE coverage over a discrete time grid.
//!
//! Satellites fly straight ground tracks over a flat plane, UEs sit still,
//! and the coverage tensor records for every (UE, satellite, slot) whether
//! the UE is inside the satellite's footprint.

pub mod config;
pub mod constants;
pub mod coverage;
pub mod error;
pub mod export;
pub mod models;
pub mod physics;
pub mod scenario;

pub use coverage::CoverageTensor;
pub use error::{CoverMapError, Result};
pub use scenario::Scenario;
