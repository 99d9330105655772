pub mod satellite;
pub mod trajectory;
pub mod ue;

pub use satellite::Satellite;
pub use trajectory::Trajectory;
pub use ue::{Ue, UePlacement, ZoneBounds};
