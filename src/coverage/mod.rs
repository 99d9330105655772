pub mod builder;
pub mod tensor;

pub use builder::{build_coverage, build_coverage_parallel, slot_count};
pub use tensor::CoverageTensor;
