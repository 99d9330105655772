use super::tensor::CoverageTensor;
use crate::error::{CoverMapError, Result};
use crate::models::{Satellite, Ue};
use rayon::prelude::*;

/// Number of whole slots of `time_unit` seconds in `total_duration` seconds.
pub fn slot_count(time_unit: f64, total_duration: f64) -> Result<usize> {
    if !time_unit.is_finite() || time_unit <= 0.0 {
        return Err(CoverMapError::InvalidTimeUnit(time_unit));
    }
    if !total_duration.is_finite() || total_duration < 0.0 {
        return Err(CoverMapError::InvalidDuration(total_duration));
    }
    let slots = (total_duration / time_unit).floor();
    // `as usize` saturates, so anything at or past usize::MAX is out of range
    if slots >= usize::MAX as f64 {
        return Err(CoverMapError::GridTooLarge {
            ues: 0,
            channels: 0,
            slots: usize::MAX,
        });
    }
    Ok(slots as usize)
}

/// Allocates the zeroed tensor for a build: one channel per satellite plus
/// the synthetic always-covered channel when `feasible` is set.
fn allocate(
    feasible: bool,
    time_unit: f64,
    total_duration: f64,
    ues: &[Ue],
    satellites: &[Satellite],
) -> Result<CoverageTensor> {
    let slots = slot_count(time_unit, total_duration)?;
    let channels = satellites.len() + feasible as usize;
    CoverageTensor::try_zeros(ues.len(), channels, slots)
}

/// Fills one UE's `[channel][slot]` block. Every cell depends only on the
/// UE, the satellite and the slot index.
fn fill_ue_block(
    block: &mut [u8],
    ue: &Ue,
    satellites: &[Satellite],
    slots: usize,
    time_unit: f64,
    feasible: bool,
) {
    let position = ue.position();
    for (satellite, row) in satellites.iter().zip(block.chunks_exact_mut(slots)) {
        for (t, cell) in row.iter_mut().enumerate() {
            if satellite.covers(&position, t as f64, time_unit) {
                *cell = 1;
            }
        }
    }

    if feasible {
        let start = satellites.len() * slots;
        block[start..start + slots].fill(1);
    }
}

/// Builds the coverage tensor sequentially, UE by UE in row-major order.
pub fn build_coverage(
    feasible: bool,
    time_unit: f64,
    total_duration: f64,
    ues: &[Ue],
    satellites: &[Satellite],
) -> Result<CoverageTensor> {
    let mut tensor = allocate(feasible, time_unit, total_duration, ues, satellites)?;
    let (block_len, slots) = (tensor.block_len(), tensor.slot_count());
    if block_len == 0 {
        return Ok(tensor);
    }

    for (ue, block) in ues.iter().zip(tensor.data_mut().chunks_mut(block_len)) {
        fill_ue_block(block, ue, satellites, slots, time_unit, feasible);
    }
    Ok(tensor)
}

/// Same result as [`build_coverage`], with UE blocks filled on the rayon pool.
pub fn build_coverage_parallel(
    feasible: bool,
    time_unit: f64,
    total_duration: f64,
    ues: &[Ue],
    satellites: &[Satellite],
) -> Result<CoverageTensor> {
    let mut tensor = allocate(feasible, time_unit, total_duration, ues, satellites)?;
    let (block_len, slots) = (tensor.block_len(), tensor.slot_count());
    if block_len == 0 {
        return Ok(tensor);
    }

    tensor
        .data_mut()
        .par_chunks_mut(block_len)
        .zip(ues.par_iter())
        .for_each(|(block, ue)| {
            fill_ue_block(block, ue, satellites, slots, time_unit, feasible);
        });
    Ok(tensor)
}
