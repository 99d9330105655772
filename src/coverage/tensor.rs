use crate::error::{CoverMapError, Result};

/// Coverage flags indexed `[ue][channel][slot]`.
///
/// Stored as one row-major buffer of 0/1 bytes so a UE's block, or a single
/// (ue, channel) row, is a contiguous slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageTensor {
    ues: usize,
    channels: usize,
    slots: usize,
    data: Vec<u8>,
}

impl CoverageTensor {
    /// All-zero tensor of the given shape.
    pub fn zeros(ues: usize, channels: usize, slots: usize) -> Self {
        CoverageTensor {
            ues,
            channels,
            slots,
            data: vec![0; ues * channels * slots],
        }
    }

    /// All-zero tensor, or `GridTooLarge` when the cell count overflows `usize`.
    pub fn try_zeros(ues: usize, channels: usize, slots: usize) -> Result<Self> {
        let cells = ues
            .checked_mul(channels)
            .and_then(|n| n.checked_mul(slots))
            .ok_or(CoverMapError::GridTooLarge {
                ues,
                channels,
                slots,
            })?;
        Ok(CoverageTensor {
            ues,
            channels,
            slots,
            data: vec![0; cells],
        })
    }

    /// `(ues, channels, slots)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.ues, self.channels, self.slots)
    }

    pub fn ue_count(&self) -> usize {
        self.ues
    }

    pub fn channel_count(&self) -> usize {
        self.channels
    }

    pub fn slot_count(&self) -> usize {
        self.slots
    }

    fn offset(&self, ue: usize, channel: usize, slot: usize) -> usize {
        assert!(
            ue < self.ues && channel < self.channels && slot < self.slots,
            "index ({}, {}, {}) out of bounds for shape {:?}",
            ue,
            channel,
            slot,
            self.shape()
        );
        (ue * self.channels + channel) * self.slots + slot
    }

    pub fn get(&self, ue: usize, channel: usize, slot: usize) -> bool {
        self.data[self.offset(ue, channel, slot)] != 0
    }

    pub fn set(&mut self, ue: usize, channel: usize, slot: usize, covered: bool) {
        let i = self.offset(ue, channel, slot);
        self.data[i] = covered as u8;
    }

    /// The slot flags of one (ue, channel) pair.
    pub fn row(&self, ue: usize, channel: usize) -> &[u8] {
        let start = (ue * self.channels + channel) * self.slots;
        &self.data[start..start + self.slots]
    }

    /// Size of one UE's block in the flat buffer.
    pub(crate) fn block_len(&self) -> usize {
        self.channels * self.slots
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Number of covered cells.
    pub fn count_covered(&self) -> usize {
        self.data.iter().filter(|&&b| b != 0).count()
    }

    /// Copy of the tensor without its last channel, i.e. with the synthetic
    /// always-covered channel removed. A tensor with no channels is returned as is.
    pub fn without_feasibility_channel(&self) -> CoverageTensor {
        if self.channels == 0 {
            return self.clone();
        }
        let channels = self.channels - 1;
        let mut out = CoverageTensor::zeros(self.ues, channels, self.slots);
        for ue in 0..self.ues {
            for channel in 0..channels {
                let start = (ue * channels + channel) * self.slots;
                out.data[start..start + self.slots].copy_from_slice(self.row(ue, channel));
            }
        }
        out
    }
}
