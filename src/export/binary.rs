//! Raw coverage tensor layout.
//!
//! ```text
//! u64 ue_count
//! per ue:      u64 channel_count
//! per channel: u64 slot_count, then slot_count × i16 flag (0 or 1)
//! ```
//!
//! All integers are in native byte order. There is no header or version;
//! readers must know the dimension conventions out of band.

use crate::coverage::CoverageTensor;
use crate::error::{CoverMapError, Result};
use std::io::{self, Read, Write};

pub fn write_tensor<W: Write + ?Sized>(writer: &mut W, tensor: &CoverageTensor) -> Result<()> {
    let (ues, channels, slots) = tensor.shape();
    writer.write_all(&(ues as u64).to_ne_bytes())?;

    let mut row_bytes = Vec::with_capacity(slots * 2);
    for ue in 0..ues {
        writer.write_all(&(channels as u64).to_ne_bytes())?;
        for channel in 0..channels {
            writer.write_all(&(slots as u64).to_ne_bytes())?;
            row_bytes.clear();
            for &flag in tensor.row(ue, channel) {
                row_bytes.extend_from_slice(&(flag as i16).to_ne_bytes());
            }
            writer.write_all(&row_bytes)?;
        }
    }
    Ok(())
}

pub fn read_tensor<R: Read>(reader: &mut R) -> Result<CoverageTensor> {
    let ues = read_count(reader, "UE count")?;
    let mut shape: Option<(usize, usize)> = None;
    let mut flags: Vec<bool> = Vec::new();

    for ue in 0..ues {
        let channels = read_count(reader, "channel count")?;
        if let Some((expected, _)) = shape {
            if channels != expected {
                return Err(CoverMapError::Decode(format!(
                    "UE {} has {} channels, expected {}",
                    ue, channels, expected
                )));
            }
        }

        for channel in 0..channels {
            let slots = read_count(reader, "slot count")?;
            match shape {
                Some((_, expected)) if slots != expected => {
                    return Err(CoverMapError::Decode(format!(
                        "UE {} channel {} has {} slots, expected {}",
                        ue, channel, slots, expected
                    )));
                }
                _ => shape = Some((channels, slots)),
            }

            let mut raw = [0u8; 2];
            for slot in 0..slots {
                read_exact(reader, &mut raw, "flag")?;
                match i16::from_ne_bytes(raw) {
                    0 => flags.push(false),
                    1 => flags.push(true),
                    other => {
                        return Err(CoverMapError::Decode(format!(
                            "flag {} at ({}, {}, {}) is not 0 or 1",
                            other, ue, channel, slot
                        )))
                    }
                }
            }
        }

        // A UE with zero channels still fixes the channel count.
        if shape.is_none() {
            shape = Some((channels, 0));
        }
    }

    let (channels, slots) = shape.unwrap_or((0, 0));
    let mut tensor = CoverageTensor::try_zeros(ues, channels, slots)?;
    let mut cells = flags.into_iter();
    for ue in 0..ues {
        for channel in 0..channels {
            for slot in 0..slots {
                if cells.next() == Some(true) {
                    tensor.set(ue, channel, slot, true);
                }
            }
        }
    }
    Ok(tensor)
}

fn read_count<R: Read>(reader: &mut R, what: &str) -> Result<usize> {
    let mut raw = [0u8; 8];
    read_exact(reader, &mut raw, what)?;
    usize::try_from(u64::from_ne_bytes(raw))
        .map_err(|_| CoverMapError::Decode(format!("{} does not fit in memory", what)))
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8], what: &str) -> Result<()> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            CoverMapError::Decode(format!("input ends while reading {}", what))
        }
        _ => CoverMapError::IoError(e),
    })
}
