use crate::error::Result;
use crate::models::{Satellite, Ue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Flat view of a satellite, as consumed by the optimizer and plotting tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteRecord {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub h: f64,
    pub v: f64,
    pub r: f64,
    pub sind: f64,
    pub cosd: f64,
    pub tid: u32,
}

impl SatelliteRecord {
    pub fn new(index: usize, satellite: &Satellite) -> Self {
        let position = satellite.position();
        SatelliteRecord {
            index,
            x: position.x,
            y: position.y,
            h: satellite.altitude(),
            v: satellite.speed(),
            r: satellite.coverage_radius(),
            sind: satellite.sin_d(),
            cosd: satellite.cos_d(),
            tid: satellite.trajectory_id(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UeRecord {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

impl UeRecord {
    pub fn new(index: usize, ue: &Ue) -> Self {
        let position = ue.position();
        UeRecord {
            index,
            x: position.x,
            y: position.y,
        }
    }
}

/// Where a satellite's footprint starts and ends over the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintRecord {
    pub index: usize,
    pub tid: u32,
    pub r: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl FootprintRecord {
    pub fn new(index: usize, satellite: &Satellite, total_duration: f64) -> Self {
        let start = satellite.position();
        // one slot of `total_duration` seconds
        let end = satellite.position_at(1.0, total_duration);
        FootprintRecord {
            index,
            tid: satellite.trajectory_id(),
            r: satellite.coverage_radius(),
            start_x: start.x,
            start_y: start.y,
            end_x: end.x,
            end_y: end.y,
        }
    }
}

pub fn satellite_records(satellites: &[Satellite]) -> Vec<SatelliteRecord> {
    satellites
        .iter()
        .enumerate()
        .map(|(i, s)| SatelliteRecord::new(i, s))
        .collect()
}

pub fn ue_records(ues: &[Ue]) -> Vec<UeRecord> {
    ues.iter()
        .enumerate()
        .map(|(i, u)| UeRecord::new(i, u))
        .collect()
}

pub fn footprint_records(satellites: &[Satellite], total_duration: f64) -> Vec<FootprintRecord> {
    satellites
        .iter()
        .enumerate()
        .map(|(i, s)| FootprintRecord::new(i, s, total_duration))
        .collect()
}

/// JSON array indented with four spaces.
pub fn write_json<W: Write + ?Sized, T: Serialize>(writer: &mut W, records: &[T]) -> Result<()> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}

pub fn read_json<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    Ok(serde_json::from_reader(reader)?)
}

/// CSV with the record field names as the header row.
pub fn write_csv<W: Write, T: Serialize>(writer: W, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_csv<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

pub fn write_duration<W: Write + ?Sized>(writer: &mut W, total_duration: f64) -> Result<()> {
    write!(writer, "{}", total_duration)?;
    Ok(())
}

pub fn read_duration<R: Read>(mut reader: R) -> Result<f64> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    text.trim().parse::<f64>().map_err(|e| {
        crate::error::CoverMapError::Decode(format!("duration {:?}: {}", text.trim(), e))
    })
}
