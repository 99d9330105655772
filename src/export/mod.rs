//! File artifacts of a run: the coverage tensor, entity metadata, the total
//! duration and a footprint snapshot for plotting.

pub mod atomic;
pub mod binary;
pub mod records;

use crate::coverage::CoverageTensor;
use crate::error::Result;
use crate::models::{Satellite, Ue};
use atomic::write_atomic;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const TENSOR_FILE: &str = "data_simulation.bin";
pub const DURATION_FILE: &str = "duration.txt";
pub const FOOTPRINT_FILE: &str = "footprints.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataFormat {
    #[default]
    Json,
    Csv,
}

impl MetadataFormat {
    pub fn satellite_file(&self) -> &'static str {
        match self {
            MetadataFormat::Json => "satellites.json",
            MetadataFormat::Csv => "satellites.csv",
        }
    }

    pub fn ue_file(&self) -> &'static str {
        match self {
            MetadataFormat::Json => "UEs.json",
            MetadataFormat::Csv => "UEs.csv",
        }
    }
}

/// Writes every artifact of a run into `dir`, creating it if needed.
/// Returns the paths written, tensor first.
pub fn export_run(
    dir: impl AsRef<Path>,
    ues: &[Ue],
    satellites: &[Satellite],
    tensor: &CoverageTensor,
    total_duration: f64,
    format: MetadataFormat,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let mut written = Vec::new();

    let path = dir.join(TENSOR_FILE);
    write_atomic(&path, |w| binary::write_tensor(w, tensor))?;
    info!("Wrote {:?} tensor to {:?}", tensor.shape(), path);
    written.push(path);

    let satellite_records = records::satellite_records(satellites);
    let ue_records = records::ue_records(ues);
    let sat_path = dir.join(format.satellite_file());
    let ue_path = dir.join(format.ue_file());
    match format {
        MetadataFormat::Json => {
            write_atomic(&sat_path, |w| records::write_json(w, &satellite_records))?;
            write_atomic(&ue_path, |w| records::write_json(w, &ue_records))?;
        }
        MetadataFormat::Csv => {
            write_atomic(&sat_path, |w| records::write_csv(w, &satellite_records))?;
            write_atomic(&ue_path, |w| records::write_csv(w, &ue_records))?;
        }
    }
    info!(
        "Wrote {} satellite and {} UE records",
        satellite_records.len(),
        ue_records.len()
    );
    written.push(sat_path);
    written.push(ue_path);

    let path = dir.join(DURATION_FILE);
    write_atomic(&path, |w| records::write_duration(w, total_duration))?;
    written.push(path);

    let path = dir.join(FOOTPRINT_FILE);
    let footprints = records::footprint_records(satellites, total_duration);
    write_atomic(&path, |w| records::write_csv(w, &footprints))?;
    written.push(path);

    Ok(written)
}
