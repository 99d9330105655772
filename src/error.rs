use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoverMapError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Could not persist output file: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("Invalid altitude {altitude_km} km: orbital speed is undefined")]
    InvalidAltitude { altitude_km: f64 },
    #[error("Invalid time unit {0}: must be finite and positive")]
    InvalidTimeUnit(f64),
    #[error("Invalid total duration {0}: must be finite and non-negative")]
    InvalidDuration(f64),
    #[error("Coverage grid of {ues} × {channels} × {slots} cells does not fit in memory")]
    GridTooLarge {
        ues: usize,
        channels: usize,
        slots: usize,
    },
    #[error("Invalid placement zones: {0}")]
    InvalidZones(String),
    #[error("Malformed coverage tensor: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, CoverMapError>;
