// crates/kbri-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading catalogs, constructing points, or talking to
/// the external place extractor.
///
/// Query outcomes are never errors: an unknown place or an empty office
/// catalog is reported through [`crate::QueryOutcome`].
#[derive(Debug, Error)]
pub enum GeoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Snapshot encoding error: {0}")]
    Bincode(#[from] bincode::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Coordinate out of range: lat={lat}, lon={lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Place extraction failed: {0}")]
    Extraction(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
