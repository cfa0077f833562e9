// crates/kbri-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, decompression, snapshots) and hands
//! rows to the CSV parser. The resolution and ranking core never touches
//! I/O; it only sees the [`Catalog`] produced here.

use crate::common::Catalog;
use crate::error::Result;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing::info;

mod common_io;
mod csv_source;
pub mod snapshot;

pub use snapshot::CACHE_SUFFIX;

static CATALOG_CACHE: OnceCell<Catalog> = OnceCell::new();

pub const DEFAULT_CITIES_FILE: &str = "world_cities.csv";
pub const DEFAULT_OFFICES_FILE: &str = "kbri_kjri_locations_with_coordinates.csv";

impl Catalog {
    /// Directory holding the bundled datasets.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_cities_path() -> PathBuf {
        Self::default_data_dir().join(DEFAULT_CITIES_FILE)
    }

    pub fn default_offices_path() -> PathBuf {
        Self::default_data_dir().join(DEFAULT_OFFICES_FILE)
    }

    /// Load the bundled catalogs once per process.
    ///
    /// Later calls return the same instance.
    pub fn load() -> Result<&'static Catalog> {
        CATALOG_CACHE.get_or_try_init(|| {
            Self::load_from_paths(Self::default_cities_path(), Self::default_offices_path())
        })
    }

    /// **Standard Loader:** parse both CSV sources (plain or `.gz`).
    pub fn load_from_paths(cities: impl AsRef<Path>, offices: impl AsRef<Path>) -> Result<Self> {
        let cities_path = cities.as_ref();
        let offices_path = offices.as_ref();

        let cities = csv_source::read_cities(common_io::open_stream(cities_path)?)?;
        let offices = csv_source::read_offices(common_io::open_stream(offices_path)?)?;

        info!(
            cities = cities.len(),
            offices = offices.len(),
            source = %cities_path.display(),
            "catalog loaded"
        );
        Ok(Catalog { cities, offices })
    }

    /// Parse catalogs from in-memory CSV text.
    pub fn from_csv_str(cities_csv: &str, offices_csv: &str) -> Result<Self> {
        Ok(Catalog {
            cities: csv_source::read_cities(cities_csv.as_bytes())?,
            offices: csv_source::read_offices(offices_csv.as_bytes())?,
        })
    }
}
