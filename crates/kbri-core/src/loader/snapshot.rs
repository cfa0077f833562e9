// crates/kbri-core/src/loader/snapshot.rs
//! Binary catalog snapshots.
//!
//! Parsing the world-cities CSV is the slow part of startup, so a parsed
//! [`Catalog`] can be written next to its source as a bincode blob and
//! reused while it is newer than both CSV files and was built from the
//! same pair of them.

use super::common_io::get_cache_path;
use crate::common::Catalog;
use crate::error::{GeoError, Result};
use bincode::Options;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".catalog.bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".catalog.comp.bin";

/// Upper bound on a snapshot's decoded size.
const SNAPSHOT_LIMIT: u64 = 256 * 1024 * 1024;

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SNAPSHOT_LIMIT)
        .allow_trailing_bytes()
}

/// What [`Catalog::load_cached`] writes: the catalog plus the sources it
/// was built from, so a snapshot is never served for a different pair.
#[derive(Serialize, Deserialize)]
struct KeyedSnapshot {
    sources: Vec<String>,
    catalog: Catalog,
}

fn write_blob<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    #[cfg(feature = "compact")]
    {
        let mut encoder = GzEncoder::new(writer, Compression::default());
        bincode_options().serialize_into(&mut encoder, value)?;
        encoder.finish()?.flush()?;
    }

    #[cfg(not(feature = "compact"))]
    {
        let mut writer = writer;
        bincode_options().serialize_into(&mut writer, value)?;
        writer.flush()?;
    }

    debug!(path = %path.display(), "snapshot written");
    Ok(())
}

fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Snapshot not found at {}: {}", path.display(), e))
    })?;
    let reader = std::io::BufReader::new(file);

    #[cfg(feature = "compact")]
    let mut stream: Box<dyn Read> = Box::new(GzDecoder::new(reader));
    #[cfg(not(feature = "compact"))]
    let mut stream: Box<dyn Read> = Box::new(reader);

    let mut data = Vec::new();
    stream.read_to_end(&mut data)?;
    Ok(bincode_options().deserialize(&data)?)
}

impl Catalog {
    /// Write this catalog as a binary snapshot.
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        write_blob(self, path.as_ref())
    }

    /// Read a snapshot written by [`save_snapshot`](Self::save_snapshot).
    pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Self> {
        read_blob(path.as_ref())
    }

    /// **Smart Load:** reuse a fresh snapshot built from these exact
    /// sources, otherwise parse the CSVs and rewrite the snapshot
    /// (best-effort). Both sources must exist.
    pub fn load_cached(cities: impl AsRef<Path>, offices: impl AsRef<Path>) -> Result<Self> {
        let cities = cities.as_ref();
        let offices = offices.as_ref();
        let cache_path = get_cache_path(cities, CACHE_SUFFIX);
        let sources = vec![source_key(cities), source_key(offices)];

        if is_cache_fresh(&[cities, offices], &cache_path) {
            match read_blob::<KeyedSnapshot>(&cache_path) {
                Ok(snap) if snap.sources == sources => {
                    info!(path = %cache_path.display(), "loaded catalog snapshot");
                    return Ok(snap.catalog);
                }
                Ok(_) => debug!(path = %cache_path.display(), "snapshot built from other sources"),
                Err(e) => warn!(error = %e, "snapshot unreadable; rebuilding"),
            }
        }

        let catalog = Self::load_from_paths(cities, offices)?;
        let snap = KeyedSnapshot { sources, catalog };
        if let Err(e) = write_blob(&snap, &cache_path) {
            warn!(path = %cache_path.display(), error = %e, "could not write snapshot");
        }
        Ok(snap.catalog)
    }
}

/// Canonical form of a source path, falling back to the path as given.
fn source_key(path: &Path) -> String {
    fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .to_string_lossy()
        .into_owned()
}

/// A snapshot is fresh when it and every source exist and no source is
/// newer than it.
fn is_cache_fresh(sources: &[&Path], cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    sources.iter().all(|src| {
        fs::metadata(src)
            .and_then(|m| m.modified())
            .is_ok_and(|src_time| src_time <= cache_time)
    })
}
