// crates/kbri-core/src/loader/common_io.rs
use crate::error::{GeoError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

pub(crate) fn is_gzip_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the path
/// ends in `.gz`.
pub(crate) fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip_path(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(GeoError::InvalidData(format!(
            "{} is gzip-compressed but 'compact' is disabled",
            path.display()
        )))
    }
}

/// `world_cities.csv` -> `world_cities.csv.catalog.bin`
pub(crate) fn get_cache_path(source: &Path, suffix: &str) -> PathBuf {
    let filename = source
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "catalog".to_string());
    source.with_file_name(format!("{filename}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_appends_suffix() {
        let p = get_cache_path(Path::new("/data/world_cities.csv"), ".catalog.bin");
        assert_eq!(p, PathBuf::from("/data/world_cities.csv.catalog.bin"));
    }

    #[test]
    fn gzip_detection_is_by_extension() {
        assert!(is_gzip_path(Path::new("cities.csv.gz")));
        assert!(is_gzip_path(Path::new("cities.csv.GZ")));
        assert!(!is_gzip_path(Path::new("cities.csv")));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = open_stream(Path::new("/definitely/not/here.csv")).err().unwrap();
        assert!(matches!(err, GeoError::NotFound(_)));
    }
}
