// crates/kbri-core/src/model/convert.rs
use super::raw::{CityRaw, OfficeRaw};
use super::{CityRecord, OfficeKind, OfficeRecord};
use crate::error::{GeoError, Result};
use crate::geo::GeoPoint;
use crate::text::{parse_opt_f64, parse_opt_population};

fn required(field: &str, v: Option<String>) -> Result<String> {
    match v {
        Some(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(GeoError::InvalidData(format!("missing {field}"))),
    }
}

fn point(lat: Option<&str>, lon: Option<&str>) -> Result<GeoPoint> {
    match (parse_opt_f64(lat), parse_opt_f64(lon)) {
        (Some(lat), Some(lon)) => GeoPoint::new(lat, lon),
        _ => Err(GeoError::InvalidData(format!(
            "unparsable coordinates: {lat:?}, {lon:?}"
        ))),
    }
}

/// **City Converter:** Raw -> Record.
pub fn city_from_raw(raw: CityRaw) -> Result<CityRecord> {
    let location = point(raw.lat.as_deref(), raw.lng.as_deref())?;
    Ok(CityRecord {
        name: required("city name", raw.name)?,
        admin_name: raw
            .admin_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty()),
        country: required("country", raw.country)?,
        population: parse_opt_population(raw.population.as_deref()),
        location,
    })
}

/// **Office Converter:** Raw -> Record.
pub fn office_from_raw(raw: OfficeRaw) -> Result<OfficeRecord> {
    let location = point(raw.latitude.as_deref(), raw.longitude.as_deref())?;
    let kind: OfficeKind = required("office type", raw.kind)?.parse()?;
    Ok(OfficeRecord {
        city: required("office city", raw.city)?,
        country: required("office country", raw.country)?,
        kind,
        location,
    })
}
