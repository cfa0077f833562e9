// crates/kbri-core/src/loader/csv_source.rs
use crate::error::Result;
use crate::model::convert::{city_from_raw, office_from_raw};
use crate::model::raw::{CityRaw, OfficeRaw};
use crate::model::{CityRecord, OfficeRecord};
use serde::de::DeserializeOwned;
use std::io::Read;
use tracing::{info, warn};

/// Parses every row of a headed CSV stream, converting each with `convert`.
///
/// Rows that fail to deserialize or convert are skipped with a warning;
/// only a broken header or an I/O failure aborts the load.
fn read_rows<R, Raw, Rec>(
    reader: R,
    what: &str,
    convert: fn(Raw) -> Result<Rec>,
) -> Result<Vec<Rec>>
where
    R: Read,
    Raw: DeserializeOwned,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    // Surface a bad header as an error rather than N skipped rows.
    rdr.headers()?;

    let mut out = Vec::new();
    let mut skipped = 0usize;

    for (i, row) in rdr.deserialize::<Raw>().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let record = match row {
            Ok(raw) => convert(raw),
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => Err(e.into()),
        };
        match record {
            Ok(r) => out.push(r),
            Err(e) => {
                warn!(what, line, error = %e, "skipping row");
                skipped += 1;
            }
        }
    }

    info!(what, loaded = out.len(), skipped, "catalog parsed");
    Ok(out)
}

pub(crate) fn read_cities<R: Read>(reader: R) -> Result<Vec<CityRecord>> {
    read_rows::<_, CityRaw, _>(reader, "cities", city_from_raw)
}

pub(crate) fn read_offices<R: Read>(reader: R) -> Result<Vec<OfficeRecord>> {
    read_rows::<_, OfficeRaw, _>(reader, "offices", office_from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OfficeKind;

    #[test]
    fn reads_cities_with_extra_columns() {
        let csv = "\
id,name,admin_name,country,population,lat,lng,iso2
1,Paris,Île-de-France,France,11020000,48.8566,2.3522,FR
2,Lyon,Auvergne-Rhône-Alpes,France,,45.7640,4.8357,FR
";
        let cities = read_cities(csv.as_bytes()).unwrap();
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Paris");
        assert_eq!(cities[0].admin_name.as_deref(), Some("Île-de-France"));
        assert_eq!(cities[1].population, None);
    }

    #[test]
    fn bad_rows_are_skipped() {
        let csv = "\
City,Country,Type,Latitude,Longitude
Paris,France,Embassy,48.8566,2.3522
Nowhere,Atlantis,Embassy,abc,2.0
Milan,Italy,Trade Office,45.4642,9.19
Frankfurt,Germany,Consulate,50.1109,8.6821
";
        let offices = read_offices(csv.as_bytes()).unwrap();
        let cities: Vec<_> = offices.iter().map(|o| o.city.as_str()).collect();
        assert_eq!(cities, ["Paris", "Frankfurt"]);
        assert_eq!(offices[1].kind, OfficeKind::Consulate);
    }
}
