use std::{fs::File, io::Read, path::Path};

use super::{DatasetError, RegionTable, RegionTableRow};
use crate::record::{RouteRecord, RouteRow};

/// reads the route table at `path`. fields that fail to parse become zero,
/// but a file that cannot be opened or decoded as csv is an error.
pub fn read_route_records<P>(path: P) -> Result<Vec<RouteRecord>, DatasetError>
where
    P: AsRef<Path>,
{
    let filepath = path.as_ref().to_string_lossy().to_string();
    let file = File::open(path.as_ref()).map_err(|source| DatasetError::ReadError {
        filepath: filepath.clone(),
        source,
    })?;
    let records = read_route_records_from_reader(file, &filepath)?;
    log::info!("read {} route records from '{filepath}'", records.len());
    Ok(records)
}

/// reads route records from any csv source with a header row.
/// `source_name` only appears in error messages.
pub fn read_route_records_from_reader<R>(
    reader: R,
    source_name: &str,
) -> Result<Vec<RouteRecord>, DatasetError>
where
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    rdr.deserialize::<RouteRow>()
        .enumerate()
        .map(|(idx, row)| {
            row.map(RouteRecord::from)
                .map_err(|source| DatasetError::CsvDecodeError {
                    filepath: source_name.to_owned(),
                    row: idx + 1,
                    source,
                })
        })
        .collect()
}

/// reads the newline-delimited list of city names used for suggestions.
/// blank lines are skipped.
pub fn read_city_names<P>(path: P) -> Result<Vec<String>, DatasetError>
where
    P: AsRef<Path>,
{
    let filepath = path.as_ref().to_string_lossy().to_string();
    let contents =
        std::fs::read_to_string(path.as_ref()).map_err(|source| DatasetError::ReadError {
            filepath: filepath.clone(),
            source,
        })?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_owned)
        .collect())
}

/// reads the precomputed region-to-region CO2 table.
pub fn read_region_table<P>(path: P) -> Result<RegionTable, DatasetError>
where
    P: AsRef<Path>,
{
    let filepath = path.as_ref().to_string_lossy().to_string();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())
        .map_err(|source| DatasetError::CsvOpenError {
            filepath: filepath.clone(),
            source,
        })?;
    let rows = rdr
        .deserialize::<RegionTableRow>()
        .enumerate()
        .map(|(idx, row)| {
            row.map_err(|source| DatasetError::CsvDecodeError {
                filepath: filepath.clone(),
                row: idx + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("read {} region pairs from '{filepath}'", rows.len());
    Ok(RegionTable::new(rows))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join(name)
    }

    #[test]
    fn test_read_fixture_route_table() {
        let records = read_route_records(fixture("routes.csv")).expect("fixture should load");
        assert_eq!(records.len(), 10);
        let first = &records[0];
        assert_eq!(first.id, "Paris to Lyon");
        assert_eq!(first.departure.country, "France");
        assert_eq!(first.departure.region, "Western Europe");
        assert_eq!(first.distance, 392.0);
        assert_eq!(first.avg_co2, 18.5);
        assert!(first.departure.coordinate().is_valid());
    }

    #[test]
    fn test_short_rows_and_missing_columns_default_to_zero() {
        let data = "Departure City,Arrival City,avg_co2,distance\nRome,Milan,12.5\nOslo,Bergen\n";
        let records = read_route_records_from_reader(data.as_bytes(), "inline").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].avg_co2, 12.5);
        assert_eq!(records[0].distance, 0.0);
        assert_eq!(records[1].avg_co2, 0.0);
        assert_eq!(records[1].flight.co2, 0.0);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = read_route_records(fixture("does_not_exist.csv"));
        assert!(matches!(result, Err(DatasetError::ReadError { .. })));
    }

    #[test]
    fn test_read_city_names_skips_blank_lines() {
        let names = read_city_names(fixture("cities.txt")).unwrap();
        assert_eq!(names.first().map(String::as_str), Some("Amsterdam"));
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn test_read_region_table() {
        let table = read_region_table(fixture("regions_co2.csv")).unwrap();
        assert_eq!(
            table.get("Western Europe", "Southern Europe"),
            Some(55.0)
        );
        assert_eq!(table.get("Western Europe", "Atlantis"), None);
    }
}
