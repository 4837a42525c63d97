//! Tabular sink: ordered records to a delimited file.
//!
//! The sink is deliberately generic: it accepts any uniformly-shaped
//! serializable record type and writes a header row followed by one row per
//! record, preserving input order. Both pipelines share it.

use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::Result;

/// Write records as CSV to the given destination.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabulate::GridRecord;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_write_records_header_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let records = vec![
            GridRecord {
                time: "2023-07-17 22:00:00".to_string(),
                latitude: 46.5,
                longitude: 3.0,
                pressure: 1000.0,
                temperature_c: 15.0,
                relative_humidity_pct: 80.0,
                height_m: 500.0,
            },
            GridRecord {
                time: "2023-07-17 23:00:00".to_string(),
                latitude: 47.0,
                longitude: 3.5,
                pressure: 950.0,
                temperature_c: 14.0,
                relative_humidity_pct: 75.0,
                height_m: 940.0,
            },
        ];

        write_records(&path, &records).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date and Time (UTC),Latitude (degrees),Longitude (degrees),\
             Pressure (hPa),Temperature (Celsius),Relative Humidity (%),\
             Height Above Sea Level (m)"
        );
        assert!(lines.next().unwrap().starts_with("2023-07-17 22:00:00,46.5,3.0,1000"));
        assert!(lines.next().unwrap().starts_with("2023-07-17 23:00:00,47.0,3.5,950"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let records: Vec<GridRecord> = Vec::new();
        assert!(write_records(Path::new("/nonexistent/dir/out.csv"), &records).is_err());
    }
}
