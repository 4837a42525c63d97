//! Test data generation utilities.
//!
//! This module provides functions to generate ERA5-like NetCDF files and
//! station observation logs with known data patterns for testing the
//! magnus pipelines.

use std::io::Write;
use std::path::Path;

// Use the netcdf crate's error type directly
use netcdf::Error;
type Result<T> = std::result::Result<T, Error>;

/// The canonical axis order every fixture uses.
const DIMS: [&str; 4] = ["time", "pressure", "latitude", "longitude"];

/// Add the coordinate skeleton shared by the gridded fixtures: the four
/// dimensions and their coordinate variables.
fn add_coordinates(
    file: &mut netcdf::FileMut,
    times: &[f64],
    pressures: &[i32],
    latitudes: &[f64],
    longitudes: &[f64],
) -> Result<()> {
    file.add_dimension("time", times.len())?;
    file.add_dimension("pressure", pressures.len())?;
    file.add_dimension("latitude", latitudes.len())?;
    file.add_dimension("longitude", longitudes.len())?;

    {
        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "hours since 2023-07-17 22:00:00")?;
        time_var.put_attribute("calendar", "standard")?;
        time_var.put_values(times, &[..])?;
    }
    {
        let mut pressure_var = file.add_variable::<i32>("pressure", &["pressure"])?;
        pressure_var.put_attribute("units", "hPa")?;
        pressure_var.put_attribute("long_name", "Pressure Level")?;
        pressure_var.put_values(pressures, &[..])?;
    }
    {
        let mut lat_var = file.add_variable::<f64>("latitude", &["latitude"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_attribute("standard_name", "latitude")?;
        lat_var.put_values(latitudes, &[..])?;
    }
    {
        let mut lon_var = file.add_variable::<f64>("longitude", &["longitude"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_attribute("standard_name", "longitude")?;
        lon_var.put_values(longitudes, &[..])?;
    }

    Ok(())
}

/// Add one pressure-level data variable carrying a CF standard name.
fn add_field(
    file: &mut netcdf::FileMut,
    short_name: &str,
    standard_name: &str,
    units: &str,
    values: &[f64],
) -> Result<()> {
    let mut var = file.add_variable::<f64>(short_name, &DIMS)?;
    var.put_attribute("standard_name", standard_name)?;
    var.put_attribute("units", units)?;
    var.put_values(values, &[.., .., .., ..])?;
    Ok(())
}

/// Creates an ERA5-like pressure-level NetCDF file with a 2x2x2x2 grid.
///
/// The values follow the flat cell index `i` (0..16) so tests can predict
/// every record: temperature is `288.15 + i` K (so `15 + i` °C), relative
/// humidity is `80 - i` %, and geopotential is `9.80665 * (500 + i)` (so
/// the derived height is `500 + i` m).
///
/// # Arguments
///
/// * `path` - The path where the NetCDF file will be saved
pub fn create_era5_pressure_nc(path: &Path) -> Result<()> {
    let mut file = netcdf::create(path)?;

    file.add_attribute("title", "magnus test pressure-level data")?;
    file.add_attribute("institution", "magnus test suite")?;

    add_coordinates(
        &mut file,
        &[0.0, 1.0],
        &[1000, 950],
        &[46.5, 47.0],
        &[2.5, 3.0],
    )?;

    let temperature: Vec<f64> = (0..16).map(|i| 288.15 + i as f64).collect();
    let humidity: Vec<f64> = (0..16).map(|i| 80.0 - i as f64).collect();
    let geopotential: Vec<f64> = (0..16).map(|i| 9.80665 * (500.0 + i as f64)).collect();

    add_field(&mut file, "t", "air_temperature", "K", &temperature)?;
    add_field(&mut file, "r", "relative_humidity", "%", &humidity)?;
    add_field(&mut file, "z", "geopotential", "m**2 s**-2", &geopotential)?;

    Ok(())
}

/// Creates a single-cell ERA5-like file: one time, one pressure level, one
/// grid point, with temperature already in Celsius.
pub fn create_single_cell_nc(path: &Path) -> Result<()> {
    let mut file = netcdf::create(path)?;

    add_coordinates(&mut file, &[0.0], &[1000], &[46.5], &[3.0])?;

    add_field(&mut file, "t", "air_temperature", "degC", &[15.0])?;
    add_field(&mut file, "r", "relative_humidity", "%", &[80.0])?;
    add_field(&mut file, "z", "geopotential", "m**2 s**-2", &[9.80665 * 500.0])?;

    Ok(())
}

/// Creates a pressure-level file missing the geopotential variable.
pub fn create_era5_missing_geopotential_nc(path: &Path) -> Result<()> {
    let mut file = netcdf::create(path)?;

    add_coordinates(
        &mut file,
        &[0.0, 1.0],
        &[1000, 950],
        &[46.5, 47.0],
        &[2.5, 3.0],
    )?;

    let temperature: Vec<f64> = (0..16).map(|i| 288.15 + i as f64).collect();
    let humidity: Vec<f64> = (0..16).map(|i| 80.0 - i as f64).collect();

    add_field(&mut file, "t", "air_temperature", "K", &temperature)?;
    add_field(&mut file, "r", "relative_humidity", "%", &humidity)?;

    Ok(())
}

/// Creates a station observation log with three well-formed rows:
/// a saturated reading, a dry reading, and an ordinary one.
pub fn create_station_csv(path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "time,temperature,dewpoint")?;
    writeln!(file, "2023-07-17 22:00:00,20.0,20.0")?;
    writeln!(file, "2023-07-17 23:00:00,30.0,10.0")?;
    writeln!(file, "2023-07-18 00:00:00,18.5,12.5")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_era5_pressure_nc() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("era5.nc");

        assert!(create_era5_pressure_nc(&file_path).is_ok());
        assert!(file_path.exists());

        // Verify we can open and read the file
        let nc_file = netcdf::open(&file_path).unwrap();
        assert!(nc_file.variable("t").is_some());
        assert!(nc_file.variable("r").is_some());
        assert!(nc_file.variable("z").is_some());
        assert_eq!(nc_file.dimension("pressure").unwrap().len(), 2);
        assert_eq!(nc_file.dimension("latitude").unwrap().len(), 2);
    }

    #[test]
    fn test_create_station_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("metar.csv");

        assert!(create_station_csv(&file_path).is_ok());
        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.starts_with("time,temperature,dewpoint"));
        assert_eq!(content.lines().count(), 4);
    }
}
