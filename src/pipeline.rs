//! The two extraction pipelines.
//!
//! Each pipeline is a single synchronous pass over a fully loaded input.
//! Validation happens before tabularization, and tabularization before the
//! sink is touched: either a complete, validated record set reaches the
//! output or the run stops with the error and writes nothing. The two
//! pipelines share no state and may run in either order.

use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::logging::log_data_load_stats;
use crate::{data_loader, sink, station, tabulate};

/// Load the gridded source, flatten it, and write the grid table.
/// Returns the number of rows written.
pub fn run_grid_pipeline(input: &Path, output: &Path) -> Result<usize> {
    let field_set = data_loader::load_fields(input)?;

    let var_names: Vec<&str> = field_set
        .fields()
        .iter()
        .map(|f| f.variable_name.as_str())
        .collect();
    let axis_details: Vec<String> = field_set
        .axes
        .iter()
        .map(|a| format!("{}={}", a.name, a.values.len()))
        .collect();
    log_data_load_stats(
        &input.display().to_string(),
        &var_names,
        &axis_details.join(", "),
        field_set.cell_count(),
    );

    let records = tabulate::to_records(&field_set)?;
    sink::write_records(output, &records)?;

    info!(
        rows = records.len(),
        output = %output.display(),
        "Grid pipeline finished"
    );
    Ok(records.len())
}

/// Read the station log, derive relative humidity per observation, and
/// write the station table. Returns the number of rows written.
pub fn run_station_pipeline(input: &Path, output: &Path) -> Result<usize> {
    let observations = station::read_observations(input)?;
    let records = station::process(&observations)?;
    sink::write_records(output, &records)?;

    info!(
        rows = records.len(),
        output = %output.display(),
        "Station pipeline finished"
    );
    Ok(records.len())
}
