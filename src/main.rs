//! magnus - ERA5/METAR extraction pipeline
//!
//! This is the main entry point for the magnus application.

use tracing::info;

use magnus::logging::{init_tracing, log_error, log_timed_operation};
use magnus::pipeline::{run_grid_pipeline, run_station_pipeline};
use magnus::{Config, Result};

fn main() -> Result<()> {
    // Configuration errors surface on stderr; tracing is not up yet
    let (config, era5_path, station_path) = Config::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    config.validate().map_err(|e| {
        eprintln!("Invalid configuration: {}", e);
        e
    })?;

    init_tracing(&config.log_level);

    info!("Starting magnus v{}", env!("CARGO_PKG_VERSION"));
    info!("Gridded source: {}", era5_path.display());
    info!("Station source: {}", station_path.display());

    // The two pipelines are independent; they run sequentially and a
    // failure in the first stops the run before the second starts.
    let grid_rows = log_timed_operation("grid_pipeline", || {
        run_grid_pipeline(&era5_path, &config.output.grid_csv)
    })
    .map_err(|e| {
        log_error(&e, "grid pipeline");
        e
    })?;

    let station_rows = log_timed_operation("station_pipeline", || {
        run_station_pipeline(&station_path, &config.output.station_csv)
    })
    .map_err(|e| {
        log_error(&e, "station pipeline");
        e
    })?;

    info!(
        grid_rows = grid_rows,
        station_rows = station_rows,
        "All pipelines finished"
    );
    Ok(())
}
