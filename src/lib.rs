//! # magnus
//!
//! Extraction, cross-validation and tabularization of meteorological
//! observations.
//!
//! magnus ingests two independent sources — an ERA5 pressure-level
//! reanalysis file and a station surface observation log — and flattens
//! both into analysis-ready CSV tables. The gridded fields are
//! cross-validated for coordinate consistency before they may be combined,
//! and the station data gains a relative humidity column derived from dew
//! point via the Magnus formula.
//!
//! ## Architecture
//!
//! - **Loading**: `data_loader` reads the NetCDF source into `field` types
//! - **Validation**: `coords` asserts coordinate agreement between fields
//! - **Derivation**: `units` and `humidity` compute converted and derived quantities
//! - **Tabularization**: `tabulate` and `station` produce row-oriented records
//! - **Output**: `sink` writes ordered records as CSV

pub mod config;
pub mod coords;
pub mod data_loader;
pub mod error;
pub mod field;
pub mod humidity;
pub mod logging;
pub mod pipeline;
pub mod sink;
pub mod station;
pub mod tabulate;
pub mod units;

pub use config::Config;
pub use error::{MagnusError, Result};
pub use field::{Axis, FieldSet, GriddedField};
pub use logging::{init_tracing, log_data_load_stats, log_error, log_timed_operation};
pub use station::{StationObservation, StationRecord};
pub use tabulate::GridRecord;
