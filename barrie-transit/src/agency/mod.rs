//! Agency rules: the decisions a generic GTFS converter cannot make on its
//! own.
//!
//! [`AgencyTools`] lists the decision points the host pipeline calls once per
//! GTFS row, with generic defaults. [`BarrieTransit`] is the Barrie Transit
//! policy value. Per-run state lives in [`ConversionRun`], which the host
//! creates once per conversion and threads through the calls that need it.

mod barrie;
mod config;
mod error;
mod merge;
mod run;
mod tools;
mod trips;

pub use barrie::BarrieTransit;
pub use config::{AgencyConfig, Route11Headsign};
pub use error::AgencyError;
pub use run::{ConversionRun, TerminalSlot};
pub use tools::{AgencyTools, longest_common_prefix};
pub use trips::{clean_stop_name, clean_trip_headsign};
