//! Barrie Transit bus adapter.
//!
//! Normalizes the agency's GTFS rows for display: numeric route and stop
//! ids, cleaned labels, stable trip directions and merged headsigns.

pub mod agency;
pub mod convert;
pub mod domain;
pub mod gtfs;
pub mod text;
