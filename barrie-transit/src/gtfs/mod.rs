//! Raw GTFS rows as the host pipeline hands them over.
//!
//! Field names follow the GTFS reference so that rows deserialize straight
//! from the host's CSV or JSON representation. Nothing here is validated;
//! validation happens when the agency rules derive normalized values.

mod date;
mod rows;

pub use date::{GTFS_DATE_FORMAT, parse_gtfs_date};
pub use rows::{GtfsCalendar, GtfsCalendarDate, GtfsRoute, GtfsStop, GtfsTrip, RouteType};
