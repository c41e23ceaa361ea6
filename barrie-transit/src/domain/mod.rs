//! Validated values derived from GTFS rows.
//!
//! Every type here enforces its invariants at construction time, so the
//! host can emit them without re-checking.

mod color;
mod direction;
mod normalized;
mod route_name;
mod stop_code;

pub use color::{HexColor, InvalidHexColor};
pub use direction::Direction;
pub use normalized::{NormalizedRoute, NormalizedStop, NormalizedTrip};
pub use route_name::{RouteShortName, first_digit_run};
pub use stop_code::parse_stop_code;
