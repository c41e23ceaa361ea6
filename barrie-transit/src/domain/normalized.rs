//! Values the host writes to the app's database.

use serde::Serialize;

use super::{Direction, HexColor};

/// A route as the app sees it. Lettered GTFS variants share one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRoute {
    pub id: u64,
    /// Digits only, e.g. `3` for `3A`.
    pub short_name: String,
    pub long_name: String,
    pub color: HexColor,
}

/// A trip pattern: one per route and direction after deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedTrip {
    pub route_id: u64,
    pub headsign: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedStop {
    pub id: u64,
    pub name: String,
}
