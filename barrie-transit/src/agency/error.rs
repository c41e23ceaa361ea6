//! Agency rule errors.
//!
//! Every error is fatal to the conversion run: a wrong id, color or
//! headsign would corrupt the app's database, so nothing falls back
//! silently. Each variant carries the offending row for the log.

use crate::domain::{Direction, NormalizedRoute};
use crate::gtfs::{GtfsRoute, GtfsStop, GtfsTrip};

use super::run::TerminalSlot;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgencyError {
    /// Route short name has no route number
    #[error("unexpected route short name: {route:?}")]
    InvalidRouteName { route: GtfsRoute },

    /// Lettered route variant outside A-D
    #[error("unexpected route suffix {suffix:?} for trip {trip:?} on {route:?}")]
    UnexpectedRouteSuffix {
        suffix: char,
        route: GtfsRoute,
        trip: GtfsTrip,
    },

    /// Route 11 headsign outside the known terminals
    #[error("unexpected headsign on route {route_id}: {trip:?}")]
    UnexpectedHeadsign { route_id: u64, trip: GtfsTrip },

    /// Route 11 terminals bound to the same direction
    #[error("{slot:?} bound to {bound} but its pair is already {paired}: {trip:?}")]
    InconsistentDirection {
        slot: TerminalSlot,
        bound: Direction,
        paired: Direction,
        trip: GtfsTrip,
    },

    /// Feed direction needed but missing or not 0/1
    #[error("trip has no usable direction_id: {trip:?}")]
    MissingDirection { trip: GtfsTrip },

    #[error("trip has an empty headsign: {trip:?}")]
    EmptyHeadsign { trip: GtfsTrip },

    #[error("route has an empty long name: {route:?}")]
    EmptyRouteLongName { route: GtfsRoute },

    /// No feed color and no fallback for the route number
    #[error("unexpected route color: {route:?}")]
    MissingRouteColor { route: GtfsRoute },

    /// Feed color is not six hex digits
    #[error("invalid route color: {route:?}")]
    InvalidRouteColor { route: GtfsRoute },

    /// Stop code is neither digits nor an accepted prefix and digits
    #[error("unexpected stop code: {stop:?}")]
    UnknownStopPrefix { stop: GtfsStop },

    #[error("stop has an empty name: {stop:?}")]
    EmptyStopName { stop: GtfsStop },

    /// Trip points at a route missing from the feed
    #[error("trip references an unknown route: {trip:?}")]
    UnknownRoute { trip: GtfsTrip },

    /// Headsign pair outside the merge tables
    #[error("unexpected trips to merge on route {route_id}: {headsign:?} & {other:?}")]
    UnmergeableHeadsigns {
        route_id: u64,
        headsign: String,
        other: String,
    },

    /// Long names of one route share no prefix
    #[error(
        "unexpected long names to merge on route {}: {:?} & {:?}",
        .route.id, .route.long_name, .other.long_name
    )]
    UnmergeableRouteLongNames {
        route: NormalizedRoute,
        other: NormalizedRoute,
    },
}
