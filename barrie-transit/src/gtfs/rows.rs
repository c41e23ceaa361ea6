//! GTFS row structs consumed by the agency rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// GTFS `route_type` of the agency's routes. Barrie only runs buses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RouteType {
    Bus = 3,
}

impl RouteType {
    /// The numeric value written to `routes.txt`.
    pub fn as_gtfs(self) -> u8 {
        self as u8
    }
}

/// A row of `routes.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtfsRoute {
    pub route_id: String,
    #[serde(default)]
    pub agency_id: Option<String>,
    pub route_short_name: String,
    #[serde(default)]
    pub route_long_name: Option<String>,
    #[serde(default)]
    pub route_color: Option<String>,
}

impl GtfsRoute {
    /// The long name, or an empty string when the feed omits it.
    pub fn long_name_or_default(&self) -> &str {
        self.route_long_name.as_deref().unwrap_or("")
    }

    /// The feed color exactly as written, if present and non-blank.
    pub fn color(&self) -> Option<&str> {
        self.route_color
            .as_deref()
            .filter(|c| !c.trim().is_empty())
    }
}

/// A row of `trips.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtfsTrip {
    pub route_id: String,
    pub service_id: String,
    pub trip_id: String,
    #[serde(default)]
    pub trip_headsign: Option<String>,
    /// Raw direction bit. Its meaning differs between the two GTFS routes
    /// that make up one Barrie route.
    #[serde(default)]
    pub direction_id: Option<u8>,
}

impl GtfsTrip {
    pub fn headsign_or_default(&self) -> &str {
        self.trip_headsign.as_deref().unwrap_or("")
    }
}

/// A row of `stops.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GtfsStop {
    pub stop_id: String,
    #[serde(default)]
    pub stop_code: Option<String>,
    pub stop_name: String,
}

impl GtfsStop {
    pub fn code_or_default(&self) -> &str {
        self.stop_code.as_deref().unwrap_or("")
    }
}

/// A row of `calendar.txt`. Day-of-week columns are the host's business and
/// are not read here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GtfsCalendar {
    pub service_id: String,
    #[serde(deserialize_with = "super::date::deserialize")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "super::date::deserialize")]
    pub end_date: NaiveDate,
}

/// A row of `calendar_dates.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GtfsCalendarDate {
    pub service_id: String,
    #[serde(deserialize_with = "super::date::deserialize")]
    pub date: NaiveDate,
    /// 1 = service added, 2 = service removed.
    pub exception_type: u8,
}
