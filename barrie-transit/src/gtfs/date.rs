//! GTFS service dates (`YYYYMMDD`).

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// `chrono` format string for GTFS service dates.
pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

/// Parse a GTFS service date such as `20240315`.
pub fn parse_gtfs_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s.trim(), GTFS_DATE_FORMAT)
}

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_gtfs_date(&raw).map_err(|e| serde::de::Error::custom(format!("{raw:?}: {e}")))
}
