//! Feed snapshots read from JSON.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::gtfs::{GtfsCalendar, GtfsCalendarDate, GtfsRoute, GtfsStop, GtfsTrip};

/// The GTFS tables the agency rules look at, plus the host's useful-service
/// set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedSnapshot {
    #[serde(default)]
    pub routes: Vec<GtfsRoute>,
    #[serde(default)]
    pub trips: Vec<GtfsTrip>,
    #[serde(default)]
    pub stops: Vec<GtfsStop>,
    #[serde(default)]
    pub calendars: Vec<GtfsCalendar>,
    #[serde(default)]
    pub calendar_dates: Vec<GtfsCalendarDate>,
    /// Services worth keeping. `None` keeps everything.
    #[serde(default)]
    pub useful_service_ids: Option<Vec<String>>,
}

/// Errors from reading a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn read_snapshot(path: &Path) -> Result<FeedSnapshot, SnapshotError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "routes": [{{"route_id": "3A", "route_short_name": "3A", "route_long_name": "BAYFIELD"}}],
                "stops": [{{"stop_id": "1", "stop_code": "AG 12", "stop_name": "Allandale GO"}}],
                "useful_service_ids": ["WKDY"]
            }}"#
        )
        .unwrap();

        let snapshot = read_snapshot(file.path()).unwrap();
        assert_eq!(snapshot.routes.len(), 1);
        assert_eq!(snapshot.stops[0].code_or_default(), "AG 12");
        assert!(snapshot.trips.is_empty());
        assert_eq!(snapshot.useful_service_ids, Some(vec!["WKDY".to_string()]));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_snapshot(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"routes\": [{{}}]}}").unwrap();

        let err = read_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, SnapshotError::Json { .. }));
    }
}
