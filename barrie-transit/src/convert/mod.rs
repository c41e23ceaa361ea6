//! A minimal host: applies an [`AgencyTools`](crate::agency::AgencyTools)
//! value to an in-memory feed snapshot.
//!
//! This is the part of a GTFS converter that calls the agency rules: it
//! filters rows, normalizes them, and collapses duplicates, calling the merge
//! decision points when two rows map to the same route or trip pattern. ZIP
//! and CSV handling stay outside; the snapshot is plain JSON.

mod feed;
mod snapshot;

pub use feed::{AgencySummary, NormalizedFeed, convert};
pub use snapshot::{FeedSnapshot, SnapshotError, read_snapshot};
