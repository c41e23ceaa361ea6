//! Row normalization and deduplication.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;
use tracing::{debug, info};

use crate::agency::{AgencyError, AgencyTools, ConversionRun};
use crate::domain::{Direction, HexColor, NormalizedRoute, NormalizedStop, NormalizedTrip};
use crate::gtfs::GtfsRoute;

use super::snapshot::FeedSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgencySummary {
    pub color: HexColor,
    /// GTFS `route_type` value.
    pub route_type: u8,
}

/// What the host writes out: one route per numeric id, one trip pattern per
/// route and direction, one stop per numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedFeed {
    pub agency: AgencySummary,
    pub routes: Vec<NormalizedRoute>,
    pub trips: Vec<NormalizedTrip>,
    pub stops: Vec<NormalizedStop>,
    /// Services kept from `calendar.txt` and `calendar_dates.txt`.
    pub service_ids: BTreeSet<String>,
}

/// Run the agency rules over a snapshot.
///
/// Fails on the first rule error; the run is abandoned rather than written
/// with a wrong value.
pub fn convert<A: AgencyTools>(
    agency: &A,
    feed: &FeedSnapshot,
) -> Result<NormalizedFeed, AgencyError> {
    let mut run = match &feed.useful_service_ids {
        Some(ids) => ConversionRun::with_useful_services(ids.iter().cloned()),
        None => ConversionRun::new(),
    };

    let mut normalized = NormalizedFeed {
        agency: AgencySummary {
            color: agency.agency_color(),
            route_type: agency.agency_route_type().as_gtfs(),
        },
        routes: Vec::new(),
        trips: Vec::new(),
        stops: Vec::new(),
        service_ids: BTreeSet::new(),
    };

    if agency.excluding_all(&run) {
        info!("No useful services, excluding all");
        return Ok(normalized);
    }

    normalized.service_ids = feed
        .calendars
        .iter()
        .filter(|c| !agency.exclude_calendar(&run, c))
        .map(|c| c.service_id.clone())
        .chain(
            feed.calendar_dates
                .iter()
                .filter(|d| !agency.exclude_calendar_date(&run, d))
                .map(|d| d.service_id.clone()),
        )
        .collect();

    normalized.routes = convert_routes(agency, &feed.routes)?;
    normalized.trips = convert_trips(agency, &mut run, feed)?;
    normalized.stops = convert_stops(agency, feed)?;

    info!(
        routes = normalized.routes.len(),
        trips = normalized.trips.len(),
        stops = normalized.stops.len(),
        services = normalized.service_ids.len(),
        "Converted feed"
    );

    Ok(normalized)
}

fn convert_routes<A: AgencyTools>(
    agency: &A,
    routes: &[GtfsRoute],
) -> Result<Vec<NormalizedRoute>, AgencyError> {
    let mut by_id: BTreeMap<u64, NormalizedRoute> = BTreeMap::new();

    for route in routes {
        let route = agency.normalize_route(route)?;
        match by_id.entry(route.id) {
            Entry::Vacant(e) => {
                e.insert(route);
            }
            Entry::Occupied(mut e) => {
                if e.get().long_name != route.long_name {
                    let merged = agency.merge_route_long_name(e.get(), &route)?;
                    debug!(route_id = route.id, long_name = %merged, "Merged route variants");
                    e.get_mut().long_name = merged;
                }
            }
        }
    }

    Ok(by_id.into_values().collect())
}

fn convert_trips<A: AgencyTools>(
    agency: &A,
    run: &mut ConversionRun,
    feed: &FeedSnapshot,
) -> Result<Vec<NormalizedTrip>, AgencyError> {
    let routes: HashMap<&str, &GtfsRoute> = feed
        .routes
        .iter()
        .map(|r| (r.route_id.as_str(), r))
        .collect();

    let mut patterns: BTreeMap<(u64, Direction), NormalizedTrip> = BTreeMap::new();
    let mut excluded = 0usize;

    for trip in &feed.trips {
        if agency.exclude_trip(run, trip) {
            excluded += 1;
            continue;
        }

        let route = routes
            .get(trip.route_id.as_str())
            .ok_or_else(|| AgencyError::UnknownRoute { trip: trip.clone() })?;
        let trip = agency.trip_headsign(run, route, trip)?;

        match patterns.entry((trip.route_id, trip.direction)) {
            Entry::Vacant(e) => {
                e.insert(trip);
            }
            Entry::Occupied(mut e) => {
                if e.get().headsign != trip.headsign {
                    let merged = agency.merge_headsign(e.get(), &trip)?;
                    e.get_mut().headsign = merged;
                }
            }
        }
    }

    debug!(excluded, "Skipped trips outside useful services");

    Ok(patterns.into_values().collect())
}

fn convert_stops<A: AgencyTools>(
    agency: &A,
    feed: &FeedSnapshot,
) -> Result<Vec<NormalizedStop>, AgencyError> {
    let mut by_id: BTreeMap<u64, NormalizedStop> = BTreeMap::new();
    for stop in &feed.stops {
        let stop = agency.normalize_stop(stop)?;
        by_id.entry(stop.id).or_insert(stop);
    }
    Ok(by_id.into_values().collect())
}
