//! Decision points the host pipeline calls while converting a feed.

use crate::domain::{HexColor, NormalizedRoute, NormalizedStop, NormalizedTrip, parse_stop_code};
use crate::gtfs::{GtfsCalendar, GtfsCalendarDate, GtfsRoute, GtfsStop, GtfsTrip, RouteType};
use crate::text::clean_label;

use super::error::AgencyError;
use super::run::ConversionRun;
use super::trips::feed_trip;

/// Per-agency decisions, called once per GTFS row.
///
/// Provided methods implement the generic behaviour: ids are taken verbatim
/// from digit-only codes, feed colors pass through, labels only get
/// [`clean_label`], nothing is excluded and duplicate headsigns cannot be
/// merged. Agencies override what their feed needs.
pub trait AgencyTools {
    fn agency_color(&self) -> HexColor;

    fn agency_route_type(&self) -> RouteType;

    fn route_id(&self, route: &GtfsRoute) -> Result<u64, AgencyError> {
        let short_name = route.route_short_name.trim();
        if short_name.is_empty() || !short_name.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AgencyError::InvalidRouteName {
                route: route.clone(),
            });
        }
        short_name
            .parse()
            .map_err(|_| AgencyError::InvalidRouteName {
                route: route.clone(),
            })
    }

    fn route_short_name(&self, route: &GtfsRoute) -> Result<String, AgencyError> {
        Ok(route.route_short_name.trim().to_string())
    }

    fn route_long_name(&self, route: &GtfsRoute) -> String {
        clean_label(route.long_name_or_default())
    }

    /// The feed color, or the agency color when the feed has none.
    fn route_color(&self, route: &GtfsRoute) -> Result<HexColor, AgencyError> {
        match route.color() {
            Some(color) => HexColor::parse(color).map_err(|_| AgencyError::InvalidRouteColor {
                route: route.clone(),
            }),
            None => Ok(self.agency_color()),
        }
    }

    fn normalize_route(&self, route: &GtfsRoute) -> Result<NormalizedRoute, AgencyError> {
        let long_name = self.route_long_name(route);
        if long_name.is_empty() {
            return Err(AgencyError::EmptyRouteLongName {
                route: route.clone(),
            });
        }
        Ok(NormalizedRoute {
            id: self.route_id(route)?,
            short_name: self.route_short_name(route)?,
            long_name,
            color: self.route_color(route)?,
        })
    }

    /// Pick one long name for two GTFS routes that map to the same id.
    fn merge_route_long_name(
        &self,
        route: &NormalizedRoute,
        other: &NormalizedRoute,
    ) -> Result<String, AgencyError> {
        merge_by_common_prefix(route, other)
    }

    /// Decide the headsign and direction of a trip.
    fn trip_headsign(
        &self,
        _run: &mut ConversionRun,
        route: &GtfsRoute,
        trip: &GtfsTrip,
    ) -> Result<NormalizedTrip, AgencyError> {
        let headsign = self.clean_trip_headsign(trip.headsign_or_default());
        feed_trip(self.route_id(route)?, headsign, trip)
    }

    /// Pick one headsign for two trips sharing a route and direction.
    fn merge_headsign(
        &self,
        trip: &NormalizedTrip,
        other: &NormalizedTrip,
    ) -> Result<String, AgencyError> {
        Err(AgencyError::UnmergeableHeadsigns {
            route_id: trip.route_id,
            headsign: trip.headsign.clone(),
            other: other.headsign.clone(),
        })
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        clean_label(headsign)
    }

    fn clean_stop_name(&self, name: &str) -> String {
        clean_label(name)
    }

    fn stop_id(&self, stop: &GtfsStop) -> Result<u64, AgencyError> {
        parse_stop_code(stop.code_or_default(), &[]).ok_or_else(|| {
            AgencyError::UnknownStopPrefix {
                stop: stop.clone(),
            }
        })
    }

    fn normalize_stop(&self, stop: &GtfsStop) -> Result<NormalizedStop, AgencyError> {
        let id = self.stop_id(stop)?;
        let name = self.clean_stop_name(&stop.stop_name);
        if name.is_empty() {
            return Err(AgencyError::EmptyStopName { stop: stop.clone() });
        }
        Ok(NormalizedStop { id, name })
    }

    /// Whether rows outside the run's useful services are dropped.
    fn default_exclude(&self) -> bool {
        false
    }

    /// Whether the whole feed should be skipped.
    fn excluding_all(&self, _run: &ConversionRun) -> bool {
        false
    }

    fn exclude_calendar(&self, run: &ConversionRun, calendar: &GtfsCalendar) -> bool {
        self.default_exclude() && run.is_useless_service(&calendar.service_id)
    }

    fn exclude_calendar_date(&self, run: &ConversionRun, date: &GtfsCalendarDate) -> bool {
        self.default_exclude() && run.is_useless_service(&date.service_id)
    }

    fn exclude_trip(&self, run: &ConversionRun, trip: &GtfsTrip) -> bool {
        self.default_exclude() && run.is_useless_service(&trip.service_id)
    }
}

/// The longest prefix shared by `a` and `b`, on char boundaries.
pub fn longest_common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let end = a
        .char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i);
    &a[..end]
}

/// Keep the trimmed common prefix of both long names. Fails when they share
/// nothing.
pub(crate) fn merge_by_common_prefix(
    route: &NormalizedRoute,
    other: &NormalizedRoute,
) -> Result<String, AgencyError> {
    let prefix = longest_common_prefix(&route.long_name, &other.long_name).trim();
    if prefix.is_empty() {
        return Err(AgencyError::UnmergeableRouteLongNames {
            route: route.clone(),
            other: other.clone(),
        });
    }
    Ok(prefix.to_string())
}
