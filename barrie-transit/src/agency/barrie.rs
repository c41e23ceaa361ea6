//! Barrie Transit rules.

use tracing::debug;

use crate::domain::{HexColor, NormalizedRoute, NormalizedTrip, RouteShortName, parse_stop_code};
use crate::gtfs::{GtfsRoute, GtfsStop, GtfsTrip, RouteType};
use crate::text::{clean_label_keeping, clean_street_types};

use super::config::AgencyConfig;
use super::error::AgencyError;
use super::merge::merged_headsign;
use super::run::ConversionRun;
use super::tools::{AgencyTools, merge_by_common_prefix};
use super::trips::{
    ROUTE_11, clean_stop_name, clean_trip_headsign, feed_trip, lettered_direction, route_11_trip,
};

/// Route 100 variants carry different long names; the app shows this one.
const GEORGIAN_EXPRESS: (u64, &str) = (100, "Georgian Express");

/// The Barrie Transit bus policy.
///
/// # Examples
///
/// ```
/// use barrie_transit::agency::{AgencyTools, BarrieTransit};
/// use barrie_transit::gtfs::GtfsRoute;
///
/// let barrie = BarrieTransit::default();
/// let route = GtfsRoute {
///     route_id: "3A".into(),
///     agency_id: None,
///     route_short_name: "3A".into(),
///     route_long_name: Some("BAYFIELD STREET".into()),
///     route_color: None,
/// };
/// let normalized = barrie.normalize_route(&route).unwrap();
/// assert_eq!(normalized.id, 3);
/// assert_eq!(normalized.short_name, "3");
/// assert_eq!(normalized.long_name, "Bayfield St");
/// assert_eq!(normalized.color.as_str(), "0089CF");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BarrieTransit {
    config: AgencyConfig,
}

impl BarrieTransit {
    pub fn new(config: AgencyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AgencyConfig {
        &self.config
    }

    fn short_name(&self, route: &GtfsRoute) -> Result<RouteShortName, AgencyError> {
        RouteShortName::parse(&route.route_short_name).ok_or_else(|| {
            AgencyError::InvalidRouteName {
                route: route.clone(),
            }
        })
    }
}

/// Has at least one letter and no lowercase ones.
fn is_uppercase_only(s: &str) -> bool {
    s.chars().any(char::is_alphabetic) && !s.chars().any(char::is_lowercase)
}

impl AgencyTools for BarrieTransit {
    fn agency_color(&self) -> HexColor {
        self.config.agency_color
    }

    fn agency_route_type(&self) -> RouteType {
        self.config.route_type
    }

    /// Lettered variants collapse onto their route number.
    fn route_id(&self, route: &GtfsRoute) -> Result<u64, AgencyError> {
        Ok(self.short_name(route)?.number())
    }

    fn route_short_name(&self, route: &GtfsRoute) -> Result<String, AgencyError> {
        Ok(self.short_name(route)?.digits().to_string())
    }

    fn route_long_name(&self, route: &GtfsRoute) -> String {
        let name = route.long_name_or_default();
        let name = if is_uppercase_only(name) {
            name.to_lowercase()
        } else {
            name.to_string()
        };
        clean_label_keeping(&clean_street_types(&name), self.config.acronyms)
    }

    fn route_color(&self, route: &GtfsRoute) -> Result<HexColor, AgencyError> {
        if let Some(color) = route.color() {
            return HexColor::parse(color).map_err(|_| AgencyError::InvalidRouteColor {
                route: route.clone(),
            });
        }
        RouteShortName::parse(&route.route_short_name)
            .and_then(|rsn| self.config.route_color(rsn.number()))
            .ok_or_else(|| AgencyError::MissingRouteColor {
                route: route.clone(),
            })
    }

    fn merge_route_long_name(
        &self,
        route: &NormalizedRoute,
        other: &NormalizedRoute,
    ) -> Result<String, AgencyError> {
        let (id, name) = GEORGIAN_EXPRESS;
        if route.id == id && other.id == id {
            debug!(route_id = id, long_name = name, "Merged route long names");
            return Ok(name.to_string());
        }
        merge_by_common_prefix(route, other)
    }

    fn trip_headsign(
        &self,
        run: &mut ConversionRun,
        route: &GtfsRoute,
        trip: &GtfsTrip,
    ) -> Result<NormalizedTrip, AgencyError> {
        let rsn = self.short_name(route)?;
        if rsn.number() == ROUTE_11 {
            return route_11_trip(&self.config, run, trip);
        }

        let Some(letter) = rsn.suffix() else {
            let headsign = self.clean_trip_headsign(trip.headsign_or_default());
            return feed_trip(rsn.number(), headsign, trip);
        };

        let direction =
            lettered_direction(letter).ok_or_else(|| AgencyError::UnexpectedRouteSuffix {
                suffix: letter,
                route: route.clone(),
                trip: trip.clone(),
            })?;
        let headsign = format!("{letter} {}", self.route_long_name(route));

        Ok(NormalizedTrip {
            route_id: rsn.number(),
            headsign: self.clean_trip_headsign(&headsign),
            direction,
        })
    }

    fn merge_headsign(
        &self,
        trip: &NormalizedTrip,
        other: &NormalizedTrip,
    ) -> Result<String, AgencyError> {
        let merged = merged_headsign(trip.route_id, &trip.headsign, &other.headsign).ok_or_else(
            || AgencyError::UnmergeableHeadsigns {
                route_id: trip.route_id,
                headsign: trip.headsign.clone(),
                other: other.headsign.clone(),
            },
        )?;
        debug!(
            route_id = trip.route_id,
            direction = %trip.direction,
            headsign = %trip.headsign,
            other = %other.headsign,
            merged,
            "Merged headsigns"
        );
        Ok(merged.to_string())
    }

    fn clean_trip_headsign(&self, headsign: &str) -> String {
        clean_trip_headsign(headsign, self.config.acronyms)
    }

    fn clean_stop_name(&self, name: &str) -> String {
        clean_stop_name(name, self.config.acronyms)
    }

    fn stop_id(&self, stop: &GtfsStop) -> Result<u64, AgencyError> {
        parse_stop_code(stop.code_or_default(), self.config.stop_prefixes).ok_or_else(|| {
            AgencyError::UnknownStopPrefix {
                stop: stop.clone(),
            }
        })
    }

    fn default_exclude(&self) -> bool {
        true
    }

    fn excluding_all(&self, run: &ConversionRun) -> bool {
        run.has_no_useful_services()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Direction;
    use proptest::prelude::*;

    fn route(short: String) -> GtfsRoute {
        GtfsRoute {
            route_id: short.clone(),
            agency_id: None,
            route_short_name: short,
            route_long_name: Some("Bayfield".into()),
            route_color: None,
        }
    }

    fn trip(direction: Option<u8>) -> GtfsTrip {
        GtfsTrip {
            route_id: "r".into(),
            service_id: "WKDY".into(),
            trip_id: "t".into(),
            trip_headsign: Some("Bayfield".into()),
            direction_id: direction,
        }
    }

    proptest! {
        #[test]
        fn route_id_is_digit_prefix(n in 0u64..100_000, suffix in "[ABCD]?") {
            let barrie = BarrieTransit::default();
            let r = route(format!("{n}{suffix}"));
            prop_assert_eq!(barrie.route_id(&r).unwrap(), n);
            prop_assert_eq!(barrie.route_short_name(&r).unwrap(), n.to_string());
        }

        #[test]
        fn direction_follows_suffix(
            n in (0u64..1_000).prop_filter("route 11 has its own table", |n| *n != 11),
            suffix in "[ABCD]",
            raw in proptest::option::of(0u8..2),
        ) {
            let barrie = BarrieTransit::default();
            let mut run = ConversionRun::new();
            let t = barrie.trip_headsign(&mut run, &route(format!("{n}{suffix}")), &trip(raw)).unwrap();
            let expected = if suffix == "A" || suffix == "C" { Direction::Zero } else { Direction::One };
            prop_assert_eq!(t.direction, expected);
        }

        #[test]
        fn route_color_is_deterministic(short in "(1|2|3|4|5|6|7|8|11|90|100)[ABCD]?") {
            let barrie = BarrieTransit::default();
            let first = barrie.route_color(&route(short.clone())).unwrap();
            let second = barrie.route_color(&route(short)).unwrap();
            prop_assert_eq!(first, second);
            prop_assert_eq!(first.as_str().len(), 6);
        }
    }
}
