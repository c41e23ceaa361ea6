//! Trip direction and headsign assignment.
//!
//! Barrie publishes every physical route as two GTFS routes (`3A`/`3B`,
//! `100A`..`100D`) whose `direction_id` values do not line up, so the feed's
//! direction bit cannot be trusted for lettered routes. The variant letter
//! decides instead. Route 11 is worse: its terminals flip direction between
//! feed releases, so directions are bound per run as terminals are seen.

use tracing::debug;

use crate::domain::{Direction, NormalizedTrip};
use crate::gtfs::GtfsTrip;
use crate::text::{
    clean_bounds, clean_label_keeping, clean_numbers, clean_street_types, keep_to_remove_via,
    replace_and, replace_at, strip_trailing_entrance, upcase_acronym,
};

use super::config::AgencyConfig;
use super::error::AgencyError;
use super::run::{ConversionRun, TerminalSlot};

pub(crate) const ROUTE_11: u64 = 11;

/// Clean a trip headsign for display.
///
/// # Examples
///
/// ```
/// use barrie_transit::agency::clean_trip_headsign;
/// use barrie_transit::text::DEFAULT_ACRONYMS;
///
/// assert_eq!(
///     clean_trip_headsign("Downtown to Allandale via Bayfield", DEFAULT_ACRONYMS),
///     "Allandale"
/// );
/// assert_eq!(clean_trip_headsign("B dbt", DEFAULT_ACRONYMS), "B DBT");
/// ```
pub fn clean_trip_headsign(headsign: &str, acronyms: &[&str]) -> String {
    let s = keep_to_remove_via(headsign);
    let s = strip_trailing_entrance(&s);
    let s = replace_and(&s);
    let s = clean_numbers(&s);
    let s = clean_bounds(&s);
    let s = upcase_acronym(&s, "dbt");
    let s = upcase_acronym(&s, "gc");
    let s = clean_street_types(&s);
    clean_label_keeping(&s, acronyms)
}

/// Clean a stop name for display: `Yonge at Bayfield Street` becomes
/// `Yonge / Bayfield St`.
pub fn clean_stop_name(name: &str, acronyms: &[&str]) -> String {
    let s = replace_at(name);
    let s = replace_and(&s);
    let s = clean_street_types(&s);
    clean_label_keeping(&s, acronyms)
}

pub(crate) fn feed_direction(trip: &GtfsTrip) -> Result<Direction, AgencyError> {
    trip.direction_id
        .and_then(Direction::from_gtfs)
        .ok_or_else(|| AgencyError::MissingDirection { trip: trip.clone() })
}

/// A trip that keeps the feed's direction bit and its own cleaned headsign.
pub(crate) fn feed_trip(
    route_id: u64,
    headsign: String,
    trip: &GtfsTrip,
) -> Result<NormalizedTrip, AgencyError> {
    if headsign.is_empty() {
        return Err(AgencyError::EmptyHeadsign { trip: trip.clone() });
    }
    Ok(NormalizedTrip {
        route_id,
        headsign,
        direction: feed_direction(trip)?,
    })
}

/// Direction of a lettered route variant: A and C run one way, B and D the
/// other.
pub(crate) fn lettered_direction(letter: char) -> Option<Direction> {
    match letter {
        'A' | 'C' => Some(Direction::Zero),
        'B' | 'D' => Some(Direction::One),
        _ => None,
    }
}

/// Route 11: map the feed headsign to its terminal and bind a direction.
pub(crate) fn route_11_trip(
    config: &AgencyConfig,
    run: &mut ConversionRun,
    trip: &GtfsTrip,
) -> Result<NormalizedTrip, AgencyError> {
    let known = config
        .route_11_headsign(trip.headsign_or_default().trim())
        .ok_or_else(|| AgencyError::UnexpectedHeadsign {
            route_id: ROUTE_11,
            trip: trip.clone(),
        })?;

    let direction = resolve_terminal_direction(run, known.slot, trip)?;

    Ok(NormalizedTrip {
        route_id: ROUTE_11,
        headsign: known.canonical.to_string(),
        direction,
    })
}

/// Reuse the slot's binding if there is one; otherwise take the opposite of
/// the paired terminal, or the feed bit when neither terminal is bound yet.
fn resolve_terminal_direction(
    run: &mut ConversionRun,
    slot: TerminalSlot,
    trip: &GtfsTrip,
) -> Result<Direction, AgencyError> {
    let direction = match (run.slot(slot), run.slot(slot.paired())) {
        (Some(bound), Some(paired)) if bound == paired => {
            return Err(AgencyError::InconsistentDirection {
                slot,
                bound,
                paired,
                trip: trip.clone(),
            });
        }
        (Some(bound), _) => bound,
        (None, Some(paired)) => paired.opposite(),
        (None, None) => feed_direction(trip)?,
    };

    if run.slot(slot).is_none() {
        debug!(
            ?slot,
            direction = %direction,
            trip_id = %trip.trip_id,
            "Bound route 11 terminal direction"
        );
        run.bind_slot(slot, direction);
    }

    Ok(direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::DEFAULT_ACRONYMS;

    fn trip(headsign: &str, direction: Option<u8>) -> GtfsTrip {
        GtfsTrip {
            route_id: "11".into(),
            service_id: "WKDY".into(),
            trip_id: format!("t-{headsign}"),
            trip_headsign: Some(headsign.into()),
            direction_id: direction,
        }
    }

    #[test]
    fn headsign_keeps_destination() {
        assert_eq!(
            clean_trip_headsign("Downtown to Allandale via Bayfield", DEFAULT_ACRONYMS),
            "Allandale"
        );
    }

    #[test]
    fn headsign_pipeline() {
        assert_eq!(
            clean_trip_headsign("A Bayfield Street", DEFAULT_ACRONYMS),
            "A Bayfield St"
        );
        assert_eq!(
            clean_trip_headsign("RVH Main Entrance", DEFAULT_ACRONYMS),
            "RVH"
        );
        assert_eq!(
            clean_trip_headsign("Bayfield and Cundles northbound", DEFAULT_ACRONYMS),
            "Bayfield & Cundles NB"
        );
        assert_eq!(
            clean_trip_headsign("C georgian college gc", DEFAULT_ACRONYMS),
            "C Georgian College GC"
        );
        assert_eq!(
            clean_trip_headsign("FIRST AVENUE", DEFAULT_ACRONYMS),
            "1st Ave"
        );
    }

    #[test]
    fn stop_name_pipeline() {
        assert_eq!(
            clean_stop_name("Yonge at Bayfield Street", DEFAULT_ACRONYMS),
            "Yonge / Bayfield St"
        );
        assert_eq!(
            clean_stop_name("DUNLOP AND MULCASTER", DEFAULT_ACRONYMS),
            "Dunlop & Mulcaster"
        );
        assert_eq!(
            clean_stop_name("Barrie South GO Station", DEFAULT_ACRONYMS),
            "Barrie South GO Station"
        );
    }

    #[test]
    fn lettered_directions() {
        assert_eq!(lettered_direction('A'), Some(Direction::Zero));
        assert_eq!(lettered_direction('C'), Some(Direction::Zero));
        assert_eq!(lettered_direction('B'), Some(Direction::One));
        assert_eq!(lettered_direction('D'), Some(Direction::One));
        assert_eq!(lettered_direction('E'), None);
        assert_eq!(lettered_direction('a'), None);
    }

    #[test]
    fn feed_direction_requires_a_bit() {
        assert_eq!(feed_direction(&trip("x", Some(0))).unwrap(), Direction::Zero);
        assert!(feed_direction(&trip("x", None)).is_err());
        assert!(feed_direction(&trip("x", Some(2))).is_err());
    }

    #[test]
    fn feed_trip_rejects_empty_headsign() {
        let err = feed_trip(4, String::new(), &trip("", Some(0))).unwrap_err();
        assert!(matches!(err, AgencyError::EmptyHeadsign { .. }));
    }

    #[test]
    fn route_11_first_terminal_takes_feed_bit() {
        let config = AgencyConfig::default();
        let mut run = ConversionRun::new();

        let t = route_11_trip(&config, &mut run, &trip("PP", Some(1))).unwrap();
        assert_eq!(t.route_id, 11);
        assert_eq!(t.headsign, "Pk Pl");
        assert_eq!(t.direction, Direction::One);
        assert_eq!(run.slot(TerminalSlot::PkPl), Some(Direction::One));
    }

    #[test]
    fn route_11_pair_gets_the_opposite() {
        let config = AgencyConfig::default();
        let mut run = ConversionRun::new();

        route_11_trip(&config, &mut run, &trip("Priscillas Place", Some(1))).unwrap();
        // The feed bit is ignored once the other terminal is bound.
        let t = route_11_trip(&config, &mut run, &trip("Allandale Rec", Some(1))).unwrap();
        assert_eq!(t.headsign, "Allandale Rec");
        assert_eq!(t.direction, Direction::Zero);
    }

    #[test]
    fn route_11_reuses_bound_slot() {
        let config = AgencyConfig::default();
        let mut run = ConversionRun::new();

        let first = route_11_trip(&config, &mut run, &trip("Priscillas Place", Some(0))).unwrap();
        let second = route_11_trip(&config, &mut run, &trip("A Rec to Lockhart", Some(1))).unwrap();
        assert_eq!(first.direction, Direction::Zero);
        assert_eq!(second.headsign, "Lockhart");
        assert_eq!(second.direction, Direction::Zero);
    }

    #[test]
    fn route_11_unknown_headsign() {
        let config = AgencyConfig::default();
        let mut run = ConversionRun::new();

        let err = route_11_trip(&config, &mut run, &trip("Downtown", Some(0))).unwrap_err();
        assert!(matches!(
            err,
            AgencyError::UnexpectedHeadsign { route_id: 11, .. }
        ));
    }

    #[test]
    fn route_11_needs_feed_bit_for_first_terminal() {
        let config = AgencyConfig::default();
        let mut run = ConversionRun::new();

        let err = route_11_trip(&config, &mut run, &trip("PP", None)).unwrap_err();
        assert!(matches!(err, AgencyError::MissingDirection { .. }));
        assert_eq!(run.slot(TerminalSlot::PkPl), None);
    }

    #[test]
    fn route_11_inconsistent_bindings() {
        let config = AgencyConfig::default();
        let mut run = ConversionRun::new();
        run.bind_slot(TerminalSlot::PkPl, Direction::Zero);
        run.bind_slot(TerminalSlot::PriscillasPlace, Direction::Zero);

        let err = route_11_trip(&config, &mut run, &trip("PP", Some(0))).unwrap_err();
        assert!(matches!(
            err,
            AgencyError::InconsistentDirection {
                slot: TerminalSlot::PkPl,
                ..
            }
        ));
    }
}
