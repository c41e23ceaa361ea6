//! State scoped to one conversion run.

use std::collections::HashSet;

use crate::domain::Direction;

/// The two route 11 terminals whose direction the feed does not publish
/// consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalSlot {
    PkPl,
    PriscillasPlace,
}

impl TerminalSlot {
    /// The terminal at the other end of the route.
    pub fn paired(self) -> Self {
        match self {
            TerminalSlot::PkPl => TerminalSlot::PriscillasPlace,
            TerminalSlot::PriscillasPlace => TerminalSlot::PkPl,
        }
    }
}

/// Context for a single conversion run.
///
/// Holds the useful-service set the host computed before the run (if it
/// computed one) and the route 11 direction bindings discovered while trips
/// are processed. Create a fresh one per run; it is never shared.
#[derive(Debug, Clone, Default)]
pub struct ConversionRun {
    useful_service_ids: Option<HashSet<String>>,
    pk_pl: Option<Direction>,
    priscillas_place: Option<Direction>,
}

impl ConversionRun {
    /// A run without a service filter: nothing is excluded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A run that keeps only rows whose service is in `service_ids`.
    pub fn with_useful_services<I, S>(service_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            useful_service_ids: Some(service_ids.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn useful_service_ids(&self) -> Option<&HashSet<String>> {
        self.useful_service_ids.as_ref()
    }

    /// True when a filter is set and it excludes `service_id`.
    pub fn is_useless_service(&self, service_id: &str) -> bool {
        self.useful_service_ids
            .as_ref()
            .is_some_and(|ids| !ids.contains(service_id))
    }

    /// True when a filter is set and it keeps nothing.
    pub fn has_no_useful_services(&self) -> bool {
        self.useful_service_ids
            .as_ref()
            .is_some_and(HashSet::is_empty)
    }

    /// The direction bound to a route 11 terminal so far.
    pub fn slot(&self, slot: TerminalSlot) -> Option<Direction> {
        match slot {
            TerminalSlot::PkPl => self.pk_pl,
            TerminalSlot::PriscillasPlace => self.priscillas_place,
        }
    }

    pub(crate) fn bind_slot(&mut self, slot: TerminalSlot, direction: Direction) {
        match slot {
            TerminalSlot::PkPl => self.pk_pl = Some(direction),
            TerminalSlot::PriscillasPlace => self.priscillas_place = Some(direction),
        }
    }
}
