//! Binary trip direction.

use std::fmt;

use serde::{Serialize, Serializer};

/// A GTFS `direction_id`.
///
/// The two values are opaque: they only distinguish the two directions of a
/// route. Serializes as `0` or `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Zero,
    One,
}

impl Direction {
    /// Interpret a raw GTFS direction bit. Anything but 0 or 1 is rejected.
    pub fn from_gtfs(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Direction::Zero),
            1 => Some(Direction::One),
            _ => None,
        }
    }

    pub fn as_gtfs(self) -> u8 {
        match self {
            Direction::Zero => 0,
            Direction::One => 1,
        }
    }

    /// The other direction of the same route.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Zero => Direction::One,
            Direction::One => Direction::Zero,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_gtfs())
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_gtfs())
    }
}
