//! Display color type.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color: {reason}")]
pub struct InvalidHexColor {
    reason: &'static str,
}

/// A six-hex-digit RGB color without the leading `#`, e.g. `336699`.
///
/// The digits are kept exactly as supplied, so feed colors pass through
/// unchanged.
///
/// # Examples
///
/// ```
/// use barrie_transit::domain::HexColor;
///
/// let blue = HexColor::parse("336699").unwrap();
/// assert_eq!(blue.as_str(), "336699");
///
/// assert!(HexColor::parse("#336699").is_err());
/// assert!(HexColor::parse("3369").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 6]);

impl HexColor {
    /// Parse a color. The input must be exactly 6 ASCII hex digits.
    pub fn parse(s: &str) -> Result<Self, InvalidHexColor> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidHexColor {
                reason: "must be exactly 6 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_hexdigit) {
            return Err(InvalidHexColor {
                reason: "must be hex digits 0-9, A-F",
            });
        }

        let mut digits = [0u8; 6];
        digits.copy_from_slice(bytes);
        Ok(HexColor(digits))
    }

    /// Build a color from a literal. Invalid input fails const evaluation, so
    /// use this for tables only.
    pub const fn from_static(s: &'static str) -> Self {
        let bytes = s.as_bytes();
        assert!(bytes.len() == 6, "color must be exactly 6 characters");

        let mut i = 0;
        while i < 6 {
            assert!(bytes[i].is_ascii_hexdigit(), "color must be hex digits");
            i += 1;
        }

        HexColor([bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5]])
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({})", self.as_str())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
