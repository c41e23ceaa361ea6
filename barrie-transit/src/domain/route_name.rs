//! Route short name parsing.

use std::fmt;

/// Returns the first maximal run of ASCII digits in `s`.
pub fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// A GTFS route short name split into its route number and variant suffix.
///
/// Barrie publishes each physical route as two GTFS routes, `3A`/`3B` or
/// `100A`..`100D`, one per direction pair. Both halves share the number.
///
/// # Examples
///
/// ```
/// use barrie_transit::domain::RouteShortName;
///
/// let rsn = RouteShortName::parse("100B").unwrap();
/// assert_eq!(rsn.number(), 100);
/// assert_eq!(rsn.digits(), "100");
/// assert_eq!(rsn.suffix(), Some('B'));
///
/// assert_eq!(RouteShortName::parse("8").unwrap().suffix(), None);
/// assert!(RouteShortName::parse("Express").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RouteShortName {
    number: u64,
    digits: String,
    suffix: Option<char>,
}

impl RouteShortName {
    /// Parse a short name. Returns `None` when there is no digit run or the
    /// run does not fit in a `u64`.
    ///
    /// The suffix is the last character of the trimmed name when that
    /// character is not a digit. It is not checked against the known
    /// variant letters here.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let digits = first_digit_run(trimmed)?;
        let number = digits.parse().ok()?;
        let suffix = trimmed.chars().last().filter(|c| !c.is_ascii_digit());

        Some(RouteShortName {
            number,
            digits: digits.to_string(),
            suffix,
        })
    }

    /// The numeric route id shared by every variant of the route.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// The digit run as written in the feed.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn suffix(&self) -> Option<char> {
        self.suffix
    }
}

impl fmt::Debug for RouteShortName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suffix {
            Some(s) => write!(f, "RouteShortName({}{})", self.digits, s),
            None => write!(f, "RouteShortName({})", self.digits),
        }
    }
}
