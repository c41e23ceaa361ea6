//! Stop code to numeric stop id.

/// Derive a numeric stop id from a GTFS stop code.
///
/// A code of only digits is its own id. Otherwise the code must be one of
/// the `prefixes` followed by digits, and the id is the prefix offset plus
/// those digits. Returns `None` for anything else, including overflow.
///
/// # Examples
///
/// ```
/// use barrie_transit::domain::parse_stop_code;
///
/// let prefixes = [("AG ", 100_000)];
/// assert_eq!(parse_stop_code("247", &prefixes), Some(247));
/// assert_eq!(parse_stop_code("AG 12", &prefixes), Some(100_012));
/// assert_eq!(parse_stop_code("XY 12", &prefixes), None);
/// ```
pub fn parse_stop_code(code: &str, prefixes: &[(&str, u64)]) -> Option<u64> {
    let code = code.trim();
    if let Some(id) = parse_digits(code) {
        return Some(id);
    }

    prefixes.iter().find_map(|(prefix, offset)| {
        let rest = code.strip_prefix(prefix)?;
        offset.checked_add(parse_digits(rest)?)
    })
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
