//! Word-level replacements used on headsigns and stop names.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref AT: Regex = Regex::new(r"(?i)\s+at\s+").unwrap();
    static ref AND: Regex = Regex::new(r"(?i)\s+and\s+").unwrap();
    static ref WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
    static ref UP_TO_LAST_TO: Regex = Regex::new(r"(?i)^.*\sto\s+").unwrap();
    static ref TRAILING_VIA: Regex = Regex::new(r"(?i)\s+via\s.*$").unwrap();
    static ref TRAILING_ENTRANCE: Regex = Regex::new(r"(?i)\s+\S+\s+entrance\s*$").unwrap();
}

/// `Yonge at Bayfield` becomes `Yonge / Bayfield`.
pub fn replace_at(s: &str) -> String {
    AT.replace_all(s, " / ").into_owned()
}

/// `Bayfield and Cundles` becomes `Bayfield & Cundles`.
pub fn replace_and(s: &str) -> String {
    AND.replace_all(s, " & ").into_owned()
}

/// Write every whole-word occurrence of `acronym` in capitals.
pub fn upcase_acronym(s: &str, acronym: &str) -> String {
    WORD.replace_all(s, |caps: &Captures| {
        let word = &caps[0];
        if word.eq_ignore_ascii_case(acronym) {
            word.to_uppercase()
        } else {
            word.to_string()
        }
    })
    .into_owned()
}

/// Keep only the destination of a `<origin> to <destination>` headsign and
/// drop any trailing `via ...` part.
///
/// # Examples
///
/// ```
/// use barrie_transit::text::keep_to_remove_via;
///
/// assert_eq!(keep_to_remove_via("Downtown to Allandale via Bayfield"), "Allandale");
/// assert_eq!(keep_to_remove_via("Georgian College"), "Georgian College");
/// ```
pub fn keep_to_remove_via(s: &str) -> String {
    let destination = UP_TO_LAST_TO.replace(s, "");
    // Nothing after the last `to`: keep the whole headsign.
    let destination = if destination.trim().is_empty() {
        s
    } else {
        destination.as_ref()
    };
    TRAILING_VIA.replace(destination, "").into_owned()
}

/// Drop a trailing `<word> Entrance`, e.g. `RVH Main Entrance` becomes `RVH`.
pub fn strip_trailing_entrance(s: &str) -> String {
    TRAILING_ENTRANCE.replace(s, "").into_owned()
}
