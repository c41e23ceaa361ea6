//! Street type abbreviations.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Long street-type words and the short form the app displays.
const STREET_TYPES: &[(&str, &str)] = &[
    ("Avenue", "Ave"),
    ("Boulevard", "Blvd"),
    ("Centre", "Ctr"),
    ("Circle", "Cir"),
    ("Court", "Ct"),
    ("Crescent", "Cres"),
    ("Drive", "Dr"),
    ("Gardens", "Gdns"),
    ("Heights", "Hts"),
    ("Highway", "Hwy"),
    ("Lane", "Ln"),
    ("Park", "Pk"),
    ("Parkway", "Pkwy"),
    ("Place", "Pl"),
    ("Road", "Rd"),
    ("Square", "Sq"),
    ("Street", "St"),
    ("Terrace", "Terr"),
    ("Trail", "Trl"),
];

lazy_static! {
    static ref STREET_TYPE: Regex = {
        let words: Vec<&str> = STREET_TYPES.iter().map(|(long, _)| *long).collect();
        Regex::new(&format!(r"(?i)\b({})\b", words.join("|"))).unwrap()
    };
}

/// Replace long street-type words with their short forms, e.g.
/// `Bayfield Street` becomes `Bayfield St`.
pub fn clean_street_types(s: &str) -> String {
    STREET_TYPE
        .replace_all(s, |caps: &Captures| {
            let word = &caps[1];
            STREET_TYPES
                .iter()
                .find(|(long, _)| long.eq_ignore_ascii_case(word))
                .map_or_else(|| word.to_string(), |(_, short)| (*short).to_string())
        })
        .into_owned()
}
