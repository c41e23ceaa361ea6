//! Ordinals and travel directions.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

const ORDINAL_WORDS: &[(&str, &str)] = &[
    ("first", "1st"),
    ("second", "2nd"),
    ("third", "3rd"),
    ("fourth", "4th"),
    ("fifth", "5th"),
    ("sixth", "6th"),
    ("seventh", "7th"),
    ("eighth", "8th"),
    ("ninth", "9th"),
    ("tenth", "10th"),
];

lazy_static! {
    static ref ORDINAL_WORD: Regex = {
        let words: Vec<&str> = ORDINAL_WORDS.iter().map(|(word, _)| *word).collect();
        Regex::new(&format!(r"(?i)\b({})\b", words.join("|"))).unwrap()
    };
    static ref ORDINAL_SUFFIX: Regex = Regex::new(r"(?i)\b(\d+)(st|nd|rd|th)\b").unwrap();
    static ref BOUND: Regex = Regex::new(r"(?i)\b(north|south|east|west)\s*bound\b").unwrap();
}

/// Write ordinals as digits with a lowercase suffix: `First` and `1ST` both
/// become `1st`.
pub fn clean_numbers(s: &str) -> String {
    let s = ORDINAL_WORD.replace_all(s, |caps: &Captures| {
        let word = &caps[1];
        ORDINAL_WORDS
            .iter()
            .find(|(long, _)| long.eq_ignore_ascii_case(word))
            .map_or_else(|| word.to_string(), |(_, short)| (*short).to_string())
    });
    ORDINAL_SUFFIX
        .replace_all(&s, |caps: &Captures| {
            format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
        })
        .into_owned()
}

/// `Northbound` becomes `NB`, `west bound` becomes `WB`, and so on.
pub fn clean_bounds(s: &str) -> String {
    BOUND
        .replace_all(s, |caps: &Captures| {
            let initial = caps[1].chars().next().map(|c| c.to_ascii_uppercase());
            match initial {
                Some(c) => format!("{c}B"),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
