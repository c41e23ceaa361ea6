//! Whitespace, punctuation and capitalization cleanup.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Acronyms written in capitals whatever case the feed uses.
pub const DEFAULT_ACRONYMS: &[&str] = &["DBT", "GC", "GO", "RVH"];

/// Short forms produced by [`clean_bounds`](super::clean_bounds). Always kept
/// in capitals so that the bound cleanup survives label cleaning.
pub const BOUND_ABBREVIATIONS: &[&str] = &["NB", "SB", "EB", "WB"];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref SPACE_BEFORE_PUNCTUATION: Regex = Regex::new(r"\s+([,.!?])").unwrap();
    // `.` is left out: a space after it would split abbreviations like `G.C.`
    static ref MISSING_SPACE_AFTER_PUNCTUATION: Regex =
        Regex::new(r"([,!?])([^\s,.!?])").unwrap();
    static ref WORD: Regex = Regex::new(r"\b\p{L}[\p{L}']*").unwrap();
}

/// Clean a display label, keeping [`DEFAULT_ACRONYMS`] in capitals.
///
/// # Examples
///
/// ```
/// use barrie_transit::text::clean_label;
///
/// assert_eq!(clean_label("  BAYFIELD   st ,north"), "Bayfield St, North");
/// assert_eq!(clean_label("rvh main entrance"), "RVH Main Entrance");
/// assert_eq!(clean_label("A G.C."), "A G.C.");
/// ```
pub fn clean_label(s: &str) -> String {
    clean_label_keeping(s, DEFAULT_ACRONYMS)
}

/// Clean a display label:
///
/// - trim and collapse whitespace runs to one space;
/// - drop spaces before `,` `.` `!` `?` and put one space after `,` `!` `?`,
///   except inside digit groups such as `1,000`;
/// - capitalize every word, lowercasing the rest of words written in
///   capitals, except `acronyms` and [`BOUND_ABBREVIATIONS`], which are
///   written in capitals.
pub fn clean_label_keeping(s: &str, acronyms: &[&str]) -> String {
    let s = WHITESPACE.replace_all(s.trim(), " ");
    let s = SPACE_BEFORE_PUNCTUATION.replace_all(&s, "$1");
    let s = MISSING_SPACE_AFTER_PUNCTUATION.replace_all(&s, |caps: &Captures| {
        let (Some(all), Some(next)) = (caps.get(0), caps[2].chars().next()) else {
            return caps[0].to_string();
        };
        let previous = s[..all.start()].chars().next_back();
        let digit_group = &caps[1] == ","
            && next.is_ascii_digit()
            && previous.is_some_and(|c| c.is_ascii_digit());
        if digit_group {
            caps[0].to_string()
        } else {
            format!("{} {}", &caps[1], &caps[2])
        }
    });
    WORD.replace_all(s.trim(), |caps: &Captures| recase(&caps[0], acronyms))
        .into_owned()
}

fn recase(word: &str, acronyms: &[&str]) -> String {
    let keep_upper = acronyms
        .iter()
        .chain(BOUND_ABBREVIATIONS)
        .any(|a| a.eq_ignore_ascii_case(word));
    if keep_upper {
        return word.to_uppercase();
    }

    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    let shouting =
        rest.chars().any(char::is_alphabetic) && !rest.chars().any(char::is_lowercase);

    let mut out = String::with_capacity(word.len());
    out.extend(first.to_uppercase());
    if shouting {
        out.push_str(&rest.to_lowercase());
    } else {
        out.push_str(rest);
    }
    out
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn idempotent(s in "[A-Za-zÉéÔô0-9 ,.!?'/&\t-]{0,40}") {
            let once = clean_label(&s);
            prop_assert_eq!(clean_label(&once), once);
        }

        #[test]
        fn trimmed_and_single_spaced(s in "[A-Za-z ,.]{0,40}") {
            let out = clean_label(&s);
            prop_assert_eq!(out.trim(), out.as_str());
            prop_assert!(!out.contains("  "));
        }
    }
}
