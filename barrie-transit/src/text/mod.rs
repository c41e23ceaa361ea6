//! Free-text label normalization.
//!
//! Each transform is a pure `&str -> String` function, idempotent on its
//! own. The agency rules compose them in a fixed order for headsigns and
//! stop names. Matching is case-insensitive and respects word boundaries;
//! empty input gives empty output.

mod label;
mod numbers;
mod street;
mod words;

pub use label::{BOUND_ABBREVIATIONS, DEFAULT_ACRONYMS, clean_label, clean_label_keeping};
pub use numbers::{clean_bounds, clean_numbers};
pub use street::clean_street_types;
pub use words::{keep_to_remove_via, replace_and, replace_at, strip_trailing_entrance, upcase_acronym};
