//! Day-title normalization.
//!
//! A title is comma-separated free text ("Mon, Wed-Fri", "Public Holiday",
//! "Sat-Mon").  Each chunk resolves to the *first* matching rule:
//!
//! 1. exact day name or 3-letter abbreviation → one weekday;
//! 2. exact special phrase ("public holiday" family) → special flag;
//! 3. `Day - Day` range (hyphen, en-dash, em-dash, or " to ") → inclusive
//!    expansion along the cyclic week order, wrapping when the end precedes
//!    the start;
//! 4. anything else → kept verbatim as an opaque title chunk.
//!
//! Total over arbitrary text — unrecognized chunks degrade to rule 4, and
//! no chunk can make parsing fail.

use std::collections::BTreeSet;

use vh_core::{Day, SpecialDay};

// ── Output ────────────────────────────────────────────────────────────────────

/// The normalized form of one day-title string.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DayTitle {
    /// Resolved weekdays in source order.  Duplicates are preserved — a
    /// title naming the same day twice contributes it twice.
    pub days: Vec<Day>,
    /// Special-day flags, in source order.
    pub special: Vec<SpecialDay>,
    /// Opaque chunks, deduplicated and sorted within this one title.
    pub raw_titles: BTreeSet<String>,
}

impl DayTitle {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.special.is_empty() && self.raw_titles.is_empty()
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Normalize a day-title string.  Never fails.
pub fn parse_day_title(title: &str) -> DayTitle {
    let mut out = DayTitle::default();
    for chunk in title.split(',') {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            continue;
        }
        let key = chunk.to_lowercase();
        if let Some(day) = Day::from_token(&key) {
            out.days.push(day);
        } else if let Some(special) = SpecialDay::from_phrase(&key) {
            out.special.push(special);
        } else if let Some((start, end)) = parse_day_range(&key) {
            out.days.extend(Day::range_inclusive(start, end));
        } else {
            out.raw_titles.insert(chunk.to_string());
        }
    }
    out
}

/// Match a `Day - Day` range at the start of an already-lowercased chunk.
///
/// Both endpoints must be alphabetic words of 3–9 letters that resolve to a
/// weekday (full name, abbreviation, or 3-letter prefix of a longer word).
/// A chunk that merely looks range-shaped but whose endpoints do not
/// resolve falls through to the opaque-title rule.
fn parse_day_range(key: &str) -> Option<(Day, Day)> {
    let key = key.replace(" to ", "-").replace(['–', '—'], "-");
    let (lhs, rest) = key.split_once('-')?;

    let lhs = lhs.trim();
    if !(3..=9).contains(&lhs.len()) || !lhs.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    // Right endpoint: the leading alphabetic word after the separator;
    // trailing text beyond it is ignored.
    let rest = rest.trim_start();
    let word_len = rest
        .bytes()
        .take(9)
        .take_while(|b| b.is_ascii_alphabetic())
        .count();
    if word_len < 3 {
        return None;
    }

    Some((resolve_day_word(lhs)?, resolve_day_word(&rest[..word_len])?))
}

/// Resolve a lowercased word to a weekday, falling back to its 3-letter
/// prefix ("satur" → Sat).
fn resolve_day_word(word: &str) -> Option<Day> {
    Day::from_token(word).or_else(|| Day::from_token(word.get(..3)?))
}
