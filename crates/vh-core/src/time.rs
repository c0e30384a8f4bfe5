//! Minute-of-day time model.
//!
//! # Design
//!
//! Wall-clock times are represented as a minute-of-day integer in
//! `0..1440`.  Using an integer as the canonical unit means all schedule
//! arithmetic is exact and comparisons are O(1); day-boundary handling
//! (a block closing "after midnight") is expressed by the block's
//! `crosses_midnight` flag, never by values outside the range.
//!
//! The hour literal `24` is accepted on input and normalized to `0` — the
//! scraped corpus writes "17:00-24:00" for "until end of day".

use std::fmt;

/// Minutes in one day.  Evaluator wrap arithmetic adds this when a window
/// spans midnight.
pub const MINUTES_PER_DAY: u16 = 1_440;

/// A wall-clock time as a minute-of-day in `0..1440`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Construct from a raw minute count.
    ///
    /// # Panics
    /// Panics in debug mode if `minutes >= 1440`.
    #[inline]
    pub fn from_minutes(minutes: u16) -> TimeOfDay {
        debug_assert!(minutes < MINUTES_PER_DAY, "minute-of-day out of range");
        TimeOfDay(minutes)
    }

    /// Construct from hour and minute components.
    ///
    /// Hour `24` normalizes to `0` (end-of-day marker); hours above 24 or
    /// minutes above 59 are rejected.
    pub fn from_hm(hour: u8, minute: u8) -> Option<TimeOfDay> {
        if hour > 24 || minute > 59 {
            return None;
        }
        let hour = if hour == 24 { 0 } else { hour };
        Some(TimeOfDay(hour as u16 * 60 + minute as u16))
    }

    /// Parse an `H:MM` string: 1–2 digit hour in `0..=24`, exactly two
    /// minute digits in `00..=59`.  Anything else — including `26:00`-style
    /// out-of-range hours — is `None`.
    pub fn parse(text: &str) -> Option<TimeOfDay> {
        let (h, m) = text.split_once(':')?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return None;
        }
        if !h.bytes().all(|b| b.is_ascii_digit()) || !m.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // Two digits each: cannot overflow u8.
        TimeOfDay::from_hm(h.parse().ok()?, m.parse().ok()?)
    }

    /// Minute-of-day in `0..1440`.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    #[inline]
    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

/// Displays as `H:MM` — minute zero-padded, hour not (matching the scraped
/// corpus, which writes "9:30" rather than "09:30").
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour(), self.minute())
    }
}

// Serialized as the `H:MM` string form, the representation used throughout
// the scraped corpus and the downstream GeoJSON properties.
#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        TimeOfDay::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day {text:?}")))
    }
}
