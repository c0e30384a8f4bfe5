//! Weekday type and cyclic-order arithmetic.
//!
//! # Canonical order
//!
//! The week runs `Mon..Sun` in a fixed cyclic order.  Day-range expansion
//! ("Sat-Mon") and adjacency grouping in the display layer both walk this
//! cycle, so the order is part of the public contract, not a storage detail.

use std::fmt;

/// One of the seven weekdays, in the fixed canonical order `Mon..=Sun`.
///
/// `Copy + Ord + Hash` so days can be used as map keys and array indices
/// without ceremony.  The discriminant doubles as the index into
/// per-day arrays via [`Day::index`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All seven days in canonical order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Position in the canonical order (`Mon` = 0 … `Sun` = 6).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter display abbreviation (`"Mon"` … `"Sun"`).
    pub fn abbrev(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }

    /// Lowercase key used in serialized schedules (`"mon"` … `"sun"`).
    pub fn key(self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
            Day::Sat => "sat",
            Day::Sun => "sun",
        }
    }

    /// Resolve a token to a day: full English name or 3-letter abbreviation,
    /// case-insensitive.  Anything else is `None`.
    pub fn from_token(token: &str) -> Option<Day> {
        const ALIASES: [(&str, &str, Day); 7] = [
            ("mon", "monday", Day::Mon),
            ("tue", "tuesday", Day::Tue),
            ("wed", "wednesday", Day::Wed),
            ("thu", "thursday", Day::Thu),
            ("fri", "friday", Day::Fri),
            ("sat", "saturday", Day::Sat),
            ("sun", "sunday", Day::Sun),
        ];
        ALIASES
            .iter()
            .find(|(abbr, full, _)| {
                token.eq_ignore_ascii_case(abbr) || token.eq_ignore_ascii_case(full)
            })
            .map(|&(_, _, d)| d)
    }

    /// The next day in cyclic order (`Sun.succ() == Mon`).
    #[inline]
    pub fn succ(self) -> Day {
        Day::ALL[(self.index() + 1) % 7]
    }

    /// The previous day in cyclic order (`Mon.pred() == Sun`).
    #[inline]
    pub fn pred(self) -> Day {
        Day::ALL[(self.index() + 6) % 7]
    }

    /// Inclusive range from `start` to `end` along the cyclic order.
    ///
    /// When `end` precedes `start`, the range wraps across the week boundary:
    /// `range_inclusive(Sat, Mon)` → `[Sat, Sun, Mon]`.
    pub fn range_inclusive(start: Day, end: Day) -> Vec<Day> {
        let mut days = Vec::with_capacity(7);
        let mut d = start;
        loop {
            days.push(d);
            if d == end {
                break;
            }
            d = d.succ();
        }
        days
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}
