//! Weekly schedules and the exception/policy set.
//!
//! # Sticky closed
//!
//! `DaySchedule` is a tagged variant rather than a "list or sentinel string"
//! as in typical scraped feeds: `Closed` is an absorbing state.  Once a day
//! has been set to `Closed` during schedule construction,
//! [`DaySchedule::push_blocks`] is a no-op for the rest of the build pass —
//! later entries cannot reopen the day.
//!
//! An *unset* day (`Blocks` with an empty list) is semantically distinct
//! from `Closed`: the former means "no hours text parsed", the latter
//! "explicitly marked closed".  Both render as "Closed" in the display
//! layer; consumers that need the distinction must inspect the variant.

use rustc_hash::FxHashMap;

use crate::block::TimeBlock;
use crate::day::Day;

// ── DaySchedule ───────────────────────────────────────────────────────────────

/// The schedule for one weekday: an ordered block list or the closed
/// sentinel.
///
/// Blocks keep source order — not guaranteed chronological, duplicates and
/// overlaps preserved verbatim.  The default is an empty block list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DaySchedule {
    Blocks(Vec<TimeBlock>),
    Closed,
}

impl Default for DaySchedule {
    fn default() -> Self {
        DaySchedule::Blocks(Vec::new())
    }
}

impl DaySchedule {
    pub fn is_closed(&self) -> bool {
        matches!(self, DaySchedule::Closed)
    }

    /// `true` for both the `Closed` sentinel and an empty block list.
    pub fn has_no_hours(&self) -> bool {
        match self {
            DaySchedule::Closed => true,
            DaySchedule::Blocks(blocks) => blocks.is_empty(),
        }
    }

    /// The block list, or an empty slice for the `Closed` sentinel.
    pub fn blocks(&self) -> &[TimeBlock] {
        match self {
            DaySchedule::Blocks(blocks) => blocks,
            DaySchedule::Closed => &[],
        }
    }

    /// Mark the day explicitly closed.  Absorbing: the day stays `Closed`
    /// no matter what is pushed afterwards.
    pub fn set_closed(&mut self) {
        *self = DaySchedule::Closed;
    }

    /// Append blocks in source order.  No-op on a `Closed` day
    /// (sticky-closed invariant).
    pub fn push_blocks(&mut self, blocks: &[TimeBlock]) {
        if let DaySchedule::Blocks(existing) = self {
            existing.extend_from_slice(blocks);
        }
    }
}

// `Closed` serializes as the string "closed" and `Blocks` as a plain
// sequence — the shape the scraped corpus and downstream GeoJSON use.
#[cfg(feature = "serde")]
impl serde::Serialize for DaySchedule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DaySchedule::Closed => serializer.serialize_str("closed"),
            DaySchedule::Blocks(blocks) => blocks.serialize(serializer),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DaySchedule {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Sentinel(String),
            Blocks(Vec<TimeBlock>),
        }
        match Repr::deserialize(deserializer)? {
            Repr::Blocks(blocks) => Ok(DaySchedule::Blocks(blocks)),
            Repr::Sentinel(s) if s == "closed" => Ok(DaySchedule::Closed),
            Repr::Sentinel(s) => Err(serde::de::Error::custom(format!(
                "invalid day schedule sentinel {s:?} (expected \"closed\")"
            ))),
        }
    }
}

// ── WeeklySchedule ────────────────────────────────────────────────────────────

/// A full 7-day schedule, indexable by [`Day`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct WeeklySchedule {
    days: [DaySchedule; 7],
}

impl WeeklySchedule {
    pub fn day(&self, day: Day) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DaySchedule {
        &mut self.days[day.index()]
    }

    /// Iterate all seven days in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Day, &DaySchedule)> {
        Day::ALL.iter().map(|&d| (d, self.day(d)))
    }
}

impl std::ops::Index<Day> for WeeklySchedule {
    type Output = DaySchedule;

    fn index(&self, day: Day) -> &DaySchedule {
        self.day(day)
    }
}

impl std::ops::IndexMut<Day> for WeeklySchedule {
    fn index_mut(&mut self, day: Day) -> &mut DaySchedule {
        self.day_mut(day)
    }
}

// Serialized as a map keyed by lowercase day name, in canonical order.
#[cfg(feature = "serde")]
impl serde::Serialize for WeeklySchedule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(7))?;
        for (day, schedule) in self.iter() {
            map.serialize_entry(day.key(), schedule)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for WeeklySchedule {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct Visitor;

        impl<'de> serde::de::Visitor<'de> for Visitor {
            type Value = WeeklySchedule;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of day name to day schedule")
            }

            fn visit_map<A: serde::de::MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<WeeklySchedule, A::Error> {
                let mut weekly = WeeklySchedule::default();
                while let Some(day) = access.next_key::<Day>()? {
                    weekly[day] = access.next_value()?;
                }
                Ok(weekly)
            }
        }

        deserializer.deserialize_map(Visitor)
    }
}

// ── Special days & exceptions ─────────────────────────────────────────────────

/// Symbolic special-day tags from the day-title vocabulary.  No
/// calendar-date resolution — these stay symbolic.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpecialDay {
    PublicHoliday,
    DayBeforePublicHoliday,
    DayAfterPublicHoliday,
}

impl SpecialDay {
    /// Stable snake_case key (`"public_holiday"`, …).
    pub fn key(self) -> &'static str {
        match self {
            SpecialDay::PublicHoliday => "public_holiday",
            SpecialDay::DayBeforePublicHoliday => "day_before_public_holiday",
            SpecialDay::DayAfterPublicHoliday => "day_after_public_holiday",
        }
    }

    /// Match an already-lowercased title chunk against the special-phrase
    /// vocabulary.
    pub fn from_phrase(lowered: &str) -> Option<SpecialDay> {
        match lowered {
            "public holiday" => Some(SpecialDay::PublicHoliday),
            "day before public holiday" => Some(SpecialDay::DayBeforePublicHoliday),
            "day after public holiday" => Some(SpecialDay::DayAfterPublicHoliday),
            _ => None,
        }
    }
}

/// Schedule information that does not attach to a weekday.
///
/// `policies` keeps source order and preserves duplicates across entries;
/// within a single title the opaque chunks were already deduplicated and
/// sorted by the normalizer.  `special` routes blocks from public-holiday
/// family entries.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExceptionSet {
    pub policies: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "FxHashMap::is_empty"))]
    pub special: FxHashMap<SpecialDay, Vec<TimeBlock>>,
}

impl ExceptionSet {
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty() && self.special.is_empty()
    }
}
