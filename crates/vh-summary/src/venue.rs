//! Per-venue assembly: derived schedule plus display-ready summary.

use serde::Serialize;

use vh_core::{Day, ExceptionSet, OpenStatus, RawHoursEntry, StructuredNotes, TimeOfDay, WeeklySchedule};
use vh_display::{compact_today, format_next_change, policy_chips, week_compact_pretty};
use vh_schedule::{build_schedule, status_at};

/// A venue's derived hours: built once from the raw entries, then queried
/// for any instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VenueHours {
    pub weekly: WeeklySchedule,
    pub exceptions: ExceptionSet,
}

impl VenueHours {
    /// Derive the weekly schedule and exception set.  Pure and total —
    /// any entry list produces a valid `VenueHours`.
    pub fn build(entries: &[RawHoursEntry], notes: Option<&StructuredNotes>) -> VenueHours {
        let (weekly, exceptions) = build_schedule(entries, notes);
        VenueHours { weekly, exceptions }
    }

    /// Open/closed status at minute `now` on `day`, including any block
    /// carried over from the previous day.
    pub fn status_at(&self, day: Day, now: TimeOfDay) -> OpenStatus {
        status_at(&self.weekly, day, now)
    }

    /// The full display-ready summary for one instant.
    pub fn summary_at(&self, day: Day, now: TimeOfDay) -> HoursSummary {
        let open_now = self.status_at(day, now);
        HoursSummary {
            today_compact: compact_today(self.weekly.day(day)),
            week_compact: week_compact_pretty(&self.weekly),
            next_change: format_next_change(&open_now),
            policy_chips: policy_chips(&self.exceptions.policies),
            open_now,
        }
    }
}

/// Display-ready summary of one venue at one instant — the `hours` block
/// downstream feature writers embed verbatim.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoursSummary {
    pub today_compact: String,
    pub week_compact: String,
    pub open_now: OpenStatus,
    pub next_change: String,
    pub policy_chips: Vec<String>,
}
