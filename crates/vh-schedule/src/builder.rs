//! Schedule construction: folding raw entries into a weekly schedule.
//!
//! # Fold rules
//!
//! Entries are processed strictly in input order; the fold is deterministic
//! and order-sensitive.  Per entry:
//!
//! 1. The title resolves to weekdays, special-day flags, and opaque chunks.
//! 2. *Explicit closed*: a detail that equals `"closed"` (trimmed,
//!    lower-cased), or that contains `"closed"` and yields zero parseable
//!    ranges, marks every resolved weekday `Closed`.  Closed is sticky —
//!    an absorbing state for the rest of the pass.  Nothing else from a
//!    closed entry is recorded.
//! 3. Otherwise the entry's blocks append to every resolved weekday that
//!    is not already `Closed`.
//! 4. Opaque chunks merge into the policy list; a special-day flag routes
//!    the entry's blocks to the exception set instead of any weekday.
//!
//! After all entries, a non-empty `closed_on` note appends to the policy
//! list.  Total over any input, including the empty list.

use vh_core::{ExceptionSet, RawHoursEntry, StructuredNotes, WeeklySchedule};
use vh_parse::{extract_time_blocks, parse_day_title};

/// Derive the weekly schedule and exception set for one venue.
///
/// Pure: inputs are never mutated, and the same entry list always produces
/// an identical result.
pub fn build_schedule(
    entries: &[RawHoursEntry],
    notes: Option<&StructuredNotes>,
) -> (WeeklySchedule, ExceptionSet) {
    let mut weekly = WeeklySchedule::default();
    let mut exceptions = ExceptionSet::default();

    for entry in entries {
        let title = parse_day_title(&entry.title);
        let blocks = extract_time_blocks(&entry.detail);

        let detail_lower = entry.detail.trim().to_lowercase();
        let explicit_closed =
            detail_lower == "closed" || (detail_lower.contains("closed") && blocks.is_empty());

        if explicit_closed {
            for &day in &title.days {
                weekly[day].set_closed();
            }
            continue;
        }

        for &day in &title.days {
            // push_blocks is a no-op on a Closed day (sticky closed).
            weekly[day].push_blocks(&blocks);
        }

        exceptions.policies.extend(title.raw_titles.iter().cloned());
        for &tag in &title.special {
            exceptions
                .special
                .entry(tag)
                .or_default()
                .extend_from_slice(&blocks);
        }
    }

    if let Some(closed_on) = notes.and_then(|n| n.closed_on.as_deref()) {
        if !closed_on.is_empty() {
            exceptions.policies.push(closed_on.to_string());
        }
    }

    (weekly, exceptions)
}
