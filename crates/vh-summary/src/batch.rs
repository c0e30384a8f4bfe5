//! Batch fan-out over independent venues.
//!
//! Venues share no mutable state: each record's pipeline (raw entries →
//! schedule → status → strings) reads only its own inputs, so a batch maps
//! cleanly over a thread pool.  Output order always matches input order.

use vh_core::{Day, TimeOfDay};
use vh_schedule::VenueRecord;

use crate::{HoursSummary, VenueHours};

/// Summarize every record at the same instant, preserving input order.
///
/// With the `parallel` feature the map runs on the Rayon thread pool;
/// results are collected back in index order either way.
pub fn summarize_records(records: &[VenueRecord], day: Day, now: TimeOfDay) -> Vec<HoursSummary> {
    #[cfg(not(feature = "parallel"))]
    {
        records
            .iter()
            .map(|record| summarize_record(record, day, now))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        records
            .par_iter()
            .map(|record| summarize_record(record, day, now))
            .collect()
    }
}

fn summarize_record(record: &VenueRecord, day: Day, now: TimeOfDay) -> HoursSummary {
    VenueHours::build(record.entries(), record.hours_notes_structured.as_ref())
        .summary_at(day, now)
}
