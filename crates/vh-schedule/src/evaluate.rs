//! Open-now evaluation with midnight-crossing wall-clock arithmetic.
//!
//! # Evaluation window
//!
//! "Is the venue open now?" on day D considers D's own blocks *plus* any
//! midnight-crossing block from day D-1, because such a block may still be
//! open in the small hours of D.  Carried blocks are appended after today's
//! own blocks and flagged `carried_from_prev`; the first block containing
//! `now` wins (source order is the tie-break, no most-specific heuristic).
//!
//! All countdowns are plain minute arithmetic on minute-of-day values; a
//! full day (1440) is added exactly when the matched window wraps past
//! midnight and `now` still sits in the before-midnight half.

use vh_core::{Day, DaySchedule, MINUTES_PER_DAY, OpenStatus, TimeBlock, TimeOfDay, WeeklySchedule};

// ── Public API ────────────────────────────────────────────────────────────────

/// The midnight-crossing blocks of `prev`, cloned and flagged as carried.
/// A `Closed` previous day carries nothing.
pub fn carried_blocks(prev: &DaySchedule) -> Vec<TimeBlock> {
    prev.blocks()
        .iter()
        .filter(|b| b.crosses_midnight)
        .map(TimeBlock::carried_copy)
        .collect()
}

/// Evaluate one day's schedule (plus carried-over blocks) at minute `now`.
///
/// Total: a `Closed` sentinel or empty input yields
/// `Closed { opens_in_min: None }`.
pub fn evaluate_day(today: &DaySchedule, carried: &[TimeBlock], now: TimeOfDay) -> OpenStatus {
    let own = today.blocks();

    for block in own.iter().chain(carried) {
        if block.contains(now) {
            return OpenStatus::Open {
                closes_in_min: Some(minutes_until_close(block, now)),
                lo_in_min: minutes_until_last_order(block, now),
                crosses_midnight: block.crosses_midnight,
                segment: block.clone(),
            };
        }
    }

    // Carried blocks never count towards "opens in" — they belong to
    // yesterday's schedule.
    let opens_in_min = own
        .iter()
        .filter(|b| b.open > now)
        .map(|b| (b.open.minutes() - now.minutes()) as u32)
        .min();

    OpenStatus::Closed { opens_in_min }
}

/// Evaluate the weekly schedule for `day` at minute `now`, including any
/// block carried over from the previous day.
pub fn status_at(weekly: &WeeklySchedule, day: Day, now: TimeOfDay) -> OpenStatus {
    let carried = carried_blocks(weekly.day(day.pred()));
    evaluate_day(weekly.day(day), &carried, now)
}

// ── Countdown arithmetic ──────────────────────────────────────────────────────

/// Minutes from `now` until the block's close, assuming `now` is inside the
/// block's window.
fn minutes_until_close(block: &TimeBlock, now: TimeOfDay) -> u32 {
    let now_m = now.minutes() as u32;
    let close_m = block.close.minutes() as u32;
    if block.crosses_midnight && now >= block.open {
        // Before-midnight half of a wrapping window: the close is tomorrow.
        MINUTES_PER_DAY as u32 - now_m + close_m
    } else {
        close_m - now_m
    }
}

/// Minutes from `now` until the earliest last-order cutoff still ahead
/// within the block, or `None` when no cutoff is upcoming.
///
/// The wrap rule mirrors [`minutes_until_close`], relative to whichever
/// half of a crossing window `now` sits in: in the before-midnight half a
/// cutoff numerically below `open` lies after midnight and gains a day; a
/// cutoff already behind `now` in the same half has passed.
fn minutes_until_last_order(block: &TimeBlock, now: TimeOfDay) -> Option<u32> {
    let cutoff = block.last_order.as_ref()?.earliest()?;
    let now_m = now.minutes() as u32;
    let cut_m = cutoff.minutes() as u32;

    if !block.crosses_midnight {
        (now <= cutoff && cutoff <= block.close).then(|| cut_m - now_m)
    } else if now >= block.open {
        if cutoff >= block.open {
            (cutoff >= now).then(|| cut_m - now_m)
        } else {
            Some(MINUTES_PER_DAY as u32 - now_m + cut_m)
        }
    } else {
        (cutoff >= now).then(|| cut_m - now_m)
    }
}
