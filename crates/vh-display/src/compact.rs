//! Compact schedule rendering.
//!
//! Two views: `compact_today` renders one day's blocks as a short line
//! ("11:30–14:00 · Break 14:00–17:30 · 17:30–22:00"), and
//! `week_compact_pretty` renders the whole week, grouping days with
//! literally identical schedules ("Mon–Fri 11:30–14:00; Sat–Sun closed").
//!
//! Both the `Closed` sentinel and an unset day render as "Closed" — the
//! display layer deliberately does not distinguish them; consumers that
//! need the difference must inspect the `DaySchedule` variant.

use vh_core::{Day, DaySchedule, TimeBlock, WeeklySchedule};

// ── Today view ────────────────────────────────────────────────────────────────

/// Render one day's schedule as a short display line.
///
/// With two or more blocks, a single synthetic `"Break close₁–open₂"`
/// segment is inserted between the first and second block.  Gaps beyond the
/// first are not rendered — a known display limitation kept for parity with
/// the rest of the pipeline, not a bug to fix here.
pub fn compact_today(day: &DaySchedule) -> String {
    let blocks = day.blocks();
    if day.has_no_hours() {
        return "Closed".to_string();
    }

    let mut labels: Vec<String> = blocks.iter().map(block_label).collect();
    if blocks.len() >= 2 {
        labels.insert(
            1,
            format!("Break {}–{}", blocks[0].close, blocks[1].open),
        );
    }
    labels.join(" · ")
}

/// One block as `"open–close"` with an optional last-order suffix.
///
/// Food and drinks cutoffs are labeled; a generic cutoff shows bare, and
/// only when neither labeled kind is present.
fn block_label(block: &TimeBlock) -> String {
    let mut seg = format!("{}–{}", block.open, block.close);
    let Some(lo) = &block.last_order else {
        return seg;
    };

    let mut parts = Vec::new();
    if let Some(t) = lo.food {
        parts.push(format!("Food {t}"));
    }
    if let Some(t) = lo.drinks {
        parts.push(format!("Drinks {t}"));
    }
    if parts.is_empty() {
        if let Some(t) = lo.generic {
            parts.push(t.to_string());
        }
    }
    if !parts.is_empty() {
        seg.push_str(&format!(" (LO {})", parts.join(" / ")));
    }
    seg
}

// ── Week view ─────────────────────────────────────────────────────────────────

/// Render the full week, grouping days that share an identical schedule.
///
/// Group order follows the first occurrence of each schedule signature;
/// within a group, contiguous days collapse to `"Day–Day"` runs.
pub fn week_compact_pretty(weekly: &WeeklySchedule) -> String {
    // Signature → days, in first-occurrence order.
    let mut groups: Vec<(String, Vec<Day>)> = Vec::new();
    for day in Day::ALL {
        let sig = signature(weekly.day(day));
        match groups.iter_mut().find(|(s, _)| *s == sig) {
            Some((_, days)) => days.push(day),
            None => groups.push((sig, vec![day])),
        }
    }

    let pieces: Vec<String> = groups
        .iter()
        .map(|(sig, days)| {
            let label = group_days(days);
            if sig == "closed" {
                format!("{label} closed")
            } else {
                let segs: Vec<String> = weekly
                    .day(days[0])
                    .blocks()
                    .iter()
                    .map(block_label)
                    .collect();
                format!("{label} {}", segs.join(" · "))
            }
        })
        .collect();
    pieces.join("; ")
}

/// The string by which two days are judged to share literally identical
/// hours: `"closed"`, or each block as `"open-close|kind:time;…"` joined
/// with `"||"` (last-order pairs sorted by kind key).
fn signature(day: &DaySchedule) -> String {
    if day.has_no_hours() {
        return "closed".to_string();
    }
    let parts: Vec<String> = day
        .blocks()
        .iter()
        .map(|block| {
            let lo_sig = block
                .last_order
                .map(|lo| {
                    lo.sorted_pairs()
                        .into_iter()
                        .map(|(kind, t)| format!("{}:{t}", kind.key()))
                        .collect::<Vec<_>>()
                        .join(";")
                })
                .unwrap_or_default();
            format!("{}-{}|{lo_sig}", block.open, block.close)
        })
        .collect();
    parts.join("||")
}

/// Render a group's days as comma-joined contiguous runs
/// (`"Mon–Wed, Fri"`).  Adjacency is linear along the canonical order; the
/// week boundary does not wrap here.
fn group_days(days: &[Day]) -> String {
    let mut parts = Vec::new();
    let mut run_start = days[0];
    let mut prev = days[0];
    for &day in &days[1..] {
        if day.index() != prev.index() + 1 {
            parts.push(run_label(run_start, prev));
            run_start = day;
        }
        prev = day;
    }
    parts.push(run_label(run_start, prev));
    parts.join(", ")
}

fn run_label(start: Day, end: Day) -> String {
    if start == end {
        start.abbrev().to_string()
    } else {
        format!("{start}–{end}")
    }
}
