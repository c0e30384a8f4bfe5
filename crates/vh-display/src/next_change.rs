//! One-line "what happens next" rendering of an evaluation result.

use vh_core::OpenStatus;

/// Render an [`OpenStatus`] as a one-line human string:
///
/// - open → `"LO in 30m · Closes in 90m"` (the LO part only while the
///   cutoff is still ahead), or `"Open"` when no countdown is known;
/// - closed → `"Opens in 45m"` / `"Opens in 2h"` / `"Opens in 2h 15m"`,
///   or `"Closed"` when no reopening is known today.
pub fn format_next_change(status: &OpenStatus) -> String {
    match status {
        OpenStatus::Open {
            closes_in_min,
            lo_in_min,
            ..
        } => {
            let mut parts = Vec::new();
            if let Some(lo) = lo_in_min {
                if *lo > 0 {
                    parts.push(format!("LO in {lo}m"));
                }
            }
            if let Some(mins) = closes_in_min {
                parts.push(format!("Closes in {mins}m"));
            }
            if parts.is_empty() {
                "Open".to_string()
            } else {
                parts.join(" · ")
            }
        }
        OpenStatus::Closed { opens_in_min: None } => "Closed".to_string(),
        OpenStatus::Closed {
            opens_in_min: Some(mins),
        } => {
            if *mins < 60 {
                format!("Opens in {mins}m")
            } else {
                let (h, m) = (mins / 60, mins % 60);
                if m == 0 {
                    format!("Opens in {h}h")
                } else {
                    format!("Opens in {h}h {m}m")
                }
            }
        }
    }
}
