//! `vh-core` — foundational types for the `venue_hours` framework.
//!
//! This crate is a dependency of every other `vh-*` crate.  It intentionally
//! has no `vh-*` dependencies and minimal external ones (only `rustc-hash`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`day`]       | `Day` — weekday enum with cyclic-order arithmetic     |
//! | [`time`]      | `TimeOfDay` — minute-of-day wall-clock time           |
//! | [`block`]     | `TimeBlock`, `LastOrders`, `LastOrderKind`            |
//! | [`schedule`]  | `DaySchedule`, `WeeklySchedule`, `ExceptionSet`       |
//! | [`entry`]     | `RawHoursEntry`, `StructuredNotes` (scraped input)    |
//! | [`status`]    | `OpenStatus` — evaluation result                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types (required by the `vh-schedule` loaders). |

pub mod block;
pub mod day;
pub mod entry;
pub mod schedule;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use block::{LastOrderKind, LastOrders, TimeBlock};
pub use day::Day;
pub use entry::{RawHoursEntry, StructuredNotes};
pub use schedule::{DaySchedule, ExceptionSet, SpecialDay, WeeklySchedule};
pub use status::OpenStatus;
pub use time::{MINUTES_PER_DAY, TimeOfDay};
