//! `vh-schedule` — weekly-schedule construction, open-now evaluation, and
//! record loading.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`builder`]  | `build_schedule` — sticky-closed fold over raw entries    |
//! | [`evaluate`] | `evaluate_day`, `status_at`, `carried_blocks`             |
//! | [`loader`]   | `load_records_json`, `load_entries_csv`, `VenueRecord`    |
//! | [`error`]    | `LoadError`, `LoadResult<T>`                              |
//!
//! # Evaluation model (summary)
//!
//! ```text
//! (weekly, exceptions) = build_schedule(entries, notes)    // once per venue
//! status               = status_at(&weekly, day, now)      // per instant
//! ```
//!
//! `status_at` concatenates today's blocks with yesterday's
//! midnight-crossers, so a venue open past midnight reports `Open` in the
//! small hours even on a day whose own schedule is `Closed`.

pub mod builder;
pub mod error;
pub mod evaluate;
pub mod loader;


pub use builder::build_schedule;
pub use error::{LoadError, LoadResult};
pub use evaluate::{carried_blocks, evaluate_day, status_at};
pub use loader::{
    VenueRecord, load_entries_csv, load_entries_reader, load_records_json, load_records_reader,
};
