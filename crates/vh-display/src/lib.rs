//! `vh-display` — short human-readable rendering of schedules and statuses.
//!
//! # Crate layout
//!
//! | Module          | Contents                                           |
//! |-----------------|----------------------------------------------------|
//! | [`compact`]     | `compact_today`, `week_compact_pretty`             |
//! | [`next_change`] | `format_next_change`                               |
//! | [`chips`]       | `policy_chips`                                     |
//!
//! Rendering is lossy by design: the `Closed` sentinel and an unset day
//! produce the same "Closed" string, and only the first gap in a
//! multi-block day gets a "Break" segment.  Anything that needs the
//! underlying structure should read the schedule types, not these strings.

pub mod chips;
pub mod compact;
pub mod next_change;


pub use chips::policy_chips;
pub use compact::{compact_today, week_compact_pretty};
pub use next_change::format_next_change;
