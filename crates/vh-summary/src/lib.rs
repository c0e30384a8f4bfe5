//! `vh-summary` — the integration layer of the `venue_hours` framework.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                  |
//! |-----------|-----------------------------------------------------------|
//! | [`venue`] | `VenueHours`, `HoursSummary`                              |
//! | [`batch`] | `summarize_records` — (optionally parallel) fan-out       |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs `summarize_records` on the Rayon thread pool.      |

pub mod batch;
pub mod venue;


pub use batch::summarize_records;
pub use venue::{HoursSummary, VenueHours};
