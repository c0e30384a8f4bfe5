//! `vh-parse` — free-text parsing for scraped business-hours strings.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`title`]  | `parse_day_title`, `DayTitle` — day-label normalization   |
//! | [`detail`] | `extract_time_blocks` — range + last-order scanner        |
//!
//! Both parsers are total: they never fail, and unrecognized input degrades
//! to documented fallbacks (opaque title chunks, empty block lists) rather
//! than errors.  There is no regex engine — matching is an explicit
//! scanning tokenizer so the accepted vocabulary is auditable.

pub mod detail;
pub mod title;

#[cfg(test)]
mod tests;

pub use detail::extract_time_blocks;
pub use title::{DayTitle, parse_day_title};
