//! Scraped-record loaders.
//!
//! # JSON records
//!
//! The scraper emits JSON files whose top level is either an array of venue
//! records or an object wrapping that array under one of the keys
//! `restaurants` / `items` / `results` / `data`.  Each record carries the
//! hours entries under `hours_raw` and optional structured notes under
//! `hours_notes_structured`; all other record fields are ignored here.
//!
//! # CSV entries
//!
//! For tabular exports, one row per hours entry:
//!
//! ```csv
//! venue_id,title,detail
//! 0,Mon-Fri,11:30-14:00 (LO 13:30)
//! 0,Sat,Closed
//! 1,Sun,17:00-23:00
//! ```
//!
//! Rows are buffered per venue before assembly; venues absent from the file
//! receive an empty entry list (which builds an all-unset schedule).

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use vh_core::{RawHoursEntry, StructuredNotes};

use crate::LoadError;

// ── Venue record ──────────────────────────────────────────────────────────────

/// One scraped venue record, reduced to the fields this core consumes.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VenueRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub hours_raw: Option<Vec<RawHoursEntry>>,
    #[serde(default)]
    pub hours_notes_structured: Option<StructuredNotes>,
}

impl VenueRecord {
    /// The hours entries, or an empty slice when the scrape had none.
    pub fn entries(&self) -> &[RawHoursEntry] {
        self.hours_raw.as_deref().unwrap_or(&[])
    }

    /// Stable identifier: `place_id` where present, else the listing URL.
    pub fn id(&self) -> Option<&str> {
        self.place_id.as_deref().or(self.url.as_deref())
    }
}

// ── JSON loader ───────────────────────────────────────────────────────────────

/// Load venue records from a scraped JSON file.
pub fn load_records_json(path: &Path) -> Result<Vec<VenueRecord>, LoadError> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_records_reader(std::io::BufReader::new(file))
}

/// Like [`load_records_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_records_reader<R: Read>(reader: R) -> Result<Vec<VenueRecord>, LoadError> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut map) => {
            // Wrapper objects put the array under one of these keys.
            const WRAPPER_KEYS: [&str; 4] = ["restaurants", "items", "results", "data"];
            match WRAPPER_KEYS
                .iter()
                .find_map(|k| match map.remove(*k) {
                    Some(serde_json::Value::Array(items)) => Some(items),
                    _ => None,
                }) {
                Some(items) => items,
                // No known wrapper key: treat the object's values as records.
                None => map.into_iter().map(|(_, v)| v).collect(),
            }
        }
        _ => {
            return Err(LoadError::Parse(
                "expected a JSON array of records or a wrapper object".to_string(),
            ));
        }
    };

    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(LoadError::Json))
        .collect()
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EntryRow {
    venue_id: u32,
    title:    String,
    detail:   String,
}

/// Load per-venue hours entries from a CSV file.
///
/// Returns a `Vec` of length `venue_count`, indexed by venue ID.  Venues
/// with no rows receive an empty entry list.
pub fn load_entries_csv(
    path: &Path,
    venue_count: usize,
) -> Result<Vec<Vec<RawHoursEntry>>, LoadError> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_entries_reader(file, venue_count)
}

/// Like [`load_entries_csv`] but accepts any `Read` source.
pub fn load_entries_reader<R: Read>(
    reader: R,
    venue_count: usize,
) -> Result<Vec<Vec<RawHoursEntry>>, LoadError> {
    // ── Parse CSV rows, buffered per venue ────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_venue: FxHashMap<u32, Vec<RawHoursEntry>> = FxHashMap::default();

    for result in csv_reader.deserialize::<EntryRow>() {
        let row = result.map_err(|e| LoadError::Parse(e.to_string()))?;
        by_venue
            .entry(row.venue_id)
            .or_default()
            .push(RawHoursEntry::new(row.title, row.detail));
    }

    // ── Assemble one entry list per venue ─────────────────────────────────
    let mut entries = Vec::with_capacity(venue_count);
    for i in 0..venue_count as u32 {
        entries.push(by_venue.remove(&i).unwrap_or_default());
    }

    Ok(entries)
}
