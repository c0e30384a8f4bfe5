//! Raw scraped input shapes.

/// One scraped hours entry: a day-label string plus a time-detail string,
/// exactly as found in a directory listing.  Immutable input; the builder
/// never mutates entries.
///
/// The serde aliases cover the field-name drift in the scraped corpus
/// (`list_title`, `dtl`, `dtl_text`, `dtlText`).
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawHoursEntry {
    #[cfg_attr(feature = "serde", serde(default, alias = "list_title"))]
    pub title: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "dtl", alias = "dtl_text", alias = "dtlText")
    )]
    pub detail: String,
}

impl RawHoursEntry {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> RawHoursEntry {
        RawHoursEntry {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// Structured notes accompanying the raw entries.  Only `closed_on` feeds
/// the schedule (folded into the exception policy list); other note fields
/// are ignored.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructuredNotes {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub closed_on: Option<String>,
}
