//! Open/closed evaluation result.

use crate::block::TimeBlock;

/// The result of evaluating a day's blocks against an instant.
///
/// A proper tagged union — the two cases carry different payloads and there
/// is no "status" field to forget to check.  Serialized with an internal
/// `status` tag for downstream consumers.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "lowercase"))]
pub enum OpenStatus {
    Closed {
        /// Minutes until today's next opening, if any block of today's own
        /// schedule (never a carried-over one) opens later than now.
        #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
        opens_in_min: Option<u32>,
    },
    Open {
        /// The matched block (first match in source order wins).
        segment: TimeBlock,
        /// Minutes until the matched block closes.
        closes_in_min: Option<u32>,
        /// Minutes until the earliest upcoming last-order cutoff, if one is
        /// still ahead of `now` within the matched block.
        lo_in_min: Option<u32>,
        crosses_midnight: bool,
    },
}

impl OpenStatus {
    /// The total fallback: closed with no known reopening.
    pub fn closed_unknown() -> OpenStatus {
        OpenStatus::Closed { opens_in_min: None }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, OpenStatus::Open { .. })
    }
}
