//! Open/close blocks and last-order cutoffs.

use crate::time::TimeOfDay;

// ── Last orders ───────────────────────────────────────────────────────────────

/// Which kind of last-order cutoff a marker announces.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LastOrderKind {
    Generic,
    Food,
    Drinks,
}

impl LastOrderKind {
    /// Stable lowercase key, used in schedule signatures and serialization.
    pub fn key(self) -> &'static str {
        match self {
            LastOrderKind::Generic => "generic",
            LastOrderKind::Food => "food",
            LastOrderKind::Drinks => "drinks",
        }
    }
}

/// Per-kind last-order cutoffs attached to one open block.
///
/// At most one cutoff per kind.  Re-setting an already-present kind
/// overwrites it — the documented last-write-wins fold rule for markers that
/// collide within one block's text window.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LastOrders {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub generic: Option<TimeOfDay>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub food: Option<TimeOfDay>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub drinks: Option<TimeOfDay>,
}

impl LastOrders {
    pub fn is_empty(&self) -> bool {
        self.generic.is_none() && self.food.is_none() && self.drinks.is_none()
    }

    /// Set the cutoff for `kind`, overwriting any earlier value
    /// (last write wins).
    pub fn set(&mut self, kind: LastOrderKind, time: TimeOfDay) {
        match kind {
            LastOrderKind::Generic => self.generic = Some(time),
            LastOrderKind::Food => self.food = Some(time),
            LastOrderKind::Drinks => self.drinks = Some(time),
        }
    }

    pub fn get(&self, kind: LastOrderKind) -> Option<TimeOfDay> {
        match kind {
            LastOrderKind::Generic => self.generic,
            LastOrderKind::Food => self.food,
            LastOrderKind::Drinks => self.drinks,
        }
    }

    /// Earliest cutoff across whichever kinds are present.
    pub fn earliest(&self) -> Option<TimeOfDay> {
        [self.generic, self.food, self.drinks]
            .into_iter()
            .flatten()
            .min()
    }

    /// Present `(kind, time)` pairs sorted by kind key
    /// (`drinks` < `food` < `generic`) — the order schedule signatures use.
    pub fn sorted_pairs(&self) -> Vec<(LastOrderKind, TimeOfDay)> {
        [
            LastOrderKind::Drinks,
            LastOrderKind::Food,
            LastOrderKind::Generic,
        ]
        .into_iter()
        .filter_map(|k| self.get(k).map(|t| (k, t)))
        .collect()
    }
}

// ── TimeBlock ─────────────────────────────────────────────────────────────────

/// One contiguous open window within a day.
///
/// `crosses_midnight` is derived at construction: a close time numerically
/// `<=` the open time means the window wraps past midnight into the next
/// calendar day ("17:00-24:00" closes at `0:00`, so it wraps).
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeBlock {
    pub open: TimeOfDay,
    pub close: TimeOfDay,
    pub crosses_midnight: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub last_order: Option<LastOrders>,
    /// Transient evaluation marker: set on the clone of a midnight-crossing
    /// block when it is included in the *next* day's evaluation window.
    /// Never part of the persisted schedule.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub carried_from_prev: bool,
}

impl TimeBlock {
    pub fn new(open: TimeOfDay, close: TimeOfDay, last_order: Option<LastOrders>) -> TimeBlock {
        TimeBlock {
            open,
            close,
            crosses_midnight: close.minutes() <= open.minutes(),
            last_order,
            carried_from_prev: false,
        }
    }

    /// Whether `now` falls inside this block's open window.
    ///
    /// Non-crossing: `open <= now < close`.
    /// Crossing: `now >= open` (before midnight) or `now < close` (after).
    pub fn contains(&self, now: TimeOfDay) -> bool {
        if self.crosses_midnight {
            now >= self.open || now < self.close
        } else {
            self.open <= now && now < self.close
        }
    }

    /// A copy flagged as carried over from the previous calendar day.
    pub fn carried_copy(&self) -> TimeBlock {
        TimeBlock {
            carried_from_prev: true,
            ..self.clone()
        }
    }
}
