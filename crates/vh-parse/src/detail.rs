//! Detail-string scanning: time ranges and last-order markers.
//!
//! # Pipeline
//!
//! A detail string ("11:30-14:00 (L.O. 13:30)") goes through a
//! normalization pass and then two explicit scans over the same text:
//!
//! 1. **Normalize** — dash variants (`〜 – — ～`, the literal `to`) become
//!    `-`, whitespace runs collapse to single spaces, and every last-order
//!    notation variant (`L.O.`, `L O.`, `lo`, …) is rewritten to the single
//!    token `LO`.
//! 2. **Range scan** — every `H:MM - H:MM` occurrence (separator `-` or
//!    `~`) becomes a candidate block, in text order.  Both endpoints must
//!    be valid times: an hour above 24 or a malformed minute field rejects
//!    the candidate outright, so "17:00-26:00" never parses.
//! 3. **Marker scan** — every `LO [Food|Drinks] H:MM` occurrence becomes a
//!    last-order marker with its text position.
//! 4. **Windowing** — a marker belongs to the nearest *preceding* range:
//!    its position must lie between that range's start and the next range's
//!    start.  Markers before the first range are dropped.  Within one
//!    window, same-kind markers fold last-write-wins; different kinds
//!    coexist.
//!
//! The scanner is total: text with zero ranges yields an empty list.
//!
//! Positions are indices into the normalized text's char sequence; both
//! scans share the same sequence so window comparisons line up.

use vh_core::{LastOrderKind, LastOrders, TimeBlock, TimeOfDay};

// ── Public API ────────────────────────────────────────────────────────────────

/// Extract ordered open/close blocks (with attached last-order cutoffs)
/// from a detail string.  Never fails; unparseable text yields `vec![]`.
pub fn extract_time_blocks(detail: &str) -> Vec<TimeBlock> {
    let text: Vec<char> = normalize(detail).chars().collect();
    let ranges = scan_ranges(&text);
    let markers = scan_last_orders(&text);

    let mut blocks = Vec::with_capacity(ranges.len());
    for (idx, range) in ranges.iter().enumerate() {
        // This range's marker window runs to the start of the next range.
        let window_end = ranges
            .get(idx + 1)
            .map(|next| next.pos)
            .unwrap_or(usize::MAX);

        let mut last_order = LastOrders::default();
        for marker in &markers {
            if marker.pos >= range.pos && marker.pos < window_end {
                last_order.set(marker.kind, marker.time);
            }
        }

        blocks.push(TimeBlock::new(
            range.open,
            range.close,
            (!last_order.is_empty()).then_some(last_order),
        ));
    }
    blocks
}

// ── Normalization ─────────────────────────────────────────────────────────────

fn normalize(detail: &str) -> String {
    let dashed = detail
        .replace(['〜', '–', '—', '～'], "-")
        .replace("to", "-");
    let collapsed = dashed.split_whitespace().collect::<Vec<_>>().join(" ");
    normalize_last_order(&collapsed)
}

/// Rewrite every `L [.] [spaces] [.] O [.]` sequence (any case) to `LO`.
fn normalize_last_order(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i].eq_ignore_ascii_case(&'l') {
            let mut j = i + 1;
            if chars.get(j) == Some(&'.') {
                j += 1;
            }
            while chars.get(j) == Some(&' ') {
                j += 1;
            }
            if chars.get(j) == Some(&'.') {
                j += 1;
            }
            if chars.get(j).is_some_and(|c| c.eq_ignore_ascii_case(&'o')) {
                j += 1;
                if chars.get(j) == Some(&'.') {
                    j += 1;
                }
                out.push_str("LO");
                i = j;
                continue;
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

// ── Range scan ────────────────────────────────────────────────────────────────

struct RangeMatch {
    /// Char index of the range's first character in the normalized text.
    pos: usize,
    open: TimeOfDay,
    close: TimeOfDay,
}

fn scan_ranges(text: &[char]) -> Vec<RangeMatch> {
    let mut ranges = Vec::new();
    let mut i = 0;
    while i < text.len() {
        match match_range(text, i) {
            Some((open, close, end)) => {
                ranges.push(RangeMatch { pos: i, open, close });
                i = end;
            }
            None => i += 1,
        }
    }
    ranges
}

/// Match `H:MM [spaces] (-|~) [spaces] H:MM` starting exactly at `i`.
/// Returns the two times and the index just past the match.
fn match_range(text: &[char], i: usize) -> Option<(TimeOfDay, TimeOfDay, usize)> {
    let (open, mut j) = match_time(text, i)?;
    j = skip_spaces(text, j);
    if !matches!(text.get(j), Some('-') | Some('~')) {
        return None;
    }
    j = skip_spaces(text, j + 1);
    let (close, end) = match_time(text, j)?;
    Some((open, close, end))
}

/// Match a valid `H:MM` time starting exactly at `i`: 1–2 digit hour,
/// colon, exactly two minute digits, all within `TimeOfDay`'s bounds.
fn match_time(text: &[char], i: usize) -> Option<(TimeOfDay, usize)> {
    // Try the two-digit hour first, then fall back to one digit, mirroring
    // greedy-with-backtracking matching ("117:00" matches at the second 1).
    for hour_len in [2usize, 1] {
        let Some(hour) = read_digits(text, i, hour_len) else {
            continue;
        };
        let colon = i + hour_len;
        if text.get(colon) != Some(&':') {
            continue;
        }
        let Some(minute) = read_digits(text, colon + 1, 2) else {
            continue;
        };
        if let Some(time) = TimeOfDay::from_hm(hour, minute) {
            return Some((time, colon + 3));
        }
    }
    None
}

/// Read exactly `len` ASCII digits at `i` as a number.
fn read_digits(text: &[char], i: usize, len: usize) -> Option<u8> {
    let mut value: u8 = 0;
    for k in 0..len {
        let c = text.get(i + k)?;
        let digit = c.to_digit(10)?;
        value = value.checked_mul(10)?.checked_add(digit as u8)?;
    }
    Some(value)
}

fn skip_spaces(text: &[char], mut i: usize) -> usize {
    while text.get(i) == Some(&' ') {
        i += 1;
    }
    i
}

// ── Last-order marker scan ────────────────────────────────────────────────────

struct LoMarker {
    /// Char index of the `LO` token in the normalized text.
    pos: usize,
    kind: LastOrderKind,
    time: TimeOfDay,
}

fn scan_last_orders(text: &[char]) -> Vec<LoMarker> {
    let mut markers = Vec::new();
    let mut i = 0;
    while i + 1 < text.len() {
        if text[i] == 'L' && text[i + 1] == 'O' {
            if let Some((marker, end)) = match_marker(text, i) {
                markers.push(marker);
                i = end;
                continue;
            }
        }
        i += 1;
    }
    markers
}

/// Match `LO [spaces] [qualifier [spaces]] H:MM` with the `LO` token at `i`.
///
/// Qualifier kind: contains "drink" → drinks; any other recognized
/// qualifier → food; absent → generic.  An unrecognized word after `LO`
/// means the time must start immediately, or there is no marker at all.
fn match_marker(text: &[char], i: usize) -> Option<(LoMarker, usize)> {
    let mut j = skip_spaces(text, i + 2);

    let mut kind = LastOrderKind::Generic;
    let word_len = text[j..]
        .iter()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    if word_len > 0 {
        let word: String = text[j..j + word_len].iter().collect();
        if word.eq_ignore_ascii_case("drink") || word.eq_ignore_ascii_case("drinks") {
            kind = LastOrderKind::Drinks;
            j = skip_spaces(text, j + word_len);
        } else if word.eq_ignore_ascii_case("food") || word.eq_ignore_ascii_case("foods") {
            kind = LastOrderKind::Food;
            j = skip_spaces(text, j + word_len);
        }
    }

    let (time, end) = match_time(text, j)?;
    Some((LoMarker { pos: i, kind, time }, end))
}
