//! Guest-count input normalization.
//!
//! Raw input from the guest-count field is clamped into the configured
//! bounds. An empty field is a transient [`CountInput::Pending`] value (the
//! user may still be typing), distinct from zero. Out-of-range and
//! non-numeric input are never surfaced as errors; they only produce a
//! corrected value.

/// Result of normalizing the raw guest-count text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountInput {
    /// The field is empty. Reconcile to zero blocks but do not rewrite the
    /// field text; the user may still be typing.
    Pending,
    /// A usable count. `corrected` is set when the parsed value had to be
    /// clamped into bounds (or did not parse at all).
    Value { count: u8, corrected: bool },
}

/// Normalize the raw guest-count text against `min..=max`.
///
/// Non-numeric input and values below `min` clamp to `min`; values above
/// `max` clamp to `max`. Trailing garbage after a leading integer is
/// ignored, matching the field's numeric parsing.
pub fn normalize_guest_count(raw: &str, min: u8, max: u8) -> CountInput {
    if raw.trim().is_empty() {
        return CountInput::Pending;
    }

    let Some(parsed) = parse_leading_int(raw) else {
        return CountInput::Value {
            count: min,
            corrected: true,
        };
    };

    if parsed < i64::from(min) {
        CountInput::Value {
            count: min,
            corrected: true,
        }
    } else if parsed > i64::from(max) {
        CountInput::Value {
            count: max,
            corrected: true,
        }
    } else {
        CountInput::Value {
            count: parsed as u8,
            corrected: false,
        }
    }
}

/// Parse the leading integer of `raw`, ignoring leading whitespace and any
/// trailing non-digits. Returns `None` if no digits are present. Values
/// that overflow saturate, so absurdly long digit runs still clamp to the
/// upper bound rather than being treated as non-numeric.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    Some(if negative { value.saturating_neg() } else { value })
}
