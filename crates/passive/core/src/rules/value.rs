//! Numeric literal resolution for tag payloads.
//!
//! Payloads are free text typed by content authors, so parsing is maximally
//! permissive: the scanner takes the first signed integer it can find and
//! notes whether a `%` marker follows it. Anything that yields no integer
//! contributes nothing; a typo degrades to zero instead of failing a query.

/// A boost payload: either a flat amount or a percentage of some base value.
///
/// How the percentage applies depends on the category of the tag that carried
/// it; the `apply_*` methods cover the three interpretations in use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoostValue {
    /// Absolute amount, added as-is.
    Flat(i32),
    /// Percentage of a base value supplied at aggregation time.
    Percent(i32),
}

impl BoostValue {
    /// Scans a payload for `-?\d+%?`, anywhere in the string.
    pub fn scan(payload: &str) -> Option<Self> {
        let (value, percent) = scan_number(payload)?;
        Some(if percent {
            BoostValue::Percent(value)
        } else {
            BoostValue::Flat(value)
        })
    }

    /// Integer-parameter application: flat amounts pass through, percentages
    /// take `floor(base × pct/100)` (floor toward negative infinity).
    pub fn apply_floored(self, base: i32) -> i32 {
        match self {
            BoostValue::Flat(value) => value,
            BoostValue::Percent(pct) => (f64::from(pct) * 0.01 * f64::from(base)).floor() as i32,
        }
    }

    /// Fractional-rate application: percentages scale the base without
    /// flooring; flat amounts are added as whole numbers.
    pub fn apply_rate(self, base: f64) -> f64 {
        match self {
            BoostValue::Flat(value) => f64::from(value),
            BoostValue::Percent(pct) => base * (f64::from(pct) * 0.01),
        }
    }

    /// Multiplicative-rate application: the base is a rate centered on 1.0,
    /// so percentages scale only the deviation from neutral.
    pub fn apply_rate_offset(self, base: f64) -> f64 {
        match self {
            BoostValue::Flat(value) => f64::from(value),
            BoostValue::Percent(pct) => (base - 1.0) * (f64::from(pct) * 0.01),
        }
    }

    /// The literal integer, ignoring the percent marker.
    pub fn raw(self) -> i32 {
        match self {
            BoostValue::Flat(value) | BoostValue::Percent(value) => value,
        }
    }
}

/// Finds the first signed integer in `payload` and whether a `%` immediately
/// follows it. Returns `None` when no integer occurs (or it overflows `i32`).
pub fn scan_number(payload: &str) -> Option<(i32, bool)> {
    let bytes = payload.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let negative =
            bytes[i] == b'-' && bytes.get(i + 1).is_some_and(|b| b.is_ascii_digit());
        let start = if negative { i + 1 } else { i };
        if bytes.get(start).is_some_and(|b| b.is_ascii_digit()) {
            let mut end = start;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            let value: i32 = payload[start..end].parse().ok()?;
            let value = if negative { -value } else { value };
            let percent = bytes.get(end) == Some(&b'%');
            return Some((value, percent));
        }
        i += 1;
    }
    None
}

/// First signed integer in the payload, percent marker ignored.
pub fn scan_int(payload: &str) -> Option<i32> {
    scan_number(payload).map(|(value, _)| value)
}

/// First signed integer, interpreted as a percentage fraction (`50` → 0.5).
pub fn scan_rate(payload: &str) -> Option<f64> {
    scan_int(payload).map(|value| f64::from(value) * 0.01)
}

/// First unsigned digit run in the payload (a leading `-` is skipped over).
pub fn scan_unsigned(payload: &str) -> Option<i32> {
    let bytes = payload.as_bytes();
    let start = bytes.iter().position(|b| b.is_ascii_digit())?;
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    payload[start..end].parse().ok()
}

/// Scans the HP-gated payload shape `<threshold>,<amount>[%]`: an unsigned
/// digit run directly before a comma, a signed integer directly after it.
pub fn scan_gated(payload: &str) -> Option<(i32, BoostValue)> {
    let bytes = payload.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b',' {
            continue;
        }
        let mut start = i;
        while start > 0 && bytes[start - 1].is_ascii_digit() {
            start -= 1;
        }
        if start == i {
            continue;
        }
        let Ok(threshold) = payload[start..i].parse::<i32>() else {
            continue;
        };
        let rest = &bytes[i + 1..];
        let negative = rest.first() == Some(&b'-');
        let digits_start = usize::from(negative);
        let mut digits_end = digits_start;
        while digits_end < rest.len() && rest[digits_end].is_ascii_digit() {
            digits_end += 1;
        }
        if digits_end == digits_start {
            continue;
        }
        let Ok(value) = payload[i + 1 + digits_start..i + 1 + digits_end].parse::<i32>() else {
            continue;
        };
        let value = if negative { -value } else { value };
        let percent = rest.get(digits_end) == Some(&b'%');
        return Some((
            threshold,
            if percent {
                BoostValue::Percent(value)
            } else {
                BoostValue::Flat(value)
            },
        ));
    }
    None
}
