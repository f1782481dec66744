//! Cell-to-type coercion for listing fields.
//!
//! Every function here returns `None` for "absent or unusable"; choosing the
//! field default is the caller's job, because coordinates must not be
//! defaulted at all.

use landscan_core::CellValue;

/// Parses the leading numeric prefix of `text`, spreadsheet-style.
///
/// Leading whitespace is skipped, then an optional sign, digits with an
/// optional fractional part, and an optional exponent are consumed.
/// Anything after the number is ignored (`"12.5 ac"` → `12.5`). Returns
/// `None` when no digits are present (`"N/A"`, `"."`, `""`).
#[must_use]
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Only take the exponent if it is complete, e.g. "1e5" but not "1e".
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Numeric cell, or text parsed with [`parse_leading_number`]. Non-finite
/// numbers are rejected.
#[must_use]
pub fn coerce_number(value: Option<&CellValue>) -> Option<f64> {
    match value? {
        CellValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
        CellValue::Text(s) => parse_leading_number(s),
        CellValue::Empty => None,
    }
}

/// Like [`coerce_number`], but text first has `$` and `,` stripped so
/// `"$450,000"` parses as `450000`.
#[must_use]
pub fn coerce_currency(value: Option<&CellValue>) -> Option<f64> {
    match value? {
        CellValue::Text(s) => {
            let cleaned: String = s.chars().filter(|c| !matches!(c, '$' | ',')).collect();
            parse_leading_number(&cleaned)
        }
        other => coerce_number(Some(other)),
    }
}

/// Integer view of [`coerce_number`], truncated toward zero.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn coerce_integer(value: Option<&CellValue>) -> Option<i64> {
    coerce_number(value).map(|n| n.trunc() as i64)
}

/// Coordinates use the same parse as [`coerce_number`]; a failure here
/// rejects the row instead of defaulting.
#[must_use]
pub fn coerce_coordinate(value: Option<&CellValue>) -> Option<f64> {
    coerce_number(value)
}

/// Text view of a cell, trimmed. Blank cells yield `None`.
#[must_use]
pub fn coerce_text(value: Option<&CellValue>) -> Option<String> {
    let value = value.filter(|v| !v.is_blank())?;
    Some(value.as_text()?.trim().to_owned())
}

/// Keeps `n` only when it is zero or positive.
#[must_use]
pub fn non_negative(n: Option<f64>) -> Option<f64> {
    n.filter(|v| *v >= 0.0)
}
