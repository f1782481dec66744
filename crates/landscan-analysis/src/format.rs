/// Formats a dollar amount with thousands separators and no cents:
/// `450000.0` → `"$450,000"`, `-1234.6` → `"-$1,235"`.
///
/// Rounds half away from zero. Non-finite input formats as `"$0"`.
#[must_use]
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_owned();
    }

    let rounded = amount.abs().round();
    let digits = format!("{rounded:.0}");
    let negative = amount < 0.0 && rounded > 0.0;

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
