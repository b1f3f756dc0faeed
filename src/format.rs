//! Deterministic display formatting.
//!
//! Output never depends on the host locale: US dollar amounts with comma
//! grouping and no fractional part, English short month names.

use chrono::NaiveDate;

/// Formats whole currency units as `$1,234,567`.
///
/// # Examples
///
/// ```
/// use crmdeck::format::format_currency;
///
/// assert_eq!(format_currency(0), "$0");
/// assert_eq!(format_currency(1_015_000), "$1,015,000");
/// ```
#[must_use]
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a date as `Jan 5, 2024`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Formats a percent-change annotation, e.g. `+12% from last month`.
#[must_use]
pub fn format_change(percent: i32) -> String {
    if percent > 0 {
        format!("+{percent}% from last month")
    } else {
        format!("{percent}% from last month")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(999), "$999");
        assert_eq!(format_currency(1_000), "$1,000");
        assert_eq!(format_currency(12_800_000), "$12,800,000");
        assert_eq!(format_currency(100_000), "$100,000");
    }

    #[test]
    fn currency_handles_u64_max() {
        assert_eq!(format_currency(u64::MAX), "$18,446,744,073,709,551,615");
    }

    #[test]
    fn date_is_english_short_month_unpadded_day() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(d), "Jan 5, 2024");
        let d = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        assert_eq!(format_date(d), "Dec 15, 2023");
    }

    #[test]
    fn change_carries_sign() {
        assert_eq!(format_change(12), "+12% from last month");
        assert_eq!(format_change(-5), "-5% from last month");
        assert_eq!(format_change(0), "0% from last month");
    }
}
