//! Formatting helpers for presenting prices and percentages.

/// Groups the digits of a whole number the way `th-TH` number formatting does.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-baht amount with digit grouping, e.g. `5,500,000`.
pub fn format_amount(value: f64) -> String {
    group_thousands(value.round() as i64)
}

/// Whole-baht price with the currency sign, e.g. `฿5,500,000`.
pub fn format_baht(value: f64) -> String {
    format!("฿{}", format_amount(value))
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Signed percentage (`+8.5%`, `-3.2%`) with one decimal.
pub fn format_signed_percent(value: f64) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(5_500_000), "5,500,000");
        assert_eq!(group_thousands(-12_345), "-12,345");
    }

    #[test]
    fn baht_rounds_to_whole_units() {
        assert_eq!(format_baht(4_499_999.6), "฿4,500,000");
        assert_eq!(format_baht(1_247.2), "฿1,247");
    }

    #[test]
    fn signed_percent_keeps_explicit_plus() {
        assert_eq!(format_signed_percent(8.5), "+8.5%");
        assert_eq!(format_signed_percent(0.0), "+0.0%");
        assert_eq!(format_signed_percent(-3.25), "-3.2%");
        assert_eq!(format_percent(87.4, 0), "87%");
    }
}
