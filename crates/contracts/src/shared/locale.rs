//! pt-BR numeric presentation helpers.
//!
//! Values are rendered with period thousands separators and a comma decimal,
//! the inverse of Rust's default `format!` output, so the separators are
//! produced directly instead of relying on a process locale.

/// Formats a BRL amount with two fraction digits.
///
/// # Examples
/// ```
/// use contracts::shared::locale::format_currency;
/// assert_eq!(format_currency(0.0), "R$ 0,00");
/// assert_eq!(format_currency(1234567.89), "R$ 1.234.567,89");
/// ```
pub fn format_currency(value: f64) -> String {
    format!("R$ {}", grouped_decimal(value))
}

/// Formats a quantity scaled to thousands ("mil") or millions ("milhões").
///
/// The 1e6 threshold alone selects the suffix; the value is divided by the
/// matching unit before formatting.
///
/// # Examples
/// ```
/// use contracts::shared::locale::format_magnitude;
/// assert_eq!(format_magnitude(2_000_000.0), "2,00 milhões");
/// assert_eq!(format_magnitude(4_500.0), "4,50 mil");
/// ```
pub fn format_magnitude(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{} milhões", grouped_decimal(value / 1_000_000.0))
    } else {
        format!("{} mil", grouped_decimal(value / 1_000.0))
    }
}

/// Formats an integer count with period thousands separators.
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Two-fraction-digit rendering with pt-BR separators.
fn grouped_decimal(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{},{}", group_thousands(int_part), frac_part)
}

/// Inserts a period every three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && ch != '-' {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_zero() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
    }

    #[test]
    fn currency_swaps_separators() {
        assert_eq!(format_currency(1234567.89), "R$ 1.234.567,89");
        assert_eq!(format_currency(350.0), "R$ 350,00");
        assert_eq!(format_currency(1000.0), "R$ 1.000,00");
        assert_eq!(format_currency(999.99), "R$ 999,99");
    }

    #[test]
    fn magnitude_suffix_follows_threshold() {
        assert!(format_magnitude(500.0).ends_with("mil"));
        assert!(format_magnitude(999_999.0).ends_with("mil"));
        assert!(format_magnitude(1_000_000.0).ends_with("milhões"));
        assert!(format_magnitude(2_000_000.0).ends_with("milhões"));
    }

    #[test]
    fn magnitude_scales_by_unit() {
        assert_eq!(format_magnitude(2_000_000.0), "2,00 milhões");
        assert_eq!(format_magnitude(500.0), "0,50 mil");
        assert_eq!(format_magnitude(4_500.0), "4,50 mil");
        assert_eq!(format_magnitude(1_250_000.0), "1,25 milhões");
    }

    #[test]
    fn magnitude_accepts_zero() {
        assert_eq!(format_magnitude(0.0), "0,00 mil");
    }

    #[test]
    fn count_grouping() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }
}
