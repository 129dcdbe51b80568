//! Currency rounding and rendering helpers.
//!
//! The engine keeps full f64 precision end to end; rounding happens only
//! at the report boundary.

/// Round a currency amount to the given number of decimal places.
#[must_use]
pub fn round_currency(amount: f64, decimals: u8) -> f64 {
    let factor = 10f64.powi(i32::from(decimals));
    (amount * factor).round() / factor
}

/// Render a currency amount with thousands separators, e.g. `$1,234,567.89`.
#[must_use]
pub fn format_currency(amount: f64, decimals: u8) -> String {
    let rounded = round_currency(amount, decimals);
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let mut grouped = String::new();
    let digits = whole.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if negative { "-" } else { "" };
    if decimals == 0 {
        format!("{sign}${grouped}")
    } else {
        let frac = abs.fract() * 10f64.powi(i32::from(decimals));
        format!(
            "{sign}${grouped}.{:0width$}",
            frac.round() as u64,
            width = decimals as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(1.005, 2), 1.0);
        assert_eq!(round_currency(1234.5678, 2), 1234.57);
        assert_eq!(round_currency(99.999, 0), 100.0);
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(1_234_567.891, 2), "$1,234,567.89");
        assert_eq!(format_currency(0.0, 2), "$0.00");
        assert_eq!(format_currency(999.0, 0), "$999");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-48_000.0, 0), "-$48,000");
    }
}
