//! Metric formatter — magnitudes to display strings.
//!
//! Currency: `>= 1e6` → `$X.YM`, `>= 1e3` → `$X.YK`, else `$N`.
//! Percentage: one decimal place, `%` suffix.
//! Count: same K/M thresholds as currency, no `$`.
//!
//! All rounding is half-up (`round_half_up`, `one_decimal`), matching how the
//! page has always rounded displayed values. `format!("{:.1}")` alone rounds
//! exact ties to even (5.25 → 5.2).

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Round to one decimal place, ties up.
pub fn one_decimal(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// `$X.YM`, `$X.YK` or `$N`.
pub fn format_currency(value: f64) -> String {
    format!("${}", abbreviate(value))
}

/// One decimal place with a `%` suffix.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", one_decimal(value))
}

/// `X.YM`, `X.YK` or `N`.
pub fn format_count(value: f64) -> String {
    abbreviate(value)
}

/// `$low – $high`, both rounded to whole dollars.
pub fn format_currency_range(low: f64, high: f64) -> String {
    format!("${} – ${}", round_half_up(low), round_half_up(high))
}

/// Millions slider: `$X.YM` at one million and above, `$NK` below.
pub fn format_millions(millions: f64) -> String {
    if millions >= 1.0 {
        format!("${:.1}M", one_decimal(millions))
    } else {
        format!("${}K", round_half_up(millions * 1000.0))
    }
}

fn abbreviate(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", one_decimal(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{:.1}K", one_decimal(value / 1_000.0))
    } else {
        format!("{}", round_half_up(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_thresholds() {
        assert_eq!(format_currency(252_000.0), "$252.0K");
        assert_eq!(format_currency(1_000.0), "$1.0K");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(999.5), "$1000");
        assert_eq!(format_currency(1_000_000.0), "$1.0M");
        assert_eq!(format_currency(3_450_000.0), "$3.5M");
        assert_eq!(format_currency(0.0), "$0");
        // Exact ties round up, not to even.
        assert_eq!(format_currency(5_250.0), "$5.3K");
        assert_eq!(format_currency(2_250_000.0), "$2.3M");
    }

    #[test]
    fn percent_one_decimal() {
        assert_eq!(format_percent(99.9), "99.9%");
        assert_eq!(format_percent(10.089_999_999_999_99), "10.1%");
        assert_eq!(format_percent(15.0), "15.0%");
        assert_eq!(format_percent(0.1), "0.1%");
        assert_eq!(format_percent(0.25), "0.3%");
        assert_eq!(format_percent(12.125), "12.1%");
    }

    #[test]
    fn count_suffixes() {
        assert_eq!(format_count(42.0), "42");
        assert_eq!(format_count(12_500.0), "12.5K");
        assert_eq!(format_count(2_000_000.0), "2.0M");
    }

    #[test]
    fn one_decimal_ties_round_up() {
        assert_eq!(one_decimal(5.25), 5.3);
        assert_eq!(one_decimal(49.56), 49.6);
        assert_eq!(one_decimal(2.0), 2.0);
    }

    #[test]
    fn currency_range_rounds_both_ends() {
        assert_eq!(format_currency_range(176_400.0, 327_600.0), "$176400 – $327600");
        assert_eq!(format_currency_range(0.4, 0.5), "$0 – $1");
    }

    #[test]
    fn millions_slider_switches_unit() {
        assert_eq!(format_millions(2.5), "$2.5M");
        assert_eq!(format_millions(1.0), "$1.0M");
        assert_eq!(format_millions(0.25), "$250K");
        assert_eq!(format_millions(1.25), "$1.3M");
    }

    #[test]
    fn half_up_rounding() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }
}
