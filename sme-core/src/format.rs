//! Display formatting for money and percentages.

/// Label shown in front of every amount.
pub const CURRENCY: &str = "RM";

/// Group the digits of a whole number with commas.
fn group_thousands(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Format an amount as whole ringgit with thousands separators.
///
/// `85000.0` → `"RM 85,000"`, `-1234.4` → `"-RM 1,234"`.
pub fn format_ringgit(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".into();
    }
    let whole = amount.abs().round().to_string();
    let sign = if amount < 0.0 && whole != "0" { "-" } else { "" };
    format!("{}{} {}", sign, CURRENCY, group_thousands(&whole))
}

/// Format a percentage with a fixed number of decimals and an explicit
/// sign for positive values.
pub fn format_pct(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "n/a".into();
    }
    if value > 0.0 {
        format!("+{:.*}%", decimals, value)
    } else {
        format!("{:.*}%", decimals, value)
    }
}

/// Format a plain number, or `n/a` when it is not finite.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        "n/a".into()
    }
}

/// Compact form used on summary cards: `RM 45.8K`, `RM 720K`, `RM 1.2M`.
pub fn format_compact(amount: f64) -> String {
    if !amount.is_finite() {
        return "n/a".into();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let abs = amount.abs();
    let (scaled, suffix) = if abs >= 1_000_000.0 {
        (abs / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (abs / 1_000.0, "K")
    } else {
        (abs, "")
    };
    let digits = format!("{:.1}", scaled);
    let digits = digits.strip_suffix(".0").unwrap_or(&digits);
    format!("{}{} {}{}", sign, CURRENCY, digits, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ringgit_groups_thousands() {
        assert_eq!(format_ringgit(0.0), "RM 0");
        assert_eq!(format_ringgit(999.0), "RM 999");
        assert_eq!(format_ringgit(85_000.0), "RM 85,000");
        assert_eq!(format_ringgit(1_234_567.0), "RM 1,234,567");
        assert_eq!(format_ringgit(-1_234.4), "-RM 1,234");
    }

    #[test]
    fn ringgit_rounds_to_whole() {
        assert_eq!(format_ringgit(106_249.6), "RM 106,250");
        assert_eq!(format_ringgit(-0.2), "RM 0");
    }

    #[test]
    fn ringgit_beyond_u64_keeps_every_digit() {
        assert_eq!(
            format_ringgit(1e23),
            "RM 100,000,000,000,000,000,000,000"
        );
        assert_eq!(
            format_ringgit(-2e20),
            "-RM 200,000,000,000,000,000,000"
        );
    }

    #[test]
    fn non_finite_renders_na() {
        assert_eq!(format_ringgit(f64::NAN), "n/a");
        assert_eq!(format_pct(f64::INFINITY, 1), "n/a");
        assert_eq!(format_number(f64::NEG_INFINITY, 0), "n/a");
        assert_eq!(format_compact(f64::NAN), "n/a");
    }

    #[test]
    fn pct_has_explicit_sign() {
        assert_eq!(format_pct(125.0, 1), "+125.0%");
        assert_eq!(format_pct(-5.26, 1), "-5.3%");
        assert_eq!(format_pct(0.0, 1), "0.0%");
    }

    #[test]
    fn compact_amounts() {
        assert_eq!(format_compact(45_800.0), "RM 45.8K");
        assert_eq!(format_compact(720_000.0), "RM 720K");
        assert_eq!(format_compact(850.0), "RM 850");
        assert_eq!(format_compact(1_200_000.0), "RM 1.2M");
    }
}
