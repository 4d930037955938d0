//! Key Result number extraction
//!
//! Pulls a numeric target out of free text such as `"24K leads"` or
//! `"$1.5M ARR"`. Only the first number counts; ranges and percentages are
//! read as plain numbers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Optional currency, digits with commas and decimals, optional magnitude
static KR_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[$€£]?\s*([0-9,]+(?:\.[0-9]+)?)\s*([kKmMbB])?")
        .expect("KR pattern is valid")
});

fn magnitude(suffix: &str) -> Option<f64> {
    match suffix.to_ascii_lowercase().as_str() {
        "k" => Some(1_000.0),
        "m" => Some(1_000_000.0),
        "b" => Some(1_000_000_000.0),
        _ => None,
    }
}

/// Parse the first number in a KR string
///
/// Returns `None` for empty text, text without digits, or a value that does
/// not fit a finite `f64`.
///
/// ```
/// use nct_core::parse_kr_number;
///
/// assert_eq!(parse_kr_number("24K leads"), Some(24_000.0));
/// assert_eq!(parse_kr_number("$1.5M ARR"), Some(1_500_000.0));
/// assert_eq!(parse_kr_number("no number here"), None);
/// ```
#[must_use]
pub fn parse_kr_number(text: &str) -> Option<f64> {
    if text.is_empty() {
        return None;
    }
    let caps = KR_NUMBER.captures(text)?;
    let digits = caps.get(1)?.as_str().replace(',', "");
    let base: f64 = digits.parse().ok()?;

    let value = match caps.get(2).and_then(|m| magnitude(m.as_str())) {
        Some(mult) => base * mult,
        None => base,
    };
    value.is_finite().then_some(value)
}

/// KR target with the fallback of `1` for unparseable text
#[inline]
#[must_use]
pub fn kr_target(text: &str) -> f64 {
    parse_kr_number(text).unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table() {
        assert_eq!(parse_kr_number("24K leads"), Some(24_000.0));
        assert_eq!(parse_kr_number("$1.5M ARR"), Some(1_500_000.0));
        assert_eq!(parse_kr_number("50%"), Some(50.0));
        assert_eq!(parse_kr_number("3,500"), Some(3_500.0));
        assert_eq!(parse_kr_number(""), None);
        assert_eq!(parse_kr_number("no number here"), None);
    }

    #[test]
    fn other_currencies_and_billions() {
        assert_eq!(parse_kr_number("€2b pipeline"), Some(2_000_000_000.0));
        assert_eq!(parse_kr_number("£ 10 k"), Some(10_000.0));
    }

    #[test]
    fn plain_and_decimal() {
        assert_eq!(parse_kr_number("10"), Some(10.0));
        assert_eq!(parse_kr_number("2000 users"), Some(2_000.0));
        assert_eq!(parse_kr_number("reach 4.25 NPS"), Some(4.25));
    }

    #[test]
    fn first_number_only() {
        assert_eq!(parse_kr_number("50-100 demos"), Some(50.0));
        assert_eq!(parse_kr_number("3 launches, 12 posts"), Some(3.0));
    }

    #[test]
    fn suffix_letter_after_space_counts() {
        // The letter right after the number is read as a magnitude.
        assert_eq!(parse_kr_number("10 meetings"), Some(10_000_000.0));
    }

    #[test]
    fn stray_leading_comma_yields_none() {
        assert_eq!(parse_kr_number("Sales, 5K"), None);
    }

    #[test]
    fn overflow_is_rejected() {
        let huge = "9".repeat(400);
        assert_eq!(parse_kr_number(&huge), None);
    }

    #[test]
    fn fallback_target() {
        assert_eq!(kr_target(""), 1.0);
        assert_eq!(kr_target("TBD"), 1.0);
        assert_eq!(kr_target("24k"), 24_000.0);
    }
}
