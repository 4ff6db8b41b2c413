//! Parsing of raw cost annotations.
//!
//! Annotations use integer-prefix semantics: leading whitespace is skipped,
//! an optional sign is read, then the leading run of ASCII digits. Anything
//! after the digits is ignored. An annotation with no leading digits, or no
//! annotation at all, costs zero. Parsing never fails.
//!
//! Magnitudes are capped at [`MAX_COST`], the largest 15-digit amount. An
//! annotation beyond it prices at the cap (with its sign) and logs a warning,
//! which keeps every sum of configured costs well inside `Decimal`'s range.

use rust_decimal::Decimal;
use tracing::warn;

/// Largest magnitude a single cost annotation can carry.
pub const MAX_COST: u64 = 999_999_999_999_999;

/// Parses a cost annotation, treating missing or malformed input as zero.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use webforms_core::pricing::parse_cost;
///
/// assert_eq!(parse_cost(Some("1500")), Decimal::from(1500));
/// assert_eq!(parse_cost(Some(" 2000 rupees")), Decimal::from(2000));
/// assert_eq!(parse_cost(Some("12.9")), Decimal::from(12));
/// assert_eq!(parse_cost(Some("free")), Decimal::ZERO);
/// assert_eq!(parse_cost(None), Decimal::ZERO);
/// ```
pub fn parse_cost(annotation: Option<&str>) -> Decimal {
    let Some(raw) = annotation else {
        return Decimal::ZERO;
    };

    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = unsigned.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digit_count == 0 {
        if !raw.trim().is_empty() {
            warn!(annotation = %raw, "cost annotation has no leading digits; pricing as zero");
        }
        return Decimal::ZERO;
    }

    let magnitude = match unsigned[..digit_count].parse::<u64>() {
        Ok(value) if value <= MAX_COST => Decimal::from(value),
        _ => {
            warn!(annotation = %raw, max = MAX_COST, "cost annotation too large; capping");
            Decimal::from(MAX_COST)
        }
    };

    if negative { -magnitude } else { magnitude }
}
