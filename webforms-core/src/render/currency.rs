use rust_decimal::Decimal;

pub const RUPEE: &str = "₹";

/// Formats an amount with Indian digit grouping: the last three digits form
/// one group and the rest are grouped in pairs (`12,34,567`). At most three
/// fraction digits are shown, trailing zeros dropped.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use webforms_core::render::format_inr;
///
/// assert_eq!(format_inr(dec!(10000)), "10,000");
/// assert_eq!(format_inr(dec!(100000)), "1,00,000");
/// assert_eq!(format_inr(dec!(1234567)), "12,34,567");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(3, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + whole.len() / 2 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_indian(whole));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
