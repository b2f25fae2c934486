//! Formatters

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

/// Format a count with the matching noun, e.g. `"1 course"` or `"4 lessons"`.
pub fn format_plural(count: usize, singular: &str, plural: &str) -> String {
    let word = if count == 1 { singular } else { plural };

    format!("{count} {word}")
}

/// Format a price in `currency`, showing `free_label` for zero.
///
/// Whole amounts are shown without fraction digits (`"$90"`), anything else
/// with the currency's full precision (`"$49.99"`, `"$12.50"`).
pub fn format_price(amount: Decimal, currency: &Currency, free_label: &str) -> String {
    if amount.is_zero() {
        return free_label.to_string();
    }

    let rendered = Money::from_decimal(amount, currency).to_string();

    if amount.fract().is_zero() {
        trim_zero_fraction(&rendered, usize::try_from(currency.exponent).unwrap_or(0))
    } else {
        rendered
    }
}

/// Drop the last `<separator><exponent zeros>` group that follows a digit.
fn trim_zero_fraction(rendered: &str, exponent: usize) -> String {
    if exponent == 0 {
        return rendered.to_string();
    }

    let mut chars = rendered.chars().collect::<Vec<_>>();

    let is_fraction = |start: usize| {
        chars.get(start - 1).is_some_and(char::is_ascii_digit)
            && chars.get(start).is_some_and(|c| !c.is_ascii_digit())
            && chars
                .get(start + 1..=start + exponent)
                .is_some_and(|digits| digits.iter().all(|digit| *digit == '0'))
            && chars
                .get(start + exponent + 1)
                .is_none_or(|c| !c.is_ascii_digit())
    };

    if let Some(start) = (1..chars.len()).rev().find(|start| is_fraction(*start)) {
        chars.drain(start..=start + exponent);
    }

    chars.into_iter().collect()
}
