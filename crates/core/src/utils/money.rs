//! Money helpers: parsing, rounding to cents and display formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::MONEY_DECIMAL_PRECISION;
use crate::errors::{Result, ValidationError};

/// Rounds an amount to whole cents using banker's rounding.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_DECIMAL_PRECISION, RoundingStrategy::MidpointNearestEven)
}

/// Parses user input like `5`, `2.50` or `$1,000` into an amount in cents.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    if cleaned.is_empty() {
        return Err(ValidationError::MissingField("amount".to_string()).into());
    }
    let value = Decimal::from_str(&cleaned)?;
    Ok(to_cents(value))
}

/// Ensures an amount (already in cents) is strictly positive.
pub fn require_positive(amount: Decimal) -> Result<Decimal> {
    let cents = to_cents(amount);
    if cents <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveAmount(amount).into());
    }
    Ok(cents)
}

/// Formats an amount like `$10,000.00`.
pub fn format_dollars(amount: Decimal) -> String {
    let cents = to_cents(amount);
    let negative = cents.is_sign_negative() && !cents.is_zero();
    let text = format!("{:.2}", cents.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}.{frac}")
    } else {
        format!("${grouped}.{frac}")
    }
}
