//! Tolerant parsing for free-text rupiah amounts.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a free-text currency string (`"Rp 1.500.000"`, `"2,000,000"`,
/// `"1500000"`) by stripping every non-digit character.
///
/// Spreadsheet money columns carry arbitrary formatting; the digits are the
/// only reliable signal. An empty or digit-free value parses to ZERO.
pub fn parse_currency_tolerant(value: &str) -> Decimal {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(&digits) {
        Ok(d) => d,
        Err(e) => {
            log::error!("Failed to parse currency value '{}': {}. Falling back to ZERO.", value, e);
            Decimal::ZERO
        }
    }
}
