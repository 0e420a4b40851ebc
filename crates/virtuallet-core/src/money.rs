//! Monetary amount helpers.
//!
//! Every amount that reaches the ledger is rounded to two decimal places,
//! half away from zero.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Result, WalletError};

/// Number of decimal places amounts are stored with.
pub const SCALE: u32 = 2;

/// Largest absolute amount, and balance, the ledger accepts.
///
/// Amounts are stored as SQLite `REAL`. Up to this size the spacing between
/// neighbouring doubles stays far below a cent, so sums round back to the
/// cents that were entered.
pub const MAX_AMOUNT_UNITS: i64 = 1_000_000_000_000;

/// `MAX_AMOUNT_UNITS` as a decimal.
pub fn max_amount() -> Decimal {
    Decimal::from(MAX_AMOUNT_UNITS)
}

/// Pass `amount` through if it lies within `[-max_amount, max_amount]`.
///
/// # Errors
///
/// Returns `WalletError::InvalidAmount` for anything larger.
pub fn ensure_in_range(amount: Decimal) -> Result<Decimal> {
    if amount.abs() > max_amount() {
        return Err(WalletError::InvalidAmount);
    }
    Ok(amount)
}

/// Round an amount to ledger precision.
pub fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Parse user-entered text into an amount.
///
/// The sign is preserved so callers can tell a negative entry apart from a
/// zero one. Text that is not a number yields `InvalidAmount`.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    Decimal::from_str(input.trim()).map_err(|_| WalletError::InvalidAmount)
}

/// Convert a stored `REAL` value back into a rounded amount.
pub fn from_sql_real(value: f64) -> Result<Decimal> {
    Decimal::try_from(value)
        .map(round)
        .map_err(|e| WalletError::Storage(format!("Invalid amount {}: {}", value, e)))
}

/// Convert an amount into the `REAL` representation SQLite stores.
pub fn to_sql_real(amount: Decimal) -> Result<f64> {
    round(amount)
        .to_f64()
        .ok_or_else(|| WalletError::Storage(format!("Amount out of range: {}", amount)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round(dec!(12.345)), dec!(12.35));
        assert_eq!(round(dec!(-12.345)), dec!(-12.35));
        assert_eq!(round(dec!(0.004)), dec!(0.00));
        assert_eq!(round(dec!(7)), dec!(7.00));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 ").unwrap(), dec!(12.5));
        assert_eq!(parse_amount("-3").unwrap(), dec!(-3));
        assert!(matches!(parse_amount("abc"), Err(WalletError::InvalidAmount)));
        assert!(matches!(parse_amount(""), Err(WalletError::InvalidAmount)));
    }

    #[test]
    fn test_sql_real_conversion() {
        assert!((to_sql_real(dec!(-12.345)).unwrap() + 12.35).abs() < 1e-9);
        assert_eq!(from_sql_real(0.1 + 0.2).unwrap(), dec!(0.30));
        assert!(from_sql_real(f64::NAN).is_err());
    }

    #[test]
    fn test_range_limit() {
        assert_eq!(ensure_in_range(max_amount()).unwrap(), max_amount());
        assert_eq!(ensure_in_range(-max_amount()).unwrap(), -max_amount());
        assert!(matches!(
            ensure_in_range(max_amount() + dec!(0.01)),
            Err(WalletError::InvalidAmount)
        ));
        assert!(matches!(
            ensure_in_range(Decimal::MAX),
            Err(WalletError::InvalidAmount)
        ));
    }

    #[test]
    fn test_largest_amount_survives_real_column() {
        let largest = max_amount() - dec!(0.01);
        let stored = to_sql_real(largest).unwrap();
        assert_eq!(from_sql_real(stored).unwrap(), largest);
    }
}
