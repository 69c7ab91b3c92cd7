//! Decimal arithmetic for money.
//!
//! All monetary values flow through [`rust_decimal::Decimal`]; binary floats
//! never hold money. Scale and rounding mode are fixed at compile time rather
//! than configured through process-wide mutable state.

use crate::core::errors::LedgerError;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for stored/displayed currency amounts.
pub const CURRENCY_SCALE: u32 = 2;

/// Amounts within this tolerance of zero are treated as settled; aggregate
/// sums (percentages vs 100, exact amounts vs total) may deviate by at most
/// this much.
pub fn epsilon() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

pub fn add(a: Decimal, b: Decimal) -> Decimal {
    a + b
}

pub fn subtract(a: Decimal, b: Decimal) -> Decimal {
    a - b
}

pub fn multiply(a: Decimal, b: Decimal) -> Decimal {
    a * b
}

pub fn divide(a: Decimal, b: Decimal) -> Result<Decimal, LedgerError> {
    if b.is_zero() {
        return Err(LedgerError::DivisionByZero);
    }
    Ok(a / b)
}

/// Round to 2 decimal places, half-up.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn round_currency_is_half_up() {
        assert_eq!(round_currency(dec!(3.333)), dec!(3.33));
        assert_eq!(round_currency(dec!(3.335)), dec!(3.34));
        assert_eq!(round_currency(dec!(3.334999)), dec!(3.33));
        assert_eq!(round_currency(dec!(-3.335)), dec!(-3.34));
    }

    #[test]
    fn decimal_arithmetic_has_no_binary_drift() {
        // 0.1 + 0.2 is exactly 0.3 in base ten
        assert_eq!(add(dec!(0.1), dec!(0.2)), dec!(0.3));
        assert_eq!(subtract(dec!(1.00), dec!(0.9)), dec!(0.1));
        assert_eq!(multiply(dec!(0.07), dec!(100)), dec!(7.00));
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        assert!(matches!(
            divide(dec!(10), Decimal::ZERO),
            Err(LedgerError::DivisionByZero)
        ));
        assert_eq!(divide(dec!(10), dec!(4)).unwrap(), dec!(2.5));
    }
}
