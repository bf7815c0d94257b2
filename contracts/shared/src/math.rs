//! Fixed-point helpers for the per-share accumulators.
//!
//! Every division truncates toward zero so rounding dust always stays in the
//! fund and the sum of claimable amounts never exceeds what was received.

use crate::constants::{BPS_DENOMINATOR, PRECISION};
use crate::errors::Error;
use crate::types::Amount;

/// Accumulator increase for `amount` spread across `total_records` shares.
pub fn accrual_per_share(amount: Amount, total_records: u32) -> Result<i128, Error> {
    if amount < 0 || total_records == 0 {
        return Err(Error::InvalidConfig);
    }
    amount
        .checked_mul(PRECISION)
        .ok_or(Error::Overflow)?
        .checked_div(total_records as i128)
        .ok_or(Error::Overflow)
}

/// Whole units owed to a share whose debt snapshot is `debt`.
pub fn pending_units(acc_per_share: i128, debt: i128) -> i128 {
    if debt >= acc_per_share {
        return 0;
    }
    (acc_per_share - debt) / PRECISION
}

/// Splits a gross claim into `(fee, payout)`.
pub fn split_fee(gross: Amount, fee_bps: u32) -> Result<(Amount, Amount), Error> {
    let fee = gross
        .checked_mul(fee_bps as i128)
        .ok_or(Error::Overflow)?
        / BPS_DENOMINATOR;
    Ok((fee, gross - fee))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accrual_is_scaled_and_floored() {
        assert_eq!(accrual_per_share(200, 200).unwrap(), PRECISION);
        assert_eq!(accrual_per_share(1, 3).unwrap(), PRECISION / 3);
        assert_eq!(accrual_per_share(0, 7).unwrap(), 0);
    }

    #[test]
    fn test_accrual_rejects_empty_supply() {
        assert_eq!(accrual_per_share(100, 0), Err(Error::InvalidConfig));
        assert_eq!(accrual_per_share(-1, 10), Err(Error::InvalidConfig));
    }

    #[test]
    fn test_accrual_overflow_is_reported() {
        assert_eq!(accrual_per_share(i128::MAX, 1), Err(Error::Overflow));
    }

    #[test]
    fn test_pending_units_truncates() {
        assert_eq!(pending_units(2 * PRECISION, PRECISION), 1);
        assert_eq!(pending_units(PRECISION - 1, 0), 0);
        assert_eq!(pending_units(5 * PRECISION / 2, 0), 2);
        assert_eq!(pending_units(PRECISION, PRECISION), 0);
    }

    #[test]
    fn test_split_fee() {
        assert_eq!(split_fee(10_000_000, 100).unwrap(), (100_000, 9_900_000));
        assert_eq!(split_fee(99, 100).unwrap(), (0, 99));
        assert_eq!(split_fee(500, 0).unwrap(), (0, 500));
    }

    #[test]
    fn test_floor_division_never_over_distributes() {
        // 10 units over 3 shares: each share gets 3, one unit stays as dust.
        let acc = accrual_per_share(10, 3).unwrap();
        let owed: i128 = (0..3).map(|_| pending_units(acc, 0)).sum();
        assert_eq!(owed, 9);
    }
}
