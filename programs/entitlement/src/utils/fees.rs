//! Proportional fee split for stake/unstake flows.

use anchor_lang::prelude::*;

use crate::constants::RATE_DENOMINATOR;
use crate::error::LedgerError;

/// Splits `gross` into `(fee, net)` at `fee_rate_bps` basis points.
/// `fee + net == gross` exactly; the only rounding is the truncation in `fee`.
pub fn split_fee(gross: u64, fee_rate_bps: u64) -> Result<(u64, u64)> {
    require!(fee_rate_bps <= RATE_DENOMINATOR, LedgerError::InvalidInput);
    let fee = ((gross as u128) * (fee_rate_bps as u128) / (RATE_DENOMINATOR as u128)) as u64;
    let net = gross.checked_sub(fee).ok_or(LedgerError::MathOverflow)?;
    Ok((fee, net))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_common_rates() {
        assert_eq!(split_fee(10_000, 250).unwrap(), (250, 9_750));
        assert_eq!(split_fee(10_000, 0).unwrap(), (0, 10_000));
        assert_eq!(split_fee(999, 10_000).unwrap(), (999, 0));
    }

    #[test]
    fn fee_truncates_toward_net() {
        // 3 * 5000 / 10000 = 1.5 -> 1
        assert_eq!(split_fee(3, 5_000).unwrap(), (1, 2));
        assert_eq!(split_fee(1, 1).unwrap(), (0, 1));
    }

    #[test]
    fn fee_plus_net_is_gross_exactly() {
        for gross in [0u64, 1, 7, 9_999, 10_000, u64::MAX] {
            for bps in [0u64, 1, 250, 6_500, 9_999, 10_000] {
                let (fee, net) = split_fee(gross, bps).unwrap();
                assert_eq!(fee + net, gross);
            }
        }
    }

    #[test]
    fn rejects_rate_above_denominator() {
        assert!(split_fee(100, 10_001).is_err());
    }
}
