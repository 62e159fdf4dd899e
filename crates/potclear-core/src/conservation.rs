//! Conservation validation.
//!
//! Invariant checked before any matching:
//! ```text
//! Σ(positive balances) == Σ(|negative balances|)  (within EPSILON)
//! ```
//!
//! Money only moves between players, so total winnings must equal total
//! losses. A violation means a bookkeeping error upstream (e.g. a buy-in
//! recorded against the wrong player) and settlement must not proceed.

use potclear_types::{PotclearError, Result, constants::EPSILON};
use rust_decimal::Decimal;

use crate::net::NetBalance;

/// Credit / debit pool totals produced by a passing conservation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConservationCheck {
    /// Sum of all positive balances (total winnings).
    pub credit_total: Decimal,
    /// Sum of the absolute values of all negative balances (total losses).
    pub debit_total: Decimal,
}

/// Verify that winnings and losses balance within [`EPSILON`].
///
/// # Errors
/// Returns [`PotclearError::ImbalancedLedger`] carrying both pool totals
/// if they differ by more than the tolerance. The ledger is inconsistent
/// and no transfers may be produced from it.
pub fn verify_conservation(balances: &[NetBalance]) -> Result<ConservationCheck> {
    let credit_total: Decimal = balances
        .iter()
        .filter(|b| b.amount > Decimal::ZERO)
        .map(|b| b.amount)
        .sum();
    let debit_total: Decimal = balances
        .iter()
        .filter(|b| b.amount < Decimal::ZERO)
        .map(|b| -b.amount)
        .sum();

    if (credit_total - debit_total).abs() > EPSILON {
        return Err(PotclearError::ImbalancedLedger {
            credit_total,
            debit_total,
        });
    }

    Ok(ConservationCheck {
        credit_total,
        debit_total,
    })
}
