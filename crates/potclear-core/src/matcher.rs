//! Greedy settlement matcher.
//!
//! Consumes validated net balances and emits the payout list. Largest
//! creditor and largest debtor are paired first; each step fully resolves
//! at least one side's head, so n non-zero balances settle in at most
//! n − 1 transfers.
//!
//! ## Determinism
//!
//! Both pools are stable-sorted **once**, up front, and never re-sorted:
//! this is a linear cursor merge over immutable sorted lists, not a
//! "re-pick the global maximum" strategy. Equal balances keep their
//! input order, and transfer IDs are derived from the emit sequence, so
//! the same input always produces the same output, byte for byte.

use potclear_types::{
    Transfer, TransferId,
    constants::{CENT_PRECISION, EPSILON},
};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::net::NetBalance;

/// Match net balances into an ordered list of transfers.
///
/// Callers must have validated conservation first; this function assumes
/// the credit and debit pools balance within [`EPSILON`]. Balances with
/// `|amount| < EPSILON` are already settled and never enter a pool.
#[must_use]
pub fn match_balances(balances: &[NetBalance]) -> Vec<Transfer> {
    // Stable sorts: ties keep input order.
    let mut creditors: Vec<NetBalance> = balances
        .iter()
        .filter(|b| b.amount >= EPSILON)
        .copied()
        .collect();
    creditors.sort_by(|a, b| b.amount.cmp(&a.amount));

    let mut debtors: Vec<NetBalance> = balances
        .iter()
        .filter(|b| b.amount <= -EPSILON)
        .copied()
        .collect();
    debtors.sort_by(|a, b| a.amount.cmp(&b.amount));

    let mut transfers: Vec<Transfer> = Vec::new();
    let mut seq: u64 = 0;

    // Cursors over the sorted pools, each with a local remaining-balance
    // accumulator for the current head. No structural removal.
    let mut ci = 0;
    let mut di = 0;
    let mut credit_rem = creditors.first().map_or(Decimal::ZERO, |c| c.amount);
    let mut debit_rem = debtors.first().map_or(Decimal::ZERO, |d| d.amount);

    while ci < creditors.len() && di < debtors.len() {
        let amount = credit_rem
            .min(-debit_rem)
            .round_dp_with_strategy(CENT_PRECISION, RoundingStrategy::MidpointAwayFromZero);

        let transfer = Transfer {
            id: TransferId::deterministic(seq),
            from: debtors[di].player_id,
            to: creditors[ci].player_id,
            amount,
        };
        tracing::debug!(
            transfer_id = %transfer.id,
            from = %transfer.from,
            to = %transfer.to,
            amount = %transfer.amount,
            "Transfer emitted"
        );
        transfers.push(transfer);
        seq += 1;

        credit_rem -= amount;
        debit_rem += amount;

        // Rounding can overshoot by up to half a cent; anything inside the
        // tolerance counts as resolved. Both cursors may advance at once.
        if credit_rem.abs() < EPSILON {
            ci += 1;
            if let Some(c) = creditors.get(ci) {
                credit_rem = c.amount;
            }
        }
        if debit_rem.abs() < EPSILON {
            di += 1;
            if let Some(d) = debtors.get(di) {
                debit_rem = d.amount;
            }
        }
    }

    transfers
}
