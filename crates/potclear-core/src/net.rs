//! Net balance calculation.
//!
//! First stage of a settlement: derive each player's net position
//! (cash-out minus total buy-in) from the session snapshot. Fails up
//! front if any player is still missing a cash-out — settlement never
//! starts on an incomplete table.

use potclear_types::{Player, PlayerId, PotclearError, Result};
use rust_decimal::Decimal;

/// A player's derived net position. Ephemeral: recomputed on every
/// settlement, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetBalance {
    pub player_id: PlayerId,
    /// Positive means net winner, negative means net loser.
    pub amount: Decimal,
}

/// Derive net balances for all players, in input order.
///
/// # Errors
/// Returns [`PotclearError::IncompleteSettlement`] listing every player
/// without a reported cash-out. No balances are computed in that case.
pub fn net_balances(players: &[Player]) -> Result<Vec<NetBalance>> {
    let missing: Vec<PlayerId> = players
        .iter()
        .filter(|p| !p.has_cashed_out())
        .map(|p| p.id)
        .collect();
    if !missing.is_empty() {
        return Err(PotclearError::IncompleteSettlement { missing });
    }

    Ok(players
        .iter()
        .map(|p| NetBalance {
            player_id: p.id,
            amount: p
                .net_balance()
                .expect("cash-out presence checked above"),
        })
        .collect())
}
