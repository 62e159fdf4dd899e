//! # potclear-core
//!
//! **Pure deterministic settlement core for potclear.**
//!
//! Three stateless stages, run in sequence for one settlement event:
//!
//! 1. **Net balance calculator** ([`net`]) — cash-out minus buy-ins per player
//! 2. **Conservation validator** ([`conservation`]) — winnings must equal losses
//! 3. **Greedy settlement matcher** ([`matcher`]) — net balances → payout list
//!
//! The core has:
//!
//! - **Zero side effects**: no persistence, no session state, no I/O
//! - **Deterministic output**: same input -> same transfers, same IDs
//! - **Bounded cost**: one stable sort plus one linear merge, O(n log n)
//!
//! Data flows one way: players → net balances → (validated) → transfers.
//! Independent sessions may settle concurrently without coordination;
//! the core only reads caller-owned data and mutates local working state.

pub mod conservation;
pub mod matcher;
pub mod net;

pub use conservation::{ConservationCheck, verify_conservation};
pub use matcher::match_balances;
pub use net::{NetBalance, net_balances};

use potclear_types::{Player, Result, Transfer};

/// Compute the settlement for a finalized player list.
///
/// The sole boundary operation of the core. Preconditions enforced by
/// the caller: every player has at least one buy-in recorded. Degenerate
/// input — fewer than two players, or every balance already at zero —
/// is a valid empty settlement, not an error.
///
/// # Errors
/// - [`PotclearError::IncompleteSettlement`] if any player has no cash-out
/// - [`PotclearError::ImbalancedLedger`] if winnings and losses disagree
///   by more than the cent tolerance
///
/// [`PotclearError::IncompleteSettlement`]: potclear_types::PotclearError::IncompleteSettlement
/// [`PotclearError::ImbalancedLedger`]: potclear_types::PotclearError::ImbalancedLedger
pub fn compute_settlement(players: &[Player]) -> Result<Vec<Transfer>> {
    // Completeness is checked even for degenerate input: a lone player
    // without a cash-out is still an incomplete table.
    let balances = net_balances(players)?;

    if players.len() < 2 {
        return Ok(Vec::new());
    }

    let check = verify_conservation(&balances)?;

    let transfers = match_balances(&balances);
    tracing::info!(
        players = players.len(),
        credit_total = %check.credit_total,
        debit_total = %check.debit_total,
        transfers = transfers.len(),
        "Settlement computed"
    );
    Ok(transfers)
}

#[cfg(test)]
mod tests {
    use potclear_types::{Player, PotclearError};
    use rust_decimal::Decimal;

    use super::*;

    fn player(name: &str, buy_ins: &[i64], cash_out: Option<i64>) -> Player {
        let mut p = Player::new(name, Decimal::new(buy_ins[0], 0));
        for &b in &buy_ins[1..] {
            p.buy_ins.push(Decimal::new(b, 0));
        }
        p.cash_out = cash_out.map(|c| Decimal::new(c, 0));
        p
    }

    #[test]
    fn two_player_settlement() {
        // A buys 1000, cashes out 1500; B buys 1000, cashes out 500.
        let a = player("a", &[1000], Some(1500));
        let b = player("b", &[1000], Some(500));
        let transfers = compute_settlement(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].from, b.id);
        assert_eq!(transfers[0].to, a.id);
        assert_eq!(transfers[0].amount, Decimal::new(500, 0));
    }

    #[test]
    fn three_player_settlement() {
        // Nets: a +300, b +200, c -500.
        let a = player("a", &[1000], Some(1300));
        let b = player("b", &[1000], Some(1200));
        let c = player("c", &[1000], Some(500));
        let transfers = compute_settlement(&[a.clone(), b.clone(), c.clone()]).unwrap();
        assert_eq!(transfers.len(), 2);
        assert_eq!((transfers[0].from, transfers[0].to), (c.id, a.id));
        assert_eq!(transfers[0].amount, Decimal::new(300, 0));
        assert_eq!((transfers[1].from, transfers[1].to), (c.id, b.id));
        assert_eq!(transfers[1].amount, Decimal::new(200, 0));
    }

    #[test]
    fn imbalanced_ledger_is_an_error() {
        // Nets: +100 and -50. Pools differ by 50, far beyond tolerance.
        let a = player("a", &[100], Some(200));
        let b = player("b", &[100], Some(50));
        let err = compute_settlement(&[a, b]).unwrap_err();
        assert!(matches!(err, PotclearError::ImbalancedLedger { .. }));
    }

    #[test]
    fn missing_cash_out_is_an_error() {
        let a = player("a", &[100], Some(100));
        let b = player("b", &[100], None);
        let err = compute_settlement(&[a, b]).unwrap_err();
        assert!(matches!(err, PotclearError::IncompleteSettlement { .. }));
    }

    #[test]
    fn fewer_than_two_players_is_empty_not_error() {
        assert!(compute_settlement(&[]).unwrap().is_empty());
        let solo = player("a", &[100], Some(100));
        assert!(compute_settlement(&[solo]).unwrap().is_empty());
    }

    #[test]
    fn all_even_table_settles_with_no_transfers() {
        let a = player("a", &[500], Some(500));
        let b = player("b", &[500], Some(500));
        assert!(compute_settlement(&[a, b]).unwrap().is_empty());
    }

    #[test]
    fn settlement_is_deterministic() {
        let players = vec![
            player("a", &[1000], Some(1450)),
            player("b", &[1000], Some(550)),
            player("c", &[500, 500], Some(1000)),
        ];
        let first = compute_settlement(&players).unwrap();
        let second = compute_settlement(&players).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn flow_conservation_across_a_full_table() {
        let players = vec![
            player("a", &[1000, 500], Some(2750)),
            player("b", &[1000], Some(0)),
            player("c", &[2000], Some(1600)),
            player("d", &[500], Some(650)),
        ];
        let transfers = compute_settlement(&players).unwrap();
        for p in &players {
            let expected = p.net_balance().unwrap();
            let incoming: Decimal = transfers
                .iter()
                .filter(|t| t.to == p.id)
                .map(|t| t.amount)
                .sum();
            let outgoing: Decimal = transfers
                .iter()
                .filter(|t| t.from == p.id)
                .map(|t| t.amount)
                .sum();
            assert_eq!(incoming - outgoing, expected, "player {}", p.name);
        }
    }
}
