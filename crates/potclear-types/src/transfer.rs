//! Transfer records produced by the settlement matcher.
//!
//! A [`Transfer`] is one payment instruction: a net loser pays a net
//! winner a fixed amount. The ordered list of transfers is the whole
//! output of a settlement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{PlayerId, TransferId};

/// A single payout instruction from a net loser to a net winner.
///
/// Invariants upheld by the matcher: `amount > 0`, `from != to`, and the
/// sum of transfers into and out of each player reproduces that player's
/// net balance within the cent tolerance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    /// Deterministic identifier (same input → same ID).
    pub id: TransferId,
    /// The paying player (net loser).
    pub from: PlayerId,
    /// The receiving player (net winner).
    pub to: PlayerId,
    /// Amount owed, rounded to cent precision. Strictly positive.
    pub amount: Decimal,
}

impl std::fmt::Display for Transfer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_display() {
        let t = Transfer {
            id: TransferId::deterministic(0),
            from: PlayerId::new(),
            to: PlayerId::new(),
            amount: Decimal::new(50000, 2), // 500.00
        };
        let s = format!("{t}");
        assert!(s.contains("500.00"), "Got: {s}");
        assert!(s.contains("->"));
    }

    #[test]
    fn transfer_serde_roundtrip() {
        let t = Transfer {
            id: TransferId::deterministic(3),
            from: PlayerId::new(),
            to: PlayerId::new(),
            amount: Decimal::new(1999, 2),
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: Transfer = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
