//! Player model for a cash-game session.
//!
//! A player owns an ordered sequence of buy-ins and, once the game ends,
//! a declared cash-out. The settlement core only ever reads this record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::PlayerId;

/// One participant in the cash pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique, stable identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Every buy-in recorded over the session, in order. Each is positive.
    pub buy_ins: Vec<Decimal>,
    /// Final holding reported at close-out. `None` until reported.
    pub cash_out: Option<Decimal>,
    /// When the player joined the session.
    pub joined_at: DateTime<Utc>,
}

impl Player {
    /// Create a player with an initial buy-in.
    #[must_use]
    pub fn new(name: impl Into<String>, buy_in: Decimal) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            buy_ins: vec![buy_in],
            cash_out: None,
            joined_at: Utc::now(),
        }
    }

    /// Sum of all buy-ins.
    #[must_use]
    pub fn total_buy_in(&self) -> Decimal {
        self.buy_ins.iter().copied().sum()
    }

    /// Whether a cash-out has been reported.
    #[must_use]
    pub fn has_cashed_out(&self) -> bool {
        self.cash_out.is_some()
    }

    /// Net position: cash-out minus total buy-in. `None` until the
    /// cash-out is reported. Positive means net winner.
    #[must_use]
    pub fn net_balance(&self) -> Option<Decimal> {
        self.cash_out.map(|c| c - self.total_buy_in())
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (in: {})", self.name, self.total_buy_in())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_buy_in_sums_all_entries() {
        let mut p = Player::new("alice", Decimal::new(1000, 0));
        p.buy_ins.push(Decimal::new(500, 0));
        assert_eq!(p.total_buy_in(), Decimal::new(1500, 0));
    }

    #[test]
    fn net_balance_requires_cash_out() {
        let mut p = Player::new("bob", Decimal::new(1000, 0));
        assert!(!p.has_cashed_out());
        assert_eq!(p.net_balance(), None);

        p.cash_out = Some(Decimal::new(1500, 0));
        assert_eq!(p.net_balance(), Some(Decimal::new(500, 0)));
    }

    #[test]
    fn net_balance_ignores_buy_in_count() {
        // Two buy-ins of 1000 + 500 with a 2000 cash-out net to +500,
        // same as a single 1500 buy-in would.
        let mut p = Player::new("carol", Decimal::new(1000, 0));
        p.buy_ins.push(Decimal::new(500, 0));
        p.cash_out = Some(Decimal::new(2000, 0));
        assert_eq!(p.net_balance(), Some(Decimal::new(500, 0)));
    }

    #[test]
    fn player_serde_roundtrip() {
        let mut p = Player::new("dave", Decimal::new(100, 0));
        p.cash_out = Some(Decimal::new(12345, 2)); // 123.45
        let json = serde_json::to_string(&p).unwrap();
        let back: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
