//! Error types for the potclear settlement engine.
//!
//! All errors use the `PC_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Player errors
//! - 2xx: Settlement errors
//! - 3xx: Session errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::PlayerId;

/// Central error enum for all potclear operations.
#[derive(Debug, Error)]
pub enum PotclearError {
    // =================================================================
    // Player Errors (1xx)
    // =================================================================
    /// The requested player is not seated in this session.
    #[error("PC_ERR_100: Player not found: {0}")]
    PlayerNotFound(PlayerId),

    /// A buy-in must be a strictly positive amount.
    #[error("PC_ERR_101: Invalid buy-in amount: {amount}")]
    InvalidBuyIn { amount: Decimal },

    /// A cash-out cannot be negative.
    #[error("PC_ERR_102: Invalid cash-out amount: {amount}")]
    InvalidCashOut { amount: Decimal },

    // =================================================================
    // Settlement Errors (2xx)
    // =================================================================
    /// One or more players have not reported a cash-out; settlement is
    /// not attempted. Carries the IDs of the offending players.
    #[error("PC_ERR_200: Settlement incomplete: {} player(s) without cash-out", missing.len())]
    IncompleteSettlement { missing: Vec<PlayerId> },

    /// Total winnings and total losses differ by more than the tolerance.
    /// A contribution was recorded wrongly somewhere upstream.
    #[error(
        "PC_ERR_201: Imbalanced ledger: winnings {credit_total} != losses {debit_total}"
    )]
    ImbalancedLedger {
        credit_total: Decimal,
        debit_total: Decimal,
    },

    // =================================================================
    // Session Errors (3xx)
    // =================================================================
    /// The session is settled; start a new game to record further events.
    #[error("PC_ERR_300: Session already settled")]
    SessionAlreadySettled,

    /// The operation requires a settled session.
    #[error("PC_ERR_301: Session not settled yet")]
    SessionNotSettled,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("PC_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// I/O error (snapshot load/save).
    #[error("PC_ERR_903: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, PotclearError>;

// Conversion from std::io::Error
impl From<std::io::Error> for PotclearError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PotclearError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = PotclearError::PlayerNotFound(PlayerId::new());
        let msg = format!("{err}");
        assert!(msg.starts_with("PC_ERR_100"), "Got: {msg}");
    }

    #[test]
    fn imbalanced_ledger_display() {
        let err = PotclearError::ImbalancedLedger {
            credit_total: Decimal::new(100, 0),
            debit_total: Decimal::new(50, 0),
        };
        let msg = format!("{err}");
        assert!(msg.contains("PC_ERR_201"));
        assert!(msg.contains("100"));
        assert!(msg.contains("50"));
    }

    #[test]
    fn incomplete_settlement_display() {
        let err = PotclearError::IncompleteSettlement {
            missing: vec![PlayerId::new(), PlayerId::new()],
        };
        let msg = format!("{err}");
        assert!(msg.contains("PC_ERR_200"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn all_errors_have_pc_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(PotclearError::SessionAlreadySettled),
            Box::new(PotclearError::SessionNotSettled),
            Box::new(PotclearError::InvalidBuyIn {
                amount: Decimal::ZERO,
            }),
            Box::new(PotclearError::Serialization("test".into())),
            Box::new(PotclearError::IncompleteSettlement {
                missing: vec![PlayerId::new()],
            }),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("PC_ERR_"),
                "Error missing PC_ERR_ prefix: {msg}"
            );
        }
    }
}
