//! Configuration for a potclear game session.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for a single game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Suggested buy-in amount pre-filled for new players. The session
    /// store updates this whenever a different amount is actually used,
    /// so the most recent stake becomes the new suggestion.
    pub default_buy_in: Decimal,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_buy_in: constants::DEFAULT_BUY_IN,
        }
    }
}
