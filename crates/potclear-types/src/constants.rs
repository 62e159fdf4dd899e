//! System-wide constants for the potclear settlement engine.

use rust_decimal::Decimal;

/// Currency precision: all transfer amounts are rounded to cents.
pub const CENT_PRECISION: u32 = 2;

/// Rounding tolerance for balance comparisons (one cent).
///
/// A ledger whose credit and debit pools differ by more than this is
/// inconsistent; a remaining balance smaller than this is settled.
pub const EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Default buy-in amount suggested for new players.
pub const DEFAULT_BUY_IN: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "potclear";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilon_is_one_cent() {
        assert_eq!(EPSILON, Decimal::new(1, 2));
        assert_eq!(EPSILON.to_string(), "0.01");
    }

    #[test]
    fn default_buy_in_is_one_thousand() {
        assert_eq!(DEFAULT_BUY_IN, Decimal::new(1000, 0));
    }
}
