//! # potclear-types
//!
//! Shared types, errors, and configuration for the **potclear** cash-pool
//! settlement engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`PlayerId`], [`SessionId`], [`TransferId`]
//! - **Player model**: [`Player`] (buy-ins and declared cash-out)
//! - **Transfer model**: [`Transfer`] (one payout instruction)
//! - **Configuration**: [`SessionConfig`]
//! - **Errors**: [`PotclearError`] with `PC_ERR_` prefix codes
//! - **Constants**: cent precision, rounding tolerance, defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod player;
pub mod transfer;

// Re-export all primary types at crate root for ergonomic imports:
//   use potclear_types::{Player, Transfer, PlayerId, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use player::*;
pub use transfer::*;

// Constants are accessed via `potclear_types::constants::FOO`
// (not re-exported to avoid name collisions).
