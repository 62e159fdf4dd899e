//! # potclear-session
//!
//! **Game session state around the pure settlement core.**
//!
//! The core in `potclear-core` is stateless; this crate is the
//! collaborator that owns state across a game's lifetime:
//!
//! - [`SessionStore`]: player roster, buy-in/cash-out events, the
//!   computed transfer list and the settled flag, plus the
//!   default-buy-in tracker (suggested stake follows the last one used)
//! - [`SessionSnapshot`]: JSON persistence so a session survives a
//!   process restart
//!
//! Once settled, a session is immutable until `new_game` resets it.

pub mod snapshot;
pub mod store;

pub use snapshot::SessionSnapshot;
pub use store::SessionStore;
