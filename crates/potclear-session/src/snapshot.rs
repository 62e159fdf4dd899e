//! Snapshot persistence for session state.
//!
//! A [`SessionSnapshot`] is the serde mirror of a [`SessionStore`],
//! written as JSON so a session survives a process restart. Restoring a
//! snapshot reproduces the store exactly, settled flag included.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use potclear_types::{Player, Result, SessionId, Transfer};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::SessionStore;

/// Serializable session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: SessionId,
    pub players: Vec<Player>,
    pub transfers: Vec<Transfer>,
    pub settled: bool,
    pub default_buy_in: Decimal,
    pub started_at: DateTime<Utc>,
}

impl SessionSnapshot {
    /// Write the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    /// I/O failures map to `PC_ERR_903`, serde failures to `PC_ERR_901`.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        tracing::debug!(path = %path.as_ref().display(), "Session snapshot saved");
        Ok(())
    }

    /// Read a snapshot back from disk.
    ///
    /// # Errors
    /// I/O failures map to `PC_ERR_903`, serde failures to `PC_ERR_901`.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let snapshot = serde_json::from_str(&json)?;
        tracing::debug!(path = %path.as_ref().display(), "Session snapshot loaded");
        Ok(snapshot)
    }
}

impl SessionStore {
    /// Capture the current state for persistence.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id(),
            players: self.players().to_vec(),
            transfers: self.transfers().to_vec(),
            settled: self.is_settled(),
            default_buy_in: self.default_buy_in(),
            started_at: self.started_at(),
        }
    }

    /// Rebuild a store from a snapshot.
    #[must_use]
    pub fn restore(snapshot: SessionSnapshot) -> Self {
        Self::from_parts(
            snapshot.session_id,
            snapshot.players,
            snapshot.transfers,
            snapshot.settled,
            snapshot.default_buy_in,
            snapshot.started_at,
        )
    }
}
