//! Session store: the stateful collaborator around the pure core.
//!
//! Holds the player roster, recorded buy-ins and cash-outs, the computed
//! transfer list and the settled flag for the lifetime of one game. All
//! mutations are guarded: once a session is settled, only `new_game`
//! may change it.

use chrono::{DateTime, Utc};
use potclear_types::{
    Player, PlayerId, PotclearError, Result, SessionConfig, SessionId, Transfer,
    constants::EPSILON,
};
use rust_decimal::Decimal;

/// In-memory state for one game session.
///
/// The settlement core never sees this type; `settle` passes it a
/// read-only snapshot of the roster and stores the transfers it returns.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session_id: SessionId,
    players: Vec<Player>,
    transfers: Vec<Transfer>,
    settled: bool,
    /// Suggested stake for the next buy-in. Follows the most recently
    /// used amount, and survives `new_game`.
    default_buy_in: Decimal,
    started_at: DateTime<Utc>,
}

impl SessionStore {
    /// Create an empty session with the given configuration.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            session_id: SessionId::new(),
            players: Vec::new(),
            transfers: Vec::new(),
            settled: false,
            default_buy_in: config.default_buy_in,
            started_at: Utc::now(),
        }
    }

    /// Seat a new player with their initial buy-in.
    ///
    /// # Errors
    /// - [`PotclearError::SessionAlreadySettled`] after settlement
    /// - [`PotclearError::InvalidBuyIn`] for a non-positive amount
    pub fn add_player(&mut self, name: impl Into<String>, buy_in: Decimal) -> Result<PlayerId> {
        self.ensure_open()?;
        if buy_in <= Decimal::ZERO {
            return Err(PotclearError::InvalidBuyIn { amount: buy_in });
        }
        self.track_default(buy_in);

        let player = Player::new(name, buy_in);
        let id = player.id;
        tracing::debug!(player = %id, name = %player.name, buy_in = %buy_in, "Player joined");
        self.players.push(player);
        Ok(id)
    }

    /// Record an additional buy-in for a seated player.
    ///
    /// # Errors
    /// - [`PotclearError::SessionAlreadySettled`] after settlement
    /// - [`PotclearError::InvalidBuyIn`] for a non-positive amount
    /// - [`PotclearError::PlayerNotFound`] for an unknown player
    pub fn add_buy_in(&mut self, player_id: PlayerId, amount: Decimal) -> Result<()> {
        self.ensure_open()?;
        if amount <= Decimal::ZERO {
            return Err(PotclearError::InvalidBuyIn { amount });
        }
        self.track_default(amount);

        let player = self.player_mut(player_id)?;
        player.buy_ins.push(amount);
        tracing::debug!(player = %player_id, amount = %amount, "Buy-in recorded");
        Ok(())
    }

    /// Record (or overwrite) a player's final cash-out.
    ///
    /// # Errors
    /// - [`PotclearError::SessionAlreadySettled`] after settlement
    /// - [`PotclearError::InvalidCashOut`] for a negative amount
    /// - [`PotclearError::PlayerNotFound`] for an unknown player
    pub fn set_cash_out(&mut self, player_id: PlayerId, amount: Decimal) -> Result<()> {
        self.ensure_open()?;
        if amount < Decimal::ZERO {
            return Err(PotclearError::InvalidCashOut { amount });
        }
        let player = self.player_mut(player_id)?;
        player.cash_out = Some(amount);
        tracing::debug!(player = %player_id, cash_out = %amount, "Cash-out recorded");
        Ok(())
    }

    /// Settle the session: compute transfers and flip the settled flag.
    ///
    /// On error the session stays open — an incomplete table or an
    /// imbalanced ledger is never marked settled.
    ///
    /// # Errors
    /// - [`PotclearError::SessionAlreadySettled`] if already settled
    /// - [`PotclearError::IncompleteSettlement`] if a cash-out is missing
    /// - [`PotclearError::ImbalancedLedger`] if the books don't balance
    pub fn settle(&mut self) -> Result<&[Transfer]> {
        self.ensure_open()?;
        let transfers = potclear_core::compute_settlement(&self.players)?;
        tracing::info!(
            session = %self.session_id,
            players = self.players.len(),
            transfers = transfers.len(),
            "Session settled"
        );
        self.transfers = transfers;
        self.settled = true;
        Ok(&self.transfers)
    }

    /// Discard all session state and start fresh. The default buy-in
    /// carries over to the new game.
    pub fn new_game(&mut self) {
        tracing::info!(session = %self.session_id, "New game started");
        self.session_id = SessionId::new();
        self.players.clear();
        self.transfers.clear();
        self.settled = false;
        self.started_at = Utc::now();
    }

    /// Whether settlement can be attempted: at least two players, every
    /// cash-out reported, and not already settled.
    #[must_use]
    pub fn can_settle(&self) -> bool {
        !self.settled
            && self.players.len() >= 2
            && self.players.iter().all(Player::has_cashed_out)
    }

    /// Sum of all buy-ins across the table.
    #[must_use]
    pub fn total_buy_in(&self) -> Decimal {
        self.players.iter().map(Player::total_buy_in).sum()
    }

    /// Sum of all reported cash-outs. Unreported cash-outs count as zero.
    #[must_use]
    pub fn total_cash_out(&self) -> Decimal {
        self.players
            .iter()
            .filter_map(|p| p.cash_out)
            .sum()
    }

    /// Cash-out total minus buy-in total. Beyond [`EPSILON`] the books
    /// are off and settlement will refuse.
    #[must_use]
    pub fn ledger_drift(&self) -> Decimal {
        self.total_cash_out() - self.total_buy_in()
    }

    /// Whether the current drift exceeds the tolerance.
    #[must_use]
    pub fn books_look_off(&self) -> bool {
        self.ledger_drift().abs() > EPSILON
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    #[must_use]
    pub fn default_buy_in(&self) -> Decimal {
        self.default_buy_in
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub(crate) fn from_parts(
        session_id: SessionId,
        players: Vec<Player>,
        transfers: Vec<Transfer>,
        settled: bool,
        default_buy_in: Decimal,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id,
            players,
            transfers,
            settled,
            default_buy_in,
            started_at,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.settled {
            return Err(PotclearError::SessionAlreadySettled);
        }
        Ok(())
    }

    /// Any stake that differs from the current suggestion becomes the
    /// new suggestion.
    fn track_default(&mut self, amount: Decimal) {
        if amount != self.default_buy_in {
            self.default_buy_in = amount;
        }
    }

    fn player_mut(&mut self, player_id: PlayerId) -> Result<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(PotclearError::PlayerNotFound(player_id))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}
