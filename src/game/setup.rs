use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::content::WELCOME_CARD;
use crate::error::SetupError;
use crate::player::Player;

use super::{Game, GamePhase, TurnState};

impl<R> Game<R> {
    /// Sets the name in a player slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup or the slot does not exist.
    pub fn set_player_name(&self, index: usize, name: &str) -> Result<(), SetupError> {
        let mut session = self.session.lock();
        if session.phase != GamePhase::Setup {
            return Err(SetupError::InvalidState);
        }

        let slot = session
            .slots
            .get_mut(index)
            .ok_or(SetupError::SlotNotFound)?;
        *slot = name.to_string();
        Ok(())
    }

    /// Appends a blank player slot.
    ///
    /// Returns the index of the new slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup.
    pub fn add_player_slot(&self) -> Result<usize, SetupError> {
        let mut session = self.session.lock();
        if session.phase != GamePhase::Setup {
            return Err(SetupError::InvalidState);
        }

        session.slots.push(String::new());
        Ok(session.slots.len() - 1)
    }

    /// Removes a player slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup, the slot does not exist,
    /// or only two slots are left.
    pub fn remove_player_slot(&self, index: usize) -> Result<(), SetupError> {
        let mut session = self.session.lock();
        if session.phase != GamePhase::Setup {
            return Err(SetupError::InvalidState);
        }
        if index >= session.slots.len() {
            return Err(SetupError::SlotNotFound);
        }
        if session.slots.len() <= 2 {
            return Err(SetupError::TooFewSlots);
        }

        session.slots.remove(index);
        Ok(())
    }

    /// Starts the first round with the given names.
    ///
    /// Names are trimmed and blank ones are dropped; the rest become the turn
    /// order. The first player in the list starts and a welcome card is shown.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in setup or fewer than two
    /// non-blank names remain.
    pub fn start_game<S: AsRef<str>>(&self, names: &[S]) -> Result<(), SetupError> {
        let players: Vec<Player> = names
            .iter()
            .filter_map(|name| Player::parse(name.as_ref()))
            .collect();

        let mut session = self.session.lock();
        if session.phase != GamePhase::Setup {
            return Err(SetupError::InvalidState);
        }
        if players.len() < 2 {
            return Err(SetupError::TooFewPlayers);
        }

        session.slots = players.iter().map(|p| p.name().to_string()).collect();
        session.players = players;
        session.turn = TurnState::default();
        session.card = Some(WELCOME_CARD);
        session.phase = GamePhase::Round1;
        tracing::info!(players = session.players.len(), "first round started");

        Ok(())
    }

    /// Starts the first round with the names in the player slots.
    ///
    /// # Errors
    ///
    /// Same as [`start_game`](Self::start_game).
    pub fn start_game_from_slots(&self) -> Result<(), SetupError> {
        let slots = self.slots();
        self.start_game(&slots)
    }
}
