//! Game engine and state management.

use alloc::string::String;
use alloc::vec::Vec;

use crate::sync::Mutex;

use crate::card::Card;
use crate::content::ContentTables;
use crate::options::GameOptions;
use crate::player::Player;
use crate::rng::SeededRandom;
use crate::timer::TimerState;
use crate::wheel::WheelState;

mod command;
mod phase;
mod round2;
mod setup;
pub mod state;
mod turn;
mod wheel;

pub use command::{Command, Effect};
pub use state::{GamePhase, TurnState};
pub use turn::TurnOutcome;

use state::Session;

/// A party game session.
///
/// The game owns the players, the turn order, the finale countdown, and the
/// wheel. Use [`GameOptions`] to configure timings and wheel odds, and
/// [`ContentTables`] to swap the decks.
///
/// All methods take `&self`, so a game can be shared with the threads that
/// deliver ticks and settle spins.
pub struct Game<R = SeededRandom> {
    /// Game options.
    pub options: GameOptions,
    /// Decks and wheel segments.
    pub(crate) content: ContentTables,
    /// Phase, players, turn, timer, wheel, and current card.
    pub(crate) session: Mutex<Session>,
    /// Random number generator.
    rng: Mutex<R>,
}

impl Game {
    /// Creates a new game with the stock content and the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use giftwheel::{Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.phase(), GamePhase::Setup);
    /// assert_eq!(game.slots().len(), 5);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_parts(options, ContentTables::default(), SeededRandom::new(seed))
    }
}

impl<R> Game<R> {
    /// Creates a new game with custom content and randomness.
    #[must_use]
    pub fn with_parts(options: GameOptions, content: ContentTables, rng: R) -> Self {
        let session = Session::new(options.player_slots, options.round2_secs);

        Self {
            options,
            content,
            session: Mutex::new(session),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the decks and wheel segments.
    pub const fn content(&self) -> &ContentTables {
        &self.content
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.session.lock().phase
    }

    /// Returns the player name slots being edited during setup.
    pub fn slots(&self) -> Vec<String> {
        self.session.lock().slots.clone()
    }

    /// Returns the committed players in turn order.
    ///
    /// Empty until the game starts.
    pub fn players(&self) -> Vec<Player> {
        self.session.lock().players.clone()
    }

    /// Returns the turn state.
    pub fn turn(&self) -> TurnState {
        self.session.lock().turn
    }

    /// Returns the player whose turn it is.
    ///
    /// Returns `None` before the game starts.
    pub fn active_player(&self) -> Option<Player> {
        let session = self.session.lock();
        session.players.get(session.turn.active_player).cloned()
    }

    /// Returns the card currently on display.
    pub fn current_card(&self) -> Option<Card> {
        self.session.lock().card.clone()
    }

    /// Returns a copy of the countdown state.
    pub fn timer(&self) -> TimerState {
        self.session.lock().timer.clone()
    }

    /// Returns a copy of the wheel state.
    pub fn wheel(&self) -> WheelState {
        self.session.lock().wheel.clone()
    }

    /// Discards the session and returns to setup with blank player slots.
    ///
    /// Always allowed. Spin and reveal tickets issued before the restart are
    /// rejected afterwards.
    pub fn restart(&self) {
        self.session
            .lock()
            .reset(self.options.player_slots, self.options.round2_secs);
        tracing::info!("session restarted");
    }
}
