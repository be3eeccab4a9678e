//! Game state types.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::player::Player;
use crate::timer::TimerState;
use crate::wheel::WheelState;

/// Stage of the session.
///
/// Phases only move forward, one step at a time. [`Game::restart`] is the
/// only way back to [`GamePhase::Setup`].
///
/// [`Game::restart`]: crate::Game::restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Entering player names.
    Setup,
    /// Handing out gifts.
    Round1,
    /// Break before the finale; the countdown can be adjusted.
    Intermission,
    /// Timed finale.
    Round2,
    /// The countdown ran out or the finale was ended.
    Finished,
}

impl GamePhase {
    /// Returns the phase that follows this one.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Setup => Some(Self::Round1),
            Self::Round1 => Some(Self::Intermission),
            Self::Intermission => Some(Self::Round2),
            Self::Round2 => Some(Self::Finished),
            Self::Finished => None,
        }
    }

    /// Returns whether players take turns in this phase.
    #[must_use]
    pub const fn is_round(self) -> bool {
        matches!(self, Self::Round1 | Self::Round2)
    }
}

/// Whose turn it is and how many turns the round has had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnState {
    /// Index into the player list.
    pub active_player: usize,
    /// Turns taken this round, including turns that opened the wheel.
    pub turn_counter: u32,
}

/// Everything that changes during a session, kept under one lock.
#[derive(Debug, Clone)]
pub(crate) struct Session {
    pub(crate) phase: GamePhase,
    /// Editable names while in setup.
    pub(crate) slots: Vec<String>,
    /// Committed players; fixed from the first round on.
    pub(crate) players: Vec<Player>,
    pub(crate) turn: TurnState,
    pub(crate) timer: TimerState,
    pub(crate) wheel: WheelState,
    pub(crate) card: Option<Card>,
}

impl Session {
    pub(crate) fn new(slots: usize, round2_secs: u32) -> Self {
        Self {
            phase: GamePhase::Setup,
            slots: alloc::vec![String::new(); slots],
            players: Vec::new(),
            turn: TurnState::default(),
            timer: TimerState::new(round2_secs),
            wheel: WheelState::new(),
            card: None,
        }
    }

    /// Returns to setup. Tickets issued before the reset become stale.
    pub(crate) fn reset(&mut self, slots: usize, round2_secs: u32) {
        self.phase = GamePhase::Setup;
        self.slots = alloc::vec![String::new(); slots];
        self.players.clear();
        self.turn = TurnState::default();
        self.timer.reset(round2_secs);
        self.wheel.reset();
        self.card = None;
    }

    /// Moves the active player one seat on.
    pub(crate) fn rotate(&mut self) {
        let count = self.players.len();
        if count > 0 {
            self.turn.active_player = (self.turn.active_player + 1) % count;
        }
    }
}
