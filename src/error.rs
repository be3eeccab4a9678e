//! Error types for game operations.
//!
//! Every operation that returns one of these errors leaves the game exactly as
//! it was. None of them are fatal; the caller simply retries a valid action.

use thiserror::Error;

use crate::game::GamePhase;

/// Errors that can occur while setting up players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Invalid game phase for setup.
    #[error("invalid game phase for setup")]
    InvalidState,
    /// Fewer than two non-blank player names.
    #[error("at least two players are needed")]
    TooFewPlayers,
    /// Player slot not found.
    #[error("player slot not found")]
    SlotNotFound,
    /// Removing the slot would leave fewer than two.
    #[error("at least two player slots must remain")]
    TooFewSlots,
}

/// Errors that can occur when moving between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The requested phase does not directly follow the current one.
    #[error("cannot move from {from:?} to {to:?}")]
    InvalidTransition {
        /// Phase the game was in.
        from: GamePhase,
        /// Phase that was requested.
        to: GamePhase,
    },
}

/// Errors that can occur when advancing a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// Invalid game phase for taking turns.
    #[error("invalid game phase for taking turns")]
    InvalidState,
    /// The wheel is open and has to be closed first.
    #[error("the wheel is open")]
    WheelOpen,
}

/// Errors that can occur while using the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WheelError {
    /// Invalid game phase for the wheel.
    #[error("invalid game phase for the wheel")]
    InvalidState,
    /// The wheel is not open.
    #[error("the wheel is not open")]
    NotVisible,
    /// The wheel is already spinning.
    #[error("the wheel is already spinning")]
    AlreadySpinning,
    /// The wheel has no result yet.
    #[error("the wheel has not stopped on a result")]
    NotResolved,
    /// The spin ticket belongs to a spin that no longer exists.
    #[error("stale spin ticket")]
    StaleSpin,
}

/// Errors that can occur while using the countdown timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimerError {
    /// Invalid game phase for this timer operation.
    #[error("invalid game phase for this timer operation")]
    InvalidState,
    /// The timer is paused or has already run out.
    #[error("the timer is not running")]
    NotRunning,
    /// The reveal ticket belongs to an earlier blackout.
    #[error("stale reveal ticket")]
    StaleReveal,
}

/// Errors that can occur when building content tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContentError {
    /// The first-round deck is empty.
    #[error("the first-round deck is empty")]
    EmptyRound1,
    /// The finale deck is empty.
    #[error("the finale deck is empty")]
    EmptyRound2,
    /// The wheel has no segments.
    #[error("the wheel has no segments")]
    EmptyWheel,
}

/// Any error a [`Command`](crate::Command) can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// Player setup failed.
    #[error(transparent)]
    Setup(#[from] SetupError),
    /// Phase transition rejected.
    #[error(transparent)]
    Transition(#[from] TransitionError),
    /// Turn could not be taken.
    #[error(transparent)]
    Turn(#[from] TurnError),
    /// Wheel operation rejected.
    #[error(transparent)]
    Wheel(#[from] WheelError),
    /// Timer operation rejected.
    #[error(transparent)]
    Timer(#[from] TimerError),
}
