//! A phase and turn engine for in-person gift party games, with optional
//! `no_std` support.
//!
//! The crate provides a [`Game`] type that walks a session through setup,
//! a card-draw round, an intermission, a timed finale, and the occasional
//! wheel-of-fortune interruption. Rendering is left to the caller: it drives
//! the game through method calls (or [`Command`]s) and observes it through
//! [`Game::snapshot`].
//!
//! Deferred work (the per-second tick, the spin settle delay, the timer
//! blackout) is owned by the caller's runtime. Operations that need it return
//! tickets; the runtime hands them back after the delay, and tickets made stale
//! by a restart or phase change are rejected.
//!
//! # Example
//!
//! ```
//! use giftwheel::{Game, GameOptions, GamePhase};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! game.start_game(&["Ann", "Bas", "Cor"]).unwrap();
//! assert_eq!(game.phase(), GamePhase::Round1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod content;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod driver;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod rng;
pub mod snapshot;
mod sync;
pub mod timer;
pub mod wheel;

// Re-export main types
pub use card::{Card, EffectType};
pub use content::{ContentTables, WheelSegment};
#[cfg(feature = "std")]
pub use driver::Driver;
pub use error::{
    ContentError, GameError, SetupError, TimerError, TransitionError, TurnError, WheelError,
};
pub use game::{Command, Effect, Game, GamePhase, TurnOutcome, TurnState};
pub use options::GameOptions;
pub use player::Player;
pub use rng::{Randomness, SeededRandom};
pub use snapshot::{GameView, TimerView, WheelView};
pub use timer::{RevealTicket, TickOutcome, TimerState};
pub use wheel::{SpinTicket, WheelState, segment_at, spin_target};
