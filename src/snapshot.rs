//! Read-only views for the presentation layer.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::content::WheelSegment;
use crate::game::{Game, GamePhase};
use crate::player::Player;

/// The countdown as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerView {
    /// Seconds left.
    pub remaining_secs: u32,
    /// Whether the countdown is running.
    pub running: bool,
    /// Whether the display is blanked.
    pub hidden: bool,
    /// Whether little time is left.
    pub low_time: bool,
    /// `m:ss`, or `??:??` while blanked.
    pub display: String,
}

/// The wheel as it should be displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelView {
    /// Whether the wheel is shown.
    pub visible: bool,
    /// Whether a spin is in progress.
    pub spinning: bool,
    /// Index of the settled segment.
    pub result: Option<usize>,
    /// The settled segment.
    pub segment: Option<WheelSegment>,
    /// Rotation to animate to, in degrees.
    pub rotation: f64,
}

/// Everything needed to render the game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameView {
    /// Current phase.
    pub phase: GamePhase,
    /// Name slots being edited during setup.
    pub slots: Vec<String>,
    /// Committed player names in turn order.
    pub players: Vec<String>,
    /// Index of the player whose turn it is.
    pub active_player: usize,
    /// Turns taken this round.
    pub turn_counter: u32,
    /// Card on display.
    pub card: Option<Card>,
    /// Countdown display.
    pub timer: TimerView,
    /// Wheel display.
    pub wheel: WheelView,
}

impl GameView {
    /// Returns the name of the player whose turn it is.
    #[must_use]
    pub fn active_name(&self) -> Option<&str> {
        self.players.get(self.active_player).map(String::as_str)
    }
}

impl<R> Game<R> {
    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> GameView {
        let session = self.session.lock();
        let timer = &session.timer;
        let wheel = &session.wheel;

        GameView {
            phase: session.phase,
            slots: session.slots.clone(),
            players: session
                .players
                .iter()
                .map(Player::name)
                .map(ToString::to_string)
                .collect(),
            active_player: session.turn.active_player,
            turn_counter: session.turn.turn_counter,
            card: session.card.clone(),
            timer: TimerView {
                remaining_secs: timer.remaining_secs(),
                running: timer.is_running(),
                hidden: timer.is_hidden(),
                low_time: timer.remaining_secs() < self.options.low_time_secs,
                display: timer.to_string(),
            },
            wheel: WheelView {
                visible: wheel.is_visible(),
                spinning: wheel.is_spinning(),
                result: wheel.result(),
                segment: wheel
                    .result()
                    .and_then(|i| self.content.wheel().get(i).cloned()),
                rotation: wheel.rotation(),
            },
        }
    }
}
