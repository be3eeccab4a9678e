use alloc::string::String;
use alloc::vec::Vec;

use crate::error::GameError;
use crate::rng::Randomness;
use crate::timer::{RevealTicket, TickOutcome};
use crate::wheel::SpinTicket;

use super::{Game, GamePhase, TurnOutcome};

/// An input to the game, one per inbound operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fill a player slot during setup.
    SetPlayerName {
        /// Slot index.
        index: usize,
        /// Raw name as typed.
        name: String,
    },
    /// Add a blank player slot.
    AddPlayerSlot,
    /// Remove a player slot.
    RemovePlayerSlot(usize),
    /// Start the first round with these names.
    StartGame(Vec<String>),
    /// Start the first round with the names in the slots.
    StartFromSlots,
    /// Step to the given phase.
    AdvancePhase(GamePhase),
    /// Take the next turn.
    AdvanceTurn,
    /// Open the wheel outside the turn flow.
    ForceOpenWheel,
    /// Spin the wheel.
    Spin,
    /// Reveal the result of a spin.
    SettleSpin(SpinTicket),
    /// Close a settled wheel.
    CloseWheel,
    /// End the first round.
    ProceedToIntermission,
    /// Start the finale.
    StartRound2,
    /// End the finale early.
    Finish,
    /// One second of the finale passes.
    Tick,
    /// Pause or resume the countdown.
    ToggleTimer,
    /// Move the countdown by this many seconds during the intermission.
    AdjustTimer(i64),
    /// End a timer blackout.
    RevealTimer(RevealTicket),
    /// Discard the session.
    Restart,
}

/// Follow-up work a command asks of the runtime.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do beyond re-rendering.
    None,
    /// The wheel opened and waits for a spin.
    WheelOpened,
    /// Apply [`Command::SettleSpin`] after the ticket's settle delay.
    ScheduleSettle(SpinTicket),
    /// Apply [`Command::RevealTimer`] after the blackout duration.
    ScheduleReveal(RevealTicket),
    /// The countdown ran out and the game is finished.
    Expired,
}

impl<R: Randomness> Game<R> {
    /// Applies a command.
    ///
    /// This is the single entry point a presentation layer needs: every
    /// inbound operation has a [`Command`], and the returned [`Effect`] says
    /// what, if anything, has to be scheduled.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying operation. The game is unchanged
    /// in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use giftwheel::{Command, Effect, Game, GameOptions, GamePhase};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// let names = vec!["Ann".to_string(), "Bas".to_string()];
    /// assert_eq!(game.apply(Command::StartGame(names)), Ok(Effect::None));
    /// assert_eq!(game.phase(), GamePhase::Round1);
    /// ```
    pub fn apply(&self, command: Command) -> Result<Effect, GameError> {
        tracing::trace!(?command, "apply");

        let effect = match command {
            Command::SetPlayerName { index, name } => {
                self.set_player_name(index, &name)?;
                Effect::None
            }
            Command::AddPlayerSlot => {
                self.add_player_slot()?;
                Effect::None
            }
            Command::RemovePlayerSlot(index) => {
                self.remove_player_slot(index)?;
                Effect::None
            }
            Command::StartGame(names) => {
                self.start_game(&names)?;
                Effect::None
            }
            Command::StartFromSlots => {
                self.start_game_from_slots()?;
                Effect::None
            }
            Command::AdvancePhase(target) => {
                self.advance_phase(target)?;
                Effect::None
            }
            Command::AdvanceTurn => match self.advance_turn()? {
                TurnOutcome::WheelTriggered => Effect::WheelOpened,
                TurnOutcome::Drew {
                    reveal: Some(ticket),
                    ..
                } => Effect::ScheduleReveal(ticket),
                TurnOutcome::Drew { reveal: None, .. } => Effect::None,
            },
            Command::ForceOpenWheel => {
                self.force_open_wheel()?;
                Effect::WheelOpened
            }
            Command::Spin => Effect::ScheduleSettle(self.spin()?),
            Command::SettleSpin(ticket) => {
                self.settle_spin(ticket)?;
                Effect::None
            }
            Command::CloseWheel => {
                self.close_wheel()?;
                Effect::None
            }
            Command::ProceedToIntermission => {
                self.proceed_to_intermission()?;
                Effect::None
            }
            Command::StartRound2 => {
                self.start_round2()?;
                Effect::None
            }
            Command::Finish => {
                self.finish()?;
                Effect::None
            }
            Command::Tick => match self.tick()? {
                TickOutcome::Ticked(_) => Effect::None,
                TickOutcome::Expired => Effect::Expired,
            },
            Command::ToggleTimer => {
                self.toggle_timer()?;
                Effect::None
            }
            Command::AdjustTimer(delta) => {
                self.adjust_timer(delta)?;
                Effect::None
            }
            Command::RevealTimer(ticket) => {
                self.reveal_timer(ticket)?;
                Effect::None
            }
            Command::Restart => {
                self.restart();
                Effect::None
            }
        };

        Ok(effect)
    }
}
