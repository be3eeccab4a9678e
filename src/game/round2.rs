use crate::content::FINALE_CARD;
use crate::error::{TimerError, TransitionError};
use crate::timer::{RevealTicket, TickOutcome};

use super::phase::{end_finale, ensure_phase};
use super::{Game, GamePhase};

impl<R> Game<R> {
    /// Starts the timed finale.
    ///
    /// The countdown starts from the value set during the intermission (the
    /// configured finale length unless it was adjusted) and the turn counter
    /// starts over. The active player carries on from the first round.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the intermission.
    pub fn start_round2(&self) -> Result<(), TransitionError> {
        let mut session = self.session.lock();
        ensure_phase(&session, GamePhase::Intermission, GamePhase::Round2)?;

        session.turn.turn_counter = 0;
        session.card = Some(FINALE_CARD);
        session.timer.start();
        session.phase = GamePhase::Round2;
        tracing::info!(
            secs = session.timer.remaining_secs(),
            "finale started"
        );

        if !session.timer.is_running() {
            end_finale(&mut session);
        }

        Ok(())
    }

    /// Lets one second of the finale pass.
    ///
    /// The runtime calls this once a second. When the countdown reaches zero
    /// the game moves to [`GamePhase::Finished`] and [`TickOutcome::Expired`]
    /// is returned; that happens once, as later ticks are rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the finale or the countdown is
    /// paused.
    pub fn tick(&self) -> Result<TickOutcome, TimerError> {
        let mut session = self.session.lock();
        if session.phase != GamePhase::Round2 {
            return Err(TimerError::InvalidState);
        }

        let outcome = session.timer.tick().ok_or(TimerError::NotRunning)?;
        match outcome {
            TickOutcome::Ticked(secs) => tracing::trace!(secs, "tick"),
            TickOutcome::Expired => {
                tracing::info!("countdown expired");
                end_finale(&mut session);
            }
        }

        Ok(outcome)
    }

    /// Pauses or resumes the countdown.
    ///
    /// Returns whether the countdown is now running.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the finale.
    pub fn toggle_timer(&self) -> Result<bool, TimerError> {
        let mut session = self.session.lock();
        if session.phase != GamePhase::Round2 {
            return Err(TimerError::InvalidState);
        }

        let running = session.timer.toggle();
        tracing::debug!(running, "timer toggled");
        Ok(running)
    }

    /// Moves the finale countdown by `delta` seconds before it starts.
    ///
    /// The result never drops below [`GameOptions::min_timer_secs`].
    /// Returns the new countdown value.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the intermission.
    ///
    /// [`GameOptions::min_timer_secs`]: crate::GameOptions::min_timer_secs
    pub fn adjust_timer(&self, delta: i64) -> Result<u32, TimerError> {
        let mut session = self.session.lock();
        if session.phase != GamePhase::Intermission {
            return Err(TimerError::InvalidState);
        }

        let secs = session.timer.adjust(delta, self.options.min_timer_secs);
        tracing::debug!(delta, secs, "timer adjusted");
        Ok(secs)
    }

    /// Ends a blackout and shows the countdown again.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::StaleReveal`] if a newer blackout or a restart
    /// superseded the ticket.
    pub fn reveal_timer(&self, ticket: RevealTicket) -> Result<(), TimerError> {
        if self.session.lock().timer.reveal(ticket) {
            Ok(())
        } else {
            tracing::debug!("ignoring stale reveal ticket");
            Err(TimerError::StaleReveal)
        }
    }
}
