use crate::error::{GameError, TransitionError};

use super::state::Session;
use super::{Game, GamePhase};

/// Ends the finale and shows the final time. The caller has checked the
/// phase.
pub(super) fn end_finale(session: &mut Session) {
    session.timer.stop();
    session.timer.clear_blackout();
    session.wheel.dismiss();
    session.phase = GamePhase::Finished;
    tracing::info!(turns = session.turn.turn_counter, "game finished");
}

pub(super) fn ensure_phase(
    session: &Session,
    expected: GamePhase,
    target: GamePhase,
) -> Result<(), TransitionError> {
    if session.phase == expected {
        Ok(())
    } else {
        Err(TransitionError::InvalidTransition {
            from: session.phase,
            to: target,
        })
    }
}

impl<R> Game<R> {
    /// Moves to `target`, which must directly follow the current phase.
    ///
    /// The step is carried out by the matching operation:
    /// [`start_game_from_slots`](Self::start_game_from_slots),
    /// [`proceed_to_intermission`](Self::proceed_to_intermission),
    /// [`start_round2`](Self::start_round2), or [`finish`](Self::finish).
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::InvalidTransition`] for any jump that skips
    /// or reverses a phase, or the error of the operation that carries out
    /// the step.
    pub fn advance_phase(&self, target: GamePhase) -> Result<(), GameError> {
        let from = self.phase();
        let invalid = TransitionError::InvalidTransition { from, to: target };
        if from.next() != Some(target) {
            return Err(invalid.into());
        }

        match target {
            GamePhase::Round1 => self.start_game_from_slots()?,
            GamePhase::Intermission => self.proceed_to_intermission()?,
            GamePhase::Round2 => self.start_round2()?,
            GamePhase::Finished => self.finish()?,
            GamePhase::Setup => return Err(invalid.into()),
        }

        Ok(())
    }

    /// Ends the first round.
    ///
    /// Nothing checks that the gifts were actually handed out; the players
    /// decide when the round is over. The countdown is set to the configured
    /// finale length so it can be adjusted during the break.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the first round.
    pub fn proceed_to_intermission(&self) -> Result<(), TransitionError> {
        let mut session = self.session.lock();
        ensure_phase(&session, GamePhase::Round1, GamePhase::Intermission)?;

        session.wheel.dismiss();
        session.timer.reset(self.options.round2_secs);
        session.phase = GamePhase::Intermission;
        tracing::info!(turns = session.turn.turn_counter, "intermission started");

        Ok(())
    }

    /// Ends the finale before the countdown runs out.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the finale.
    pub fn finish(&self) -> Result<(), TransitionError> {
        let mut session = self.session.lock();
        ensure_phase(&session, GamePhase::Round2, GamePhase::Finished)?;

        end_finale(&mut session);
        Ok(())
    }
}
