use alloc::format;

use crate::card::{Card, EffectType};
use crate::content::WheelSegment;
use crate::error::WheelError;
use crate::rng::Randomness;
use crate::wheel::{SpinTicket, spin_target};

use super::Game;

impl<R> Game<R> {
    /// Opens the wheel outside the normal turn flow.
    ///
    /// Any earlier result is cleared. Opening an already open wheel is
    /// allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or a spin is in progress.
    pub fn force_open_wheel(&self) -> Result<(), WheelError> {
        let mut session = self.session.lock();
        if !session.phase.is_round() {
            return Err(WheelError::InvalidState);
        }

        session.wheel.open()?;
        tracing::debug!("wheel opened by hand");
        Ok(())
    }

    /// Reveals the outcome of a spin once its settle delay has passed.
    ///
    /// Returns the index of the winning segment.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::StaleSpin`] if the wheel was closed, reset, or
    /// left behind by a phase change since the spin started.
    pub fn settle_spin(&self, ticket: SpinTicket) -> Result<usize, WheelError> {
        let mut session = self.session.lock();
        match session.wheel.settle(ticket) {
            Ok(outcome) => {
                tracing::debug!(outcome, "wheel settled");
                Ok(outcome)
            }
            Err(err) => {
                tracing::warn!("ignoring stale spin ticket");
                Err(err)
            }
        }
    }

    /// Closes a settled wheel and completes the turn it interrupted.
    ///
    /// The next player is up and the current card shows the wheel's outcome.
    /// The turn counter is left alone, since the interrupted turn was already
    /// counted. Returns the outcome card.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the wheel is hidden, or
    /// no spin has settled.
    pub fn close_wheel(&self) -> Result<Card, WheelError> {
        let mut session = self.session.lock();
        if !session.phase.is_round() {
            return Err(WheelError::InvalidState);
        }

        let outcome = session.wheel.close()?;
        // Outcomes are drawn below the segment count in `spin`.
        let segment = &self.content.wheel()[outcome];
        let card = Card::owned(
            format!("{}: {}", segment.label, segment.text),
            EffectType::Chaos,
        );

        session.card = Some(card.clone());
        session.rotate();
        tracing::debug!(
            outcome,
            active = session.turn.active_player,
            "wheel closed"
        );

        Ok(card)
    }

    /// Returns the segment the wheel stopped on, if a spin has settled.
    pub fn wheel_result(&self) -> Option<WheelSegment> {
        let result = self.session.lock().wheel.result();
        result.and_then(|i| self.content.wheel().get(i).cloned())
    }
}

impl<R: Randomness> Game<R> {
    /// Spins the wheel.
    ///
    /// The outcome is drawn now but stays hidden until the returned ticket is
    /// passed to [`settle_spin`](Self::settle_spin) after
    /// [`SpinTicket::settle_after`]. The wheel's rotation jumps to the spot
    /// the animation should end on.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the wheel is hidden, or a
    /// spin is already in progress. A rejected spin changes nothing.
    pub fn spin(&self) -> Result<SpinTicket, WheelError> {
        let mut session = self.session.lock();
        if !session.phase.is_round() {
            return Err(WheelError::InvalidState);
        }
        if !session.wheel.is_visible() {
            return Err(WheelError::NotVisible);
        }
        if session.wheel.is_spinning() {
            return Err(WheelError::AlreadySpinning);
        }

        let segments = self.content.wheel().len();
        let mut rng = self.rng.lock();
        let outcome = rng.index(segments) % segments;
        let jitter = (rng.unit() - 0.5) * 2.0 * self.options.jitter;
        drop(rng);

        let target = spin_target(
            session.wheel.rotation(),
            outcome,
            segments,
            self.options.full_turns,
            jitter,
        );
        let ticket = session
            .wheel
            .begin_spin(outcome, target, self.options.settle_delay)?;
        tracing::debug!(target, "wheel spinning");

        Ok(ticket)
    }
}
