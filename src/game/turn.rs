use crate::card::{Card, EffectType};
use crate::error::TurnError;
use crate::rng::Randomness;
use crate::timer::RevealTicket;

use super::{Game, GamePhase};

/// What happened on a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A card was drawn and the next player is up.
    Drew {
        /// The drawn card, also shown as the current card.
        card: Card,
        /// Set when the card blanked the timer.
        reveal: Option<RevealTicket>,
    },
    /// The wheel opened instead. The turn passes when the wheel is closed.
    WheelTriggered,
}

impl<R: Randomness> Game<R> {
    /// Takes the next turn.
    ///
    /// Every call counts as a turn. On every
    /// [`wheel_interval`](crate::GameOptions::wheel_interval)-th turn, or by
    /// [`wheel_chance`](crate::GameOptions::wheel_chance) on any turn, the
    /// wheel opens and the active player stays put until it is closed.
    /// Otherwise a card is drawn from the current round's deck and the turn
    /// passes to the next player.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the wheel is open or
    /// spinning. A rejected turn is not counted.
    pub fn advance_turn(&self) -> Result<TurnOutcome, TurnError> {
        let mut session = self.session.lock();
        if !session.phase.is_round() {
            return Err(TurnError::InvalidState);
        }
        if session.wheel.is_visible() {
            return Err(TurnError::WheelOpen);
        }

        let counter = session.turn.turn_counter + 1;

        let mut rng = self.rng.lock();
        let periodic = self.options.wheel_interval > 0
            && counter % self.options.wheel_interval == 0;
        let surprise = rng.unit() < self.options.wheel_chance;

        if periodic || surprise {
            drop(rng);
            session
                .wheel
                .open()
                .map_err(|_| TurnError::WheelOpen)?;
            session.turn.turn_counter = counter;
            tracing::debug!(counter, periodic, "wheel triggered");
            return Ok(TurnOutcome::WheelTriggered);
        }
        session.turn.turn_counter = counter;

        let deck = if session.phase == GamePhase::Round1 {
            self.content.round1()
        } else {
            self.content.round2()
        };
        let card = deck[rng.index(deck.len()) % deck.len()].clone();
        drop(rng);

        let reveal = (session.phase == GamePhase::Round2
            && card.effect == EffectType::Meta
            && self.options.timer_blackout)
            .then(|| session.timer.hide());
        if reveal.is_some() {
            tracing::debug!("timer blacked out");
        }

        session.card = Some(card.clone());
        session.rotate();
        tracing::debug!(
            counter,
            active = session.turn.active_player,
            effect = ?card.effect,
            "card drawn"
        );

        Ok(TurnOutcome::Drew { card, reveal })
    }
}
