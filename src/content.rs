//! Card decks and wheel segments.
//!
//! Content is plain data. [`ContentTables::default`] ships the stock gift-game
//! decks; callers can supply their own through [`ContentTables::new`].

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::card::{Card, EffectType};
use crate::error::ContentError;

/// One slice of the wheel.
///
/// Slices are laid out clockwise in table order, so the index decides where
/// the slice sits on the wheel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WheelSegment {
    /// Short label printed on the slice.
    pub label: Cow<'static, str>,
    /// Color token for the presentation layer.
    pub color: Cow<'static, str>,
    /// Instruction revealed when the wheel stops on this slice.
    pub text: Cow<'static, str>,
}

impl WheelSegment {
    /// Creates a segment from static text.
    #[must_use]
    pub const fn new(label: &'static str, color: &'static str, text: &'static str) -> Self {
        Self {
            label: Cow::Borrowed(label),
            color: Cow::Borrowed(color),
            text: Cow::Borrowed(text),
        }
    }
}

/// Card shown when the first round starts.
pub const WELCOME_CARD: Card = Card::new(
    "Welcome! The youngest player starts. Press Next for the first card.",
    EffectType::Info,
);

/// Card shown when the finale starts.
pub const FINALE_CARD: Card = Card::new(
    "The timer is running! Press Next for an action.",
    EffectType::Info,
);

/// Stock first-round deck: handing out and unwrapping gifts.
pub const ROUND_1_CARDS: [Card; 7] = [
    Card::new("Take a gift from the pile and unwrap it.", EffectType::Action),
    Card::new(
        "Take a gift from the pile, but keep it wrapped.",
        EffectType::Action,
    ),
    Card::new(
        "Take a gift from the pile. If you already have one, give it to the player on your left.",
        EffectType::Swap,
    ),
    Card::new(
        "Everyone passes all their gifts one seat to the left.",
        EffectType::Global,
    ),
    Card::new(
        "Take a gift and unwrap it, then show it to everyone.",
        EffectType::Action,
    ),
    Card::new(
        "The youngest player may take a gift from the pile.",
        EffectType::Special,
    ),
    Card::new(
        "Take a gift from the pile. Soft? Unwrap it. Hard? Keep it wrapped.",
        EffectType::Action,
    ),
];

/// Stock finale deck: moving gifts around until the timer runs out.
pub const ROUND_2_CARDS: [Card; 12] = [
    Card::new(
        "Give a gift of your choice to the person on your right.",
        EffectType::Swap,
    ),
    Card::new(
        "Swap seats (and gifts) with the person across from you.",
        EffectType::Global,
    ),
    Card::new(
        "Take a gift from the person with the most gifts.",
        EffectType::Steal,
    ),
    Card::new("Everyone passes one gift to the left.", EffectType::Global),
    Card::new("Swap with a person of your choice.", EffectType::Swap),
    Card::new(
        "The person with the fewest gifts may steal one from someone else.",
        EffectType::Special,
    ),
    Card::new("All wrapped gifts must be unwrapped now!", EffectType::Action),
    Card::new(
        "Trade your smallest gift for someone else's biggest gift.",
        EffectType::Swap,
    ),
    Card::new(
        "The timer goes invisible for 2 minutes... exciting!",
        EffectType::Meta,
    ),
    Card::new(
        "Nothing happens. Enjoy your gifts for a moment.",
        EffectType::Rest,
    ),
    Card::new(
        "Put all your gifts back in the middle (just kidding, skip a turn).",
        EffectType::Rest,
    ),
    Card::new(
        "Pick two people who must swap their piles.",
        EffectType::Swap,
    ),
];

/// Stock wheel.
pub const WHEEL_SEGMENTS: [WheelSegment; 8] = [
    WheelSegment::new("Jackpot", "gold", "Take any gift from any player."),
    WheelSegment::new(
        "Swap",
        "red",
        "Swap all your gifts with the player on your right.",
    ),
    WheelSegment::new(
        "Shuffle",
        "green",
        "Everyone passes every gift two seats to the left.",
    ),
    WheelSegment::new("Gift", "blue", "Take the next gift from the pile."),
    WheelSegment::new("Skip", "gray", "Nothing happens. Lucky you."),
    WheelSegment::new(
        "Steal",
        "purple",
        "Steal one wrapped gift from a player of your choice.",
    ),
    WheelSegment::new("Unwrap", "orange", "Everyone unwraps one gift right now."),
    WheelSegment::new(
        "Reverse",
        "teal",
        "Give one of your gifts to the player on your left.",
    ),
];

/// The decks and wheel a game draws from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTables {
    round1: Vec<Card>,
    round2: Vec<Card>,
    wheel: Vec<WheelSegment>,
}

impl Default for ContentTables {
    fn default() -> Self {
        Self {
            round1: ROUND_1_CARDS.to_vec(),
            round2: ROUND_2_CARDS.to_vec(),
            wheel: WHEEL_SEGMENTS.to_vec(),
        }
    }
}

impl ContentTables {
    /// Creates content tables from custom decks.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the tables is empty.
    pub fn new(
        round1: Vec<Card>,
        round2: Vec<Card>,
        wheel: Vec<WheelSegment>,
    ) -> Result<Self, ContentError> {
        if round1.is_empty() {
            return Err(ContentError::EmptyRound1);
        }
        if round2.is_empty() {
            return Err(ContentError::EmptyRound2);
        }
        if wheel.is_empty() {
            return Err(ContentError::EmptyWheel);
        }

        Ok(Self {
            round1,
            round2,
            wheel,
        })
    }

    /// Returns the first-round deck.
    #[must_use]
    pub fn round1(&self) -> &[Card] {
        &self.round1
    }

    /// Returns the finale deck.
    #[must_use]
    pub fn round2(&self) -> &[Card] {
        &self.round2
    }

    /// Returns the wheel segments in clockwise order.
    #[must_use]
    pub fn wheel(&self) -> &[WheelSegment] {
        &self.wheel
    }
}
