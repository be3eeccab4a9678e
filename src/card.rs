//! Instruction cards.

use alloc::borrow::Cow;
use alloc::string::String;

/// What kind of instruction a card carries.
///
/// The tag is descriptive: the engine does not track gifts, it only shows
/// instructions for the players to carry out. The one exception is
/// [`EffectType::Meta`], which blanks the finale timer when enabled in
/// [`GameOptions`](crate::GameOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectType {
    /// Take or unwrap a gift.
    Action,
    /// Exchange gifts between players.
    Swap,
    /// Everyone at the table moves gifts.
    Global,
    /// A rule that singles out a particular player.
    Special,
    /// Take a gift from someone else.
    Steal,
    /// Changes the game itself rather than the gifts.
    Meta,
    /// Nothing happens this turn.
    Rest,
    /// Outcome of a wheel spin.
    Chaos,
    /// Informational text, never drawn from a table.
    Info,
}

/// A card with instruction text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    /// The instruction shown to the players.
    pub text: Cow<'static, str>,
    /// The kind of instruction.
    pub effect: EffectType,
}

impl Card {
    /// Creates a card from static text.
    #[must_use]
    pub const fn new(text: &'static str, effect: EffectType) -> Self {
        Self {
            text: Cow::Borrowed(text),
            effect,
        }
    }

    /// Creates a card from owned text.
    #[must_use]
    pub const fn owned(text: String, effect: EffectType) -> Self {
        Self {
            text: Cow::Owned(text),
            effect,
        }
    }

    /// Returns the card text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
