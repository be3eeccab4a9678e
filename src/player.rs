//! Players.

use alloc::string::{String, ToString};

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
}

impl Player {
    /// Creates a player from a raw name.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for a blank name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.trim();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
        })
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
