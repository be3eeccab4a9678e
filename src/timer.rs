//! The finale countdown.

use core::fmt;

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second elapsed; carries the seconds left.
    Ticked(u32),
    /// The countdown reached zero on this tick.
    Expired,
}

/// Handed out when the display is blanked; return it to reveal the timer.
///
/// A later blackout or a reset makes older tickets stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealTicket {
    generation: u64,
}

/// Countdown state.
///
/// Time only passes through [`tick`](Self::tick), and only while running.
/// Reaching zero stops the countdown, so expiry is reported exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    remaining: u32,
    running: bool,
    hidden: bool,
    generation: u64,
}

impl TimerState {
    /// Creates a stopped countdown.
    #[must_use]
    pub const fn new(secs: u32) -> Self {
        Self {
            remaining: secs,
            running: false,
            hidden: false,
            generation: 0,
        }
    }

    /// Returns the seconds left.
    #[must_use]
    pub const fn remaining_secs(&self) -> u32 {
        self.remaining
    }

    /// Returns whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Returns whether the display is blanked.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Stops the countdown, clears any blackout, and sets it to `secs`.
    pub const fn reset(&mut self, secs: u32) {
        self.remaining = secs;
        self.running = false;
        self.hidden = false;
        self.generation += 1;
    }

    /// Starts or resumes the countdown.
    pub const fn start(&mut self) {
        self.running = self.remaining > 0;
    }

    /// Pauses the countdown.
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Pauses a running countdown or resumes a paused one.
    ///
    /// Returns whether the countdown is now running.
    pub const fn toggle(&mut self) -> bool {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
        self.running
    }

    /// Lets one second pass.
    ///
    /// Returns `None` when the countdown is paused or already at zero.
    pub const fn tick(&mut self) -> Option<TickOutcome> {
        if !self.running || self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            return Some(TickOutcome::Expired);
        }

        Some(TickOutcome::Ticked(self.remaining))
    }

    /// Moves the countdown by `delta` seconds, never below `min`.
    ///
    /// Returns the new value.
    pub fn adjust(&mut self, delta: i64, min: u32) -> u32 {
        let target = i64::from(self.remaining)
            .saturating_add(delta)
            .max(i64::from(min));
        self.remaining = u32::try_from(target).unwrap_or(u32::MAX);
        self.remaining
    }

    /// Blanks the display without pausing the countdown.
    #[must_use]
    pub const fn hide(&mut self) -> RevealTicket {
        self.generation += 1;
        self.hidden = true;
        RevealTicket {
            generation: self.generation,
        }
    }

    /// Ends any blackout now and makes outstanding reveal tickets stale.
    pub const fn clear_blackout(&mut self) {
        self.generation += 1;
        self.hidden = false;
    }

    /// Shows the display again if `ticket` belongs to the latest blackout.
    ///
    /// Returns `false` for stale tickets.
    pub fn reveal(&mut self, ticket: RevealTicket) -> bool {
        if !self.hidden || ticket.generation != self.generation {
            return false;
        }

        self.hidden = false;
        true
    }
}

impl fmt::Display for TimerState {
    /// Formats as `m:ss`, or `??:??` while blanked.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hidden {
            return f.write_str("??:??");
        }

        write!(f, "{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
