//! The wheel of fortune.
//!
//! A spin picks its outcome up front and keeps it hidden until the spin is
//! settled. The rotation the wheel animates to is purely cosmetic, but it is
//! computed so the pointer comes to rest on the chosen segment.
//!
//! Angles are in degrees, measured clockwise. Segment `i` covers
//! `[i * w, (i + 1) * w)` on the wheel face where `w = 360 / n`, and the
//! pointer sits at the top.

use core::time::Duration;

use crate::error::WheelError;

const FULL_CIRCLE: f64 = 360.0;
/// Keeps the pointer strictly inside the chosen segment.
const MAX_JITTER: f64 = 0.99;

/// Handed out when a spin starts; settle it once the delay has passed.
///
/// Closing, restarting, or leaving the round makes the ticket stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpinTicket {
    generation: u64,
    settle_after: Duration,
}

impl SpinTicket {
    /// Returns how long to wait before settling.
    #[must_use]
    pub const fn settle_after(&self) -> Duration {
        self.settle_after
    }
}

/// Wheel state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WheelState {
    visible: bool,
    spinning: bool,
    result: Option<usize>,
    pending: Option<usize>,
    rotation: f64,
    generation: u64,
}

impl WheelState {
    /// Creates a hidden, idle wheel.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible: false,
            spinning: false,
            result: None,
            pending: None,
            rotation: 0.0,
            generation: 0,
        }
    }

    /// Returns whether the wheel is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns whether a spin is in progress.
    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        self.spinning
    }

    /// Returns the segment index of the settled spin.
    #[must_use]
    pub const fn result(&self) -> Option<usize> {
        self.result
    }

    /// Returns the accumulated rotation in degrees.
    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Shows the wheel and clears any previous result.
    ///
    /// # Errors
    ///
    /// Returns an error if a spin is in progress.
    pub const fn open(&mut self) -> Result<(), WheelError> {
        if self.spinning {
            return Err(WheelError::AlreadySpinning);
        }

        self.visible = true;
        self.result = None;
        Ok(())
    }

    /// Starts a spin that will land on `outcome` at rotation `target`.
    ///
    /// The rotation never moves backwards; a `target` below the current
    /// rotation is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the wheel is hidden or already spinning. The wheel
    /// is left untouched in that case.
    pub fn begin_spin(
        &mut self,
        outcome: usize,
        target: f64,
        settle_after: Duration,
    ) -> Result<SpinTicket, WheelError> {
        if !self.visible {
            return Err(WheelError::NotVisible);
        }
        if self.spinning {
            return Err(WheelError::AlreadySpinning);
        }

        self.generation += 1;
        self.spinning = true;
        self.result = None;
        self.pending = Some(outcome);
        self.rotation = self.rotation.max(target);

        Ok(SpinTicket {
            generation: self.generation,
            settle_after,
        })
    }

    /// Reveals the outcome of the spin `ticket` was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`WheelError::StaleSpin`] if the wheel was closed, reset, or
    /// spun again since the ticket was issued.
    pub fn settle(&mut self, ticket: SpinTicket) -> Result<usize, WheelError> {
        if ticket.generation != self.generation || !self.visible || !self.spinning {
            return Err(WheelError::StaleSpin);
        }
        let outcome = self.pending.take().ok_or(WheelError::StaleSpin)?;

        self.spinning = false;
        self.result = Some(outcome);
        Ok(outcome)
    }

    /// Hides the wheel after a settled spin and returns the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the wheel is hidden, or if it is spinning or has
    /// not been spun.
    pub const fn close(&mut self) -> Result<usize, WheelError> {
        if !self.visible {
            return Err(WheelError::NotVisible);
        }
        let Some(outcome) = self.result else {
            return Err(WheelError::NotResolved);
        };
        if self.spinning {
            return Err(WheelError::NotResolved);
        }

        self.visible = false;
        self.result = None;
        Ok(outcome)
    }

    /// Hides the wheel and invalidates any outstanding spin ticket.
    ///
    /// The rotation is kept so a later spin animates on from where the wheel
    /// stopped.
    pub const fn dismiss(&mut self) {
        self.generation += 1;
        self.visible = false;
        self.spinning = false;
        self.result = None;
        self.pending = None;
    }

    /// Returns the wheel to its initial state, invalidating spin tickets.
    pub const fn reset(&mut self) {
        self.dismiss();
        self.rotation = 0.0;
    }
}

/// Computes the rotation a spin should animate to.
///
/// The result lies at least one full turn past `current`, plus `full_turns`
/// more, and brings the centre of segment `outcome` under the pointer.
/// `jitter` in `-1.0..=1.0` moves the landing spot by that fraction of half a
/// segment; it is clamped so the pointer stays inside the segment.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "segment counts are far below f64 precision"
)]
pub fn spin_target(
    current: f64,
    outcome: usize,
    segments: usize,
    full_turns: u32,
    jitter: f64,
) -> f64 {
    let width = FULL_CIRCLE / segments.max(1) as f64;
    let centre = (outcome as f64 + 0.5) * width;
    let offset = jitter.clamp(-MAX_JITTER, MAX_JITTER) * width / 2.0;

    let aligned = current - current % FULL_CIRCLE;
    let spins = f64::from(full_turns.max(1)) * FULL_CIRCLE;

    aligned + spins + (FULL_CIRCLE - centre - offset)
}

/// Returns the segment under the pointer at `rotation`.
#[must_use]
#[expect(
    clippy::cast_precision_loss,
    reason = "segment counts are far below f64 precision"
)]
pub fn segment_at(rotation: f64, segments: usize) -> usize {
    let segments = segments.max(1);
    let width = FULL_CIRCLE / segments as f64;
    let mut facing = (FULL_CIRCLE - rotation % FULL_CIRCLE) % FULL_CIRCLE;
    if facing < 0.0 {
        facing += FULL_CIRCLE;
    }

    ((facing / width) as usize).min(segments - 1)
}
