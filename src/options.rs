//! Game configuration options.

use core::time::Duration;

/// Configuration options for a party game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use giftwheel::GameOptions;
///
/// let options = GameOptions::default()
///     .with_round2_secs(30 * 60)
///     .with_wheel_interval(4)
///     .with_wheel_chance(0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Length of the finale countdown in seconds.
    pub round2_secs: u32,
    /// The wheel opens on every turn that is a multiple of this.
    /// 0 disables the periodic trigger.
    pub wheel_interval: u32,
    /// Chance that any other turn opens the wheel, in `0.0..=1.0`.
    pub wheel_chance: f64,
    /// Delay between starting a spin and revealing its result.
    pub settle_delay: Duration,
    /// Full rotations the wheel makes before landing.
    pub full_turns: u32,
    /// How far the pointer may land from a segment's centre, as a fraction of
    /// half a segment. Clamped below 1.0 so the pointer never leaves the
    /// chosen segment.
    pub jitter: f64,
    /// Lowest value the countdown can be adjusted to, in seconds.
    pub min_timer_secs: u32,
    /// Remaining time under which the timer counts as low, in seconds.
    pub low_time_secs: u32,
    /// Whether meta cards blank the timer display.
    pub timer_blackout: bool,
    /// How long a blackout hides the timer.
    pub blackout: Duration,
    /// Number of blank player slots offered during setup.
    pub player_slots: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            round2_secs: 45 * 60,
            wheel_interval: 5,
            wheel_chance: 0.05,
            settle_delay: Duration::from_millis(3000),
            full_turns: 4,
            jitter: 0.8,
            min_timer_secs: 60,
            low_time_secs: 60,
            timer_blackout: true,
            blackout: Duration::from_millis(120_000),
            player_slots: 5,
        }
    }
}

impl GameOptions {
    /// Sets the finale countdown length in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use giftwheel::GameOptions;
    ///
    /// let options = GameOptions::default().with_round2_secs(600);
    /// assert_eq!(options.round2_secs, 600);
    /// ```
    #[must_use]
    pub const fn with_round2_secs(mut self, secs: u32) -> Self {
        self.round2_secs = secs;
        self
    }

    /// Sets how many turns pass between guaranteed wheel spins.
    ///
    /// # Example
    ///
    /// ```
    /// use giftwheel::GameOptions;
    ///
    /// let options = GameOptions::default().with_wheel_interval(3);
    /// assert_eq!(options.wheel_interval, 3);
    /// ```
    #[must_use]
    pub const fn with_wheel_interval(mut self, interval: u32) -> Self {
        self.wheel_interval = interval;
        self
    }

    /// Sets the per-turn chance of a surprise wheel spin.
    ///
    /// # Example
    ///
    /// ```
    /// use giftwheel::GameOptions;
    ///
    /// let options = GameOptions::default().with_wheel_chance(0.0);
    /// assert_eq!(options.wheel_chance, 0.0);
    /// ```
    #[must_use]
    pub const fn with_wheel_chance(mut self, chance: f64) -> Self {
        self.wheel_chance = chance;
        self
    }

    /// Sets the spin settle delay.
    #[must_use]
    pub const fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Sets the number of full rotations per spin.
    #[must_use]
    pub const fn with_full_turns(mut self, turns: u32) -> Self {
        self.full_turns = turns;
        self
    }

    /// Sets the landing jitter as a fraction of half a segment.
    #[must_use]
    pub const fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Sets the lowest adjustable countdown value in seconds.
    ///
    /// # Example
    ///
    /// ```
    /// use giftwheel::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_timer_secs(120);
    /// assert_eq!(options.min_timer_secs, 120);
    /// ```
    #[must_use]
    pub const fn with_min_timer_secs(mut self, secs: u32) -> Self {
        self.min_timer_secs = secs;
        self
    }

    /// Sets the low-time threshold in seconds.
    #[must_use]
    pub const fn with_low_time_secs(mut self, secs: u32) -> Self {
        self.low_time_secs = secs;
        self
    }

    /// Sets whether meta cards blank the timer display.
    #[must_use]
    pub const fn with_timer_blackout(mut self, enabled: bool) -> Self {
        self.timer_blackout = enabled;
        self
    }

    /// Sets how long a blackout hides the timer.
    #[must_use]
    pub const fn with_blackout(mut self, blackout: Duration) -> Self {
        self.blackout = blackout;
        self
    }

    /// Sets the number of blank player slots offered during setup.
    ///
    /// # Example
    ///
    /// ```
    /// use giftwheel::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_slots(8);
    /// assert_eq!(options.player_slots, 8);
    /// ```
    #[must_use]
    pub const fn with_player_slots(mut self, slots: usize) -> Self {
        self.player_slots = slots;
        self
    }
}
