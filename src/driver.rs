//! A thread-based runtime for a [`Game`].
//!
//! The driver delivers the once-a-second tick and runs the deferred callbacks
//! that [`Effect`]s ask for. Callbacks are not cancelled; they carry tickets,
//! and the game rejects tickets a restart or phase change has made stale.

use alloc::sync::Arc;
use core::time::Duration;
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::error::GameError;
use crate::game::{Command, Effect, Game, GamePhase};
use crate::rng::{Randomness, SeededRandom};
use crate::timer::TickOutcome;

/// Interval between countdown ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Ticker schedule shared between the driver and its ticker thread.
///
/// Bumping `epoch` makes the ticker count a full interval from that moment.
#[derive(Debug, Default)]
struct Schedule {
    epoch: u64,
    stop: bool,
}

#[derive(Debug, Default)]
struct Clock {
    schedule: Mutex<Schedule>,
    wake: Condvar,
}

impl Clock {
    fn lock(&self) -> MutexGuard<'_, Schedule> {
        self.schedule
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Runs a game's timers on background threads.
///
/// The ticker stops when the driver is dropped.
pub struct Driver<R = SeededRandom>
where
    R: Randomness + Send + 'static,
{
    game: Arc<Game<R>>,
    clock: Arc<Clock>,
    ticker: Option<JoinHandle<()>>,
}

impl<R> Driver<R>
where
    R: Randomness + Send + 'static,
{
    /// Takes ownership of `game` and starts ticking.
    #[must_use]
    pub fn start(game: Game<R>) -> Self {
        Self::with_tick_interval(game, TICK_INTERVAL)
    }

    /// Like [`start`](Self::start) with a custom tick interval.
    #[must_use]
    pub fn with_tick_interval(game: Game<R>, interval: Duration) -> Self {
        let game = Arc::new(game);
        let clock = Arc::new(Clock::default());

        let ticker = {
            let game = Arc::clone(&game);
            let clock = Arc::clone(&clock);
            thread::spawn(move || run_ticker(&game, &clock, interval))
        };

        Self {
            game,
            clock,
            ticker: Some(ticker),
        }
    }

    /// Returns the driven game.
    #[must_use]
    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Applies a command and schedules whatever follow-up it asks for.
    ///
    /// Starting the finale or toggling the countdown restarts the tick
    /// schedule, so the first second after a start or resume lasts a full
    /// interval.
    ///
    /// # Errors
    ///
    /// Returns the error of the command.
    pub fn dispatch(&self, command: Command) -> Result<Effect, GameError> {
        let restarts_clock = matches!(
            command,
            Command::StartRound2
                | Command::AdvancePhase(GamePhase::Round2)
                | Command::ToggleTimer
        );

        let effect = if restarts_clock {
            // Held across `apply` so no tick slips in between.
            let mut schedule = self.clock.lock();
            let effect = self.game.apply(command)?;
            schedule.epoch += 1;
            self.clock.wake.notify_all();
            effect
        } else {
            self.game.apply(command)?
        };

        self.schedule(effect);
        Ok(effect)
    }

    fn schedule(&self, effect: Effect) {
        let (delay, command) = match effect {
            Effect::ScheduleSettle(ticket) => (ticket.settle_after(), Command::SettleSpin(ticket)),
            Effect::ScheduleReveal(ticket) => {
                (self.game.options.blackout, Command::RevealTimer(ticket))
            }
            Effect::None | Effect::WheelOpened | Effect::Expired => return,
        };

        let game = Arc::clone(&self.game);
        thread::spawn(move || {
            thread::sleep(delay);
            if let Err(err) = game.apply(command) {
                tracing::debug!(%err, "deferred command dropped");
            }
        });
    }
}

impl<R> Drop for Driver<R>
where
    R: Randomness + Send + 'static,
{
    fn drop(&mut self) {
        self.clock.lock().stop = true;
        self.clock.wake.notify_all();
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
    }
}

fn run_ticker<R: Randomness>(game: &Game<R>, clock: &Clock, interval: Duration) {
    let mut schedule = clock.lock();
    let mut epoch = schedule.epoch;
    let mut deadline = Instant::now() + interval;

    while !schedule.stop {
        if schedule.epoch != epoch {
            epoch = schedule.epoch;
            deadline = Instant::now() + interval;
        }

        let now = Instant::now();
        if now < deadline {
            schedule = clock
                .wake
                .wait_timeout(schedule, deadline - now)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
            continue;
        }

        deadline += interval;
        // Ticks outside a running finale are rejected; that is the normal
        // idle case.
        if let Ok(TickOutcome::Expired) = game.tick() {
            tracing::info!("time is up");
        }
    }
}
