use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use super::clock::{Clock, SystemClock};
use super::gate::RefreshGate;

/// Number of interaction timestamps retained.
pub const INTERACTION_HISTORY: usize = 7;
/// Interactions newer than this count toward a burst.
pub const BURST_WINDOW: Duration = Duration::from_secs(2);
/// More than this many recent interactions is a burst.
pub const BURST_THRESHOLD: usize = 4;
/// How long refreshes stay suppressed after a burst.
pub const SUPPRESSION_DELAY: Duration = Duration::from_secs(10);

/// Bounded history of interaction timestamps, oldest first.
#[derive(Debug, Clone)]
pub struct InteractionLog {
    events: VecDeque<Instant>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self {
            events: VecDeque::with_capacity(INTERACTION_HISTORY),
        }
    }

    /// Append `at`, evicting the oldest entry once full.
    pub fn record(&mut self, at: Instant) {
        if self.events.len() == INTERACTION_HISTORY {
            self.events.pop_front();
        }
        self.events.push_back(at);
    }

    /// Entries no older than `window` relative to `now`.
    pub fn count_within(&self, now: Instant, window: Duration) -> usize {
        self.events
            .iter()
            .filter(|at| now.saturating_duration_since(**at) <= window)
            .count()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn latest(&self) -> Option<Instant> {
        self.events.back().copied()
    }
}

impl Default for InteractionLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Combines the interaction history with the refresh gate.
///
/// Every interaction is recorded. When more than [`BURST_THRESHOLD`] of the
/// retained interactions fall inside [`BURST_WINDOW`], the gate is pushed to
/// `now + SUPPRESSION_DELAY`.
#[derive(Debug)]
pub struct InteractionClock<C: Clock = SystemClock> {
    clock: C,
    log: InteractionLog,
    gate: RefreshGate,
}

impl<C: Clock> InteractionClock<C> {
    pub fn new(clock: C) -> Self {
        let gate = RefreshGate::open_at(clock.now());
        Self {
            clock,
            log: InteractionLog::new(),
            gate,
        }
    }

    /// Record one interaction. Returns `true` if it triggered suppression.
    pub fn record_interaction(&mut self) -> bool {
        let now = self.clock.now();
        self.log.record(now);

        let recent = self.log.count_within(now, BURST_WINDOW);
        trace!(event = "core.scheduler.interaction_recorded", recent = recent);

        if recent <= BURST_THRESHOLD {
            return false;
        }

        self.gate.defer_until(now + SUPPRESSION_DELAY);
        debug!(
            event = "core.scheduler.refresh_suppressed",
            recent = recent,
            delay_secs = SUPPRESSION_DELAY.as_secs()
        );
        true
    }

    /// Whether a timer tick right now may refresh.
    pub fn should_reload(&self) -> bool {
        self.gate.is_open(self.clock.now())
    }

    pub fn next_reload_at(&self) -> Instant {
        self.gate.next_allowed()
    }

    /// Time until refreshes resume, zero when they are allowed.
    pub fn suppressed_for(&self) -> Duration {
        self.gate.remaining(self.clock.now())
    }

    pub fn interactions(&self) -> &InteractionLog {
        &self.log
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl Default for InteractionClock<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}
