use std::time::Duration;

use super::playback::PlayState;

/// Identifies one scheduled tick, for logging
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// One-shot countdown owned by the playback controller.
/// The host feeds it elapsed time; it never runs on its own.
#[derive(Clone, Debug)]
pub struct TickTimer {
    id: TimerId,
    target: PlayState,
    delay: Duration,
    elapsed: Duration,
}

impl TickTimer {
    pub fn new(id: TimerId, target: PlayState, delay: Duration) -> Self {
        Self {
            id,
            target,
            delay,
            elapsed: Duration::ZERO,
        }
    }

    pub const fn id(&self) -> TimerId {
        self.id
    }

    /// Play state captured when the tick was scheduled
    pub const fn target(&self) -> PlayState {
        self.target
    }

    /// Time left before the tick is due
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.elapsed)
    }

    /// Accumulate elapsed time; returns true once the delay has passed
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.elapsed >= self.delay
    }
}
