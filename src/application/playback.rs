use std::time::Duration;

use log::{debug, trace};

use super::timer::{TickTimer, TimerId};
use crate::domain::{EventEmitter, Grid, Observable};

pub const MIN_RATE: u32 = 1;
pub const MAX_RATE: u32 = 10;
pub const DEFAULT_RATE: u32 = 4;

pub const MIN_CELL_SIZE: u32 = 8;
pub const MAX_CELL_SIZE: u32 = 32;
pub const DEFAULT_CELL_SIZE: u32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Paused,
    Playing,
}

impl PlayState {
    pub fn name(&self) -> &'static str {
        match self {
            PlayState::Stopped => "stopped",
            PlayState::Paused => "paused",
            PlayState::Playing => "playing",
        }
    }
}

/// Change notifications fired by a [`PlaybackController`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    SetPlayState { play_state: PlayState },
    SetRate { rate: u32 },
    SetCellSize { cell_size: u32 },
}

impl PlaybackEvent {
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackEvent::SetPlayState { .. } => "set-play-state",
            PlaybackEvent::SetRate { .. } => "set-rate",
            PlaybackEvent::SetCellSize { .. } => "set-cell-size",
        }
    }
}

/// PlaybackController orchestrates the simulation.
///
/// It owns the committed grid (drawn on and stepped) and a snapshot grid that
/// holds the drawing captured when play last started from [`PlayState::Stopped`].
/// Stopping restores that drawing. Ticks are driven by the host through
/// [`PlaybackController::advance`], so there is at most one pending tick at a time.
#[derive(Debug)]
pub struct PlaybackController {
    committed: Grid,
    snapshot: Grid,
    rate: u32,
    cell_size: u32,
    play_state: PlayState,
    timer: Option<TickTimer>,
    next_timer_id: u64,
    events: EventEmitter<PlaybackEvent>,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::with_grids(Grid::default(), Grid::default())
    }

    /// Controller whose grids start at the given size instead of the default board
    pub fn with_grid_size(width: usize, height: usize) -> Self {
        Self::with_grids(Grid::new(width, height), Grid::new(width, height))
    }

    fn with_grids(committed: Grid, snapshot: Grid) -> Self {
        Self {
            committed,
            snapshot,
            rate: DEFAULT_RATE,
            cell_size: DEFAULT_CELL_SIZE,
            play_state: PlayState::default(),
            timer: None,
            next_timer_id: 0,
            events: EventEmitter::new(),
        }
    }

    pub const fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub const fn rate(&self) -> u32 {
        self.rate
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn committed_grid(&self) -> &Grid {
        &self.committed
    }

    /// Mutable access for drawing and subscribing.
    /// Resizing through this handle breaks the pairing with the snapshot grid;
    /// use [`PlaybackController::resize_from_viewport`] instead.
    pub fn committed_grid_mut(&mut self) -> &mut Grid {
        &mut self.committed
    }

    pub fn snapshot_grid(&self) -> &Grid {
        &self.snapshot
    }

    pub fn snapshot_grid_mut(&mut self) -> &mut Grid {
        &mut self.snapshot
    }

    /// Period between ticks at the current rate
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.rate
    }

    pub fn has_pending_tick(&self) -> bool {
        self.timer.is_some()
    }

    /// Time until the pending tick is due, if one is scheduled
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.timer.as_ref().map(TickTimer::remaining)
    }

    pub fn set_play_state(&mut self, target: PlayState) {
        if target == self.play_state {
            return;
        }

        match target {
            PlayState::Playing => {
                if self.play_state == PlayState::Stopped {
                    self.sync_snapshot_dimensions();
                    self.snapshot.set_state(self.committed.cells().to_vec());
                }
                self.schedule_tick();
            }
            PlayState::Paused => self.cancel_tick(),
            PlayState::Stopped => {
                self.cancel_tick();
                self.sync_snapshot_dimensions();
                self.committed.set_generation(0);
                self.committed.set_state(self.snapshot.cells().to_vec());
            }
        }

        debug!(
            "play state {} -> {}",
            self.play_state.name(),
            target.name()
        );
        self.play_state = target;
        self.events.fire(&PlaybackEvent::SetPlayState { play_state: target });
    }

    pub fn play(&mut self) {
        self.set_play_state(PlayState::Playing);
    }

    pub fn pause(&mut self) {
        self.set_play_state(PlayState::Paused);
    }

    pub fn stop(&mut self) {
        self.set_play_state(PlayState::Stopped);
    }

    /// Toggle play/pause state; anything but playing starts playing
    pub fn play_pause(&mut self) {
        if self.play_state == PlayState::Playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Step one generation by hand. Refused while playing.
    pub fn step_once(&mut self) -> bool {
        if self.play_state == PlayState::Playing {
            return false;
        }
        self.committed.step(1);
        true
    }

    /// Feed elapsed wall time to the pending tick.
    /// At most one generation is stepped per call; the next tick is scheduled
    /// from this moment with the current rate.
    pub fn advance(&mut self, elapsed: Duration) {
        let Some(mut timer) = self.timer.take() else {
            return;
        };
        if !timer.advance(elapsed) {
            self.timer = Some(timer);
            return;
        }

        if timer.target() != self.play_state {
            trace!("dropping stale tick {:?}", timer.id());
            return;
        }

        self.committed.step(1);
        trace!(
            "tick {:?} -> generation {}",
            timer.id(),
            self.committed.generation()
        );
        self.schedule_tick();
    }

    /// Set ticks per second, clamped to [1, 10]. Applies from the next scheduled tick.
    pub fn set_rate(&mut self, rate: u32) {
        let rate = rate.clamp(MIN_RATE, MAX_RATE);
        if rate == self.rate {
            return;
        }
        debug!("rate {} -> {}", self.rate, rate);
        self.rate = rate;
        self.events.fire(&PlaybackEvent::SetRate { rate });
    }

    /// Set pixels per cell, clamped to [8, 32]
    pub fn set_cell_size(&mut self, size: u32) {
        let cell_size = size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE);
        if cell_size == self.cell_size {
            return;
        }
        debug!("cell size {} -> {}", self.cell_size, cell_size);
        self.cell_size = cell_size;
        self.events.fire(&PlaybackEvent::SetCellSize { cell_size });
    }

    /// Fit both grids to a drawing surface measured in pixels
    pub fn resize_from_viewport(&mut self, pixel_width: u32, pixel_height: u32) {
        let width = (pixel_width / self.cell_size) as usize;
        let height = (pixel_height / self.cell_size) as usize;

        self.committed.resize(width, height);
        self.snapshot.resize(width, height);
    }

    pub fn clear_board(&mut self) {
        self.committed.clear();
    }

    fn schedule_tick(&mut self) {
        let id = TimerId(self.next_timer_id);
        self.next_timer_id += 1;
        self.timer = Some(TickTimer::new(id, PlayState::Playing, self.tick_interval()));
    }

    fn cancel_tick(&mut self) {
        if let Some(timer) = self.timer.take() {
            trace!("cancel tick {:?}", timer.id());
        }
    }

    fn sync_snapshot_dimensions(&mut self) {
        let (width, height) = self.committed.dimensions();
        self.snapshot.resize(width, height);
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl Observable for PlaybackController {
    type Event = PlaybackEvent;

    fn emitter(&mut self) -> &mut EventEmitter<PlaybackEvent> {
        &mut self.events
    }
}
