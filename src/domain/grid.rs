use log::{debug, warn};
use rand::Rng;
use rayon::prelude::*;

use super::algorithm::Algorithm;
use super::cell::{self, CellValue, DEAD};
use super::events::{EventEmitter, Observable};

pub const DEFAULT_WIDTH: usize = 600;
pub const DEFAULT_HEIGHT: usize = 400;

/// Change notifications fired by a [`Grid`].
/// Payloads carry copies so a renderer can redraw without reading the grid back.
#[derive(Clone, Debug, PartialEq)]
pub enum GridEvent {
    ResizeBoard {
        width: usize,
        height: usize,
        state: Vec<CellValue>,
    },
    SetState {
        state: Vec<CellValue>,
        t: u64,
    },
}

impl GridEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GridEvent::ResizeBoard { .. } => "resize-board",
            GridEvent::SetState { .. } => "set-state",
        }
    }
}

/// Grid manages the 2D cellular automaton board and its generation counter.
/// Cells are stored row-major: `index = y * width + x`.
#[derive(Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellValue>,
    generation: u64,
    algorithm: Algorithm,
    events: EventEmitter<GridEvent>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![DEAD; width * height],
            generation: 0,
            algorithm: Algorithm::default(),
            events: EventEmitter::new(),
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Overwrite the generation counter without notifying observers
    pub fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Convert 2D coordinates to a cell index (with bounds checking)
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    pub fn get(&self, index: usize) -> Option<CellValue> {
        self.cells.get(index).copied()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&value| cell::is_alive(value)).count()
    }

    /// Resize the board, keeping the overlapping top-left rectangle of cells.
    /// New rows and columns start dead.
    pub fn resize(&mut self, width: usize, height: usize) {
        if !self.cells.is_empty() && (width, height) == (self.width, self.height) {
            return;
        }

        let keep = self.width.min(width);
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            if y < self.height {
                let start = y * self.width;
                cells.extend_from_slice(&self.cells[start..start + keep]);
            }
            cells.resize((y + 1) * width, DEAD);
        }

        debug!(
            "resize board {}x{} -> {}x{}",
            self.width, self.height, width, height
        );
        self.width = width;
        self.height = height;
        self.cells = cells;

        self.emit_state();
        self.events.fire(&GridEvent::ResizeBoard {
            width,
            height,
            state: self.cells.clone(),
        });
    }

    /// Replace every cell at once. The sequence must match the current dimensions.
    pub fn set_state(&mut self, cells: Vec<CellValue>) {
        assert_eq!(
            cells.len(),
            self.width * self.height,
            "cell sequence does not match a {}x{} grid",
            self.width,
            self.height
        );
        self.cells = cells;
        self.emit_state();
    }

    pub fn set_cell(&mut self, index: usize, value: CellValue) {
        let Some(slot) = self.cells.get_mut(index) else {
            warn!("set_cell: index {} outside {} cells", index, self.cells.len());
            return;
        };
        *slot = value;
        self.emit_state();
    }

    pub fn toggle_cell(&mut self, index: usize) {
        let Some(slot) = self.cells.get_mut(index) else {
            warn!("toggle_cell: index {} outside {} cells", index, self.cells.len());
            return;
        };
        *slot = cell::toggle(*slot);
        self.emit_state();
    }

    /// Kill every cell. The generation counter is left alone.
    pub fn clear(&mut self) {
        self.cells.fill(DEAD);
        self.emit_state();
    }

    /// Fill the board randomly; each cell is alive with probability `density`
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.cells
            .iter_mut()
            .for_each(|slot| *slot = CellValue::from(rng.random_bool(density)));
        self.emit_state();
    }

    /// Advance `count` generations, then notify once.
    /// Each generation reads only the previous one (double buffered).
    pub fn step(&mut self, count: u32) {
        let (width, height) = (self.width, self.height);
        let parallel = self.algorithm.is_parallel(self.cells.len());

        let mut current = std::mem::take(&mut self.cells);
        let mut next = current.clone();
        for _ in 0..count {
            next_generation(&current, &mut next, width, height, parallel);
            std::mem::swap(&mut current, &mut next);
            self.generation += 1;
        }
        self.cells = current;

        self.emit_state();
    }

    fn emit_state(&mut self) {
        self.events.fire(&GridEvent::SetState {
            state: self.cells.clone(),
            t: self.generation,
        });
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Observable for Grid {
    type Event = GridEvent;

    fn emitter(&mut self) -> &mut EventEmitter<GridEvent> {
        &mut self.events
    }
}

/// Count live Moore neighbors. Positions past any edge count as dead.
fn count_live_neighbors(cells: &[CellValue], width: usize, height: usize, x: usize, y: usize) -> u8 {
    let xs = x.saturating_sub(1)..=(x + 1).min(width - 1);
    (y.saturating_sub(1)..=(y + 1).min(height - 1))
        .flat_map(|ny| xs.clone().map(move |nx| (nx, ny)))
        .filter(|&pos| pos != (x, y))
        .filter(|&(nx, ny)| cell::is_alive(cells[ny * width + nx]))
        .count() as u8
}

fn evolve_row(current: &[CellValue], row: &mut [CellValue], width: usize, height: usize, y: usize) {
    for (x, out) in row.iter_mut().enumerate() {
        let neighbors = count_live_neighbors(current, width, height, x, y);
        *out = cell::evolve(current[y * width + x], neighbors);
    }
}

fn next_generation(
    current: &[CellValue],
    next: &mut [CellValue],
    width: usize,
    height: usize,
    parallel: bool,
) {
    if current.is_empty() {
        return;
    }

    if parallel {
        next.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| evolve_row(current, row, width, height, y));
    } else {
        next.chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| evolve_row(current, row, width, height, y));
    }
}
