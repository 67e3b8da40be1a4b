pub mod cell;
mod grid;
mod algorithm;
pub mod events;

pub use cell::CellValue;
pub use grid::{Grid, GridEvent, DEFAULT_WIDTH, DEFAULT_HEIGHT};
pub use algorithm::{Algorithm, PARALLEL_THRESHOLD};
pub use events::{EventEmitter, HandlerId, Observable};
