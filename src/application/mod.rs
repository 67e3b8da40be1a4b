mod playback;
mod timer;

pub use playback::{
    PlayState, PlaybackController, PlaybackEvent, DEFAULT_CELL_SIZE, DEFAULT_RATE, MAX_CELL_SIZE,
    MAX_RATE, MIN_CELL_SIZE, MIN_RATE,
};
pub use timer::{TickTimer, TimerId};
