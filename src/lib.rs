// Domain layer - grid model, fixed rule and change notifications
pub mod domain;

// Application layer - playback state machine driving the grid
pub mod application;

pub mod config;

// Front end - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, CellValue, Grid, GridEvent, Observable};
pub use application::{PlayState, PlaybackController, PlaybackEvent};
pub use config::{ConfigError, Settings};
