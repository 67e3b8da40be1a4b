mod button;

pub use button::Button;

use macroquad::prelude::{screen_width, screen_height};

use crate::application::PlayState;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_GAP: f32 = 10.0;
const HALF_WIDTH: f32 = (PANEL_WIDTH - BUTTON_GAP) / 2.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Width of the drawing surface in pixels
pub fn board_area_width() -> f32 {
    (screen_width() - PANEL_WIDTH).max(0.0)
}

/// Height of the drawing surface in pixels
pub fn board_area_height() -> f32 {
    screen_height()
}

/// What a control panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Stop,
    PlayPause,
    Step,
    Clear,
    Random,
    Slower,
    Faster,
    SmallerCells,
    LargerCells,
}

/// Create UI buttons with standard layout.
/// The play/pause label follows the current play state.
pub fn create_buttons(play_state: PlayState) -> Vec<(Action, Button)> {
    let px = panel_x();
    let right = px + HALF_WIDTH + BUTTON_GAP;
    let play_label = match play_state {
        PlayState::Playing => "Pause",
        PlayState::Paused | PlayState::Stopped => "Play",
    };

    vec![
        (Action::PlayPause, Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, play_label)),
        (Action::Stop, Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Stop")),
        (
            Action::Step,
            Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step")
                .with_enabled(play_state != PlayState::Playing),
        ),
        (Action::Clear, Button::new(px, 170.0, HALF_WIDTH, BUTTON_HEIGHT, "Clear")),
        (Action::Random, Button::new(right, 170.0, HALF_WIDTH, BUTTON_HEIGHT, "Random")),
        (Action::Slower, Button::new(px, 250.0, HALF_WIDTH, BUTTON_HEIGHT, "Rate -")),
        (Action::Faster, Button::new(right, 250.0, HALF_WIDTH, BUTTON_HEIGHT, "Rate +")),
        (Action::SmallerCells, Button::new(px, 330.0, HALF_WIDTH, BUTTON_HEIGHT, "Size -")),
        (Action::LargerCells, Button::new(right, 330.0, HALF_WIDTH, BUTTON_HEIGHT, "Size +")),
    ]
}
