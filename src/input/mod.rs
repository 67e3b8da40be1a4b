use log::debug;
use macroquad::prelude::*;
use ::rand::Rng;

use crate::application::PlaybackController;
use crate::domain::{cell, CellValue, Grid};
use crate::ui::{board_area_width, Action, Button};

const RANDOM_DENSITY: f64 = 0.3;

/// Map a pixel position on the board to a cell index.
/// Every cell is drawn `cell_size` pixels square from the top-left corner.
pub fn cell_at(grid: &Grid, cell_size: u32, pos: (f32, f32)) -> Option<usize> {
    if pos.0 < 0.0 || pos.1 < 0.0 || cell_size == 0 {
        return None;
    }
    let x = (pos.0 / cell_size as f32) as usize;
    let y = (pos.1 / cell_size as f32) as usize;
    grid.index_of(x, y)
}

/// Press-and-drag drawing.
/// The press flips the cell under the cursor; dragging paints that same value.
#[derive(Debug, Default)]
pub struct Painter {
    brush: Option<CellValue>,
}

impl Painter {
    pub fn update(&mut self, controller: &mut PlaybackController, mouse_pos: (f32, f32)) {
        if !is_mouse_button_down(MouseButton::Left) {
            self.release();
            return;
        }
        if mouse_pos.0 >= board_area_width() {
            return;
        }

        let cell_size = controller.cell_size();
        let Some(index) = cell_at(controller.committed_grid(), cell_size, mouse_pos) else {
            return;
        };
        self.paint(controller.committed_grid_mut(), index);
    }

    /// Apply the brush at `index`, picking it up from the cell on the first call of a stroke
    pub fn paint(&mut self, grid: &mut Grid, index: usize) {
        let Some(current) = grid.get(index) else {
            return;
        };
        let brush = *self.brush.get_or_insert_with(|| cell::toggle(current));
        if current != brush {
            grid.set_cell(index, brush);
        }
    }

    /// End the current stroke
    pub fn release(&mut self) {
        self.brush = None;
    }
}

/// Run one panel action against the controller
pub fn apply_action<R: Rng + ?Sized>(controller: &mut PlaybackController, action: Action, rng: &mut R) {
    debug!("action {:?}", action);
    match action {
        Action::Stop => controller.stop(),
        Action::PlayPause => controller.play_pause(),
        Action::Step => {
            controller.step_once();
        }
        Action::Clear => controller.clear_board(),
        Action::Random => controller.committed_grid_mut().randomize(rng, RANDOM_DENSITY),
        Action::Slower => controller.set_rate(controller.rate().saturating_sub(1)),
        Action::Faster => controller.set_rate(controller.rate() + 1),
        Action::SmallerCells => controller.set_cell_size(controller.cell_size().saturating_sub(4)),
        Action::LargerCells => controller.set_cell_size(controller.cell_size() + 4),
    }
}

/// Process keyboard shortcuts
pub fn process_keyboard_input<R: Rng + ?Sized>(controller: &mut PlaybackController, rng: &mut R) {
    let bindings = [
        (KeyCode::Space, Action::PlayPause),
        (KeyCode::Escape, Action::Stop),
        (KeyCode::N, Action::Step),
        (KeyCode::C, Action::Clear),
        (KeyCode::R, Action::Random),
        (KeyCode::Down, Action::Slower),
        (KeyCode::Up, Action::Faster),
        (KeyCode::Minus, Action::SmallerCells),
        (KeyCode::Equal, Action::LargerCells),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|&(_, action)| apply_action(controller, action, rng));
}

/// Process button clicks
pub fn process_button_clicks<R: Rng + ?Sized>(
    controller: &mut PlaybackController,
    buttons: &[(Action, Button)],
    mouse_pos: (f32, f32),
    rng: &mut R,
) {
    buttons
        .iter()
        .filter(|(_, button)| button.is_clicked(mouse_pos))
        .for_each(|&(action, _)| apply_action(controller, action, rng));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::PlayState;
    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    #[test]
    fn test_cell_at_maps_pixels() {
        let grid = Grid::new(20, 10);
        assert_eq!(cell_at(&grid, 32, (0.0, 0.0)), Some(0));
        assert_eq!(cell_at(&grid, 32, (31.9, 0.0)), Some(0));
        assert_eq!(cell_at(&grid, 32, (32.0, 33.0)), Some(21));
        assert_eq!(cell_at(&grid, 32, (640.0, 0.0)), None);
        assert_eq!(cell_at(&grid, 32, (-1.0, 5.0)), None);
    }

    #[test]
    fn test_stroke_paints_first_value() {
        let mut grid = Grid::new(5, 1);
        grid.set_cell(2, 1);
        let mut painter = Painter::default();

        painter.paint(&mut grid, 0);
        painter.paint(&mut grid, 1);
        painter.paint(&mut grid, 2);
        assert_eq!(grid.cells(), &[1, 1, 1, 0, 0]);

        painter.release();
        painter.paint(&mut grid, 1);
        painter.paint(&mut grid, 3);
        assert_eq!(grid.cells(), &[1, 0, 1, 0, 0]);
    }

    #[test]
    fn test_actions_drive_controller() {
        let mut controller = PlaybackController::with_grid_size(8, 8);
        let mut rng = StdRng::seed_from_u64(1);

        apply_action(&mut controller, Action::PlayPause, &mut rng);
        assert_eq!(controller.play_state(), PlayState::Playing);
        apply_action(&mut controller, Action::Stop, &mut rng);
        assert_eq!(controller.play_state(), PlayState::Stopped);

        apply_action(&mut controller, Action::Faster, &mut rng);
        assert_eq!(controller.rate(), 5);
        apply_action(&mut controller, Action::SmallerCells, &mut rng);
        assert_eq!(controller.cell_size(), 28);

        apply_action(&mut controller, Action::Random, &mut rng);
        apply_action(&mut controller, Action::Clear, &mut rng);
        assert_eq!(controller.committed_grid().population(), 0);
    }
}
