use macroquad::prelude::*;

use crate::application::{PlayState, PlaybackController};
use crate::domain::{cell, Grid};
use crate::ui::{panel_x, Action, Button, PANEL_WIDTH};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the committed board, one `cell_size` square per cell
pub fn draw_grid(grid: &Grid, cell_size: u32) {
    let size = cell_size as f32;
    let (width, height) = grid.dimensions();

    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let line_color = Color::from_rgba(40, 40, 40, 255);

    for (index, &value) in grid.cells().iter().enumerate() {
        if !cell::is_alive(value) {
            continue;
        }
        let x = (index % width) as f32 * size;
        let y = (index / width) as f32 * size;
        draw_rectangle(x, y, size, size, alive_color);
    }

    let board_w = width as f32 * size;
    let board_h = height as f32 * size;
    for x in 0..=width {
        let px = x as f32 * size;
        draw_line(px, 0.0, px, board_h, 1.0, line_color);
    }
    for y in 0..=height {
        let py = y as f32 * size;
        draw_line(0.0, py, board_w, py, 1.0, line_color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel with buttons and playback info
pub fn draw_controls(controller: &PlaybackController, buttons: &[(Action, Button)], mouse_pos: (f32, f32)) {
    draw_panel_background();

    buttons.iter().for_each(|(_, button)| button.draw(mouse_pos));

    let px = panel_x();
    let info = Color::from_rgba(150, 150, 150, 255);

    draw_text(&format!("Rate: {}/s", controller.rate()), px, 240.0, 16.0, WHITE);
    draw_text(&format!("Cell: {}px", controller.cell_size()), px, 320.0, 16.0, WHITE);

    let state_color = match controller.play_state() {
        PlayState::Playing => Color::from_rgba(0, 255, 0, 255),
        PlayState::Paused => Color::from_rgba(255, 255, 0, 255),
        PlayState::Stopped => Color::from_rgba(255, 100, 100, 255),
    };
    draw_text(controller.play_state().name(), px, 410.0, 18.0, state_color);

    let grid = controller.committed_grid();
    let (gw, gh) = grid.dimensions();
    let lines = [
        format!("Grid: {}x{}", gw, gh),
        format!("Generation: {}", grid.generation()),
        format!("Alive: {}", format_number(grid.population())),
        format!("FPS: {}", get_fps()),
    ];
    lines.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, px, 435.0 + i as f32 * 16.0, 14.0, info);
    });

    let help = [
        "LMB: Draw",
        "Space: Play/Pause",
        "Esc: Stop  N: Step",
        "Up/Down: Rate",
        "-/=: Cell size",
    ];
    help.iter().enumerate().for_each(|(i, line)| {
        draw_text(line, px, 520.0 + i as f32 * 14.0, 12.0, GRAY);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_500), "1.5K");
        assert_eq!(format_number(2_000_000), "2.0M");
    }
}
