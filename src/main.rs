use std::time::Duration;

use log::{debug, error, info};
use macroquad::prelude::*;
use life_sandbox::{
    config::Settings,
    domain::Observable,
    input::{self, Painter},
    rendering, ui, PlaybackController, PlaybackEvent,
};

fn window_conf() -> Conf {
    let settings = Settings::from_env().unwrap_or_default();
    Conf {
        window_title: "Life Sandbox".to_owned(),
        window_width: settings.window_width as i32,
        window_height: settings.window_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::from_env().unwrap_or_else(|err| {
        error!("invalid configuration, using defaults: {}", err);
        Settings::default()
    });
    info!("starting with {:?}", settings);

    let mut controller = PlaybackController::new();
    controller.set_rate(settings.rate);
    controller.set_cell_size(settings.cell_size);
    controller.on(|event: &PlaybackEvent| debug!("{}: {:?}", event.name(), event));

    let mut painter = Painter::default();
    let mut rng = ::rand::rng();

    loop {
        let mouse_pos = mouse_position();

        // Track window resizes and cell size changes; no-op when nothing changed
        controller.resize_from_viewport(
            ui::board_area_width() as u32,
            ui::board_area_height() as u32,
        );

        let buttons = ui::create_buttons(controller.play_state());
        input::process_button_clicks(&mut controller, &buttons, mouse_pos, &mut rng);
        input::process_keyboard_input(&mut controller, &mut rng);
        painter.update(&mut controller, mouse_pos);

        controller.advance(Duration::from_secs_f32(get_frame_time()));

        clear_background(BLACK);
        rendering::draw_grid(controller.committed_grid(), controller.cell_size());
        rendering::draw_controls(&controller, &buttons, mouse_pos);

        next_frame().await;
    }
}
