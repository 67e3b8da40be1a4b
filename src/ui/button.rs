use macroquad::prelude::*;

const FONT_SIZE: u16 = 18;

/// Clickable panel button. Disabled buttons draw greyed out and ignore clicks.
#[derive(Clone, Debug)]
pub struct Button {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    label: String,
    enabled: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            label: label.into(),
            enabled: true,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Hit test against the button rectangle
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        (self.x..=self.x + self.width).contains(&pos.0)
            && (self.y..=self.y + self.height).contains(&pos.1)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = match (self.enabled, self.contains(mouse_pos)) {
            (false, _) => Color::from_rgba(60, 60, 60, 255),
            (true, true) => Color::from_rgba(100, 149, 237, 255),
            (true, false) => Color::from_rgba(70, 130, 180, 255),
        };
        let text_color = if self.enabled { WHITE } else { GRAY };

        draw_rectangle(self.x, self.y, self.width, self.height, fill);
        draw_rectangle_lines(self.x, self.y, self.width, self.height, 2.0, text_color);

        let size = measure_text(&self.label, None, FONT_SIZE, 1.0);
        draw_text(
            &self.label,
            self.x + (self.width - size.width) / 2.0,
            self.y + (self.height + size.height) / 2.0,
            f32::from(FONT_SIZE),
            text_color,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.enabled && self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, "Stop");
        assert!(button.contains((10.0, 20.0)));
        assert!(button.contains((110.0, 60.0)));
        assert!(!button.contains((9.9, 30.0)));
        assert!(!button.contains((50.0, 60.1)));
    }
}
