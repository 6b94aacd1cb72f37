//! Stage
//!
//! The container that owns a screen's interactive widgets and routes
//! pointer input to them. A stage only reacts to input while it is
//! attached; screens attach it when shown and detach it when hidden so a
//! screen that is no longer on display cannot receive stale events.

use crate::gui::button::{Button, ButtonSkin};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Widget container and input router for one screen.
pub struct Stage {
    buttons: Vec<Button>,
    viewport_width: u32,
    viewport_height: u32,
    input_attached: bool,
}

impl Stage {
    /// Creates an empty stage with the given viewport dimensions.
    pub fn new(viewport_width: u32, viewport_height: u32) -> Self {
        Stage {
            buttons: Vec::new(),
            viewport_width,
            viewport_height,
            input_attached: false,
        }
    }

    /// Current viewport dimensions, in window pixels.
    #[allow(dead_code)] // Inspection accessor, exercised by tests
    pub fn viewport(&self) -> (u32, u32) {
        (self.viewport_width, self.viewport_height)
    }

    /// Updates the viewport to new window dimensions.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Removes every widget from the stage.
    pub fn clear(&mut self) {
        self.buttons.clear();
    }

    pub fn add_button(&mut self, button: Button) {
        self.buttons.push(button);
    }

    #[allow(dead_code)] // Inspection accessor, exercised by tests
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Starts routing pointer input to this stage's widgets.
    pub fn attach_input(&mut self) {
        self.input_attached = true;
    }

    /// Stops routing pointer input; widget states reset to neutral.
    pub fn detach_input(&mut self) {
        self.input_attached = false;
        for button in &mut self.buttons {
            button.reset();
        }
    }

    #[allow(dead_code)] // Inspection accessor, exercised by tests
    pub fn input_attached(&self) -> bool {
        self.input_attached
    }

    /// Routes pointer movement to the widgets.
    pub fn mouse_motion(&mut self, x: i32, y: i32) {
        if !self.input_attached {
            return;
        }
        for button in &mut self.buttons {
            button.mouse_motion(x, y);
        }
    }

    /// Routes a pointer press to the widgets.
    pub fn mouse_down(&mut self, x: i32, y: i32) {
        if !self.input_attached {
            return;
        }
        for button in &mut self.buttons {
            button.mouse_down(x, y);
        }
    }

    /// Routes a pointer release to the widgets. Returns the index of the
    /// button that completed a click, if any.
    pub fn mouse_up(&mut self, x: i32, y: i32) -> Option<usize> {
        if !self.input_attached {
            return None;
        }
        let mut clicked = None;
        for (i, button) in self.buttons.iter_mut().enumerate() {
            if button.mouse_up(x, y) {
                clicked = Some(i);
            }
        }
        clicked
    }

    /// Draws every widget in insertion order.
    pub fn render(&self, canvas: &mut Canvas<Window>, skin: &ButtonSkin) -> Result<(), String> {
        for button in &self.buttons {
            button.render(canvas, skin)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::button::ButtonState;
    use crate::gui::layout::menu_layout;

    fn stage_with_buttons() -> Stage {
        let mut stage = Stage::new(800, 600);
        for (i, geometry) in menu_layout(5, 800, 600).into_iter().enumerate() {
            stage.add_button(Button::new(&format!("Button {}", i), geometry));
        }
        stage
    }

    #[test]
    fn test_click_reports_button_index() {
        let mut stage = stage_with_buttons();
        stage.attach_input();

        // Third button at 800x600 spans y 372..420
        stage.mouse_down(400, 380);
        assert_eq!(stage.mouse_up(400, 380), Some(2));
    }

    #[test]
    fn test_click_outside_all_buttons() {
        let mut stage = stage_with_buttons();
        stage.attach_input();

        stage.mouse_down(10, 10);
        assert_eq!(stage.mouse_up(10, 10), None);
    }

    #[test]
    fn test_detached_stage_ignores_input() {
        let mut stage = stage_with_buttons();
        assert!(!stage.input_attached());

        stage.mouse_down(400, 380);
        assert_eq!(stage.mouse_up(400, 380), None);
        for button in stage.buttons() {
            assert_eq!(button.state(), ButtonState::Normal);
        }
    }

    #[test]
    fn test_detach_resets_widget_states() {
        let mut stage = stage_with_buttons();
        stage.attach_input();

        stage.mouse_motion(400, 380);
        assert!(stage
            .buttons()
            .iter()
            .any(|b| b.state() == ButtonState::Hovered));

        stage.detach_input();
        for button in stage.buttons() {
            assert_eq!(button.state(), ButtonState::Normal);
        }
    }

    #[test]
    fn test_detach_cancels_in_flight_press() {
        let mut stage = stage_with_buttons();
        stage.attach_input();

        stage.mouse_down(400, 380);
        stage.detach_input();
        for button in stage.buttons() {
            assert_eq!(button.state(), ButtonState::Normal);
        }

        // The release after re-attach must not count as a click
        stage.attach_input();
        assert_eq!(stage.mouse_up(400, 380), None);
    }

    #[test]
    fn test_clear_discards_buttons() {
        let mut stage = stage_with_buttons();
        assert_eq!(stage.buttons().len(), 5);
        stage.clear();
        assert!(stage.buttons().is_empty());
    }

    #[test]
    fn test_viewport_update() {
        let mut stage = stage_with_buttons();
        assert_eq!(stage.viewport(), (800, 600));
        stage.set_viewport(1600, 1200);
        assert_eq!(stage.viewport(), (1600, 1200));
    }
}
