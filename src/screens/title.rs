//! Title Screen
//!
//! The launcher's landing view: a full-window background image with a
//! vertically stacked, horizontally centered column of menu buttons.
//! Button geometry is recomputed from the window dimensions on every
//! resize (the whole set is discarded and rebuilt); between resizes the
//! layout is static.
//!
//! Only "Quit" is wired to an application action. The other entries are
//! explicit no-ops until their target screens exist.

use crate::gui::{menu_layout, Button, ButtonSkin, ButtonStyle, Stage};
use crate::screen::{AppAction, Screen};
use log::{debug, info};
use sdl2::event::Event;
use sdl2::image::LoadTexture;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

/// Fixed path of the title background image, relative to the asset root.
/// Missing or unreadable is a fatal startup condition.
pub const BACKGROUND_PATH: &str = "assets/title/title.png";

/// What a menu entry does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SinglePlay,
    MultiPlay,
    Rules,
    Settings,
    Quit,
}

impl MenuAction {
    /// Maps an activated entry to an application-level action.
    ///
    /// Only `Quit` terminates the application; the other entries have no
    /// target screens yet and deliberately do nothing.
    pub fn activate(self) -> Option<AppAction> {
        match self {
            MenuAction::Quit => Some(AppAction::Quit),
            MenuAction::SinglePlay
            | MenuAction::MultiPlay
            | MenuAction::Rules
            | MenuAction::Settings => None,
        }
    }
}

/// Menu entries in display order.
const MENU_ENTRIES: [(&str, MenuAction); 5] = [
    ("Single Play", MenuAction::SinglePlay),
    ("Multi Play", MenuAction::MultiPlay),
    ("Rules", MenuAction::Rules),
    ("Settings", MenuAction::Settings),
    ("Quit", MenuAction::Quit),
];

/// Discards the stage's buttons and rebuilds them for a window size.
///
/// This is the only place button geometry is computed, so the invariant
/// "button count equals entry count, geometry matches the current window"
/// holds by construction.
fn rebuild_menu(stage: &mut Stage, width: u32, height: u32) {
    stage.clear();
    let layout = menu_layout(MENU_ENTRIES.len(), width, height);
    for ((label, _), geometry) in MENU_ENTRIES.into_iter().zip(layout) {
        stage.add_button(Button::new(label, geometry));
    }
}

/// The title-menu view.
///
/// Owns its background texture, button skin, and stage; all of it is
/// released when the screen value is dropped.
pub struct TitleScreen<'a> {
    stage: Stage,
    background: Texture<'a>,
    skin: ButtonSkin<'a>,
}

impl<'a> TitleScreen<'a> {
    /// Builds the title screen for the current window size.
    ///
    /// Fails if the background image cannot be loaded; there is no recovery
    /// path, the error propagates to the shell and aborts startup.
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        window_width: u32,
        window_height: u32,
    ) -> Result<Self, String> {
        let background = texture_creator
            .load_texture(BACKGROUND_PATH)
            .map_err(|e| format!("Failed to load {}: {}", BACKGROUND_PATH, e))?;

        let skin = ButtonSkin::new(texture_creator, ButtonStyle::default())?;

        let mut stage = Stage::new(window_width, window_height);
        rebuild_menu(&mut stage, window_width, window_height);

        Ok(TitleScreen {
            stage,
            background,
            skin,
        })
    }

    /// Activates the menu entry behind a clicked button.
    fn activate_entry(&self, index: usize) -> Option<AppAction> {
        let (label, action) = MENU_ENTRIES[index];
        info!("Button pressed: {}", label);
        action.activate()
    }
}

impl Screen for TitleScreen<'_> {
    fn show(&mut self) {
        debug!("title screen shown");
        self.stage.attach_input();
    }

    fn handle_event(&mut self, event: &Event) -> Option<AppAction> {
        match *event {
            Event::MouseMotion { x, y, .. } => {
                self.stage.mouse_motion(x, y);
                None
            }
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                self.stage.mouse_down(x, y);
                None
            }
            Event::MouseButtonUp {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => {
                let clicked = self.stage.mouse_up(x, y);
                clicked.and_then(|index| self.activate_entry(index))
            }
            _ => None,
        }
    }

    fn render(&mut self, canvas: &mut Canvas<Window>, _delta: f32) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(0, 0, 0));
        canvas.clear();

        // Background stretched to exactly fill the window
        canvas.copy(&self.background, None, None)?;

        self.stage.render(canvas, &self.skin)
    }

    fn resize(&mut self, width: u32, height: u32) {
        debug!("title screen resized to {}x{}", width, height);
        self.stage.set_viewport(width, height);
        rebuild_menu(&mut self.stage, width, height);
    }

    // pause/resume: nothing to suspend on a static menu

    fn hide(&mut self) {
        debug!("title screen hidden");
        self.stage.detach_input();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::rect::Rect;

    #[test]
    fn test_quit_is_only_terminating_action() {
        for (label, action) in MENU_ENTRIES {
            match action {
                MenuAction::Quit => {
                    assert_eq!(action.activate(), Some(AppAction::Quit), "{}", label)
                }
                _ => assert_eq!(action.activate(), None, "{}", label),
            }
        }
    }

    #[test]
    fn test_menu_entries_in_display_order() {
        let labels: Vec<&str> = MENU_ENTRIES.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["Single Play", "Multi Play", "Rules", "Settings", "Quit"]
        );
    }

    #[test]
    fn test_rebuild_menu_builds_one_button_per_entry() {
        let mut stage = Stage::new(800, 600);
        rebuild_menu(&mut stage, 800, 600);

        assert_eq!(stage.buttons().len(), MENU_ENTRIES.len());
        for (button, (label, _)) in stage.buttons().iter().zip(MENU_ENTRIES) {
            assert_eq!(button.label(), label);
        }
    }

    #[test]
    fn test_rebuild_menu_recomputes_geometry() {
        let mut stage = Stage::new(800, 600);
        rebuild_menu(&mut stage, 800, 600);
        let before: Vec<Rect> = stage.buttons().iter().map(|b| b.rect()).collect();

        rebuild_menu(&mut stage, 1600, 1200);
        let after: Vec<Rect> = stage.buttons().iter().map(|b| b.rect()).collect();

        assert_eq!(before.len(), after.len());
        for (small, large) in before.iter().zip(&after) {
            assert_eq!(large.x(), small.x() * 2);
            assert_eq!(large.y(), small.y() * 2);
            assert_eq!(large.width(), small.width() * 2);
            assert_eq!(large.height(), small.height() * 2);
        }
    }

    #[test]
    fn test_rebuild_menu_never_accumulates_buttons() {
        let mut stage = Stage::new(800, 600);
        rebuild_menu(&mut stage, 800, 600);
        rebuild_menu(&mut stage, 1024, 768);
        rebuild_menu(&mut stage, 640, 480);
        assert_eq!(stage.buttons().len(), MENU_ENTRIES.len());
    }
}
