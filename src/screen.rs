//! Screen Lifecycle
//!
//! A screen is a full-window view with its own render and input lifecycle.
//! The application shell owns the window and event pump and drives whichever
//! screen is active through these hooks:
//!
//! - `show` when the screen becomes active, `hide` when it stops being
//!   displayed (input routing is attached/detached here)
//! - `handle_event` for every input event while active
//! - `render` every frame with the elapsed time since the previous frame
//! - `resize` on window-size changes, `pause`/`resume` on minimize/restore
//!
//! Resource release is `Drop`; a screen's textures and widgets go away with
//! the screen value, exactly once, however many frames were rendered.

use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Application-level request returned by a screen to its shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Terminate the application.
    Quit,
}

/// Lifecycle hooks a full-window view implements for the shell.
pub trait Screen {
    /// Called when this screen becomes the active screen.
    fn show(&mut self) {}

    /// Handles one input event. May return an action for the shell.
    fn handle_event(&mut self, event: &Event) -> Option<AppAction> {
        let _ = event;
        None
    }

    /// Renders one frame. `delta` is the time since the last frame in
    /// seconds.
    fn render(&mut self, canvas: &mut Canvas<Window>, delta: f32) -> Result<(), String>;

    /// Called when the window size changes.
    fn resize(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }

    /// Called when the window is minimized.
    fn pause(&mut self) {}

    /// Called when the window is restored.
    fn resume(&mut self) {}

    /// Called when this screen stops being displayed.
    fn hide(&mut self) {}
}
