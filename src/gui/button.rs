//! Menu Button Component
//!
//! A labeled, clickable rectangle for screen-space menus. Visuals come from
//! a [`ButtonSkin`]: two 1x1 solid-color fill textures (normal and
//! hover/pressed) stretched over the button rect, plus text colors for the
//! procedurally rendered label.
//!
//! Interaction follows the press-then-release convention: a click fires only
//! when the pointer is released over a button it was pressed on.

use crate::gui::layout::ButtonGeometry;
use crate::text::draw_text_centered;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::{Point, Rect};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::surface::Surface;
use sdl2::video::{Window, WindowContext};

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Fill color in the normal state (semi-transparent dark blue)
    pub normal_color: Color,

    /// Fill color while hovered or pressed
    pub hover_color: Color,

    /// Label color in the normal state
    pub text_color: Color,

    /// Label color while hovered or pressed
    pub hover_text_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            normal_color: Color::RGBA(51, 51, 153, 204),
            hover_color: Color::RGBA(77, 77, 204, 255),
            text_color: Color::RGB(255, 255, 255),
            hover_text_color: Color::RGB(191, 191, 191),
        }
    }
}

/// Fill textures and text colors shared by every button on a screen.
///
/// The fill textures are generated 1x1 solid-color surfaces; stretching a
/// single pixel over the button rect gives a flat fill without shipping any
/// button artwork. Owned by the screen that created it and released with it.
pub struct ButtonSkin<'a> {
    normal: Texture<'a>,
    hover: Texture<'a>,
    style: ButtonStyle,
}

impl<'a> ButtonSkin<'a> {
    /// Builds a skin from a style, generating the two fill textures.
    pub fn new(
        texture_creator: &'a TextureCreator<WindowContext>,
        style: ButtonStyle,
    ) -> Result<Self, String> {
        let normal = create_fill_texture(texture_creator, style.normal_color)?;
        let hover = create_fill_texture(texture_creator, style.hover_color)?;
        Ok(ButtonSkin {
            normal,
            hover,
            style,
        })
    }

    /// Gets the style this skin was built from
    #[allow(dead_code)] // Reserved for future style inspection
    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }
}

/// Creates a 1x1 solid-color texture with alpha blending enabled.
fn create_fill_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    color: Color,
) -> Result<Texture<'a>, String> {
    let mut surface = Surface::new(1, 1, PixelFormatEnum::RGBA32)?;
    surface.fill_rect(None, color)?;

    let mut texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| e.to_string())?;
    texture.set_blend_mode(BlendMode::Blend);
    Ok(texture)
}

/// Pointer-interaction state of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

/// A labeled menu button at a fixed screen position.
///
/// Buttons are cheap value objects built from a [`ButtonGeometry`]; the
/// title screen throws the whole set away and rebuilds it when the window
/// is resized.
pub struct Button {
    label: String,
    rect: Rect,
    font_scale: f32,
    state: ButtonState,
}

impl Button {
    /// Creates a button with the given label and placement.
    pub fn new(label: &str, geometry: ButtonGeometry) -> Self {
        Button {
            label: label.to_string(),
            rect: Rect::new(geometry.x, geometry.y, geometry.width, geometry.height),
            font_scale: geometry.font_scale,
            state: ButtonState::Normal,
        }
    }

    #[allow(dead_code)] // Inspection accessor, exercised by tests
    pub fn label(&self) -> &str {
        &self.label
    }

    #[allow(dead_code)] // Inspection accessor, exercised by tests
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[allow(dead_code)] // Inspection accessor, exercised by tests
    pub fn font_scale(&self) -> f32 {
        self.font_scale
    }

    #[allow(dead_code)] // Inspection accessor, exercised by tests
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns the button to its neutral state, dropping any hover or
    /// in-flight press.
    pub fn reset(&mut self) {
        self.state = ButtonState::Normal;
    }

    /// Whether the point lies inside the button rect.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(Point::new(x, y))
    }

    /// Updates hover state from pointer movement.
    ///
    /// A pressed button stays pressed until the pointer is released, even if
    /// the pointer leaves the rect.
    pub fn mouse_motion(&mut self, x: i32, y: i32) {
        if self.state != ButtonState::Pressed {
            self.state = if self.contains(x, y) {
                ButtonState::Hovered
            } else {
                ButtonState::Normal
            };
        }
    }

    /// Registers a pointer press. Returns true if the press landed on this
    /// button.
    pub fn mouse_down(&mut self, x: i32, y: i32) -> bool {
        if self.contains(x, y) {
            self.state = ButtonState::Pressed;
            true
        } else {
            false
        }
    }

    /// Registers a pointer release. Returns true if this completes a click
    /// (press and release both on this button).
    pub fn mouse_up(&mut self, x: i32, y: i32) -> bool {
        let inside = self.contains(x, y);
        let clicked = self.state == ButtonState::Pressed && inside;
        self.state = if inside {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        };
        clicked
    }

    /// Draws the button: state-appropriate fill stretched over the rect,
    /// then the label centered on top.
    pub fn render(&self, canvas: &mut Canvas<Window>, skin: &ButtonSkin) -> Result<(), String> {
        let (fill, text_color) = match self.state {
            ButtonState::Normal => (&skin.normal, skin.style.text_color),
            // Pressed shares the hover visuals
            ButtonState::Hovered | ButtonState::Pressed => {
                (&skin.hover, skin.style.hover_text_color)
            }
        };

        canvas.copy(fill, None, self.rect)?;
        draw_text_centered(canvas, &self.label, self.rect, text_color, self.font_scale)
    }
}
