//! Bitmap Text Rendering
//!
//! Procedural text rendering using a 5x7 bitmap font drawn as SDL2
//! rectangles. Supports fractional scaling (button labels scale smoothly
//! with the window) and text measurement for centering.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Glyph cell width in font pixels (excluding the 1-pixel advance gap)
const GLYPH_WIDTH: u32 = 5;

/// Glyph cell height in font pixels
const GLYPH_HEIGHT: u32 = 7;

/// Horizontal advance per character in font pixels (5 + 1 spacing)
const GLYPH_ADVANCE: u32 = 6;

/// Returns the 7-row bit pattern for a character (1 = pixel on).
///
/// Lookup is case-insensitive. Unknown characters render as a full block.
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => [0b11111; 7], // Full block for unknown characters
    }
}

/// Computes the rendered width of `text` in pixels at the given scale.
///
/// The trailing advance gap after the last character is not counted, so the
/// result is suitable for centering text inside a rectangle.
pub fn text_width(text: &str, scale: f32) -> u32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0;
    }
    let font_pixels = chars * GLYPH_ADVANCE - (GLYPH_ADVANCE - GLYPH_WIDTH);
    (font_pixels as f32 * scale).round() as u32
}

/// Computes the rendered height of a line of text at the given scale.
pub fn text_height(scale: f32) -> u32 {
    (GLYPH_HEIGHT as f32 * scale).round().max(1.0) as u32
}

/// Computes the top-left origin that centers text of size `(text_w, text_h)`
/// inside `bounds`.
pub fn centered_origin(bounds: Rect, text_w: u32, text_h: u32) -> (i32, i32) {
    let x = bounds.x() + (bounds.width() as i32 - text_w as i32) / 2;
    let y = bounds.y() + (bounds.height() as i32 - text_h as i32) / 2;
    (x, y)
}

/// Draws `text` with its top-left corner at `(x, y)`.
///
/// Each font pixel becomes a filled rectangle of `scale` x `scale` window
/// pixels. Fractional scales are supported; rectangle sizes round up so
/// adjacent pixels never leave gaps.
pub fn draw_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: f32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let pixel_size = scale.ceil().max(1.0) as u32;

    for (i, c) in text.chars().enumerate() {
        let origin_x = x as f32 + i as f32 * GLYPH_ADVANCE as f32 * scale;
        let pattern = glyph(c);

        for (row, &bits) in pattern.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        (origin_x + col as f32 * scale).round() as i32,
                        (y as f32 + row as f32 * scale).round() as i32,
                        pixel_size,
                        pixel_size,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Draws `text` centered inside `bounds`.
pub fn draw_text_centered(
    canvas: &mut Canvas<Window>,
    text: &str,
    bounds: Rect,
    color: Color,
    scale: f32,
) -> Result<(), String> {
    let (x, y) = centered_origin(bounds, text_width(text, scale), text_height(scale));
    draw_text(canvas, text, x, y, color, scale)
}
