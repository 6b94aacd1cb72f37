//! Menu Layout
//!
//! Pure geometry computation for the title-menu button column. Keeping this
//! free of any rendering types means the layout can be recomputed (and
//! tested) without a window or canvas; the title screen calls it once at
//! construction and again on every resize.

/// Button width as a fraction of window width
pub const BUTTON_WIDTH_RATIO: f32 = 0.3;

/// Button height as a fraction of window height
pub const BUTTON_HEIGHT_RATIO: f32 = 0.08;

/// Vertical gap between buttons as a fraction of window height
pub const BUTTON_SPACING_RATIO: f32 = 0.02;

/// Reference window size the font scale is calibrated against
const FONT_BASE_WIDTH: f32 = 800.0;
const FONT_BASE_HEIGHT: f32 = 600.0;

/// Screen-space placement of a single button, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub font_scale: f32,
}

/// Computes the label font scale for a window size.
///
/// Scales against an 800x600 reference, taking the smaller of the two axis
/// ratios so text never over-stretches on non-4:3 windows.
pub fn font_scale(window_width: u32, window_height: u32) -> f32 {
    let wr = window_width as f32 / FONT_BASE_WIDTH;
    let hr = window_height as f32 / FONT_BASE_HEIGHT;
    wr.min(hr) * 1.2
}

/// Computes the geometry of a vertical menu of `count` buttons for a window
/// of the given size.
///
/// Each button is 30% of the window wide and 8% tall, centered horizontally,
/// stacked downward from mid-height with a 2%-of-height gap. The first
/// button's top edge sits at `height/2 - button_height`, so the column
/// occupies the lower half of the window.
pub fn menu_layout(count: usize, window_width: u32, window_height: u32) -> Vec<ButtonGeometry> {
    let w = window_width as f32;
    let h = window_height as f32;

    // Round, don't truncate: the ratios are not exactly representable in
    // f32, and truncation would shave a pixel off exact multiples.
    let button_width = (w * BUTTON_WIDTH_RATIO).round();
    let button_height = (h * BUTTON_HEIGHT_RATIO).round();
    let spacing = (h * BUTTON_SPACING_RATIO).round();

    let x = ((w - button_width) / 2.0).round();
    let start_y = h * 0.5 - button_height;
    let scale = font_scale(window_width, window_height);

    (0..count)
        .map(|i| ButtonGeometry {
            x: x as i32,
            y: (start_y + i as f32 * (button_height + spacing)).round() as i32,
            width: button_width as u32,
            height: button_height as u32,
            font_scale: scale,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_dimensions_follow_window_ratios() {
        let layout = menu_layout(5, 1000, 500);
        for geometry in &layout {
            assert_eq!(geometry.width, 300); // 0.3 * 1000
            assert_eq!(geometry.height, 40); // 0.08 * 500
        }
    }

    #[test]
    fn test_buttons_share_centered_x() {
        let layout = menu_layout(5, 800, 600);
        let expected_x = ((800.0 - 800.0 * 0.3) / 2.0) as i32;
        for geometry in &layout {
            assert_eq!(geometry.x, expected_x);
        }
    }

    #[test]
    fn test_vertical_gap_is_height_plus_spacing() {
        let layout = menu_layout(5, 800, 600);
        // 0.08 * 600 + 0.02 * 600 = 48 + 12 = 60
        for pair in layout.windows(2) {
            assert_eq!(pair[1].y - pair[0].y, 60);
        }
    }

    #[test]
    fn test_reference_window_scenario() {
        // 800x600: width 240, height 48, x = 280, tops stacked from
        // mid-height (252) in 60-pixel steps
        let layout = menu_layout(5, 800, 600);
        assert_eq!(layout.len(), 5);

        let ys: Vec<i32> = layout.iter().map(|g| g.y).collect();
        assert_eq!(ys, vec![252, 312, 372, 432, 492]);

        for geometry in &layout {
            assert_eq!(geometry.x, 280);
            assert_eq!(geometry.width, 240);
            assert_eq!(geometry.height, 48);
        }
    }

    #[test]
    fn test_doubling_window_doubles_geometry() {
        let small = menu_layout(5, 800, 600);
        let large = menu_layout(5, 1600, 1200);

        assert_eq!(small.len(), large.len());
        for (s, l) in small.iter().zip(&large) {
            assert_eq!(l.x, s.x * 2);
            assert_eq!(l.y, s.y * 2);
            assert_eq!(l.width, s.width * 2);
            assert_eq!(l.height, s.height * 2);
        }
    }

    #[test]
    fn test_font_scale_reference_window() {
        // min(800/800, 600/600) * 1.2 = 1.2
        let scale = font_scale(800, 600);
        assert!((scale - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_font_scale_uses_smaller_axis_ratio() {
        // Ultra-wide window: height ratio governs
        let scale = font_scale(2400, 600);
        assert!((scale - 1.2).abs() < f32::EPSILON);

        // Tall window: width ratio governs
        let scale = font_scale(800, 1800);
        assert!((scale - 1.2).abs() < f32::EPSILON);
    }

    #[test]
    fn test_font_scale_positive_for_positive_windows() {
        for &(w, h) in &[(1, 1), (320, 240), (800, 600), (3840, 2160)] {
            assert!(font_scale(w, h) > 0.0, "font scale must be positive for {}x{}", w, h);
        }
    }

    #[test]
    fn test_layout_count_matches_request() {
        assert_eq!(menu_layout(0, 800, 600).len(), 0);
        assert_eq!(menu_layout(3, 800, 600).len(), 3);
        assert_eq!(menu_layout(5, 800, 600).len(), 5);
    }
}
