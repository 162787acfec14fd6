//! Scene rendering
//!
//! Each frame is the 8x8 marker plus the selected border, drawn onto a
//! cleared [`Framebuffer`] with its rectangle and pixel primitives.

use joylight_core::config::MARKER_SIZE;
use joylight_core::{BorderStyle, MarkerPosition};

use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};

/// Inset of the inner outline of the double border
pub const DOUBLE_INSET: u32 = 2;

/// Spacing between dots of the dotted border
pub const DOT_SPACING: usize = 4;

/// Clear `fb` and draw the marker and border
pub fn render(fb: &mut Framebuffer, marker: MarkerPosition, border: BorderStyle) {
    fb.clear();
    draw_marker(fb, marker);
    draw_border(fb, border);
}

/// Draw the filled marker square
pub fn draw_marker(fb: &mut Framebuffer, marker: MarkerPosition) {
    let size = MARKER_SIZE as u32;
    fb.fill_rect(marker.x as i32, marker.y as i32, size, size, true, true);
}

/// Draw `border` around the edge of the display
pub fn draw_border(fb: &mut Framebuffer, border: BorderStyle) {
    let (width, height) = (WIDTH as u32, HEIGHT as u32);

    match border {
        BorderStyle::None => {}
        BorderStyle::Single => fb.fill_rect(0, 0, width, height, true, false),
        BorderStyle::Double => {
            fb.fill_rect(0, 0, width, height, true, false);
            let inset = DOUBLE_INSET as i32;
            fb.fill_rect(
                inset,
                inset,
                width - 2 * DOUBLE_INSET,
                height - 2 * DOUBLE_INSET,
                true,
                false,
            );
        }
        BorderStyle::Dotted => draw_dotted(fb),
    }
}

/// Every `DOT_SPACING`th pixel along the four edges
///
/// Dots start at the top-left corner of each edge; edges are not joined,
/// so the right and bottom ends only carry a dot where the spacing lands.
fn draw_dotted(fb: &mut Framebuffer) {
    let (right, bottom) = (WIDTH - 1, HEIGHT - 1);

    for x in (0..WIDTH).step_by(DOT_SPACING) {
        fb.set_pixel(x, 0, true);
        fb.set_pixel(x, bottom, true);
    }
    for y in (0..HEIGHT).step_by(DOT_SPACING) {
        fb.set_pixel(0, y, true);
        fb.set_pixel(right, y, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(marker: MarkerPosition, border: BorderStyle) -> Framebuffer {
        let mut fb = Framebuffer::new();
        render(&mut fb, marker, border);
        fb
    }

    #[test]
    fn test_marker_only() {
        let fb = rendered(MarkerPosition::CENTER, BorderStyle::None);

        assert_eq!(fb.lit_count(), 64);
        for y in 28..36 {
            for x in 60..68 {
                assert!(fb.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let mut fb = Framebuffer::new();
        render(&mut fb, MarkerPosition { x: 0, y: 0 }, BorderStyle::Double);
        render(&mut fb, MarkerPosition { x: 100, y: 50 }, BorderStyle::None);

        assert_eq!(fb.lit_count(), 64);
        assert!(!fb.pixel(0, 0));
        assert!(fb.pixel(107, 55));
    }

    #[test]
    fn test_marker_at_far_corner_stays_on_screen() {
        let fb = rendered(MarkerPosition { x: 120, y: 56 }, BorderStyle::None);

        assert_eq!(fb.lit_count(), 64);
        assert!(fb.pixel(WIDTH - 1, HEIGHT - 1));
    }

    #[test]
    fn test_single_border() {
        let mut fb = Framebuffer::new();
        draw_border(&mut fb, BorderStyle::Single);

        assert_eq!(fb.lit_count(), 380);
        assert!(fb.pixel(0, 0));
        assert!(fb.pixel(WIDTH - 1, 0));
        assert!(fb.pixel(0, HEIGHT - 1));
        assert!(fb.pixel(WIDTH - 1, HEIGHT - 1));
        assert!(!fb.pixel(2, 2));
    }

    #[test]
    fn test_double_border() {
        let mut fb = Framebuffer::new();
        draw_border(&mut fb, BorderStyle::Double);

        // Outer 128x64 plus inner 124x60 outline
        assert_eq!(fb.lit_count(), 380 + (2 * 124 + 2 * 58));
        assert!(fb.pixel(2, 2));
        assert!(fb.pixel(125, 61));
        assert!(!fb.pixel(1, 1));
        assert!(!fb.pixel(3, 3));
    }

    #[test]
    fn test_dotted_border() {
        let mut fb = Framebuffer::new();
        draw_border(&mut fb, BorderStyle::Dotted);

        for x in (0..WIDTH).step_by(4) {
            assert!(fb.pixel(x, 0));
            assert!(fb.pixel(x, HEIGHT - 1));
        }
        for y in (0..HEIGHT).step_by(4) {
            assert!(fb.pixel(0, y));
            assert!(fb.pixel(WIDTH - 1, y));
        }

        // Gaps between dots
        assert!(!fb.pixel(1, 0));
        assert!(!fb.pixel(0, 2));
        assert!(!fb.pixel(WIDTH - 1, HEIGHT - 1));

        // 32 dots per horizontal edge, 16 per vertical, only (0, 0) shared
        assert_eq!(fb.lit_count(), 32 + 32 + 16 + 16 - 1);
    }

    #[test]
    fn test_no_border() {
        let mut fb = Framebuffer::new();
        draw_border(&mut fb, BorderStyle::None);
        assert_eq!(fb.lit_count(), 0);
    }
}
