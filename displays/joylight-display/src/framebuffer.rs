//! Monochrome framebuffer
//!
//! One bit per pixel, organized in the SSD1306 page layout: eight pages of
//! 128 column bytes, bit `n` of a column byte is row `page * 8 + n`. The
//! buffer can be flushed to the panel page by page without reshuffling.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};

use joylight_core::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Display dimensions
pub const WIDTH: usize = DISPLAY_WIDTH as usize;
pub const HEIGHT: usize = DISPLAY_HEIGHT as usize;
pub const PAGES: usize = HEIGHT / 8;

/// 128x64 one-bit framebuffer
#[derive(Clone)]
pub struct Framebuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank framebuffer
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set or reset a pixel; coordinates outside the panel are ignored
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }

        let mask = 1 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read a pixel; coordinates outside the panel read as off
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Draw a rectangle, either filled or as a one-pixel outline
    ///
    /// The outline lies on the rectangle's outermost pixels, so a
    /// `width` x `height` outline never extends past `x + width - 1`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, on: bool, filled: bool) {
        let color = BinaryColor::from(on);
        let style = if filled {
            PrimitiveStyle::with_fill(color)
        } else {
            PrimitiveStyleBuilder::new()
                .stroke_color(color)
                .stroke_width(1)
                .stroke_alignment(StrokeAlignment::Inside)
                .build()
        };

        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(style)
            .draw(self)
            .ok();
    }

    /// Raw page data for page `page` (0-7)
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Number of pixels currently on
    pub fn lit_count(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones())
            .sum()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            page.fill(fill);
        }
        Ok(())
    }
}
