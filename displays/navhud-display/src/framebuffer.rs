//! 1-bit framebuffer for 128x64 OLED panels
//!
//! Organized in pages the way SH1106/SSD1306 controllers expect: eight rows
//! of 8-pixel-tall columns, least significant bit on top. A page can be sent
//! to the panel as-is.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

/// Panel width in pixels
pub const WIDTH: usize = 128;
/// Panel height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// Monochrome framebuffer
#[derive(Clone, PartialEq, Eq)]
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
    pub fn blank(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set a single pixel; out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let mask = 1u8 << (y % 8);
        if on {
            self.pages[y / 8][x] |= mask;
        } else {
            self.pages[y / 8][x] &= !mask;
        }
    }

    /// Read a single pixel; out-of-range coordinates read as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Raw page data, top page first
    pub fn pages(&self) -> &[[u8; WIDTH]; PAGES] {
        &self.pages
    }

    /// Number of lit pixels
    pub fn lit_pixels(&self) -> u32 {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|column| column.count_ones())
            .sum()
    }

    /// Number of lit pixels inside a rectangle
    pub fn lit_in(&self, x: i32, y: i32, width: i32, height: i32) -> u32 {
        let mut count = 0;
        for py in y..y + height {
            for px in x..x + width {
                if self.pixel(px, py) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Framebuffer {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Framebuffer[{} lit]", self.lit_pixels());
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Framebuffer[{} lit]", self.lit_pixels())
    }
}
