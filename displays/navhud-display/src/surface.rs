//! Framebuffer-backed drawing surface
//!
//! Rasterizes [`DrawSurface`] commands with `embedded-graphics` into a back
//! buffer. `commit` copies it to the front buffer, which is what a panel
//! driver flushes, so a half-drawn frame is never visible.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Point, Primitive, Size};
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;

use crate::backend::{DisplayError, DrawSurface, RectStyle, Vertex};
use crate::framebuffer::Framebuffer;

/// Drawing surface over a double-buffered [`Framebuffer`]
#[derive(Debug, Clone)]
pub struct GraphicsSurface {
    back: Framebuffer,
    front: Framebuffer,
    text_size: u8,
    cursor: Point,
    commits: u32,
}

impl Default for GraphicsSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsSurface {
    /// Create a surface with both buffers blank
    pub const fn new() -> Self {
        Self {
            back: Framebuffer::new(),
            front: Framebuffer::new(),
            text_size: 1,
            cursor: Point::zero(),
            commits: 0,
        }
    }

    /// Last committed frame
    pub fn front(&self) -> &Framebuffer {
        &self.front
    }

    /// Frame under construction
    pub fn back(&self) -> &Framebuffer {
        &self.back
    }

    /// Number of frames committed so far
    pub fn commits(&self) -> u32 {
        self.commits
    }

    /// Current text cursor
    pub fn cursor(&self) -> (i32, i32) {
        (self.cursor.x, self.cursor.y)
    }

    fn font(&self) -> &'static MonoFont<'static> {
        match self.text_size {
            0 | 1 => &FONT_6X10,
            _ => &FONT_10X20,
        }
    }
}

fn point((x, y): Vertex) -> Point {
    Point::new(i32::from(x), i32::from(y))
}

impl DrawSurface for GraphicsSurface {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.back.blank();
        Ok(())
    }

    fn set_text_size(&mut self, size: u8) -> Result<(), DisplayError> {
        self.text_size = size;
        Ok(())
    }

    fn set_cursor(&mut self, x: i16, y: i16) -> Result<(), DisplayError> {
        self.cursor = point((x, y));
        Ok(())
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let style = MonoTextStyle::new(self.font(), BinaryColor::On);
        let next = Text::with_baseline(text, self.cursor, style, Baseline::Top)
            .draw(&mut self.back)
            .map_err(|_| DisplayError::Communication)?;
        self.cursor = next;
        Ok(())
    }

    fn draw_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        style: RectStyle,
    ) -> Result<(), DisplayError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let style = match style {
            RectStyle::Outline => PrimitiveStyle::with_stroke(BinaryColor::On, 1),
            RectStyle::Filled => PrimitiveStyle::with_fill(BinaryColor::On),
        };
        Rectangle::new(
            point((x, y)),
            Size::new(u32::from(width), u32::from(height)),
        )
        .into_styled(style)
        .draw(&mut self.back)
        .map_err(|_| DisplayError::Communication)
    }

    fn fill_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) -> Result<(), DisplayError> {
        Triangle::new(point(a), point(b), point(c))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut self.back)
            .map_err(|_| DisplayError::Communication)
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.front = self.back.clone();
        self.commits = self.commits.wrapping_add(1);
        Ok(())
    }
}
