//! Drawing surface trait
//!
//! Defines the command set the HUD renders with. Every frame is built on an
//! off-screen buffer and only becomes visible on [`DrawSurface::commit`].

/// Drawing surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
    /// Buffer overflow
    BufferOverflow,
}

/// Screen coordinate (pixels, origin top-left)
pub type Vertex = (i16, i16);

/// How a rectangle is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RectStyle {
    /// One-pixel border only
    Outline,
    /// Solid fill
    Filled,
}

/// Drawing surface
///
/// Commands mirror a small GFX-style API: a text cursor with an integer
/// text scale, outlined or filled rectangles, filled triangles.
pub trait DrawSurface {
    /// Clear the off-screen frame
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Set the text scale (1 = small, 2 = large)
    fn set_text_size(&mut self, size: u8) -> Result<(), DisplayError>;

    /// Move the text cursor to the top-left corner of the next glyph
    fn set_cursor(&mut self, x: i16, y: i16) -> Result<(), DisplayError>;

    /// Print text at the cursor, advancing it
    fn print(&mut self, text: &str) -> Result<(), DisplayError>;

    /// Draw a rectangle
    ///
    /// Zero-sized rectangles draw nothing.
    fn draw_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        style: RectStyle,
    ) -> Result<(), DisplayError>;

    /// Fill a triangle
    fn fill_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) -> Result<(), DisplayError>;

    /// Make the off-screen frame visible
    fn commit(&mut self) -> Result<(), DisplayError>;
}
