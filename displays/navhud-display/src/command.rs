//! Recording surface
//!
//! Captures draw commands instead of pixels. Used to compare frames in tests
//! and to mirror what was shown for diagnostics.

use heapless::{String, Vec};

use crate::backend::{DisplayError, DrawSurface, RectStyle, Vertex};

/// Longest text a single print command can carry
pub const MAX_TEXT_LEN: usize = 24;

/// Most commands a single frame can hold
pub const MAX_FRAME_COMMANDS: usize = 32;

/// A recorded draw command
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCommand {
    /// Clear the frame
    Clear,
    /// Set text scale
    TextSize(u8),
    /// Move text cursor
    Cursor { x: i16, y: i16 },
    /// Print text at cursor
    Print(String<MAX_TEXT_LEN>),
    /// Draw a rectangle
    Rect {
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        style: RectStyle,
    },
    /// Fill a triangle
    Triangle { a: Vertex, b: Vertex, c: Vertex },
}

/// Surface that records commands frame by frame
///
/// Commands accumulate until [`DrawSurface::commit`], which replaces the
/// last committed frame with them.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    pending: Vec<DrawCommand, MAX_FRAME_COMMANDS>,
    committed: Vec<DrawCommand, MAX_FRAME_COMMANDS>,
    commits: u32,
}

impl Recorder {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self {
            pending: Vec::new(),
            committed: Vec::new(),
            commits: 0,
        }
    }

    /// Commands of the last committed frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.committed
    }

    /// Commands issued since the last commit
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Number of frames committed so far
    pub fn commits(&self) -> u32 {
        self.commits
    }

    /// Texts printed in the last committed frame, in order
    pub fn printed(&self) -> impl Iterator<Item = &str> {
        self.committed.iter().filter_map(|cmd| match cmd {
            DrawCommand::Print(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of filled triangles in the last committed frame
    pub fn triangles(&self) -> usize {
        self.committed
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Triangle { .. }))
            .count()
    }

    fn push(&mut self, command: DrawCommand) -> Result<(), DisplayError> {
        self.pending
            .push(command)
            .map_err(|_| DisplayError::BufferOverflow)
    }
}

impl DrawSurface for Recorder {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.pending.clear();
        self.push(DrawCommand::Clear)
    }

    fn set_text_size(&mut self, size: u8) -> Result<(), DisplayError> {
        self.push(DrawCommand::TextSize(size))
    }

    fn set_cursor(&mut self, x: i16, y: i16) -> Result<(), DisplayError> {
        self.push(DrawCommand::Cursor { x, y })
    }

    fn print(&mut self, text: &str) -> Result<(), DisplayError> {
        let mut owned = String::new();
        owned
            .push_str(text)
            .map_err(|_| DisplayError::BufferOverflow)?;
        self.push(DrawCommand::Print(owned))
    }

    fn draw_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        style: RectStyle,
    ) -> Result<(), DisplayError> {
        self.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            style,
        })
    }

    fn fill_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) -> Result<(), DisplayError> {
        self.push(DrawCommand::Triangle { a, b, c })
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.committed = core::mem::take(&mut self.pending);
        self.commits = self.commits.wrapping_add(1);
        Ok(())
    }
}
