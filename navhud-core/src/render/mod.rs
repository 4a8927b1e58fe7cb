//! Frame rendering
//!
//! Turns decoded updates and banners into draw commands on a
//! [`navhud_display::DrawSurface`]. Every frame starts with `clear` and ends
//! with `commit`.

pub mod dispatcher;
pub mod glyphs;
pub mod layout;

pub use dispatcher::{render_banner, render_navigation, DistanceDisplay};
pub use glyphs::Glyph;
