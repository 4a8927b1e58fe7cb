//! Render dispatcher
//!
//! Issues the draw commands for one frame. The caller decides what the
//! distance area shows; this module only lays it out.

use core::fmt::Write;

use heapless::String;
use navhud_display::{DisplayError, DrawSurface, RectStyle};
use navhud_protocol::NavigationUpdate;

use super::glyphs::Glyph;
use super::layout;
use crate::trip::Progress;

/// What to show in the distance area under the glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DistanceDisplay {
    /// Nothing (no distance text, or no route)
    Hidden,
    /// Progress bar with the remaining distance
    Bar(Progress),
    /// Placeholder label for a distance that could not be read
    Invalid,
}

/// Draw a full navigation frame and commit it
pub fn render_navigation<S: DrawSurface + ?Sized>(
    surface: &mut S,
    update: &NavigationUpdate,
    distance: DistanceDisplay,
) -> Result<(), DisplayError> {
    surface.clear()?;

    let mut speed: String<3> = String::new();
    write!(speed, "{}", update.speed_kmh).map_err(|_| DisplayError::BufferOverflow)?;
    surface.set_text_size(layout::TEXT_LARGE)?;
    surface.set_cursor(layout::SPEED_X, layout::SPEED_Y)?;
    surface.print(&speed)?;

    surface.set_text_size(layout::TEXT_SMALL)?;
    surface.set_cursor(layout::UNIT_X, layout::UNIT_Y)?;
    surface.print(layout::SPEED_UNIT)?;

    if let Some(glyph) = Glyph::for_update(update) {
        glyph.draw(surface)?;
    }

    match distance {
        DistanceDisplay::Hidden => {}
        DistanceDisplay::Bar(progress) => draw_bar(surface, progress)?,
        DistanceDisplay::Invalid => {
            surface.set_text_size(layout::TEXT_SMALL)?;
            surface.set_cursor(layout::LABEL_X, layout::LABEL_Y)?;
            surface.print(layout::DISTANCE_INVALID)?;
        }
    }

    surface.commit()
}

fn draw_bar<S: DrawSurface + ?Sized>(
    surface: &mut S,
    progress: Progress,
) -> Result<(), DisplayError> {
    surface.draw_rect(
        layout::BAR_X,
        layout::BAR_Y,
        layout::BAR_WIDTH,
        layout::BAR_HEIGHT,
        RectStyle::Outline,
    )?;

    let fill = progress.fill_width(layout::BAR_INNER_WIDTH);
    if fill > 0 {
        surface.draw_rect(
            layout::BAR_INNER_X,
            layout::BAR_INNER_Y,
            fill,
            layout::BAR_INNER_HEIGHT,
            RectStyle::Filled,
        )?;
    }

    // u32::MAX plus unit is 11 characters
    let mut label: String<11> = String::new();
    write!(label, "{}{}", progress.remaining(), layout::DISTANCE_UNIT)
        .map_err(|_| DisplayError::BufferOverflow)?;
    surface.set_text_size(layout::TEXT_SMALL)?;
    surface.set_cursor(layout::LABEL_X, layout::LABEL_Y)?;
    surface.print(&label)
}

/// Draw a one-line banner and commit it
pub fn render_banner<S: DrawSurface + ?Sized>(
    surface: &mut S,
    text: &str,
) -> Result<(), DisplayError> {
    surface.clear()?;
    surface.set_text_size(layout::TEXT_LARGE)?;
    surface.set_cursor(layout::BANNER_X, layout::BANNER_Y)?;
    surface.print(text)?;
    surface.commit()
}
