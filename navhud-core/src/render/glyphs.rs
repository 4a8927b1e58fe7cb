//! Maneuver glyphs
//!
//! Each glyph is a short list of filled shapes placed right of the speed
//! readout.

use navhud_display::{DisplayError, DrawSurface, RectStyle, Vertex};
use navhud_protocol::{DistanceField, Maneuver, NavigationUpdate};

/// Icon drawn in the maneuver area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    LeftArrow,
    RightArrow,
    StraightArrow,
    /// Shown while the navigation source has no route
    Destination,
}

/// One filled shape of a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rect { x: i16, y: i16, width: u16, height: u16 },
    Triangle(Vertex, Vertex, Vertex),
}

const LEFT_ARROW: &[Shape] = &[
    Shape::Rect { x: 85, y: 5, width: 11, height: 25 },
    Shape::Rect { x: 72, y: 5, width: 13, height: 10 },
    Shape::Triangle((59, 10), (72, 0), (72, 20)),
];

const RIGHT_ARROW: &[Shape] = &[
    Shape::Rect { x: 85, y: 5, width: 11, height: 25 },
    Shape::Rect { x: 96, y: 5, width: 13, height: 10 },
    Shape::Triangle((122, 10), (109, 0), (109, 20)),
];

const STRAIGHT_ARROW: &[Shape] = &[
    Shape::Rect { x: 90, y: 10, width: 11, height: 19 },
    Shape::Triangle((95, 2), (79, 14), (111, 14)),
];

const DESTINATION: &[Shape] = &[
    Shape::Rect { x: 80, y: 10, width: 8, height: 30 },
    Shape::Rect { x: 100, y: 10, width: 8, height: 30 },
    Shape::Rect { x: 88, y: 22, width: 12, height: 6 },
];

impl Glyph {
    /// Glyph for an update, if any
    ///
    /// The destination icon wins over the maneuver when there is no route.
    pub fn for_update(update: &NavigationUpdate) -> Option<Self> {
        if update.distance == DistanceField::NoRoute {
            return Some(Glyph::Destination);
        }
        match update.maneuver {
            Maneuver::Left => Some(Glyph::LeftArrow),
            Maneuver::Right => Some(Glyph::RightArrow),
            Maneuver::Straight => Some(Glyph::StraightArrow),
            Maneuver::None => None,
        }
    }

    fn shapes(self) -> &'static [Shape] {
        match self {
            Glyph::LeftArrow => LEFT_ARROW,
            Glyph::RightArrow => RIGHT_ARROW,
            Glyph::StraightArrow => STRAIGHT_ARROW,
            Glyph::Destination => DESTINATION,
        }
    }

    /// Draw the glyph
    pub fn draw<S: DrawSurface + ?Sized>(self, surface: &mut S) -> Result<(), DisplayError> {
        for shape in self.shapes() {
            match *shape {
                Shape::Rect { x, y, width, height } => {
                    surface.draw_rect(x, y, width, height, RectStyle::Filled)?
                }
                Shape::Triangle(a, b, c) => surface.fill_triangle(a, b, c)?,
            }
        }
        Ok(())
    }
}
