//! Turn maneuvers carried in the direction byte of a navigation payload

/// Maneuver shown by the HUD glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Maneuver {
    /// Turn left
    Left,
    /// Turn right
    Right,
    /// Continue straight ahead
    Straight,
    /// No maneuver (unknown or absent direction code)
    #[default]
    None,
}

// Wire format values
pub const DIRECTION_LEFT: u8 = 0x08;
pub const DIRECTION_RIGHT: u8 = 0x0A;
pub const DIRECTION_STRAIGHT: u8 = 0x04;

/// Code written for [`Maneuver::None`] by the encoder
pub const DIRECTION_NONE: u8 = 0x00;

impl Maneuver {
    /// Parse a maneuver from its wire format byte
    ///
    /// Returns `None` for codes the navigation source may send but the HUD
    /// has no glyph for.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            DIRECTION_LEFT => Some(Maneuver::Left),
            DIRECTION_RIGHT => Some(Maneuver::Right),
            DIRECTION_STRAIGHT => Some(Maneuver::Straight),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_code(self) -> u8 {
        match self {
            Maneuver::Left => DIRECTION_LEFT,
            Maneuver::Right => DIRECTION_RIGHT,
            Maneuver::Straight => DIRECTION_STRAIGHT,
            Maneuver::None => DIRECTION_NONE,
        }
    }
}
