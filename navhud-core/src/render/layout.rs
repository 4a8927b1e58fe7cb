//! Screen layout constants
//!
//! Coordinates are in pixels from the top-left corner of the 128x64 panel.

/// Large text scale (speed, banners)
pub const TEXT_LARGE: u8 = 2;
/// Small text scale (units, distance label)
pub const TEXT_SMALL: u8 = 1;

// Speed readout
pub const SPEED_X: i16 = 5;
pub const SPEED_Y: i16 = 10;
pub const UNIT_X: i16 = 5;
pub const UNIT_Y: i16 = 30;
pub const SPEED_UNIT: &str = "km/h";

// Progress bar
pub const BAR_X: i16 = 10;
pub const BAR_Y: i16 = 52;
pub const BAR_WIDTH: u16 = 108;
pub const BAR_HEIGHT: u16 = 12;
/// Fill area inside the one-pixel outline
pub const BAR_INNER_WIDTH: u16 = BAR_WIDTH - 2;
pub const BAR_INNER_HEIGHT: u16 = BAR_HEIGHT - 2;
pub const BAR_INNER_X: i16 = BAR_X + 1;
pub const BAR_INNER_Y: i16 = BAR_Y + 1;

// Remaining distance label, above the right end of the bar
pub const LABEL_X: i16 = 98;
pub const LABEL_Y: i16 = 42;
pub const DISTANCE_UNIT: &str = "m";
/// Shown in place of the bar when a distance could not be read
pub const DISTANCE_INVALID: &str = "--m";

// Banners
pub const BANNER_X: i16 = 20;
pub const BANNER_Y: i16 = 20;
pub const BANNER_BOOT: &str = "Starting...";
pub const BANNER_CONNECTED: &str = "Connected";
pub const BANNER_DISCONNECTED: &str = "Disconnected";
