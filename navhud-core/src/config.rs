//! HUD configuration
//!
//! Everything here is fixed at construction. Screen geometry lives in
//! [`crate::render::layout`].

/// Runtime options for [`crate::Hud`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HudConfig {
    /// Malformed distance texts leave the baseline alone and show `--m`
    /// instead of the progress bar
    pub strict_distance: bool,
}

impl HudConfig {
    /// Default configuration: lenient distance parsing
    pub const fn new() -> Self {
        Self {
            strict_distance: false,
        }
    }

    /// Configuration with strict distance handling
    pub const fn strict() -> Self {
        Self {
            strict_distance: true,
        }
    }
}
