//! Distance baseline
//!
//! A leg starts with the first distance seen, and again whenever the
//! remaining distance grows (rerouting, a new destination). Zero in
//! `initial` means no leg has started yet.

use navhud_protocol::DistanceField;

/// Distance at the start of the current leg and the distance remaining now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DistanceBaseline {
    initial: u32,
    current: u32,
}

/// Progress through the current leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress {
    /// Meters covered since the leg started
    pub traveled: u32,
    /// Length of the leg in meters
    pub max: u32,
}

impl DistanceBaseline {
    /// No leg started
    pub const fn new() -> Self {
        Self {
            initial: 0,
            current: 0,
        }
    }

    /// Distance at the start of the leg (0 before the first reading)
    pub fn initial(&self) -> u32 {
        self.initial
    }

    /// Latest remaining distance
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Feed a decoded distance field
    ///
    /// Only `Meters` readings move the baseline; the other variants leave it
    /// untouched and return `None`.
    pub fn update(&mut self, distance: DistanceField) -> Option<Progress> {
        match distance {
            DistanceField::Meters(meters) => Some(self.record(meters)),
            DistanceField::Absent | DistanceField::NoRoute => None,
        }
    }

    /// Record a remaining distance in meters
    pub fn record(&mut self, meters: u32) -> Progress {
        self.current = meters;
        if self.initial == 0 || self.current > self.initial {
            self.initial = self.current;
        }
        self.progress()
    }

    /// Progress as of the last reading
    pub fn progress(&self) -> Progress {
        Progress {
            traveled: self.initial - self.current,
            max: self.initial,
        }
    }
}

impl Progress {
    /// Meters left in the leg
    pub fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.traveled)
    }

    /// Width of the filled part of a bar `inner` pixels wide
    pub fn fill_width(&self, inner: u16) -> u16 {
        if self.max == 0 {
            return 0;
        }
        let traveled = u64::from(self.traveled.min(self.max));
        let width = traveled * u64::from(inner) / u64::from(self.max);
        // traveled <= max, so width <= inner
        width.min(u64::from(inner)) as u16
    }
}
