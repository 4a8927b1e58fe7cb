//! Runtime counters
//!
//! All counters wrap on overflow.

use navhud_protocol::{Anomalies, NoOp};

/// Counters collected by [`crate::Hud`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Diagnostics {
    /// Write payloads received, including ignored ones
    pub payloads: u32,
    /// Zero-length payloads
    pub empty_payloads: u32,
    /// Payloads with a tag other than navigation
    pub unknown_tags: u32,
    /// Navigation payloads missing speed or direction
    pub short_payloads: u32,
    /// Direction codes with no glyph
    pub unknown_directions: u32,
    /// Distance texts that needed lenient parsing
    pub malformed_distances: u32,
    /// Frames aborted by a surface error
    pub surface_errors: u32,
    /// Frames committed
    pub frames: u32,
    /// Peer connect notifications
    pub connects: u32,
    /// Peer disconnect notifications
    pub disconnects: u32,
    /// Failed requests to resume advertising
    pub advertising_failures: u32,
}

impl Diagnostics {
    /// All counters at zero
    pub const fn new() -> Self {
        Self {
            payloads: 0,
            empty_payloads: 0,
            unknown_tags: 0,
            short_payloads: 0,
            unknown_directions: 0,
            malformed_distances: 0,
            surface_errors: 0,
            frames: 0,
            connects: 0,
            disconnects: 0,
            advertising_failures: 0,
        }
    }

    /// Count an ignored payload
    pub fn record_noop(&mut self, reason: NoOp) {
        match reason {
            NoOp::Empty => bump(&mut self.empty_payloads),
            NoOp::UnknownTag(_) => bump(&mut self.unknown_tags),
        }
    }

    /// Count the anomalies of one decoded update
    pub fn record_anomalies(&mut self, anomalies: &Anomalies) {
        if anomalies.short_payload {
            bump(&mut self.short_payloads);
        }
        if anomalies.unknown_direction.is_some() {
            bump(&mut self.unknown_directions);
        }
        if anomalies.malformed_distance {
            bump(&mut self.malformed_distances);
        }
    }

    /// Total number of inputs that were ignored or papered over
    pub fn malformed_inputs(&self) -> u32 {
        self.empty_payloads
            .wrapping_add(self.unknown_tags)
            .wrapping_add(self.short_payloads)
            .wrapping_add(self.unknown_directions)
            .wrapping_add(self.malformed_distances)
    }
}

pub(crate) fn bump(counter: &mut u32) {
    *counter = counter.wrapping_add(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_noop() {
        let mut diag = Diagnostics::new();
        diag.record_noop(NoOp::Empty);
        diag.record_noop(NoOp::UnknownTag(7));
        diag.record_noop(NoOp::UnknownTag(2));
        assert_eq!(diag.empty_payloads, 1);
        assert_eq!(diag.unknown_tags, 2);
        assert_eq!(diag.malformed_inputs(), 3);
    }

    #[test]
    fn test_record_anomalies() {
        let mut diag = Diagnostics::new();
        diag.record_anomalies(&Anomalies::default());
        assert_eq!(diag.malformed_inputs(), 0);

        diag.record_anomalies(&Anomalies {
            short_payload: false,
            unknown_direction: Some(0x03),
            malformed_distance: true,
        });
        assert_eq!(diag.unknown_directions, 1);
        assert_eq!(diag.malformed_distances, 1);
        assert_eq!(diag.short_payloads, 0);
    }

    #[test]
    fn test_counters_wrap() {
        let mut diag = Diagnostics {
            frames: u32::MAX,
            ..Diagnostics::new()
        };
        bump(&mut diag.frames);
        assert_eq!(diag.frames, 0);
    }
}
