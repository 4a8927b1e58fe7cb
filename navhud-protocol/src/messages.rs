//! Navigation payload decoding
//!
//! Payloads arrive as whole GATT writes, one message per write:
//! ```text
//! ┌─────┬───────┬───────────┬──────────────────────┐
//! │ TAG │ SPEED │ DIRECTION │ DISTANCE TEXT        │
//! │ 1B  │ 1B    │ 1B        │ 0..N bytes (ASCII)   │
//! └─────┴───────┴───────────┴──────────────────────┘
//! ```
//!
//! The decoder never rejects input. Empty payloads and unknown tags are
//! ignored; everything else degrades to a usable [`NavigationUpdate`] and
//! reports what it had to paper over in [`Anomalies`].

use heapless::Vec;

use crate::distance::{parse_distance, DistanceField};
use crate::maneuver::Maneuver;

// Message type IDs: navigation source → HUD
pub const MSG_NAVIGATION: u8 = 0x01;

/// Offset of the speed byte
pub const SPEED_OFFSET: usize = 1;
/// Offset of the direction byte
pub const DIRECTION_OFFSET: usize = 2;
/// Offset of the distance text
pub const TEXT_OFFSET: usize = 3;

/// Largest payload the encoder produces (default ATT MTU minus header)
pub const MAX_PAYLOAD_SIZE: usize = 20;

/// Errors from encoding a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProtocolError {
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Decoded meaning of one navigation payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavigationUpdate {
    /// Current speed (km/h), unvalidated
    pub speed_kmh: u8,
    /// Maneuver glyph to show
    pub maneuver: Maneuver,
    /// Remaining distance information
    pub distance: DistanceField,
}

/// Why a payload produced nothing to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NoOp {
    /// Zero-length payload
    Empty,
    /// Message tag this HUD does not know
    UnknownTag(u8),
}

/// Irregularities the decoder absorbed while producing an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Anomalies {
    /// Navigation payload shorter than tag + speed + direction
    pub short_payload: bool,
    /// Direction code with no glyph
    pub unknown_direction: Option<u8>,
    /// Distance text needed lenient parsing
    pub malformed_distance: bool,
}

impl Anomalies {
    /// True if nothing was papered over
    pub fn is_clean(&self) -> bool {
        !self.short_payload && self.unknown_direction.is_none() && !self.malformed_distance
    }
}

/// Outcome of decoding one payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoded {
    /// Nothing to render
    NoOp(NoOp),
    /// A navigation update, with any anomalies met on the way
    Navigation(NavigationUpdate, Anomalies),
}

impl Decoded {
    /// The navigation update, if any
    pub fn update(&self) -> Option<&NavigationUpdate> {
        match self {
            Decoded::Navigation(update, _) => Some(update),
            Decoded::NoOp(_) => None,
        }
    }
}

/// Decode one payload received from the navigation source
pub fn decode(payload: &[u8]) -> Decoded {
    let Some(&tag) = payload.first() else {
        return Decoded::NoOp(NoOp::Empty);
    };

    match tag {
        MSG_NAVIGATION => {
            let (update, anomalies) = decode_navigation(payload);
            Decoded::Navigation(update, anomalies)
        }
        other => Decoded::NoOp(NoOp::UnknownTag(other)),
    }
}

fn decode_navigation(payload: &[u8]) -> (NavigationUpdate, Anomalies) {
    let mut update = NavigationUpdate::default();
    let mut anomalies = Anomalies::default();

    if payload.len() < TEXT_OFFSET {
        anomalies.short_payload = true;
        return (update, anomalies);
    }

    update.speed_kmh = payload[SPEED_OFFSET];

    let code = payload[DIRECTION_OFFSET];
    update.maneuver = match Maneuver::from_code(code) {
        Some(maneuver) => maneuver,
        None => {
            anomalies.unknown_direction = Some(code);
            Maneuver::None
        }
    };

    if payload.len() > TEXT_OFFSET {
        let parsed = parse_distance(&payload[TEXT_OFFSET..]);
        update.distance = parsed.field;
        anomalies.malformed_distance = !parsed.well_formed;
    }

    (update, anomalies)
}

impl NavigationUpdate {
    /// Encode this update in wire format
    ///
    /// Distances are written as plain meters. Returns the number of bytes
    /// written.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, ProtocolError> {
        let mut text = [0u8; 10];
        let text = match self.distance {
            DistanceField::Absent => &text[..0],
            DistanceField::NoRoute => crate::distance::NO_ROUTE_MARKER,
            DistanceField::Meters(meters) => format_decimal(meters, &mut text),
        };

        let len = TEXT_OFFSET + text.len();
        if buffer.len() < len {
            return Err(ProtocolError::BufferTooSmall);
        }

        buffer[0] = MSG_NAVIGATION;
        buffer[SPEED_OFFSET] = self.speed_kmh;
        buffer[DIRECTION_OFFSET] = self.maneuver.to_code();
        buffer[TEXT_OFFSET..len].copy_from_slice(text);

        Ok(len)
    }

    /// Encode this update into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_PAYLOAD_SIZE>, ProtocolError> {
        let mut buffer = [0u8; MAX_PAYLOAD_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| ProtocolError::BufferTooSmall)?;
        Ok(vec)
    }
}

/// Write `value` as ASCII decimal into the tail of `buf`
fn format_decimal(mut value: u32, buf: &mut [u8; 10]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[start..]
}
