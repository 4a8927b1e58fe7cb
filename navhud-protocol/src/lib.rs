//! Navigation payload protocol for the navhud heads-up display
//!
//! The navigation app on the phone pushes one payload per GATT write. This
//! crate turns those raw bytes into a [`NavigationUpdate`]. The decoder is
//! total: malformed input degrades to defaults instead of failing.
//!
//! # Payload Overview
//!
//! ```text
//! ┌─────┬───────┬───────────┬──────────────────────┐
//! │ TAG │ SPEED │ DIRECTION │ DISTANCE TEXT        │
//! │ 1B  │ 1B    │ 1B        │ "No route" | "2.5km" │
//! │     │       │           │ | "750"              │
//! └─────┴───────┴───────────┴──────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod distance;
pub mod gatt;
pub mod maneuver;
pub mod messages;

pub use distance::{parse_distance, DistanceField, ParsedDistance, NO_ROUTE_MARKER};
pub use maneuver::Maneuver;
pub use messages::{
    decode, Anomalies, Decoded, NavigationUpdate, NoOp, ProtocolError, MAX_PAYLOAD_SIZE,
    MSG_NAVIGATION,
};
