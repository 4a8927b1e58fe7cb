//! Board-agnostic core logic for the navhud heads-up display
//!
//! This crate contains all application logic that does not depend on the
//! radio or the panel:
//!
//! - Distance baseline tracking (progress toward the destination)
//! - Connection state machine
//! - Render dispatcher (navigation frames, banners)
//! - The `Hud` coordinator that owns all state and runs one
//!   decode → update → render cycle per transport event
//! - `SharedHud`, the same coordinator behind a critical-section mutex

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod diagnostics;
pub mod hud;
mod log;
pub mod render;
pub mod shared;
pub mod state;
pub mod traits;
pub mod trip;

pub use config::HudConfig;
pub use diagnostics::Diagnostics;
pub use hud::{Hud, Outcome, Screen};
pub use shared::SharedHud;
pub use state::{ConnectionState, Event};
pub use traits::{Transport, TransportError};
pub use trip::{DistanceBaseline, Progress};
