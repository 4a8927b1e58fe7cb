//! Collaborator traits
//!
//! The drawing surface trait lives in `navhud-display`; the transport the
//! HUD talks back to is defined here.

pub mod transport;

pub use navhud_display::DrawSurface;
pub use transport::{Transport, TransportError};
