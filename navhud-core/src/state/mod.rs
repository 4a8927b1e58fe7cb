//! Connection state machine
//!
//! The HUD only tracks whether a navigation source is connected. Transport
//! notifications are the only thing that moves it.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::ConnectionState;
