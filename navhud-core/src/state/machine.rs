//! Connection state definition

use super::events::Event;

/// Link state with the navigation source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionState {
    /// No peer; advertising
    #[default]
    Disconnected,
    /// A peer is connected
    Connected,
}

impl ConnectionState {
    /// Check if a peer is connected
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    /// Process an event and return the next state
    ///
    /// Repeated notifications are accepted in any state. Writes never move
    /// the state.
    pub fn transition(self, event: &Event<'_>) -> Self {
        match event {
            Event::PeerConnected => ConnectionState::Connected,
            Event::PeerDisconnected => ConnectionState::Disconnected,
            Event::Write(_) => self,
        }
    }
}
