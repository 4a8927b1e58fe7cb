//! Events delivered by the transport

/// Transport notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event<'a> {
    /// A navigation source connected
    PeerConnected,
    /// The navigation source went away
    PeerDisconnected,
    /// The navigation source wrote one payload
    Write(&'a [u8]),
}

impl Event<'_> {
    /// Check if this event changes the connection state
    pub fn is_link_event(&self) -> bool {
        matches!(self, Event::PeerConnected | Event::PeerDisconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_events() {
        assert!(Event::PeerConnected.is_link_event());
        assert!(Event::PeerDisconnected.is_link_event());
        assert!(!Event::Write(&[1, 2, 3]).is_link_event());
    }
}
