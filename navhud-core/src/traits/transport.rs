//! Wireless transport trait

/// Errors reported by the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// Radio stack refused the request
    Rejected,
    /// Radio stack is not running
    NotReady,
}

/// Trait for the link the navigation source talks over
///
/// The transport owns the radio and delivers [`crate::Event`]s; the HUD only
/// asks it to become discoverable again after a peer leaves.
pub trait Transport {
    /// Resume advertising so a navigation source can reconnect
    fn start_advertising(&mut self) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn start_advertising(&mut self) -> Result<(), TransportError> {
        (**self).start_advertising()
    }
}
