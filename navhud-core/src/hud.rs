//! HUD coordinator
//!
//! Owns every piece of runtime state and runs one decode → update → render
//! cycle per transport event. Nothing here blocks or allocates.
//!
//! Surface errors abort the frame being drawn. They are counted and logged
//! but never reach the transport; the baseline update of that cycle stands.

use navhud_display::{DisplayError, DrawSurface};
use navhud_protocol::{decode, Decoded, NavigationUpdate, NoOp};

use crate::config::HudConfig;
use crate::diagnostics::{bump, Diagnostics};
use crate::log::{log_debug, log_info, log_warn};
use crate::render::{layout, render_banner, render_navigation, DistanceDisplay};
use crate::state::{ConnectionState, Event};
use crate::traits::Transport;
use crate::trip::DistanceBaseline;

/// Which frame a cycle drew
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Power-on splash
    Boot,
    /// Peer connected banner
    Connected,
    /// Peer disconnected banner
    Disconnected,
    /// Speed, maneuver and distance
    Navigation,
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Payload produced nothing to draw; the screen is unchanged
    Ignored(NoOp),
    /// A frame was drawn and committed
    Rendered(Screen),
    /// The surface failed while drawing; the frame was not committed
    Dropped(Screen, DisplayError),
}

/// The heads-up display
pub struct Hud<S, T> {
    surface: S,
    transport: T,
    config: HudConfig,
    baseline: DistanceBaseline,
    connection: ConnectionState,
    diagnostics: Diagnostics,
}

impl<S, T> Hud<S, T>
where
    S: DrawSurface,
    T: Transport,
{
    /// Create a HUD with no leg started and no peer connected
    pub const fn new(surface: S, transport: T, config: HudConfig) -> Self {
        Self {
            surface,
            transport,
            config,
            baseline: DistanceBaseline::new(),
            connection: ConnectionState::Disconnected,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Show the power-on splash
    pub fn boot(&mut self) -> Outcome {
        log_info!("HUD starting");
        self.draw(Screen::Boot, |surface| {
            render_banner(surface, layout::BANNER_BOOT)
        })
    }

    /// Handle one transport event
    pub fn handle(&mut self, event: Event<'_>) -> Outcome {
        if event.is_link_event() {
            self.connection = self.connection.transition(&event);
        }

        match event {
            Event::PeerConnected => {
                bump(&mut self.diagnostics.connects);
                log_info!("Peer connected");
                self.draw(Screen::Connected, |surface| {
                    render_banner(surface, layout::BANNER_CONNECTED)
                })
            }
            Event::PeerDisconnected => {
                bump(&mut self.diagnostics.disconnects);
                log_info!("Peer disconnected");
                let outcome = self.draw(Screen::Disconnected, |surface| {
                    render_banner(surface, layout::BANNER_DISCONNECTED)
                });
                if let Err(e) = self.transport.start_advertising() {
                    bump(&mut self.diagnostics.advertising_failures);
                    log_warn!("Failed to resume advertising: {:?}", e);
                }
                outcome
            }
            Event::Write(payload) => self.on_write(payload),
        }
    }

    fn on_write(&mut self, payload: &[u8]) -> Outcome {
        bump(&mut self.diagnostics.payloads);
        log_debug!("Received {} bytes", payload.len());

        match decode(payload) {
            Decoded::NoOp(reason) => {
                self.diagnostics.record_noop(reason);
                log_debug!("Ignoring payload: {:?}", reason);
                Outcome::Ignored(reason)
            }
            Decoded::Navigation(update, anomalies) => {
                if !anomalies.is_clean() {
                    self.diagnostics.record_anomalies(&anomalies);
                    log_warn!("Payload anomalies: {:?}", anomalies);
                }

                let distance = if self.config.strict_distance && anomalies.malformed_distance {
                    DistanceDisplay::Invalid
                } else {
                    self.track(&update)
                };

                self.draw(Screen::Navigation, |surface| {
                    render_navigation(surface, &update, distance)
                })
            }
        }
    }

    fn track(&mut self, update: &NavigationUpdate) -> DistanceDisplay {
        match self.baseline.update(update.distance) {
            Some(progress) => DistanceDisplay::Bar(progress),
            None => DistanceDisplay::Hidden,
        }
    }

    fn draw(
        &mut self,
        screen: Screen,
        frame: impl FnOnce(&mut S) -> Result<(), DisplayError>,
    ) -> Outcome {
        match frame(&mut self.surface) {
            Ok(()) => {
                bump(&mut self.diagnostics.frames);
                Outcome::Rendered(screen)
            }
            Err(e) => {
                bump(&mut self.diagnostics.surface_errors);
                log_warn!("Frame dropped: {:?}", e);
                Outcome::Dropped(screen, e)
            }
        }
    }
}

impl<S, T> Hud<S, T> {
    /// Drawing surface
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Drawing surface, mutably (e.g. to flush a framebuffer)
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Transport handle
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    pub fn baseline(&self) -> &DistanceBaseline {
        &self.baseline
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Take the surface and transport back
    pub fn into_parts(self) -> (S, T) {
        (self.surface, self.transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TransportError;
    use navhud_display::Recorder;

    #[derive(Default)]
    struct Radio {
        advertising: u32,
        fail: bool,
    }

    impl Transport for Radio {
        fn start_advertising(&mut self) -> Result<(), TransportError> {
            if self.fail {
                return Err(TransportError::NotReady);
            }
            self.advertising += 1;
            Ok(())
        }
    }

    fn hud() -> Hud<Recorder, Radio> {
        Hud::new(Recorder::new(), Radio::default(), HudConfig::default())
    }

    #[test]
    fn test_boot_splash() {
        let mut hud = hud();
        assert_eq!(hud.boot(), Outcome::Rendered(Screen::Boot));
        assert_eq!(hud.surface().printed().next(), Some("Starting..."));
        assert_eq!(hud.diagnostics().frames, 1);
    }

    #[test]
    fn test_empty_payload_ignored() {
        let mut hud = hud();
        assert_eq!(hud.handle(Event::Write(&[])), Outcome::Ignored(NoOp::Empty));
        assert_eq!(hud.surface().commits(), 0);
        assert_eq!(hud.diagnostics().payloads, 1);
        assert_eq!(hud.diagnostics().empty_payloads, 1);
    }

    #[test]
    fn test_unknown_tag_ignored() {
        let mut hud = hud();
        let outcome = hud.handle(Event::Write(&[0x02, 50, 0x08]));
        assert_eq!(outcome, Outcome::Ignored(NoOp::UnknownTag(0x02)));
        assert_eq!(hud.surface().commits(), 0);
        assert_eq!(hud.diagnostics().unknown_tags, 1);
    }

    #[test]
    fn test_short_payload_renders_defaults() {
        let mut hud = hud();
        let outcome = hud.handle(Event::Write(&[0x01, 50]));
        assert_eq!(outcome, Outcome::Rendered(Screen::Navigation));
        assert_eq!(hud.surface().printed().next(), Some("0"));
        assert_eq!(hud.surface().triangles(), 0);
        assert_eq!(hud.diagnostics().short_payloads, 1);
    }

    #[test]
    fn test_unknown_direction_counted() {
        let mut hud = hud();
        hud.handle(Event::Write(&[0x01, 50, 0x03]));
        assert_eq!(hud.diagnostics().unknown_directions, 1);
        assert_eq!(hud.surface().triangles(), 0);
    }

    #[test]
    fn test_write_keeps_connection_state() {
        let mut hud = hud();
        hud.handle(Event::PeerConnected);
        hud.handle(Event::Write(&[0x01, 20, 0x08]));
        hud.handle(Event::Write(&[]));
        assert!(hud.connection().is_connected());
    }

    #[test]
    fn test_connect_banner() {
        let mut hud = hud();
        assert_eq!(
            hud.handle(Event::PeerConnected),
            Outcome::Rendered(Screen::Connected)
        );
        assert!(hud.connection().is_connected());
        assert_eq!(hud.surface().printed().next(), Some("Connected"));
        assert_eq!(hud.transport().advertising, 0);
    }

    #[test]
    fn test_disconnect_resumes_advertising() {
        let mut hud = hud();
        hud.handle(Event::PeerConnected);
        assert_eq!(
            hud.handle(Event::PeerDisconnected),
            Outcome::Rendered(Screen::Disconnected)
        );
        assert!(!hud.connection().is_connected());
        assert_eq!(hud.surface().printed().next(), Some("Disconnected"));
        assert_eq!(hud.transport().advertising, 1);
    }

    #[test]
    fn test_advertising_failure_counted() {
        let radio = Radio {
            advertising: 0,
            fail: true,
        };
        let mut hud = Hud::new(Recorder::new(), radio, HudConfig::default());
        let outcome = hud.handle(Event::PeerDisconnected);
        assert_eq!(outcome, Outcome::Rendered(Screen::Disconnected));
        assert_eq!(hud.diagnostics().advertising_failures, 1);
    }

    /// Surface whose panel link is down
    struct Unplugged;

    impl DrawSurface for Unplugged {
        fn clear(&mut self) -> Result<(), DisplayError> {
            Ok(())
        }
        fn set_text_size(&mut self, _size: u8) -> Result<(), DisplayError> {
            Ok(())
        }
        fn set_cursor(&mut self, _x: i16, _y: i16) -> Result<(), DisplayError> {
            Ok(())
        }
        fn print(&mut self, _text: &str) -> Result<(), DisplayError> {
            Ok(())
        }
        fn draw_rect(
            &mut self,
            _x: i16,
            _y: i16,
            _width: u16,
            _height: u16,
            _style: navhud_display::RectStyle,
        ) -> Result<(), DisplayError> {
            Ok(())
        }
        fn fill_triangle(
            &mut self,
            _a: navhud_display::Vertex,
            _b: navhud_display::Vertex,
            _c: navhud_display::Vertex,
        ) -> Result<(), DisplayError> {
            Ok(())
        }
        fn commit(&mut self) -> Result<(), DisplayError> {
            Err(DisplayError::Communication)
        }
    }

    #[test]
    fn test_surface_error_keeps_baseline() {
        let mut hud = Hud::new(Unplugged, Radio::default(), HudConfig::default());
        let outcome = hud.handle(Event::Write(b"\x01\x0a\x04750"));
        assert_eq!(
            outcome,
            Outcome::Dropped(Screen::Navigation, DisplayError::Communication)
        );
        assert_eq!(hud.baseline().current(), 750);
        assert_eq!(hud.diagnostics().surface_errors, 1);
        assert_eq!(hud.diagnostics().frames, 0);
    }

    #[test]
    fn test_disconnect_advertises_even_if_banner_fails() {
        let mut hud = Hud::new(Unplugged, Radio::default(), HudConfig::default());
        let outcome = hud.handle(Event::PeerDisconnected);
        assert!(matches!(outcome, Outcome::Dropped(Screen::Disconnected, _)));
        assert_eq!(hud.transport().advertising, 1);
    }

    #[test]
    fn test_strict_mode_skips_malformed_distance() {
        let mut hud = Hud::new(Recorder::new(), Radio::default(), HudConfig::strict());
        hud.handle(Event::Write(b"\x01\x0a\x042000"));
        hud.handle(Event::Write(b"\x01\x0a\x04abc"));
        assert_eq!(hud.baseline().current(), 2000);
        assert_eq!(hud.surface().printed().last(), Some("--m"));
        assert_eq!(hud.diagnostics().malformed_distances, 1);
    }
}
