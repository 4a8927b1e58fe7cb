//! Drawing surfaces and panel driver for the navhud heads-up display
//!
//! This crate provides:
//! - `DrawSurface` trait, the command set the HUD core renders with
//! - `Recorder`, a surface that captures commands per frame
//! - `Framebuffer` and `GraphicsSurface`, rasterizing commands with
//!   `embedded-graphics` into a double-buffered 128x64 monochrome frame
//! - `Sh1106`, an async I2C driver that pushes committed frames to the panel
//!
//! # Architecture
//!
//! ```text
//! navhud-core ──DrawSurface──▶ GraphicsSurface ──front()──▶ Sh1106 ──I2C──▶ OLED
//!                        └───▶ Recorder (tests, diagnostics)
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod command;
pub mod framebuffer;
pub mod sh1106;
pub mod surface;

// Re-export key types
pub use backend::{DisplayError, DrawSurface, RectStyle, Vertex};
pub use command::{DrawCommand, Recorder};
pub use framebuffer::{Framebuffer, HEIGHT, WIDTH};
pub use sh1106::Sh1106;
pub use surface::GraphicsSurface;
