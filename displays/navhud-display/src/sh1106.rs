//! SH1106 OLED Display Driver
//!
//! Driver for 128x64 SH1106-based OLED panels via I2C. Pixels are drawn into
//! a [`Framebuffer`] elsewhere; this driver only initializes the controller
//! and pushes committed frames to it.

use embedded_hal_async::i2c::I2c;

use crate::framebuffer::{Framebuffer, WIDTH};

/// Default SH1106 I2C address (0x3C, some modules use 0x3D)
pub const SH1106_ADDR: u8 = 0x3C;

/// The SH1106 has 132 columns of RAM; 128-pixel panels start at column 2
const COLUMN_OFFSET: u8 = 2;

/// SH1106 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// Initialization sequence for a 128x64 panel
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14,                  // Enable charge pump
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF, // High contrast
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SH1106 OLED driver
pub struct Sh1106<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Sh1106<I2C>
where
    I2C: I2c,
{
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SH1106_ADDR)
    }

    /// Create a driver at a specific address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// Initialize the display
    pub async fn init(&mut self) -> Result<(), I2C::Error> {
        for &c in INIT_SEQUENCE {
            self.command(c).await?;
        }
        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd]).await
    }

    /// Push a frame to the panel, page by page
    pub async fn flush(&mut self, frame: &Framebuffer) -> Result<(), I2C::Error> {
        for (page, columns) in frame.pages().iter().enumerate() {
            self.command(cmd::SET_PAGE_ADDR | page as u8).await?;
            self.command(cmd::SET_LOW_COLUMN | COLUMN_OFFSET).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            let mut data = [0u8; WIDTH + 1];
            data[0] = CONTROL_DATA;
            data[1..].copy_from_slice(columns);
            self.i2c.write(self.address, &data).await?;
        }
        Ok(())
    }

    /// Set display contrast (0-255)
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST).await?;
        self.command(contrast).await
    }

    /// Turn display on/off
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON).await
        } else {
            self.command(cmd::DISPLAY_OFF).await
        }
    }

    /// Invert display colors
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), I2C::Error> {
        if inverted {
            self.command(cmd::SET_INVERSE).await
        } else {
            self.command(cmd::SET_NORMAL).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::PAGES;
    use core::convert::Infallible;
    use embassy_futures::block_on;
    use embedded_hal_async::i2c::{ErrorType, Operation};
    use heapless::Vec;

    /// Records every write as (address, control byte, payload byte, length)
    #[derive(Default)]
    struct MockBus {
        writes: Vec<(u8, u8, u8, usize), 64>,
    }

    impl ErrorType for MockBus {
        type Error = Infallible;
    }

    impl I2c for MockBus {
        async fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations.iter() {
                if let Operation::Write(bytes) = op {
                    let second = bytes.get(1).copied().unwrap_or(0);
                    let _ = self.writes.push((address, bytes[0], second, bytes.len()));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_init_sends_commands() {
        let mut oled = Sh1106::new(MockBus::default());
        block_on(oled.init()).unwrap();
        let bus = oled.release();

        assert_eq!(bus.writes.len(), INIT_SEQUENCE.len());
        assert!(bus.writes.iter().all(|w| w.0 == SH1106_ADDR && w.1 == 0x00));
        assert_eq!(bus.writes.last().map(|w| w.2), Some(cmd::DISPLAY_ON));
    }

    #[test]
    fn test_flush_writes_every_page() {
        let mut frame = Framebuffer::new();
        frame.set_pixel(0, 63, true);

        let mut oled = Sh1106::with_address(MockBus::default(), 0x3D);
        block_on(oled.flush(&frame)).unwrap();
        let bus = oled.release();

        // Three commands and one data write per page
        assert_eq!(bus.writes.len(), PAGES * 4);
        let data: Vec<_, 8> = bus.writes.iter().filter(|w| w.1 == 0x40).collect();
        assert_eq!(data.len(), PAGES);
        assert!(data.iter().all(|w| w.0 == 0x3D && w.3 == WIDTH + 1));
        // Row 63 is the bottom bit of the last page, column 0
        assert_eq!(data[PAGES - 1].2, 0x80);
        assert_eq!(bus.writes[0].2, cmd::SET_PAGE_ADDR);
        assert_eq!(bus.writes[1].2, cmd::SET_LOW_COLUMN | 2);
    }

    #[test]
    fn test_contrast() {
        let mut oled = Sh1106::new(MockBus::default());
        block_on(oled.set_contrast(0x10)).unwrap();
        let bus = oled.release();
        assert_eq!(bus.writes[0].2, cmd::SET_CONTRAST);
        assert_eq!(bus.writes[1].2, 0x10);
    }
}
