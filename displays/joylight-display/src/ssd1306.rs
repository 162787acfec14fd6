//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! The driver holds no pixel data; frames are drawn into a
//! [`Framebuffer`] and pushed with [`Ssd1306::flush`].

use embedded_hal_async::i2c::I2c;

use crate::backend::DisplayError;
use crate::framebuffer::{Framebuffer, PAGES, WIDTH};

/// Control byte: following bytes are commands
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: following bytes are display RAM data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MEMORY_MODE: u8 = 0x20;
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

/// Page addressing mode argument for SET_MEMORY_MODE
const PAGE_ADDRESSING: u8 = 0x02;

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Initialize the display (internal charge pump, 128x64 panel)
    pub async fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80, // Default clock
            cmd::SET_MUX_RATIO,
            0x3F, // 64 lines
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::SET_MEMORY_MODE,
            PAGE_ADDRESSING,
            cmd::SET_SEG_REMAP,    // Column 127 mapped to SEG0
            cmd::SET_COM_SCAN_DEC, // Scan from COM63
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
            cmd::RESUME_FROM_RAM,
            cmd::SET_NORMAL,
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c).await?;
        }

        Ok(())
    }

    /// Send a command to the display
    async fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .await
            .map_err(|_| DisplayError::Communication)
    }

    /// Transfer the frame buffer to the display
    pub async fn flush(&mut self, frame: &Framebuffer) -> Result<(), DisplayError> {
        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;

        for page in 0..PAGES {
            self.command(cmd::SET_PAGE_ADDR | (page as u8)).await?;
            self.command(cmd::SET_LOW_COLUMN).await?;
            self.command(cmd::SET_HIGH_COLUMN).await?;

            data[1..].copy_from_slice(frame.page(page));
            self.i2c
                .write(self.address, &data)
                .await
                .map_err(|_| DisplayError::Communication)?;
        }

        Ok(())
    }
}
