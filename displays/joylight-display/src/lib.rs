//! Display side of the joystick light firmware
//!
//! This crate provides:
//! - [`Framebuffer`]: 128x64 monochrome page buffer, an `embedded-graphics`
//!   draw target
//! - [`scene`]: marker and border rendering
//! - [`Ssd1306`]: async I2C driver that pushes a framebuffer to the panel
//!
//! Rendering and the bus are kept apart: scenes are drawn into a
//! framebuffer, and only [`Ssd1306::flush`] touches the hardware.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod framebuffer;
pub mod scene;
pub mod ssd1306;

// Re-export key types
pub use backend::DisplayError;
pub use framebuffer::{Framebuffer, HEIGHT, PAGES, WIDTH};
pub use ssd1306::Ssd1306;
