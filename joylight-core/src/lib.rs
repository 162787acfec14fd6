//! Board-agnostic core logic for the joystick light firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Board configuration types and validation
//! - Deadzone mapping and the LED intensity curve
//! - Debounced button edge latch and toggle state
//! - The render/control loop step
//! - Hardware abstraction traits (analog input) and the LED bank

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod input;
pub mod leds;
pub mod mapping;
pub mod traits;

pub use config::{BoardConfig, ConfigError};
pub use control::{AxisSamples, Controller, Frame, LedDuties, MarkerPosition};
pub use input::{BorderStyle, InputLine, InputPath, Press, Toggles};
