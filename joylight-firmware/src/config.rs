//! Compiled-in board configuration
//!
//! `BOARD_CONFIG` is generated by build.rs from `board.toml`, which has
//! already been validated when this file compiles.

use joylight_core::config::{BoardConfig, DisplayConfig, InputConfig, JoystickConfig, LedConfig};

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
