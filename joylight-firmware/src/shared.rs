//! State shared between the button tasks and the control loop
//!
//! Both sides only touch atomics: each button task is the sole writer of
//! its line's debounce timestamp and toggle, the control loop reads a
//! snapshot once per iteration.

use joylight_core::InputPath;

use crate::board::{BUTTON_A_PIN, JOYSTICK_BUTTON_PIN};
use crate::config::BOARD_CONFIG;

/// Debounce latch and toggle state for both buttons
pub static INPUTS: InputPath =
    InputPath::new(JOYSTICK_BUTTON_PIN, BUTTON_A_PIN, BOARD_CONFIG.input.debounce_ms);
