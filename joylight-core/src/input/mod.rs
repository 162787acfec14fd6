//! Button input path
//!
//! Falling edges from the two buttons pass through the [`DebounceLatch`]
//! and, when accepted, flip the [`ToggleState`] read by the render loop.
//!
//! Everything here is shared between the edge context (written) and the
//! render loop (read) through lock-free atomics, so an [`InputPath`] can be
//! placed in a `static` and used from both sides without a mutex.

pub mod latch;
pub mod toggles;

pub use latch::DebounceLatch;
pub use toggles::{BorderStyle, ToggleState, Toggles};

/// Physical button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputLine {
    /// Push switch under the joystick: accent light and border style
    JoystickButton,
    /// Button A: lighting on/off
    ButtonA,
}

impl InputLine {
    /// All lines in latch slot order
    pub const ALL: [InputLine; 2] = [InputLine::JoystickButton, InputLine::ButtonA];

    pub(crate) const fn index(self) -> usize {
        match self {
            InputLine::JoystickButton => 0,
            InputLine::ButtonA => 1,
        }
    }
}

/// Logical press accepted by the latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Press {
    /// Button that was pressed
    pub line: InputLine,
    /// Edge timestamp (ms since boot)
    pub at_ms: u32,
}

/// Latch and toggle state wired together
///
/// The edge context calls [`InputPath::on_falling_edge`]; the render loop
/// calls [`InputPath::toggles`] once per iteration.
pub struct InputPath {
    latch: DebounceLatch,
    toggles: ToggleState,
}

impl InputPath {
    /// Create the input path for the given button pins
    pub const fn new(joystick_button_pin: u8, button_a_pin: u8, debounce_ms: u32) -> Self {
        Self {
            latch: DebounceLatch::new(joystick_button_pin, button_a_pin, debounce_ms),
            toggles: ToggleState::new(),
        }
    }

    /// Handle a raw falling edge on `pin` at `now_ms`
    ///
    /// Returns the press when the latch accepted the edge and the toggles
    /// were updated, `None` for bounces and unknown pins.
    pub fn on_falling_edge(&self, pin: u8, now_ms: u32) -> Option<Press> {
        let press = self.latch.on_falling_edge(pin, now_ms)?;
        self.toggles.apply(press.line);
        Some(press)
    }

    /// Current toggle values
    pub fn toggles(&self) -> Toggles {
        self.toggles.snapshot()
    }
}
