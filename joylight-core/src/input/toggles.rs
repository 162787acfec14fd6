//! Toggle state driven by button presses
//!
//! The joystick button flips the accent light and advances the border style
//! in one step. Both live in a single packed byte so the render loop never
//! sees one updated without the other:
//!
//! ```text
//! bit 2     accent light on
//! bits 1..0 border style index
//! ```

use portable_atomic::{AtomicBool, AtomicU8, Ordering};

use super::InputLine;

const BORDER_MASK: u8 = 0b011;
const ACCENT_BIT: u8 = 0b100;

/// Border drawn around the display edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// No border
    None,
    /// One-pixel outline on the display bounds
    Single,
    /// Outline plus a second outline inset by two pixels
    Double,
    /// Every fourth pixel along each edge
    Dotted,
}

impl BorderStyle {
    /// Border style for an index, wrapping modulo 4
    pub const fn from_index(index: u8) -> Self {
        match index & BORDER_MASK {
            0 => BorderStyle::None,
            1 => BorderStyle::Single,
            2 => BorderStyle::Double,
            _ => BorderStyle::Dotted,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Next style in the cycle
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }
}

/// Snapshot of the toggle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Toggles {
    /// Accent (green) LED forced to full brightness
    pub accent_on: bool,
    /// Current border style
    pub border: BorderStyle,
    /// All LEDs enabled
    pub lighting_enabled: bool,
}

impl Toggles {
    /// State at power-up
    pub const INITIAL: Self = Self {
        accent_on: false,
        border: BorderStyle::None,
        lighting_enabled: true,
    };
}

impl Default for Toggles {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Advance the packed joystick byte by one press
const fn advance(packed: u8) -> u8 {
    let border = BorderStyle::from_index(packed).next().index();
    let accent = (packed ^ ACCENT_BIT) & ACCENT_BIT;
    accent | border
}

/// Shared toggle state
///
/// Written by the edge context via [`ToggleState::apply`], read by the
/// render loop via [`ToggleState::snapshot`].
pub struct ToggleState {
    /// Packed accent bit and border index
    joystick: AtomicU8,
    lighting_enabled: AtomicBool,
}

impl Default for ToggleState {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleState {
    pub const fn new() -> Self {
        Self {
            joystick: AtomicU8::new(0),
            lighting_enabled: AtomicBool::new(true),
        }
    }

    /// Apply one accepted press
    pub fn apply(&self, line: InputLine) {
        match line {
            InputLine::JoystickButton => {
                self.joystick
                    .fetch_update(Ordering::AcqRel, Ordering::Acquire, |packed| {
                        Some(advance(packed))
                    })
                    .ok();
            }
            InputLine::ButtonA => {
                self.lighting_enabled.fetch_xor(true, Ordering::AcqRel);
            }
        }
    }

    /// Read the current state
    pub fn snapshot(&self) -> Toggles {
        let packed = self.joystick.load(Ordering::Acquire);
        Toggles {
            accent_on: packed & ACCENT_BIT != 0,
            border: BorderStyle::from_index(packed),
            lighting_enabled: self.lighting_enabled.load(Ordering::Acquire),
        }
    }
}
