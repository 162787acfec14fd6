//! Render/control loop step
//!
//! One call to [`Controller::step`] is one iteration of the firmware loop
//! minus the I/O: it turns two axis samples and the current toggles into
//! LED duties, a marker position and a border style. The marker position is
//! the only state carried from one iteration to the next.

use crate::config::{BoardConfig, JoystickConfig, DISPLAY_HEIGHT, DISPLAY_WIDTH, MARKER_SIZE};
use crate::input::{BorderStyle, Toggles};
use crate::mapping::{deviation, intensity, map_axis, Orientation};
use crate::traits::AnalogInput;

/// ADC channel wired to the vertical axis (GPIO26)
pub const Y_AXIS_CHANNEL: u8 = 0;

/// ADC channel wired to the horizontal axis (GPIO27)
pub const X_AXIS_CHANNEL: u8 = 1;

/// Horizontal travel of the marker's left edge
pub const X_SPAN: u16 = DISPLAY_WIDTH - MARKER_SIZE;

/// Vertical travel of the marker's top edge
pub const Y_SPAN: u16 = DISPLAY_HEIGHT - MARKER_SIZE;

/// Raw samples for both joystick axes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSamples {
    pub x: u16,
    pub y: u16,
}

impl AxisSamples {
    /// Both axes at rest
    pub const fn centered(config: &JoystickConfig) -> Self {
        Self {
            x: config.center,
            y: config.center,
        }
    }
}

/// Top-left pixel of the marker square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarkerPosition {
    pub x: u16,
    pub y: u16,
}

impl MarkerPosition {
    /// Marker centered on the display
    pub const CENTER: Self = Self {
        x: DISPLAY_WIDTH / 2 - MARKER_SIZE / 2,
        y: DISPLAY_HEIGHT / 2 - MARKER_SIZE / 2,
    };
}

impl Default for MarkerPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Duty values for the three LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedDuties {
    /// Follows horizontal deflection
    pub red: u16,
    /// Accent light
    pub green: u16,
    /// Follows vertical deflection
    pub blue: u16,
}

impl LedDuties {
    pub const OFF: Self = Self {
        red: 0,
        green: 0,
        blue: 0,
    };
}

/// Output of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub duties: LedDuties,
    pub marker: MarkerPosition,
    pub border: BorderStyle,
}

/// Sample both axes, vertical first
pub fn sample_axes<A: AnalogInput>(adc: &mut A) -> Result<AxisSamples, A::Error> {
    let y = adc.read_channel(Y_AXIS_CHANNEL)?;
    let x = adc.read_channel(X_AXIS_CHANNEL)?;
    Ok(AxisSamples { x, y })
}

/// Loop-persistent control state
pub struct Controller {
    joystick: JoystickConfig,
    pwm_max: u16,
    marker: MarkerPosition,
}

impl Controller {
    /// Create a controller with the marker centered
    pub const fn new(joystick: JoystickConfig, pwm_max: u16) -> Self {
        Self {
            joystick,
            pwm_max,
            marker: MarkerPosition::CENTER,
        }
    }

    pub const fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.joystick, config.leds.pwm_max)
    }

    /// Current marker position
    pub fn marker(&self) -> MarkerPosition {
        self.marker
    }

    /// Run one iteration
    pub fn step(&mut self, samples: AxisSamples, toggles: Toggles) -> Frame {
        let samples = AxisSamples {
            x: samples.x.min(self.joystick.adc_max),
            y: samples.y.min(self.joystick.adc_max),
        };

        let duties = if toggles.lighting_enabled {
            self.duties(samples, toggles.accent_on)
        } else {
            LedDuties::OFF
        };

        self.track_marker(samples);

        Frame {
            duties,
            marker: self.marker,
            border: toggles.border,
        }
    }

    fn duties(&self, samples: AxisSamples, accent_on: bool) -> LedDuties {
        let j = &self.joystick;
        let level = |sample| {
            intensity(
                deviation(sample, j.center),
                j.deadzone,
                j.half_range(),
                self.pwm_max,
            )
        };

        LedDuties {
            red: level(samples.x),
            green: if accent_on { self.pwm_max } else { 0 },
            blue: level(samples.y),
        }
    }

    /// Move the marker; axes inside the deadzone keep their coordinate
    fn track_marker(&mut self, samples: AxisSamples) {
        let j = &self.joystick;

        let x = map_axis(samples.x, j.deadzone, j.center, j.adc_max, X_SPAN, Orientation::Normal);
        if let Some(x) = x {
            self.marker.x = x;
        }

        let y = map_axis(samples.y, j.deadzone, j.center, j.adc_max, Y_SPAN, Orientation::Inverted);
        if let Some(y) = y {
            self.marker.y = y;
        }
    }
}
