//! Board configuration
//!
//! Tunables live in `board.toml` next to the firmware crate and are
//! validated at build time. Pin wiring is fixed by the board and stays in
//! firmware code; the panel geometry is fixed by the framebuffer.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display width in pixels
pub const DISPLAY_WIDTH: u16 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: u16 = 64;

/// Side length of the square marker in pixels
pub const MARKER_SIZE: u16 = 8;

/// Highest I2C bus frequency accepted (fast-mode plus)
pub const MAX_I2C_FREQUENCY_HZ: u32 = 1_000_000;

/// Joystick ADC configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct JoystickConfig {
    /// Highest raw sample (12-bit ADC = 4095)
    pub adc_max: u16,
    /// Raw sample at rest
    pub center: u16,
    /// Deviations below this are treated as no movement
    pub deadzone: u16,
}

impl JoystickConfig {
    pub const DEFAULT: Self = Self {
        adc_max: 4095,
        center: 2048,
        deadzone: 200,
    };

    /// Largest deflection from center that maps to full intensity
    pub const fn half_range(&self) -> u16 {
        self.adc_max / 2
    }
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Button input configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct InputConfig {
    /// Minimum time between accepted presses on one button (ms)
    pub debounce_ms: u32,
}

impl InputConfig {
    pub const DEFAULT: Self = Self { debounce_ms: 500 };
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// LED PWM configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct LedConfig {
    /// PWM wrap value; also the full-brightness duty
    pub pwm_max: u16,
    /// PWM slice clock divider (125 MHz / 4 = 31.25 MHz)
    pub clock_divider: u8,
}

impl LedConfig {
    pub const DEFAULT: Self = Self {
        pwm_max: 1250,
        clock_divider: 4,
    };
}

impl Default for LedConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// OLED bus configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DisplayConfig {
    /// 7-bit I2C address of the SSD1306
    pub i2c_address: u8,
    /// I2C bus frequency in Hz
    pub i2c_frequency_hz: u32,
}

impl DisplayConfig {
    pub const DEFAULT: Self = Self {
        i2c_address: 0x3C,
        i2c_frequency_hz: 400_000,
    };
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BoardConfig {
    /// Sleep between render/control loop iterations (ms)
    pub loop_period_ms: u32,
    pub joystick: JoystickConfig,
    pub input: InputConfig,
    pub leds: LedConfig,
    pub display: DisplayConfig,
}

impl BoardConfig {
    pub const DEFAULT: Self = Self {
        loop_period_ms: 10,
        joystick: JoystickConfig::DEFAULT,
        input: InputConfig::DEFAULT,
        leds: LedConfig::DEFAULT,
        display: DisplayConfig::DEFAULT,
    };

    /// Check the configuration for values the firmware cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let joystick = &self.joystick;

        if joystick.center > joystick.adc_max {
            return Err(ConfigError::CenterOutOfRange);
        }
        if joystick.deadzone >= joystick.half_range() {
            return Err(ConfigError::DeadzoneTooWide);
        }
        if self.leds.pwm_max == 0 {
            return Err(ConfigError::ZeroPwmTop);
        }
        if self.leds.clock_divider == 0 {
            return Err(ConfigError::ZeroClockDivider);
        }
        if self.loop_period_ms == 0 {
            return Err(ConfigError::ZeroLoopPeriod);
        }
        if self.display.i2c_address > 0x7F {
            return Err(ConfigError::InvalidI2cAddress);
        }
        if self.display.i2c_frequency_hz == 0
            || self.display.i2c_frequency_hz > MAX_I2C_FREQUENCY_HZ
        {
            return Err(ConfigError::InvalidI2cFrequency);
        }

        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Joystick center is above the ADC maximum
    CenterOutOfRange,
    /// Deadzone swallows the whole half range
    DeadzoneTooWide,
    /// PWM wrap value is zero
    ZeroPwmTop,
    /// PWM clock divider is zero
    ZeroClockDivider,
    /// Render loop period is zero
    ZeroLoopPeriod,
    /// I2C address does not fit in 7 bits
    InvalidI2cAddress,
    /// I2C frequency is zero or above fast-mode plus
    InvalidI2cFrequency,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::CenterOutOfRange => "joystick.center must not exceed joystick.adc_max",
            ConfigError::DeadzoneTooWide => "joystick.deadzone must be below adc_max / 2",
            ConfigError::ZeroPwmTop => "leds.pwm_max must be non-zero",
            ConfigError::ZeroClockDivider => "leds.clock_divider must be non-zero",
            ConfigError::ZeroLoopPeriod => "loop_period_ms must be non-zero",
            ConfigError::InvalidI2cAddress => "display.i2c_address must be a 7-bit address",
            ConfigError::InvalidI2cFrequency => "display.i2c_frequency_hz must be 1..=1000000",
        };
        f.write_str(msg)
    }
}
