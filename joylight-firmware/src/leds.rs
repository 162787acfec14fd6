//! PWM setup for the RGB LEDs

use embassy_rp::pwm::{Config as PwmConfig, PwmOutput};

use joylight_core::config::LedConfig;
use joylight_core::leds::LedBank;

/// Red (slice 6B), green (slice 5B) and blue (slice 6A) outputs
pub type Leds = LedBank<PwmOutput<'static>, PwmOutput<'static>, PwmOutput<'static>>;

/// Slice configuration: all LEDs start dark
pub fn pwm_config(config: &LedConfig) -> PwmConfig {
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = config.clock_divider.into();
    pwm_config.top = config.pwm_max;
    pwm_config.compare_a = 0;
    pwm_config.compare_b = 0;
    pwm_config
}
