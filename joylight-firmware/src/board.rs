//! Board wiring
//!
//! GPIO numbers for the joystick/LED/OLED carrier. Peripheral handles are
//! taken in `main`; these numbers identify the button lines to the edge
//! latch and appear in logs.

/// Joystick push button (active low, pull-up)
pub const JOYSTICK_BUTTON_PIN: u8 = 22;

/// Button A (active low, pull-up)
pub const BUTTON_A_PIN: u8 = 5;

/// Green LED, PWM slice 5 channel B
pub const LED_GREEN_PIN: u8 = 11;

/// Blue LED, PWM slice 6 channel A
pub const LED_BLUE_PIN: u8 = 12;

/// Red LED, PWM slice 6 channel B
pub const LED_RED_PIN: u8 = 13;

/// OLED I2C1 data
pub const OLED_SDA_PIN: u8 = 14;

/// OLED I2C1 clock
pub const OLED_SCL_PIN: u8 = 15;

/// Joystick vertical axis (ADC input 0)
pub const JOYSTICK_Y_PIN: u8 = 26;

/// Joystick horizontal axis (ADC input 1)
pub const JOYSTICK_X_PIN: u8 = 27;
