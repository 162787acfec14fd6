//! Joylight - Joystick Light & Display Firmware
//!
//! Main firmware binary for RP2040 boards with an analog joystick, three
//! PWM LEDs and a 128x64 SSD1306 OLED. Deflecting the stick brightens the
//! red (horizontal) and blue (vertical) LEDs and steers an 8x8 marker;
//! the joystick button toggles the green accent LED and cycles the
//! display border, button A switches the lighting on and off.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c, InterruptHandler as I2cInterruptHandler};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::Pwm;
use {defmt_rtt as _, panic_probe as _};

use joylight_core::leds::LedBank;
use joylight_display::{Framebuffer, Ssd1306};

use crate::config::BOARD_CONFIG;
use crate::joystick::JoystickAdc;
use crate::tasks::ControlLoop;

mod board;
mod config;
mod joystick;
mod leds;
mod shared;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => I2cInterruptHandler<I2C1>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Joylight firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = &BOARD_CONFIG;
    info!(
        "Board config: deadzone={} center={} debounce={}ms pwm_max={} loop={}ms",
        config.joystick.deadzone,
        config.joystick.center,
        config.input.debounce_ms,
        config.leds.pwm_max,
        config.loop_period_ms
    );

    // Joystick axes (board wiring: Y on GPIO26 / ADC0, X on GPIO27 / ADC1)
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let y_axis = Channel::new_pin(p.PIN_26, Pull::None);
    let x_axis = Channel::new_pin(p.PIN_27, Pull::None);
    let joystick = JoystickAdc::new(adc, y_axis, x_axis);
    info!(
        "Joystick ADC initialized (Y=GPIO{}, X=GPIO{})",
        board::JOYSTICK_Y_PIN,
        board::JOYSTICK_X_PIN
    );

    // LEDs: blue GPIO12 / red GPIO13 share slice 6, green GPIO11 is slice 5B
    let pwm_config = leds::pwm_config(&config.leds);
    let (blue, red) =
        Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config.clone()).split();
    let (_, green) = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, pwm_config).split();
    let mut leds = LedBank::new(unwrap!(red), unwrap!(green), unwrap!(blue), config.leds.pwm_max);
    if let Err(channel) = leds.off() {
        warn!("LED {} did not accept initial duty", channel);
    }
    info!(
        "LED PWM initialized (R=GPIO{}, G=GPIO{}, B=GPIO{})",
        board::LED_RED_PIN,
        board::LED_GREEN_PIN,
        board::LED_BLUE_PIN
    );

    // OLED on I2C1
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = config.display.i2c_frequency_hz;
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c_config);

    let mut display = Ssd1306::new(i2c, config.display.i2c_address);
    unwrap!(display.init().await);
    unwrap!(display.flush(&Framebuffer::new()).await);
    info!(
        "Display initialized (SDA=GPIO{}, SCL=GPIO{}, addr={=u8:#x})",
        board::OLED_SDA_PIN,
        board::OLED_SCL_PIN,
        config.display.i2c_address
    );

    // Buttons: active low with pull-ups, edge tasks woken by IO_IRQ_BANK0
    let joystick_button = Input::new(p.PIN_22, Pull::Up);
    let button_a = Input::new(p.PIN_5, Pull::Up);
    unwrap!(spawner.spawn(tasks::button_task(joystick_button, board::JOYSTICK_BUTTON_PIN)));
    unwrap!(spawner.spawn(tasks::button_task(button_a, board::BUTTON_A_PIN)));

    info!("All tasks spawned, firmware running");

    tasks::control_loop(ControlLoop::new(joystick, leds, display)).await
}
