//! Render/control loop
//!
//! Every iteration: sample the joystick, read the toggles, compute LED
//! duties and the marker position, draw the scene and push it to the OLED,
//! then sleep for the configured period.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Timer};

use joylight_core::control::sample_axes;
use joylight_core::{AxisSamples, Controller, Toggles};
use joylight_display::{scene, Framebuffer, Ssd1306};

use crate::config::BOARD_CONFIG;
use crate::joystick::JoystickAdc;
use crate::leds::Leds;
use crate::shared::INPUTS;

/// OLED on I2C1
pub type Display = Ssd1306<I2c<'static, I2C1, Async>>;

/// Hardware and state owned by the control loop
pub struct ControlLoop {
    pub joystick: JoystickAdc,
    pub leds: Leds,
    pub display: Display,
    pub framebuffer: Framebuffer,
    pub controller: Controller,
}

impl ControlLoop {
    pub fn new(joystick: JoystickAdc, leds: Leds, display: Display) -> Self {
        Self {
            joystick,
            leds,
            display,
            framebuffer: Framebuffer::new(),
            controller: Controller::from_config(&BOARD_CONFIG),
        }
    }
}

/// Run the loop forever
pub async fn control_loop(mut ctx: ControlLoop) -> ! {
    let period = Duration::from_millis(BOARD_CONFIG.loop_period_ms as u64);
    let at_rest = AxisSamples::centered(&BOARD_CONFIG.joystick);
    let mut last_toggles = Toggles::INITIAL;

    info!("Control loop running, period {} ms", BOARD_CONFIG.loop_period_ms);

    loop {
        let samples = match sample_axes(&mut ctx.joystick) {
            Ok(samples) => samples,
            Err(e) => {
                warn!("Joystick read failed: {}", Debug2Format(&e));
                at_rest
            }
        };

        let toggles = INPUTS.toggles();
        if toggles != last_toggles {
            info!(
                "Toggles: accent={} border={} lighting={}",
                toggles.accent_on, toggles.border, toggles.lighting_enabled
            );
            last_toggles = toggles;
        }

        let frame = ctx.controller.step(samples, toggles);
        trace!("{} -> {}", samples, frame);

        if let Err(channel) = ctx.leds.apply(&frame.duties) {
            warn!("LED {} rejected duty", channel);
        }

        scene::render(&mut ctx.framebuffer, frame.marker, frame.border);
        if let Err(e) = ctx.display.flush(&ctx.framebuffer).await {
            warn!("Display flush failed: {}", e);
        }

        Timer::after(period).await;
    }
}
