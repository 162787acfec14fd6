//! RP2040 joystick ADC adapter

use embassy_rp::adc::{self, Adc, Blocking, Channel};

use joylight_core::traits::AnalogInput;

/// Both joystick axes on the RP2040 ADC
///
/// Channel numbers are ADC inputs: 0 is GPIO26 (vertical), 1 is GPIO27
/// (horizontal).
pub struct JoystickAdc {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; 2],
    selected: usize,
}

impl JoystickAdc {
    pub fn new(
        adc: Adc<'static, Blocking>,
        y_axis: Channel<'static>,
        x_axis: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            channels: [y_axis, x_axis],
            selected: 0,
        }
    }
}

impl AnalogInput for JoystickAdc {
    type Error = adc::Error;

    fn select_channel(&mut self, channel: u8) {
        self.selected = (channel as usize).min(self.channels.len() - 1);
    }

    fn read(&mut self) -> Result<u16, Self::Error> {
        self.adc.blocking_read(&mut self.channels[self.selected])
    }
}
