//! RGB LED bank
//!
//! Three independent PWM channels, one per LED. Duties are clamped to the
//! configured PWM top before they reach the hardware, and a failure on one
//! channel does not stop the other two from being written.

use embedded_hal::pwm::SetDutyCycle;

use crate::control::LedDuties;

/// LED channel that failed to accept a duty value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    Red,
    Green,
    Blue,
}

/// Red, green and blue PWM outputs
pub struct LedBank<R, G, B> {
    red: R,
    green: G,
    blue: B,
    pwm_max: u16,
}

impl<R, G, B> LedBank<R, G, B>
where
    R: SetDutyCycle,
    G: SetDutyCycle,
    B: SetDutyCycle,
{
    /// Create a bank; `pwm_max` is the duty for full brightness
    pub fn new(red: R, green: G, blue: B, pwm_max: u16) -> Self {
        Self {
            red,
            green,
            blue,
            pwm_max,
        }
    }

    /// Write all three duty values
    ///
    /// Returns the first channel that rejected its value.
    pub fn apply(&mut self, duties: &LedDuties) -> Result<(), LedError> {
        let max = self.pwm_max;

        let red = self
            .red
            .set_duty_cycle(duties.red.min(max))
            .map_err(|_| LedError::Red);
        let green = self
            .green
            .set_duty_cycle(duties.green.min(max))
            .map_err(|_| LedError::Green);
        let blue = self
            .blue
            .set_duty_cycle(duties.blue.min(max))
            .map_err(|_| LedError::Blue);

        red.and(green).and(blue)
    }

    /// Turn all LEDs off
    pub fn off(&mut self) -> Result<(), LedError> {
        self.apply(&LedDuties::OFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::pwm::{ErrorKind, ErrorType};

    struct FakeChannel {
        duty: u16,
        top: u16,
    }

    impl FakeChannel {
        fn new(top: u16) -> Self {
            Self { duty: 0xFFFF, top }
        }
    }

    impl ErrorType for FakeChannel {
        type Error = ErrorKind;
    }

    impl SetDutyCycle for FakeChannel {
        fn max_duty_cycle(&self) -> u16 {
            self.top
        }

        fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
            if duty > self.top {
                return Err(ErrorKind::Other);
            }
            self.duty = duty;
            Ok(())
        }
    }

    fn bank(top: u16) -> LedBank<FakeChannel, FakeChannel, FakeChannel> {
        LedBank::new(
            FakeChannel::new(top),
            FakeChannel::new(top),
            FakeChannel::new(top),
            1250,
        )
    }

    #[test]
    fn test_apply_writes_each_channel() {
        let mut leds = bank(1250);
        let duties = LedDuties {
            red: 10,
            green: 1250,
            blue: 625,
        };

        assert_eq!(leds.apply(&duties), Ok(()));
        assert_eq!(leds.red.duty, 10);
        assert_eq!(leds.green.duty, 1250);
        assert_eq!(leds.blue.duty, 625);
    }

    #[test]
    fn test_apply_clamps_to_pwm_max() {
        let mut leds = bank(1250);
        let duties = LedDuties {
            red: 5000,
            green: 0,
            blue: 1251,
        };

        assert_eq!(leds.apply(&duties), Ok(()));
        assert_eq!(leds.red.duty, 1250);
        assert_eq!(leds.blue.duty, 1250);
    }

    #[test]
    fn test_failed_channel_does_not_block_others() {
        let mut leds = LedBank::new(
            FakeChannel::new(100),
            FakeChannel::new(1250),
            FakeChannel::new(1250),
            1250,
        );
        let duties = LedDuties {
            red: 800,
            green: 300,
            blue: 400,
        };

        assert_eq!(leds.apply(&duties), Err(LedError::Red));
        assert_eq!(leds.green.duty, 300);
        assert_eq!(leds.blue.duty, 400);
    }

    #[test]
    fn test_off() {
        let mut leds = bank(1250);
        leds.apply(&LedDuties {
            red: 1,
            green: 2,
            blue: 3,
        })
        .unwrap();

        leds.off().unwrap();
        assert_eq!((leds.red.duty, leds.green.duty, leds.blue.duty), (0, 0, 0));
    }
}
