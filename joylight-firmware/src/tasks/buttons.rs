//! Button edge task
//!
//! One instance per button. Each falling edge is timestamped and handed to
//! the debounce latch; accepted presses flip the toggle state immediately.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use crate::shared::INPUTS;

/// Wait for falling edges on `input` (wired to GPIO `pin`)
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut input: Input<'static>, pin: u8) -> ! {
    info!("Button task started on GPIO{}", pin);

    loop {
        input.wait_for_falling_edge().await;

        // Milliseconds since boot; wraps after ~49 days, which the latch handles
        let now_ms = Instant::now().as_millis() as u32;

        match INPUTS.on_falling_edge(pin, now_ms) {
            Some(press) => {
                debug!("{} pressed at {} ms", press.line, press.at_ms);
            }
            None => {
                trace!("Edge on GPIO{} discarded at {} ms", pin, now_ms);
            }
        }
    }
}
