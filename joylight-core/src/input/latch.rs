//! Debounced edge latch
//!
//! Mechanical buttons produce a burst of falling edges per press. The latch
//! forwards the first edge of a burst and swallows every further edge on the
//! same line until the debounce interval has elapsed since the last
//! accepted one.
//!
//! The latch is written only from the edge context, one slot per line, and
//! never blocks or allocates. Timestamps are milliseconds since boot and may
//! wrap; the comparison uses wrapping arithmetic.

use portable_atomic::{AtomicU32, Ordering};

use super::{InputLine, Press};

/// Per-line latch state
struct LineSlot {
    /// GPIO number the line is wired to
    pin: u8,
    /// Timestamp of the last accepted edge (ms since boot)
    last_event_ms: AtomicU32,
}

impl LineSlot {
    const fn new(pin: u8) -> Self {
        Self {
            pin,
            last_event_ms: AtomicU32::new(0),
        }
    }
}

/// Debounce latch for the two buttons
pub struct DebounceLatch {
    lines: [LineSlot; 2],
    interval_ms: u32,
}

impl DebounceLatch {
    /// Create a latch for the given pins
    ///
    /// Both lines start with a last-event time of zero, so edges within the
    /// first `interval_ms` after boot are treated as power-up noise.
    pub const fn new(joystick_button_pin: u8, button_a_pin: u8, interval_ms: u32) -> Self {
        Self {
            lines: [
                LineSlot::new(joystick_button_pin),
                LineSlot::new(button_a_pin),
            ],
            interval_ms,
        }
    }

    /// Look up the line wired to `pin`
    pub fn line_for_pin(&self, pin: u8) -> Option<InputLine> {
        InputLine::ALL
            .into_iter()
            .find(|line| self.lines[line.index()].pin == pin)
    }

    /// Timestamp of the last accepted edge on `line`
    pub fn last_event_ms(&self, line: InputLine) -> u32 {
        self.lines[line.index()].last_event_ms.load(Ordering::Acquire)
    }

    /// Feed a raw falling edge
    ///
    /// Accepts the edge when strictly more than the debounce interval has
    /// passed since the last accepted edge on the same line.
    pub fn on_falling_edge(&self, pin: u8, now_ms: u32) -> Option<Press> {
        let line = self.line_for_pin(pin)?;
        let slot = &self.lines[line.index()];

        let last = slot.last_event_ms.load(Ordering::Acquire);
        if now_ms.wrapping_sub(last) <= self.interval_ms {
            return None;
        }

        slot.last_event_ms.store(now_ms, Ordering::Release);
        Some(Press { line, at_ms: now_ms })
    }
}
