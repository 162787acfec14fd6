//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations. LED channels use
//! `embedded_hal::pwm::SetDutyCycle` directly.

pub mod analog;

pub use analog::AnalogInput;
