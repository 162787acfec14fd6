//! Embassy async tasks
//!
//! The button tasks run on edge interrupts; the control loop runs in the
//! main task and reads their state through [`crate::shared`].

pub mod buttons;
pub mod control;

pub use buttons::button_task;
pub use control::{control_loop, ControlLoop};
