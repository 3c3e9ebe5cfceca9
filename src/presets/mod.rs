//! Ready-made devices with a fixed capability set.
//!
//! A preset is a [`VirtualDevice`](crate::VirtualDevice) created with a known
//! list of codes, plus helpers that turn domain actions ("move the pointer",
//! "tilt the left stick") into the right sequence of events. They deref to
//! the underlying device, so every generic operation stays available.

mod gamepad;
mod mouse;

pub use gamepad::{Gamepad, GamepadButton};
pub use mouse::{Mouse, MouseButton};
