//! Linux platform implementation.
//!
//! Devices are created through the uinput subsystem (`/dev/uinput`).
//!
//! ## Permissions
//!
//! Opening `/dev/uinput` usually requires root. To allow a regular user, add
//! a udev rule such as:
//! ```text
//! KERNEL=="uinput", GROUP="input", MODE="0660", OPTIONS+="static_node=uinput"
//! ```
//! and add the user to the `input` group.

mod uinput;

pub use uinput::{DEFAULT_PATH, DEFAULT_SETTLE_DELAY, UinputChannel, UinputInterface};
