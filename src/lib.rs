//! # uinject
//!
//! Virtual keyboards, mice and gamepads on Linux, driven through the kernel's
//! uinput subsystem. Events injected this way are indistinguishable from real
//! hardware to the rest of the system, which makes the crate useful for
//! automation scripts and end-to-end test harnesses.
//!
//! ## Quick Start
//!
//! ```no_run
//! use uinject::{codes::*, Mouse, VirtualDevice};
//!
//! let mut keyboard = VirtualDevice::new([KEY_LEFTSHIFT, KEY_H, KEY_I], None)?;
//! keyboard.click_combination(&[KEY_LEFTSHIFT, KEY_H])?;
//! keyboard.click(KEY_I, true)?;
//!
//! let mut mouse = Mouse::new(None)?;
//! mouse.move_relative(5, 5, true)?;
//! # Ok::<(), uinject::Error>(())
//! ```
//!
//! ## Model
//!
//! - An [`EventCode`] is a (family, code) pair such as "the H key" or
//!   "relative X axis". [`codes`] has the common ones.
//! - A [`VirtualDevice`] is created with a fixed set of codes. Creation is
//!   all-or-nothing: on any failure no device is left behind.
//! - Events are buffered by the kernel until a synchronization marker is
//!   written. Every emission call takes a `flush` flag; pass `false` to batch
//!   several changes into one update.
//! - Dropping a device destroys it. [`VirtualDevice::destroy`] does it
//!   explicitly and may be called any number of times.
//!
//! ## Testing
//!
//! All kernel access goes through the [`KernelInterface`] and
//! [`KernelChannel`] traits. [`fake::FakeInterface`] implements them in
//! memory and records every call, so code built on this crate can be tested
//! without access to `/dev/uinput`.
//!
//! ## Permissions
//!
//! Writing to `/dev/uinput` normally needs root or a udev rule granting the
//! `input` group access.

pub mod channel;
pub mod code;
pub mod codes;
pub mod counter;
pub mod device;
pub mod error;
pub mod fake;
pub mod presets;

mod platform;

// Re-exports
pub use channel::{BUS_USB, BUS_VIRTUAL, DeviceSetup, InputId, KernelChannel, KernelInterface};
pub use code::{AbsInfo, EventCode, EventFamily};
pub use counter::DeviceCounter;
pub use device::{DeviceBuilder, DeviceState, VirtualDevice};
pub use error::{Error, Result};
pub use platform::{DEFAULT_PATH, DEFAULT_SETTLE_DELAY, UinputChannel, UinputInterface};
pub use presets::{Gamepad, GamepadButton, Mouse, MouseButton};
