//! The boundary between a [`VirtualDevice`](crate::VirtualDevice) and the kernel.
//!
//! A device only ever talks to the kernel through these two traits. The
//! production implementation lives in [`UinputInterface`](crate::UinputInterface);
//! [`fake`](crate::fake) provides an in-memory one for tests.
//!
//! All calls are blocking and report failures as [`std::io::Error`]. The
//! device layer is responsible for turning those into [`Error`](crate::Error)
//! values carrying the device name.

use crate::code::{AbsInfo, EventCode, EventFamily};
use std::io;
use std::time::Duration;

/// `BUS_USB` from `linux/input.h`.
pub const BUS_USB: u16 = 0x03;
/// `BUS_VIRTUAL` from `linux/input.h`.
pub const BUS_VIRTUAL: u16 = 0x06;

/// Bus and vendor identification reported by a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId {
    /// Bus type (`BUS_USB`, `BUS_VIRTUAL`, ...).
    pub bustype: u16,
    /// Vendor id.
    pub vendor: u16,
    /// Product id.
    pub product: u16,
    /// Version number.
    pub version: u16,
}

impl Default for InputId {
    fn default() -> Self {
        Self {
            bustype: BUS_USB,
            vendor: 0,
            product: 0,
            version: 0,
        }
    }
}

/// What the kernel needs to know when a device is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSetup {
    /// Kernel-visible device name.
    pub name: String,
    /// Bus and vendor identification.
    pub id: InputId,
}

/// Something that can open fresh kernel channels.
pub trait KernelInterface {
    /// The channel type this interface hands out.
    type Channel: KernelChannel;

    /// Open a new, unconfigured channel.
    fn open(&self) -> io::Result<Self::Channel>;

    /// How long to wait after a commit before the device is handed out.
    ///
    /// Userspace consumers (udev, libinput, the display server) pick up a new
    /// device asynchronously and miss events written before they attach.
    fn settle_delay(&self) -> Duration {
        Duration::ZERO
    }
}

/// One open connection to the virtual input subsystem.
///
/// Capabilities must be enabled before [`commit`](Self::commit); the kernel
/// refuses new capabilities afterwards.
pub trait KernelChannel {
    /// Allow the device to report events of `family`.
    fn enable_family(&mut self, family: EventFamily) -> io::Result<()>;

    /// Allow the device to report `code`. Its family must already be enabled.
    fn enable_code(&mut self, code: EventCode) -> io::Result<()>;

    /// Set the range of an enabled absolute axis.
    fn setup_absolute(&mut self, axis: EventCode, info: AbsInfo) -> io::Result<()>;

    /// Create the device, making it visible to the rest of the system.
    fn commit(&mut self, setup: &DeviceSetup) -> io::Result<()>;

    /// Write one event record.
    fn write_event(&mut self, code: EventCode, value: i32) -> io::Result<()>;

    /// Remove a committed device from the system.
    fn destroy(&mut self) -> io::Result<()>;

    /// Release the channel itself.
    fn close(self) -> io::Result<()>;
}
