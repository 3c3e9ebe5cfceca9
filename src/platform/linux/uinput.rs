//! Kernel channel backed by `/dev/uinput`.
//!
//! Each operation is a single `ioctl(2)` or `write(2)` on the open node.
//! Request numbers come from nix's ioctl macros, which encode them for the
//! target architecture.

use crate::channel::{DeviceSetup, KernelChannel, KernelInterface};
use crate::code::{AbsInfo, EventCode, EventFamily};
use nix::sys::ioctl::ioctl_param_type;
use nix::unistd::close;
use nix::{ioctl_none, ioctl_write_int, ioctl_write_ptr};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::mem;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, IntoRawFd, RawFd};
use std::path::{Path, PathBuf};
use std::slice;
use std::time::Duration;

/// Where the uinput node normally lives.
pub const DEFAULT_PATH: &str = "/dev/uinput";

/// Pause after creating a device so udev and the display server can pick it up.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(1);

/// `UINPUT_MAX_NAME_SIZE`, terminating NUL included.
const MAX_NAME_SIZE: usize = 80;

ioctl_none!(ui_dev_create, b'U', 1);
ioctl_none!(ui_dev_destroy, b'U', 2);
ioctl_write_ptr!(ui_dev_setup, b'U', 3, RawSetup);
ioctl_write_ptr!(ui_abs_setup, b'U', 4, RawAbsSetup);
ioctl_write_int!(ui_set_evbit, b'U', 100);
ioctl_write_int!(ui_set_keybit, b'U', 101);
ioctl_write_int!(ui_set_relbit, b'U', 102);
ioctl_write_int!(ui_set_absbit, b'U', 103);
ioctl_write_int!(ui_set_mscbit, b'U', 104);
ioctl_write_int!(ui_set_ledbit, b'U', 105);
ioctl_write_int!(ui_set_sndbit, b'U', 106);
ioctl_write_int!(ui_set_ffbit, b'U', 107);
ioctl_write_int!(ui_set_swbit, b'U', 109);

/// Signature of the `UI_SET_*BIT` wrappers.
type SetBit = unsafe fn(RawFd, ioctl_param_type) -> nix::Result<libc::c_int>;

/// `struct input_id`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct RawInputId {
    bustype: u16,
    vendor: u16,
    product: u16,
    version: u16,
}

/// `struct uinput_setup`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawSetup {
    id: RawInputId,
    name: [libc::c_char; MAX_NAME_SIZE],
    ff_effects_max: u32,
}

/// `struct input_absinfo`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct RawAbsInfo {
    value: i32,
    minimum: i32,
    maximum: i32,
    fuzz: i32,
    flat: i32,
    resolution: i32,
}

/// `struct uinput_abs_setup`
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawAbsSetup {
    code: u16,
    absinfo: RawAbsInfo,
}

/// `struct input_event` as the kernel lays it out: the timestamp is two
/// `__kernel_ulong_t`s, also on 32-bit targets with a 64-bit `time_t`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
struct RawEvent {
    sec: libc::c_ulong,
    usec: libc::c_ulong,
    kind: u16,
    code: u16,
    value: i32,
}

/// Per-code ioctl for a family, if the family has individual codes.
fn code_request(family: EventFamily) -> Option<SetBit> {
    match family {
        EventFamily::Key => Some(ui_set_keybit),
        EventFamily::RelativeAxis => Some(ui_set_relbit),
        EventFamily::AbsoluteAxis => Some(ui_set_absbit),
        EventFamily::Misc => Some(ui_set_mscbit),
        EventFamily::Switch => Some(ui_set_swbit),
        EventFamily::Led => Some(ui_set_ledbit),
        EventFamily::Sound => Some(ui_set_sndbit),
        EventFamily::ForceFeedback => Some(ui_set_ffbit),
        // Enabled as a whole through the event bit.
        EventFamily::Sync | EventFamily::Repeat => None,
    }
}

fn encode_name(name: &str) -> io::Result<[libc::c_char; MAX_NAME_SIZE]> {
    let bytes = name.as_bytes();
    if bytes.len() >= MAX_NAME_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("device name longer than {} bytes", MAX_NAME_SIZE - 1),
        ));
    }
    if bytes.contains(&0) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "device name contains a NUL byte",
        ));
    }
    let mut raw = [0 as libc::c_char; MAX_NAME_SIZE];
    for (dst, &src) in raw.iter_mut().zip(bytes) {
        *dst = src as libc::c_char;
    }
    Ok(raw)
}

/// Opens channels on the uinput node.
#[derive(Debug, Clone)]
pub struct UinputInterface {
    path: PathBuf,
    settle_delay: Duration,
}

impl UinputInterface {
    /// Use [`DEFAULT_PATH`] and [`DEFAULT_SETTLE_DELAY`].
    pub fn new() -> Self {
        Self::with_path(DEFAULT_PATH)
    }

    /// Use a different uinput node, e.g. `/dev/input/uinput` on older systems.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }

    /// Change how long device creation waits before returning.
    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// The node channels are opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for UinputInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl KernelInterface for UinputInterface {
    type Channel = UinputChannel;

    fn open(&self) -> io::Result<UinputChannel> {
        let file = OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(&self.path)?;
        Ok(UinputChannel { file })
    }

    fn settle_delay(&self) -> Duration {
        self.settle_delay
    }
}

/// An open `/dev/uinput` file descriptor.
#[derive(Debug)]
pub struct UinputChannel {
    file: File,
}

impl UinputChannel {
    /// Set one capability bit with a `UI_SET_*BIT` request.
    fn set_bit(&self, request: SetBit, bit: u16) -> io::Result<()> {
        unsafe { request(self.file.as_raw_fd(), bit as ioctl_param_type) }?;
        Ok(())
    }
}

impl KernelChannel for UinputChannel {
    fn enable_family(&mut self, family: EventFamily) -> io::Result<()> {
        self.set_bit(ui_set_evbit, family.raw())
    }

    fn enable_code(&mut self, code: EventCode) -> io::Result<()> {
        match code_request(code.family()) {
            Some(request) => self.set_bit(request, code.code()),
            None => Ok(()),
        }
    }

    fn setup_absolute(&mut self, axis: EventCode, info: AbsInfo) -> io::Result<()> {
        let setup = RawAbsSetup {
            code: axis.code(),
            absinfo: RawAbsInfo {
                value: info.value,
                minimum: info.minimum,
                maximum: info.maximum,
                fuzz: info.fuzz,
                flat: info.flat,
                resolution: info.resolution,
            },
        };
        unsafe { ui_abs_setup(self.file.as_raw_fd(), &setup) }?;
        Ok(())
    }

    fn commit(&mut self, setup: &DeviceSetup) -> io::Result<()> {
        let raw = RawSetup {
            id: RawInputId {
                bustype: setup.id.bustype,
                vendor: setup.id.vendor,
                product: setup.id.product,
                version: setup.id.version,
            },
            name: encode_name(&setup.name)?,
            ff_effects_max: 0,
        };
        let fd = self.file.as_raw_fd();
        unsafe { ui_dev_setup(fd, &raw) }?;
        unsafe { ui_dev_create(fd) }?;
        Ok(())
    }

    fn write_event(&mut self, code: EventCode, value: i32) -> io::Result<()> {
        // The kernel stamps the event itself when the time is zero.
        let event = RawEvent {
            sec: 0,
            usec: 0,
            kind: code.family().raw(),
            code: code.code(),
            value,
        };
        let bytes = unsafe {
            slice::from_raw_parts(
                (&event as *const RawEvent).cast::<u8>(),
                mem::size_of::<RawEvent>(),
            )
        };
        self.file.write_all(bytes)
    }

    fn destroy(&mut self) -> io::Result<()> {
        unsafe { ui_dev_destroy(self.file.as_raw_fd()) }?;
        Ok(())
    }

    fn close(self) -> io::Result<()> {
        close(self.file.into_raw_fd())?;
        Ok(())
    }
}
