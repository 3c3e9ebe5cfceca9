//! In-memory kernel interface for tests.
//!
//! [`FakeInterface`] records every call made through it, in order, and
//! enforces the same ordering rules the kernel does: codes need their family
//! enabled first, nothing can be enabled after commit, events can only be
//! written to a committed device. Failures can be scripted per operation to
//! exercise error paths without a broken kernel.
//!
//! ```
//! use uinject::{codes, fake::FakeInterface, VirtualDevice};
//!
//! let kernel = FakeInterface::new();
//! let mut keyboard = VirtualDevice::builder([codes::KEY_A])
//!     .name("kbd")
//!     .build_with(&kernel)
//!     .unwrap();
//! keyboard.click(codes::KEY_A, true).unwrap();
//!
//! assert_eq!(
//!     kernel.writes(),
//!     vec![(codes::KEY_A, 1), (codes::KEY_A, 0), (codes::SYN_REPORT, 0)]
//! );
//! ```

use crate::channel::{DeviceSetup, InputId, KernelChannel, KernelInterface};
use crate::code::{AbsInfo, EventCode, EventFamily};
use std::collections::HashSet;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One call made against the fake kernel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// A channel was opened.
    Open,
    /// A family was enabled.
    EnableFamily(EventFamily),
    /// A code was enabled.
    EnableCode(EventCode),
    /// An absolute axis range was set.
    SetupAbsolute(EventCode, AbsInfo),
    /// A device was committed under this name.
    Commit(String),
    /// An event was written.
    Write(EventCode, i32),
    /// A committed device was destroyed.
    Destroy,
    /// A channel was closed.
    Close,
}

/// A device that was successfully committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeDevice {
    /// Kernel-visible name.
    pub name: String,
    /// Identification passed at commit.
    pub id: InputId,
    /// Enabled codes in registration order.
    pub capabilities: Vec<EventCode>,
    /// Absolute axis ranges in registration order.
    pub absolute: Vec<(EventCode, AbsInfo)>,
    /// Whether the device has since been destroyed.
    pub destroyed: bool,
}

#[derive(Debug, Default)]
struct Failures {
    open: bool,
    enable_code_at: Option<usize>,
    enable_family: Option<EventFamily>,
    commit: bool,
    write: bool,
    destroy: bool,
    close: bool,
}

#[derive(Debug, Default)]
struct Shared {
    calls: Vec<Call>,
    devices: Vec<FakeDevice>,
    opened: usize,
    closed: usize,
    fail: Failures,
}

/// Fake kernel interface. Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct FakeInterface {
    shared: Arc<Mutex<Shared>>,
}

impl FakeInterface {
    /// A fake that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        lock(&self.shared)
    }

    /// Make every `open` fail with `PermissionDenied`.
    pub fn fail_open(&self) -> &Self {
        self.lock().fail.open = true;
        self
    }

    /// Make the `index`-th (0-based) `enable_code` call of each channel fail.
    pub fn fail_enable_code(&self, index: usize) -> &Self {
        self.lock().fail.enable_code_at = Some(index);
        self
    }

    /// Make enabling `family` fail.
    pub fn fail_enable_family(&self, family: EventFamily) -> &Self {
        self.lock().fail.enable_family = Some(family);
        self
    }

    /// Make `commit` fail.
    pub fn fail_commit(&self) -> &Self {
        self.lock().fail.commit = true;
        self
    }

    /// Make `write_event` fail from now on.
    pub fn fail_writes(&self) -> &Self {
        self.lock().fail.write = true;
        self
    }

    /// Make `destroy` fail from now on.
    pub fn fail_destroy(&self) -> &Self {
        self.lock().fail.destroy = true;
        self
    }

    /// Make `close` fail from now on.
    pub fn fail_close(&self) -> &Self {
        self.lock().fail.close = true;
        self
    }

    /// Every call so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Every event written so far, in order, synchronization markers included.
    pub fn writes(&self) -> Vec<(EventCode, i32)> {
        self.lock()
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Write(code, value) => Some((*code, *value)),
                _ => None,
            })
            .collect()
    }

    /// Number of `destroy` calls so far.
    pub fn destroy_calls(&self) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| **call == Call::Destroy)
            .count()
    }

    /// Devices that were committed, destroyed ones included.
    pub fn devices(&self) -> Vec<FakeDevice> {
        self.lock().devices.clone()
    }

    /// Number of channels opened so far.
    pub fn opened(&self) -> usize {
        self.lock().opened
    }

    /// Number of channels closed so far.
    pub fn closed(&self) -> usize {
        self.lock().closed
    }

    /// Channels opened but not yet closed.
    pub fn open_channels(&self) -> usize {
        let shared = self.lock();
        shared.opened - shared.closed
    }

    /// Forget all recorded calls, keeping devices and scripted failures.
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }
}

impl KernelInterface for FakeInterface {
    type Channel = FakeChannel;

    fn open(&self) -> io::Result<FakeChannel> {
        let mut shared = self.lock();
        if shared.fail.open {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        shared.calls.push(Call::Open);
        shared.opened += 1;
        Ok(FakeChannel {
            shared: Arc::clone(&self.shared),
            families: HashSet::new(),
            codes: Vec::new(),
            absolute: Vec::new(),
            enable_calls: 0,
            device: None,
        })
    }
}

/// A channel handed out by [`FakeInterface`].
#[derive(Debug)]
pub struct FakeChannel {
    shared: Arc<Mutex<Shared>>,
    families: HashSet<EventFamily>,
    codes: Vec<EventCode>,
    absolute: Vec<(EventCode, AbsInfo)>,
    enable_calls: usize,
    /// Index into `Shared::devices` once committed.
    device: Option<usize>,
}

impl FakeChannel {
    fn reject_after_commit(&self) -> io::Result<()> {
        if self.device.is_some() {
            return Err(invalid("device already created"));
        }
        Ok(())
    }
}

impl KernelChannel for FakeChannel {
    fn enable_family(&mut self, family: EventFamily) -> io::Result<()> {
        self.reject_after_commit()?;
        let mut shared = lock(&self.shared);
        if shared.fail.enable_family == Some(family) {
            return Err(invalid("family rejected"));
        }
        shared.calls.push(Call::EnableFamily(family));
        self.families.insert(family);
        Ok(())
    }

    fn enable_code(&mut self, code: EventCode) -> io::Result<()> {
        self.reject_after_commit()?;
        let index = self.enable_calls;
        self.enable_calls += 1;

        let mut shared = lock(&self.shared);
        if shared.fail.enable_code_at == Some(index) {
            return Err(invalid("code rejected"));
        }
        if !self.families.contains(&code.family()) {
            return Err(invalid("family not enabled"));
        }
        shared.calls.push(Call::EnableCode(code));
        self.codes.push(code);
        Ok(())
    }

    fn setup_absolute(&mut self, axis: EventCode, info: AbsInfo) -> io::Result<()> {
        self.reject_after_commit()?;
        if !self.codes.contains(&axis) {
            return Err(invalid("axis not enabled"));
        }
        lock(&self.shared)
            .calls
            .push(Call::SetupAbsolute(axis, info));
        self.absolute.push((axis, info));
        Ok(())
    }

    fn commit(&mut self, setup: &DeviceSetup) -> io::Result<()> {
        self.reject_after_commit()?;
        let mut shared = lock(&self.shared);
        if shared.fail.commit {
            return Err(invalid("create rejected"));
        }
        if self.codes.is_empty() {
            return Err(invalid("no capabilities enabled"));
        }
        shared.calls.push(Call::Commit(setup.name.clone()));
        shared.devices.push(FakeDevice {
            name: setup.name.clone(),
            id: setup.id,
            capabilities: self.codes.clone(),
            absolute: self.absolute.clone(),
            destroyed: false,
        });
        self.device = Some(shared.devices.len() - 1);
        Ok(())
    }

    fn write_event(&mut self, code: EventCode, value: i32) -> io::Result<()> {
        let mut shared = lock(&self.shared);
        if shared.fail.write {
            return Err(io::Error::from(io::ErrorKind::BrokenPipe));
        }
        match self.device {
            Some(index) if !shared.devices[index].destroyed => {
                shared.calls.push(Call::Write(code, value));
                Ok(())
            }
            _ => Err(invalid("device not created")),
        }
    }

    fn destroy(&mut self) -> io::Result<()> {
        let mut shared = lock(&self.shared);
        let Some(index) = self.device else {
            return Err(invalid("device not created"));
        };
        shared.calls.push(Call::Destroy);
        if shared.fail.destroy {
            return Err(io::Error::from(io::ErrorKind::Other));
        }
        shared.devices[index].destroyed = true;
        Ok(())
    }

    fn close(self) -> io::Result<()> {
        let mut shared = lock(&self.shared);
        shared.calls.push(Call::Close);
        shared.closed += 1;
        if shared.fail.close {
            return Err(io::Error::from(io::ErrorKind::Interrupted));
        }
        Ok(())
    }
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

fn invalid(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;

    fn setup(name: &str) -> DeviceSetup {
        DeviceSetup {
            name: name.to_string(),
            id: InputId::default(),
        }
    }

    #[test]
    fn test_enforces_family_before_code() {
        let kernel = FakeInterface::new();
        let mut channel = kernel.open().unwrap();
        assert!(channel.enable_code(codes::KEY_A).is_err());
        channel.enable_family(EventFamily::Key).unwrap();
        channel.enable_code(codes::KEY_A).unwrap();
    }

    #[test]
    fn test_rejects_changes_after_commit() {
        let kernel = FakeInterface::new();
        let mut channel = kernel.open().unwrap();
        channel.enable_family(EventFamily::Key).unwrap();
        channel.enable_code(codes::KEY_A).unwrap();
        channel.commit(&setup("dev0")).unwrap();

        assert!(channel.enable_family(EventFamily::RelativeAxis).is_err());
        assert!(channel.enable_code(codes::KEY_B).is_err());
        assert_eq!(kernel.devices()[0].capabilities, vec![codes::KEY_A]);
    }

    #[test]
    fn test_write_requires_commit() {
        let kernel = FakeInterface::new();
        let mut channel = kernel.open().unwrap();
        assert!(channel.write_event(codes::KEY_A, 1).is_err());
        assert!(kernel.writes().is_empty());
    }

    #[test]
    fn test_commit_requires_capabilities() {
        let kernel = FakeInterface::new();
        let mut channel = kernel.open().unwrap();
        assert!(channel.commit(&setup("empty")).is_err());
        assert!(kernel.devices().is_empty());
    }

    #[test]
    fn test_tracks_open_and_close() {
        let kernel = FakeInterface::new();
        let channel = kernel.open().unwrap();
        assert_eq!(kernel.open_channels(), 1);
        channel.close().unwrap();
        assert_eq!(kernel.opened(), 1);
        assert_eq!(kernel.closed(), 1);
        assert_eq!(kernel.open_channels(), 0);
    }

    #[test]
    fn test_scripted_open_failure() {
        let kernel = FakeInterface::new();
        kernel.fail_open();
        let err = kernel.open().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(kernel.opened(), 0);
    }
}
