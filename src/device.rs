//! Virtual input devices: creation, event emission and teardown.
//!
//! A [`VirtualDevice`] owns exactly one kernel channel. It is created in one
//! transaction (open, enable every capability, commit) and either comes back
//! fully registered or not at all: if any step fails, the half-configured
//! channel is closed before the error is returned.
//!
//! Events written with `flush = false` are buffered by the kernel until the
//! next synchronization marker, so related changes (both axes of a pointer
//! move, every key of a chord) reach consumers as one update.
//!
//! The device is destroyed when dropped. [`VirtualDevice::destroy`] does the
//! same explicitly and reports failures; calling it again is a no-op.

use crate::channel::{DeviceSetup, InputId, KernelChannel, KernelInterface};
use crate::code::{AbsInfo, EventCode, EventFamily};
use crate::codes::SYN_REPORT;
use crate::counter::{self, DeviceCounter};
use crate::error::{Error, Result};
use crate::platform::{UinputChannel, UinputInterface};
use std::fmt;
use std::io;
use std::thread;

/// Base name used when none is given.
pub const DEFAULT_NAME: &str = "uinject-virtual-dev";

/// Lifecycle state of a [`VirtualDevice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceState {
    /// Committed and accepting events.
    Active,
    /// Torn down; every further operation fails with [`Error::NotActive`].
    Destroyed,
}

/// Configuration for a new [`VirtualDevice`].
///
/// ```no_run
/// use uinject::{codes, DeviceBuilder};
///
/// let mut keyboard = DeviceBuilder::new([codes::KEY_LEFTSHIFT, codes::KEY_H])
///     .name("my-keyboard")
///     .build()?;
/// keyboard.click_combination(&[codes::KEY_LEFTSHIFT, codes::KEY_H])?;
/// # Ok::<(), uinject::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DeviceBuilder {
    capabilities: Vec<EventCode>,
    name: Option<String>,
    default_name: &'static str,
    id: InputId,
    absolute: Vec<(EventCode, AbsInfo)>,
    counter: &'static DeviceCounter,
}

impl DeviceBuilder {
    /// Start configuring a device reporting `capabilities`.
    ///
    /// Duplicates are registered once; order of first appearance is kept.
    pub fn new<I>(capabilities: I) -> Self
    where
        I: IntoIterator<Item = EventCode>,
    {
        let mut unique = Vec::new();
        for code in capabilities {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self {
            capabilities: unique,
            name: None,
            default_name: DEFAULT_NAME,
            id: InputId::default(),
            absolute: Vec::new(),
            counter: counter::global(),
        }
    }

    /// Base name; the device counter is appended to it.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub(crate) fn default_name(mut self, name: &'static str) -> Self {
        self.default_name = name;
        self
    }

    pub(crate) fn maybe_name(self, name: Option<&str>) -> Self {
        match name {
            Some(name) => self.name(name),
            None => self,
        }
    }

    /// Bus, vendor and product identification.
    pub fn input_id(mut self, id: InputId) -> Self {
        self.id = id;
        self
    }

    /// Range of a requested absolute axis.
    pub fn absolute_axis(mut self, axis: EventCode, info: AbsInfo) -> Self {
        self.absolute.push((axis, info));
        self
    }

    /// Draw the name suffix from `counter` instead of the process-wide one.
    pub fn counter(mut self, counter: &'static DeviceCounter) -> Self {
        self.counter = counter;
        self
    }

    /// Create the device on `/dev/uinput`.
    pub fn build(self) -> Result<VirtualDevice> {
        self.build_with(&UinputInterface::new())
    }

    /// Create the device through `kernel`.
    pub fn build_with<K: KernelInterface>(self, kernel: &K) -> Result<VirtualDevice<K::Channel>> {
        let reservation = self.counter.reserve();
        let base = self.name.as_deref().unwrap_or(self.default_name);
        let name = reservation.name(base);

        if self.capabilities.is_empty() {
            return Err(Error::NoCapabilities { device: name });
        }
        for &(axis, _) in &self.absolute {
            if axis.family() != EventFamily::AbsoluteAxis || !self.capabilities.contains(&axis) {
                return Err(Error::CapabilityRejected {
                    device: name,
                    code: axis,
                    source: io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "range given for an axis that was not requested",
                    ),
                });
            }
        }

        let mut channel = kernel.open().map_err(|source| Error::PermissionDenied {
            device: name.clone(),
            source,
        })?;
        log::debug!("opened kernel channel for {}", name);

        let setup = DeviceSetup {
            name: name.clone(),
            id: self.id,
        };
        if let Err(err) = register(&mut channel, &self.capabilities, &self.absolute, &setup) {
            if let Err(close_err) = channel.close() {
                log::warn!("failed to close channel of {} after rollback: {}", name, close_err);
            }
            log::debug!("rolled back creation of {}", name);
            return Err(err);
        }
        reservation.commit();
        log::debug!(
            "created device {} with {} capabilities",
            name,
            self.capabilities.len()
        );

        let delay = kernel.settle_delay();
        if !delay.is_zero() {
            thread::sleep(delay);
        }

        Ok(VirtualDevice {
            name,
            channel: Some(channel),
            capabilities: self.capabilities,
        })
    }
}

/// Enable every family once, then every code, then commit.
fn register<C: KernelChannel>(
    channel: &mut C,
    capabilities: &[EventCode],
    absolute: &[(EventCode, AbsInfo)],
    setup: &DeviceSetup,
) -> Result<()> {
    let rejected = |code: EventCode| {
        let device = setup.name.clone();
        move |source| Error::CapabilityRejected {
            device,
            code,
            source,
        }
    };

    let mut families: Vec<EventFamily> = Vec::new();
    for code in capabilities {
        if !families.contains(&code.family()) {
            families.push(code.family());
            channel.enable_family(code.family()).map_err(rejected(*code))?;
        }
    }
    for &code in capabilities {
        channel.enable_code(code).map_err(rejected(code))?;
    }
    for &(axis, info) in absolute {
        channel.setup_absolute(axis, info).map_err(rejected(axis))?;
    }

    channel.commit(setup).map_err(|source| Error::CommitFailed {
        device: setup.name.clone(),
        source,
    })
}

/// A virtual keyboard, mouse, gamepad or any other input device.
///
/// What kind of device it is depends only on the capabilities it was
/// created with. Mixing unrelated kinds (relative and absolute pointer axes,
/// for instance) in one device tends to confuse consumers; create one device
/// per kind instead.
///
/// Not meant to be driven from several threads at once: emission calls take
/// `&mut self`. Distinct devices are independent.
pub struct VirtualDevice<C: KernelChannel = UinputChannel> {
    name: String,
    channel: Option<C>,
    capabilities: Vec<EventCode>,
}

impl VirtualDevice {
    /// Create a device on `/dev/uinput`.
    ///
    /// The kernel-visible name is `name` (or [`DEFAULT_NAME`]) followed by the
    /// process-wide device counter.
    pub fn new<I>(capabilities: I, name: Option<&str>) -> Result<Self>
    where
        I: IntoIterator<Item = EventCode>,
    {
        Self::builder(capabilities).maybe_name(name).build()
    }

    /// Start configuring a device.
    pub fn builder<I>(capabilities: I) -> DeviceBuilder
    where
        I: IntoIterator<Item = EventCode>,
    {
        DeviceBuilder::new(capabilities)
    }
}

impl<C: KernelChannel> VirtualDevice<C> {
    /// The kernel-visible name, counter suffix included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered capabilities in registration order.
    pub fn capabilities(&self) -> &[EventCode] {
        &self.capabilities
    }

    /// Whether `code` was registered.
    pub fn has_capability(&self, code: EventCode) -> bool {
        self.capabilities.contains(&code)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DeviceState {
        if self.channel.is_some() {
            DeviceState::Active
        } else {
            DeviceState::Destroyed
        }
    }

    /// Whether the device still accepts events.
    pub fn is_active(&self) -> bool {
        self.channel.is_some()
    }

    fn write(&mut self, code: EventCode, value: i32) -> Result<()> {
        let Self { name, channel, .. } = self;
        let channel = channel.as_mut().ok_or_else(|| Error::NotActive {
            device: name.clone(),
        })?;
        log::trace!("{}: {} = {}", name, code, value);
        channel
            .write_event(code, value)
            .map_err(|source| Error::EmitFailed {
                device: name.clone(),
                code,
                source,
            })
    }

    /// Write one event, followed by a synchronization marker if `flush`.
    ///
    /// `value` is passed to the kernel as is: 1/0 for key down/up, a signed
    /// delta for relative axes, a position for absolute axes.
    pub fn emit(&mut self, event: EventCode, value: i32, flush: bool) -> Result<()> {
        self.write(event, value)?;
        if flush {
            self.flush()?;
        }
        Ok(())
    }

    /// Write several events and one synchronization marker after them.
    pub fn emit_batch(&mut self, events: &[(EventCode, i32)]) -> Result<()> {
        for &(event, value) in events {
            self.write(event, value)?;
        }
        self.flush()
    }

    /// Put a key or button down.
    pub fn press(&mut self, key: EventCode, flush: bool) -> Result<()> {
        self.emit(key, 1, flush)
    }

    /// Let a key or button up.
    pub fn release(&mut self, key: EventCode, flush: bool) -> Result<()> {
        self.emit(key, 0, flush)
    }

    /// Press and release `key`.
    ///
    /// Both transitions are written before any synchronization marker, so
    /// the key is never observed as held. Use [`press`](Self::press), a delay
    /// and [`release`](Self::release) when the hold time matters.
    pub fn click(&mut self, key: EventCode, flush: bool) -> Result<()> {
        self.press(key, false)?;
        self.release(key, flush)
    }

    /// Press every key in order, synchronize, release every key in the same
    /// order, synchronize again.
    ///
    /// Consumers see all keys go down together and come up together, e.g.
    /// `[KEY_LEFTSHIFT, KEY_H]` types a capital H.
    pub fn click_combination(&mut self, keys: &[EventCode]) -> Result<()> {
        for &key in keys {
            self.press(key, false)?;
        }
        self.flush()?;
        for &key in keys {
            self.release(key, false)?;
        }
        self.flush()
    }

    /// Write a synchronization marker, making buffered events visible.
    pub fn flush(&mut self) -> Result<()> {
        self.write(SYN_REPORT, 0)
    }

    /// Remove the device from the system and release its channel.
    ///
    /// Does nothing if the device is already destroyed. If the kernel reports
    /// a failure the error is returned, but the device is still considered
    /// destroyed and the channel is released.
    pub fn destroy(&mut self) -> Result<()> {
        let Some(mut channel) = self.channel.take() else {
            return Ok(());
        };
        let destroyed = channel.destroy();
        let closed = channel.close();
        log::debug!("destroyed device {}", self.name);

        match (destroyed, closed) {
            (Ok(()), Ok(())) => Ok(()),
            (Err(source), closed) => {
                if let Err(close_err) = closed {
                    log::warn!("failed to close channel of {}: {}", self.name, close_err);
                }
                Err(Error::DestroyFailed {
                    device: self.name.clone(),
                    source,
                })
            }
            (Ok(()), Err(source)) => Err(Error::DestroyFailed {
                device: self.name.clone(),
                source,
            }),
        }
    }
}

impl<C: KernelChannel> Drop for VirtualDevice<C> {
    fn drop(&mut self) {
        if let Err(e) = self.destroy() {
            log::warn!("{}", e);
        }
    }
}

impl<C: KernelChannel> fmt::Debug for VirtualDevice<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualDevice")
            .field("name", &self.name)
            .field("state", &self.state())
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::*;
    use crate::fake::{Call, FakeChannel, FakeInterface};

    fn fresh_counter() -> &'static DeviceCounter {
        Box::leak(Box::new(DeviceCounter::new()))
    }

    fn create(kernel: &FakeInterface, caps: &[EventCode]) -> VirtualDevice<FakeChannel> {
        DeviceBuilder::new(caps.iter().copied())
            .counter(fresh_counter())
            .build_with(kernel)
            .unwrap()
    }

    #[test]
    fn test_registers_families_before_codes() {
        let kernel = FakeInterface::new();
        let device = create(&kernel, &[KEY_A, REL_X, KEY_B, REL_Y]);

        assert_eq!(
            kernel.calls(),
            vec![
                Call::Open,
                Call::EnableFamily(EventFamily::Key),
                Call::EnableFamily(EventFamily::RelativeAxis),
                Call::EnableCode(KEY_A),
                Call::EnableCode(REL_X),
                Call::EnableCode(KEY_B),
                Call::EnableCode(REL_Y),
                Call::Commit("uinject-virtual-dev0".into()),
            ]
        );
        assert_eq!(device.state(), DeviceState::Active);
    }

    #[test]
    fn test_committed_capabilities_match_request() {
        let kernel = FakeInterface::new();
        let device = create(&kernel, &[KEY_LEFTSHIFT, KEY_H, KEY_H]);

        assert_eq!(device.capabilities(), &[KEY_LEFTSHIFT, KEY_H]);
        let devices = kernel.devices();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].capabilities, device.capabilities());
        assert!(device.has_capability(KEY_H));
        assert!(!device.has_capability(KEY_A));
    }

    #[test]
    fn test_failed_enable_rolls_back() {
        let kernel = FakeInterface::new();
        kernel.fail_enable_code(1);
        let counter = fresh_counter();

        let err = DeviceBuilder::new([KEY_A, KEY_B, KEY_C])
            .name("kbd")
            .counter(counter)
            .build_with(&kernel)
            .unwrap_err();

        match err {
            Error::CapabilityRejected { device, code, .. } => {
                assert_eq!(device, "kbd0");
                assert_eq!(code, KEY_B);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(kernel.devices().is_empty());
        assert_eq!(kernel.opened(), 1);
        assert_eq!(kernel.open_channels(), 0);
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn test_failed_family_rolls_back() {
        let kernel = FakeInterface::new();
        kernel.fail_enable_family(EventFamily::RelativeAxis);

        let err = DeviceBuilder::new([KEY_A, REL_X])
            .counter(fresh_counter())
            .build_with(&kernel)
            .unwrap_err();

        assert!(matches!(err, Error::CapabilityRejected { code, .. } if code == REL_X));
        assert_eq!(kernel.open_channels(), 0);
    }

    #[test]
    fn test_failed_commit_rolls_back() {
        let kernel = FakeInterface::new();
        kernel.fail_commit();

        let err = DeviceBuilder::new([KEY_A])
            .name("kbd")
            .counter(fresh_counter())
            .build_with(&kernel)
            .unwrap_err();

        assert!(matches!(err, Error::CommitFailed { .. }));
        assert_eq!(err.device(), "kbd0");
        assert!(kernel.devices().is_empty());
        assert_eq!(kernel.calls().last(), Some(&Call::Close));
        assert_eq!(kernel.open_channels(), 0);
    }

    #[test]
    fn test_open_failure_is_permission_error() {
        let kernel = FakeInterface::new();
        kernel.fail_open();

        let err = DeviceBuilder::new([KEY_A])
            .counter(fresh_counter())
            .build_with(&kernel)
            .unwrap_err();

        assert!(matches!(err, Error::PermissionDenied { .. }));
        assert!(err.to_string().contains("uinject-virtual-dev0"));
    }

    #[test]
    fn test_empty_capabilities_never_open() {
        let kernel = FakeInterface::new();
        let err = DeviceBuilder::new(Vec::new())
            .counter(fresh_counter())
            .build_with(&kernel)
            .unwrap_err();

        assert!(matches!(err, Error::NoCapabilities { .. }));
        assert_eq!(kernel.opened(), 0);
    }

    #[test]
    fn test_range_for_unrequested_axis_is_rejected() {
        let kernel = FakeInterface::new();
        let err = DeviceBuilder::new([ABS_X])
            .absolute_axis(ABS_Y, AbsInfo::range(0, 10))
            .counter(fresh_counter())
            .build_with(&kernel)
            .unwrap_err();

        assert!(matches!(err, Error::CapabilityRejected { code, .. } if code == ABS_Y));
        assert_eq!(kernel.opened(), 0);
    }

    #[test]
    fn test_absolute_ranges_are_registered() {
        let kernel = FakeInterface::new();
        let _device = DeviceBuilder::new([ABS_X, ABS_Y])
            .absolute_axis(ABS_X, AbsInfo::range(-100, 100))
            .counter(fresh_counter())
            .build_with(&kernel)
            .unwrap();

        assert_eq!(
            kernel.devices()[0].absolute,
            vec![(ABS_X, AbsInfo::range(-100, 100))]
        );
    }

    #[test]
    fn test_same_name_gets_distinct_suffixes() {
        let kernel = FakeInterface::new();
        let counter = fresh_counter();
        let build = || {
            DeviceBuilder::new([KEY_A])
                .name("kbd")
                .counter(counter)
                .build_with(&kernel)
                .unwrap()
        };

        let first = build();
        let second = build();
        assert_eq!(first.name(), "kbd0");
        assert_eq!(second.name(), "kbd1");
    }

    #[test]
    fn test_failed_attempt_does_not_consume_suffix() {
        let kernel = FakeInterface::new();
        let counter = fresh_counter();

        kernel.fail_commit();
        assert!(
            DeviceBuilder::new([KEY_A])
                .counter(counter)
                .build_with(&kernel)
                .is_err()
        );

        let other = FakeInterface::new();
        let device = DeviceBuilder::new([KEY_A])
            .counter(counter)
            .build_with(&other)
            .unwrap();
        assert_eq!(device.name(), "uinject-virtual-dev0");
    }

    #[test]
    fn test_emit_with_and_without_flush() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[REL_X]);

        device.emit(REL_X, -3, false).unwrap();
        assert_eq!(kernel.writes(), vec![(REL_X, -3)]);

        device.emit(REL_X, 7, true).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![(REL_X, -3), (REL_X, 7), (SYN_REPORT, 0)]
        );
    }

    #[test]
    fn test_press_and_release_values() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_A]);

        device.press(KEY_A, true).unwrap();
        device.release(KEY_A, false).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![(KEY_A, 1), (SYN_REPORT, 0), (KEY_A, 0)]
        );
    }

    #[test]
    fn test_click_writes_down_before_up() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_E]);

        device.click(KEY_E, true).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![(KEY_E, 1), (KEY_E, 0), (SYN_REPORT, 0)]
        );

        kernel.clear_calls();
        device.click(KEY_E, false).unwrap();
        assert_eq!(kernel.writes(), vec![(KEY_E, 1), (KEY_E, 0)]);
    }

    #[test]
    fn test_click_combination_order() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_LEFTSHIFT, KEY_H]);

        device.click_combination(&[KEY_LEFTSHIFT, KEY_H]).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![
                (KEY_LEFTSHIFT, 1),
                (KEY_H, 1),
                (SYN_REPORT, 0),
                (KEY_LEFTSHIFT, 0),
                (KEY_H, 0),
                (SYN_REPORT, 0),
            ]
        );
    }

    #[test]
    fn test_emit_batch_syncs_once() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[ABS_X, ABS_Y]);

        device.emit_batch(&[(ABS_X, 10), (ABS_Y, 20)]).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![(ABS_X, 10), (ABS_Y, 20), (SYN_REPORT, 0)]
        );
    }

    #[test]
    fn test_flush_only_writes_marker() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_A]);

        device.flush().unwrap();
        device.flush().unwrap();
        assert_eq!(kernel.writes(), vec![(SYN_REPORT, 0), (SYN_REPORT, 0)]);
    }

    #[test]
    fn test_emit_failure_propagates() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_A]);
        kernel.fail_writes();

        let err = device.press(KEY_A, true).unwrap_err();
        assert!(matches!(err, Error::EmitFailed { code, .. } if code == KEY_A));
        assert!(device.is_active());
    }

    #[test]
    fn test_destroy_twice_tears_down_once() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_A]);

        device.destroy().unwrap();
        device.destroy().unwrap();
        drop(device);

        assert_eq!(kernel.destroy_calls(), 1);
        assert_eq!(kernel.open_channels(), 0);
        assert!(kernel.devices()[0].destroyed);
    }

    #[test]
    fn test_operations_after_destroy_fail() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_A]);
        device.destroy().unwrap();

        assert_eq!(device.state(), DeviceState::Destroyed);
        assert!(matches!(device.press(KEY_A, true), Err(Error::NotActive { .. })));
        assert!(matches!(device.flush(), Err(Error::NotActive { .. })));
        assert!(kernel.writes().is_empty());
    }

    #[test]
    fn test_destroy_failure_still_releases() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_A]);
        kernel.fail_destroy();

        assert!(matches!(device.destroy(), Err(Error::DestroyFailed { .. })));
        assert_eq!(device.state(), DeviceState::Destroyed);
        assert_eq!(kernel.open_channels(), 0);

        device.destroy().unwrap();
        assert_eq!(kernel.destroy_calls(), 1);
    }

    #[test]
    fn test_close_failure_after_destroy_still_releases() {
        let kernel = FakeInterface::new();
        let mut device = create(&kernel, &[KEY_A]);
        kernel.fail_close();

        match device.destroy() {
            Err(Error::DestroyFailed { device: name, source }) => {
                assert_eq!(name, device.name());
                assert_eq!(source.kind(), io::ErrorKind::Interrupted);
            }
            other => panic!("expected DestroyFailed, got {:?}", other),
        }
        assert_eq!(device.state(), DeviceState::Destroyed);
        assert_eq!(kernel.destroy_calls(), 1);
        assert_eq!(kernel.open_channels(), 0);

        device.destroy().unwrap();
        assert_eq!(kernel.closed(), 1);
    }

    #[test]
    fn test_rollback_close_failure_keeps_original_error() {
        let kernel = FakeInterface::new();
        kernel.fail_commit().fail_close();

        let err = DeviceBuilder::new([KEY_A])
            .name("kbd")
            .counter(fresh_counter())
            .build_with(&kernel)
            .unwrap_err();
        assert!(matches!(err, Error::CommitFailed { .. }));
        assert_eq!(err.device(), "kbd0");
        assert_eq!(kernel.open_channels(), 0);

        let kernel = FakeInterface::new();
        kernel.fail_enable_code(1).fail_close();

        let err = DeviceBuilder::new([KEY_A, KEY_B, KEY_C])
            .counter(fresh_counter())
            .build_with(&kernel)
            .unwrap_err();
        assert!(matches!(err, Error::CapabilityRejected { code, .. } if code == KEY_B));
        assert!(kernel.devices().is_empty());
        assert_eq!(kernel.open_channels(), 0);
    }

    #[test]
    fn test_drop_destroys() {
        let kernel = FakeInterface::new();
        {
            let _device = create(&kernel, &[KEY_A]);
            assert_eq!(kernel.open_channels(), 1);
        }
        assert_eq!(kernel.destroy_calls(), 1);
        assert_eq!(kernel.open_channels(), 0);
    }
}
