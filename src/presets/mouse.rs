//! A three-button mouse with wheels.

use crate::channel::{KernelChannel, KernelInterface};
use crate::code::EventCode;
use crate::codes::{BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, REL_HWHEEL, REL_WHEEL, REL_X, REL_Y};
use crate::device::{DeviceBuilder, VirtualDevice};
use crate::error::Result;
use crate::platform::UinputChannel;
use std::ops::{Deref, DerefMut};

/// Base name used when none is given.
pub const DEFAULT_NAME: &str = "uinject-virtual-mouse";

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left button.
    Left,
    /// Middle button (wheel click).
    Middle,
    /// Right button.
    Right,
}

impl MouseButton {
    /// The key code reported for this button.
    pub const fn code(self) -> EventCode {
        match self {
            MouseButton::Left => BTN_LEFT,
            MouseButton::Middle => BTN_MIDDLE,
            MouseButton::Right => BTN_RIGHT,
        }
    }
}

/// A relative pointing device with left, middle and right buttons and
/// vertical and horizontal wheels.
///
/// ```no_run
/// use uinject::Mouse;
///
/// let mut mouse = Mouse::new(None)?;
/// mouse.move_relative(5, 5, true)?;
/// mouse.move_wheel(-1, true)?;
/// # Ok::<(), uinject::Error>(())
/// ```
#[derive(Debug)]
pub struct Mouse<C: KernelChannel = UinputChannel> {
    device: VirtualDevice<C>,
}

impl Mouse {
    /// Codes every mouse registers.
    pub const CAPABILITIES: [EventCode; 7] = [
        BTN_LEFT, BTN_MIDDLE, BTN_RIGHT, REL_X, REL_Y, REL_WHEEL, REL_HWHEEL,
    ];

    /// Create a mouse on `/dev/uinput`.
    pub fn new(name: Option<&str>) -> Result<Self> {
        Self::builder(name).build().map(|device| Mouse { device })
    }

    /// Create a mouse through `kernel`.
    pub fn new_with<K: KernelInterface>(
        kernel: &K,
        name: Option<&str>,
    ) -> Result<Mouse<K::Channel>> {
        Self::builder(name)
            .build_with(kernel)
            .map(|device| Mouse { device })
    }

    /// A builder preloaded with the mouse capabilities, for further configuration.
    pub fn builder(name: Option<&str>) -> DeviceBuilder {
        DeviceBuilder::new(Self::CAPABILITIES)
            .default_name(DEFAULT_NAME)
            .maybe_name(name)
    }
}

impl<C: KernelChannel> Mouse<C> {
    /// Move the pointer by (`x`, `y`). Both axes land in the same update.
    pub fn move_relative(&mut self, x: i32, y: i32, flush: bool) -> Result<()> {
        self.device.emit(REL_X, x, false)?;
        self.device.emit(REL_Y, y, flush)
    }

    /// Turn the vertical wheel; positive is away from the user.
    pub fn move_wheel(&mut self, value: i32, flush: bool) -> Result<()> {
        self.device.emit(REL_WHEEL, value, flush)
    }

    /// Turn the horizontal wheel; positive is to the right.
    pub fn move_hwheel(&mut self, value: i32, flush: bool) -> Result<()> {
        self.device.emit(REL_HWHEEL, value, flush)
    }

    /// Hold a button down.
    pub fn press_button(&mut self, button: MouseButton, flush: bool) -> Result<()> {
        self.device.press(button.code(), flush)
    }

    /// Let a button up.
    pub fn release_button(&mut self, button: MouseButton, flush: bool) -> Result<()> {
        self.device.release(button.code(), flush)
    }

    /// Press and release a button.
    pub fn click_button(&mut self, button: MouseButton, flush: bool) -> Result<()> {
        self.device.click(button.code(), flush)
    }

    /// The underlying device.
    pub fn into_inner(self) -> VirtualDevice<C> {
        self.device
    }
}

impl<C: KernelChannel> Deref for Mouse<C> {
    type Target = VirtualDevice<C>;

    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl<C: KernelChannel> DerefMut for Mouse<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::SYN_REPORT;
    use crate::counter::DeviceCounter;
    use crate::fake::FakeInterface;

    fn mouse(kernel: &FakeInterface) -> Mouse<crate::fake::FakeChannel> {
        let counter = Box::leak(Box::new(DeviceCounter::new()));
        let device = Mouse::builder(None)
            .counter(counter)
            .build_with(kernel)
            .unwrap();
        Mouse { device }
    }

    #[test]
    fn test_registers_mouse_capabilities() {
        let kernel = FakeInterface::new();
        let mouse = mouse(&kernel);

        assert_eq!(mouse.name(), "uinject-virtual-mouse0");
        assert_eq!(mouse.capabilities(), &Mouse::CAPABILITIES);
        assert_eq!(kernel.devices()[0].capabilities, Mouse::CAPABILITIES);
    }

    #[test]
    fn test_move_relative_syncs_once() {
        let kernel = FakeInterface::new();
        let mut mouse = mouse(&kernel);

        mouse.move_relative(5, 5, true).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![(REL_X, 5), (REL_Y, 5), (SYN_REPORT, 0)]
        );
    }

    #[test]
    fn test_wheels() {
        let kernel = FakeInterface::new();
        let mut mouse = mouse(&kernel);

        mouse.move_wheel(1, false).unwrap();
        mouse.move_hwheel(-2, true).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![(REL_WHEEL, 1), (REL_HWHEEL, -2), (SYN_REPORT, 0)]
        );
    }

    #[test]
    fn test_click_button() {
        let kernel = FakeInterface::new();
        let mut mouse = mouse(&kernel);

        mouse.click_button(MouseButton::Right, true).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![(BTN_RIGHT, 1), (BTN_RIGHT, 0), (SYN_REPORT, 0)]
        );
    }

    #[test]
    fn test_named_mouse() {
        let kernel = FakeInterface::new();
        let device = Mouse::new_with(&kernel, Some("pointer")).unwrap();
        assert!(device.name().starts_with("pointer"));
    }
}
