//! An Xbox-360-style gamepad: two sticks, two analog triggers, a d-pad and
//! eleven buttons.

use crate::channel::{KernelChannel, KernelInterface};
use crate::code::{AbsInfo, EventCode};
use crate::codes::{
    ABS_HAT0X, ABS_HAT0Y, ABS_RX, ABS_RY, ABS_RZ, ABS_X, ABS_Y, ABS_Z, BTN_EAST, BTN_MODE,
    BTN_NORTH, BTN_SELECT, BTN_SOUTH, BTN_START, BTN_THUMBL, BTN_THUMBR, BTN_TL, BTN_TR, BTN_WEST,
};
use crate::device::{DeviceBuilder, VirtualDevice};
use crate::error::Result;
use crate::platform::UinputChannel;
use std::ops::{Deref, DerefMut};

/// Base name used when none is given.
pub const DEFAULT_NAME: &str = "uinject-virtual-gamepad";

/// Stick range.
pub const STICK_MIN: i32 = -32768;
/// Stick range.
pub const STICK_MAX: i32 = 32767;
/// Trigger range.
pub const TRIGGER_MAX: i32 = 255;

const STICK: AbsInfo = AbsInfo {
    value: 0,
    minimum: STICK_MIN,
    maximum: STICK_MAX,
    fuzz: 16,
    flat: 128,
    resolution: 0,
};
const TRIGGER: AbsInfo = AbsInfo::range(0, TRIGGER_MAX);
const HAT: AbsInfo = AbsInfo::range(-1, 1);

/// Gamepad buttons, named by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    /// Bottom face button (A).
    South,
    /// Right face button (B).
    East,
    /// Top face button (Y).
    North,
    /// Left face button (X).
    West,
    /// Left shoulder.
    LeftShoulder,
    /// Right shoulder.
    RightShoulder,
    /// Back / select.
    Select,
    /// Start.
    Start,
    /// Guide / home.
    Mode,
    /// Left stick click.
    LeftThumb,
    /// Right stick click.
    RightThumb,
}

impl GamepadButton {
    /// The key code reported for this button.
    pub const fn code(self) -> EventCode {
        match self {
            GamepadButton::South => BTN_SOUTH,
            GamepadButton::East => BTN_EAST,
            GamepadButton::North => BTN_NORTH,
            GamepadButton::West => BTN_WEST,
            GamepadButton::LeftShoulder => BTN_TL,
            GamepadButton::RightShoulder => BTN_TR,
            GamepadButton::Select => BTN_SELECT,
            GamepadButton::Start => BTN_START,
            GamepadButton::Mode => BTN_MODE,
            GamepadButton::LeftThumb => BTN_THUMBL,
            GamepadButton::RightThumb => BTN_THUMBR,
        }
    }
}

/// A virtual gamepad.
///
/// Axis values outside the registered ranges are passed through; the kernel
/// and consumers decide what to do with them.
#[derive(Debug)]
pub struct Gamepad<C: KernelChannel = UinputChannel> {
    device: VirtualDevice<C>,
}

impl Gamepad {
    /// Codes every gamepad registers.
    pub const CAPABILITIES: [EventCode; 19] = [
        BTN_SOUTH, BTN_EAST, BTN_NORTH, BTN_WEST, BTN_TL, BTN_TR, BTN_SELECT, BTN_START, BTN_MODE,
        BTN_THUMBL, BTN_THUMBR, ABS_X, ABS_Y, ABS_RX, ABS_RY, ABS_Z, ABS_RZ, ABS_HAT0X, ABS_HAT0Y,
    ];

    /// Create a gamepad on `/dev/uinput`.
    pub fn new(name: Option<&str>) -> Result<Self> {
        Self::builder(name).build().map(|device| Gamepad { device })
    }

    /// Create a gamepad through `kernel`.
    pub fn new_with<K: KernelInterface>(
        kernel: &K,
        name: Option<&str>,
    ) -> Result<Gamepad<K::Channel>> {
        Self::builder(name)
            .build_with(kernel)
            .map(|device| Gamepad { device })
    }

    /// A builder preloaded with the gamepad capabilities and axis ranges.
    pub fn builder(name: Option<&str>) -> DeviceBuilder {
        DeviceBuilder::new(Self::CAPABILITIES)
            .default_name(DEFAULT_NAME)
            .maybe_name(name)
            .absolute_axis(ABS_X, STICK)
            .absolute_axis(ABS_Y, STICK)
            .absolute_axis(ABS_RX, STICK)
            .absolute_axis(ABS_RY, STICK)
            .absolute_axis(ABS_Z, TRIGGER)
            .absolute_axis(ABS_RZ, TRIGGER)
            .absolute_axis(ABS_HAT0X, HAT)
            .absolute_axis(ABS_HAT0Y, HAT)
    }
}

impl<C: KernelChannel> Gamepad<C> {
    fn set_pair(
        &mut self,
        first: (EventCode, i32),
        second: (EventCode, i32),
        flush: bool,
    ) -> Result<()> {
        self.device.emit(first.0, first.1, false)?;
        self.device.emit(second.0, second.1, flush)
    }

    /// Position the left stick.
    pub fn set_left_stick(&mut self, x: i32, y: i32, flush: bool) -> Result<()> {
        self.set_pair((ABS_X, x), (ABS_Y, y), flush)
    }

    /// Position the right stick.
    pub fn set_right_stick(&mut self, x: i32, y: i32, flush: bool) -> Result<()> {
        self.set_pair((ABS_RX, x), (ABS_RY, y), flush)
    }

    /// Set both analog triggers (0 released, [`TRIGGER_MAX`] fully pulled).
    pub fn set_triggers(&mut self, left: i32, right: i32, flush: bool) -> Result<()> {
        self.set_pair((ABS_Z, left), (ABS_RZ, right), flush)
    }

    /// Set the d-pad; each axis is -1, 0 or 1 (negative is left/up).
    pub fn set_dpad(&mut self, x: i32, y: i32, flush: bool) -> Result<()> {
        self.set_pair((ABS_HAT0X, x), (ABS_HAT0Y, y), flush)
    }

    /// Hold a button down.
    pub fn press_button(&mut self, button: GamepadButton, flush: bool) -> Result<()> {
        self.device.press(button.code(), flush)
    }

    /// Let a button up.
    pub fn release_button(&mut self, button: GamepadButton, flush: bool) -> Result<()> {
        self.device.release(button.code(), flush)
    }

    /// Press and release a button.
    pub fn click_button(&mut self, button: GamepadButton, flush: bool) -> Result<()> {
        self.device.click(button.code(), flush)
    }

    /// The underlying device.
    pub fn into_inner(self) -> VirtualDevice<C> {
        self.device
    }
}

impl<C: KernelChannel> Deref for Gamepad<C> {
    type Target = VirtualDevice<C>;

    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl<C: KernelChannel> DerefMut for Gamepad<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::SYN_REPORT;
    use crate::fake::FakeInterface;

    #[test]
    fn test_registers_axes_with_ranges() {
        let kernel = FakeInterface::new();
        let pad = Gamepad::new_with(&kernel, Some("pad")).unwrap();

        let devices = kernel.devices();
        assert_eq!(devices[0].capabilities, Gamepad::CAPABILITIES);
        assert_eq!(devices[0].absolute.len(), 8);
        assert!(devices[0].absolute.contains(&(ABS_Z, TRIGGER)));
        assert!(devices[0].absolute.contains(&(ABS_HAT0Y, HAT)));
        assert!(pad.name().starts_with("pad"));
    }

    #[test]
    fn test_stick_update_is_one_report() {
        let kernel = FakeInterface::new();
        let mut pad = Gamepad::new_with(&kernel, None).unwrap();

        pad.set_left_stick(STICK_MAX, STICK_MIN, true).unwrap();
        pad.set_triggers(0, TRIGGER_MAX, false).unwrap();
        pad.set_dpad(-1, 0, true).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![
                (ABS_X, STICK_MAX),
                (ABS_Y, STICK_MIN),
                (SYN_REPORT, 0),
                (ABS_Z, 0),
                (ABS_RZ, TRIGGER_MAX),
                (ABS_HAT0X, -1),
                (ABS_HAT0Y, 0),
                (SYN_REPORT, 0),
            ]
        );
    }

    #[test]
    fn test_buttons() {
        let kernel = FakeInterface::new();
        let mut pad = Gamepad::new_with(&kernel, None).unwrap();

        pad.press_button(GamepadButton::South, true).unwrap();
        pad.release_button(GamepadButton::South, true).unwrap();
        pad.click_button(GamepadButton::Start, true).unwrap();
        assert_eq!(
            kernel.writes(),
            vec![
                (BTN_SOUTH, 1),
                (SYN_REPORT, 0),
                (BTN_SOUTH, 0),
                (SYN_REPORT, 0),
                (BTN_START, 1),
                (BTN_START, 0),
                (SYN_REPORT, 0),
            ]
        );
    }
}
