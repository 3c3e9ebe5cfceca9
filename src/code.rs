//! Event codes: the (family, code) pairs a device can report.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The family (kernel event type) an [`EventCode`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventFamily {
    /// Synchronization markers (`EV_SYN`).
    Sync,
    /// Keys and buttons (`EV_KEY`).
    Key,
    /// Relative axes such as pointer motion and wheels (`EV_REL`).
    RelativeAxis,
    /// Absolute axes such as joysticks and touch positions (`EV_ABS`).
    AbsoluteAxis,
    /// Miscellaneous data (`EV_MSC`).
    Misc,
    /// Binary switches such as lid state (`EV_SW`).
    Switch,
    /// LEDs (`EV_LED`).
    Led,
    /// Sound output such as beeps (`EV_SND`).
    Sound,
    /// Autorepeat parameters (`EV_REP`).
    Repeat,
    /// Force feedback effects (`EV_FF`).
    ForceFeedback,
}

impl EventFamily {
    /// The kernel's `EV_*` type number.
    pub const fn raw(self) -> u16 {
        match self {
            EventFamily::Sync => 0x00,
            EventFamily::Key => 0x01,
            EventFamily::RelativeAxis => 0x02,
            EventFamily::AbsoluteAxis => 0x03,
            EventFamily::Misc => 0x04,
            EventFamily::Switch => 0x05,
            EventFamily::Led => 0x11,
            EventFamily::Sound => 0x12,
            EventFamily::Repeat => 0x14,
            EventFamily::ForceFeedback => 0x15,
        }
    }

    /// Look up a family by its `EV_*` type number.
    pub const fn from_raw(raw: u16) -> Option<EventFamily> {
        Some(match raw {
            0x00 => EventFamily::Sync,
            0x01 => EventFamily::Key,
            0x02 => EventFamily::RelativeAxis,
            0x03 => EventFamily::AbsoluteAxis,
            0x04 => EventFamily::Misc,
            0x05 => EventFamily::Switch,
            0x11 => EventFamily::Led,
            0x12 => EventFamily::Sound,
            0x14 => EventFamily::Repeat,
            0x15 => EventFamily::ForceFeedback,
            _ => return None,
        })
    }

    /// Short kernel-style name (`KEY`, `REL`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            EventFamily::Sync => "SYN",
            EventFamily::Key => "KEY",
            EventFamily::RelativeAxis => "REL",
            EventFamily::AbsoluteAxis => "ABS",
            EventFamily::Misc => "MSC",
            EventFamily::Switch => "SW",
            EventFamily::Led => "LED",
            EventFamily::Sound => "SND",
            EventFamily::Repeat => "REP",
            EventFamily::ForceFeedback => "FF",
        }
    }
}

impl fmt::Display for EventFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One input signal a device can report, such as "the H key" or "relative X axis".
///
/// It does not carry a value (up/down, delta, position); that is supplied
/// when the event is emitted. The `code` is passed through to the kernel
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventCode {
    family: EventFamily,
    code: u16,
}

impl EventCode {
    /// Create an event code in the given family.
    pub const fn new(family: EventFamily, code: u16) -> Self {
        Self { family, code }
    }

    /// A key or button.
    pub const fn key(code: u16) -> Self {
        Self::new(EventFamily::Key, code)
    }

    /// A relative axis.
    pub const fn relative(code: u16) -> Self {
        Self::new(EventFamily::RelativeAxis, code)
    }

    /// An absolute axis.
    pub const fn absolute(code: u16) -> Self {
        Self::new(EventFamily::AbsoluteAxis, code)
    }

    /// The family this code belongs to.
    pub const fn family(&self) -> EventFamily {
        self.family
    }

    /// The raw code within the family.
    pub const fn code(&self) -> u16 {
        self.code
    }
}

impl fmt::Display for EventCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.family, self.code)
    }
}

/// Range and filtering parameters of an absolute axis.
///
/// Without one the kernel reports the axis with a `0..=0` range, which most
/// consumers ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AbsInfo {
    /// Initial value.
    pub value: i32,
    /// Smallest reported value.
    pub minimum: i32,
    /// Largest reported value.
    pub maximum: i32,
    /// Noise filter.
    pub fuzz: i32,
    /// Dead zone around the center.
    pub flat: i32,
    /// Units per millimeter (or per radian for rotational axes).
    pub resolution: i32,
}

impl AbsInfo {
    /// A range with no fuzz, flat or resolution, starting at `minimum`.
    pub const fn range(minimum: i32, maximum: i32) -> Self {
        Self {
            value: 0,
            minimum,
            maximum,
            fuzz: 0,
            flat: 0,
            resolution: 0,
        }
    }
}

#[cfg(all(feature = "evdev", target_os = "linux"))]
mod evdev_interop {
    use super::{EventCode, EventFamily};

    impl From<evdev::Key> for EventCode {
        fn from(key: evdev::Key) -> Self {
            EventCode::key(key.code())
        }
    }

    macro_rules! from_evdev {
        ($($ty:ident => $family:ident),* $(,)?) => {
            $(
                impl From<evdev::$ty> for EventCode {
                    fn from(value: evdev::$ty) -> Self {
                        EventCode::new(EventFamily::$family, value.0)
                    }
                }
            )*
        };
    }

    from_evdev! {
        RelativeAxisType => RelativeAxis,
        AbsoluteAxisType => AbsoluteAxis,
        SwitchType => Switch,
        LedType => Led,
        MiscType => Misc,
        SoundType => Sound,
    }
}
