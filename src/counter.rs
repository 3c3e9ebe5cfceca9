//! Process-wide device numbering.
//!
//! The kernel happily accepts several devices with the same name, which makes
//! them hard to tell apart in `/proc/bus/input/devices` or a compositor's
//! device list. Every committed device therefore gets the counter value as a
//! name suffix.
//!
//! A number is reserved for the whole creation transaction and only consumed
//! once the device is committed, so failed attempts leave no gaps and two
//! threads creating devices at the same time can never draw the same number.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Counter shared by every device created without an explicit counter.
static GLOBAL_COUNTER: DeviceCounter = DeviceCounter::new();

/// The process-wide counter.
pub fn global() -> &'static DeviceCounter {
    &GLOBAL_COUNTER
}

/// Hands out device name suffixes.
#[derive(Debug, Default)]
pub struct DeviceCounter {
    next: Mutex<u64>,
}

impl DeviceCounter {
    /// A counter starting at zero.
    pub const fn new() -> Self {
        Self {
            next: Mutex::new(0),
        }
    }

    /// Number of devices committed through this counter so far.
    pub fn count(&self) -> u64 {
        *self.lock()
    }

    /// Reserve the next number. Other reservations block until this one is
    /// committed or dropped.
    pub fn reserve(&self) -> Reservation<'_> {
        Reservation { guard: self.lock() }
    }

    fn lock(&self) -> MutexGuard<'_, u64> {
        // The guarded value is a plain integer, a panic cannot leave it torn.
        self.next.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A number held for one creation attempt.
///
/// Dropping the reservation without calling [`commit`](Self::commit) releases
/// the number for the next attempt.
#[derive(Debug)]
pub struct Reservation<'a> {
    guard: MutexGuard<'a, u64>,
}

impl Reservation<'_> {
    /// The reserved number.
    pub fn number(&self) -> u64 {
        *self.guard
    }

    /// `base` with the reserved number appended.
    pub fn name(&self, base: &str) -> String {
        format!("{}{}", base, self.number())
    }

    /// Consume the number.
    pub fn commit(mut self) {
        *self.guard += 1;
    }
}
