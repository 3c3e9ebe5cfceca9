//! Error types for virtual device operations.

use crate::code::EventCode;
use std::io;
use thiserror::Error;

/// Result type alias for uinject operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while creating, driving or tearing down a device.
#[derive(Debug, Error)]
pub enum Error {
    /// The kernel interface could not be opened, usually for lack of privilege.
    #[error(
        "could not create device {device}: cannot open the uinput interface ({source}). \
         Make sure /dev/uinput is accessible (root, the 'input' group or a udev rule)"
    )]
    PermissionDenied {
        /// Name the device would have been committed under.
        device: String,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The kernel refused a requested event family or code.
    #[error("could not create device {device}: capability {code} rejected: {source}")]
    CapabilityRejected {
        /// Name the device would have been committed under.
        device: String,
        /// The capability that failed to register.
        code: EventCode,
        /// Underlying OS error.
        source: io::Error,
    },

    /// The final create call was rejected.
    #[error("could not create device {device}: {source}")]
    CommitFailed {
        /// Name the device would have been committed under.
        device: String,
        /// Underlying OS error.
        source: io::Error,
    },

    /// A device needs at least one capability.
    #[error("could not create device {device}: no capabilities requested")]
    NoCapabilities {
        /// Name the device would have been committed under.
        device: String,
    },

    /// The device has already been destroyed.
    #[error("device {device} is not active")]
    NotActive {
        /// Name of the device.
        device: String,
    },

    /// Writing an event to the device failed.
    #[error("failed to emit {code} on device {device}: {source}")]
    EmitFailed {
        /// Name of the device.
        device: String,
        /// The event that could not be written.
        code: EventCode,
        /// Underlying OS error.
        source: io::Error,
    },

    /// Teardown failed. The device is considered destroyed regardless.
    #[error("could not destroy device {device}: {source}")]
    DestroyFailed {
        /// Name of the device.
        device: String,
        /// Underlying OS error.
        source: io::Error,
    },
}

impl Error {
    /// Name of the device the error refers to.
    pub fn device(&self) -> &str {
        match self {
            Error::PermissionDenied { device, .. }
            | Error::CapabilityRejected { device, .. }
            | Error::CommitFailed { device, .. }
            | Error::NoCapabilities { device }
            | Error::NotActive { device }
            | Error::EmitFailed { device, .. }
            | Error::DestroyFailed { device, .. } => device,
        }
    }
}
