//! Platform-specific implementations.

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "linux")]
pub use linux::*;

// uinput is the only mechanism supported
#[cfg(not(target_os = "linux"))]
compile_error!("uinject only supports Linux");
