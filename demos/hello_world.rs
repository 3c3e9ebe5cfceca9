//! Types "Hello, World!" and moves the pointer.
//!
//! Run with: sudo cargo run --example hello_world
//!
//! WARNING: This will actually type into the focused window and move your mouse!

use std::thread::sleep;
use std::time::Duration;
use uinject::codes::*;
use uinject::{Mouse, VirtualDevice};

fn main() -> uinject::Result<()> {
    let mut keyboard = VirtualDevice::new(
        [
            KEY_LEFTSHIFT, KEY_SPACE, KEY_H, KEY_E, KEY_L, KEY_O, KEY_W, KEY_R, KEY_D, KEY_1,
            KEY_COMMA,
        ],
        None,
    )?;
    let mut mouse = Mouse::new(None)?;
    println!("created {} and {}", keyboard.name(), mouse.name());

    keyboard.click_combination(&[KEY_LEFTSHIFT, KEY_H])?;
    for key in [KEY_E, KEY_L, KEY_L, KEY_O, KEY_COMMA, KEY_SPACE] {
        keyboard.click(key, true)?;
    }

    keyboard.click_combination(&[KEY_LEFTSHIFT, KEY_W])?;
    for key in [KEY_O, KEY_R, KEY_L, KEY_D] {
        // Same as click(), spelled out
        keyboard.press(key, false)?;
        keyboard.release(key, false)?;
        keyboard.flush()?;
    }

    keyboard.click_combination(&[KEY_LEFTSHIFT, KEY_1])?;

    for _ in 0..20 {
        mouse.move_relative(5, 5, true)?;
        sleep(Duration::from_millis(20));
    }

    for _ in 0..20 {
        mouse.move_wheel(1, true)?;
        sleep(Duration::from_millis(20));
    }

    println!();

    // Dropping would do the same, but this reports failures.
    keyboard.destroy()?;
    mouse.destroy()?;
    Ok(())
}
