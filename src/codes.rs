//! Named event codes from the Linux input headers.
//!
//! This is a frozen subset of `linux/input-event-codes.h`. Anything not
//! listed here can be built with [`EventCode::new`].

use crate::code::{EventCode, EventFamily};

// Synchronization
pub const SYN_REPORT: EventCode = EventCode::new(EventFamily::Sync, 0);
pub const SYN_CONFIG: EventCode = EventCode::new(EventFamily::Sync, 1);
pub const SYN_MT_REPORT: EventCode = EventCode::new(EventFamily::Sync, 2);
pub const SYN_DROPPED: EventCode = EventCode::new(EventFamily::Sync, 3);

// Keys
pub const KEY_RESERVED: EventCode = EventCode::key(0);
pub const KEY_ESC: EventCode = EventCode::key(1);
pub const KEY_1: EventCode = EventCode::key(2);
pub const KEY_2: EventCode = EventCode::key(3);
pub const KEY_3: EventCode = EventCode::key(4);
pub const KEY_4: EventCode = EventCode::key(5);
pub const KEY_5: EventCode = EventCode::key(6);
pub const KEY_6: EventCode = EventCode::key(7);
pub const KEY_7: EventCode = EventCode::key(8);
pub const KEY_8: EventCode = EventCode::key(9);
pub const KEY_9: EventCode = EventCode::key(10);
pub const KEY_0: EventCode = EventCode::key(11);
pub const KEY_MINUS: EventCode = EventCode::key(12);
pub const KEY_EQUAL: EventCode = EventCode::key(13);
pub const KEY_BACKSPACE: EventCode = EventCode::key(14);
pub const KEY_TAB: EventCode = EventCode::key(15);
pub const KEY_Q: EventCode = EventCode::key(16);
pub const KEY_W: EventCode = EventCode::key(17);
pub const KEY_E: EventCode = EventCode::key(18);
pub const KEY_R: EventCode = EventCode::key(19);
pub const KEY_T: EventCode = EventCode::key(20);
pub const KEY_Y: EventCode = EventCode::key(21);
pub const KEY_U: EventCode = EventCode::key(22);
pub const KEY_I: EventCode = EventCode::key(23);
pub const KEY_O: EventCode = EventCode::key(24);
pub const KEY_P: EventCode = EventCode::key(25);
pub const KEY_LEFTBRACE: EventCode = EventCode::key(26);
pub const KEY_RIGHTBRACE: EventCode = EventCode::key(27);
pub const KEY_ENTER: EventCode = EventCode::key(28);
pub const KEY_LEFTCTRL: EventCode = EventCode::key(29);
pub const KEY_A: EventCode = EventCode::key(30);
pub const KEY_S: EventCode = EventCode::key(31);
pub const KEY_D: EventCode = EventCode::key(32);
pub const KEY_F: EventCode = EventCode::key(33);
pub const KEY_G: EventCode = EventCode::key(34);
pub const KEY_H: EventCode = EventCode::key(35);
pub const KEY_J: EventCode = EventCode::key(36);
pub const KEY_K: EventCode = EventCode::key(37);
pub const KEY_L: EventCode = EventCode::key(38);
pub const KEY_SEMICOLON: EventCode = EventCode::key(39);
pub const KEY_APOSTROPHE: EventCode = EventCode::key(40);
pub const KEY_GRAVE: EventCode = EventCode::key(41);
pub const KEY_LEFTSHIFT: EventCode = EventCode::key(42);
pub const KEY_BACKSLASH: EventCode = EventCode::key(43);
pub const KEY_Z: EventCode = EventCode::key(44);
pub const KEY_X: EventCode = EventCode::key(45);
pub const KEY_C: EventCode = EventCode::key(46);
pub const KEY_V: EventCode = EventCode::key(47);
pub const KEY_B: EventCode = EventCode::key(48);
pub const KEY_N: EventCode = EventCode::key(49);
pub const KEY_M: EventCode = EventCode::key(50);
pub const KEY_COMMA: EventCode = EventCode::key(51);
pub const KEY_DOT: EventCode = EventCode::key(52);
pub const KEY_SLASH: EventCode = EventCode::key(53);
pub const KEY_RIGHTSHIFT: EventCode = EventCode::key(54);
pub const KEY_KPASTERISK: EventCode = EventCode::key(55);
pub const KEY_LEFTALT: EventCode = EventCode::key(56);
pub const KEY_SPACE: EventCode = EventCode::key(57);
pub const KEY_CAPSLOCK: EventCode = EventCode::key(58);
pub const KEY_F1: EventCode = EventCode::key(59);
pub const KEY_F2: EventCode = EventCode::key(60);
pub const KEY_F3: EventCode = EventCode::key(61);
pub const KEY_F4: EventCode = EventCode::key(62);
pub const KEY_F5: EventCode = EventCode::key(63);
pub const KEY_F6: EventCode = EventCode::key(64);
pub const KEY_F7: EventCode = EventCode::key(65);
pub const KEY_F8: EventCode = EventCode::key(66);
pub const KEY_F9: EventCode = EventCode::key(67);
pub const KEY_F10: EventCode = EventCode::key(68);
pub const KEY_NUMLOCK: EventCode = EventCode::key(69);
pub const KEY_SCROLLLOCK: EventCode = EventCode::key(70);
pub const KEY_F11: EventCode = EventCode::key(87);
pub const KEY_F12: EventCode = EventCode::key(88);
pub const KEY_RIGHTCTRL: EventCode = EventCode::key(97);
pub const KEY_SYSRQ: EventCode = EventCode::key(99);
pub const KEY_RIGHTALT: EventCode = EventCode::key(100);
pub const KEY_HOME: EventCode = EventCode::key(102);
pub const KEY_UP: EventCode = EventCode::key(103);
pub const KEY_PAGEUP: EventCode = EventCode::key(104);
pub const KEY_LEFT: EventCode = EventCode::key(105);
pub const KEY_RIGHT: EventCode = EventCode::key(106);
pub const KEY_END: EventCode = EventCode::key(107);
pub const KEY_DOWN: EventCode = EventCode::key(108);
pub const KEY_PAGEDOWN: EventCode = EventCode::key(109);
pub const KEY_INSERT: EventCode = EventCode::key(110);
pub const KEY_DELETE: EventCode = EventCode::key(111);
pub const KEY_MUTE: EventCode = EventCode::key(113);
pub const KEY_VOLUMEDOWN: EventCode = EventCode::key(114);
pub const KEY_VOLUMEUP: EventCode = EventCode::key(115);
pub const KEY_PAUSE: EventCode = EventCode::key(119);
pub const KEY_LEFTMETA: EventCode = EventCode::key(125);
pub const KEY_RIGHTMETA: EventCode = EventCode::key(126);
pub const KEY_COMPOSE: EventCode = EventCode::key(127);

// Mouse buttons
pub const BTN_LEFT: EventCode = EventCode::key(0x110);
pub const BTN_RIGHT: EventCode = EventCode::key(0x111);
pub const BTN_MIDDLE: EventCode = EventCode::key(0x112);
pub const BTN_SIDE: EventCode = EventCode::key(0x113);
pub const BTN_EXTRA: EventCode = EventCode::key(0x114);
pub const BTN_FORWARD: EventCode = EventCode::key(0x115);
pub const BTN_BACK: EventCode = EventCode::key(0x116);
pub const BTN_TASK: EventCode = EventCode::key(0x117);

// Gamepad buttons
pub const BTN_SOUTH: EventCode = EventCode::key(0x130);
pub const BTN_EAST: EventCode = EventCode::key(0x131);
pub const BTN_NORTH: EventCode = EventCode::key(0x133);
pub const BTN_WEST: EventCode = EventCode::key(0x134);
pub const BTN_TL: EventCode = EventCode::key(0x136);
pub const BTN_TR: EventCode = EventCode::key(0x137);
pub const BTN_TL2: EventCode = EventCode::key(0x138);
pub const BTN_TR2: EventCode = EventCode::key(0x139);
pub const BTN_SELECT: EventCode = EventCode::key(0x13a);
pub const BTN_START: EventCode = EventCode::key(0x13b);
pub const BTN_MODE: EventCode = EventCode::key(0x13c);
pub const BTN_THUMBL: EventCode = EventCode::key(0x13d);
pub const BTN_THUMBR: EventCode = EventCode::key(0x13e);

// Relative axes
pub const REL_X: EventCode = EventCode::relative(0x00);
pub const REL_Y: EventCode = EventCode::relative(0x01);
pub const REL_Z: EventCode = EventCode::relative(0x02);
pub const REL_RX: EventCode = EventCode::relative(0x03);
pub const REL_RY: EventCode = EventCode::relative(0x04);
pub const REL_RZ: EventCode = EventCode::relative(0x05);
pub const REL_HWHEEL: EventCode = EventCode::relative(0x06);
pub const REL_DIAL: EventCode = EventCode::relative(0x07);
pub const REL_WHEEL: EventCode = EventCode::relative(0x08);
pub const REL_MISC: EventCode = EventCode::relative(0x09);

// Absolute axes
pub const ABS_X: EventCode = EventCode::absolute(0x00);
pub const ABS_Y: EventCode = EventCode::absolute(0x01);
pub const ABS_Z: EventCode = EventCode::absolute(0x02);
pub const ABS_RX: EventCode = EventCode::absolute(0x03);
pub const ABS_RY: EventCode = EventCode::absolute(0x04);
pub const ABS_RZ: EventCode = EventCode::absolute(0x05);
pub const ABS_THROTTLE: EventCode = EventCode::absolute(0x06);
pub const ABS_RUDDER: EventCode = EventCode::absolute(0x07);
pub const ABS_WHEEL: EventCode = EventCode::absolute(0x08);
pub const ABS_GAS: EventCode = EventCode::absolute(0x09);
pub const ABS_BRAKE: EventCode = EventCode::absolute(0x0a);
pub const ABS_HAT0X: EventCode = EventCode::absolute(0x10);
pub const ABS_HAT0Y: EventCode = EventCode::absolute(0x11);

// Misc
pub const MSC_SCAN: EventCode = EventCode::new(EventFamily::Misc, 0x04);

// LEDs
pub const LED_NUML: EventCode = EventCode::new(EventFamily::Led, 0x00);
pub const LED_CAPSL: EventCode = EventCode::new(EventFamily::Led, 0x01);
pub const LED_SCROLLL: EventCode = EventCode::new(EventFamily::Led, 0x02);

// Autorepeat
pub const REP_DELAY: EventCode = EventCode::new(EventFamily::Repeat, 0x00);
pub const REP_PERIOD: EventCode = EventCode::new(EventFamily::Repeat, 0x01);

// Sound
pub const SND_BELL: EventCode = EventCode::new(EventFamily::Sound, 0x01);

// Switches
pub const SW_LID: EventCode = EventCode::new(EventFamily::Switch, 0x00);
pub const SW_TABLET_MODE: EventCode = EventCode::new(EventFamily::Switch, 0x01);
