//! Cabinet controls.
//!
//! The buttons and the coin switch share one signal byte. Each
//! [`Button`] owns one bit; press sets it and release clears it. Several
//! host keys may map to the same button, and releasing any of them
//! releases the button.
//!
//! The byte is read by the PIA through [`Controls`]:
//!
//! | Port | Pins                                                  |
//! |------|-------------------------------------------------------|
//! | A    | Bit 7: coin (active low). Bits 2-0: DIP switches       |
//! | B    | Bits 6-0: remaining buttons (active low)               |

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use mos_pia_6520::PortInput;

use crate::config::DipSwitches;

/// A cabinet input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Start,
    Left,
    Right,
    Fire,
    Coin,
}

impl Button {
    pub const ALL: [Self; 5] = [Self::Start, Self::Left, Self::Right, Self::Fire, Self::Coin];

    /// Bit in the signal byte.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Start => 0x01,
            Self::Left => 0x04,
            Self::Right => 0x08,
            Self::Fire => 0x10,
            Self::Coin => 0x80,
        }
    }
}

/// Shared joystick signal state. Clones refer to the same byte, so an
/// input thread can press and release while the emulation thread reads.
#[derive(Debug, Clone, Default)]
pub struct Joystick {
    signals: Arc<AtomicU8>,
}

impl Joystick {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&self, button: Button) {
        self.signals.fetch_or(button.bit(), Ordering::Relaxed);
    }

    pub fn release(&self, button: Button) {
        self.signals.fetch_and(!button.bit(), Ordering::Relaxed);
    }

    pub fn set(&self, button: Button, pressed: bool) {
        if pressed {
            self.press(button);
        } else {
            self.release(button);
        }
    }

    /// Release everything.
    pub fn clear(&self) {
        self.signals.store(0, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.signals() & button.bit() != 0
    }

    /// Raw signal byte, active high.
    #[must_use]
    pub fn signals(&self) -> u8 {
        self.signals.load(Ordering::Relaxed)
    }
}

/// Everything wired to the PIA pins.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    pub joystick: Joystick,
    pub dip_switches: DipSwitches,
}

impl PortInput for Controls {
    fn port_a_pins(&self) -> u8 {
        (!self.joystick.signals() & 0x80) | self.dip_switches.bits()
    }

    fn port_b_pins(&self) -> u8 {
        !self.joystick.signals() & 0x7F
    }
}
