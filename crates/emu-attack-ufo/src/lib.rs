//! Cycle-accurate Attack UFO arcade emulator.
//!
//! The board is a 6502, a 6560-family VIC for video and a 6520 PIA for the
//! controls, on a 14-bit bus with 2 KiB of RAM, 1 KiB of nibble-wide colour
//! RAM, 1 KiB of character RAM and 8 KiB of ROM. Every chip steps once per
//! machine cycle: VIC, then CPU, then PIA.
//!
//! [`AttackUfo`] is the machine. [`MachineRunner`] runs it on its own
//! thread and hands frames and the joystick to the presentation side.

mod bus;
pub mod capture;
pub mod config;
mod error;
pub mod input;
#[cfg(feature = "native")]
pub mod keyboard_map;
mod machine;
pub mod memory;
pub mod roms;
pub mod runner;

pub use bus::AttackUfoBus;
pub use config::{DipSwitches, MachineConfig, MachineType};
pub use error::MachineError;
pub use input::{Button, Controls, Joystick};
pub use machine::AttackUfo;
pub use memory::{AddressMapBuilder, Chip, Memory};
pub use mos_vic_6560::{FrameReader, PALETTE};
pub use roms::RomSet;
pub use runner::{MachineRunner, Pacing};
