//! Cycle-stepped NMOS 6502 CPU core.
//!
//! The 6502 makes one bus access per cycle, and so does every `tick()` here.
//! Instructions are decoded once at fetch into an operation and an
//! addressing mode; the mode drives the address micro-steps and the
//! operation's access kind (read, write, read-modify-write) drives the data
//! cycles that follow.

mod cpu;
mod decode;
pub mod flags;
mod registers;

pub use cpu::Mos6502;
pub use decode::{Access, Instruction, Mode, Op, decode};
pub use flags::Status;
pub use registers::Registers;
