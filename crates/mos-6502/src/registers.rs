//! 6502 register file.

use crate::Status;
use crate::flags::{I, U};

/// 6502 register set.
///
/// The stack lives in page one; `s` points at the next free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub s: u8,
    pub pc: u16,
    pub p: Status,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Register state after the reset sequence, before the vector is read.
    ///
    /// Reset runs three suppressed pushes from S=0, leaving S at `$FD`.
    /// A, X and Y are not touched by hardware; they start at zero here.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0xFD,
            pc: 0,
            p: Status(U | I),
        }
    }

    /// Address for a push; decrements S afterwards.
    pub fn push(&mut self) -> u16 {
        let addr = self.stack_addr();
        self.s = self.s.wrapping_sub(1);
        addr
    }

    /// Increments S and returns the address to pull from.
    pub fn pop(&mut self) -> u16 {
        self.s = self.s.wrapping_add(1);
        self.stack_addr()
    }

    #[must_use]
    pub const fn stack_addr(&self) -> u16 {
        0x0100 | self.s as u16
    }
}
