//! Processor status register (P).

/// Carry.
pub const C: u8 = 0x01;
/// Zero.
pub const Z: u8 = 0x02;
/// IRQ disable.
pub const I: u8 = 0x04;
/// Decimal mode.
pub const D: u8 = 0x08;
/// Break. Only exists in the copy pushed to the stack.
pub const B: u8 = 0x10;
/// Unused, always reads as 1.
pub const U: u8 = 0x20;
/// Overflow.
pub const V: u8 = 0x40;
/// Negative.
pub const N: u8 = 0x80;

/// Processor status register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Status(pub u8);

impl Status {
    /// Status as pulled from the stack by PLP/RTI: B is dropped, U forced.
    #[must_use]
    pub const fn from_stack(value: u8) -> Self {
        Self((value | U) & !B)
    }

    /// Byte pushed by BRK and PHP.
    #[must_use]
    pub const fn pushed_by_software(self) -> u8 {
        self.0 | U | B
    }

    /// Byte pushed when servicing IRQ or NMI.
    #[must_use]
    pub const fn pushed_by_interrupt(self) -> u8 {
        (self.0 | U) & !B
    }

    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }

    /// Update N and Z from a result.
    pub fn update_nz(&mut self, value: u8) {
        self.set_if(N, value & 0x80 != 0);
        self.set_if(Z, value == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulled_status_drops_break_and_keeps_unused() {
        assert_eq!(Status::from_stack(0xFF).0, 0xFF & !B);
        assert_eq!(Status::from_stack(0x00).0, U);
    }

    #[test]
    fn pushed_status_differs_only_in_break() {
        let p = Status(C | N);
        assert_eq!(p.pushed_by_software() ^ p.pushed_by_interrupt(), B);
    }
}
