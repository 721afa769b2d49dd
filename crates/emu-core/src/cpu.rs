//! CPU core trait.

use crate::Bus;

/// A CPU core.
///
/// Unlike other `Tickable` components, CPUs take a bus reference in their
/// tick method because they touch memory on specific cycles. The bus is
/// passed in, not owned, so the machine can share it with other chips.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Advance the CPU by one machine cycle.
    fn tick<B: Bus>(&mut self, bus: &mut B);

    /// Returns the current program counter, zero-extended.
    fn pc(&self) -> u32;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Returns true if the CPU is halted.
    fn is_halted(&self) -> bool;

    /// Request an interrupt. Returns true if accepted.
    fn interrupt(&mut self) -> bool;

    /// Request a non-maskable interrupt.
    fn nmi(&mut self);

    /// Reset the CPU to its initial state.
    fn reset(&mut self);
}
