//! Core traits and types for cycle-stepped emulation.
//!
//! Every component advances in whole machine cycles. The machine decides the
//! order; components only know how to take one step.

mod bus;
mod clock;
mod cpu;
mod observable;
mod tickable;
mod ticks;

pub use bus::{Bus, SimpleBus};
pub use clock::MasterClock;
pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use tickable::Tickable;
pub use ticks::Ticks;
