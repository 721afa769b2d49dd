//! Master clock configuration.

use std::time::Duration;

use crate::Ticks;

/// Master clock configuration for a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterClock {
    /// Crystal-derived cycle rate in Hz (e.g. `1_022_727` for NTSC boards).
    pub frequency_hz: u64,
}

impl MasterClock {
    #[must_use]
    pub const fn new(frequency_hz: u64) -> Self {
        Self { frequency_hz }
    }

    /// Ticks per frame at the given frame rate (integer division).
    #[must_use]
    pub const fn ticks_per_frame(&self, frames_per_second: u64) -> Ticks {
        Ticks::new(self.frequency_hz / frames_per_second)
    }

    /// Wall-clock time covered by `ticks` at this frequency.
    #[must_use]
    pub fn duration_of(&self, ticks: Ticks) -> Duration {
        Duration::from_nanos(ticks.get().saturating_mul(1_000_000_000) / self.frequency_hz)
    }
}
