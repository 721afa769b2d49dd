//! Board configuration: regional timing profile, DIP switches and ROMs.

use std::time::Duration;

use emu_core::{MasterClock, Ticks};
use mos_vic_6560::RasterTiming;

use crate::roms::RomSet;

/// Regional timing profile. The two differ only in clock rate, raster
/// geometry and frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MachineType {
    /// 1,022,727 Hz, 260x261 raster, 60 Hz.
    #[default]
    Ntsc,
    /// 1,108,405 Hz, 284x312 raster, 50 Hz.
    Pal,
}

impl MachineType {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ntsc => "NTSC",
            Self::Pal => "PAL",
        }
    }

    /// Nominal CPU clock.
    #[must_use]
    pub const fn clock(self) -> MasterClock {
        match self {
            Self::Ntsc => MasterClock::new(1_022_727),
            Self::Pal => MasterClock::new(1_108_405),
        }
    }

    #[must_use]
    pub const fn total_width(self) -> u16 {
        match self {
            Self::Ntsc => 260,
            Self::Pal => 284,
        }
    }

    #[must_use]
    pub const fn total_height(self) -> u16 {
        match self {
            Self::Ntsc => 261,
            Self::Pal => 312,
        }
    }

    #[must_use]
    pub const fn visible_width(self) -> u16 {
        match self {
            Self::Ntsc => 204,
            Self::Pal => 208,
        }
    }

    #[must_use]
    pub const fn visible_height(self) -> u16 {
        match self {
            Self::Ntsc => 252,
            Self::Pal => 272,
        }
    }

    /// Left edge of the visible area within the frame buffer.
    #[must_use]
    pub const fn horizontal_offset(self) -> u16 {
        match self {
            Self::Ntsc => 8,
            Self::Pal => 32,
        }
    }

    /// Top edge of the visible area within the frame buffer.
    #[must_use]
    pub const fn vertical_offset(self) -> u16 {
        match self {
            Self::Ntsc => 8,
            Self::Pal => 24,
        }
    }

    #[must_use]
    pub const fn frames_per_second(self) -> u32 {
        match self {
            Self::Ntsc => 60,
            Self::Pal => 50,
        }
    }

    #[must_use]
    pub const fn raster_timing(self) -> RasterTiming {
        RasterTiming {
            total_width: self.total_width(),
            total_height: self.total_height(),
        }
    }

    /// Nominal machine cycles in one raster frame.
    #[must_use]
    pub const fn cycles_per_frame(self) -> u32 {
        self.raster_timing().cycles_per_frame()
    }

    /// Wall-clock length of one frame at the nominal clock.
    #[must_use]
    pub fn frame_duration(self) -> Duration {
        self.clock()
            .duration_of(Ticks::new(u64::from(self.cycles_per_frame())))
    }

    /// Display viewport at 4:3, as `(width, height)`.
    #[must_use]
    pub const fn viewport(self) -> (u16, u16) {
        (self.visible_height() / 3 * 4, self.visible_height())
    }
}

/// Operator switches wired to PIA port A bits 0-2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DipSwitches {
    /// Lives setting, two bits.
    pub lives: u8,
    /// Bonus-life threshold select.
    pub bonus_life: bool,
}

impl Default for DipSwitches {
    fn default() -> Self {
        Self {
            lives: 2,
            bonus_life: false,
        }
    }
}

impl DipSwitches {
    /// Pattern driven onto port A.
    #[must_use]
    pub const fn bits(self) -> u8 {
        (self.lives & 0x03) | if self.bonus_life { 0x04 } else { 0x00 }
    }
}

/// Everything needed to build a machine.
#[derive(Debug, Clone)]
pub struct MachineConfig {
    pub machine_type: MachineType,
    pub roms: RomSet,
    pub dip_switches: DipSwitches,
}

impl MachineConfig {
    /// Default switches, NTSC.
    #[must_use]
    pub fn new(roms: RomSet) -> Self {
        Self {
            machine_type: MachineType::default(),
            roms,
            dip_switches: DipSwitches::default(),
        }
    }

    #[must_use]
    pub fn with_machine_type(mut self, machine_type: MachineType) -> Self {
        self.machine_type = machine_type;
        self
    }

    #[must_use]
    pub fn with_dip_switches(mut self, dip_switches: DipSwitches) -> Self {
        self.dip_switches = dip_switches;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_per_frame_follow_raster() {
        assert_eq!(MachineType::Ntsc.cycles_per_frame(), 65 * 261);
        assert_eq!(MachineType::Pal.cycles_per_frame(), 71 * 312);
    }

    #[test]
    fn frame_duration_near_nominal_rate() {
        let ntsc = MachineType::Ntsc.frame_duration();
        assert!(ntsc > Duration::from_micros(16_500) && ntsc < Duration::from_micros(16_700));
        let pal = MachineType::Pal.frame_duration();
        assert!(pal > Duration::from_micros(19_900) && pal < Duration::from_micros(20_100));
    }

    #[test]
    fn viewport_is_four_by_three() {
        assert_eq!(MachineType::Ntsc.viewport(), (336, 252));
        assert_eq!(MachineType::Pal.viewport(), (360, 272));
    }

    #[test]
    fn visible_area_fits_inside_frame() {
        for machine_type in [MachineType::Ntsc, MachineType::Pal] {
            assert!(
                machine_type.horizontal_offset() + machine_type.visible_width()
                    <= machine_type.total_width()
            );
            assert!(
                machine_type.vertical_offset() + machine_type.visible_height()
                    <= machine_type.total_height()
            );
        }
    }

    #[test]
    fn default_dip_pattern() {
        assert_eq!(DipSwitches::default().bits(), 0x02);
        let switches = DipSwitches {
            lives: 0xFF,
            bonus_life: true,
        };
        assert_eq!(switches.bits(), 0x07);
    }
}
