//! The board's 14-bit bus.
//!
//! Every CPU access is masked to 14 bits and dispatched on the owner
//! table: storage chips go to [`Memory`], the VIC and PIA windows to the
//! chips themselves.

use emu_core::Bus;
use mos_pia_6520::Pia6520;
use mos_vic_6560::Vic;

use crate::input::Controls;
use crate::memory::{ADDRESS_MASK, Chip, Memory};

/// CPU-side view of the board.
#[derive(Debug)]
pub struct AttackUfoBus {
    pub memory: Memory,
    pub vic: Vic,
    pub pia: Pia6520,
    pub controls: Controls,
}

impl AttackUfoBus {
    #[must_use]
    pub fn new(memory: Memory, vic: Vic, controls: Controls) -> Self {
        Self {
            memory,
            vic,
            pia: Pia6520::new(),
            controls,
        }
    }

    /// One VIC cycle. The VIC fetches through storage only.
    pub fn step_vic(&mut self, render: bool) -> bool {
        if render {
            self.vic.step(&self.memory)
        } else {
            self.vic.step_skipping_render()
        }
    }

    /// Read without side effects.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        let address = address & ADDRESS_MASK;
        match self.memory.owner(address) {
            Chip::Vic => self.vic.read(address),
            Chip::Pia => self.pia.peek(address, &self.controls),
            _ => self.memory.read(address),
        }
    }
}

impl Bus for AttackUfoBus {
    fn read(&mut self, address: u16) -> u8 {
        let address = address & ADDRESS_MASK;
        match self.memory.owner(address) {
            Chip::Vic => self.vic.read(address),
            Chip::Pia => self.pia.read(address, &self.controls),
            _ => self.memory.read(address),
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        let address = address & ADDRESS_MASK;
        match self.memory.owner(address) {
            Chip::Vic => self.vic.write(address, value),
            Chip::Pia => self.pia.write(address, value),
            _ => self.memory.write(address, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MachineType;
    use crate::input::Button;
    use crate::roms::{ROM_COUNT, ROM_SIZE, RomSet};

    fn bus() -> AttackUfoBus {
        let roms = RomSet::from_images(vec![vec![0xEA; ROM_SIZE]; ROM_COUNT])
            .expect("valid ROM set");
        let memory = Memory::attack_ufo(&roms).expect("board map is valid");
        let vic = Vic::new(MachineType::Ntsc.raster_timing());
        AttackUfoBus::new(memory, vic, Controls::default())
    }

    #[test]
    fn vic_registers_through_bus_and_mirrors() {
        let mut bus = bus();
        bus.write(0x900F, 0xFF);
        assert_eq!(bus.read(0x100F), 0xFF);
        assert_eq!(bus.vic.background_colour(), mos_vic_6560::PALETTE[15]);
    }

    #[test]
    fn pia_reads_controls() {
        let mut bus = bus();
        // Port B: direction register all inputs, then select data.
        bus.write(0x1403, 0x04);
        assert_eq!(bus.read(0x1402), 0x7F);
        bus.controls.joystick.press(Button::Right);
        assert_eq!(bus.read(0x1402), 0x77);

        bus.write(0x1401, 0x04);
        assert_eq!(bus.read(0x1400), 0x82);
        assert_eq!(bus.peek(0x1400), 0x82);
    }

    #[test]
    fn storage_writes_reach_memory() {
        let mut bus = bus();
        bus.write(0x1C10, 0x3C);
        assert_eq!(bus.read(0x5C10), 0x3C);
        assert_eq!(bus.peek(0x1C10), 0x3C);
        bus.write(0x2000, 0x00);
        assert_eq!(bus.read(0x2000), 0xEA);
    }
}
