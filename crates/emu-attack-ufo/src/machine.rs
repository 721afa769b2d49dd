//! Top-level Attack UFO board.
//!
//! # Cycle loop
//!
//! Each cycle, in this order:
//! 1. VIC: fetch and emit four pixels (or only move the beam when the
//!    frame is being skipped)
//! 2. CPU: one bus access
//! 3. PIA: tick (nothing is clocked on this board)
//!
//! A frame is nominally `(total_width / 4) * total_height` cycles: 16,965
//! NTSC, 22,152 PAL. A text window cut off by the right edge of the line
//! adds a cycle to each of its lines.

use emu_core::{Bus, Cpu, Observable, Tickable, Value};
use mos_6502::Mos6502;
use mos_vic_6560::{FrameReader, Vic};

use crate::bus::AttackUfoBus;
use crate::config::{MachineConfig, MachineType};
use crate::error::MachineError;
use crate::input::{Button, Controls, Joystick};
use crate::memory::Memory;

/// Attack UFO arcade board.
#[derive(Debug)]
pub struct AttackUfo {
    cpu: Mos6502,
    bus: AttackUfoBus,
    machine_type: MachineType,
    paused: bool,
    /// Cycles stepped since construction.
    cycles: u64,
    /// Frames completed since construction.
    frame_count: u64,
}

impl AttackUfo {
    /// Build the board and run the CPU reset sequence. The machine starts
    /// paused.
    pub fn new(config: &MachineConfig) -> Result<Self, MachineError> {
        let memory = Memory::attack_ufo(&config.roms)?;
        let vic = Vic::new(config.machine_type.raster_timing());
        let controls = Controls {
            joystick: Joystick::new(),
            dip_switches: config.dip_switches,
        };
        let mut bus = AttackUfoBus::new(memory, vic, controls);

        let mut cpu = Mos6502::new();
        cpu.power_on(&mut bus);
        log::info!(
            "{} board ready, reset vector ${:04X}, DIP switches {:#04X}",
            config.machine_type.name(),
            cpu.pc(),
            config.dip_switches.bits()
        );

        Ok(Self {
            cpu,
            bus,
            machine_type: config.machine_type,
            paused: true,
            cycles: 0,
            frame_count: 0,
        })
    }

    /// Step every chip by one cycle, drawing. Runs even while paused.
    pub fn step_cycle(&mut self) -> bool {
        self.step(true)
    }

    /// Step every chip by one cycle without drawing.
    pub fn step_cycle_skipping_render(&mut self) -> bool {
        self.step(false)
    }

    fn step(&mut self, render: bool) -> bool {
        let complete = self.bus.step_vic(render);
        self.cpu.tick(&mut self.bus);
        self.bus.pia.tick();
        self.cycles += 1;
        if complete {
            self.frame_count += 1;
        }
        complete
    }

    /// Step until the VIC completes a frame. Does nothing while paused.
    ///
    /// Returns the number of cycles run.
    pub fn run_until_frame(&mut self, skip_render: bool) -> u64 {
        if self.paused {
            return 0;
        }
        let start = self.cycles;
        while !self.step(!skip_render) {}
        self.cycles - start
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            log::debug!("{}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Warm reset: CPU, VIC beam and PIA registers. RAM survives.
    pub fn reset(&mut self) {
        self.bus.vic.reset();
        self.bus.pia.reset();
        self.cpu.power_on(&mut self.bus);
        log::debug!("reset, PC ${:04X}", self.cpu.pc());
    }

    /// Latest completed frame, if one completed since the last call.
    #[must_use]
    pub fn take_ready_frame(&self) -> Option<Vec<u32>> {
        self.frames().take_ready()
    }

    /// Frame handle that can be moved to another thread.
    #[must_use]
    pub fn frames(&self) -> FrameReader {
        self.bus.vic.frames()
    }

    /// Joystick handle that can be moved to another thread.
    #[must_use]
    pub fn joystick(&self) -> Joystick {
        self.bus.controls.joystick.clone()
    }

    pub fn press(&self, button: Button) {
        self.bus.controls.joystick.press(button);
    }

    pub fn release(&self, button: Button) {
        self.bus.controls.joystick.release(button);
    }

    #[must_use]
    pub fn machine_type(&self) -> MachineType {
        self.machine_type
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Read an address without side effects.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.bus.peek(address)
    }

    /// Write an address as the CPU would.
    pub fn poke(&mut self, address: u16, value: u8) {
        self.bus.write(address, value);
    }

    #[must_use]
    pub fn cpu(&self) -> &Mos6502 {
        &self.cpu
    }

    #[must_use]
    pub fn vic(&self) -> &Vic {
        &self.bus.vic
    }

    /// Frame currently being drawn (not yet complete).
    #[must_use]
    pub fn frame_in_progress(&self) -> &[u32] {
        self.bus.vic.frame_in_progress()
    }
}

impl Tickable for AttackUfo {
    fn tick(&mut self) {
        self.step(true);
    }
}

impl Observable for AttackUfo {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("cpu.") {
            self.cpu.query(rest)
        } else if let Some(rest) = path.strip_prefix("vic.") {
            self.bus.vic.query(rest)
        } else if let Some(rest) = path.strip_prefix("pia.") {
            self.bus.pia.query(rest)
        } else if let Some(rest) = path.strip_prefix("joystick.") {
            match rest {
                "signals" => Some(self.bus.controls.joystick.signals().into()),
                "dip" => Some(self.bus.controls.dip_switches.bits().into()),
                _ => None,
            }
        } else if let Some(rest) = path.strip_prefix("memory.") {
            let address = rest.strip_prefix('$').unwrap_or(rest);
            u16::from_str_radix(address, 16)
                .ok()
                .map(|a| self.peek(a).into())
        } else {
            match path {
                "machine.type" => Some(self.machine_type.name().into()),
                "machine.paused" => Some(self.paused.into()),
                "machine.cycles" => Some(self.cycles.into()),
                "machine.frames" => Some(self.frame_count.into()),
                _ => None,
            }
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "cpu.<6502_paths>",
            "vic.<vic_paths>",
            "pia.<pia_paths>",
            "joystick.signals",
            "joystick.dip",
            "memory.<hex_address>",
            "machine.type",
            "machine.paused",
            "machine.cycles",
            "machine.frames",
        ]
    }
}
