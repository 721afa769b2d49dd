//! MOS 6520 Peripheral Interface Adapter (PIA).
//!
//! Two 8-bit ports, each with an output register, a data direction
//! register and a control register. The data direction register and the
//! output register share one address; bit 2 of the control register picks
//! which of the two that address reaches.
//!
//! # Registers ($0-$3)
//!
//! | Reg | Name      | Description                                   |
//! |-----|-----------|-----------------------------------------------|
//! | $0  | ORA/DDRA  | Port A data, or direction when CRA bit 2 = 0  |
//! | $1  | CRA       | Port A control                                |
//! | $2  | ORB/DDRB  | Port B data, or direction when CRB bit 2 = 0  |
//! | $3  | CRB       | Port B control                                |
//!
//! # Control register
//!
//! | Bits | Meaning                                    |
//! |------|--------------------------------------------|
//! | 7    | IRQ1 flag (read-only)                      |
//! | 6    | IRQ2 flag (read-only)                      |
//! | 5-3  | C2 control                                 |
//! | 2    | 1 = data register, 0 = direction register |
//! | 1-0  | C1 control                                 |
//!
//! Neither control line raises interrupts on the boards this crate targets,
//! so the C1/C2 fields are stored and read back but have no side effects.

use emu_core::{Observable, Tickable, Value};

/// Levels driven onto the port pins from outside the chip.
pub trait PortInput {
    fn port_a_pins(&self) -> u8;
    fn port_b_pins(&self) -> u8;
}

/// Which port a register address belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortId {
    A,
    B,
}

/// One half of the PIA.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Port {
    /// Output register.
    pub output: u8,
    /// Last value returned by a data register read.
    pub input_latch: u8,
    /// Pin state as last driven by the output register.
    pub pins: u8,
    /// Data direction register (1 = output).
    pub ddr: u8,
    /// C1 control field (CR bits 1-0).
    pub c1_control: u8,
    /// C2 control field (CR bits 5-3).
    pub c2_control: u8,
    /// CR bit 2: data register selected instead of direction register.
    pub output_access: bool,
    pub irq1: bool,
    pub irq2: bool,
}

impl Port {
    fn write_data(&mut self, value: u8) {
        if self.output_access {
            self.output = value;
        } else {
            self.ddr = value;
        }
        // Inputs keep whatever was on the pin; outputs follow the register.
        self.pins = (self.pins & !self.ddr) | (self.output & self.ddr);
    }

    fn data_value(&self, external: u8) -> u8 {
        if self.output_access {
            external & !self.ddr
        } else {
            self.ddr
        }
    }

    fn read_data(&mut self, external: u8) -> u8 {
        let value = self.data_value(external);
        if self.output_access {
            self.input_latch = value;
        }
        value
    }

    fn write_control(&mut self, value: u8) {
        self.c1_control = value & 0x03;
        self.output_access = value & 0x04 != 0;
        self.c2_control = (value & 0x38) >> 3;
    }

    #[must_use]
    pub fn control(&self) -> u8 {
        (u8::from(self.irq1) << 7)
            | (u8::from(self.irq2) << 6)
            | ((self.c2_control << 3) & 0x38)
            | (u8::from(self.output_access) << 2)
            | (self.c1_control & 0x03)
    }
}

/// MOS 6520 PIA.
#[derive(Debug, Clone, Default)]
pub struct Pia6520 {
    a: Port,
    b: Port,
}

impl Pia6520 {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every register, as the RES line does.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Read a register. Only the low two address bits are decoded.
    pub fn read(&mut self, reg: u16, input: &impl PortInput) -> u8 {
        match reg & 0x03 {
            0 => self.a.read_data(input.port_a_pins()),
            1 => self.a.control(),
            2 => self.b.read_data(input.port_b_pins()),
            _ => self.b.control(),
        }
    }

    /// Read a register without touching the input latch.
    #[must_use]
    pub fn peek(&self, reg: u16, input: &impl PortInput) -> u8 {
        match reg & 0x03 {
            0 => self.a.data_value(input.port_a_pins()),
            1 => self.a.control(),
            2 => self.b.data_value(input.port_b_pins()),
            _ => self.b.control(),
        }
    }

    /// Write a register. Only the low two address bits are decoded.
    pub fn write(&mut self, reg: u16, value: u8) {
        match reg & 0x03 {
            0 => self.a.write_data(value),
            1 => self.a.write_control(value),
            2 => self.b.write_data(value),
            _ => self.b.write_control(value),
        }
    }

    #[must_use]
    pub fn port(&self, id: PortId) -> &Port {
        match id {
            PortId::A => &self.a,
            PortId::B => &self.b,
        }
    }
}

impl Tickable for Pia6520 {
    /// No timers or edge-triggered inputs are wired, so a cycle changes
    /// nothing. The machine still ticks it every cycle.
    fn tick(&mut self) {}
}

impl Observable for Pia6520 {
    fn query(&self, path: &str) -> Option<Value> {
        let (port, field) = match path.split_once('.')? {
            ("a", field) => (&self.a, field),
            ("b", field) => (&self.b, field),
            _ => return None,
        };
        match field {
            "output" => Some(port.output.into()),
            "ddr" => Some(port.ddr.into()),
            "pins" => Some(port.pins.into()),
            "latch" => Some(port.input_latch.into()),
            "control" => Some(port.control().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "a.output", "a.ddr", "a.pins", "a.latch", "a.control", "b.output", "b.ddr", "b.pins",
            "b.latch", "b.control",
        ]
    }
}
