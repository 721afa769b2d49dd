//! 6502 execution engine.
//!
//! Each `tick()` performs exactly one bus access. `cycle` counts the cycles
//! spent on the current instruction after the opcode fetch, starting at 1.
//! For memory operands `access_cycle` records the cycle on which the
//! effective address became valid; the data cycles are numbered from there.

use emu_core::{Bus, Cpu, Observable, Value};

use crate::decode::{Access, Instruction, Mode, Op, decode};
use crate::flags::{C, D, I, N, V, Z};
use crate::{Registers, Status};

const NMI_VECTOR: u16 = 0xFFFA;
const RESET_VECTOR: u16 = 0xFFFC;
const IRQ_VECTOR: u16 = 0xFFFE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    FetchOpcode,
    Execute,
}

/// The MOS 6502 CPU.
#[derive(Debug)]
pub struct Mos6502 {
    pub regs: Registers,
    state: State,
    opcode: u8,
    instruction: Instruction,
    cycle: u8,
    access_cycle: u8,
    /// Effective address being built or used.
    addr: u16,
    /// Operand latch for RMW and JMP (ind).
    data: u8,
    /// Zero-page pointer for indexed-indirect modes.
    pointer: u8,
    page_crossed: bool,
    /// Vector read by the current BRK sequence.
    vector: u16,
    /// The BRK sequence was started by IRQ/NMI rather than the opcode.
    hardware_interrupt: bool,
    nmi_pending: bool,
    irq_pending: bool,
    total_cycles: u64,
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new()
    }
}

impl Mos6502 {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: Registers::new(),
            state: State::FetchOpcode,
            opcode: 0,
            instruction: Instruction::UNDEFINED,
            cycle: 0,
            access_cycle: 0,
            addr: 0,
            data: 0,
            pointer: 0,
            page_crossed: false,
            vector: IRQ_VECTOR,
            hardware_interrupt: false,
            nmi_pending: false,
            irq_pending: false,
            total_cycles: 0,
        }
    }

    /// Reset, then load PC from the reset vector at `$FFFC/$FFFD`.
    ///
    /// The vector reads go through `bus`, so mirrored address spaces see
    /// them at their mirrored location.
    pub fn power_on<B: Bus>(&mut self, bus: &mut B) {
        self.reset();
        let lo = bus.read(RESET_VECTOR);
        let hi = bus.read(RESET_VECTOR + 1);
        self.regs.pc = u16::from_le_bytes([lo, hi]);
        log::debug!("6502 reset, PC=${:04X}", self.regs.pc);
    }

    /// True between instructions, when the next tick fetches an opcode.
    #[must_use]
    pub fn is_instruction_complete(&self) -> bool {
        self.state == State::FetchOpcode
    }

    /// Cycles executed since construction.
    #[must_use]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Opcode byte of the instruction in progress (or last executed).
    #[must_use]
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    fn execute_cycle<B: Bus>(&mut self, bus: &mut B) {
        self.total_cycles += 1;

        match self.state {
            State::FetchOpcode => {
                if self.nmi_pending {
                    self.nmi_pending = false;
                    self.begin_interrupt(bus, NMI_VECTOR);
                    return;
                }
                if self.irq_pending && !self.regs.p.is_set(I) {
                    self.irq_pending = false;
                    self.begin_interrupt(bus, IRQ_VECTOR);
                    return;
                }

                self.opcode = self.fetch_operand(bus);
                self.instruction = decode(self.opcode).unwrap_or_else(|| {
                    log::trace!(
                        "undefined opcode ${:02X} at ${:04X}, running as NOP",
                        self.opcode,
                        self.regs.pc.wrapping_sub(1)
                    );
                    Instruction::UNDEFINED
                });
                self.hardware_interrupt = false;
                self.vector = IRQ_VECTOR;
                self.cycle = 1;
                self.state = State::Execute;
            }
            State::Execute => self.execute(bus),
        }
    }

    /// IRQ and NMI run the BRK sequence with the fetched opcode discarded.
    fn begin_interrupt<B: Bus>(&mut self, bus: &mut B, vector: u16) {
        let _ = bus.read(self.regs.pc);
        self.instruction = Instruction {
            op: Op::Brk,
            mode: Mode::Implied,
        };
        self.hardware_interrupt = true;
        self.vector = vector;
        self.cycle = 1;
        self.state = State::Execute;
    }

    fn finish(&mut self) {
        self.state = State::FetchOpcode;
        self.cycle = 0;
        self.access_cycle = 0;
    }

    fn fetch_operand<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    fn execute<B: Bus>(&mut self, bus: &mut B) {
        let Instruction { op, mode } = self.instruction;
        match mode {
            Mode::Implied | Mode::Accumulator => self.implied(bus, op),
            Mode::Immediate => {
                let value = self.fetch_operand(bus);
                self.read_op(op, value);
                self.finish();
            }
            Mode::Relative => self.branch(bus, op),
            Mode::Indirect => self.jmp_indirect(bus),
            Mode::Absolute if op == Op::Jmp => self.jmp_absolute(bus),
            Mode::Absolute if op == Op::Jsr => self.jsr(bus),
            _ => self.memory_operand(bus, op, mode),
        }
    }

    // ------------------------------------------------------------------
    // Memory operands
    // ------------------------------------------------------------------

    fn memory_operand<B: Bus>(&mut self, bus: &mut B, op: Op, mode: Mode) {
        let access = op.access();

        if self.access_cycle == 0 {
            if self.resolve_address(bus, mode, access) {
                self.access_cycle = self.cycle + 1;
            }
            self.cycle += 1;
            return;
        }

        match (access, self.cycle - self.access_cycle) {
            (Access::Read, _) => {
                let value = bus.read(self.addr);
                self.read_op(op, value);
                self.finish();
            }
            (Access::Write, _) => {
                let value = self.store_value(op);
                bus.write(self.addr, value);
                self.finish();
            }
            (Access::Modify, 0) => {
                self.data = bus.read(self.addr);
                self.cycle += 1;
            }
            (Access::Modify, 1) => {
                // NMOS parts write the unmodified value back first.
                bus.write(self.addr, self.data);
                self.data = self.modify_op(op, self.data);
                self.cycle += 1;
            }
            (Access::Modify, _) => {
                bus.write(self.addr, self.data);
                self.finish();
            }
        }
    }

    /// One address-calculation cycle. Returns true once `addr` is final.
    fn resolve_address<B: Bus>(&mut self, bus: &mut B, mode: Mode, access: Access) -> bool {
        match (mode, self.cycle) {
            (Mode::ZeroPage, _) => {
                self.addr = u16::from(self.fetch_operand(bus));
                true
            }

            (Mode::ZeroPageX | Mode::ZeroPageY, 1) => {
                self.pointer = self.fetch_operand(bus);
                false
            }
            (Mode::ZeroPageX | Mode::ZeroPageY, _) => {
                let _ = bus.read(u16::from(self.pointer));
                let index = if mode == Mode::ZeroPageX {
                    self.regs.x
                } else {
                    self.regs.y
                };
                self.addr = u16::from(self.pointer.wrapping_add(index));
                true
            }

            (Mode::Absolute | Mode::AbsoluteX | Mode::AbsoluteY, 1) => {
                self.addr = u16::from(self.fetch_operand(bus));
                false
            }
            (Mode::Absolute, _) => {
                self.addr |= u16::from(self.fetch_operand(bus)) << 8;
                true
            }
            (Mode::AbsoluteX | Mode::AbsoluteY, 2) => {
                let hi = self.fetch_operand(bus);
                let index = if mode == Mode::AbsoluteX {
                    self.regs.x
                } else {
                    self.regs.y
                };
                self.index_within_page(hi, index, access)
            }
            (Mode::AbsoluteX | Mode::AbsoluteY, _) => {
                self.fix_page(bus);
                true
            }

            (Mode::IndirectX | Mode::IndirectY, 1) => {
                self.pointer = self.fetch_operand(bus);
                false
            }
            (Mode::IndirectX, 2) => {
                let _ = bus.read(u16::from(self.pointer));
                self.pointer = self.pointer.wrapping_add(self.regs.x);
                false
            }
            (Mode::IndirectX, 3) => {
                self.addr = u16::from(bus.read(u16::from(self.pointer)));
                false
            }
            (Mode::IndirectX, _) => {
                let hi = bus.read(u16::from(self.pointer.wrapping_add(1)));
                self.addr |= u16::from(hi) << 8;
                true
            }
            (Mode::IndirectY, 2) => {
                self.addr = u16::from(bus.read(u16::from(self.pointer)));
                false
            }
            (Mode::IndirectY, 3) => {
                let hi = bus.read(u16::from(self.pointer.wrapping_add(1)));
                self.index_within_page(hi, self.regs.y, access)
            }
            (Mode::IndirectY, _) => {
                self.fix_page(bus);
                true
            }

            // Remaining modes never take a memory operand.
            _ => true,
        }
    }

    /// Add the index to the low byte only. Reads that stay in the page are
    /// done; everything else needs the fix-up cycle.
    fn index_within_page(&mut self, hi: u8, index: u8, access: Access) -> bool {
        let (lo, crossed) = (self.addr as u8).overflowing_add(index);
        self.addr = u16::from_le_bytes([lo, hi]);
        self.page_crossed = crossed;
        access == Access::Read && !crossed
    }

    /// Dummy read at the unfixed address, then carry into the high byte.
    fn fix_page<B: Bus>(&mut self, bus: &mut B) {
        let _ = bus.read(self.addr);
        if self.page_crossed {
            self.addr = self.addr.wrapping_add(0x100);
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    fn read_op(&mut self, op: Op, value: u8) {
        match op {
            Op::Lda => {
                self.regs.a = value;
                self.regs.p.update_nz(value);
            }
            Op::Ldx => {
                self.regs.x = value;
                self.regs.p.update_nz(value);
            }
            Op::Ldy => {
                self.regs.y = value;
                self.regs.p.update_nz(value);
            }
            Op::Ora => {
                self.regs.a |= value;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::And => {
                self.regs.a &= value;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Eor => {
                self.regs.a ^= value;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Adc => self.adc(value),
            Op::Sbc => self.sbc(value),
            Op::Cmp => self.compare(self.regs.a, value),
            Op::Cpx => self.compare(self.regs.x, value),
            Op::Cpy => self.compare(self.regs.y, value),
            Op::Bit => {
                self.regs.p.set_if(Z, self.regs.a & value == 0);
                self.regs.p.set_if(N, value & 0x80 != 0);
                self.regs.p.set_if(V, value & 0x40 != 0);
            }
            _ => {}
        }
    }

    fn store_value(&self, op: Op) -> u8 {
        match op {
            Op::Stx => self.regs.x,
            Op::Sty => self.regs.y,
            _ => self.regs.a,
        }
    }

    fn modify_op(&mut self, op: Op, value: u8) -> u8 {
        let carry_in = self.regs.p.is_set(C);
        let result = match op {
            Op::Asl => {
                self.regs.p.set_if(C, value & 0x80 != 0);
                value << 1
            }
            Op::Lsr => {
                self.regs.p.set_if(C, value & 0x01 != 0);
                value >> 1
            }
            Op::Rol => {
                self.regs.p.set_if(C, value & 0x80 != 0);
                (value << 1) | u8::from(carry_in)
            }
            Op::Ror => {
                self.regs.p.set_if(C, value & 0x01 != 0);
                (value >> 1) | (u8::from(carry_in) << 7)
            }
            Op::Inc => value.wrapping_add(1),
            Op::Dec => value.wrapping_sub(1),
            _ => return value,
        };
        self.regs.p.update_nz(result);
        result
    }

    fn compare(&mut self, register: u8, value: u8) {
        self.regs.p.set_if(C, register >= value);
        self.regs.p.update_nz(register.wrapping_sub(value));
    }

    fn adc(&mut self, value: u8) {
        if self.regs.p.is_set(D) {
            self.adc_decimal(value);
        } else {
            self.adc_binary(value);
        }
    }

    fn adc_binary(&mut self, value: u8) {
        let a = self.regs.a;
        let sum = u16::from(a) + u16::from(value) + u16::from(self.regs.p.is_set(C));
        let result = sum as u8;
        self.regs.p.set_if(C, sum > 0xFF);
        self.regs.p.set_if(V, (a ^ result) & (value ^ result) & 0x80 != 0);
        self.regs.a = result;
        self.regs.p.update_nz(result);
    }

    /// NMOS decimal add: Z from the binary sum, N and V from the
    /// intermediate high nibble before the final adjust.
    fn adc_decimal(&mut self, value: u8) {
        let a = self.regs.a;
        let carry = u16::from(self.regs.p.is_set(C));

        let mut lo = u16::from(a & 0x0F) + u16::from(value & 0x0F) + carry;
        let mut hi = u16::from(a & 0xF0) + u16::from(value & 0xF0);
        if lo > 0x09 {
            lo += 0x06;
        }
        if lo > 0x0F {
            hi += 0x10;
        }

        let binary = (u16::from(a) + u16::from(value) + carry) as u8;
        self.regs.p.set_if(Z, binary == 0);
        self.regs.p.set_if(N, hi & 0x80 != 0);
        self.regs
            .p
            .set_if(V, !(a ^ value) & (a ^ hi as u8) & 0x80 != 0);

        if hi > 0x90 {
            hi += 0x60;
        }
        self.regs.p.set_if(C, hi > 0xFF);
        self.regs.a = (hi as u8 & 0xF0) | (lo as u8 & 0x0F);
    }

    fn sbc(&mut self, value: u8) {
        if !self.regs.p.is_set(D) {
            self.adc_binary(!value);
            return;
        }

        // Flags come from the binary subtraction.
        let a = self.regs.a;
        let borrow = i16::from(!self.regs.p.is_set(C));
        self.adc_binary(!value);

        let mut lo = i16::from(a & 0x0F) - i16::from(value & 0x0F) - borrow;
        let mut hi = i16::from(a >> 4) - i16::from(value >> 4);
        if lo < 0 {
            lo -= 6;
            hi -= 1;
        }
        if hi < 0 {
            hi -= 6;
        }
        self.regs.a = ((hi << 4) as u8) | ((lo & 0x0F) as u8);
    }

    // ------------------------------------------------------------------
    // Implied, stack and control flow
    // ------------------------------------------------------------------

    fn implied<B: Bus>(&mut self, bus: &mut B, op: Op) {
        match op {
            Op::Brk => self.brk(bus),
            Op::Rti => self.rti(bus),
            Op::Rts => self.rts(bus),
            Op::Pha | Op::Php => self.push_register(bus, op),
            Op::Pla | Op::Plp => self.pull_register(bus, op),
            _ => {
                let _ = bus.read(self.regs.pc);
                self.register_op(op);
                self.finish();
            }
        }
    }

    fn register_op(&mut self, op: Op) {
        match op {
            Op::Clc => self.regs.p.set_if(C, false),
            Op::Sec => self.regs.p.set_if(C, true),
            Op::Cli => self.regs.p.set_if(I, false),
            Op::Sei => self.regs.p.set_if(I, true),
            Op::Cld => self.regs.p.set_if(D, false),
            Op::Sed => self.regs.p.set_if(D, true),
            Op::Clv => self.regs.p.set_if(V, false),
            Op::Tax => {
                self.regs.x = self.regs.a;
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Tay => {
                self.regs.y = self.regs.a;
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Txa => {
                self.regs.a = self.regs.x;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Tya => {
                self.regs.a = self.regs.y;
                self.regs.p.update_nz(self.regs.a);
            }
            Op::Tsx => {
                self.regs.x = self.regs.s;
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Txs => self.regs.s = self.regs.x,
            Op::Inx => {
                self.regs.x = self.regs.x.wrapping_add(1);
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Iny => {
                self.regs.y = self.regs.y.wrapping_add(1);
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Dex => {
                self.regs.x = self.regs.x.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.x);
            }
            Op::Dey => {
                self.regs.y = self.regs.y.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.y);
            }
            Op::Asl | Op::Lsr | Op::Rol | Op::Ror => {
                self.regs.a = self.modify_op(op, self.regs.a);
            }
            _ => {}
        }
    }

    fn brk<B: Bus>(&mut self, bus: &mut B) {
        match self.cycle {
            1 => {
                let _ = bus.read(self.regs.pc);
                if !self.hardware_interrupt {
                    // Signature byte is skipped.
                    self.regs.pc = self.regs.pc.wrapping_add(1);
                }
            }
            2 => {
                let addr = self.regs.push();
                bus.write(addr, (self.regs.pc >> 8) as u8);
            }
            3 => {
                let addr = self.regs.push();
                bus.write(addr, self.regs.pc as u8);
            }
            4 => {
                let status = if self.hardware_interrupt {
                    self.regs.p.pushed_by_interrupt()
                } else {
                    self.regs.p.pushed_by_software()
                };
                let addr = self.regs.push();
                bus.write(addr, status);
            }
            5 => {
                self.addr = u16::from(bus.read(self.vector));
                self.regs.p.set_if(I, true);
            }
            _ => {
                let hi = bus.read(self.vector.wrapping_add(1));
                self.regs.pc = self.addr | (u16::from(hi) << 8);
                self.finish();
                return;
            }
        }
        self.cycle += 1;
    }

    fn rti<B: Bus>(&mut self, bus: &mut B) {
        match self.cycle {
            1 => {
                let _ = bus.read(self.regs.pc);
            }
            2 => {
                let _ = bus.read(self.regs.stack_addr());
            }
            3 => {
                let addr = self.regs.pop();
                self.regs.p = Status::from_stack(bus.read(addr));
            }
            4 => {
                let addr = self.regs.pop();
                self.addr = u16::from(bus.read(addr));
            }
            _ => {
                let addr = self.regs.pop();
                self.regs.pc = self.addr | (u16::from(bus.read(addr)) << 8);
                self.finish();
                return;
            }
        }
        self.cycle += 1;
    }

    fn rts<B: Bus>(&mut self, bus: &mut B) {
        match self.cycle {
            1 => {
                let _ = bus.read(self.regs.pc);
            }
            2 => {
                let _ = bus.read(self.regs.stack_addr());
            }
            3 => {
                let addr = self.regs.pop();
                self.addr = u16::from(bus.read(addr));
            }
            4 => {
                let addr = self.regs.pop();
                self.addr |= u16::from(bus.read(addr)) << 8;
            }
            _ => {
                // Return address on the stack is one short.
                let _ = bus.read(self.addr);
                self.regs.pc = self.addr.wrapping_add(1);
                self.finish();
                return;
            }
        }
        self.cycle += 1;
    }

    fn push_register<B: Bus>(&mut self, bus: &mut B, op: Op) {
        if self.cycle == 1 {
            let _ = bus.read(self.regs.pc);
            self.cycle = 2;
            return;
        }
        let value = if op == Op::Php {
            self.regs.p.pushed_by_software()
        } else {
            self.regs.a
        };
        let addr = self.regs.push();
        bus.write(addr, value);
        self.finish();
    }

    fn pull_register<B: Bus>(&mut self, bus: &mut B, op: Op) {
        match self.cycle {
            1 => {
                let _ = bus.read(self.regs.pc);
                self.cycle = 2;
            }
            2 => {
                let _ = bus.read(self.regs.stack_addr());
                self.cycle = 3;
            }
            _ => {
                let addr = self.regs.pop();
                let value = bus.read(addr);
                if op == Op::Plp {
                    self.regs.p = Status::from_stack(value);
                } else {
                    self.regs.a = value;
                    self.regs.p.update_nz(value);
                }
                self.finish();
            }
        }
    }

    fn jsr<B: Bus>(&mut self, bus: &mut B) {
        match self.cycle {
            1 => self.addr = u16::from(self.fetch_operand(bus)),
            2 => {
                let _ = bus.read(self.regs.stack_addr());
            }
            3 => {
                let addr = self.regs.push();
                bus.write(addr, (self.regs.pc >> 8) as u8);
            }
            4 => {
                let addr = self.regs.push();
                bus.write(addr, self.regs.pc as u8);
            }
            _ => {
                let hi = bus.read(self.regs.pc);
                self.regs.pc = self.addr | (u16::from(hi) << 8);
                self.finish();
                return;
            }
        }
        self.cycle += 1;
    }

    fn jmp_absolute<B: Bus>(&mut self, bus: &mut B) {
        if self.cycle == 1 {
            self.addr = u16::from(self.fetch_operand(bus));
            self.cycle = 2;
        } else {
            let hi = bus.read(self.regs.pc);
            self.regs.pc = self.addr | (u16::from(hi) << 8);
            self.finish();
        }
    }

    fn jmp_indirect<B: Bus>(&mut self, bus: &mut B) {
        match self.cycle {
            1 => self.addr = u16::from(self.fetch_operand(bus)),
            2 => self.addr |= u16::from(self.fetch_operand(bus)) << 8,
            3 => self.data = bus.read(self.addr),
            _ => {
                // The pointer's high byte is fetched without carrying into
                // the page: JMP ($10FF) reads $10FF and $1000.
                let hi_addr = (self.addr & 0xFF00) | (self.addr.wrapping_add(1) & 0x00FF);
                let hi = bus.read(hi_addr);
                self.regs.pc = u16::from_le_bytes([self.data, hi]);
                self.finish();
                return;
            }
        }
        self.cycle += 1;
    }

    fn branch_taken(&self, op: Op) -> bool {
        let p = self.regs.p;
        match op {
            Op::Bpl => !p.is_set(N),
            Op::Bmi => p.is_set(N),
            Op::Bvc => !p.is_set(V),
            Op::Bvs => p.is_set(V),
            Op::Bcc => !p.is_set(C),
            Op::Bcs => p.is_set(C),
            Op::Bne => !p.is_set(Z),
            Op::Beq => p.is_set(Z),
            _ => false,
        }
    }

    fn branch<B: Bus>(&mut self, bus: &mut B, op: Op) {
        match self.cycle {
            1 => {
                self.data = self.fetch_operand(bus);
                if self.branch_taken(op) {
                    self.cycle = 2;
                } else {
                    self.finish();
                }
            }
            2 => {
                let _ = bus.read(self.regs.pc);
                let target = self.regs.pc.wrapping_add_signed(i16::from(self.data as i8));
                if (target ^ self.regs.pc) & 0xFF00 == 0 {
                    self.regs.pc = target;
                    self.finish();
                } else {
                    self.addr = target;
                    self.cycle = 3;
                }
            }
            _ => {
                // Read from the target's offset in the old page.
                let _ = bus.read((self.regs.pc & 0xFF00) | (self.addr & 0x00FF));
                self.regs.pc = self.addr;
                self.finish();
            }
        }
    }
}

impl Cpu for Mos6502 {
    type Registers = Registers;

    fn tick<B: Bus>(&mut self, bus: &mut B) {
        self.execute_cycle(bus);
    }

    fn pc(&self) -> u32 {
        u32::from(self.regs.pc)
    }

    fn registers(&self) -> Self::Registers {
        self.regs
    }

    /// Undefined opcodes run as NOPs, so the core never jams.
    fn is_halted(&self) -> bool {
        false
    }

    fn interrupt(&mut self) -> bool {
        if self.regs.p.is_set(I) {
            false
        } else {
            self.irq_pending = true;
            true
        }
    }

    fn nmi(&mut self) {
        self.nmi_pending = true;
    }

    fn reset(&mut self) {
        let total_cycles = self.total_cycles;
        *self = Self::new();
        self.total_cycles = total_cycles;
    }
}

impl Observable for Mos6502 {
    fn query(&self, path: &str) -> Option<Value> {
        match path {
            "pc" => Some(self.regs.pc.into()),
            "a" => Some(self.regs.a.into()),
            "x" => Some(self.regs.x.into()),
            "y" => Some(self.regs.y.into()),
            "s" => Some(self.regs.s.into()),
            "p" => Some(self.regs.p.0.into()),
            "flags.c" => Some(self.regs.p.is_set(C).into()),
            "flags.z" => Some(self.regs.p.is_set(Z).into()),
            "flags.i" => Some(self.regs.p.is_set(I).into()),
            "flags.d" => Some(self.regs.p.is_set(D).into()),
            "flags.v" => Some(self.regs.p.is_set(V).into()),
            "flags.n" => Some(self.regs.p.is_set(N).into()),
            "opcode" => Some(self.opcode.into()),
            "instruction" => Some(self.instruction.op.mnemonic().into()),
            "cycle" => Some(self.total_cycles.into()),
            "halted" => Some(self.is_halted().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "pc",
            "a",
            "x",
            "y",
            "s",
            "p",
            "flags.c",
            "flags.z",
            "flags.i",
            "flags.d",
            "flags.v",
            "flags.n",
            "opcode",
            "instruction",
            "cycle",
            "halted",
        ]
    }
}
