//! Instruction behaviour and cycle counts.

use emu_core::{Cpu, SimpleBus};
use mos_6502::{Mos6502, flags};

/// Run one complete instruction, returning the cycles it took.
fn run_instruction(cpu: &mut Mos6502, bus: &mut SimpleBus) -> u32 {
    cpu.tick(bus);
    let mut cycles = 1;
    for _ in 0..20 {
        if cpu.is_instruction_complete() {
            return cycles;
        }
        cpu.tick(bus);
        cycles += 1;
    }
    panic!("Instruction did not complete within 20 cycles");
}

/// Load a program at $0200 and set PC there.
fn setup_program(bus: &mut SimpleBus, cpu: &mut Mos6502, program: &[u8]) {
    bus.load(0x0200, program);
    cpu.regs.pc = 0x0200;
}

#[test]
fn test_stack_pha_pla() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();

    let program = [
        0xA9, 0x42, // LDA #$42
        0xA2, 0xFF, // LDX #$FF
        0x9A, // TXS
        0x48, // PHA
        0xA9, 0x00, // LDA #$00
        0x68, // PLA
    ];
    setup_program(&mut bus, &mut cpu, &program);

    let cycles: Vec<u32> = (0..6)
        .map(|_| run_instruction(&mut cpu, &mut bus))
        .collect();

    assert_eq!(cycles, vec![2, 2, 2, 3, 2, 4]);
    assert_eq!(cpu.regs.a, 0x42, "PLA should restore A");
    assert_eq!(cpu.regs.s, 0xFF, "SP should be back to $FF after PLA");
    assert_eq!(bus.peek(0x01FF), 0x42);
}

#[test]
fn test_php_pushes_break_and_plp_ignores_it() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();

    let program = [
        0x38, // SEC
        0x08, // PHP
        0x18, // CLC
        0x28, // PLP
    ];
    setup_program(&mut bus, &mut cpu, &program);

    for _ in 0..4 {
        run_instruction(&mut cpu, &mut bus);
    }

    assert_eq!(bus.peek(0x01FD) & (flags::B | flags::U), flags::B | flags::U);
    assert!(cpu.regs.p.is_set(flags::C), "PLP should restore carry flag");
    assert!(!cpu.regs.p.is_set(flags::B));
    assert_eq!(cpu.regs.s, 0xFD);
}

#[test]
fn test_brk_and_rti() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();

    bus.load(0xFFFE, &[0x00, 0x03]);
    bus.load(0x0300, &[0x40]); // RTI
    setup_program(&mut bus, &mut cpu, &[0x00, 0xEA, 0xEA]);
    cpu.regs.p.set_if(flags::I, false);

    assert_eq!(run_instruction(&mut cpu, &mut bus), 7);
    assert_eq!(cpu.regs.pc, 0x0300);
    assert!(cpu.regs.p.is_set(flags::I));

    // Return address skips the signature byte.
    assert_eq!(bus.peek(0x01FD), 0x02);
    assert_eq!(bus.peek(0x01FC), 0x02);
    assert_ne!(bus.peek(0x01FB) & flags::B, 0);

    assert_eq!(run_instruction(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0202);
    assert!(!cpu.regs.p.is_set(flags::I));
}

#[test]
fn test_jsr_rts() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();

    bus.load(0x0300, &[0x60]); // RTS
    setup_program(&mut bus, &mut cpu, &[0x20, 0x00, 0x03, 0xEA]);

    assert_eq!(run_instruction(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0300);
    // JSR pushes the address of its last byte.
    assert_eq!(bus.peek(0x01FD), 0x02);
    assert_eq!(bus.peek(0x01FC), 0x02);

    assert_eq!(run_instruction(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0203);
}

#[test]
fn test_branch_cycle_counts() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();

    // Not taken: 2 cycles.
    setup_program(&mut bus, &mut cpu, &[0xD0, 0x10]); // BNE +16
    cpu.regs.p.set_if(flags::Z, true);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    assert_eq!(cpu.regs.pc, 0x0202);

    // Taken, same page: 3 cycles.
    setup_program(&mut bus, &mut cpu, &[0xF0, 0x10]); // BEQ +16
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0212);

    // Taken across a page: 4 cycles.
    bus.load(0x02F0, &[0xF0, 0x20]);
    cpu.regs.pc = 0x02F0;
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0312);

    // Backwards.
    bus.load(0x0310, &[0xF0, 0xFC]);
    cpu.regs.pc = 0x0310;
    run_instruction(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.pc, 0x030E);
}

#[test]
fn test_indexed_page_cross_costs_a_cycle_for_reads_only() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();
    bus.poke(0x1100, 0x99);

    setup_program(&mut bus, &mut cpu, &[0xBD, 0x01, 0x10]); // LDA $1001,X
    cpu.regs.x = 0x01;
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);

    setup_program(&mut bus, &mut cpu, &[0xBD, 0xFF, 0x10]); // LDA $10FF,X
    bus.clear_accesses();
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5);
    assert_eq!(cpu.regs.a, 0x99);
    // The fix-up cycle reads from the un-carried address.
    assert_eq!(bus.accesses()[3].0, 0x1000);

    setup_program(&mut bus, &mut cpu, &[0x9D, 0x01, 0x10]); // STA $1001,X
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5);

    setup_program(&mut bus, &mut cpu, &[0xFE, 0x01, 0x10]); // INC $1001,X
    assert_eq!(run_instruction(&mut cpu, &mut bus), 7);
}

#[test]
fn test_indirect_modes() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();

    bus.load(0x0024, &[0x00, 0x11]); // pointer -> $1100
    bus.poke(0x1100, 0x5A);
    bus.poke(0x11FF, 0xA5);

    setup_program(&mut bus, &mut cpu, &[0xA1, 0x20]); // LDA ($20,X)
    cpu.regs.x = 0x04;
    assert_eq!(run_instruction(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.regs.a, 0x5A);

    setup_program(&mut bus, &mut cpu, &[0xB1, 0x24]); // LDA ($24),Y
    cpu.regs.y = 0xFF;
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5);
    assert_eq!(cpu.regs.a, 0xA5);

    setup_program(&mut bus, &mut cpu, &[0x91, 0x24]); // STA ($24),Y
    assert_eq!(run_instruction(&mut cpu, &mut bus), 6);
}

#[test]
fn test_zero_page_index_wraps() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();
    bus.poke(0x000F, 0x77);
    bus.poke(0x010F, 0x11);

    setup_program(&mut bus, &mut cpu, &[0xB5, 0x10]); // LDA $10,X
    cpu.regs.x = 0xFF;
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(cpu.regs.a, 0x77);
}

#[test]
fn test_jmp_indirect_page_wrap() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();
    bus.poke(0x10FF, 0x34);
    bus.poke(0x1000, 0x12);
    bus.poke(0x1100, 0xEE);

    setup_program(&mut bus, &mut cpu, &[0x6C, 0xFF, 0x10]);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5);
    assert_eq!(cpu.regs.pc, 0x1234);
}

#[test]
fn test_decimal_arithmetic() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();

    let program = [
        0xF8, // SED
        0x18, // CLC
        0xA9, 0x15, // LDA #$15
        0x69, 0x27, // ADC #$27
    ];
    setup_program(&mut bus, &mut cpu, &program);
    for _ in 0..4 {
        run_instruction(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs.a, 0x42);
    assert!(!cpu.regs.p.is_set(flags::C));

    let program = [
        0x38, // SEC
        0xA9, 0x99, // LDA #$99
        0x69, 0x01, // ADC #$01
    ];
    setup_program(&mut bus, &mut cpu, &program);
    for _ in 0..3 {
        run_instruction(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs.a, 0x01);
    assert!(cpu.regs.p.is_set(flags::C));

    let program = [
        0x38, // SEC
        0xA9, 0x42, // LDA #$42
        0xE9, 0x15, // SBC #$15
    ];
    setup_program(&mut bus, &mut cpu, &program);
    for _ in 0..3 {
        run_instruction(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs.a, 0x27);
    assert!(cpu.regs.p.is_set(flags::C));
}

#[test]
fn test_binary_overflow() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();

    setup_program(&mut bus, &mut cpu, &[0x18, 0xA9, 0x50, 0x69, 0x50]);
    for _ in 0..3 {
        run_instruction(&mut cpu, &mut bus);
    }
    assert_eq!(cpu.regs.a, 0xA0);
    assert!(cpu.regs.p.is_set(flags::V));
    assert!(cpu.regs.p.is_set(flags::N));
    assert!(!cpu.regs.p.is_set(flags::C));
}

#[test]
fn test_irq_respects_interrupt_disable() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();
    bus.load(0xFFFE, &[0x00, 0x04]);
    setup_program(&mut bus, &mut cpu, &[0xEA, 0x58, 0xEA]); // NOP; CLI; NOP

    assert!(!cpu.interrupt(), "I is set after reset");

    run_instruction(&mut cpu, &mut bus);
    run_instruction(&mut cpu, &mut bus); // CLI
    assert!(cpu.interrupt());

    assert_eq!(run_instruction(&mut cpu, &mut bus), 7);
    assert_eq!(cpu.regs.pc, 0x0400);
    // Pushed status has B clear; return address is the next instruction.
    assert_eq!(bus.peek(0x01FB) & flags::B, 0);
    assert_eq!(bus.peek(0x01FC), 0x02);
}

#[test]
fn test_nmi_uses_its_own_vector() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();
    bus.load(0xFFFA, &[0x00, 0x05]);
    setup_program(&mut bus, &mut cpu, &[0xEA]);

    cpu.nmi();
    assert_eq!(run_instruction(&mut cpu, &mut bus), 7);
    assert_eq!(cpu.regs.pc, 0x0500);
    assert_eq!(bus.peek(0x01FC), 0x00);
    assert_eq!(bus.peek(0x01FD), 0x02);
}

#[test]
fn test_undefined_opcodes_never_halt() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new();
    // KIL on NMOS silicon; here just another NOP.
    setup_program(&mut bus, &mut cpu, &[0x02, 0x12, 0x22, 0xA9, 0x07]);
    for _ in 0..3 {
        assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    }
    run_instruction(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x07);
    assert!(!cpu.is_halted());
}
