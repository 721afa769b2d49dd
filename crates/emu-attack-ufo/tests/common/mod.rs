//! Synthetic ROM set shared by the integration tests.
//!
//! The program sets up a 2x1 text window at the top left, writes one
//! glyph row into character RAM, then loops forever.

#![allow(dead_code)]

use emu_attack_ufo::{AttackUfo, MachineConfig, MachineType, RomSet};

pub const PROGRAM_START: u16 = 0x2000;

/// Background colour index written to R15.
pub const BACKGROUND: usize = 15;

fn program() -> Vec<u8> {
    let mut code = vec![
        0xA9, 0x05, 0x8D, 0x01, 0x10, // LDA #$05 / STA $1001  top = line 10
        0xA9, 0x82, 0x8D, 0x02, 0x10, // LDA #$82 / STA $1002  2 columns, colour $0600
        0xA9, 0x02, 0x8D, 0x03, 0x10, // LDA #$02 / STA $1003  1 row of 8x8
        0xA9, 0x07, 0x8D, 0x05, 0x10, // LDA #$07 / STA $1005  video $0200, chars $1C00
        0xA9, 0xF0, 0x8D, 0x0F, 0x10, // LDA #$F0 / STA $100F  background 15
        0xA9, 0x01, // LDA #$01
        0x8D, 0x00, 0x02, // STA $0200  screen code 1
        0x8D, 0x00, 0x06, // STA $0600  white
        0xA9, 0xFF, // LDA #$FF
        0x8D, 0x08, 0x1C, // STA $1C08  glyph 1, row 0
    ];
    let here = PROGRAM_START + code.len() as u16;
    code.extend([0x4C, here as u8, (here >> 8) as u8]); // JMP *
    code
}

/// 8 KiB ROM image with the program at `$2000` and the reset vector
/// pointing at it.
pub fn rom_image() -> Vec<u8> {
    let mut image = vec![0xEA; 0x2000];
    let code = program();
    image[..code.len()].copy_from_slice(&code);
    image[0x1FFC] = PROGRAM_START as u8;
    image[0x1FFD] = (PROGRAM_START >> 8) as u8;
    image
}

pub fn roms() -> RomSet {
    RomSet::from_contiguous(&rom_image()).expect("synthetic ROM set is valid")
}

pub fn machine(machine_type: MachineType) -> AttackUfo {
    let config = MachineConfig::new(roms()).with_machine_type(machine_type);
    AttackUfo::new(&config).expect("machine builds")
}
