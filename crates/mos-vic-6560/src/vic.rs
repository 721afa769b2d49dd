//! Raster generation and register file.
//!
//! # Timing
//!
//! One call to [`Vic::step`] is one machine cycle, four pixel clocks. A
//! line is nominally `total_width / 4` cycles and a frame `total_height`
//! lines, so a frame nominally takes `(total_width / 4) * total_height`
//! steps. A text window whose right edge runs past the end of the line
//! leaves a partial cell there: that cell still costs two cycles for four
//! pixels, which stretches each of its lines by one cycle.
//!
//! Inside the text window two cycles make one cell: the screen-code cycle
//! fetches the cell index and colour nibble without moving the beam, then
//! the character cycle fetches the bitmap row and emits all eight pixels,
//! advancing the beam twice. Outside the window each cycle emits four
//! border pixels. Lines `0..=LAST_BLANK_LINE` emit nothing.

use std::sync::Arc;

use emu_core::{Observable, Value};

use crate::frame::{FrameExchange, FrameReader};
use crate::palette::PALETTE;

/// Base of the register window.
pub const REGISTER_BASE: u16 = 0x1000;

/// Address read while the beam is outside the text window.
pub const DEFAULT_FETCH_ADDRESS: u16 = 0x1814;

/// Last line of the vertical blanking band.
pub const LAST_BLANK_LINE: u16 = 9;

/// Video matrix bases, indexed by R5 bits 7-4 and R2 bit 7.
pub const VIDEO_MEMORY_TABLE: [u16; 32] = {
    let mut table = [0; 32];
    let mut i = 0;
    while i < 32 {
        table[i] = i as u16 * 0x200;
        i += 1;
    }
    table
};

/// Character generator bases, indexed by R5 bits 3-0.
pub const CHAR_MEMORY_TABLE: [u16; 16] = {
    let mut table = [0; 16];
    let mut i = 0;
    while i < 16 {
        table[i] = i as u16 * 0x400;
        i += 1;
    }
    table
};

/// The VIC's 14-bit view of memory.
pub trait VideoMemory {
    /// Read without side effects. `address` is already masked to 14 bits.
    fn vic_read(&self, address: u16) -> u8;
}

/// Raster size in pixels, including blanking and border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterTiming {
    /// Pixels per line, a multiple of four.
    pub total_width: u16,
    /// Lines per frame, blanking band included.
    pub total_height: u16,
}

impl RasterTiming {
    /// Cycles per line outside the text window.
    #[must_use]
    pub const fn cycles_per_line(self) -> u32 {
        self.total_width as u32 / 4
    }

    /// Nominal cycles per frame.
    #[must_use]
    pub const fn cycles_per_frame(self) -> u32 {
        self.cycles_per_line() * self.total_height as u32
    }

    /// Size of a frame buffer.
    #[must_use]
    pub const fn pixels_per_frame(self) -> usize {
        self.total_width as usize * self.total_height as usize
    }
}

/// What the next text-window cycle fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    /// Screen code and colour nibble for the next cell.
    ScreenCode,
    /// Bitmap row for the cell fetched last cycle.
    CharacterData,
}

/// MOS 6560-family VIC.
#[derive(Debug)]
pub struct Vic {
    /// Register file as last written, with R3 bit 7 and R4 tracking the
    /// raster line.
    regs: [u8; 16],
    timing: RasterTiming,

    /// Pixel position within the line.
    horizontal_counter: u16,
    /// Raster line.
    vertical_counter: u16,
    /// Next write position in the active frame.
    pixel_counter: usize,
    /// Cell index of the next screen-code fetch.
    video_matrix_counter: u16,
    /// Cell index of the first column of the current text row.
    row_start: u16,
    /// Line within the current character row.
    cell_depth_counter: u16,
    /// Fetch due on the next text-window cycle.
    fetch: Fetch,
    /// Last byte fetched: screen code, bitmap row or border dummy read.
    cell_data: u8,
    /// Foreground colour of the cell being drawn.
    cell_colour: u32,

    /// Video matrix base (R5 bits 7-4, R2 bit 7).
    video_memory_start: u16,
    /// Colour RAM base: `$0600` when R2 is above `$80`, else `$0400`.
    colour_memory_start: u16,
    /// Character generator base (R5 bits 3-0).
    char_memory_start: u16,
    /// `char_memory_start + cell_depth_counter`.
    char_depth_start: u16,

    /// Text columns (R2 bits 6-0).
    columns: u16,
    /// Text rows (R3 bits 6-1).
    rows: u16,
    /// Character height in lines: 8, or 16 with R3 bit 0.
    char_size: u16,
    /// log2 of `char_size`, for the bitmap address.
    char_size_shift: u16,
    /// Left edge in pixels (R0 x 4).
    text_left: u16,
    /// `text_left + text_width`, exclusive.
    text_right: u16,
    /// Top edge in lines (R1 x 2).
    text_top: u16,
    /// `text_top + text_height`, exclusive.
    text_bottom: u16,
    /// `columns * 8`.
    text_width: u16,
    /// `rows * char_size`.
    text_height: u16,

    /// R15 bits 7-4.
    background_index: u8,
    background_colour: u32,
    /// Always palette 0; the border bits are not wired.
    border_colour: u32,
    /// R14 bits 7-4.
    auxiliary_colour: u32,
    /// Background, border, foreground slot and auxiliary, in that order.
    multicolour: [u32; 4],
    /// 15 minus R14 bits 3-0.
    master_volume: u8,

    /// Frame being drawn.
    active: Vec<u32>,
    /// Hand-off slot shared with every [`FrameReader`].
    exchange: Arc<FrameExchange>,
}

impl Vic {
    /// A VIC with all registers clear and the beam at the top left.
    #[must_use]
    pub fn new(timing: RasterTiming) -> Self {
        let pixels = timing.pixels_per_frame();
        Self {
            regs: [0; 16],
            timing,
            horizontal_counter: 0,
            vertical_counter: 0,
            pixel_counter: 0,
            video_matrix_counter: 0,
            row_start: 0,
            cell_depth_counter: 0,
            fetch: Fetch::ScreenCode,
            cell_data: 0,
            cell_colour: PALETTE[0],
            video_memory_start: VIDEO_MEMORY_TABLE[0],
            colour_memory_start: 0x0400,
            char_memory_start: CHAR_MEMORY_TABLE[0],
            char_depth_start: CHAR_MEMORY_TABLE[0],
            columns: 0,
            rows: 0,
            char_size: 8,
            char_size_shift: 3,
            text_left: 0,
            text_right: 0,
            text_top: 0,
            text_bottom: 0,
            text_width: 0,
            text_height: 0,
            background_index: 0,
            background_colour: PALETTE[0],
            border_colour: PALETTE[0],
            auxiliary_colour: PALETTE[0],
            multicolour: [PALETTE[0]; 4],
            master_volume: 15,
            active: vec![0; pixels],
            exchange: FrameExchange::new(pixels),
        }
    }

    /// Return the beam to the top left. Registers keep their values; any
    /// frame waiting in the exchange is dropped.
    pub fn reset(&mut self) {
        self.horizontal_counter = 0;
        self.vertical_counter = 0;
        self.pixel_counter = 0;
        self.video_matrix_counter = 0;
        self.row_start = 0;
        self.cell_depth_counter = 0;
        self.char_depth_start = self.char_memory_start;
        self.fetch = Fetch::ScreenCode;
        self.cell_data = 0;
        self.update_raster_registers();
        self.exchange.discard();
    }

    /// Handle for taking completed frames from another thread.
    #[must_use]
    pub fn frames(&self) -> FrameReader {
        FrameReader::new(Arc::clone(&self.exchange))
    }

    /// Raster size this chip was built with.
    #[must_use]
    pub fn timing(&self) -> RasterTiming {
        self.timing
    }

    /// The frame currently being drawn.
    #[must_use]
    pub fn frame_in_progress(&self) -> &[u32] {
        &self.active
    }

    /// Current raster line, 0 at the top of the blanking band.
    #[must_use]
    pub fn raster_line(&self) -> u16 {
        self.vertical_counter
    }

    /// Pixel position of the beam within the line.
    #[must_use]
    pub fn horizontal_counter(&self) -> u16 {
        self.horizontal_counter
    }

    /// Background colour as ARGB32.
    #[must_use]
    pub fn background_colour(&self) -> u32 {
        self.background_colour
    }

    /// Border colour as ARGB32.
    #[must_use]
    pub fn border_colour(&self) -> u32 {
        self.border_colour
    }

    /// Auxiliary colour as ARGB32.
    #[must_use]
    pub fn auxiliary_colour(&self) -> u32 {
        self.auxiliary_colour
    }

    /// Multicolour slots: background, border, foreground, auxiliary.
    #[must_use]
    pub fn multicolour(&self) -> [u32; 4] {
        self.multicolour
    }

    /// 15 minus the R14 volume nibble.
    #[must_use]
    pub fn master_volume(&self) -> u8 {
        self.master_volume
    }

    /// Video matrix base address.
    #[must_use]
    pub fn video_memory_start(&self) -> u16 {
        self.video_memory_start
    }

    /// Colour RAM base address.
    #[must_use]
    pub fn colour_memory_start(&self) -> u16 {
        self.colour_memory_start
    }

    /// Character generator base address.
    #[must_use]
    pub fn char_memory_start(&self) -> u16 {
        self.char_memory_start
    }

    /// Character height in lines (8 or 16).
    #[must_use]
    pub fn char_size(&self) -> u16 {
        self.char_size
    }

    /// Text window as `(left, top, right, bottom)`, right and bottom
    /// exclusive.
    #[must_use]
    pub fn text_window(&self) -> (u16, u16, u16, u16) {
        (self.text_left, self.text_top, self.text_right, self.text_bottom)
    }

    fn register_index(address: u16) -> Option<usize> {
        let decoded = address & 0xFF0F;
        (decoded & 0xFFF0 == REGISTER_BASE).then_some(usize::from(decoded & 0x0F))
    }

    /// Read a register. Addresses that do not decode to the register window
    /// return the last fetched cell data.
    #[must_use]
    pub fn read(&self, address: u16) -> u8 {
        Self::register_index(address).map_or(self.cell_data, |reg| self.regs[reg])
    }

    /// Write a register and recompute whatever derives from it.
    pub fn write(&mut self, address: u16, value: u8) {
        let Some(reg) = Self::register_index(address) else {
            return;
        };
        log::trace!("VIC R{reg:X} <- ${value:02X}");
        match reg {
            0x0 => {
                self.text_left = u16::from(value & 0x7F) << 2;
                self.text_right = self.text_left + self.text_width;
            }
            0x1 => {
                self.text_top = u16::from(value) << 1;
                self.text_bottom = self.text_top + self.text_height;
            }
            0x2 => {
                self.columns = u16::from(value & 0x7F);
                self.text_width = self.columns << 3;
                self.text_right = self.text_left + self.text_width;
                // Bit 7 alone leaves colour RAM at $0400.
                self.colour_memory_start = if value > 0x80 { 0x0600 } else { 0x0400 };
                self.video_memory_start = Self::video_base(self.regs[5], value);
            }
            0x3 => {
                (self.char_size, self.char_size_shift) =
                    if value & 0x01 != 0 { (16, 4) } else { (8, 3) };
                self.rows = u16::from((value & 0x7E) >> 1);
                self.text_height = self.char_size * self.rows;
                self.text_bottom = self.text_top + self.text_height;
            }
            // Raster, light pen and paddles.
            0x4 | 0x6..=0x9 => return,
            0x5 => {
                self.video_memory_start = Self::video_base(value, self.regs[2]);
                self.char_memory_start = CHAR_MEMORY_TABLE[usize::from(value & 0x0F)];
                self.char_depth_start = self.char_memory_start + self.cell_depth_counter;
            }
            0xE => {
                self.auxiliary_colour = PALETTE[usize::from(value >> 4)];
                self.multicolour[3] = self.auxiliary_colour;
                self.master_volume = 15 - (value & 0x0F);
            }
            0xF => {
                // Border colour bits are not wired on this board.
                self.border_colour = PALETTE[0];
                self.background_index = value >> 4;
                self.background_colour = PALETTE[usize::from(self.background_index)];
                self.multicolour[0] = self.background_colour;
                self.multicolour[1] = self.border_colour;
            }
            // Voices: stored, no sound output.
            _ => {}
        }
        self.regs[reg] = value;
    }

    fn video_base(reg5: u8, reg2: u8) -> u16 {
        VIDEO_MEMORY_TABLE[usize::from(((reg5 & 0xF0) >> 3) | ((reg2 & 0x80) >> 7))]
    }

    fn in_text_window(&self) -> bool {
        (self.text_top..self.text_bottom).contains(&self.vertical_counter)
            && (self.text_left..self.text_right).contains(&self.horizontal_counter)
    }

    fn plot(&mut self, colour: u32) {
        if let Some(pixel) = self.active.get_mut(self.pixel_counter) {
            *pixel = colour;
        }
        self.pixel_counter += 1;
    }

    fn plot_bits(&mut self, bits: u8) {
        for shift in (0..4).rev() {
            let colour = if bits & (1 << shift) == 0 {
                self.background_colour
            } else {
                self.cell_colour
            };
            self.plot(colour);
        }
    }

    /// Run one cycle, drawing into the active frame. Returns true when this
    /// cycle completed a frame, which has then been handed to the exchange.
    pub fn step<M: VideoMemory>(&mut self, memory: &M) -> bool {
        if self.vertical_counter > LAST_BLANK_LINE {
            if self.in_text_window() {
                match self.fetch {
                    Fetch::ScreenCode => {
                        let offset = self.video_matrix_counter;
                        self.cell_data =
                            memory.vic_read(self.video_memory_start.wrapping_add(offset) & 0x3FFF);
                        let colour = memory
                            .vic_read(self.colour_memory_start.wrapping_add(offset) & 0x3FFF);
                        self.cell_colour = PALETTE[usize::from(colour & 0x0F)];
                        self.video_matrix_counter = self.video_matrix_counter.wrapping_add(1);
                        self.fetch = Fetch::CharacterData;
                        return false;
                    }
                    Fetch::CharacterData => {
                        let address = self
                            .char_depth_start
                            .wrapping_add(u16::from(self.cell_data) << self.char_size_shift);
                        self.cell_data = memory.vic_read(address & 0x3FFF);
                        self.plot_bits(self.cell_data >> 4);
                        self.horizontal_counter += 4;
                        if self.horizontal_counter < self.timing.total_width {
                            self.plot_bits(self.cell_data & 0x0F);
                        }
                        self.fetch = Fetch::ScreenCode;
                    }
                }
            } else {
                self.cell_data = memory.vic_read(DEFAULT_FETCH_ADDRESS);
                for _ in 0..4 {
                    self.plot(self.border_colour);
                }
            }
        }
        self.advance(true)
    }

    /// Run one cycle without drawing. Only the beam position and the raster
    /// registers move; the active frame is left untouched and nothing is
    /// handed to the exchange.
    pub fn step_skipping_render(&mut self) -> bool {
        self.advance(false)
    }

    fn advance(&mut self, render: bool) -> bool {
        self.horizontal_counter += 4;
        if self.horizontal_counter < self.timing.total_width {
            return false;
        }
        self.horizontal_counter = 0;
        self.vertical_counter += 1;

        let complete = if self.vertical_counter >= self.timing.total_height {
            self.vertical_counter = 0;
            if render {
                self.pixel_counter = 0;
                self.video_matrix_counter = 0;
                self.row_start = 0;
                self.cell_depth_counter = 0;
                self.char_depth_start = self.char_memory_start;
                self.exchange.publish(&mut self.active);
            }
            true
        } else {
            if render && self.video_matrix_counter > 0 {
                self.next_cell_line();
            }
            false
        };

        self.update_raster_registers();
        complete
    }

    fn next_cell_line(&mut self) {
        self.cell_depth_counter += 1;
        if self.cell_depth_counter >= self.char_size {
            self.cell_depth_counter = 0;
            self.video_matrix_counter = self.row_start.wrapping_add(self.columns);
            self.row_start = self.video_matrix_counter;
            self.char_depth_start = self.char_memory_start;
        } else {
            self.video_matrix_counter = self.row_start;
            self.char_depth_start = self.char_memory_start + self.cell_depth_counter;
        }
    }

    fn update_raster_registers(&mut self) {
        self.regs[4] = (self.vertical_counter >> 1) as u8;
        if self.vertical_counter & 1 == 0 {
            self.regs[3] &= 0x7F;
        } else {
            self.regs[3] |= 0x80;
        }
    }
}

impl Observable for Vic {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(index) = path.strip_prefix("reg.") {
            let index = usize::from_str_radix(index, 16).ok()?;
            return self.regs.get(index).map(|&r| r.into());
        }
        match path {
            "raster.line" => Some(self.vertical_counter.into()),
            "raster.horizontal" => Some(self.horizontal_counter.into()),
            "matrix.counter" => Some(self.video_matrix_counter.into()),
            "matrix.row_start" => Some(self.row_start.into()),
            "cell.depth" => Some(self.cell_depth_counter.into()),
            "cell.data" => Some(self.cell_data.into()),
            "fetch" => Some(
                match self.fetch {
                    Fetch::ScreenCode => "screen_code",
                    Fetch::CharacterData => "character_data",
                }
                .into(),
            ),
            "memory.video" => Some(self.video_memory_start.into()),
            "memory.colour" => Some(self.colour_memory_start.into()),
            "memory.char" => Some(self.char_memory_start.into()),
            "text.columns" => Some(self.columns.into()),
            "text.rows" => Some(self.rows.into()),
            "text.char_size" => Some(self.char_size.into()),
            "text.left" => Some(self.text_left.into()),
            "text.top" => Some(self.text_top.into()),
            "text.right" => Some(self.text_right.into()),
            "text.bottom" => Some(self.text_bottom.into()),
            "colour.background" => Some(self.background_index.into()),
            "colour.background_argb" => Some(self.background_colour.into()),
            "colour.border_argb" => Some(self.border_colour.into()),
            "colour.auxiliary_argb" => Some(self.auxiliary_colour.into()),
            "volume" => Some(self.master_volume.into()),
            "regs" => Some(self.regs.to_vec().into()),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "raster.line",
            "raster.horizontal",
            "matrix.counter",
            "matrix.row_start",
            "cell.depth",
            "cell.data",
            "fetch",
            "memory.video",
            "memory.colour",
            "memory.char",
            "text.columns",
            "text.rows",
            "text.char_size",
            "text.left",
            "text.top",
            "text.right",
            "text.bottom",
            "colour.background",
            "colour.background_argb",
            "colour.border_argb",
            "colour.auxiliary_argb",
            "volume",
            "regs",
            "reg.0",
            "reg.f",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: RasterTiming = RasterTiming {
        total_width: 64,
        total_height: 20,
    };

    struct Flat(Vec<u8>);

    impl Flat {
        fn new() -> Self {
            Self(vec![0; 0x4000])
        }
    }

    impl VideoMemory for Flat {
        fn vic_read(&self, address: u16) -> u8 {
            self.0[usize::from(address)]
        }
    }

    fn run_frame(vic: &mut Vic, memory: &Flat) -> u32 {
        let mut cycles = 1;
        while !vic.step(memory) {
            cycles += 1;
        }
        cycles
    }

    #[test]
    fn background_register_sets_colours() {
        let mut vic = Vic::new(SMALL);
        vic.write(0x100F, 0xFF);
        assert_eq!(vic.background_colour(), PALETTE[15]);
        assert_eq!(vic.border_colour(), PALETTE[0]);
        assert_eq!(vic.multicolour()[0], PALETTE[15]);
        assert_eq!(vic.multicolour()[1], PALETTE[0]);
        assert_eq!(vic.read(0x100F), 0xFF);
    }

    #[test]
    fn auxiliary_register_sets_colour_and_volume() {
        let mut vic = Vic::new(SMALL);
        vic.write(0x100E, 0x35);
        assert_eq!(vic.auxiliary_colour(), PALETTE[3]);
        assert_eq!(vic.multicolour()[3], PALETTE[3]);
        assert_eq!(vic.master_volume(), 10);
    }

    #[test]
    fn read_only_registers_ignore_writes() {
        let mut vic = Vic::new(SMALL);
        for reg in [0x1004, 0x1006, 0x1007, 0x1008, 0x1009] {
            vic.write(reg, 0xAA);
            assert_eq!(vic.read(reg), 0, "register {reg:#06X}");
        }
        vic.write(0x100B, 0x42);
        assert_eq!(vic.read(0x100B), 0x42);
    }

    #[test]
    fn geometry_registers() {
        let mut vic = Vic::new(SMALL);
        vic.write(0x1000, 0x85);
        vic.write(0x1001, 0x10);
        vic.write(0x1002, 0x16);
        vic.write(0x1003, 0x2F);
        assert_eq!(vic.char_size(), 16);
        assert_eq!(vic.text_window(), (20, 32, 20 + 22 * 8, 32 + 23 * 16));
        assert_eq!(vic.colour_memory_start(), 0x0400);
    }

    #[test]
    fn memory_base_registers() {
        let mut vic = Vic::new(SMALL);
        vic.write(0x1005, 0x3C);
        assert_eq!(vic.video_memory_start(), 0x0C00);
        assert_eq!(vic.char_memory_start(), 0x3000);

        vic.write(0x1002, 0x81);
        assert_eq!(vic.video_memory_start(), 0x0E00);
        assert_eq!(vic.colour_memory_start(), 0x0600);
    }

    #[test]
    fn colour_memory_needs_more_than_bit7() {
        let mut vic = Vic::new(SMALL);
        vic.write(0x1002, 0x80);
        assert_eq!(vic.video_memory_start(), 0x0200);
        assert_eq!(vic.colour_memory_start(), 0x0400);
        assert_eq!(vic.query("memory.colour"), Some(Value::U16(0x0400)));
        vic.write(0x1002, 0x7F);
        assert_eq!(vic.colour_memory_start(), 0x0400);
    }

    #[test]
    fn unmapped_read_returns_cell_data() {
        let mut memory = Flat::new();
        memory.0[usize::from(DEFAULT_FETCH_ADDRESS)] = 0x5A;
        let mut vic = Vic::new(SMALL);
        run_frame(&mut vic, &memory);
        vic.step(&memory);
        assert_eq!(vic.read(0x1100), 0x5A);
        assert_eq!(vic.read(0x0000), 0x5A);
    }

    #[test]
    fn frame_takes_cycles_per_frame_steps() {
        let memory = Flat::new();
        let mut vic = Vic::new(SMALL);
        let reader = vic.frames();
        assert_eq!(run_frame(&mut vic, &memory), SMALL.cycles_per_frame());
        assert!(reader.take_ready().is_some());
        assert_eq!(run_frame(&mut vic, &memory), SMALL.cycles_per_frame());
    }

    #[test]
    fn skipped_frame_moves_beam_only() {
        let mut vic = Vic::new(SMALL);
        let reader = vic.frames();
        let before = vic.frame_in_progress().to_vec();
        let completions = (0..SMALL.cycles_per_frame())
            .filter(|_| vic.step_skipping_render())
            .count();
        assert_eq!(completions, 1);
        assert!(!vic.step_skipping_render());
        assert_eq!(reader.take_ready(), None);
        assert_eq!(vic.frame_in_progress(), before.as_slice());
    }

    #[test]
    fn raster_registers_follow_line() {
        let mut vic = Vic::new(SMALL);
        for _ in 0..SMALL.cycles_per_line() * 5 {
            vic.step_skipping_render();
        }
        assert_eq!(vic.raster_line(), 5);
        assert_eq!(vic.read(0x1004), 2);
        assert_eq!(vic.read(0x1003) & 0x80, 0x80);
    }

    #[test]
    fn text_window_draws_cells() {
        let mut memory = Flat::new();
        memory.0[0x0200] = 1;
        memory.0[0x0201] = 2;
        memory.0[0x0600] = 1;
        memory.0[0x0601] = 2;
        memory.0[0x3C08] = 0b1010_0101;
        memory.0[0x3C10] = 0xFF;

        let mut vic = Vic::new(SMALL);
        let reader = vic.frames();
        vic.write(0x1001, 5);
        vic.write(0x1002, 0x82);
        vic.write(0x1003, 0x02);
        vic.write(0x1005, 0x0F);
        vic.write(0x100F, 0x60);
        run_frame(&mut vic, &memory);

        let Some(frame) = reader.take_ready() else {
            panic!("no frame after a full frame of cycles");
        };
        let (w, b, r, k) = (PALETTE[1], PALETTE[6], PALETTE[2], PALETTE[0]);
        // Blanking lines emit nothing, so line 10 starts the buffer.
        assert_eq!(&frame[0..8], &[w, b, w, b, b, w, b, w]);
        assert_eq!(&frame[8..16], &[r; 8]);
        assert!(frame[16..64].iter().all(|&p| p == k));
        // Second glyph line is blank.
        assert_eq!(&frame[64..80], &[b; 16]);
        // Border below the window.
        assert!(frame[8 * 64..10 * 64].iter().all(|&p| p == k));
    }

    #[test]
    fn double_height_rows_advance_matrix() {
        const TALL: RasterTiming = RasterTiming {
            total_width: 64,
            total_height: 48,
        };
        let mut memory = Flat::new();
        memory.0[0x0200] = 1;
        memory.0[0x0201] = 2;
        memory.0[0x0600] = 1;
        memory.0[0x0601] = 2;
        // Every line of glyph 1 is the left half, every line of glyph 2
        // the right half.
        memory.0[0x3C10..0x3C20].fill(0xF0);
        memory.0[0x3C20..0x3C30].fill(0x0F);

        let mut vic = Vic::new(TALL);
        let reader = vic.frames();
        vic.write(0x1001, 5);
        vic.write(0x1002, 0x81);
        vic.write(0x1003, 0x05);
        vic.write(0x1005, 0x0F);
        vic.write(0x100F, 0x60);
        assert_eq!(vic.char_size(), 16);
        assert_eq!(vic.text_window(), (0, 10, 8, 42));
        run_frame(&mut vic, &memory);

        let Some(frame) = reader.take_ready() else {
            panic!("no frame after a full frame of cycles");
        };
        let (w, b, r, k) = (PALETTE[1], PALETTE[6], PALETTE[2], PALETTE[0]);
        let lines: Vec<&[u32]> = frame.chunks(64).collect();
        for y in 0..16 {
            assert_eq!(&lines[y][..8], &[w, w, w, w, b, b, b, b], "row 0, line {y}");
            assert!(lines[y][8..].iter().all(|&p| p == k), "line {y}");
        }
        for y in 16..32 {
            assert_eq!(&lines[y][..8], &[b, b, b, b, r, r, r, r], "row 1, line {y}");
        }
        // Drawn lines end 10 short of the buffer; the rest is border.
        for y in 32..38 {
            assert!(lines[y].iter().all(|&p| p == k), "line {y} below the window");
        }
    }

    #[test]
    fn partial_cell_at_line_end_costs_an_extra_cycle() {
        let memory = Flat::new();
        let mut vic = Vic::new(SMALL);
        // One column starting four pixels before the end of the line, on
        // lines 10-17.
        vic.write(0x1000, 15);
        vic.write(0x1001, 5);
        vic.write(0x1002, 0x01);
        vic.write(0x1003, 0x02);
        assert_eq!(vic.text_window(), (60, 10, 68, 18));
        assert_eq!(run_frame(&mut vic, &memory), SMALL.cycles_per_frame() + 8);
        assert_eq!(run_frame(&mut vic, &memory), SMALL.cycles_per_frame() + 8);
    }

    #[test]
    fn reset_returns_beam_home() {
        let mut vic = Vic::new(SMALL);
        vic.write(0x100F, 0x20);
        for _ in 0..100 {
            vic.step_skipping_render();
        }
        vic.reset();
        assert_eq!((vic.raster_line(), vic.horizontal_counter()), (0, 0));
        assert_eq!(vic.read(0x100F), 0x20);
    }

    #[test]
    fn observable_paths() {
        let mut vic = Vic::new(SMALL);
        vic.write(0x100F, 0x30);
        assert_eq!(vic.query("colour.background"), Some(Value::U8(3)));
        assert_eq!(vic.query("reg.f"), Some(Value::U8(0x30)));
        assert_eq!(vic.query("reg.10"), None);
        assert_eq!(vic.query("nope"), None);
    }
}
