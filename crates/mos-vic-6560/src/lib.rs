//! MOS 6560-family VIC (Video Interface Chip) as wired on the Attack UFO
//! board.
//!
//! Cycle-stepped raster generator: every call advances four pixel clocks.
//! Inside the text window the chip alternates between fetching a screen
//! code (plus its colour nibble) and fetching the character bitmap byte,
//! which is then emitted as eight pixels. Outside the window it emits
//! border colour.
//!
//! # Registers ($1000-$100F)
//!
//! | Reg | Description                                                   |
//! |-----|---------------------------------------------------------------|
//! | $0  | Bits 6-0: horizontal text origin (x4 pixels)                  |
//! | $1  | Vertical text origin (x2 lines)                               |
//! | $2  | Bits 6-0: columns. Bit 7: video base bit. Above $80: colour RAM at $0600 |
//! | $3  | Bit 7: raster bit 0. Bits 6-1: rows. Bit 0: 8x16 characters   |
//! | $4  | Raster line bits 8-1 (read-only)                              |
//! | $5  | Bits 7-4: video matrix base. Bits 3-0: character base         |
//! | $6-$9 | Light pen and paddles (read-only, unused)                   |
//! | $A-$D | Voice frequencies (stored only)                             |
//! | $E  | Bits 7-4: auxiliary colour. Bits 3-0: volume                  |
//! | $F  | Bits 7-4: background colour. Border is fixed black            |
//!
//! Completed frames are handed to another thread through a
//! [`FrameReader`].

mod frame;
mod palette;
mod vic;

pub use frame::FrameReader;
pub use palette::{PALETTE, PALETTE_RGB565, rgb565_to_argb};
pub use vic::{
    CHAR_MEMORY_TABLE, DEFAULT_FETCH_ADDRESS, Fetch, LAST_BLANK_LINE, REGISTER_BASE, RasterTiming,
    VIDEO_MEMORY_TABLE, Vic, VideoMemory,
};
