//! VIC colour palette.
//!
//! The board's colour DAC is described as RGB565; it is expanded once, at
//! compile time, to the ARGB32 the frame buffers hold.

/// The sixteen colours as RGB565.
pub const PALETTE_RGB565: [u16; 16] = [
    0x0000, // black
    0xFFFF, // white
    0xB0E4, // red
    0x4F9F, // cyan
    0xB1FF, // purple
    0x4706, // green
    0x19BF, // blue
    0xDEA3, // yellow
    0xCAA0, // orange
    0xED8E, // light orange
    0xE492, // pink
    0x9FBF, // light cyan
    0xE4FF, // light purple
    0x8F32, // light green
    0x849F, // light blue
    0xE6F0, // light yellow
];

/// The sixteen colours as opaque ARGB32.
pub const PALETTE: [u32; 16] = expand(PALETTE_RGB565);

/// Widen RGB565 to ARGB32, replicating high bits into the new low bits so
/// full scale stays full scale.
#[must_use]
pub const fn rgb565_to_argb(colour: u16) -> u32 {
    let r = ((colour >> 11) & 0x1F) as u32;
    let g = ((colour >> 5) & 0x3F) as u32;
    let b = (colour & 0x1F) as u32;
    let r = (r << 3) | (r >> 2);
    let g = (g << 2) | (g >> 4);
    let b = (b << 3) | (b >> 2);
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

const fn expand(table: [u16; 16]) -> [u32; 16] {
    let mut out = [0; 16];
    let mut i = 0;
    while i < 16 {
        out[i] = rgb565_to_argb(table[i]);
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_and_white_are_full_scale() {
        assert_eq!(PALETTE[0], 0xFF00_0000);
        assert_eq!(PALETTE[1], 0xFFFF_FFFF);
    }

    #[test]
    fn expansion_matches_known_entries() {
        assert_eq!(PALETTE[2], 0xFFB5_1C21);
        assert_eq!(PALETTE[8], 0xFFCE_5500);
        assert_eq!(PALETTE[15], 0xFFE7_DF84);
    }
}
