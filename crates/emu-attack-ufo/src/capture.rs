//! Frame post-processing and PNG screenshots.
//!
//! Frames come out of the VIC at the full raster size. The cabinet shows
//! only the visible window, on a monitor turned on its side, so the
//! presentation path crops and then rotates a quarter turn
//! counter-clockwise.

use crate::config::MachineType;

/// Copy the visible window out of a full-raster frame.
///
/// Returns `(pixels, width, height)`.
#[must_use]
pub fn crop_visible(frame: &[u32], machine_type: MachineType) -> (Vec<u32>, u32, u32) {
    let total_width = usize::from(machine_type.total_width());
    let width = usize::from(machine_type.visible_width());
    let height = usize::from(machine_type.visible_height());
    let left = usize::from(machine_type.horizontal_offset());
    let top = usize::from(machine_type.vertical_offset());

    let mut out = Vec::with_capacity(width * height);
    for row in frame.chunks(total_width).skip(top).take(height) {
        out.extend(row.iter().skip(left).take(width));
    }
    // A short frame still yields a full-size image.
    out.resize(width * height, 0);
    (out, width as u32, height as u32)
}

/// Rotate a quarter turn counter-clockwise. A `width` x `height` image
/// becomes `height` x `width`; the top row becomes the left column, read
/// bottom to top.
#[must_use]
pub fn rotate_counter_clockwise(pixels: &[u32], width: u32, height: u32) -> Vec<u32> {
    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0; w * h];
    for y in 0..h {
        for x in 0..w {
            // Destination is h wide; source (x, y) lands at (y, w - 1 - x).
            out[(w - 1 - x) * h + y] = pixels[y * w + x];
        }
    }
    out
}

/// Crop, and optionally rotate, a frame for display.
///
/// Returns `(pixels, width, height)`.
#[must_use]
pub fn display_image(frame: &[u32], machine_type: MachineType, rotate: bool) -> (Vec<u32>, u32, u32) {
    let (visible, width, height) = crop_visible(frame, machine_type);
    if rotate {
        (rotate_counter_clockwise(&visible, width, height), height, width)
    } else {
        (visible, width, height)
    }
}

/// Convert ARGB32 to RGBA bytes, writing into `out`.
pub fn argb_to_rgba(pixels: &[u32], out: &mut [u8]) {
    for (&argb, rgba) in pixels.iter().zip(out.chunks_exact_mut(4)) {
        rgba[0] = ((argb >> 16) & 0xFF) as u8;
        rgba[1] = ((argb >> 8) & 0xFF) as u8;
        rgba[2] = (argb & 0xFF) as u8;
        rgba[3] = 0xFF;
    }
}

/// Save a frame as a PNG, cropped to the visible window.
#[cfg(feature = "native")]
pub fn save_screenshot(
    frame: &[u32],
    machine_type: MachineType,
    rotate: bool,
    path: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let (pixels, width, height) = display_image(frame, machine_type, rotate);

    let file = std::fs::File::create(path)?;
    let w = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;

    let mut rgba = vec![0u8; pixels.len() * 4];
    argb_to_rgba(&pixels, &mut rgba);
    writer.write_image_data(&rgba)?;
    log::info!("screenshot saved to {} ({width}x{height})", path.display());
    Ok(())
}
