//! The eight 1 KiB program ROMs.
//!
//! Images are named `1.rom` to `8.rom` and fill `$2000-$3FFF` in that order.
//! The last one carries the reset vector at `$3FFC`.

use std::path::Path;

use crate::error::MachineError;

/// Size of one ROM chip.
pub const ROM_SIZE: usize = 0x400;

/// Number of ROM chips on the board.
pub const ROM_COUNT: usize = 8;

/// First address of the ROM window.
pub const ROM_BASE: u16 = 0x2000;

/// A validated set of ROM images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomSet {
    images: Vec<Vec<u8>>,
}

impl RomSet {
    /// File name of ROM `index` (zero-based).
    #[must_use]
    pub fn file_name(index: usize) -> String {
        format!("{}.rom", index + 1)
    }

    /// Read `1.rom` to `8.rom` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, MachineError> {
        let mut images = Vec::with_capacity(ROM_COUNT);
        for index in 0..ROM_COUNT {
            let path = dir.join(Self::file_name(index));
            let data = std::fs::read(&path)
                .map_err(|source| MachineError::RomMissing { path: path.clone(), source })?;
            log::info!("loaded {} ({} bytes)", path.display(), data.len());
            images.push(data);
        }
        Self::from_images(images)
    }

    /// Validate images already in memory.
    pub fn from_images(images: Vec<Vec<u8>>) -> Result<Self, MachineError> {
        if images.len() != ROM_COUNT {
            return Err(MachineError::RomCount {
                actual: images.len(),
                expected: ROM_COUNT,
            });
        }
        for (index, image) in images.iter().enumerate() {
            if image.len() != ROM_SIZE {
                return Err(MachineError::RomSize {
                    name: Self::file_name(index),
                    actual: image.len(),
                    expected: ROM_SIZE,
                });
            }
        }
        Ok(Self { images })
    }

    /// Build a set from one contiguous 8 KiB image covering `$2000-$3FFF`.
    pub fn from_contiguous(data: &[u8]) -> Result<Self, MachineError> {
        if data.len() != ROM_SIZE * ROM_COUNT {
            return Err(MachineError::RomSize {
                name: "contiguous image".to_owned(),
                actual: data.len(),
                expected: ROM_SIZE * ROM_COUNT,
            });
        }
        Self::from_images(data.chunks(ROM_SIZE).map(<[u8]>::to_vec).collect())
    }

    /// Images with their load address.
    pub fn regions(&self) -> impl Iterator<Item = (u16, &[u8])> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, image)| (ROM_BASE + (index * ROM_SIZE) as u16, image.as_slice()))
    }

    #[must_use]
    pub fn image(&self, index: usize) -> Option<&[u8]> {
        self.images.get(index).map(Vec::as_slice)
    }
}
