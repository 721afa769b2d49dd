//! Address map and storage chips.
//!
//! The board decodes 14 address lines. Every one of the 16,384 addresses
//! has exactly one owning [`Chip`], fixed when the map is built. Storage
//! chips keep their bytes in one flat array; the register chips (VIC and
//! PIA) live on the bus.
//!
//! | Range       | Chip                         |
//! |-------------|------------------------------|
//! | $0000-$03FF | RAM (zero page, stack, video matrix) |
//! | $0400-$07FF | Nibble RAM (colour)          |
//! | $0800-$0FFF | Unconnected                  |
//! | $1000-$100F | VIC                          |
//! | $1010-$13FF | Unconnected                  |
//! | $1400-$1403 | PIA                          |
//! | $1404-$1BFF | Unconnected                  |
//! | $1C00-$1FFF | RAM (character generator)    |
//! | $2000-$3FFF | ROM x 8                      |

use mos_vic_6560::VideoMemory;

use crate::error::MachineError;
use crate::roms::RomSet;

/// Size of the decoded address space.
pub const ADDRESS_SPACE: usize = 0x4000;

/// Mask applied to every CPU address.
pub const ADDRESS_MASK: u16 = 0x3FFF;

/// What owns an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chip {
    /// Eight-bit read/write.
    Ram,
    /// Four-bit read/write. Reads return the stored nibble with the upper
    /// four bits clear.
    NibbleRam,
    /// Read-only; writes are ignored.
    Rom,
    /// Nothing on the data bus. Reads float to the high address byte.
    Unconnected,
    Vic,
    Pia,
}

/// Value seen when nothing drives the data bus: the last byte the CPU put
/// on it, which for an absolute access is the address high byte.
#[must_use]
pub const fn open_bus(address: u16) -> u8 {
    (address >> 8) as u8
}

#[derive(Debug)]
struct Region {
    chip: Chip,
    start: u16,
    end: u16,
    preload: Option<Vec<u8>>,
}

/// Collects regions and validates them into a [`Memory`].
#[derive(Debug, Default)]
pub struct AddressMapBuilder {
    regions: Vec<Region>,
}

impl AddressMapBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `chip` over `start..=end`.
    #[must_use]
    pub fn map(mut self, chip: Chip, start: u16, end: u16) -> Self {
        self.regions.push(Region {
            chip,
            start,
            end,
            preload: None,
        });
        self
    }

    /// Map `chip` over `start..=end` with initial contents. `data` must be
    /// exactly the size of the range.
    #[must_use]
    pub fn map_loaded(mut self, chip: Chip, start: u16, end: u16, data: &[u8]) -> Self {
        self.regions.push(Region {
            chip,
            start,
            end,
            preload: Some(data.to_vec()),
        });
        self
    }

    /// Check for reversed or oversized ranges, overlaps, pre-load size
    /// mismatches and unowned addresses, then build the map.
    pub fn build(self) -> Result<Memory, MachineError> {
        let mut owners: Vec<Option<Chip>> = vec![None; ADDRESS_SPACE];
        let mut cells = vec![0u8; ADDRESS_SPACE].into_boxed_slice();

        for region in self.regions {
            let Region {
                chip,
                start,
                end,
                preload,
            } = region;
            if start > end || usize::from(end) >= ADDRESS_SPACE {
                return Err(MachineError::MapOutOfRange { chip, start, end });
            }
            let range = usize::from(start)..=usize::from(end);

            if let Some((address, existing)) = range
                .clone()
                .find_map(|a| owners[a].map(|existing| (a as u16, existing)))
            {
                return Err(MachineError::MapOverlap {
                    chip,
                    start,
                    end,
                    existing,
                    address,
                });
            }

            if let Some(data) = preload {
                let expected = range.clone().count();
                if data.len() != expected {
                    return Err(MachineError::PreloadSize {
                        chip,
                        start,
                        end,
                        expected,
                        actual: data.len(),
                    });
                }
                cells[range.clone()].copy_from_slice(&data);
            }

            for owner in &mut owners[range] {
                *owner = Some(chip);
            }
        }

        if let Some(first) = owners.iter().position(Option::is_none) {
            let run = owners[first..].iter().take_while(|o| o.is_none()).count();
            return Err(MachineError::MapGap {
                start: first as u16,
                end: (first + run - 1) as u16,
            });
        }

        let owners = owners.into_iter().flatten().collect();
        Ok(Memory { owners, cells })
    }
}

/// Storage for every RAM, nibble RAM and ROM cell plus the owner table.
#[derive(Debug, Clone)]
pub struct Memory {
    owners: Box<[Chip]>,
    cells: Box<[u8]>,
}

impl Memory {
    /// The board's fixed map with the given ROMs.
    pub fn attack_ufo(roms: &RomSet) -> Result<Self, MachineError> {
        let mut builder = AddressMapBuilder::new()
            .map(Chip::Ram, 0x0000, 0x03FF)
            .map(Chip::NibbleRam, 0x0400, 0x07FF)
            .map(Chip::Unconnected, 0x0800, 0x0FFF)
            .map(Chip::Vic, 0x1000, 0x100F)
            .map(Chip::Unconnected, 0x1010, 0x13FF)
            .map(Chip::Pia, 0x1400, 0x1403)
            .map(Chip::Unconnected, 0x1404, 0x1BFF)
            .map(Chip::Ram, 0x1C00, 0x1FFF);
        for (start, image) in roms.regions() {
            let end = start + (image.len() as u16).saturating_sub(1);
            builder = builder.map_loaded(Chip::Rom, start, end, image);
        }
        builder.build()
    }

    /// Owner of a (masked) address.
    #[must_use]
    pub fn owner(&self, address: u16) -> Chip {
        self.owners[usize::from(address & ADDRESS_MASK)]
    }

    /// Storage read. Register chips are not visible here and read as open
    /// bus.
    #[must_use]
    pub fn read(&self, address: u16) -> u8 {
        let address = address & ADDRESS_MASK;
        let cell = self.cells[usize::from(address)];
        match self.owner(address) {
            Chip::Ram | Chip::Rom => cell,
            Chip::NibbleRam => cell & 0x0F,
            Chip::Unconnected | Chip::Vic | Chip::Pia => open_bus(address),
        }
    }

    /// Storage write. ROM, unconnected and register-chip addresses ignore
    /// it.
    pub fn write(&mut self, address: u16, value: u8) {
        let address = address & ADDRESS_MASK;
        let cell = &mut self.cells[usize::from(address)];
        match self.owners[usize::from(address)] {
            Chip::Ram => *cell = value,
            Chip::NibbleRam => *cell = value & 0x0F,
            Chip::Rom | Chip::Unconnected | Chip::Vic | Chip::Pia => {}
        }
    }
}

impl VideoMemory for Memory {
    /// The VIC sees storage only. Register windows and unconnected space
    /// float to open bus here rather than reading back register values or
    /// zero, which shows up only through the VIC's unmapped-read quirk.
    fn vic_read(&self, address: u16) -> u8 {
        self.read(address)
    }
}
