//! Startup errors.
//!
//! Everything here is raised while the machine is being built. Once
//! stepping has started nothing can fail: every masked address has an
//! owner and every register access has a defined result.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::memory::Chip;

/// Errors that abort machine construction.
#[derive(Debug, Error)]
pub enum MachineError {
    /// A ROM image could not be read.
    #[error("cannot read ROM image {path}: {source}")]
    RomMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A ROM image is not exactly one chip in size.
    #[error("ROM image {name} is {actual} bytes, expected {expected}")]
    RomSize {
        name: String,
        actual: usize,
        expected: usize,
    },

    /// The wrong number of ROM images was supplied.
    #[error("expected {expected} ROM images, got {actual}")]
    RomCount { actual: usize, expected: usize },

    /// Two regions claim the same address.
    #[error("{chip:?} at ${start:04X}-${end:04X} overlaps {existing:?} at ${address:04X}")]
    MapOverlap {
        chip: Chip,
        start: u16,
        end: u16,
        existing: Chip,
        address: u16,
    },

    /// Addresses left without an owner.
    #[error("no chip mapped at ${start:04X}-${end:04X}")]
    MapGap { start: u16, end: u16 },

    /// A region is reversed or reaches past the 14-bit window.
    #[error("{chip:?} range ${start:04X}-${end:04X} is outside $0000-$3FFF")]
    MapOutOfRange { chip: Chip, start: u16, end: u16 },

    /// Pre-load data does not fill its region exactly.
    #[error("{chip:?} at ${start:04X}-${end:04X} needs {expected} bytes of pre-load data, got {actual}")]
    PreloadSize {
        chip: Chip,
        start: u16,
        end: u16,
        expected: usize,
        actual: usize,
    },

    /// The worker thread could not be started.
    #[error("failed to spawn emulation thread: {0}")]
    Spawn(#[from] io::Error),

    /// The worker thread panicked, taking the machine with it.
    #[error("emulation thread panicked")]
    WorkerPanicked,
}
