//! Memory and I/O bus interface.

/// Memory and I/O bus interface.
///
/// Components access memory and peripherals through this trait. The bus
/// handles address decoding and routing to the owning device.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);
}

/// Flat 64 KiB RAM bus with no decoding.
///
/// Test fixture for exercising CPU cores in isolation; machines use their
/// own bus. Every access is recorded so tests can check the exact
/// per-cycle bus activity, and the log grows until
/// [`SimpleBus::clear_accesses`] is called.
pub struct SimpleBus {
    memory: Box<[u8; 0x1_0000]>,
    accesses: Vec<(u16, u8, bool)>,
}

impl Default for SimpleBus {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleBus {
    #[must_use]
    pub fn new() -> Self {
        Self {
            memory: Box::new([0; 0x1_0000]),
            accesses: Vec::new(),
        }
    }

    /// Copy `data` into memory starting at `address`, wrapping at the top.
    pub fn load(&mut self, address: u16, data: &[u8]) {
        for (i, &byte) in data.iter().enumerate() {
            let addr = address.wrapping_add(i as u16);
            self.memory[usize::from(addr)] = byte;
        }
    }

    /// Read without recording an access.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.memory[usize::from(address)]
    }

    /// Write without recording an access.
    pub fn poke(&mut self, address: u16, value: u8) {
        self.memory[usize::from(address)] = value;
    }

    /// Accesses since the last call to [`Self::clear_accesses`], as
    /// `(address, value, is_write)`.
    #[must_use]
    pub fn accesses(&self) -> &[(u16, u8, bool)] {
        &self.accesses
    }

    pub fn clear_accesses(&mut self) {
        self.accesses.clear();
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        let value = self.memory[usize::from(address)];
        self.accesses.push((address, value, false));
        value
    }

    fn write(&mut self, address: u16, value: u8) {
        self.memory[usize::from(address)] = value;
        self.accesses.push((address, value, true));
    }
}
