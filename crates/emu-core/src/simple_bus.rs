//! Flat 64 KiB RAM bus for tests and tools.

use crate::{Bus, InterruptKind};

/// A bus with 64 KiB of RAM and no devices.
///
/// By default records every write and every interrupt acknowledgement so
/// tests can check exactly what a CPU put on the bus. Long-running tools
/// use [`unlogged`](Self::unlogged) instead.
#[derive(Clone)]
pub struct SimpleBus {
    ram: Box<[u8; 0x1_0000]>,
    logging: bool,
    writes: Vec<(u16, u8)>,
    acks: Vec<InterruptKind>,
    reads: u64,
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
            ram: Box::new([0; 0x1_0000]),
            logging: true,
            writes: Vec::new(),
            acks: Vec::new(),
            reads: 0,
        }
    }

    /// A bus that keeps no write or acknowledgement log, for runs of
    /// millions of instructions. The read counter still counts.
    #[must_use]
    pub fn unlogged() -> Self {
        Self {
            logging: false,
            ..Self::new()
        }
    }

    /// Copy `data` into RAM starting at `address`, wrapping at $FFFF.
    pub fn load(&mut self, address: u16, data: &[u8]) {
        let mut addr = address;
        for &byte in data {
            self.ram[usize::from(addr)] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Store a little-endian word (vector tables).
    pub fn poke_word(&mut self, address: u16, value: u16) {
        self.load(address, &value.to_le_bytes());
    }

    /// Read RAM without side effects.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        self.ram[usize::from(address)]
    }

    /// Writes performed since the last [`clear_log`](Self::clear_log).
    #[must_use]
    pub fn writes(&self) -> &[(u16, u8)] {
        &self.writes
    }

    /// Interrupt acknowledgements since the last [`clear_log`](Self::clear_log).
    #[must_use]
    pub fn acks(&self) -> &[InterruptKind] {
        &self.acks
    }

    /// Number of data reads (opcode fetches included).
    #[must_use]
    pub fn read_count(&self) -> u64 {
        self.reads
    }

    pub fn clear_log(&mut self) {
        self.writes.clear();
        self.acks.clear();
        self.reads = 0;
    }
}

impl Bus for SimpleBus {
    fn read(&mut self, address: u16) -> u8 {
        self.reads += 1;
        self.ram[usize::from(address)]
    }

    fn write(&mut self, address: u16, value: u8) {
        if self.logging {
            self.writes.push((address, value));
        }
        self.ram[usize::from(address)] = value;
    }

    fn acknowledge_interrupt(&mut self, kind: InterruptKind) {
        if self.logging {
            self.acks.push(kind);
        }
    }
}
