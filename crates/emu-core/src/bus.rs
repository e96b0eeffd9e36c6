//! Memory and I/O bus interface.

/// Which interrupt sequence the CPU has just taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterruptKind {
    /// Non-maskable interrupt (edge-triggered).
    Nmi,
    /// Maskable interrupt request (level-sensitive).
    Irq,
}

/// Memory and I/O bus interface supplied by the host machine.
///
/// CPU cores access memory and memory-mapped devices through this trait.
/// The bus handles address decoding and routing to the appropriate device.
/// Every call is synchronous: the CPU waits for it to return and makes no
/// assumption about which device or region an address maps to.
pub trait Bus {
    /// Read a byte from the given address.
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    fn write(&mut self, address: u16, value: u8);

    /// Fetch an opcode byte.
    ///
    /// Hosts that bank program space separately from data space (encrypted
    /// opcodes, Harvard-style ROM overlays) override this. Operand bytes
    /// still go through [`read`](Bus::read).
    fn fetch_opcode(&mut self, pc: u16) -> u8 {
        self.read(pc)
    }

    /// Called exactly once for every interrupt the CPU actually takes,
    /// after the new PC has been loaded from the vector.
    ///
    /// Hosts use this to deassert a line or clear a device latch.
    fn acknowledge_interrupt(&mut self, _kind: InterruptKind) {}
}
