//! 6502 addressing modes.
//!
//! Resolution issues the same bus reads the hardware does, including the
//! dummy reads on indexed modes, so memory-mapped devices with read side
//! effects see the expected traffic.

use emu_core::Bus;

use crate::Mos6502;
use crate::opcode::Mode;
use crate::registers::STACK_BASE;

/// How an instruction uses its resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Read,
    Write,
    Modify,
}

impl Mos6502 {
    /// Fetch the next byte at PC and increment PC.
    pub(crate) fn fetch<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a 16-bit word (little-endian) at PC.
    pub(crate) fn fetch_word<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let low = self.fetch(bus);
        let high = self.fetch(bus);
        u16::from_le_bytes([low, high])
    }

    /// Read a 16-bit word from memory (little-endian).
    pub(crate) fn read_word<B: Bus>(bus: &mut B, addr: u16) -> u16 {
        let low = bus.read(addr);
        let high = bus.read(addr.wrapping_add(1));
        u16::from_le_bytes([low, high])
    }

    /// Read a pointer from zero page. The high byte wraps within page zero.
    fn read_word_zero_page<B: Bus>(bus: &mut B, ptr: u8) -> u16 {
        let low = bus.read(u16::from(ptr));
        let high = bus.read(u16::from(ptr.wrapping_add(1)));
        u16::from_le_bytes([low, high])
    }

    /// Read a 16-bit word with the NMOS page boundary bug (indirect JMP).
    /// If addr is $xxFF, the high byte comes from $xx00.
    fn read_word_page_bug<B: Bus>(bus: &mut B, addr: u16) -> u16 {
        let low = bus.read(addr);
        let high_addr = (addr & 0xFF00) | (addr.wrapping_add(1) & 0x00FF);
        let high = bus.read(high_addr);
        u16::from_le_bytes([low, high])
    }

    /// Read an interrupt or reset vector in the variant's byte order.
    pub(crate) fn read_vector<B: Bus>(&self, bus: &mut B, addr: u16) -> u16 {
        let first = bus.read(addr);
        let second = bus.read(addr.wrapping_add(1));
        self.variant.vector_order().assemble(first, second)
    }

    /// Push a byte onto the stack.
    pub(crate) fn push<B: Bus>(&mut self, bus: &mut B, value: u8) {
        let addr = self.regs.push();
        bus.write(addr, value);
    }

    /// Pull a byte from the stack.
    pub(crate) fn pull<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let addr = self.regs.pop();
        bus.read(addr)
    }

    /// Push a 16-bit word onto the stack (high byte first).
    pub(crate) fn push_word<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [low, high] = value.to_le_bytes();
        self.push(bus, high);
        self.push(bus, low);
    }

    /// Pull a 16-bit word from the stack (low byte first).
    pub(crate) fn pull_word<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let low = self.pull(bus);
        let high = self.pull(bus);
        u16::from_le_bytes([low, high])
    }

    /// Dummy read of the current stack slot (internal cycle of pulls/JSR).
    pub(crate) fn touch_stack<B: Bus>(&self, bus: &mut B) {
        bus.read(STACK_BASE | u16::from(self.regs.s));
    }

    /// Resolve the effective address of `mode`, consuming operand bytes.
    ///
    /// Returns the address and whether indexing crossed a page. Immediate
    /// operands resolve to their own address so a plain read fetches them.
    /// Modes without a memory operand (implied, accumulator, relative)
    /// resolve to PC and consume nothing.
    pub(crate) fn resolve<B: Bus>(&mut self, bus: &mut B, mode: Mode, access: Access) -> (u16, bool) {
        let (addr, crossed) = match mode {
            Mode::Implied | Mode::Accumulator | Mode::Relative | Mode::ZeroPageRelative => {
                (self.regs.pc, false)
            }
            Mode::Immediate => {
                let addr = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                (addr, false)
            }
            Mode::ZeroPage => {
                let zp = self.fetch(bus);
                self.regs.zp = u16::from(zp);
                (u16::from(zp), false)
            }
            Mode::ZeroPageX => (self.zero_page_indexed(bus, self.regs.x), false),
            Mode::ZeroPageY => (self.zero_page_indexed(bus, self.regs.y), false),
            Mode::Absolute => (self.fetch_word(bus), false),
            Mode::AbsoluteX => {
                let base = self.fetch_word(bus);
                Self::index(bus, base, self.regs.x, access)
            }
            Mode::AbsoluteY => {
                let base = self.fetch_word(bus);
                Self::index(bus, base, self.regs.y, access)
            }
            Mode::Indirect => {
                let ptr = self.fetch_word(bus);
                let target = if self.variant.indirect_jmp_page_bug() {
                    Self::read_word_page_bug(bus, ptr)
                } else {
                    Self::read_word(bus, ptr)
                };
                (target, false)
            }
            Mode::AbsoluteIndexedIndirect => {
                let ptr = self.fetch_word(bus).wrapping_add(u16::from(self.regs.x));
                (Self::read_word(bus, ptr), false)
            }
            Mode::IndexedIndirect => {
                let ptr = self.zero_page_indexed(bus, self.regs.x) as u8;
                (Self::read_word_zero_page(bus, ptr), false)
            }
            Mode::IndirectIndexed => {
                let ptr = self.fetch(bus);
                self.regs.zp = u16::from(ptr);
                let base = Self::read_word_zero_page(bus, ptr);
                Self::index(bus, base, self.regs.y, access)
            }
            Mode::ZeroPageIndirect => {
                let ptr = self.fetch(bus);
                self.regs.zp = u16::from(ptr);
                (Self::read_word_zero_page(bus, ptr), false)
            }
        };
        self.regs.ea = addr;
        (addr, crossed)
    }

    /// Zero Page,X / Zero Page,Y: wraps within zero page.
    fn zero_page_indexed<B: Bus>(&mut self, bus: &mut B, index: u8) -> u16 {
        let base = self.fetch(bus);
        // Dummy read for the add cycle
        bus.read(u16::from(base));
        let zp = u16::from(base.wrapping_add(index));
        self.regs.zp = zp;
        zp
    }

    /// Add an index to a 16-bit base. Reads that cross a page, and every
    /// write or read-modify-write, first read the un-carried address.
    fn index<B: Bus>(bus: &mut B, base: u16, index: u8, access: Access) -> (u16, bool) {
        let addr = base.wrapping_add(u16::from(index));
        let crossed = (base ^ addr) & 0xFF00 != 0;
        if crossed || access != Access::Read {
            bus.read((base & 0xFF00) | (addr & 0x00FF));
        }
        (addr, crossed)
    }

    /// Relative branch. Returns extra cycles: 1 if taken, +1 more if the
    /// target is on another page.
    pub(crate) fn branch<B: Bus>(&mut self, bus: &mut B, condition: bool) -> u32 {
        let offset = self.fetch(bus) as i8;
        if !condition {
            return 0;
        }
        let target = self.regs.pc.wrapping_add_signed(i16::from(offset));
        let crossed = (self.regs.pc ^ target) & 0xFF00 != 0;
        bus.read(self.regs.pc);
        self.regs.pc = target;
        self.regs.ea = target;
        1 + u32::from(crossed)
    }
}
