//! 6502 CPU registers.

use serde::{Deserialize, Serialize};

use crate::Status;
use crate::flags::I;

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// 6502 CPU register set.
///
/// The 6502 has minimal registers:
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - S: 8-bit stack pointer (stack is at $0100-$01FF)
/// - PC: 16-bit program counter
/// - P: 8-bit processor status
///
/// `ea` and `zp` are not architectural. They hold the effective address and
/// zero-page pointer of the instruction being resolved, and are kept so a
/// debugger (or a save-state taken between instructions) sees the last
/// operand address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Stack pointer (points to next free location).
    pub s: u8,
    /// Program counter.
    pub pc: u16,
    /// Processor status flags.
    pub p: Status,
    /// Effective address of the last resolved operand.
    pub ea: u16,
    /// Zero-page pointer of the last indirect/zero-page operand.
    pub zp: u16,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Create registers in reset state.
    ///
    /// After reset:
    /// - A, X, Y are undefined (we use 0)
    /// - S is decremented by 3 from its previous value (we use $FD)
    /// - PC is loaded from the reset vector by the caller
    /// - I flag is set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            s: 0xFD,
            pc: 0,
            p: Status::from_byte(I),
            ea: 0,
            zp: 0,
        }
    }

    /// Push: return the address to write, then decrement S.
    pub fn push(&mut self) -> u16 {
        let addr = STACK_BASE | u16::from(self.s);
        self.s = self.s.wrapping_sub(1);
        addr
    }

    /// Pop: increment S, then return the address to read.
    pub fn pop(&mut self) -> u16 {
        self.s = self.s.wrapping_add(1);
        STACK_BASE | u16::from(self.s)
    }

    /// Get the current stack address without modifying S.
    #[must_use]
    pub const fn stack_addr(&self) -> u16 {
        STACK_BASE | (self.s as u16)
    }
}
