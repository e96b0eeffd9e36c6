//! 6502 processor status register (P).
//!
//! The status register contains flags that reflect the result of operations
//! and control CPU behavior. Bits stay packed so pushes and pulls are exact;
//! instruction code goes through the named accessors.

use serde::{Deserialize, Serialize};

/// Carry flag - set if operation resulted in carry/borrow.
pub const C: u8 = 0x01;

/// Zero flag - set if result is zero.
pub const Z: u8 = 0x02;

/// Interrupt disable - when set, IRQ interrupts are ignored.
pub const I: u8 = 0x04;

/// Decimal mode - enables BCD arithmetic for ADC/SBC.
pub const D: u8 = 0x08;

/// Break flag - only meaningful in the copy pushed to the stack.
/// Set when BRK/PHP push status, clear when IRQ/NMI push status.
pub const B: u8 = 0x10;

/// Unused bit - always reads as 1.
pub const U: u8 = 0x20;

/// Overflow flag - set if signed arithmetic overflowed.
pub const V: u8 = 0x40;

/// Negative flag - set if result has bit 7 set.
pub const N: u8 = 0x80;

/// Processor status register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Status(u8);

impl From<u8> for Status {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<Status> for u8 {
    fn from(p: Status) -> Self {
        p.0
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::new()
    }
}

impl Status {
    /// Create a new status register with only the unused bit set.
    #[must_use]
    pub const fn new() -> Self {
        Self(U)
    }

    /// Create status from raw value, forcing the unused bit.
    #[must_use]
    pub const fn from_byte(value: u8) -> Self {
        Self(value | U)
    }

    /// Raw value as held in the register (unused bit always set).
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Value pushed by BRK/PHP (break and unused both set).
    #[must_use]
    pub const fn to_byte_brk(self) -> u8 {
        self.0 | U | B
    }

    /// Value pushed by IRQ/NMI (unused set, break clear).
    #[must_use]
    pub const fn to_byte_irq(self) -> u8 {
        (self.0 | U) & !B
    }

    /// Load from a stack pull (PLP/RTI). Break is not a real flag.
    pub fn load_pulled(&mut self, value: u8) {
        self.0 = (value | U) & !B;
    }

    #[must_use]
    pub const fn is_set(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    /// Set or clear a flag. The unused bit cannot be cleared.
    pub fn set_if(&mut self, flag: u8, condition: bool) {
        if condition {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
        self.0 |= U;
    }

    /// Update N and Z flags based on a value.
    pub fn update_nz(&mut self, value: u8) {
        self.set_if(N, value & 0x80 != 0);
        self.set_if(Z, value == 0);
    }

    #[must_use]
    pub const fn carry(self) -> bool {
        self.is_set(C)
    }

    #[must_use]
    pub const fn zero(self) -> bool {
        self.is_set(Z)
    }

    #[must_use]
    pub const fn interrupt_disable(self) -> bool {
        self.is_set(I)
    }

    #[must_use]
    pub const fn decimal(self) -> bool {
        self.is_set(D)
    }

    #[must_use]
    pub const fn overflow(self) -> bool {
        self.is_set(V)
    }

    #[must_use]
    pub const fn negative(self) -> bool {
        self.is_set(N)
    }

    pub fn set_carry(&mut self, on: bool) {
        self.set_if(C, on);
    }

    pub fn set_zero(&mut self, on: bool) {
        self.set_if(Z, on);
    }

    pub fn set_interrupt_disable(&mut self, on: bool) {
        self.set_if(I, on);
    }

    pub fn set_decimal(&mut self, on: bool) {
        self.set_if(D, on);
    }

    pub fn set_overflow(&mut self, on: bool) {
        self.set_if(V, on);
    }

    pub fn set_negative(&mut self, on: bool) {
        self.set_if(N, on);
    }
}
