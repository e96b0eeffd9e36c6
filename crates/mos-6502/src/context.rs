//! Save and restore of engine state.
//!
//! A [`ContextBlob`] holds everything that changes while a core runs. The
//! variant descriptor is not included (it is shared and rebuilt from the
//! id) and neither is the bus (the host rebinds it on every call anyway).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::Mos6502;
use crate::cpu::HaltState;
use crate::error::ContextError;
use crate::interrupt::InterruptController;
use crate::registers::Registers;
use crate::variant::VariantId;

/// Complete per-instance CPU state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextBlob {
    pub variant: VariantId,
    pub registers: Registers,
    pub interrupts: InterruptController,
    pub halt: HaltState,
    pub prev_pc: u16,
    pub total_cycles: u64,
}

impl ContextBlob {
    /// Encode as MessagePack.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ContextError> {
        Ok(rmp_serde::to_vec_named(self)?)
    }

    /// Decode from MessagePack produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContextError> {
        Ok(rmp_serde::from_slice(bytes)?)
    }
}

impl Mos6502 {
    /// Snapshot the instance.
    #[must_use]
    pub fn save(&self) -> ContextBlob {
        ContextBlob {
            variant: self.variant.id(),
            registers: self.regs,
            interrupts: self.interrupts,
            halt: self.halt,
            prev_pc: self.prev_pc,
            total_cycles: self.total_cycles,
        }
    }

    /// Load a snapshot taken from a core of the same variant.
    pub fn restore(&mut self, blob: &ContextBlob) -> Result<(), ContextError> {
        let expected = self.variant.id();
        if blob.variant != expected {
            return Err(ContextError::VariantMismatch {
                expected,
                found: blob.variant,
            });
        }
        self.regs = blob.registers;
        self.interrupts = blob.interrupts;
        self.halt = blob.halt;
        self.prev_pc = blob.prev_pc;
        self.total_cycles = blob.total_cycles;
        debug!(
            "{expected} context restored, PC=${:04X} cycles={}",
            self.regs.pc, self.total_cycles
        );
        Ok(())
    }

    /// Build a fresh instance of the blob's built-in variant and restore
    /// into it.
    #[must_use]
    pub fn from_context(blob: &ContextBlob) -> Self {
        let mut cpu = Self::new(blob.variant);
        cpu.regs = blob.registers;
        cpu.interrupts = blob.interrupts;
        cpu.halt = blob.halt;
        cpu.prev_pc = blob.prev_pc;
        cpu.total_cycles = blob.total_cycles;
        cpu
    }
}
