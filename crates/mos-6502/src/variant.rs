//! CPU variant definitions for the 6502 family.
//!
//! One execution engine serves every variant. What differs between chips is
//! data: vector addresses and byte order, interrupt costs, decimal-mode
//! behavior and the opcode table. A [`VariantDescriptor`] bundles that data;
//! it is built once and shared read-only (behind an `Arc`) by every core of
//! that variant.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::opcode::{self, Instruction, Mode, Op};

/// Selected 6502 family member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantId {
    /// MOS 6502 (NMOS).
    M6502,
    /// MOS 6510: a 6502 with an I/O port, which the host maps at $00-$01.
    M6510,
    /// Ricoh 2A03/2A07: NMOS core with decimal mode disconnected.
    N2A03,
    /// 65C02 (CMOS) with the Rockwell bit instructions and WAI/STP.
    M65C02,
    /// 65SC02: CMOS core without the bit instructions.
    M65SC02,
    /// Data East DECO CPU-16: vectors relocated and stored high byte first.
    Deco16,
}

impl VariantId {
    pub const ALL: [VariantId; 6] = [
        VariantId::M6502,
        VariantId::M6510,
        VariantId::N2A03,
        VariantId::M65C02,
        VariantId::M65SC02,
        VariantId::Deco16,
    ];

    /// Lower-case name used in configuration files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            VariantId::M6502 => "m6502",
            VariantId::M6510 => "m6510",
            VariantId::N2A03 => "n2a03",
            VariantId::M65C02 => "m65c02",
            VariantId::M65SC02 => "m65sc02",
            VariantId::Deco16 => "deco16",
        }
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        VariantId::ALL
            .into_iter()
            .find(|id| id.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownVariant(s.to_string()))
    }
}

/// Order of the two bytes of a vector in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorOrder {
    /// Low byte at the vector address, high byte after it.
    LowThenHigh,
    /// High byte at the vector address, low byte after it.
    HighThenLow,
}

impl VectorOrder {
    /// Assemble a PC from the bytes read at `vector` and `vector + 1`.
    #[must_use]
    pub const fn assemble(self, first: u8, second: u8) -> u16 {
        match self {
            VectorOrder::LowThenHigh => u16::from_le_bytes([first, second]),
            VectorOrder::HighThenLow => u16::from_be_bytes([first, second]),
        }
    }
}

/// How ADC/SBC treat the D flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalMode {
    /// BCD with NMOS flag quirks (N, V, Z from intermediate results).
    Nmos,
    /// BCD with valid N and Z, one extra cycle.
    Cmos,
    /// D is stored but arithmetic stays binary.
    Disabled,
}

/// Built-in descriptors, indexed by `VariantId` discriminant.
static BUILT_IN: LazyLock<[Arc<VariantDescriptor>; 6]> =
    LazyLock::new(|| VariantId::ALL.map(|id| Arc::new(VariantDescriptor::new(id))));

/// Per-variant data consumed by the shared engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    id: VariantId,
    reset_vector: u16,
    irq_vector: u16,
    nmi_vector: u16,
    vector_order: VectorOrder,
    irq_cycles: u8,
    nmi_cycles: u8,
    decimal: DecimalMode,
    interrupt_clears_decimal: bool,
    rmw_dummy_write: bool,
    indirect_jmp_page_bug: bool,
    table: [Instruction; 256],
}

impl VariantDescriptor {
    /// Descriptor for a built-in variant.
    #[must_use]
    pub fn new(id: VariantId) -> Self {
        let nmos = Self {
            id,
            reset_vector: 0xFFFC,
            irq_vector: 0xFFFE,
            nmi_vector: 0xFFFA,
            vector_order: VectorOrder::LowThenHigh,
            irq_cycles: 7,
            nmi_cycles: 7,
            decimal: DecimalMode::Nmos,
            interrupt_clears_decimal: false,
            rmw_dummy_write: true,
            indirect_jmp_page_bug: true,
            table: opcode::NMOS,
        };
        let cmos = Self {
            decimal: DecimalMode::Cmos,
            interrupt_clears_decimal: true,
            rmw_dummy_write: false,
            indirect_jmp_page_bug: false,
            table: opcode::CMOS,
            ..nmos.clone()
        };

        match id {
            VariantId::M6502 | VariantId::M6510 => nmos,
            VariantId::N2A03 => Self {
                decimal: DecimalMode::Disabled,
                ..nmos
            },
            VariantId::M65C02 => cmos,
            VariantId::M65SC02 => {
                let mut table = opcode::CMOS;
                for (byte, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
                    if opcode::is_rockwell_or_wdc_extension(byte) {
                        *slot = Instruction::new(Op::Nop, Mode::Implied, 1);
                    }
                }
                Self { table, ..cmos }
            }
            VariantId::Deco16 => Self {
                reset_vector: 0xFFF0,
                irq_vector: 0xFFF2,
                nmi_vector: 0xFFF4,
                vector_order: VectorOrder::HighThenLow,
                ..nmos
            },
        }
    }

    /// Shared descriptor for a built-in variant.
    ///
    /// Each built-in is constructed on first use; every later call hands
    /// out the same allocation.
    #[must_use]
    pub fn shared(id: VariantId) -> Arc<Self> {
        Arc::clone(&BUILT_IN[id as usize])
    }

    /// Start a custom descriptor from a built-in one.
    #[must_use]
    pub fn builder(base: VariantId) -> VariantBuilder {
        VariantBuilder::new(base)
    }

    #[must_use]
    pub const fn id(&self) -> VariantId {
        self.id
    }

    #[must_use]
    pub const fn reset_vector_address(&self) -> u16 {
        self.reset_vector
    }

    #[must_use]
    pub const fn irq_vector_address(&self) -> u16 {
        self.irq_vector
    }

    #[must_use]
    pub const fn nmi_vector_address(&self) -> u16 {
        self.nmi_vector
    }

    #[must_use]
    pub const fn vector_order(&self) -> VectorOrder {
        self.vector_order
    }

    /// Cycles charged for taking an IRQ.
    #[must_use]
    pub const fn irq_cycles(&self) -> u8 {
        self.irq_cycles
    }

    /// Cycles charged for taking an NMI.
    #[must_use]
    pub const fn nmi_cycles(&self) -> u8 {
        self.nmi_cycles
    }

    #[must_use]
    pub const fn decimal_mode(&self) -> DecimalMode {
        self.decimal
    }

    /// CMOS parts clear D when entering an interrupt or BRK.
    #[must_use]
    pub const fn interrupt_clears_decimal(&self) -> bool {
        self.interrupt_clears_decimal
    }

    /// NMOS read-modify-write writes the unmodified value back first.
    #[must_use]
    pub const fn rmw_dummy_write(&self) -> bool {
        self.rmw_dummy_write
    }

    /// NMOS `JMP ($xxFF)` fetches the high byte from $xx00.
    #[must_use]
    pub const fn indirect_jmp_page_bug(&self) -> bool {
        self.indirect_jmp_page_bug
    }

    /// Table entry for an opcode byte.
    #[must_use]
    pub const fn dispatch(&self, opcode: u8) -> Instruction {
        self.table[opcode as usize]
    }
}

/// Builder for host-customised variants.
///
/// Some boards wire a stock core with relocated vectors or patched opcodes.
/// The builder starts from a built-in table; every slot must still be
/// mapped when [`build`](Self::build) is called.
#[derive(Debug, Clone)]
pub struct VariantBuilder {
    base: VariantDescriptor,
    table: [Option<Instruction>; 256],
}

impl VariantBuilder {
    fn new(base: VariantId) -> Self {
        let base = VariantDescriptor::new(base);
        let table = base.table.map(Some);
        Self { base, table }
    }

    #[must_use]
    pub fn vectors(mut self, reset: u16, irq: u16, nmi: u16) -> Self {
        self.base.reset_vector = reset;
        self.base.irq_vector = irq;
        self.base.nmi_vector = nmi;
        self
    }

    #[must_use]
    pub fn vector_order(mut self, order: VectorOrder) -> Self {
        self.base.vector_order = order;
        self
    }

    #[must_use]
    pub fn interrupt_cycles(mut self, irq: u8, nmi: u8) -> Self {
        self.base.irq_cycles = irq;
        self.base.nmi_cycles = nmi;
        self
    }

    #[must_use]
    pub fn decimal_mode(mut self, mode: DecimalMode) -> Self {
        self.base.decimal = mode;
        self
    }

    /// Replace one opcode slot.
    #[must_use]
    pub fn map(mut self, opcode: u8, instruction: Instruction) -> Self {
        self.table[usize::from(opcode)] = Some(instruction);
        self
    }

    /// Remove one opcode slot. The descriptor will not build until the slot
    /// is mapped again.
    #[must_use]
    pub fn unmap(mut self, opcode: u8) -> Self {
        self.table[usize::from(opcode)] = None;
        self
    }

    /// Validate the table and produce a shareable descriptor.
    pub fn build(self) -> Result<Arc<VariantDescriptor>, ConfigError> {
        let mut table = self.base.table;
        for (opcode, (slot, entry)) in (0..=u8::MAX).zip(table.iter_mut().zip(self.table)) {
            *slot = entry.ok_or(ConfigError::UnmappedOpcode(opcode))?;
        }
        Ok(Arc::new(VariantDescriptor {
            table,
            ..self.base
        }))
    }
}
