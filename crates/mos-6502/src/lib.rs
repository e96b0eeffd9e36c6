//! Cycle-accurate MOS 6502 family CPU core.
//!
//! One interpreter serves every supported chip. Variant differences live in
//! a shared [`VariantDescriptor`]:
//!
//! - **6502 / 6510** - NMOS core including the undocumented opcodes
//! - **2A03** - NMOS core with decimal mode disconnected
//! - **65C02 / 65SC02** - CMOS core, with or without the Rockwell bit ops
//! - **DECO CPU-16** - NMOS core with relocated, big-endian vectors
//!
//! The host drives a core with cycle budgets through [`Mos6502::run`] and
//! supplies memory through [`emu_core::Bus`]. The 6510 I/O port at $00-$01
//! is handled by the memory subsystem, not this crate.
//!
//! # Example
//!
//! ```
//! use emu_core::SimpleBus;
//! use mos_6502::{Mos6502, VariantId};
//!
//! let mut bus = SimpleBus::new();
//! bus.poke_word(0xFFFC, 0x0200);
//! bus.load(0x0200, &[0xA9, 0x42, 0x4C, 0x02, 0x02]); // LDA #$42; JMP $0202
//!
//! let mut cpu = Mos6502::new(VariantId::M6502);
//! cpu.reset(&mut bus);
//! let used = cpu.run(&mut bus, 10);
//! assert!(used >= 10);
//! assert_eq!(cpu.a(), 0x42);
//! ```

mod addressing;
mod alu;
mod context;
mod cpu;
mod error;
mod execute;
pub mod flags;
mod interrupt;
pub mod opcode;
mod registers;
mod variant;

pub use context::ContextBlob;
pub use cpu::{HaltState, Mos6502};
pub use error::{ConfigError, ContextError};
pub use flags::Status;
pub use interrupt::{InterruptController, Phase};
pub use registers::{Registers, STACK_BASE};
pub use variant::{DecimalMode, VariantBuilder, VariantDescriptor, VariantId, VectorOrder};
