//! Execution engine: reset, the cycle-budgeted run loop and interrupt takes.

use std::sync::Arc;

use emu_core::{Bus, Cpu, InterruptKind, Observable, Value};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::flags::{B, C, D, I, N, V, Z};
use crate::interrupt::{InterruptController, Phase};
use crate::registers::Registers;
use crate::variant::{VariantDescriptor, VariantId};

/// Why the core is not executing instructions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HaltState {
    #[default]
    Running,
    /// WAI: resumes on NMI or an asserted IRQ line.
    Waiting,
    /// STP: resumes only on reset.
    Stopped,
    /// NMOS JAM opcode: resumes only on reset.
    Jammed,
}

impl HaltState {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            HaltState::Running => "running",
            HaltState::Waiting => "waiting",
            HaltState::Stopped => "stopped",
            HaltState::Jammed => "jammed",
        }
    }
}

/// A 6502-family CPU instance.
///
/// Every instance owns its registers and interrupt state and shares its
/// variant descriptor. The bus is borrowed for each call, so any number of
/// instances can run side by side and signal one another through the host.
#[derive(Debug, Clone)]
pub struct Mos6502 {
    /// CPU registers.
    pub regs: Registers,
    pub(crate) variant: Arc<VariantDescriptor>,
    pub(crate) interrupts: InterruptController,
    pub(crate) halt: HaltState,
    /// PC at the start of the most recent instruction (or interrupt take).
    pub(crate) prev_pc: u16,
    pub(crate) total_cycles: u64,
}

impl Default for Mos6502 {
    fn default() -> Self {
        Self::new(VariantId::M6502)
    }
}

impl Mos6502 {
    /// Create a core for a built-in variant.
    #[must_use]
    pub fn new(id: VariantId) -> Self {
        Self::with_variant(VariantDescriptor::shared(id))
    }

    /// Create a core for a variant named in configuration (`"m65c02"`...).
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(name.parse()?))
    }

    /// Create a core sharing an existing descriptor.
    #[must_use]
    pub fn with_variant(variant: Arc<VariantDescriptor>) -> Self {
        Self {
            regs: Registers::new(),
            variant,
            interrupts: InterruptController::new(),
            halt: HaltState::Running,
            prev_pc: 0,
            total_cycles: 0,
        }
    }

    #[must_use]
    pub fn variant(&self) -> &VariantDescriptor {
        &self.variant
    }

    /// The shared descriptor, for constructing sibling cores.
    #[must_use]
    pub fn shared_variant(&self) -> Arc<VariantDescriptor> {
        Arc::clone(&self.variant)
    }

    // =========================================================================
    // Register accessors
    // =========================================================================

    #[must_use]
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    #[must_use]
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    #[must_use]
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    #[must_use]
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    #[must_use]
    pub fn sp(&self) -> u8 {
        self.regs.s
    }

    #[must_use]
    pub fn status(&self) -> u8 {
        self.regs.p.bits()
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.s = value;
    }

    /// Set P. The reserved bit is forced on.
    pub fn set_status(&mut self, value: u8) {
        self.regs.p = value.into();
    }

    #[must_use]
    pub fn registers(&self) -> Registers {
        self.regs
    }

    #[must_use]
    pub fn prev_pc(&self) -> u16 {
        self.prev_pc
    }

    /// Cycles consumed since construction (reset does not clear this).
    #[must_use]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    #[must_use]
    pub fn halt_state(&self) -> HaltState {
        self.halt
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halt != HaltState::Running
    }

    #[must_use]
    pub fn interrupt_phase(&self) -> Phase {
        self.interrupts.phase(self.regs.p.interrupt_disable())
    }

    // =========================================================================
    // Interrupt lines
    // =========================================================================

    /// Drive the NMI line. A rising edge schedules exactly one take.
    pub fn set_nmi(&mut self, asserted: bool) {
        self.interrupts.set_nmi(asserted);
    }

    /// Drive the IRQ line. Taken at every boundary while asserted and
    /// unmasked.
    pub fn set_irq(&mut self, asserted: bool) {
        self.interrupts.set_irq(asserted);
    }

    /// Drive the set-overflow pin. A high-to-low transition sets V at the
    /// next instruction boundary.
    pub fn set_overflow_line(&mut self, level: bool) {
        self.interrupts.set_overflow_line(level);
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Reset: reload PC from the reset vector, set I and clear pending
    /// interrupt state.
    pub fn reset<B: Bus>(&mut self, bus: &mut B) {
        let mut regs = Registers::new();
        if !self.variant.interrupt_clears_decimal() {
            // NMOS leaves D undefined; keep what was there.
            regs.p.set_decimal(self.regs.p.decimal());
        }
        regs.pc = self.read_vector(bus, self.variant.reset_vector_address());
        self.regs = regs;
        self.interrupts.reset();
        self.halt = HaltState::Running;
        self.prev_pc = self.regs.pc;
        debug!("{} reset, PC=${:04X}", self.variant.id(), self.regs.pc);
    }

    /// Run whole instructions until at least `budget` cycles are consumed.
    ///
    /// Returns the cycles consumed. This overshoots the budget by less than
    /// the cost of the last instruction; the caller carries the overshoot
    /// into the next slice. A halted core consumes the rest of the budget.
    pub fn run<B: Bus>(&mut self, bus: &mut B, budget: i64) -> i64 {
        let mut remaining = budget;
        while remaining > 0 {
            if self.stays_halted() {
                self.begin_boundary();
                self.total_cycles += remaining as u64;
                remaining = 0;
                break;
            }
            remaining -= i64::from(self.step(bus));
        }
        budget - remaining
    }

    /// Execute one instruction, preceded by an interrupt take if one is
    /// due. Returns the cycles consumed. A halted core idles for one cycle.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        self.begin_boundary();

        if self.stays_halted() {
            self.total_cycles += 1;
            return 1;
        }

        let mut cycles = 0;
        if let Some(kind) = self.interrupts.poll(self.regs.p.interrupt_disable()) {
            cycles += self.take_interrupt(bus, kind);
        }
        if self.halt == HaltState::Waiting {
            // Woken by a masked IRQ: continue without taking it.
            debug!("WAI released at ${:04X}", self.regs.pc);
            self.halt = HaltState::Running;
        }

        let pc = self.regs.pc;
        let opcode = bus.fetch_opcode(pc);
        self.regs.pc = pc.wrapping_add(1);
        let instr = self.variant.dispatch(opcode);
        let cost = self.execute(bus, instr);
        trace!(
            "${pc:04X}: {:02X} {} {:?} ({cost} cycles)",
            opcode,
            instr.op.mnemonic(),
            instr.mode
        );

        cycles += cost;
        self.total_cycles += u64::from(cycles);
        cycles
    }

    /// Boundary bookkeeping shared by running and halted cores: record the
    /// previous PC and apply a pending set-overflow edge.
    fn begin_boundary(&mut self) {
        self.prev_pc = self.regs.pc;
        if self.interrupts.take_overflow_edge() {
            self.regs.p.set_overflow(true);
        }
    }

    /// Whether the core has nothing to do at this boundary.
    fn stays_halted(&self) -> bool {
        match self.halt {
            HaltState::Running => false,
            HaltState::Waiting => !self.interrupts.wakes_waiting_core(),
            HaltState::Stopped | HaltState::Jammed => true,
        }
    }

    /// Push PC and P, set I, load the vector and acknowledge.
    fn take_interrupt<B: Bus>(&mut self, bus: &mut B, kind: InterruptKind) -> u32 {
        let (vector, cost) = match kind {
            InterruptKind::Nmi => (self.variant.nmi_vector_address(), self.variant.nmi_cycles()),
            InterruptKind::Irq => (self.variant.irq_vector_address(), self.variant.irq_cycles()),
        };

        let return_pc = self.regs.pc;
        self.push_word(bus, return_pc);
        self.push(bus, self.regs.p.to_byte_irq());
        self.regs.p.set_interrupt_disable(true);
        if self.variant.interrupt_clears_decimal() {
            self.regs.p.set_decimal(false);
        }
        self.regs.pc = self.read_vector(bus, vector);
        self.halt = HaltState::Running;

        debug!(
            "{kind:?} taken at ${return_pc:04X}, vector ${vector:04X} -> ${:04X}",
            self.regs.pc
        );
        bus.acknowledge_interrupt(kind);
        u32::from(cost)
    }
}

impl Cpu for Mos6502 {
    type Registers = Registers;

    fn run<B: Bus>(&mut self, bus: &mut B, budget: i64) -> i64 {
        Mos6502::run(self, bus, budget)
    }

    fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        Mos6502::step(self, bus)
    }

    fn reset<B: Bus>(&mut self, bus: &mut B) {
        Mos6502::reset(self, bus);
    }

    fn set_nmi(&mut self, asserted: bool) {
        Mos6502::set_nmi(self, asserted);
    }

    fn set_irq(&mut self, asserted: bool) {
        Mos6502::set_irq(self, asserted);
    }

    fn pc(&self) -> u16 {
        self.regs.pc
    }

    fn registers(&self) -> Registers {
        self.regs
    }

    fn is_halted(&self) -> bool {
        self.halt != HaltState::Running
    }
}

const QUERY_PATHS: &[&str] = &[
    "pc", "prev_pc", "a", "x", "y", "s", "p", "flags.c", "flags.z", "flags.i", "flags.d",
    "flags.b", "flags.v", "flags.n", "ea", "zp", "cycles", "halted", "irq", "nmi", "so",
    "phase",
];

impl Observable for Mos6502 {
    fn query(&self, path: &str) -> Option<Value> {
        let p = self.regs.p;
        let value = match path {
            "pc" => self.regs.pc.into(),
            "prev_pc" => self.prev_pc.into(),
            "a" => self.regs.a.into(),
            "x" => self.regs.x.into(),
            "y" => self.regs.y.into(),
            "s" => self.regs.s.into(),
            "p" => p.bits().into(),
            "flags.c" => p.is_set(C).into(),
            "flags.z" => p.is_set(Z).into(),
            "flags.i" => p.is_set(I).into(),
            "flags.d" => p.is_set(D).into(),
            "flags.b" => p.is_set(B).into(),
            "flags.v" => p.is_set(V).into(),
            "flags.n" => p.is_set(N).into(),
            "ea" => self.regs.ea.into(),
            "zp" => self.regs.zp.into(),
            "cycles" => self.total_cycles.into(),
            "halted" => Value::Str(self.halt.name()),
            "irq" => self.interrupts.irq_line().into(),
            "nmi" => self.interrupts.nmi_line().into(),
            "so" => self.interrupts.overflow_line().into(),
            "phase" => Value::Str(self.interrupt_phase().name()),
            _ => return None,
        };
        Some(value)
    }

    fn query_paths(&self) -> &'static [&'static str] {
        QUERY_PATHS
    }
}
