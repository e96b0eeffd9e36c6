//! Interrupt line tracking.
//!
//! Line setters only record levels and latch edges. Nothing happens until
//! the engine polls at the next instruction boundary, so a host may drive
//! lines at any time (including from another core's bus callback) without
//! preempting an instruction.

use emu_core::InterruptKind;
use serde::{Deserialize, Serialize};

/// Where the controller is in the take-interrupt sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No line asserted, nothing pending.
    Idle,
    /// A line is asserted but cannot be taken (IRQ masked, NMI already taken).
    LineAsserted,
    /// An interrupt will be taken at the next instruction boundary.
    Taking,
    /// IRQ recognition is deferred for one instruction after re-enabling.
    AfterEnablePending,
}

impl Phase {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::LineAsserted => "line-asserted",
            Phase::Taking => "taking",
            Phase::AfterEnablePending => "after-enable-pending",
        }
    }
}

/// NMI, IRQ and set-overflow line state plus the latches derived from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterruptController {
    nmi_line: bool,
    irq_line: bool,
    so_line: bool,
    /// Rising NMI edge not yet serviced.
    nmi_pending: bool,
    /// Falling SO edge not yet applied to V.
    so_pending: bool,
    /// Skip the next IRQ check (CLI/PLP latency).
    after_enable: bool,
}

impl InterruptController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nmi_line: false,
            irq_line: false,
            so_line: false,
            nmi_pending: false,
            so_pending: false,
            after_enable: false,
        }
    }

    /// Drive the NMI line. Only a low-to-high transition schedules a take.
    pub fn set_nmi(&mut self, asserted: bool) {
        if asserted && !self.nmi_line {
            self.nmi_pending = true;
        }
        self.nmi_line = asserted;
    }

    /// Drive the IRQ line. Level-sensitive: sampled at every boundary.
    pub fn set_irq(&mut self, asserted: bool) {
        self.irq_line = asserted;
    }

    /// Drive the set-overflow pin. A high-to-low transition sets V.
    pub fn set_overflow_line(&mut self, level: bool) {
        if self.so_line && !level {
            self.so_pending = true;
        }
        self.so_line = level;
    }

    #[must_use]
    pub const fn nmi_line(&self) -> bool {
        self.nmi_line
    }

    #[must_use]
    pub const fn irq_line(&self) -> bool {
        self.irq_line
    }

    #[must_use]
    pub const fn overflow_line(&self) -> bool {
        self.so_line
    }

    /// An instruction has just cleared the disable flag.
    pub(crate) fn arm_after_enable(&mut self) {
        self.after_enable = true;
    }

    /// Consume a pending set-overflow edge.
    pub(crate) fn take_overflow_edge(&mut self) -> bool {
        std::mem::take(&mut self.so_pending)
    }

    /// Whether a halted (WAI) core should resume.
    pub(crate) const fn wakes_waiting_core(&self) -> bool {
        self.nmi_pending || self.irq_line
    }

    /// Instruction-boundary check. Returns the interrupt to take, if any.
    ///
    /// NMI wins and ignores both the disable flag and the after-enable
    /// latch. The latch is cleared by the first check that sees it.
    pub(crate) fn poll(&mut self, interrupt_disable: bool) -> Option<InterruptKind> {
        if self.nmi_pending {
            self.nmi_pending = false;
            return Some(InterruptKind::Nmi);
        }
        if std::mem::take(&mut self.after_enable) {
            return None;
        }
        (self.irq_line && !interrupt_disable).then_some(InterruptKind::Irq)
    }

    /// Clear latches on reset. Line levels are external and persist.
    pub(crate) fn reset(&mut self) {
        self.nmi_pending = false;
        self.so_pending = false;
        self.after_enable = false;
    }

    /// Current phase, given the CPU's disable flag.
    #[must_use]
    pub const fn phase(&self, interrupt_disable: bool) -> Phase {
        if self.nmi_pending {
            Phase::Taking
        } else if self.after_enable {
            Phase::AfterEnablePending
        } else if self.irq_line && !interrupt_disable {
            Phase::Taking
        } else if self.irq_line || self.nmi_line {
            Phase::LineAsserted
        } else {
            Phase::Idle
        }
    }
}
