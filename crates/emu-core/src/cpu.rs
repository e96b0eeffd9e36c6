//! CPU core trait.

use crate::Bus;

/// A CPU core driven by cycle budgets.
///
/// The bus is passed in, not owned, so the host can share it with other
/// components (video chip, a second CPU) between calls. A core never
/// schedules itself: the host decides how many cycles each core gets per
/// time slice and accounts any overshoot against the next slice.
///
/// CPUs expose their internal state for observation and debugging.
pub trait Cpu {
    /// The type used for register inspection.
    type Registers;

    /// Run whole instructions until at least `budget` cycles are consumed.
    ///
    /// Returns the cycles actually consumed. The result may exceed the
    /// budget by less than the cost of the final instruction; a budget of
    /// zero or less runs nothing.
    fn run<B: Bus>(&mut self, bus: &mut B, budget: i64) -> i64;

    /// Execute exactly one instruction (plus any interrupt taken before it)
    /// and return its cost in cycles.
    fn step<B: Bus>(&mut self, bus: &mut B) -> u32;

    /// Reset the CPU, loading PC from the reset vector.
    fn reset<B: Bus>(&mut self, bus: &mut B);

    /// Drive the non-maskable interrupt line.
    fn set_nmi(&mut self, asserted: bool);

    /// Drive the maskable interrupt request line.
    fn set_irq(&mut self, asserted: bool);

    /// Returns the current program counter.
    fn pc(&self) -> u16;

    /// Returns a snapshot of all registers for inspection.
    fn registers(&self) -> Self::Registers;

    /// Returns true if the CPU is halted (jammed, stopped or waiting).
    fn is_halted(&self) -> bool;
}
