//! Core traits and types for cycle-accurate emulation.
//!
//! CPU cores see the machine only through [`Bus`], and hosts drive them only
//! through [`Cpu`]. Nothing here holds global state, so any number of cores
//! can share a process.

mod bus;
mod cpu;
mod observable;
mod simple_bus;

pub use bus::{Bus, InterruptKind};
pub use cpu::Cpu;
pub use observable::{Observable, Value};
pub use simple_bus::SimpleBus;
