//! Functional test runner for the 6502 family core.
//!
//! Loads a raw image (Klaus Dormann's functional or decimal test, or any
//! self-checking program that ends in a branch to itself) and runs it in
//! fixed cycle slices until the core traps.
//!
//! Download the tests from: https://github.com/Klaus2m5/6502_65C02_functional_tests
//!
//! ```text
//! 6502test 6502_functional_test.bin --start 0400 --success 3469
//! 6502test 65C02_extended_opcodes_test.bin --variant m65c02 --start 0400 --success 24f1
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use emu_core::SimpleBus;
use log::{debug, info};
use mos_6502::{HaltState, Mos6502, VariantId};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Raw binary image
    image: PathBuf,

    /// Address the image is loaded at (hex)
    #[arg(long, value_parser = parse_address, default_value = "0000")]
    load: u16,

    /// CPU variant: m6502, m6510, n2a03, m65c02, m65sc02 or deco16
    #[arg(long, default_value = "m6502")]
    variant: VariantId,

    /// Start address (hex); omit to start from the reset vector
    #[arg(long, value_parser = parse_address)]
    start: Option<u16>,

    /// Trap address that means the test passed (hex)
    #[arg(long, value_parser = parse_address, default_value = "3469")]
    success: u16,

    /// Cycle budget handed to each run() call
    #[arg(long, default_value_t = 10_000)]
    slice: i64,

    /// Give up after this many cycles
    #[arg(long, default_value_t = 500_000_000)]
    max_cycles: u64,
}

/// Parse a hex address with an optional `$` or `0x` prefix.
fn parse_address(text: &str) -> Result<u16, String> {
    let digits = text
        .strip_prefix('$')
        .or_else(|| text.strip_prefix("0x"))
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u16::from_str_radix(digits, 16).map_err(|e| format!("invalid address {text:?}: {e}"))
}

/// How a test image finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Trapped at the success address.
    Passed,
    /// Trapped anywhere else.
    Trapped(u16),
    /// JAM, STP, or WAI with nothing to wake it.
    Halted(HaltState),
    /// Cycle limit reached without a trap.
    TimedOut,
}

/// Run `cpu` in slices until it traps, halts or exceeds `max_cycles`.
fn run_image(
    cpu: &mut Mos6502,
    bus: &mut SimpleBus,
    success: u16,
    slice: i64,
    max_cycles: u64,
) -> Outcome {
    let mut last_report = 0;
    loop {
        cpu.run(bus, slice);

        // A halted core also leaves PC where it was
        if cpu.is_halted() {
            return Outcome::Halted(cpu.halt_state());
        }
        // A trap loop is the last thing executed in every slice
        if cpu.pc() == cpu.prev_pc() {
            return if cpu.pc() == success {
                Outcome::Passed
            } else {
                Outcome::Trapped(cpu.pc())
            };
        }
        if cpu.total_cycles() >= max_cycles {
            return Outcome::TimedOut;
        }

        if cpu.total_cycles() - last_report >= 10_000_000 {
            last_report = cpu.total_cycles();
            debug!(
                "{} million cycles, PC=${:04X}",
                last_report / 1_000_000,
                cpu.pc()
            );
        }
    }
}

/// Build the test machine's memory. The bus keeps no write log, since a
/// full functional test runs for hundreds of millions of cycles.
fn load_image(address: u16, image: &[u8]) -> Result<SimpleBus> {
    ensure!(
        usize::from(address) + image.len() <= 0x1_0000,
        "image of {} bytes at ${address:04X} runs past $FFFF",
        image.len()
    );
    let mut bus = SimpleBus::unlogged();
    bus.load(address, image);
    Ok(bus)
}

/// Raw bytes, mnemonic and mode of the instruction at `pc`.
fn describe(cpu: &Mos6502, bus: &SimpleBus, pc: u16) -> String {
    let instr = cpu.variant().dispatch(bus.peek(pc));
    let bytes: Vec<String> = (0..=instr.mode.operand_len())
        .map(|i| format!("{:02X}", bus.peek(pc.wrapping_add(i))))
        .collect();
    format!("{} {} ({:?})", bytes.join(" "), instr.op.mnemonic(), instr.mode)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    ensure!(args.slice > 0, "--slice must be positive");

    let image = std::fs::read(&args.image)
        .with_context(|| format!("reading {}", args.image.display()))?;

    println!("Running {} on {}", args.image.display(), args.variant);
    println!("Test binary: {} bytes at ${:04X}", image.len(), args.load);

    let mut bus = load_image(args.load, &image)?;

    let mut cpu = Mos6502::new(args.variant);
    cpu.reset(&mut bus);
    if let Some(start) = args.start {
        cpu.set_pc(start);
    }
    info!("starting at ${:04X}", cpu.pc());

    let started = Instant::now();
    let outcome = run_image(
        &mut cpu,
        &mut bus,
        args.success,
        args.slice,
        args.max_cycles,
    );
    let elapsed = started.elapsed();

    println!();
    println!("Statistics:");
    println!("  Total cycles: {}", cpu.total_cycles());
    println!("  Time elapsed: {elapsed:?}");
    #[allow(clippy::cast_precision_loss)]
    let mhz = cpu.total_cycles() as f64 / elapsed.as_secs_f64() / 1_000_000.0;
    println!("  Effective speed: {mhz:.2} MHz");

    if outcome == Outcome::Passed {
        println!("SUCCESS! Trapped at ${:04X}.", args.success);
        return Ok(());
    }

    println!();
    println!("Context:");
    println!("  PC=${:04X} (previous ${:04X})", cpu.pc(), cpu.prev_pc());
    println!("  A=${:02X} X=${:02X} Y=${:02X}", cpu.a(), cpu.x(), cpu.y());
    println!("  SP=${:02X} P=${:02X}", cpu.sp(), cpu.status());
    println!("  At PC: {}", describe(&cpu, &bus, cpu.pc()));
    let around = cpu.pc().saturating_sub(8);
    let bytes: Vec<String> = (0..16)
        .map(|i| format!("{:02X}", bus.peek(around.wrapping_add(i))))
        .collect();
    println!("  Memory from ${around:04X}: {}", bytes.join(" "));

    match outcome {
        Outcome::Passed => Ok(()),
        Outcome::Trapped(pc) => bail!("trapped at ${pc:04X}, expected ${:04X}", args.success),
        Outcome::Halted(state) => bail!("core {} at ${:04X}", state.name(), cpu.pc()),
        Outcome::TimedOut => bail!("no trap within {} cycles", args.max_cycles),
    }
}
