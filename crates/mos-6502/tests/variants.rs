//! Per-variant configuration: vectors, byte order and custom descriptors.

use emu_core::{Bus, InterruptKind, SimpleBus};
use mos_6502::opcode::{Instruction, Mode, Op};
use mos_6502::{ConfigError, Mos6502, VariantDescriptor, VariantId, VectorOrder};

/// Write `target` into a vector using the variant's byte order.
fn poke_vector(bus: &mut SimpleBus, variant: &VariantDescriptor, addr: u16, target: u16) {
    let bytes = match variant.vector_order() {
        VectorOrder::LowThenHigh => target.to_le_bytes(),
        VectorOrder::HighThenLow => target.to_be_bytes(),
    };
    bus.load(addr, &bytes);
}

#[test]
fn reset_loads_pc_from_vector_for_every_variant() {
    for id in VariantId::ALL {
        let mut cpu = Mos6502::new(id);
        let mut bus = SimpleBus::new();
        let addr = cpu.variant().reset_vector_address();
        bus.write(addr, 0x12);
        bus.write(addr.wrapping_add(1), 0x34);

        cpu.set_pc(0xDEAD);
        cpu.reset(&mut bus);

        let expected = cpu.variant().vector_order().assemble(0x12, 0x34);
        assert_eq!(cpu.pc(), expected, "{id}");
        assert!(cpu.regs.p.interrupt_disable(), "{id}");
        assert!(!cpu.is_halted(), "{id}");
    }
}

#[test]
fn standard_reset_vector_bytes() {
    let mut bus = SimpleBus::new();
    bus.load(0xFFFC, &[0x00, 0x80]);
    let mut cpu = Mos6502::new(VariantId::M6502);
    cpu.reset(&mut bus);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn deco16_reads_vectors_high_byte_first() {
    let mut bus = SimpleBus::new();
    bus.load(0xFFF0, &[0x80, 0x00]); // reset -> $8000
    bus.load(0xFFF2, &[0x90, 0x00]); // irq -> $9000
    bus.load(0xFFF4, &[0xA0, 0x00]); // nmi -> $A000
    bus.load(0x8000, &[0x58, 0xEA, 0xEA, 0xEA]); // CLI; NOP...
    bus.load(0xA000, &[0xEA]);

    let mut cpu = Mos6502::new(VariantId::Deco16);
    cpu.reset(&mut bus);
    assert_eq!(cpu.pc(), 0x8000);

    cpu.set_nmi(true);
    cpu.step(&mut bus);
    assert_eq!(cpu.prev_pc(), 0x8000);
    assert_eq!(cpu.pc(), 0xA001);
    assert_eq!(bus.acks(), &[InterruptKind::Nmi]);

    // BRK shares the IRQ vector
    let mut bus = SimpleBus::new();
    bus.load(0xFFF0, &[0x80, 0x00]);
    bus.load(0xFFF2, &[0x90, 0x00]);
    bus.load(0x8000, &[0x00, 0xEA]);
    cpu.reset(&mut bus);
    cpu.step(&mut bus);
    assert_eq!(cpu.pc(), 0x9000);
}

#[test]
fn every_built_in_interrupt_costs_seven_cycles() {
    for id in VariantId::ALL {
        let variant = VariantDescriptor::new(id);
        assert_eq!(variant.irq_cycles(), 7, "{id}");
        assert_eq!(variant.nmi_cycles(), 7, "{id}");
    }
}

#[test]
fn custom_nmi_cost_is_charged() {
    let variant = VariantDescriptor::builder(VariantId::M6502)
        .interrupt_cycles(7, 9)
        .build()
        .expect("fully mapped");

    let mut bus = SimpleBus::new();
    poke_vector(&mut bus, &variant, variant.reset_vector_address(), 0x0200);
    poke_vector(&mut bus, &variant, variant.nmi_vector_address(), 0x0300);
    bus.load(0x0300, &[0xEA]);

    let mut cpu = Mos6502::with_variant(variant);
    cpu.reset(&mut bus);
    cpu.set_nmi(true);
    assert_eq!(cpu.step(&mut bus), 9 + 2);
}

#[test]
fn relocated_vectors_and_patched_opcode() {
    let variant = VariantDescriptor::builder(VariantId::M65C02)
        .vectors(0xFFE0, 0xFFE2, 0xFFE4)
        .vector_order(VectorOrder::HighThenLow)
        .map(0x42, Instruction::new(Op::Inx, Mode::Implied, 2))
        .build()
        .expect("fully mapped");
    assert_eq!(variant.id(), VariantId::M65C02);

    let mut bus = SimpleBus::new();
    bus.load(0xFFE0, &[0x02, 0x00]);
    bus.load(0x0200, &[0x42, 0x42]);

    let mut cpu = Mos6502::with_variant(variant);
    cpu.reset(&mut bus);
    assert_eq!(cpu.pc(), 0x0200);
    cpu.run(&mut bus, 4);
    assert_eq!(cpu.x(), 2);
}

#[test]
fn unmapped_slot_is_a_configuration_error() {
    let result = VariantDescriptor::builder(VariantId::N2A03).unmap(0xFF).build();
    assert_eq!(result.err(), Some(ConfigError::UnmappedOpcode(0xFF)));
}

#[test]
fn unknown_variant_name_is_rejected() {
    assert_eq!(
        Mos6502::from_name("m68000").err(),
        Some(ConfigError::UnknownVariant("m68000".to_string()))
    );
    let cpu = Mos6502::from_name("deco16").expect("known");
    assert_eq!(cpu.variant().id(), VariantId::Deco16);
}

#[test]
fn instances_share_one_descriptor() {
    let first = Mos6502::new(VariantId::M65SC02);
    let second = Mos6502::with_variant(first.shared_variant());
    assert!(std::ptr::eq(first.variant(), second.variant()));
}

#[test]
fn built_in_instances_share_one_descriptor() {
    for id in VariantId::ALL {
        let first = Mos6502::new(id);
        let second = Mos6502::new(id);
        let restored = Mos6502::from_context(&first.save());
        assert!(std::ptr::eq(first.variant(), second.variant()), "{id}");
        assert!(std::ptr::eq(first.variant(), restored.variant()), "{id}");
    }

    let nmos = Mos6502::new(VariantId::M6502);
    let cmos = Mos6502::new(VariantId::M65C02);
    assert!(!std::ptr::eq(nmos.variant(), cmos.variant()));
}
