//! Instruction behavior and per-instruction cycle costs, one program at a
//! time on a flat RAM bus.

use emu_core::{Bus, SimpleBus};
use mos_6502::{HaltState, Mos6502, VariantId, flags};

/// Run one complete instruction and return its cycle cost.
fn run_instruction(cpu: &mut Mos6502, bus: &mut SimpleBus) -> u32 {
    cpu.step(bus)
}

/// Run `count` instructions and collect their costs.
fn run_costs(cpu: &mut Mos6502, bus: &mut SimpleBus, count: usize) -> Vec<u32> {
    (0..count).map(|_| run_instruction(cpu, bus)).collect()
}

/// Load a program at $0200 and set PC there.
fn setup_program(bus: &mut SimpleBus, cpu: &mut Mos6502, program: &[u8]) {
    bus.load(0x0200, program);
    cpu.regs.pc = 0x0200;
}

const NMOS_FAMILY: [VariantId; 3] = [VariantId::M6502, VariantId::M6510, VariantId::N2A03];

// ============================================================================
// Stack and subroutines
// ============================================================================

#[test]
fn test_stack_round_trip() {
    let program = [
        0xA2, 0xFF, // LDX #$FF
        0x9A, // TXS
        0xA9, 0x42, // LDA #$42
        0x48, // PHA
        0xA9, 0x00, // LDA #$00
        0x68, // PLA
        0x08, // PHP
        0x28, // PLP
    ];

    for variant in VariantId::ALL {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(variant);
        setup_program(&mut bus, &mut cpu, &program);

        let costs = run_costs(&mut cpu, &mut bus, 8);
        assert_eq!(costs, [2, 2, 2, 3, 2, 4, 3, 4], "{variant}");
        assert_eq!(cpu.regs.a, 0x42, "{variant}");
        assert_eq!(cpu.regs.s, 0xFF, "{variant}");
        // PHP overwrote the PHA slot; B is set in the pushed copy only
        assert_eq!(bus.peek(0x01FF), flags::U | flags::B | flags::I, "{variant}");
        assert!(!cpu.regs.p.is_set(flags::B), "{variant}");
    }
}

#[test]
fn test_index_register_push_pull_is_cmos_only() {
    let program = [
        0xA2, 0xFF, // LDX #$FF
        0x9A, // TXS
        0xA2, 0x11, // LDX #$11
        0xA0, 0x22, // LDY #$22
        0xDA, // PHX
        0x5A, // PHY
        0xFA, // PLX
        0x7A, // PLY
    ];

    for (variant, costs, x, y) in [
        (VariantId::M65C02, [2, 2, 2, 2, 3, 3, 4, 4], 0x22, 0x11),
        (VariantId::M65SC02, [2, 2, 2, 2, 3, 3, 4, 4], 0x22, 0x11),
        // One-byte NOPs on NMOS
        (VariantId::M6502, [2, 2, 2, 2, 2, 2, 2, 2], 0x11, 0x22),
    ] {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(variant);
        setup_program(&mut bus, &mut cpu, &program);

        assert_eq!(run_costs(&mut cpu, &mut bus, 8), costs, "{variant}");
        assert_eq!((cpu.regs.x, cpu.regs.y), (x, y), "{variant}");
        assert_eq!(cpu.regs.s, 0xFF, "{variant}");
        assert_eq!(cpu.pc(), 0x020B, "{variant}");
    }
}

#[test]
fn test_jsr_rts() {
    for variant in VariantId::ALL {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(variant);
        cpu.regs.s = 0xFF;
        bus.write(0x0300, 0x60); // RTS
        setup_program(&mut bus, &mut cpu, &[0x20, 0x00, 0x03, 0xE8]); // JSR $0300; INX

        assert_eq!(run_instruction(&mut cpu, &mut bus), 6, "{variant}");
        assert_eq!(cpu.pc(), 0x0300);
        // Return address is the last byte of the JSR
        assert_eq!(bus.peek(0x01FF), 0x02);
        assert_eq!(bus.peek(0x01FE), 0x02);
        assert_eq!(cpu.regs.s, 0xFD);

        assert_eq!(run_instruction(&mut cpu, &mut bus), 6, "{variant}");
        assert_eq!(cpu.pc(), 0x0203);
        assert_eq!(run_instruction(&mut cpu, &mut bus), 2, "{variant}");
        assert_eq!(cpu.regs.x, 1);
    }
}

#[test]
fn test_brk_frame_and_rti() {
    let program = [
        0xA2, 0xFF, // LDX #$FF    @ $0200
        0x9A, // TXS         @ $0202
        0x58, // CLI         @ $0203
        0x00, // BRK         @ $0204
        0xEA, // padding     @ $0205
        0xE8, // INX         @ $0206
    ];

    for variant in [
        VariantId::M6502,
        VariantId::M6510,
        VariantId::N2A03,
        VariantId::M65C02,
        VariantId::M65SC02,
    ] {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(variant);
        bus.poke_word(0xFFFE, 0x0300);
        bus.write(0x0300, 0x40); // RTI
        setup_program(&mut bus, &mut cpu, &program);

        assert_eq!(run_costs(&mut cpu, &mut bus, 4), [2, 2, 2, 7], "{variant}");
        assert_eq!(cpu.pc(), 0x0300, "{variant}");
        assert_eq!(cpu.regs.s, 0xFC, "{variant}");
        assert!(cpu.regs.p.interrupt_disable(), "{variant}");

        // Return address skips the padding byte
        assert_eq!(bus.peek(0x01FF), 0x02);
        assert_eq!(bus.peek(0x01FE), 0x06);
        let pushed = bus.peek(0x01FD);
        assert_eq!(pushed & (flags::B | flags::U), flags::B | flags::U);
        assert_eq!(pushed & flags::I, 0, "CLI ran before BRK");
        assert_eq!(pushed & flags::N, flags::N, "LDX #$FF left N set");

        assert_eq!(run_instruction(&mut cpu, &mut bus), 6, "{variant}");
        assert_eq!(cpu.pc(), 0x0206);
        assert_eq!(cpu.regs.s, 0xFF);
        assert!(!cpu.regs.p.interrupt_disable());
        assert!(!cpu.regs.p.is_set(flags::B));

        assert_eq!(run_instruction(&mut cpu, &mut bus), 2, "{variant}");
        assert_eq!(cpu.regs.x, 0x00);
    }
}

// ============================================================================
// NMOS undocumented opcodes
// ============================================================================

/// One undocumented instruction: inputs, expected outputs and cost. The
/// memory operand always lives at $10.
struct Undocumented {
    name: &'static str,
    program: &'static [u8],
    a: u8,
    x: u8,
    carry: bool,
    mem: u8,
    cost: u32,
    a_out: u8,
    x_out: u8,
    carry_out: bool,
    mem_out: u8,
}

#[rustfmt::skip]
const UNDOCUMENTED: &[Undocumented] = &[
    Undocumented { name: "LAX zp", program: &[0xA7, 0x10], a: 0x00, x: 0x00, carry: false, mem: 0x8F,
        cost: 3, a_out: 0x8F, x_out: 0x8F, carry_out: false, mem_out: 0x8F },
    Undocumented { name: "SAX zp", program: &[0x87, 0x10], a: 0xF0, x: 0x3C, carry: false, mem: 0x00,
        cost: 3, a_out: 0xF0, x_out: 0x3C, carry_out: false, mem_out: 0x30 },
    Undocumented { name: "SLO zp", program: &[0x07, 0x10], a: 0x01, x: 0x00, carry: false, mem: 0x81,
        cost: 5, a_out: 0x03, x_out: 0x00, carry_out: true, mem_out: 0x02 },
    Undocumented { name: "SLO zp,X", program: &[0x17, 0x0C], a: 0x01, x: 0x04, carry: false, mem: 0x81,
        cost: 6, a_out: 0x03, x_out: 0x04, carry_out: true, mem_out: 0x02 },
    Undocumented { name: "RLA zp", program: &[0x27, 0x10], a: 0xFF, x: 0x00, carry: true, mem: 0x81,
        cost: 5, a_out: 0x03, x_out: 0x00, carry_out: true, mem_out: 0x03 },
    Undocumented { name: "SRE zp", program: &[0x47, 0x10], a: 0x0F, x: 0x00, carry: false, mem: 0x03,
        cost: 5, a_out: 0x0E, x_out: 0x00, carry_out: true, mem_out: 0x01 },
    Undocumented { name: "DCP zp", program: &[0xC7, 0x10], a: 0x42, x: 0x00, carry: false, mem: 0x43,
        cost: 5, a_out: 0x42, x_out: 0x00, carry_out: true, mem_out: 0x42 },
    Undocumented { name: "ISC zp", program: &[0xE7, 0x10], a: 0x20, x: 0x00, carry: true, mem: 0x0F,
        cost: 5, a_out: 0x10, x_out: 0x00, carry_out: true, mem_out: 0x10 },
    Undocumented { name: "ANC #", program: &[0x0B, 0x80], a: 0xFF, x: 0x00, carry: false, mem: 0x00,
        cost: 2, a_out: 0x80, x_out: 0x00, carry_out: true, mem_out: 0x00 },
    Undocumented { name: "ALR #", program: &[0x4B, 0x03], a: 0xFF, x: 0x00, carry: false, mem: 0x00,
        cost: 2, a_out: 0x01, x_out: 0x00, carry_out: true, mem_out: 0x00 },
    Undocumented { name: "SBX #", program: &[0xCB, 0x05], a: 0xFF, x: 0x0F, carry: false, mem: 0x00,
        cost: 2, a_out: 0xFF, x_out: 0x0A, carry_out: true, mem_out: 0x00 },
];

#[test]
fn test_undocumented_opcodes_on_nmos_family() {
    for variant in NMOS_FAMILY {
        for case in UNDOCUMENTED {
            let mut bus = SimpleBus::new();
            let mut cpu = Mos6502::new(variant);
            bus.write(0x0010, case.mem);
            cpu.regs.a = case.a;
            cpu.regs.x = case.x;
            cpu.regs.p.set_carry(case.carry);
            cpu.regs.p.set_decimal(false);
            setup_program(&mut bus, &mut cpu, case.program);

            let label = format!("{} on {variant}", case.name);
            assert_eq!(run_instruction(&mut cpu, &mut bus), case.cost, "{label}");
            assert_eq!(cpu.regs.a, case.a_out, "{label}: A");
            assert_eq!(cpu.regs.x, case.x_out, "{label}: X");
            assert_eq!(cpu.regs.p.carry(), case.carry_out, "{label}: C");
            assert_eq!(bus.peek(0x0010), case.mem_out, "{label}: $10");
            assert_eq!(cpu.pc(), 0x0200 + case.program.len() as u16, "{label}: PC");
        }
    }
}

#[test]
fn test_undocumented_rmw_writes_twice() {
    // SLO $10 on NMOS writes the old value back before the result
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new(VariantId::N2A03);
    bus.write(0x0010, 0x81);
    setup_program(&mut bus, &mut cpu, &[0x07, 0x10]);
    bus.clear_log();

    run_instruction(&mut cpu, &mut bus);
    assert_eq!(bus.writes(), &[(0x0010, 0x81), (0x0010, 0x02)]);
}

#[test]
fn test_nmos_nop_slots_consume_operands() {
    for (program, cost) in [
        (&[0x1A][..], 2),
        (&[0x80, 0x10][..], 2),
        (&[0x04, 0x10][..], 3),
        (&[0x14, 0x10][..], 4),
        (&[0x0C, 0x00, 0x10][..], 4),
        (&[0x1C, 0x00, 0x10][..], 4),
        // $10FF + X crosses into $1100
        (&[0x1C, 0xFF, 0x10][..], 5),
    ] {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(VariantId::M6502);
        cpu.regs.a = 0x42;
        cpu.regs.x = 0x01;
        let status = cpu.regs.p;
        setup_program(&mut bus, &mut cpu, program);
        bus.clear_log();

        let opcode = program[0];
        assert_eq!(run_instruction(&mut cpu, &mut bus), cost, "${opcode:02X}");
        assert_eq!(cpu.pc(), 0x0200 + program.len() as u16, "${opcode:02X}");
        assert_eq!(cpu.regs.a, 0x42);
        assert_eq!(cpu.regs.p, status);
        assert!(bus.writes().is_empty());
    }
}

#[test]
fn test_jam_halts_until_reset() {
    for jam in [0x02, 0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x72, 0x92, 0xB2, 0xD2, 0xF2] {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(VariantId::M6502);
        setup_program(&mut bus, &mut cpu, &[jam, 0xA9, 0x42]); // JAM; LDA #$42

        run_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.halt_state(), HaltState::Jammed, "${jam:02X}");

        // A jammed core idles on the JAM opcode, even with NMI pending
        cpu.set_nmi(true);
        assert_eq!(run_instruction(&mut cpu, &mut bus), 1);
        assert_eq!(cpu.run(&mut bus, 100), 100);
        assert_eq!(cpu.pc(), 0x0200, "${jam:02X}");
        assert_eq!(cpu.regs.a, 0x00);

        bus.poke_word(0xFFFC, 0x0201);
        cpu.reset(&mut bus);
        assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
        assert_eq!(cpu.regs.a, 0x42);
    }
}

// ============================================================================
// The same slots on CMOS parts
// ============================================================================

#[test]
fn test_undocumented_slots_on_cmos() {
    // (program, $10 before, 65C02 (cost, length, $10 after), 65SC02 likewise)
    #[rustfmt::skip]
    let cases: [(&[u8], u8, (u32, u16, u8), (u32, u16, u8)); 9] = [
        (&[0xA7, 0x10], 0x00, (5, 2, 0x04), (1, 1, 0x00)), // SMB2 / NOP
        (&[0x07, 0x10], 0xFF, (5, 2, 0xFE), (1, 1, 0xFF)), // RMB0 / NOP
        (&[0x0B], 0x5A, (1, 1, 0x5A), (1, 1, 0x5A)),
        (&[0x03], 0x5A, (1, 1, 0x5A), (1, 1, 0x5A)),
        (&[0x02, 0x10], 0x5A, (2, 2, 0x5A), (2, 2, 0x5A)), // JAM on NMOS
        (&[0x44, 0x10], 0x5A, (3, 2, 0x5A), (3, 2, 0x5A)),
        (&[0xF4, 0x10], 0x5A, (4, 2, 0x5A), (4, 2, 0x5A)),
        (&[0x5C, 0x00, 0x10], 0x5A, (8, 3, 0x5A), (8, 3, 0x5A)),
        (&[0xDC, 0x00, 0x10], 0x5A, (4, 3, 0x5A), (4, 3, 0x5A)),
    ];

    for (program, mem, c02, sc02) in cases {
        for (variant, (cost, length, mem_out)) in
            [(VariantId::M65C02, c02), (VariantId::M65SC02, sc02)]
        {
            let mut bus = SimpleBus::new();
            let mut cpu = Mos6502::new(variant);
            bus.write(0x0010, mem);
            cpu.regs.a = 0x42;
            setup_program(&mut bus, &mut cpu, program);

            let label = format!("${:02X} on {variant}", program[0]);
            assert_eq!(run_instruction(&mut cpu, &mut bus), cost, "{label}");
            assert_eq!(cpu.pc(), 0x0200 + length, "{label}");
            assert_eq!(bus.peek(0x0010), mem_out, "{label}");
            assert_eq!(cpu.regs.a, 0x42, "{label}");
            assert!(!cpu.is_halted(), "{label}");
        }
    }
}

// ============================================================================
// Cycle costs
// ============================================================================

#[test]
fn test_indexed_read_page_cross_costs_one_cycle() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::default();

    let program = [
        0xA2, 0x01, // LDX #$01
        0xBD, 0x00, 0x10, // LDA $1000,X (same page)
        0xBD, 0xFF, 0x10, // LDA $10FF,X (crosses to $1100)
        0x9D, 0x00, 0x10, // STA $1000,X (stores never pay extra)
    ];
    setup_program(&mut bus, &mut cpu, &program);

    assert_eq!(run_instruction(&mut cpu, &mut bus), 2);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5);
}

#[test]
fn test_branch_costs() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::default();

    // Branch at $02FD so the taken target crosses into page 3
    bus.load(0x02FD, &[0xD0, 0x10]); // BNE +$10 -> $030F
    cpu.regs.pc = 0x02FD;
    cpu.regs.p.set_zero(true);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 2, "not taken");

    cpu.regs.pc = 0x02FD;
    cpu.regs.p.set_zero(false);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 4, "taken, page crossed");
    assert_eq!(cpu.pc(), 0x030F);

    bus.load(0x0200, &[0xD0, 0x02]); // BNE +2
    cpu.regs.pc = 0x0200;
    assert_eq!(run_instruction(&mut cpu, &mut bus), 3, "taken, same page");
    assert_eq!(cpu.pc(), 0x0204);
}

// ============================================================================
// NMOS and CMOS differences
// ============================================================================

#[test]
fn test_jmp_indirect_page_wrap_is_nmos_only() {
    for (variant, expected) in [(VariantId::M6502, 0x1234), (VariantId::M65C02, 0x5634)] {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(variant);

        bus.write(0x10FF, 0x34);
        bus.write(0x1000, 0x12); // NMOS fetches the high byte here
        bus.write(0x1100, 0x56); // CMOS fetches it here
        setup_program(&mut bus, &mut cpu, &[0x6C, 0xFF, 0x10]);

        run_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.pc(), expected, "{variant}");
    }
}

#[test]
fn test_rmw_dummy_access_differs_by_variant() {
    // NMOS: read, write old value, write new value
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new(VariantId::M6502);
    bus.write(0x0010, 0x41);
    setup_program(&mut bus, &mut cpu, &[0xE6, 0x10]); // INC $10
    bus.clear_log();
    run_instruction(&mut cpu, &mut bus);
    assert_eq!(bus.writes(), &[(0x0010, 0x41), (0x0010, 0x42)]);

    // CMOS: only the final write
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new(VariantId::M65C02);
    bus.write(0x0010, 0x41);
    setup_program(&mut bus, &mut cpu, &[0xE6, 0x10]);
    bus.clear_log();
    run_instruction(&mut cpu, &mut bus);
    assert_eq!(bus.writes(), &[(0x0010, 0x42)]);
}

#[test]
fn test_decimal_mode_per_variant() {
    // SED; CLC; LDA #$19; ADC #$28
    let program = [0xF8, 0x18, 0xA9, 0x19, 0x69, 0x28];

    for (variant, result, adc_cycles) in [
        (VariantId::M6502, 0x47, 2),
        (VariantId::N2A03, 0x41, 2),
        (VariantId::M65C02, 0x47, 3),
    ] {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(variant);
        setup_program(&mut bus, &mut cpu, &program);
        for _ in 0..3 {
            run_instruction(&mut cpu, &mut bus);
        }
        assert_eq!(run_instruction(&mut cpu, &mut bus), adc_cycles, "{variant}");
        assert_eq!(cpu.regs.a, result, "{variant}");
    }
}

#[test]
fn test_brk_clears_decimal_on_cmos_only() {
    for (variant, decimal_after) in [(VariantId::M6502, true), (VariantId::M65C02, false)] {
        let mut bus = SimpleBus::new();
        let mut cpu = Mos6502::new(variant);
        bus.poke_word(0xFFFE, 0x0300);
        setup_program(&mut bus, &mut cpu, &[0xF8, 0x00, 0xEA]); // SED; BRK
        run_instruction(&mut cpu, &mut bus);
        run_instruction(&mut cpu, &mut bus);
        assert_eq!(cpu.pc(), 0x0300);
        assert_eq!(cpu.regs.p.decimal(), decimal_after, "{variant}");
        assert!(bus.peek(0x01FB) & flags::D != 0, "pushed P keeps D");
    }
}

#[test]
fn test_cmos_bra_stz_and_accumulator_inc() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new(VariantId::M65C02);
    bus.write(0x0040, 0xFF);

    let program = [
        0x80, 0x01, // BRA +1
        0xEA, // (skipped)
        0x64, 0x40, // STZ $40
        0xA9, 0x7F, // LDA #$7F
        0x1A, // INC A
    ];
    setup_program(&mut bus, &mut cpu, &program);

    assert_eq!(run_instruction(&mut cpu, &mut bus), 3);
    assert_eq!(cpu.pc(), 0x0203);
    run_instruction(&mut cpu, &mut bus);
    assert_eq!(bus.peek(0x0040), 0x00);
    run_instruction(&mut cpu, &mut bus);
    run_instruction(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x80);
    assert!(cpu.regs.p.negative());
}

#[test]
fn test_cmos_tsb_trb() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new(VariantId::M65C02);
    bus.write(0x0040, 0xF0);

    let program = [
        0xA9, 0x0F, // LDA #$0F
        0x04, 0x40, // TSB $40
        0x14, 0x40, // TRB $40
    ];
    setup_program(&mut bus, &mut cpu, &program);

    run_instruction(&mut cpu, &mut bus);
    run_instruction(&mut cpu, &mut bus);
    assert_eq!(bus.peek(0x0040), 0xFF);
    assert!(cpu.regs.p.zero(), "A AND old value was zero");

    run_instruction(&mut cpu, &mut bus);
    assert_eq!(bus.peek(0x0040), 0xF0);
    assert!(!cpu.regs.p.zero());
}

#[test]
fn test_rockwell_bit_instructions() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new(VariantId::M65C02);

    let program = [
        0xB7, 0x20, // SMB3 $20
        0x3F, 0x20, 0x05, // BBR3 $20,+5 (not taken)
        0xBF, 0x20, 0x02, // BBS3 $20,+2 (taken)
        0xEA, 0xEA, // (skipped)
        0x37, 0x20, // RMB3 $20
    ];
    setup_program(&mut bus, &mut cpu, &program);

    run_instruction(&mut cpu, &mut bus);
    assert_eq!(bus.peek(0x0020), 0x08);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 5);
    assert_eq!(cpu.pc(), 0x0205);
    assert_eq!(run_instruction(&mut cpu, &mut bus), 6);
    assert_eq!(cpu.pc(), 0x020A);
    run_instruction(&mut cpu, &mut bus);
    assert_eq!(bus.peek(0x0020), 0x00);
}

#[test]
fn test_65sc02_lacks_bit_instructions() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new(VariantId::M65SC02);
    bus.write(0x0020, 0x00);
    setup_program(&mut bus, &mut cpu, &[0xB7, 0xEA]);

    assert_eq!(run_instruction(&mut cpu, &mut bus), 1);
    assert_eq!(cpu.pc(), 0x0201);
    assert_eq!(bus.peek(0x0020), 0x00);
}

#[test]
fn test_stp_halts_until_reset() {
    let mut bus = SimpleBus::new();
    let mut cpu = Mos6502::new(VariantId::M65C02);
    setup_program(&mut bus, &mut cpu, &[0xDB, 0xA9, 0x42]);

    run_instruction(&mut cpu, &mut bus);
    assert_eq!(cpu.halt_state(), HaltState::Stopped);
    cpu.set_irq(true);
    cpu.set_nmi(true);
    assert_eq!(cpu.run(&mut bus, 50), 50);
    assert_eq!(cpu.pc(), 0x0201);
    assert_ne!(cpu.regs.a, 0x42);
}
