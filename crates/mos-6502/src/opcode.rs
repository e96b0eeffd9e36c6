//! Opcode dispatch tables.
//!
//! Each opcode byte maps to an [`Instruction`]: an operation, an addressing
//! mode and a base cycle cost. The executor adds the variable costs (page
//! crossings, taken branches, CMOS decimal fix-up). Tables are plain data so
//! variants can share and patch them; see [`crate::variant`].

/// Operation performed by an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    // Documented NMOS set
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,

    // NMOS undocumented
    Slo,
    Rla,
    Sre,
    Rra,
    Sax,
    Lax,
    Dcp,
    Isc,
    Anc,
    Alr,
    Arr,
    Ane,
    Lxa,
    Sbx,
    Las,
    Sha,
    Shx,
    Shy,
    Tas,
    /// Locks the CPU until reset.
    Jam,

    // CMOS additions
    Bra,
    Phx,
    Phy,
    Plx,
    Ply,
    Stz,
    Trb,
    Tsb,
    /// Reset memory bit n (Rockwell).
    Rmb(u8),
    /// Set memory bit n (Rockwell).
    Smb(u8),
    /// Branch if memory bit n is reset (Rockwell).
    Bbr(u8),
    /// Branch if memory bit n is set (Rockwell).
    Bbs(u8),
    /// Wait for interrupt.
    Wai,
    /// Stop the clock until reset.
    Stp,
}

impl Op {
    /// Mnemonic for traces and disassembly.
    #[must_use]
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::Adc => "ADC",
            Op::And => "AND",
            Op::Asl => "ASL",
            Op::Bcc => "BCC",
            Op::Bcs => "BCS",
            Op::Beq => "BEQ",
            Op::Bit => "BIT",
            Op::Bmi => "BMI",
            Op::Bne => "BNE",
            Op::Bpl => "BPL",
            Op::Brk => "BRK",
            Op::Bvc => "BVC",
            Op::Bvs => "BVS",
            Op::Clc => "CLC",
            Op::Cld => "CLD",
            Op::Cli => "CLI",
            Op::Clv => "CLV",
            Op::Cmp => "CMP",
            Op::Cpx => "CPX",
            Op::Cpy => "CPY",
            Op::Dec => "DEC",
            Op::Dex => "DEX",
            Op::Dey => "DEY",
            Op::Eor => "EOR",
            Op::Inc => "INC",
            Op::Inx => "INX",
            Op::Iny => "INY",
            Op::Jmp => "JMP",
            Op::Jsr => "JSR",
            Op::Lda => "LDA",
            Op::Ldx => "LDX",
            Op::Ldy => "LDY",
            Op::Lsr => "LSR",
            Op::Nop => "NOP",
            Op::Ora => "ORA",
            Op::Pha => "PHA",
            Op::Php => "PHP",
            Op::Pla => "PLA",
            Op::Plp => "PLP",
            Op::Rol => "ROL",
            Op::Ror => "ROR",
            Op::Rti => "RTI",
            Op::Rts => "RTS",
            Op::Sbc => "SBC",
            Op::Sec => "SEC",
            Op::Sed => "SED",
            Op::Sei => "SEI",
            Op::Sta => "STA",
            Op::Stx => "STX",
            Op::Sty => "STY",
            Op::Tax => "TAX",
            Op::Tay => "TAY",
            Op::Tsx => "TSX",
            Op::Txa => "TXA",
            Op::Txs => "TXS",
            Op::Tya => "TYA",
            Op::Slo => "SLO",
            Op::Rla => "RLA",
            Op::Sre => "SRE",
            Op::Rra => "RRA",
            Op::Sax => "SAX",
            Op::Lax => "LAX",
            Op::Dcp => "DCP",
            Op::Isc => "ISC",
            Op::Anc => "ANC",
            Op::Alr => "ALR",
            Op::Arr => "ARR",
            Op::Ane => "ANE",
            Op::Lxa => "LXA",
            Op::Sbx => "SBX",
            Op::Las => "LAS",
            Op::Sha => "SHA",
            Op::Shx => "SHX",
            Op::Shy => "SHY",
            Op::Tas => "TAS",
            Op::Jam => "JAM",
            Op::Bra => "BRA",
            Op::Phx => "PHX",
            Op::Phy => "PHY",
            Op::Plx => "PLX",
            Op::Ply => "PLY",
            Op::Stz => "STZ",
            Op::Trb => "TRB",
            Op::Tsb => "TSB",
            Op::Rmb(_) => "RMB",
            Op::Smb(_) => "SMB",
            Op::Bbr(_) => "BBR",
            Op::Bbs(_) => "BBS",
            Op::Wai => "WAI",
            Op::Stp => "STP",
        }
    }
}

/// How an instruction finds its operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    /// `JMP ($nnnn)`.
    Indirect,
    /// `JMP ($nnnn,X)` (CMOS).
    AbsoluteIndexedIndirect,
    /// `($nn,X)`.
    IndexedIndirect,
    /// `($nn),Y`.
    IndirectIndexed,
    /// `($nn)` (CMOS).
    ZeroPageIndirect,
    Relative,
    /// `$nn,rel` (BBR/BBS).
    ZeroPageRelative,
}

impl Mode {
    /// Operand bytes following the opcode.
    #[must_use]
    pub const fn operand_len(self) -> u16 {
        match self {
            Mode::Implied | Mode::Accumulator => 0,
            Mode::Immediate
            | Mode::ZeroPage
            | Mode::ZeroPageX
            | Mode::ZeroPageY
            | Mode::IndexedIndirect
            | Mode::IndirectIndexed
            | Mode::ZeroPageIndirect
            | Mode::Relative => 1,
            Mode::Absolute
            | Mode::AbsoluteX
            | Mode::AbsoluteY
            | Mode::Indirect
            | Mode::AbsoluteIndexedIndirect
            | Mode::ZeroPageRelative => 2,
        }
    }
}

/// One dispatch table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub op: Op,
    pub mode: Mode,
    /// Cycle cost before variable penalties.
    pub cycles: u8,
    /// Add a cycle when indexing crosses a page.
    pub page_penalty: bool,
}

impl Instruction {
    #[must_use]
    pub const fn new(op: Op, mode: Mode, cycles: u8) -> Self {
        Self {
            op,
            mode,
            cycles,
            page_penalty: false,
        }
    }

    /// Entry whose cost grows by one when the indexed address crosses a page.
    #[must_use]
    pub const fn with_page_penalty(op: Op, mode: Mode, cycles: u8) -> Self {
        Self {
            op,
            mode,
            cycles,
            page_penalty: true,
        }
    }
}

#[allow(clippy::enum_glob_use)]
use Op::*;

const IMP: Mode = Mode::Implied;
const ACC: Mode = Mode::Accumulator;
const IMM: Mode = Mode::Immediate;
const ZP: Mode = Mode::ZeroPage;
const ZPX: Mode = Mode::ZeroPageX;
const ZPY: Mode = Mode::ZeroPageY;
const ABS: Mode = Mode::Absolute;
const ABX: Mode = Mode::AbsoluteX;
const ABY: Mode = Mode::AbsoluteY;
const IND: Mode = Mode::Indirect;
const AIX: Mode = Mode::AbsoluteIndexedIndirect;
const IZX: Mode = Mode::IndexedIndirect;
const IZY: Mode = Mode::IndirectIndexed;
const ZPI: Mode = Mode::ZeroPageIndirect;
const REL: Mode = Mode::Relative;
const ZPR: Mode = Mode::ZeroPageRelative;

const fn i(op: Op, mode: Mode, cycles: u8) -> Instruction {
    Instruction::new(op, mode, cycles)
}

const fn p(op: Op, mode: Mode, cycles: u8) -> Instruction {
    Instruction::with_page_penalty(op, mode, cycles)
}

/// NMOS 6502 including the undocumented opcodes.
#[rustfmt::skip]
pub static NMOS: [Instruction; 256] = [
    // 0x00
    i(Brk, IMP, 7), i(Ora, IZX, 6), i(Jam, IMP, 2), i(Slo, IZX, 8),
    i(Nop, ZP, 3),  i(Ora, ZP, 3),  i(Asl, ZP, 5),  i(Slo, ZP, 5),
    i(Php, IMP, 3), i(Ora, IMM, 2), i(Asl, ACC, 2), i(Anc, IMM, 2),
    i(Nop, ABS, 4), i(Ora, ABS, 4), i(Asl, ABS, 6), i(Slo, ABS, 6),
    // 0x10
    i(Bpl, REL, 2), p(Ora, IZY, 5), i(Jam, IMP, 2), i(Slo, IZY, 8),
    i(Nop, ZPX, 4), i(Ora, ZPX, 4), i(Asl, ZPX, 6), i(Slo, ZPX, 6),
    i(Clc, IMP, 2), p(Ora, ABY, 4), i(Nop, IMP, 2), i(Slo, ABY, 7),
    p(Nop, ABX, 4), p(Ora, ABX, 4), i(Asl, ABX, 7), i(Slo, ABX, 7),
    // 0x20
    i(Jsr, ABS, 6), i(And, IZX, 6), i(Jam, IMP, 2), i(Rla, IZX, 8),
    i(Bit, ZP, 3),  i(And, ZP, 3),  i(Rol, ZP, 5),  i(Rla, ZP, 5),
    i(Plp, IMP, 4), i(And, IMM, 2), i(Rol, ACC, 2), i(Anc, IMM, 2),
    i(Bit, ABS, 4), i(And, ABS, 4), i(Rol, ABS, 6), i(Rla, ABS, 6),
    // 0x30
    i(Bmi, REL, 2), p(And, IZY, 5), i(Jam, IMP, 2), i(Rla, IZY, 8),
    i(Nop, ZPX, 4), i(And, ZPX, 4), i(Rol, ZPX, 6), i(Rla, ZPX, 6),
    i(Sec, IMP, 2), p(And, ABY, 4), i(Nop, IMP, 2), i(Rla, ABY, 7),
    p(Nop, ABX, 4), p(And, ABX, 4), i(Rol, ABX, 7), i(Rla, ABX, 7),
    // 0x40
    i(Rti, IMP, 6), i(Eor, IZX, 6), i(Jam, IMP, 2), i(Sre, IZX, 8),
    i(Nop, ZP, 3),  i(Eor, ZP, 3),  i(Lsr, ZP, 5),  i(Sre, ZP, 5),
    i(Pha, IMP, 3), i(Eor, IMM, 2), i(Lsr, ACC, 2), i(Alr, IMM, 2),
    i(Jmp, ABS, 3), i(Eor, ABS, 4), i(Lsr, ABS, 6), i(Sre, ABS, 6),
    // 0x50
    i(Bvc, REL, 2), p(Eor, IZY, 5), i(Jam, IMP, 2), i(Sre, IZY, 8),
    i(Nop, ZPX, 4), i(Eor, ZPX, 4), i(Lsr, ZPX, 6), i(Sre, ZPX, 6),
    i(Cli, IMP, 2), p(Eor, ABY, 4), i(Nop, IMP, 2), i(Sre, ABY, 7),
    p(Nop, ABX, 4), p(Eor, ABX, 4), i(Lsr, ABX, 7), i(Sre, ABX, 7),
    // 0x60
    i(Rts, IMP, 6), i(Adc, IZX, 6), i(Jam, IMP, 2), i(Rra, IZX, 8),
    i(Nop, ZP, 3),  i(Adc, ZP, 3),  i(Ror, ZP, 5),  i(Rra, ZP, 5),
    i(Pla, IMP, 4), i(Adc, IMM, 2), i(Ror, ACC, 2), i(Arr, IMM, 2),
    i(Jmp, IND, 5), i(Adc, ABS, 4), i(Ror, ABS, 6), i(Rra, ABS, 6),
    // 0x70
    i(Bvs, REL, 2), p(Adc, IZY, 5), i(Jam, IMP, 2), i(Rra, IZY, 8),
    i(Nop, ZPX, 4), i(Adc, ZPX, 4), i(Ror, ZPX, 6), i(Rra, ZPX, 6),
    i(Sei, IMP, 2), p(Adc, ABY, 4), i(Nop, IMP, 2), i(Rra, ABY, 7),
    p(Nop, ABX, 4), p(Adc, ABX, 4), i(Ror, ABX, 7), i(Rra, ABX, 7),
    // 0x80
    i(Nop, IMM, 2), i(Sta, IZX, 6), i(Nop, IMM, 2), i(Sax, IZX, 6),
    i(Sty, ZP, 3),  i(Sta, ZP, 3),  i(Stx, ZP, 3),  i(Sax, ZP, 3),
    i(Dey, IMP, 2), i(Nop, IMM, 2), i(Txa, IMP, 2), i(Ane, IMM, 2),
    i(Sty, ABS, 4), i(Sta, ABS, 4), i(Stx, ABS, 4), i(Sax, ABS, 4),
    // 0x90
    i(Bcc, REL, 2), i(Sta, IZY, 6), i(Jam, IMP, 2), i(Sha, IZY, 6),
    i(Sty, ZPX, 4), i(Sta, ZPX, 4), i(Stx, ZPY, 4), i(Sax, ZPY, 4),
    i(Tya, IMP, 2), i(Sta, ABY, 5), i(Txs, IMP, 2), i(Tas, ABY, 5),
    i(Shy, ABX, 5), i(Sta, ABX, 5), i(Shx, ABY, 5), i(Sha, ABY, 5),
    // 0xA0
    i(Ldy, IMM, 2), i(Lda, IZX, 6), i(Ldx, IMM, 2), i(Lax, IZX, 6),
    i(Ldy, ZP, 3),  i(Lda, ZP, 3),  i(Ldx, ZP, 3),  i(Lax, ZP, 3),
    i(Tay, IMP, 2), i(Lda, IMM, 2), i(Tax, IMP, 2), i(Lxa, IMM, 2),
    i(Ldy, ABS, 4), i(Lda, ABS, 4), i(Ldx, ABS, 4), i(Lax, ABS, 4),
    // 0xB0
    i(Bcs, REL, 2), p(Lda, IZY, 5), i(Jam, IMP, 2), p(Lax, IZY, 5),
    i(Ldy, ZPX, 4), i(Lda, ZPX, 4), i(Ldx, ZPY, 4), i(Lax, ZPY, 4),
    i(Clv, IMP, 2), p(Lda, ABY, 4), i(Tsx, IMP, 2), p(Las, ABY, 4),
    p(Ldy, ABX, 4), p(Lda, ABX, 4), p(Ldx, ABY, 4), p(Lax, ABY, 4),
    // 0xC0
    i(Cpy, IMM, 2), i(Cmp, IZX, 6), i(Nop, IMM, 2), i(Dcp, IZX, 8),
    i(Cpy, ZP, 3),  i(Cmp, ZP, 3),  i(Dec, ZP, 5),  i(Dcp, ZP, 5),
    i(Iny, IMP, 2), i(Cmp, IMM, 2), i(Dex, IMP, 2), i(Sbx, IMM, 2),
    i(Cpy, ABS, 4), i(Cmp, ABS, 4), i(Dec, ABS, 6), i(Dcp, ABS, 6),
    // 0xD0
    i(Bne, REL, 2), p(Cmp, IZY, 5), i(Jam, IMP, 2), i(Dcp, IZY, 8),
    i(Nop, ZPX, 4), i(Cmp, ZPX, 4), i(Dec, ZPX, 6), i(Dcp, ZPX, 6),
    i(Cld, IMP, 2), p(Cmp, ABY, 4), i(Nop, IMP, 2), i(Dcp, ABY, 7),
    p(Nop, ABX, 4), p(Cmp, ABX, 4), i(Dec, ABX, 7), i(Dcp, ABX, 7),
    // 0xE0
    i(Cpx, IMM, 2), i(Sbc, IZX, 6), i(Nop, IMM, 2), i(Isc, IZX, 8),
    i(Cpx, ZP, 3),  i(Sbc, ZP, 3),  i(Inc, ZP, 5),  i(Isc, ZP, 5),
    i(Inx, IMP, 2), i(Sbc, IMM, 2), i(Nop, IMP, 2), i(Sbc, IMM, 2),
    i(Cpx, ABS, 4), i(Sbc, ABS, 4), i(Inc, ABS, 6), i(Isc, ABS, 6),
    // 0xF0
    i(Beq, REL, 2), p(Sbc, IZY, 5), i(Jam, IMP, 2), i(Isc, IZY, 8),
    i(Nop, ZPX, 4), i(Sbc, ZPX, 4), i(Inc, ZPX, 6), i(Isc, ZPX, 6),
    i(Sed, IMP, 2), p(Sbc, ABY, 4), i(Nop, IMP, 2), i(Isc, ABY, 7),
    p(Nop, ABX, 4), p(Sbc, ABX, 4), i(Inc, ABX, 7), i(Isc, ABX, 7),
];

/// 65C02 with the Rockwell bit instructions and WDC's WAI/STP.
#[rustfmt::skip]
pub static CMOS: [Instruction; 256] = [
    // 0x00
    i(Brk, IMP, 7), i(Ora, IZX, 6), i(Nop, IMM, 2), i(Nop, IMP, 1),
    i(Tsb, ZP, 5),  i(Ora, ZP, 3),  i(Asl, ZP, 5),  i(Rmb(0), ZP, 5),
    i(Php, IMP, 3), i(Ora, IMM, 2), i(Asl, ACC, 2), i(Nop, IMP, 1),
    i(Tsb, ABS, 6), i(Ora, ABS, 4), i(Asl, ABS, 6), i(Bbr(0), ZPR, 5),
    // 0x10
    i(Bpl, REL, 2), p(Ora, IZY, 5), i(Ora, ZPI, 5), i(Nop, IMP, 1),
    i(Trb, ZP, 5),  i(Ora, ZPX, 4), i(Asl, ZPX, 6), i(Rmb(1), ZP, 5),
    i(Clc, IMP, 2), p(Ora, ABY, 4), i(Inc, ACC, 2), i(Nop, IMP, 1),
    i(Trb, ABS, 6), p(Ora, ABX, 4), p(Asl, ABX, 6), i(Bbr(1), ZPR, 5),
    // 0x20
    i(Jsr, ABS, 6), i(And, IZX, 6), i(Nop, IMM, 2), i(Nop, IMP, 1),
    i(Bit, ZP, 3),  i(And, ZP, 3),  i(Rol, ZP, 5),  i(Rmb(2), ZP, 5),
    i(Plp, IMP, 4), i(And, IMM, 2), i(Rol, ACC, 2), i(Nop, IMP, 1),
    i(Bit, ABS, 4), i(And, ABS, 4), i(Rol, ABS, 6), i(Bbr(2), ZPR, 5),
    // 0x30
    i(Bmi, REL, 2), p(And, IZY, 5), i(And, ZPI, 5), i(Nop, IMP, 1),
    i(Bit, ZPX, 4), i(And, ZPX, 4), i(Rol, ZPX, 6), i(Rmb(3), ZP, 5),
    i(Sec, IMP, 2), p(And, ABY, 4), i(Dec, ACC, 2), i(Nop, IMP, 1),
    p(Bit, ABX, 4), p(And, ABX, 4), p(Rol, ABX, 6), i(Bbr(3), ZPR, 5),
    // 0x40
    i(Rti, IMP, 6), i(Eor, IZX, 6), i(Nop, IMM, 2), i(Nop, IMP, 1),
    i(Nop, ZP, 3),  i(Eor, ZP, 3),  i(Lsr, ZP, 5),  i(Rmb(4), ZP, 5),
    i(Pha, IMP, 3), i(Eor, IMM, 2), i(Lsr, ACC, 2), i(Nop, IMP, 1),
    i(Jmp, ABS, 3), i(Eor, ABS, 4), i(Lsr, ABS, 6), i(Bbr(4), ZPR, 5),
    // 0x50
    i(Bvc, REL, 2), p(Eor, IZY, 5), i(Eor, ZPI, 5), i(Nop, IMP, 1),
    i(Nop, ZPX, 4), i(Eor, ZPX, 4), i(Lsr, ZPX, 6), i(Rmb(5), ZP, 5),
    i(Cli, IMP, 2), p(Eor, ABY, 4), i(Phy, IMP, 3), i(Nop, IMP, 1),
    i(Nop, ABS, 8), p(Eor, ABX, 4), p(Lsr, ABX, 6), i(Bbr(5), ZPR, 5),
    // 0x60
    i(Rts, IMP, 6), i(Adc, IZX, 6), i(Nop, IMM, 2), i(Nop, IMP, 1),
    i(Stz, ZP, 3),  i(Adc, ZP, 3),  i(Ror, ZP, 5),  i(Rmb(6), ZP, 5),
    i(Pla, IMP, 4), i(Adc, IMM, 2), i(Ror, ACC, 2), i(Nop, IMP, 1),
    i(Jmp, IND, 6), i(Adc, ABS, 4), i(Ror, ABS, 6), i(Bbr(6), ZPR, 5),
    // 0x70
    i(Bvs, REL, 2), p(Adc, IZY, 5), i(Adc, ZPI, 5), i(Nop, IMP, 1),
    i(Stz, ZPX, 4), i(Adc, ZPX, 4), i(Ror, ZPX, 6), i(Rmb(7), ZP, 5),
    i(Sei, IMP, 2), p(Adc, ABY, 4), i(Ply, IMP, 4), i(Nop, IMP, 1),
    i(Jmp, AIX, 6), p(Adc, ABX, 4), p(Ror, ABX, 6), i(Bbr(7), ZPR, 5),
    // 0x80
    i(Bra, REL, 2), i(Sta, IZX, 6), i(Nop, IMM, 2), i(Nop, IMP, 1),
    i(Sty, ZP, 3),  i(Sta, ZP, 3),  i(Stx, ZP, 3),  i(Smb(0), ZP, 5),
    i(Dey, IMP, 2), i(Bit, IMM, 2), i(Txa, IMP, 2), i(Nop, IMP, 1),
    i(Sty, ABS, 4), i(Sta, ABS, 4), i(Stx, ABS, 4), i(Bbs(0), ZPR, 5),
    // 0x90
    i(Bcc, REL, 2), i(Sta, IZY, 6), i(Sta, ZPI, 5), i(Nop, IMP, 1),
    i(Sty, ZPX, 4), i(Sta, ZPX, 4), i(Stx, ZPY, 4), i(Smb(1), ZP, 5),
    i(Tya, IMP, 2), i(Sta, ABY, 5), i(Txs, IMP, 2), i(Nop, IMP, 1),
    i(Stz, ABS, 4), i(Sta, ABX, 5), i(Stz, ABX, 5), i(Bbs(1), ZPR, 5),
    // 0xA0
    i(Ldy, IMM, 2), i(Lda, IZX, 6), i(Ldx, IMM, 2), i(Nop, IMP, 1),
    i(Ldy, ZP, 3),  i(Lda, ZP, 3),  i(Ldx, ZP, 3),  i(Smb(2), ZP, 5),
    i(Tay, IMP, 2), i(Lda, IMM, 2), i(Tax, IMP, 2), i(Nop, IMP, 1),
    i(Ldy, ABS, 4), i(Lda, ABS, 4), i(Ldx, ABS, 4), i(Bbs(2), ZPR, 5),
    // 0xB0
    i(Bcs, REL, 2), p(Lda, IZY, 5), i(Lda, ZPI, 5), i(Nop, IMP, 1),
    i(Ldy, ZPX, 4), i(Lda, ZPX, 4), i(Ldx, ZPY, 4), i(Smb(3), ZP, 5),
    i(Clv, IMP, 2), p(Lda, ABY, 4), i(Tsx, IMP, 2), i(Nop, IMP, 1),
    p(Ldy, ABX, 4), p(Lda, ABX, 4), p(Ldx, ABY, 4), i(Bbs(3), ZPR, 5),
    // 0xC0
    i(Cpy, IMM, 2), i(Cmp, IZX, 6), i(Nop, IMM, 2), i(Nop, IMP, 1),
    i(Cpy, ZP, 3),  i(Cmp, ZP, 3),  i(Dec, ZP, 5),  i(Smb(4), ZP, 5),
    i(Iny, IMP, 2), i(Cmp, IMM, 2), i(Dex, IMP, 2), i(Wai, IMP, 3),
    i(Cpy, ABS, 4), i(Cmp, ABS, 4), i(Dec, ABS, 6), i(Bbs(4), ZPR, 5),
    // 0xD0
    i(Bne, REL, 2), p(Cmp, IZY, 5), i(Cmp, ZPI, 5), i(Nop, IMP, 1),
    i(Nop, ZPX, 4), i(Cmp, ZPX, 4), i(Dec, ZPX, 6), i(Smb(5), ZP, 5),
    i(Cld, IMP, 2), p(Cmp, ABY, 4), i(Phx, IMP, 3), i(Stp, IMP, 3),
    i(Nop, ABS, 4), p(Cmp, ABX, 4), i(Dec, ABX, 7), i(Bbs(5), ZPR, 5),
    // 0xE0
    i(Cpx, IMM, 2), i(Sbc, IZX, 6), i(Nop, IMM, 2), i(Nop, IMP, 1),
    i(Cpx, ZP, 3),  i(Sbc, ZP, 3),  i(Inc, ZP, 5),  i(Smb(6), ZP, 5),
    i(Inx, IMP, 2), i(Sbc, IMM, 2), i(Nop, IMP, 2), i(Nop, IMP, 1),
    i(Cpx, ABS, 4), i(Sbc, ABS, 4), i(Inc, ABS, 6), i(Bbs(6), ZPR, 5),
    // 0xF0
    i(Beq, REL, 2), p(Sbc, IZY, 5), i(Sbc, ZPI, 5), i(Nop, IMP, 1),
    i(Nop, ZPX, 4), i(Sbc, ZPX, 4), i(Inc, ZPX, 6), i(Smb(7), ZP, 5),
    i(Sed, IMP, 2), p(Sbc, ABY, 4), i(Plx, IMP, 4), i(Nop, IMP, 1),
    i(Nop, ABS, 4), p(Sbc, ABX, 4), i(Inc, ABX, 7), i(Bbs(7), ZPR, 5),
];

/// Slots that the 65SC02 leaves as one-cycle NOPs: the Rockwell bit
/// instructions plus WAI and STP.
#[must_use]
pub fn is_rockwell_or_wdc_extension(opcode: u8) -> bool {
    let low = opcode & 0x0F;
    low == 0x07 || low == 0x0F || opcode == 0xCB || opcode == 0xDB
}
