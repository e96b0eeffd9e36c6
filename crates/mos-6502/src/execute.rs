//! Opcode executor.
//!
//! One arm per operation; the addressing mode comes from the dispatch
//! entry. Each arm returns the cycles it adds on top of the entry's base
//! cost (page crossings, taken branches, CMOS decimal fix-up).

use emu_core::Bus;
use log::debug;

use crate::Mos6502;
use crate::addressing::Access;
use crate::alu;
use crate::cpu::HaltState;
use crate::opcode::{Instruction, Mode, Op};
use crate::variant::DecimalMode;

impl Mos6502 {
    /// Execute one decoded instruction and return its total cost.
    pub(crate) fn execute<B: Bus>(&mut self, bus: &mut B, instr: Instruction) -> u32 {
        let extra = match instr.op {
            // =================================================================
            // Load/Store
            // =================================================================
            Op::Lda => {
                let (value, extra) = self.read_operand(bus, instr);
                self.regs.a = value;
                self.regs.p.update_nz(value);
                extra
            }
            Op::Ldx => {
                let (value, extra) = self.read_operand(bus, instr);
                self.regs.x = value;
                self.regs.p.update_nz(value);
                extra
            }
            Op::Ldy => {
                let (value, extra) = self.read_operand(bus, instr);
                self.regs.y = value;
                self.regs.p.update_nz(value);
                extra
            }
            Op::Sta => self.store(bus, instr.mode, self.regs.a),
            Op::Stx => self.store(bus, instr.mode, self.regs.x),
            Op::Sty => self.store(bus, instr.mode, self.regs.y),
            Op::Stz => self.store(bus, instr.mode, 0),

            // =================================================================
            // Transfers
            // =================================================================
            Op::Tax => {
                self.regs.x = self.regs.a;
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Tay => {
                self.regs.y = self.regs.a;
                self.regs.p.update_nz(self.regs.y);
                0
            }
            Op::Txa => {
                self.regs.a = self.regs.x;
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Tya => {
                self.regs.a = self.regs.y;
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Tsx => {
                self.regs.x = self.regs.s;
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Txs => {
                self.regs.s = self.regs.x;
                0
            }

            // =================================================================
            // Stack
            // =================================================================
            Op::Pha => {
                self.push(bus, self.regs.a);
                0
            }
            Op::Phx => {
                self.push(bus, self.regs.x);
                0
            }
            Op::Phy => {
                self.push(bus, self.regs.y);
                0
            }
            Op::Php => {
                self.push(bus, self.regs.p.to_byte_brk());
                0
            }
            Op::Pla => {
                self.touch_stack(bus);
                self.regs.a = self.pull(bus);
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Plx => {
                self.touch_stack(bus);
                self.regs.x = self.pull(bus);
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Ply => {
                self.touch_stack(bus);
                self.regs.y = self.pull(bus);
                self.regs.p.update_nz(self.regs.y);
                0
            }
            Op::Plp => {
                self.touch_stack(bus);
                let was_disabled = self.regs.p.interrupt_disable();
                let value = self.pull(bus);
                self.regs.p.load_pulled(value);
                if was_disabled && !self.regs.p.interrupt_disable() {
                    self.interrupts.arm_after_enable();
                }
                0
            }

            // =================================================================
            // Arithmetic and logic
            // =================================================================
            Op::Adc => {
                let (value, extra) = self.read_operand(bus, instr);
                self.adc(value);
                extra + self.decimal_penalty()
            }
            Op::Sbc => {
                let (value, extra) = self.read_operand(bus, instr);
                self.sbc(value);
                extra + self.decimal_penalty()
            }
            Op::And => {
                let (value, extra) = self.read_operand(bus, instr);
                self.regs.a &= value;
                self.regs.p.update_nz(self.regs.a);
                extra
            }
            Op::Ora => {
                let (value, extra) = self.read_operand(bus, instr);
                self.regs.a |= value;
                self.regs.p.update_nz(self.regs.a);
                extra
            }
            Op::Eor => {
                let (value, extra) = self.read_operand(bus, instr);
                self.regs.a ^= value;
                self.regs.p.update_nz(self.regs.a);
                extra
            }
            Op::Cmp => {
                let (value, extra) = self.read_operand(bus, instr);
                alu::compare(&mut self.regs.p, self.regs.a, value);
                extra
            }
            Op::Cpx => {
                let (value, extra) = self.read_operand(bus, instr);
                alu::compare(&mut self.regs.p, self.regs.x, value);
                extra
            }
            Op::Cpy => {
                let (value, extra) = self.read_operand(bus, instr);
                alu::compare(&mut self.regs.p, self.regs.y, value);
                extra
            }
            Op::Bit => {
                let (value, extra) = self.read_operand(bus, instr);
                if instr.mode == Mode::Immediate {
                    // BIT #imm only affects Z
                    self.regs.p.set_zero(self.regs.a & value == 0);
                } else {
                    alu::bit(&mut self.regs.p, self.regs.a, value);
                }
                extra
            }

            // =================================================================
            // Increments, decrements and shifts
            // =================================================================
            Op::Inc => self.modify(bus, instr, |cpu, v| {
                let r = v.wrapping_add(1);
                cpu.regs.p.update_nz(r);
                r
            }),
            Op::Dec => self.modify(bus, instr, |cpu, v| {
                let r = v.wrapping_sub(1);
                cpu.regs.p.update_nz(r);
                r
            }),
            Op::Inx => {
                self.regs.x = self.regs.x.wrapping_add(1);
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Iny => {
                self.regs.y = self.regs.y.wrapping_add(1);
                self.regs.p.update_nz(self.regs.y);
                0
            }
            Op::Dex => {
                self.regs.x = self.regs.x.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Dey => {
                self.regs.y = self.regs.y.wrapping_sub(1);
                self.regs.p.update_nz(self.regs.y);
                0
            }
            Op::Asl => self.modify(bus, instr, |cpu, v| alu::asl(&mut cpu.regs.p, v)),
            Op::Lsr => self.modify(bus, instr, |cpu, v| alu::lsr(&mut cpu.regs.p, v)),
            Op::Rol => self.modify(bus, instr, |cpu, v| alu::rol(&mut cpu.regs.p, v)),
            Op::Ror => self.modify(bus, instr, |cpu, v| alu::ror(&mut cpu.regs.p, v)),
            Op::Tsb => self.modify(bus, instr, |cpu, v| {
                cpu.regs.p.set_zero(cpu.regs.a & v == 0);
                v | cpu.regs.a
            }),
            Op::Trb => self.modify(bus, instr, |cpu, v| {
                cpu.regs.p.set_zero(cpu.regs.a & v == 0);
                v & !cpu.regs.a
            }),
            Op::Rmb(bit) => self.modify(bus, instr, |_, v| v & !(1 << bit)),
            Op::Smb(bit) => self.modify(bus, instr, |_, v| v | (1 << bit)),

            // =================================================================
            // Flags
            // =================================================================
            Op::Clc => {
                self.regs.p.set_carry(false);
                0
            }
            Op::Sec => {
                self.regs.p.set_carry(true);
                0
            }
            Op::Cld => {
                self.regs.p.set_decimal(false);
                0
            }
            Op::Sed => {
                self.regs.p.set_decimal(true);
                0
            }
            Op::Clv => {
                self.regs.p.set_overflow(false);
                0
            }
            Op::Cli => {
                if self.regs.p.interrupt_disable() {
                    self.interrupts.arm_after_enable();
                }
                self.regs.p.set_interrupt_disable(false);
                0
            }
            Op::Sei => {
                self.regs.p.set_interrupt_disable(true);
                0
            }

            // =================================================================
            // Branches
            // =================================================================
            Op::Bcc => self.branch(bus, !self.regs.p.carry()),
            Op::Bcs => self.branch(bus, self.regs.p.carry()),
            Op::Bne => self.branch(bus, !self.regs.p.zero()),
            Op::Beq => self.branch(bus, self.regs.p.zero()),
            Op::Bpl => self.branch(bus, !self.regs.p.negative()),
            Op::Bmi => self.branch(bus, self.regs.p.negative()),
            Op::Bvc => self.branch(bus, !self.regs.p.overflow()),
            Op::Bvs => self.branch(bus, self.regs.p.overflow()),
            Op::Bra => self.branch(bus, true),
            Op::Bbr(bit) => {
                let value = self.read_zero_page_operand(bus);
                self.branch(bus, value & (1 << bit) == 0)
            }
            Op::Bbs(bit) => {
                let value = self.read_zero_page_operand(bus);
                self.branch(bus, value & (1 << bit) != 0)
            }

            // =================================================================
            // Jumps, subroutines and interrupts
            // =================================================================
            Op::Jmp => {
                let (target, _) = self.resolve(bus, instr.mode, Access::Read);
                self.regs.pc = target;
                0
            }
            Op::Jsr => {
                let low = self.fetch(bus);
                self.touch_stack(bus);
                // PC now points at the high operand byte; RTS adds one.
                self.push_word(bus, self.regs.pc);
                let high = self.fetch(bus);
                let target = u16::from_le_bytes([low, high]);
                self.regs.ea = target;
                self.regs.pc = target;
                0
            }
            Op::Rts => {
                self.touch_stack(bus);
                let ret = self.pull_word(bus);
                self.regs.pc = ret.wrapping_add(1);
                0
            }
            Op::Rti => {
                self.touch_stack(bus);
                let value = self.pull(bus);
                self.regs.p.load_pulled(value);
                self.regs.pc = self.pull_word(bus);
                0
            }
            Op::Brk => {
                // Padding byte after the opcode
                self.fetch(bus);
                self.push_word(bus, self.regs.pc);
                self.push(bus, self.regs.p.to_byte_brk());
                self.regs.p.set_interrupt_disable(true);
                if self.variant.interrupt_clears_decimal() {
                    self.regs.p.set_decimal(false);
                }
                self.regs.pc = self.read_vector(bus, self.variant.irq_vector_address());
                0
            }

            // =================================================================
            // No-ops and halts
            // =================================================================
            Op::Nop => match instr.mode {
                Mode::Implied => 0,
                _ => self.read_operand(bus, instr).1,
            },
            Op::Wai => {
                debug!("WAI at ${:04X}", self.prev_pc);
                self.halt = HaltState::Waiting;
                0
            }
            Op::Stp => {
                debug!("STP at ${:04X}", self.prev_pc);
                self.halt = HaltState::Stopped;
                0
            }
            Op::Jam => {
                debug!("JAM at ${:04X}", self.prev_pc);
                self.regs.pc = self.regs.pc.wrapping_sub(1);
                self.halt = HaltState::Jammed;
                0
            }

            // =================================================================
            // NMOS undocumented
            // =================================================================
            Op::Lax => {
                let (value, extra) = self.read_operand(bus, instr);
                self.regs.a = value;
                self.regs.x = value;
                self.regs.p.update_nz(value);
                extra
            }
            Op::Sax => self.store(bus, instr.mode, self.regs.a & self.regs.x),
            Op::Dcp => self.modify(bus, instr, |cpu, v| {
                let r = v.wrapping_sub(1);
                alu::compare(&mut cpu.regs.p, cpu.regs.a, r);
                r
            }),
            Op::Isc => self.modify(bus, instr, |cpu, v| {
                let r = v.wrapping_add(1);
                cpu.sbc(r);
                r
            }),
            Op::Slo => self.modify(bus, instr, |cpu, v| {
                let r = alu::asl(&mut cpu.regs.p, v);
                cpu.regs.a |= r;
                cpu.regs.p.update_nz(cpu.regs.a);
                r
            }),
            Op::Rla => self.modify(bus, instr, |cpu, v| {
                let r = alu::rol(&mut cpu.regs.p, v);
                cpu.regs.a &= r;
                cpu.regs.p.update_nz(cpu.regs.a);
                r
            }),
            Op::Sre => self.modify(bus, instr, |cpu, v| {
                let r = alu::lsr(&mut cpu.regs.p, v);
                cpu.regs.a ^= r;
                cpu.regs.p.update_nz(cpu.regs.a);
                r
            }),
            Op::Rra => self.modify(bus, instr, |cpu, v| {
                let r = alu::ror(&mut cpu.regs.p, v);
                cpu.adc(r);
                r
            }),
            Op::Anc => {
                let (value, _) = self.read_operand(bus, instr);
                self.regs.a &= value;
                self.regs.p.update_nz(self.regs.a);
                self.regs.p.set_carry(self.regs.a & 0x80 != 0);
                0
            }
            Op::Alr => {
                let (value, _) = self.read_operand(bus, instr);
                self.regs.a = alu::lsr(&mut self.regs.p, self.regs.a & value);
                0
            }
            Op::Arr => {
                let (value, _) = self.read_operand(bus, instr);
                self.regs.a = alu::arr(
                    &mut self.regs.p,
                    self.variant.decimal_mode(),
                    self.regs.a,
                    value,
                );
                0
            }
            Op::Sbx => {
                let (value, _) = self.read_operand(bus, instr);
                let t = self.regs.a & self.regs.x;
                self.regs.p.set_carry(t >= value);
                self.regs.x = t.wrapping_sub(value);
                self.regs.p.update_nz(self.regs.x);
                0
            }
            Op::Ane => {
                // Unstable: $EE is the commonly observed magic constant
                let (value, _) = self.read_operand(bus, instr);
                self.regs.a = (self.regs.a | 0xEE) & self.regs.x & value;
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Lxa => {
                let (value, _) = self.read_operand(bus, instr);
                self.regs.a = (self.regs.a | 0xEE) & value;
                self.regs.x = self.regs.a;
                self.regs.p.update_nz(self.regs.a);
                0
            }
            Op::Las => {
                let (value, extra) = self.read_operand(bus, instr);
                let r = value & self.regs.s;
                self.regs.a = r;
                self.regs.x = r;
                self.regs.s = r;
                self.regs.p.update_nz(r);
                extra
            }
            Op::Sha => self.unstable_store(bus, instr.mode, self.regs.y, self.regs.a & self.regs.x),
            Op::Shx => self.unstable_store(bus, instr.mode, self.regs.y, self.regs.x),
            Op::Shy => self.unstable_store(bus, instr.mode, self.regs.x, self.regs.y),
            Op::Tas => {
                self.regs.s = self.regs.a & self.regs.x;
                self.unstable_store(bus, instr.mode, self.regs.y, self.regs.s)
            }
        };
        u32::from(instr.cycles) + extra
    }

    fn adc(&mut self, value: u8) {
        self.regs.a = alu::adc(&mut self.regs.p, self.variant.decimal_mode(), self.regs.a, value);
    }

    fn sbc(&mut self, value: u8) {
        self.regs.a = alu::sbc(&mut self.regs.p, self.variant.decimal_mode(), self.regs.a, value);
    }

    /// CMOS spends one more cycle on decimal ADC/SBC.
    fn decimal_penalty(&self) -> u32 {
        u32::from(self.regs.p.decimal() && self.variant.decimal_mode() == DecimalMode::Cmos)
    }

    /// Resolve and read an operand. Returns the value and the page-crossing
    /// penalty for this entry.
    fn read_operand<B: Bus>(&mut self, bus: &mut B, instr: Instruction) -> (u8, u32) {
        let (addr, crossed) = self.resolve(bus, instr.mode, Access::Read);
        let value = bus.read(addr);
        (value, u32::from(instr.page_penalty && crossed))
    }

    fn read_zero_page_operand<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let (addr, _) = self.resolve(bus, Mode::ZeroPage, Access::Read);
        bus.read(addr)
    }

    fn store<B: Bus>(&mut self, bus: &mut B, mode: Mode, value: u8) -> u32 {
        let (addr, _) = self.resolve(bus, mode, Access::Write);
        bus.write(addr, value);
        0
    }

    /// Read-modify-write on A or memory.
    ///
    /// NMOS writes the unmodified value back before the result; CMOS reads
    /// it a second time instead.
    fn modify<B, F>(&mut self, bus: &mut B, instr: Instruction, op: F) -> u32
    where
        B: Bus,
        F: FnOnce(&mut Self, u8) -> u8,
    {
        if instr.mode == Mode::Accumulator {
            let value = self.regs.a;
            self.regs.a = op(self, value);
            return 0;
        }

        let (addr, crossed) = self.resolve(bus, instr.mode, Access::Modify);
        let value = bus.read(addr);
        if self.variant.rmw_dummy_write() {
            bus.write(addr, value);
        } else {
            bus.read(addr);
        }
        let result = op(self, value);
        bus.write(addr, result);
        u32::from(instr.page_penalty && crossed)
    }

    /// SHA/SHX/SHY/TAS: store `value & (base high byte + 1)`. When the
    /// index crosses a page the stored value also replaces the high byte
    /// of the target address.
    fn unstable_store<B: Bus>(&mut self, bus: &mut B, mode: Mode, index: u8, value: u8) -> u32 {
        let (addr, crossed) = self.resolve(bus, mode, Access::Write);
        let base = addr.wrapping_sub(u16::from(index));
        let stored = value & ((base >> 8) as u8).wrapping_add(1);
        let target = if crossed {
            (u16::from(stored) << 8) | (addr & 0x00FF)
        } else {
            addr
        };
        bus.write(target, stored);
        0
    }
}
