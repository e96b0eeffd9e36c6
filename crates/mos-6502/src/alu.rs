//! Arithmetic and logic shared by every variant.
//!
//! These are pure functions over the status register so the executor can
//! apply them to A, to memory (read-modify-write) or to the undocumented
//! combined opcodes without duplicating flag logic.

use crate::flags::Status;
use crate::variant::DecimalMode;

/// ADC - Add with Carry.
pub(crate) fn adc(p: &mut Status, mode: DecimalMode, a: u8, value: u8) -> u8 {
    match mode {
        _ if !p.decimal() => adc_binary(p, a, value),
        DecimalMode::Disabled => adc_binary(p, a, value),
        DecimalMode::Nmos => adc_decimal_nmos(p, a, value),
        DecimalMode::Cmos => adc_decimal_cmos(p, a, value),
    }
}

/// SBC - Subtract with Carry (borrow).
pub(crate) fn sbc(p: &mut Status, mode: DecimalMode, a: u8, value: u8) -> u8 {
    match mode {
        _ if !p.decimal() => sbc_binary(p, a, value),
        DecimalMode::Disabled => sbc_binary(p, a, value),
        DecimalMode::Nmos => sbc_decimal_nmos(p, a, value),
        DecimalMode::Cmos => sbc_decimal_cmos(p, a, value),
    }
}

fn adc_binary(p: &mut Status, a: u8, value: u8) -> u8 {
    let sum = u16::from(a) + u16::from(value) + u16::from(p.carry());
    let result = sum as u8;
    p.set_carry(sum > 0xFF);
    p.set_overflow((a ^ result) & (value ^ result) & 0x80 != 0);
    p.update_nz(result);
    result
}

fn sbc_binary(p: &mut Status, a: u8, value: u8) -> u8 {
    // Subtraction is addition of the one's complement.
    adc_binary(p, a, !value)
}

/// NMOS: Z comes from the binary sum, N and V from the intermediate result
/// after the low-nibble adjust.
fn adc_decimal_nmos(p: &mut Status, a: u8, value: u8) -> u8 {
    let (a16, v16) = (u16::from(a), u16::from(value));
    let carry = u16::from(p.carry());

    let mut low = (a16 & 0x0F) + (v16 & 0x0F) + carry;
    if low > 9 {
        low += 6;
    }
    let mut high = (a16 >> 4) + (v16 >> 4) + u16::from(low > 0x0F);

    p.set_zero((a16 + v16 + carry) & 0xFF == 0);
    p.set_negative(high & 0x08 != 0);
    p.set_overflow(((high << 4) ^ a16) & !(a16 ^ v16) & 0x80 != 0);

    if high > 9 {
        high += 6;
    }
    p.set_carry(high > 0x0F);
    ((high << 4) | (low & 0x0F)) as u8
}

/// NMOS: every flag comes from the binary subtraction.
fn sbc_decimal_nmos(p: &mut Status, a: u8, value: u8) -> u8 {
    let borrow = i16::from(!p.carry());
    let (a16, v16) = (i16::from(a), i16::from(value));

    let mut low = (a16 & 0x0F) - (v16 & 0x0F) - borrow;
    let mut high = (a16 >> 4) - (v16 >> 4);
    if low & 0x10 != 0 {
        low -= 6;
        high -= 1;
    }
    if high & 0x10 != 0 {
        high -= 6;
    }

    sbc_binary(p, a, value);
    (((high << 4) | (low & 0x0F)) & 0xFF) as u8
}

/// CMOS: the accumulator result matches NMOS for valid BCD but N and Z are
/// taken from the final result.
fn adc_decimal_cmos(p: &mut Status, a: u8, value: u8) -> u8 {
    let carry = u16::from(p.carry());
    let mut low = u16::from(a & 0x0F) + u16::from(value & 0x0F) + carry;
    if low >= 0x0A {
        low = ((low + 0x06) & 0x0F) + 0x10;
    }

    let signed = i16::from((a & 0xF0) as i8) + i16::from((value & 0xF0) as i8) + low as i16;
    p.set_overflow(!(-128..=127).contains(&signed));

    let mut sum = u16::from(a & 0xF0) + u16::from(value & 0xF0) + low;
    if sum >= 0xA0 {
        sum += 0x60;
    }
    p.set_carry(sum >= 0x100);
    let result = sum as u8;
    p.update_nz(result);
    result
}

fn sbc_decimal_cmos(p: &mut Status, a: u8, value: u8) -> u8 {
    let borrow = i16::from(!p.carry());
    let low = i16::from(a & 0x0F) - i16::from(value & 0x0F) - borrow;
    let mut diff = i16::from(a) - i16::from(value) - borrow;
    if diff < 0 {
        diff -= 0x60;
    }
    if low < 0 {
        diff -= 0x06;
    }

    sbc_binary(p, a, value);
    let result = (diff & 0xFF) as u8;
    p.update_nz(result);
    result
}

/// ARR - AND then ROR A, with flags taken from the rotate's bit 6/5.
pub(crate) fn arr(p: &mut Status, mode: DecimalMode, a: u8, value: u8) -> u8 {
    let t = a & value;
    let carry_in = u8::from(p.carry()) << 7;
    let mut result = (t >> 1) | carry_in;

    if !p.decimal() || mode == DecimalMode::Disabled {
        p.update_nz(result);
        p.set_carry(result & 0x40 != 0);
        p.set_overflow(((result >> 6) ^ (result >> 5)) & 0x01 != 0);
        return result;
    }

    p.set_negative(carry_in != 0);
    p.set_zero(result == 0);
    p.set_overflow((t ^ result) & 0x40 != 0);
    let (high, low) = (t >> 4, t & 0x0F);
    if low + (low & 0x01) > 5 {
        result = (result & 0xF0) | (result.wrapping_add(6) & 0x0F);
    }
    let carry = high + (high & 0x01) > 5;
    p.set_carry(carry);
    if carry {
        result = result.wrapping_add(0x60);
    }
    result
}

/// CMP, CPX, CPY.
pub(crate) fn compare(p: &mut Status, register: u8, value: u8) {
    p.set_carry(register >= value);
    p.update_nz(register.wrapping_sub(value));
}

pub(crate) fn asl(p: &mut Status, value: u8) -> u8 {
    p.set_carry(value & 0x80 != 0);
    let result = value << 1;
    p.update_nz(result);
    result
}

pub(crate) fn lsr(p: &mut Status, value: u8) -> u8 {
    p.set_carry(value & 0x01 != 0);
    let result = value >> 1;
    p.update_nz(result);
    result
}

pub(crate) fn rol(p: &mut Status, value: u8) -> u8 {
    let carry_in = u8::from(p.carry());
    p.set_carry(value & 0x80 != 0);
    let result = (value << 1) | carry_in;
    p.update_nz(result);
    result
}

pub(crate) fn ror(p: &mut Status, value: u8) -> u8 {
    let carry_in = u8::from(p.carry()) << 7;
    p.set_carry(value & 0x01 != 0);
    let result = (value >> 1) | carry_in;
    p.update_nz(result);
    result
}

/// BIT - Z from A AND M, N and V copied from the operand.
pub(crate) fn bit(p: &mut Status, a: u8, value: u8) {
    p.set_zero(a & value == 0);
    p.set_negative(value & 0x80 != 0);
    p.set_overflow(value & 0x40 != 0);
}
