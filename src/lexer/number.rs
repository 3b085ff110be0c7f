//! Numeric literal evaluation: suffix classification, base detection, and
//! overflow-checked accumulation into the promoted integer/float width.

use crate::error::{ErrorLoc, LexError};
use crate::token::IntSubtype;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Base {
    Decimal,
    Octal,
    Hex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Width {
    Int,
    Long,
    LongLong,
}

fn width_tier(subtype: IntSubtype) -> Width {
    match subtype {
        IntSubtype::SignedInt | IntSubtype::UnsignedInt => Width::Int,
        IntSubtype::SignedLong | IntSubtype::UnsignedLong => Width::Long,
        IntSubtype::SignedLongLong | IntSubtype::UnsignedLongLong => Width::LongLong,
    }
}

fn max_value(subtype: IntSubtype) -> u64 {
    match subtype {
        IntSubtype::SignedInt => i32::MAX as u64,
        IntSubtype::UnsignedInt => u32::MAX as u64,
        IntSubtype::SignedLong | IntSubtype::SignedLongLong => i64::MAX as u64,
        IntSubtype::UnsignedLong | IntSubtype::UnsignedLongLong => u64::MAX,
    }
}

const DECIMAL_NO_U: &[IntSubtype] = &[
    IntSubtype::SignedInt,
    IntSubtype::SignedLong,
    IntSubtype::SignedLongLong,
];
const DECIMAL_U: &[IntSubtype] = &[
    IntSubtype::UnsignedInt,
    IntSubtype::UnsignedLong,
    IntSubtype::UnsignedLongLong,
];
const HEXOCT_NO_U: &[IntSubtype] = &[
    IntSubtype::SignedInt,
    IntSubtype::UnsignedInt,
    IntSubtype::SignedLong,
    IntSubtype::UnsignedLong,
    IntSubtype::SignedLongLong,
    IntSubtype::UnsignedLongLong,
];
const HEXOCT_U: &[IntSubtype] = &[
    IntSubtype::UnsignedInt,
    IntSubtype::UnsignedLong,
    IntSubtype::UnsignedLongLong,
];

/// Accumulate `digits` (in `base`) into a `u64`, returning `None` on
/// overflow past `u64::MAX`.
fn accumulate(digits: &str, base: Base) -> Option<u64> {
    let radix = match base {
        Base::Decimal => 10,
        Base::Octal => 8,
        Base::Hex => 16,
    };
    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)? as u64;
        value = value.checked_mul(radix as u64)?.checked_add(digit)?;
    }
    Some(value)
}

/// Evaluate an integer literal's digits plus suffix flags into a value and
/// promoted subtype, per the table in §4.1.
pub(crate) fn evaluate_integer(
    digits: &str,
    base: Base,
    has_u: bool,
    l_count: u8,
    loc: ErrorLoc,
) -> Result<(u64, IntSubtype), LexError> {
    let min_width = match l_count {
        0 => Width::Int,
        1 => Width::Long,
        _ => Width::LongLong,
    };

    let Some(mut value) = accumulate(digits, base) else {
        return Err(LexError::DecimalIntegerOverflow { loc });
    };

    if base == Base::Decimal && !has_u && value > i64::MAX as u64 {
        return Err(LexError::DecimalIntegerOverflow { loc });
    }
    // Non-decimal literals that overflow signed accumulation are re-decoded
    // as unsigned: since we already accumulated into a u64 we only need to
    // make sure the chain below is free to pick an unsigned subtype, which
    // it always is for hex/octal regardless of the `u` suffix.
    let _ = &mut value;

    let chain: &[IntSubtype] = match (base, has_u) {
        (Base::Decimal, false) => DECIMAL_NO_U,
        (Base::Decimal, true) => DECIMAL_U,
        (_, false) => HEXOCT_NO_U,
        (_, true) => HEXOCT_U,
    };

    for &candidate in chain {
        if width_tier(candidate) < min_width {
            continue;
        }
        if value <= max_value(candidate) {
            return Ok((value, candidate));
        }
    }

    Err(LexError::DecimalIntegerOverflow { loc })
}

impl PartialOrd for Width {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Width {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        fn rank(w: &Width) -> u8 {
            match w {
                Width::Int => 0,
                Width::Long => 1,
                Width::LongLong => 2,
            }
        }
        rank(self).cmp(&rank(other))
    }
}

/// Decode a decimal float's mantissa/exponent per §4.1's accumulator
/// description: integer and fractional parts are accumulated as 64-bit
/// unsigned values; once either would overflow, further digits are folded
/// into a leftover decimal exponent (int part) or simply stop contributing
/// (fractional part, whose trailing digits are below `f64`'s precision
/// anyway).
pub(crate) fn evaluate_decimal_float(
    int_digits: &str,
    frac_digits: &str,
    written_exponent: i32,
) -> f64 {
    let mut int_part: u64 = 0;
    let mut leftover: i32 = 0;
    let mut int_overflowed = false;
    for c in int_digits.chars() {
        let d = c.to_digit(10).unwrap() as u64;
        if int_overflowed {
            leftover += 1;
            continue;
        }
        match int_part.checked_mul(10).and_then(|v| v.checked_add(d)) {
            Some(v) => int_part = v,
            None => {
                int_overflowed = true;
                leftover += 1;
            }
        }
    }

    let mut frac_part: u64 = 0;
    let mut frac_digit_count: i32 = 0;
    for c in frac_digits.chars() {
        let d = c.to_digit(10).unwrap() as u64;
        match frac_part.checked_mul(10).and_then(|v| v.checked_add(d)) {
            Some(v) => {
                frac_part = v;
                frac_digit_count += 1;
            }
            None => break,
        }
    }

    let mantissa =
        (int_part as f64) * 10f64.powi(leftover) + (frac_part as f64) * 10f64.powi(-frac_digit_count);
    mantissa * 10f64.powi(written_exponent)
}

/// Decode a hex float's mantissa/exponent analogously to
/// `evaluate_decimal_float`, base 16 for the mantissa and base 2 (4 bits per
/// hex digit) for the exponent, with the explicit `p` exponent applied as a
/// binary exponent directly.
pub(crate) fn evaluate_hex_float(int_digits: &str, frac_digits: &str, p_exponent: i32) -> f64 {
    let mut int_part: u64 = 0;
    let mut leftover_hex_digits: i32 = 0;
    let mut int_overflowed = false;
    for c in int_digits.chars() {
        let d = c.to_digit(16).unwrap() as u64;
        if int_overflowed {
            leftover_hex_digits += 1;
            continue;
        }
        match int_part.checked_mul(16).and_then(|v| v.checked_add(d)) {
            Some(v) => int_part = v,
            None => {
                int_overflowed = true;
                leftover_hex_digits += 1;
            }
        }
    }

    let mut frac_part: u64 = 0;
    let mut frac_hex_digit_count: i32 = 0;
    for c in frac_digits.chars() {
        let d = c.to_digit(16).unwrap() as u64;
        match frac_part.checked_mul(16).and_then(|v| v.checked_add(d)) {
            Some(v) => {
                frac_part = v;
                frac_hex_digit_count += 1;
            }
            None => break,
        }
    }

    let mantissa = (int_part as f64) * 2f64.powi(leftover_hex_digits * 4)
        + (frac_part as f64) * 2f64.powi(-(frac_hex_digit_count * 4));
    mantissa * 2f64.powi(p_exponent)
}
