//! Partial products of the long multiplication method

use crate::*;

/// The work done for one digit of the multiplier
///
/// Every digit of the multiplicand is multiplied by the multiplier
/// digit. The last digit of each of those products lands in `partial`
/// at the multiplicand digit's column, the leading digit lands in
/// `carry` one column further left.
///
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Operation {
    pub partial: BigUint,
    pub carry: BigUint,
    /// `partial + carry`
    pub sum: BigUint,
}

impl Operation {
    /// The three values in diagram order
    #[inline]
    pub fn values(&self) -> [&BigUint; 3] {
        [&self.partial, &self.carry, &self.sum]
    }

    pub fn is_consistent(&self) -> bool {
        &self.partial + &self.carry == self.sum
    }
}

/// Run the multiplier digits, least significant first, against the
/// whole multiplicand
pub(crate) fn generate_operations(multiplier: &Operand, multiplicand: &Operand) -> Vec<Operation> {
    multiplier
        .digits_le()
        .map(|digit| multiply_digit_by_operand(digit, multiplicand))
        .collect()
}

/// Multiply every digit of `multiplicand` by `digit`
///
/// Each column receives at most one digit of `partial` and one of
/// `carry`, so both are assembled as little-endian decimal digit
/// buffers, avoiding a big-integer addition per column.
///
pub(crate) fn multiply_digit_by_operand(digit: u8, multiplicand: &Operand) -> Operation {
    debug_assert!(digit < 10);

    let n = multiplicand.len();
    let mut partial_digits = Vec::with_capacity(n);
    let mut carry_digits = Vec::with_capacity(n + 1);
    carry_digits.push(0u8);

    for multiplicand_digit in multiplicand.digits_le() {
        let (leading_digit, last_digit) = (digit * multiplicand_digit).div_rem(&10);
        partial_digits.push(last_digit);
        carry_digits.push(leading_digit);
    }

    let partial = from_decimal_digits_le(&partial_digits);
    let carry = from_decimal_digits_le(&carry_digits);
    let sum = &partial + &carry;

    Operation { partial, carry, sum }
}

/// Little-endian base-10 digits to a number
///
/// Every entry must be below ten; the product of two digits split by
/// ten always is.
///
pub(crate) fn from_decimal_digits_le(digits: &[u8]) -> BigUint {
    debug_assert!(digits.iter().all(|&d| d < 10), "not decimal digits: {:?}", digits);
    BigUint::from_radix_le(digits, 10).unwrap_or_default()
}
