//! Decimal operands
//!
//! An operand remembers the exact string it was read from. The digit
//! accessors work on that string, never on a decomposition of the
//! numeric value, so leading zeros typed by the user are kept.

use crate::*;

/// A non-negative integer and the decimal digits it was written with
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Operand {
    value: BigUint,
    digits: String,
}

/// Reasons an operand string is rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseOperandError {
    #[error("Failed to parse empty operand")]
    Empty,

    #[error("Invalid digit {character:?} at position {position}")]
    InvalidDigit { position: usize, character: char },

    #[error("Operand has {digits} digits, the limit is {max}")]
    TooLarge { digits: u64, max: u64 },

    #[error(transparent)]
    ParseBigInt(#[from] ParseBigIntError),
}

impl Operand {
    /// Read a string of ASCII decimal digits no longer than `max_digits`
    pub fn parse_with_limit(s: &str, max_digits: u64) -> Result<Operand, ParseOperandError> {
        if s.is_empty() {
            return Err(ParseOperandError::Empty);
        }

        if let Some((position, character)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseOperandError::InvalidDigit { position, character });
        }

        // only ASCII digits remain, bytes and digits are the same count
        let digits = s.len() as u64;
        if digits > max_digits {
            return Err(ParseOperandError::TooLarge { digits, max: max_digits });
        }

        let value = BigUint::from_str_radix(s, 10)?;
        Ok(Operand {
            value: value,
            digits: s.to_string(),
        })
    }

    /// The numeric value
    #[inline]
    pub fn value(&self) -> &BigUint {
        &self.value
    }

    /// The digits as they were written
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Number of written digits, leading zeros included
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Iterate over digit values, units digit first
    #[inline]
    pub fn digits_le(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.bytes().rev().map(|b| b - b'0')
    }
}

impl FromStr for Operand {
    type Err = ParseOperandError;

    #[inline]
    fn from_str(s: &str) -> Result<Operand, ParseOperandError> {
        Operand::parse_with_limit(s, DEFAULT_MAX_OPERAND_DIGITS)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.digits)
    }
}

impl From<u64> for Operand {
    fn from(n: u64) -> Operand {
        Operand {
            value: BigUint::from(n),
            digits: n.to_string(),
        }
    }
}
