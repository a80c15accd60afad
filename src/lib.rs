// Copyright 2024 The long-multiplication developers
// See the COPYRIGHT file at the top-level directory of this
// distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Long Multiplication
//!
//! Renders the grade-school "long multiplication" method as a
//! fixed-width text diagram: the operands, one block of
//! partial/carry/sum rows per digit of the multiplier, every partial
//! sum shifted by its place value, and the final product.
//!
//! Operands are kept both as arbitrary precision integers
//! (`num_bigint::BigUint`) and as the decimal strings they were read
//! from. Every per-digit step reads its digit from the string, right
//! to left, so the diagram always matches what was typed.
//!
//! # Example
//!
//! ```
//! use long_multiplication::Multiplication;
//!
//! let mut mult = Multiplication::from_strs("12", "34").unwrap();
//! mult.set_printing_description(false);
//!
//! let expected = "   34\n\
//!                 x  12\n\
//!                 =====\n\
//!                 \x20  68\n\
//!                 +   0\n\
//!                 =  68\n\
//!                 -----\n\
//!                 \x20 34\n\
//!                 +  0\n\
//!                 = 34\n\
//!                 =====\n\
//!                 +  68\n\
//!                 + 340\n\
//!                 -----\n\
//!                 = 408\n";
//! assert_eq!(mult.to_string(), expected);
//! ```
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;

use std::cmp;
use std::fmt;
use std::io;
use std::str::FromStr;

use num_bigint::{BigUint, ParseBigIntError};
use num_integer::Integer as IntegerTrait;
pub use num_traits::{Num, One, Zero};

use std::f64::consts::LOG2_10;


// const DEFAULT_MAX_OPERAND_DIGITS: u64 = ${RUST_LONG_MULTIPLICATION_MAX_OPERAND_DIGITS} or 4096;
include!(concat!(env!("OUT_DIR"), "/max_operand_digits.rs"));

// digit counting, powers of ten, partial products and column addition
mod arithmetic;
pub use arithmetic::{count_decimal_digits, ten_to_the};
pub use arithmetic::multiplication::Operation;
pub use arithmetic::addition::{carry_tens, columns_value};

// Display, diagram layout
mod impl_fmt;

mod operand;
pub use operand::{Operand, ParseOperandError};

// Rendering options and limits
mod context;
pub use context::Context;

pub mod invocation;


/// One long multiplication, fully worked out
///
/// Built from two operands, it holds the product and the sequence of
/// per-digit operations of the method, ordered from the least
/// significant digit of the multiplier to the most significant one.
/// Printing it (`Display`) renders the diagram.
///
#[derive(Clone, Debug)]
pub struct Multiplication {
    multiplier: Operand,
    multiplicand: Operand,
    result: BigUint,
    result_size: u64,
    operations: Vec<Operation>,
    is_printing_description: bool,
}

impl Multiplication {
    /// Work out `multiplier * multiplicand` digit by digit
    pub fn new(multiplier: Operand, multiplicand: Operand) -> Multiplication {
        let result = multiplier.value() * multiplicand.value();
        let result_size = count_decimal_digits(&result);
        let operations = arithmetic::multiplication::generate_operations(&multiplier, &multiplicand);

        tracing::debug!(
            multiplier_digits = multiplier.len(),
            multiplicand_digits = multiplicand.len(),
            result_size,
            "generated {} operations",
            operations.len()
        );

        let mult = Multiplication {
            multiplier: multiplier,
            multiplicand: multiplicand,
            result: result,
            result_size: result_size,
            operations: operations,
            is_printing_description: true,
        };
        debug_assert!(mult.is_consistent());
        mult
    }

    /// Parse both operands with the default context
    pub fn from_strs(multiplier: &str, multiplicand: &str) -> Result<Multiplication, ParseOperandError> {
        Multiplication::with_context(multiplier, multiplicand, &Context::default())
    }

    /// Parse both operands, applying the limits and options of `ctx`
    pub fn with_context(
        multiplier: &str,
        multiplicand: &str,
        ctx: &Context,
    ) -> Result<Multiplication, ParseOperandError> {
        let multiplier = Operand::parse_with_limit(multiplier, ctx.max_operand_digits)?;
        let multiplicand = Operand::parse_with_limit(multiplicand, ctx.max_operand_digits)?;

        let mut mult = Multiplication::new(multiplier, multiplicand);
        mult.is_printing_description = ctx.print_description;
        Ok(mult)
    }

    #[inline]
    pub fn multiplier(&self) -> &Operand {
        &self.multiplier
    }

    #[inline]
    pub fn multiplicand(&self) -> &Operand {
        &self.multiplicand
    }

    /// The product of the operands
    #[inline]
    pub fn result(&self) -> &BigUint {
        &self.result
    }

    /// Number of decimal digits in the product
    #[inline]
    pub fn result_size(&self) -> u64 {
        self.result_size
    }

    /// One operation per multiplier digit, least significant digit first
    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// All operation values as one flat sequence of
    /// `partial, carry, sum` groups
    pub fn operation_values(&self) -> impl Iterator<Item = &BigUint> + '_ {
        self.operations.iter().flat_map(|op| op.values())
    }

    #[inline]
    pub fn is_printing_description(&self) -> bool {
        self.is_printing_description
    }

    pub fn set_printing_description(&mut self, print: bool) {
        self.is_printing_description = print;
    }

    /// Turn descriptions off if `flag` starts with 'n' or 'N'
    pub fn set_description_flag(&mut self, flag: &str) {
        if context::is_description_disabled(flag) {
            self.is_printing_description = false;
        }
    }

    /// Each operation's sum multiplied by the place value of its
    /// multiplier digit
    ///
    /// These are the rows added together at the bottom of the diagram.
    ///
    pub fn shifted_sums(&self) -> impl Iterator<Item = BigUint> + '_ {
        self.operations
            .iter()
            .enumerate()
            .map(|(i, op)| &op.sum * ten_to_the(i as u64))
    }

    /// Totals of each place-value column of the digit products,
    /// units column first
    ///
    /// One column per written digit of both operands. Read with
    /// [`columns_value`], the totals give the product.
    ///
    /// ```
    /// use long_multiplication::Multiplication;
    ///
    /// let mult = Multiplication::from_strs("26", "13").unwrap();
    /// assert_eq!(mult.column_sums(), vec![8, 13, 2, 0]);
    /// ```
    pub fn column_sums(&self) -> Vec<u64> {
        arithmetic::addition::column_sums(&self.multiplier, &self.multiplicand)
    }

    /// The column totals after moving the tens of each one to the
    /// next column, once
    ///
    /// ```
    /// use long_multiplication::Multiplication;
    ///
    /// let mult = Multiplication::from_strs("26", "13").unwrap();
    /// assert_eq!(mult.subtotals(), vec![8, 3, 3, 0]);
    /// ```
    pub fn subtotals(&self) -> Vec<u64> {
        carry_tens(&self.column_sums())
    }

    /// Check the worked steps against the product
    ///
    /// True when every operation satisfies `sum == partial + carry`,
    /// and both the shifted sums and the column totals add up to the
    /// result.
    ///
    pub fn is_consistent(&self) -> bool {
        let steps_ok = self.operations.iter().all(Operation::is_consistent);
        let total: BigUint = self.shifted_sums().sum();
        steps_ok && total == self.result && columns_value(&self.column_sums()) == self.result
    }

    /// Stream the diagram to `out`, one row at a time
    pub fn write_diagram<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl FromStr for Multiplication {
    type Err = ParseOperandError;

    /// Parse `"multiplier,multiplicand[,output_type][,print_description]"`
    ///
    /// This is the path parameter format the web front-end sends. The
    /// output type is left to the response, a fourth field turns the
    /// descriptions off the same way the command line flag does.
    ///
    fn from_str(s: &str) -> Result<Multiplication, ParseOperandError> {
        let mut fields = s.splitn(4, ',').map(str::trim);
        let multiplier = fields.next().unwrap_or("");
        let multiplicand = fields.next().unwrap_or("");
        let _output_type = fields.next();
        let print_description = fields.next();

        let mut mult = Multiplication::from_strs(multiplier, multiplicand)?;
        if let Some(flag) = print_description {
            mult.set_description_flag(flag);
        }
        Ok(mult)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use paste::paste;

    include!("lib.tests.rs");
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
