//! Implementation of std::fmt traits: the long multiplication diagram
//!
//! Every numeric row is right aligned to a common column. The rows of
//! the n-th multiplier digit end n columns early, so the digits of each
//! partial product sit under the place values they stand for.

use crate::*;
use std::fmt::Write;


const DESCRIPTION_ARROW: &str = " ---> ";


impl fmt::Display for Multiplication {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_diagram(self, f)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.partial, self.carry, self.sum)
    }
}


/// Width of the numeric column, not counting the two character gutter
///
/// This is the number of digits of the result, widened if any row
/// would not fit: operands written with leading zeros, or a zero
/// multiplier, can be longer than the product.
///
pub(crate) fn column_width(this: &Multiplication) -> u64 {
    let mut width = this.result_size;
    width = cmp::max(width, this.multiplicand.len() as u64);
    width = cmp::max(width, this.multiplier.len() as u64);

    for (shift, op) in this.operations.iter().enumerate() {
        for value in op.values() {
            width = cmp::max(width, count_decimal_digits(value) + shift as u64);
        }
    }

    width
}


/// Write the complete diagram, row by row, into `out`
pub(crate) fn write_diagram<W: Write + ?Sized>(this: &Multiplication, out: &mut W) -> fmt::Result {
    let mut rows = DiagramWriter {
        out: out,
        width: column_width(this),
        describe: this.is_printing_description,
    };

    tracing::trace!(width = rows.width, describe = rows.describe, "rendering diagram");

    rows.number("  ", 0, &this.multiplicand, this.multiplicand.len() as u64, 0)?;
    rows.description(0, format_args!("Multiplicand => a"))?;

    rows.number("x ", 0, &this.multiplier, this.multiplier.len() as u64, 0)?;
    rows.description(0, format_args!("Multiplier => b"))?;

    rows.separator('=')?;

    let last = this.operations.len().saturating_sub(1);
    for (i, op) in this.operations.iter().enumerate() {
        let shift = i as u64;
        let label = i + 1;

        rows.value("  ", shift, &op.partial, 0)?;
        rows.description(shift, format_args!("First digit: b{} * a[x]", label))?;

        rows.value("+ ", shift, &op.carry, 0)?;
        rows.description(0, format_args!("Carry: b{} * a[x]", label))?;

        rows.value("= ", shift, &op.sum, 0)?;
        rows.description(0, format_args!("Result of the sum"))?;

        if i != last {
            rows.separator('-')?;
        }
    }

    rows.separator('=')?;

    // sums, shifted by their place value
    for (i, op) in this.operations.iter().enumerate() {
        let shift = i as u64;
        rows.value("+ ", shift, &op.sum, shift)?;
        rows.description(0, format_args!("Result: b{} * a", i + 1))?;
    }

    rows.separator('-')?;

    rows.value("= ", 0, &this.result, 0)?;
    rows.description(0, format_args!("Final result"))?;

    Ok(())
}


/// Row writer sharing the column width of one diagram
struct DiagramWriter<'a, W: Write + ?Sized> {
    out: &'a mut W,
    width: u64,
    describe: bool,
}

impl<W: Write + ?Sized> DiagramWriter<'_, W> {
    /// Gutter, padding and a number ending `shift` columns before the
    /// right edge, followed by `zeros` zeros filling those columns back
    fn number(
        &mut self,
        gutter: &str,
        shift: u64,
        number: &dyn fmt::Display,
        digit_count: u64,
        zeros: u64,
    ) -> fmt::Result {
        debug_assert!(digit_count + shift <= self.width);

        self.out.write_str(gutter)?;
        let pad = self.width.saturating_sub(shift).saturating_sub(digit_count);
        write_repeated(&mut *self.out, ' ', pad)?;
        write!(self.out, "{}", number)?;
        write_repeated(&mut *self.out, '0', zeros)
    }

    fn value(&mut self, gutter: &str, shift: u64, value: &BigUint, zeros: u64) -> fmt::Result {
        self.number(gutter, shift, value, count_decimal_digits(value), zeros)
    }

    /// Optional trailing label, then the end of the row
    ///
    /// `indent` spaces go before the arrow; the first row of each digit
    /// block is staggered by its digit index.
    ///
    fn description(&mut self, indent: u64, text: fmt::Arguments) -> fmt::Result {
        if self.describe {
            write_repeated(&mut *self.out, ' ', indent)?;
            self.out.write_str(DESCRIPTION_ARROW)?;
            self.out.write_fmt(text)?;
        }
        self.out.write_char('\n')
    }

    fn separator(&mut self, ch: char) -> fmt::Result {
        write_repeated(&mut *self.out, ch, self.width + 2)?;
        self.out.write_char('\n')
    }
}

fn write_repeated<W: Write + ?Sized>(out: &mut W, ch: char, count: u64) -> fmt::Result {
    for _ in 0..count {
        out.write_char(ch)?;
    }
    Ok(())
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use paste::paste;

    include!("impl_fmt.tests.diagrams.rs");
}
