//! Column addition of the digit products
//!
//! The long multiplication can also be finished column by column:
//! every digit product is split into its last digit and its leading
//! digit, both are dropped into their place-value columns, and the
//! columns are totalled. Moving the tens of each total one column to
//! the left, until no total reaches ten, leaves the digits of the
//! product.

use crate::*;


/// Totals of every place-value column, units column first
///
/// Multiplier digit `a` times multiplicand digit `b` puts its last
/// digit in column `a + b` and its leading digit in column `a + b + 1`.
/// There is one column per written digit of both operands, so the
/// last one is often zero.
///
pub(crate) fn column_sums(multiplier: &Operand, multiplicand: &Operand) -> Vec<u64> {
    let mut columns = vec![0u64; multiplier.len() + multiplicand.len()];

    for (a, multiplier_digit) in multiplier.digits_le().enumerate() {
        for (b, multiplicand_digit) in multiplicand.digits_le().enumerate() {
            let (leading_digit, last_digit) = (multiplier_digit * multiplicand_digit).div_rem(&10);
            columns[a + b] += u64::from(last_digit);
            columns[a + b + 1] += u64::from(leading_digit);
        }
    }

    columns
}

/// Keep the units of each column and move its tens to the next one
///
/// This is a single pass: a column receiving tens may reach ten again,
/// and is settled by calling this on the result. Tens leaving the last
/// column open a new one.
///
pub fn carry_tens(columns: &[u64]) -> Vec<u64> {
    let mut carried = vec![0u64; columns.len()];

    for (i, &total) in columns.iter().enumerate() {
        let (tens, units) = total.div_rem(&10);
        carried[i] += units;
        if tens == 0 {
            continue;
        }
        match carried.get_mut(i + 1) {
            Some(next) => *next += tens,
            None => carried.push(tens),
        }
    }

    carried
}

/// Value of a list of column totals, units column first
pub fn columns_value(columns: &[u64]) -> BigUint {
    columns
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, &total| acc * 10u8 + total)
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    fn operand(n: u64) -> Operand {
        Operand::from(n)
    }

    macro_rules! impl_case {
        ($name:ident: $multiplier:literal x $multiplicand:literal => [ $($column:literal),* ]) => {
            paste! {
                #[test]
                fn [< column_sums $name >]() {
                    let columns = column_sums(&operand($multiplier), &operand($multiplicand));
                    assert_eq!(columns, vec![ $($column),* ]);
                    assert_eq!(columns_value(&columns), BigUint::from($multiplier as u64) * ($multiplicand as u64));
                }
            }
        };
        ($name:ident: [ $($column:literal),* ] => [ $($carried:literal),* ]) => {
            paste! {
                #[test]
                fn [< carry_tens $name >]() {
                    let columns: Vec<u64> = vec![ $($column),* ];
                    let carried = carry_tens(&columns);
                    assert_eq!(carried, vec![ $($carried),* ]);
                    assert_eq!(columns_value(&carried), columns_value(&columns));
                }
            }
        };
    }

    impl_case!(_2_3: 2 x 3 => [6, 0]);
    impl_case!(_9_8: 9 x 8 => [2, 7]);
    impl_case!(_37_8: 37 x 8 => [6, 9, 2]);
    impl_case!(_8_37: 8 x 37 => [6, 9, 2]);
    impl_case!(_5_79: 5 x 79 => [5, 9, 3]);
    impl_case!(_13_26: 13 x 26 => [8, 13, 2, 0]);
    impl_case!(_123_456: 123 x 456 => [8, 8, 10, 15, 4, 0]);
    impl_case!(_357_78924358: 357 x 78924358 => [6, 10, 17, 24, 17, 8, 25, 25, 19, 6, 2]);
    impl_case!(_78924358_357: 78924358 x 357 => [6, 10, 17, 24, 17, 8, 25, 25, 19, 6, 2]);
    impl_case!(_0_999: 0 x 999 => [0, 0, 0, 0]);

    impl_case!(_two_columns: [6, 0] => [6, 0]);
    impl_case!(_no_carry: [5, 8, 2] => [5, 8, 2]);
    impl_case!(_one_carry: [4, 11, 6, 0] => [4, 1, 7, 0]);
    impl_case!(_carry_into_last: [6, 12, 6, 2] => [6, 2, 7, 2]);
    impl_case!(_nine_columns: [1, 10, 19, 27, 27, 27, 26, 17, 8] => [1, 0, 10, 8, 9, 9, 8, 9, 9]);
    impl_case!(_eight_columns: [5, 10, 10, 10, 5, 16, 4, 0] => [5, 0, 1, 1, 6, 6, 5, 0]);
    impl_case!(_eleven_columns: [5, 12, 17, 14, 13, 8, 11, 26, 12, 10, 1] => [5, 2, 8, 5, 4, 9, 1, 7, 4, 1, 2]);
    impl_case!(_hundreds: [135, 0] => [5, 13]);
    impl_case!(_past_the_last_column: [3, 42] => [3, 2, 4]);

    #[test]
    fn leading_zero_columns_are_kept() {
        let columns = column_sums(&Operand::from_str("007").unwrap(), &operand(25));
        assert_eq!(columns, vec![5, 7, 1, 0, 0]);
    }

    #[test]
    fn columns_value_of_nothing_is_zero() {
        assert_eq!(columns_value(&[]), BigUint::zero());
        assert_eq!(columns_value(&[0, 0]), BigUint::zero());
    }
}
