// Property tests to be included by lib.rs


mod generation {
    use super::*;

    proptest! {
        #[test]
        fn shifted_sums_rebuild_the_product(x: u64, y: u64) {
            let mult = Multiplication::new(Operand::from(x), Operand::from(y));
            let expected = BigUint::from(x) * BigUint::from(y);

            let total: BigUint = mult.shifted_sums().sum();
            prop_assert_eq!(&total, &expected);
            prop_assert_eq!(mult.result(), &expected);
        }

        #[test]
        fn every_sum_is_partial_plus_carry(x: u64, y: u64) {
            let mult = Multiplication::new(Operand::from(x), Operand::from(y));
            for op in mult.operations() {
                prop_assert_eq!(&op.partial + &op.carry, op.sum.clone());
            }
        }

        #[test]
        fn three_values_per_multiplier_digit(x: u64, y: u64) {
            let mult = Multiplication::new(Operand::from(x), Operand::from(y));
            let digits = count_decimal_digits(&BigUint::from(x)) as usize;
            prop_assert_eq!(mult.operations().len(), digits);
            prop_assert_eq!(mult.operation_values().count(), 3 * digits);
        }

        #[test]
        fn digit_count_matches_decimal_string(x: u128) {
            let n = BigUint::from(x);
            prop_assert_eq!(count_decimal_digits(&n), x.to_string().len() as u64);
        }

        #[test]
        fn column_totals_settle_into_the_product(x: u64, y: u64) {
            let mult = Multiplication::new(Operand::from(x), Operand::from(y));
            let mut columns = mult.column_sums();
            prop_assert_eq!(columns.len(), mult.multiplier().len() + mult.multiplicand().len());
            prop_assert_eq!(&columns_value(&columns), mult.result());

            while columns.iter().any(|&total| total >= 10) {
                columns = carry_tens(&columns);
                prop_assert_eq!(&columns_value(&columns), mult.result());
            }
            let digits: String = columns.iter().rev().map(|d| d.to_string()).collect();
            let result = mult.result().to_string();
            prop_assert_eq!(digits.trim_start_matches('0'), result.trim_start_matches('0'));
        }

        #[test]
        fn digit_strings_with_leading_zeros(zeros in 0usize..4, a in "[0-9]{1,30}", b in "[0-9]{1,30}") {
            let a = format!("{}{}", "0".repeat(zeros), a);
            let mult = Multiplication::from_strs(&a, &b).unwrap();
            prop_assert_eq!(mult.operations().len(), a.len());
            prop_assert!(mult.is_consistent());
        }
    }
}

mod rendering {
    use super::*;

    proptest! {
        #[test]
        fn descriptions_do_not_move_numbers(x: u32, y: u32) {
            let mut mult = Multiplication::new(Operand::from(x as u64), Operand::from(y as u64));
            let described = mult.to_string();
            mult.set_printing_description(false);
            let plain = mult.to_string();

            for (d, p) in described.lines().zip(plain.lines()) {
                prop_assert!(d.starts_with(p));
            }
            prop_assert_eq!(described.lines().count(), plain.lines().count());
        }

        #[test]
        fn rendering_twice_is_identical(x: u64, y: u64, describe: bool) {
            let mut mult = Multiplication::new(Operand::from(x), Operand::from(y));
            mult.set_printing_description(describe);
            prop_assert_eq!(mult.to_string(), mult.to_string());
        }

        #[test]
        fn last_row_is_the_result(x: u64, y: u64) {
            let mut mult = Multiplication::new(Operand::from(x), Operand::from(y));
            mult.set_printing_description(false);
            let text = mult.to_string();
            let last = text.lines().last().unwrap();
            prop_assert!(last.starts_with("= "));
            prop_assert_eq!(last[2..].trim_start(), mult.result().to_string());
        }

        #[test]
        fn row_count(x: u64, y: u64) {
            let mult = Multiplication::new(Operand::from(x), Operand::from(y));
            let m = mult.operations().len();
            // two operands, '=' line, 3 rows per digit and '-' lines
            // between them, '=' line, m shifted sums, '-' line, total
            let expected = 2 + 1 + (3 * m + (m - 1)) + 1 + m + 1 + 1;
            prop_assert_eq!(mult.to_string().lines().count(), expected);
        }
    }
}
