// tests included by lib.rs

macro_rules! impl_case {
    ($name:ident: $multiplier:literal x $multiplicand:literal => $result:literal) => {
        paste! {
            #[test]
            fn [< multiply $name >]() {
                let mult = Multiplication::from_strs($multiplier, $multiplicand).unwrap();
                let expected = BigUint::from_str_radix($result, 10).unwrap();

                assert_eq!(mult.result(), &expected);
                assert_eq!(mult.result_size(), $result.len() as u64);
                assert_eq!(mult.operations().len(), $multiplier.len());
                assert_eq!(mult.operation_values().count(), 3 * $multiplier.len());
                assert!(mult.is_consistent());
            }
        }
    };
}

impl_case!(_5_79: "5" x "79" => "395");
impl_case!(_12_34: "12" x "34" => "408");
impl_case!(_0_999: "0" x "999" => "0");
impl_case!(_999_0: "999" x "0" => "0");
impl_case!(_8642_13597: "8642" x "13597" => "117505274");
impl_case!(_007_25: "007" x "25" => "175");
impl_case!(
    _u64_max_squared: "18446744073709551615" x "18446744073709551615"
    => "340282366920938463426481119284349108225"
);

#[test]
fn single_digit_multiplier_has_one_operation() {
    let mult = Multiplication::from_strs("5", "79").unwrap();
    let ops = mult.operations();
    assert_eq!(ops.len(), 1);
    assert_eq!(ops[0].sum, BigUint::from(395u32));
    assert!(mult.to_string().ends_with("= 395 ---> Final result\n"));
}

#[test]
fn zero_multiplier_has_one_zero_operation() {
    let mult = Multiplication::from_strs("0", "999").unwrap();
    let zero = BigUint::zero();
    let values: Vec<_> = mult.operation_values().collect();
    assert_eq!(values, vec![&zero, &zero, &zero]);
}

#[test]
fn shifted_sums_of_12_34() {
    let mult = Multiplication::from_strs("12", "34").unwrap();
    let sums: Vec<BigUint> = mult.shifted_sums().collect();
    assert_eq!(sums, vec![BigUint::from(68u32), BigUint::from(340u32)]);
}

#[test]
fn operands_keep_their_strings() {
    let mult = Multiplication::from_strs("0012", "34").unwrap();
    assert_eq!(mult.multiplier().as_str(), "0012");
    assert_eq!(mult.multiplier().value(), &BigUint::from(12u8));
    assert_eq!(mult.multiplicand().as_str(), "34");
}

#[test]
fn description_flag() {
    let mut mult = Multiplication::from_strs("12", "34").unwrap();
    assert!(mult.is_printing_description());

    mult.set_description_flag("yes");
    assert!(mult.is_printing_description());

    mult.set_description_flag("No");
    assert!(!mult.is_printing_description());
}

#[test]
fn context_is_applied() {
    let ctx = Context::from_description_flag("no");
    let mult = Multiplication::with_context("12", "34", &ctx).unwrap();
    assert!(!mult.is_printing_description());
    assert!(!mult.to_string().contains("--->"));

    let ctx = Context::default().with_max_operand_digits(3);
    let err = Multiplication::with_context("1234", "1", &ctx).unwrap_err();
    assert_eq!(err, ParseOperandError::TooLarge { digits: 4, max: 3 });

    let err = Multiplication::with_context("1", "12a", &ctx).unwrap_err();
    assert_eq!(err, ParseOperandError::InvalidDigit { position: 2, character: 'a' });
}

#[test]
fn from_comma_separated_pair() {
    let mult = Multiplication::from_str("12,34").unwrap();
    assert_eq!(mult.result(), &BigUint::from(408u32));
    assert!(mult.is_printing_description());

    let mult = Multiplication::from_str("12, 34").unwrap();
    assert_eq!(mult.multiplicand().as_str(), "34");

    assert_eq!(Multiplication::from_str("12").unwrap_err(), ParseOperandError::Empty);
    assert_eq!(
        Multiplication::from_str("12,3x").unwrap_err(),
        ParseOperandError::InvalidDigit { position: 1, character: 'x' }
    );
}

#[test]
fn from_front_end_path_parameter() {
    let mult = Multiplication::from_str("12,34,plain").unwrap();
    assert_eq!(mult.result(), &BigUint::from(408u32));
    assert!(mult.is_printing_description());

    let mult = Multiplication::from_str("12,34,plain,yes").unwrap();
    assert!(mult.is_printing_description());

    let mult = Multiplication::from_str("12,34,html,no").unwrap();
    assert_eq!(mult.multiplier().as_str(), "12");
    assert!(!mult.is_printing_description());
    assert!(!mult.to_string().contains("--->"));
}

macro_rules! impl_columns_case {
    ($name:ident: $multiplier:literal x $multiplicand:literal => [ $($column:literal),* ] => [ $($subtotal:literal),* ]) => {
        paste! {
            #[test]
            fn [< columns $name >]() {
                let mult = Multiplication::from_strs($multiplier, $multiplicand).unwrap();
                assert_eq!(mult.column_sums(), vec![ $($column),* ]);
                assert_eq!(mult.subtotals(), vec![ $($subtotal),* ]);
                assert_eq!(&columns_value(&mult.subtotals()), mult.result());
            }
        }
    };
}

impl_columns_case!(_12_34: "12" x "34" => [8, 10, 3, 0] => [8, 0, 4, 0]);
impl_columns_case!(_5_79: "5" x "79" => [5, 9, 3] => [5, 9, 3]);
impl_columns_case!(_123_456: "123" x "456" => [8, 8, 10, 15, 4, 0] => [8, 8, 0, 6, 5, 0]);
impl_columns_case!(
    _8642_13597: "8642" x "13597" => [4, 17, 11, 24, 18, 23, 15, 10, 0] => [4, 7, 2, 5, 10, 4, 7, 1, 1]
);
impl_columns_case!(_0_999: "0" x "999" => [0, 0, 0, 0] => [0, 0, 0, 0]);

#[test]
fn carrying_until_settled_gives_result_digits() {
    let mult = Multiplication::from_strs("8642", "13597").unwrap();
    let mut columns = mult.column_sums();
    while columns.iter().any(|&total| total >= 10) {
        columns = carry_tens(&columns);
    }

    let digits: String = columns.iter().rev().map(|d| d.to_string()).collect();
    assert_eq!(digits, "117505274");
}

#[test]
fn write_diagram_to_io() {
    let mult = Multiplication::from_strs("12", "34").unwrap();
    let mut buf: Vec<u8> = Vec::new();
    mult.write_diagram(&mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), mult.to_string());
}

#[test]
fn large_operands() {
    let a = "9".repeat(300);
    let b = "8".repeat(250);
    let mult = Multiplication::from_strs(&a, &b).unwrap();

    let expected = BigUint::from_str_radix(&a, 10).unwrap() * BigUint::from_str_radix(&b, 10).unwrap();
    assert_eq!(mult.result(), &expected);
    assert_eq!(mult.operations().len(), 300);
    assert!(mult.is_consistent());
}
