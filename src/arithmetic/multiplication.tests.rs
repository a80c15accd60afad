// tests included by arithmetic/multiplication.rs

fn operand(s: &str) -> Operand {
    Operand::parse_with_limit(s, 1000).unwrap()
}

fn triple(partial: u64, carry: u64, sum: u64) -> Operation {
    Operation {
        partial: partial.into(),
        carry: carry.into(),
        sum: sum.into(),
    }
}

macro_rules! impl_case {
    ($name:ident: $multiplier:literal x $multiplicand:literal => [ $(($p:literal, $c:literal, $s:literal)),* ]) => {
        paste! {
            #[test]
            fn [< case $name >]() {
                let ops = generate_operations(&operand($multiplier), &operand($multiplicand));
                let expected = vec![ $( triple($p, $c, $s) ),* ];
                assert_eq!(ops, expected);
            }
        }
    };
}

impl_case!(_5_79: "5" x "79" => [(55, 340, 395)]);
impl_case!(_12_34: "12" x "34" => [(68, 0, 68), (34, 0, 34)]);
impl_case!(_0_999: "0" x "999" => [(0, 0, 0)]);
impl_case!(_123_0: "123" x "0" => [(0, 0, 0), (0, 0, 0), (0, 0, 0)]);
impl_case!(_9_9: "9" x "9" => [(1, 80, 81)]);
impl_case!(_99_99: "99" x "99" => [(11, 880, 891), (11, 880, 891)]);
impl_case!(_1000_1: "1000" x "1" => [(0, 0, 0), (0, 0, 0), (0, 0, 0), (1, 0, 1)]);
impl_case!(_7_1234567890: "7" x "1234567890" => [(7418529630, 1223445600, 8641975230)]);
impl_case!(
    _8642_13597: "8642" x "13597" => [
        (26084, 1110, 27194),
        (42068, 12320, 54388),
        (68042, 13540, 81582),
        (84026, 24750, 108776)
    ]
);

#[test]
fn digits_are_read_from_the_string() {
    // leading zeros still drive one operation each
    let ops = generate_operations(&operand("007"), &operand("25"));
    assert_eq!(ops, vec![triple(45, 130, 175), triple(0, 0, 0), triple(0, 0, 0)]);
}

#[test]
fn single_digit_times_operand() {
    let op = multiply_digit_by_operand(3, &operand("456"));
    assert_eq!(op, triple(258, 1110, 1368));
    assert!(op.is_consistent());
}

#[test]
fn zero_digit_gives_zero_operation() {
    let op = multiply_digit_by_operand(0, &operand("987654321"));
    assert_eq!(op, triple(0, 0, 0));
}

#[test]
fn wide_operand_does_not_overflow() {
    let nines = "9".repeat(60);
    let op = multiply_digit_by_operand(9, &operand(&nines));

    // 9 * 9 = 81 in every column
    let partial = BigUint::from_str_radix(&"1".repeat(60), 10).unwrap();
    let carry = BigUint::from_str_radix(&format!("{}0", "8".repeat(60)), 10).unwrap();
    assert_eq!(op.partial, partial);
    assert_eq!(op.carry, carry);
    assert_eq!(op.sum, BigUint::from_str_radix(&nines, 10).unwrap() * 9u8);
}

#[test]
fn operation_values_order() {
    let op = triple(1, 2, 3);
    let values = op.values();
    assert_eq!(values[0], &BigUint::from(1u8));
    assert_eq!(values[1], &BigUint::from(2u8));
    assert_eq!(values[2], &BigUint::from(3u8));
}

#[test]
fn decimal_digits_le_to_number() {
    assert_eq!(from_decimal_digits_le(&[]), BigUint::zero());
    assert_eq!(from_decimal_digits_le(&[0, 0, 0]), BigUint::zero());
    assert_eq!(from_decimal_digits_le(&[5, 4]), BigUint::from(45u8));
    assert_eq!(from_decimal_digits_le(&[0, 8, 0, 1]), BigUint::from(1080u16));
}
