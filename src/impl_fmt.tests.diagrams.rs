// diagram tests included by impl_fmt.rs

fn diagram(rows: &[&str]) -> String {
    let mut s = rows.join("\n");
    s.push('\n');
    s
}

macro_rules! impl_case {
    ($name:ident: $multiplier:literal x $multiplicand:literal, describe => [ $($row:literal),* $(,)? ]) => {
        impl_case!($name: $multiplier x $multiplicand, true => [ $($row),* ]);
    };
    ($name:ident: $multiplier:literal x $multiplicand:literal, plain => [ $($row:literal),* $(,)? ]) => {
        impl_case!($name: $multiplier x $multiplicand, false => [ $($row),* ]);
    };
    ($name:ident: $multiplier:literal x $multiplicand:literal, $describe:literal => [ $($row:literal),* ]) => {
        paste! {
            #[test]
            fn [< case $name >]() {
                let mut mult = Multiplication::from_strs($multiplier, $multiplicand).unwrap();
                mult.set_printing_description($describe);

                let expected = diagram(&[ $($row),* ]);
                assert_eq!(mult.to_string(), expected);
            }
        }
    };
}

impl_case!(_12_34: "12" x "34", describe => [
    "   34 ---> Multiplicand => a",
    "x  12 ---> Multiplier => b",
    "=====",
    "   68 ---> First digit: b1 * a[x]",
    "+   0 ---> Carry: b1 * a[x]",
    "=  68 ---> Result of the sum",
    "-----",
    "  34  ---> First digit: b2 * a[x]",
    "+  0 ---> Carry: b2 * a[x]",
    "= 34 ---> Result of the sum",
    "=====",
    "+  68 ---> Result: b1 * a",
    "+ 340 ---> Result: b2 * a",
    "-----",
    "= 408 ---> Final result",
]);

impl_case!(_12_34_no_description: "12" x "34", plain => [
    "   34",
    "x  12",
    "=====",
    "   68",
    "+   0",
    "=  68",
    "-----",
    "  34",
    "+  0",
    "= 34",
    "=====",
    "+  68",
    "+ 340",
    "-----",
    "= 408",
]);

impl_case!(_5_79: "5" x "79", describe => [
    "   79 ---> Multiplicand => a",
    "x   5 ---> Multiplier => b",
    "=====",
    "   55 ---> First digit: b1 * a[x]",
    "+ 340 ---> Carry: b1 * a[x]",
    "= 395 ---> Result of the sum",
    "=====",
    "+ 395 ---> Result: b1 * a",
    "-----",
    "= 395 ---> Final result",
]);

impl_case!(_0_999: "0" x "999", plain => [
    "  999",
    "x   0",
    "=====",
    "    0",
    "+   0",
    "=   0",
    "=====",
    "+   0",
    "-----",
    "=   0",
]);

impl_case!(_0_999_with_description: "0" x "999", describe => [
    "  999 ---> Multiplicand => a",
    "x   0 ---> Multiplier => b",
    "=====",
    "    0 ---> First digit: b1 * a[x]",
    "+   0 ---> Carry: b1 * a[x]",
    "=   0 ---> Result of the sum",
    "=====",
    "+   0 ---> Result: b1 * a",
    "-----",
    "=   0 ---> Final result",
]);

impl_case!(_8642_13597: "8642" x "13597", describe => [
    "      13597 ---> Multiplicand => a",
    "x      8642 ---> Multiplier => b",
    "===========",
    "      26084 ---> First digit: b1 * a[x]",
    "+      1110 ---> Carry: b1 * a[x]",
    "=     27194 ---> Result of the sum",
    "-----------",
    "     42068  ---> First digit: b2 * a[x]",
    "+    12320 ---> Carry: b2 * a[x]",
    "=    54388 ---> Result of the sum",
    "-----------",
    "    68042   ---> First digit: b3 * a[x]",
    "+   13540 ---> Carry: b3 * a[x]",
    "=   81582 ---> Result of the sum",
    "-----------",
    "   84026    ---> First digit: b4 * a[x]",
    "+  24750 ---> Carry: b4 * a[x]",
    "= 108776 ---> Result of the sum",
    "===========",
    "+     27194 ---> Result: b1 * a",
    "+    543880 ---> Result: b2 * a",
    "+   8158200 ---> Result: b3 * a",
    "+ 108776000 ---> Result: b4 * a",
    "-----------",
    "= 117505274 ---> Final result",
]);

impl_case!(_007_25: "007" x "25", plain => [
    "   25",
    "x 007",
    "=====",
    "   45",
    "+ 130",
    "= 175",
    "-----",
    "   0",
    "+  0",
    "=  0",
    "-----",
    "  0",
    "+ 0",
    "= 0",
    "=====",
    "+ 175",
    "+  00",
    "+ 000",
    "-----",
    "= 175",
]);

impl_case!(_12_0: "12" x "0", describe => [
    "   0 ---> Multiplicand => a",
    "x 12 ---> Multiplier => b",
    "====",
    "   0 ---> First digit: b1 * a[x]",
    "+  0 ---> Carry: b1 * a[x]",
    "=  0 ---> Result of the sum",
    "----",
    "  0  ---> First digit: b2 * a[x]",
    "+ 0 ---> Carry: b2 * a[x]",
    "= 0 ---> Result of the sum",
    "====",
    "+  0 ---> Result: b1 * a",
    "+ 00 ---> Result: b2 * a",
    "----",
    "=  0 ---> Final result",
]);

impl_case!(_9_9: "9" x "9", plain => [
    "   9",
    "x  9",
    "====",
    "   1",
    "+ 80",
    "= 81",
    "====",
    "+ 81",
    "----",
    "= 81",
]);

#[test]
fn column_width_is_result_size() {
    let mult = Multiplication::from_strs("8642", "13597").unwrap();
    assert_eq!(mult.result_size(), 9);
    assert_eq!(column_width(&mult), 9);
}

#[test]
fn column_width_grows_for_long_operands() {
    // product has one digit, multiplicand three
    let mult = Multiplication::from_strs("0", "999").unwrap();
    assert_eq!(mult.result_size(), 1);
    assert_eq!(column_width(&mult), 3);

    let mult = Multiplication::from_strs("0000", "5").unwrap();
    assert_eq!(column_width(&mult), 4);
}

#[test]
fn rows_never_exceed_separator_width() {
    for &(a, b) in &[("12", "34"), ("999", "999"), ("0", "123456"), ("100", "7"), ("00009", "8")] {
        let mut mult = Multiplication::from_strs(a, b).unwrap();
        mult.set_printing_description(false);

        let text = mult.to_string();
        let separator_len = text.lines().nth(2).unwrap().len();
        for line in text.lines() {
            assert!(line.len() <= separator_len, "{:?} in\n{}", line, text);
        }
        // result row is flush with the separators
        assert_eq!(text.lines().last().unwrap().len(), separator_len);
    }
}

#[test]
fn descriptions_only_append_text() {
    let mut mult = Multiplication::from_strs("4096", "731").unwrap();
    let described = mult.to_string();
    mult.set_printing_description(false);
    let plain = mult.to_string();

    assert_eq!(described.lines().count(), plain.lines().count());
    for (d, p) in described.lines().zip(plain.lines()) {
        assert!(d.starts_with(p), "{:?} does not extend {:?}", d, p);
        let suffix = &d[p.len()..];
        assert!(suffix.is_empty() || suffix.trim_start().starts_with("---> "));
    }
}

#[test]
fn only_first_digit_rows_are_staggered() {
    let mult = Multiplication::from_strs("8642", "13597").unwrap();
    let text = mult.to_string();
    let lines: Vec<&str> = text.lines().collect();

    for (i, block) in lines[3..].chunks(4).take(4).enumerate() {
        let indent = " ".repeat(i);
        let first = format!("{} ---> First digit: b{} * a[x]", indent, i + 1);
        assert!(block[0].ends_with(&first), "{:?}", block[0]);

        // carry and sum labels follow their value with no extra spaces
        assert!(!block[1].contains("  --->"), "{:?}", block[1]);
        assert!(block[1].ends_with(&format!(" ---> Carry: b{} * a[x]", i + 1)));
        assert!(!block[2].contains("  --->"), "{:?}", block[2]);
        assert!(block[2].ends_with(" ---> Result of the sum"));
    }
}

#[test]
fn rendering_is_repeatable() {
    let mult = Multiplication::from_strs("31415", "2718").unwrap();
    assert_eq!(mult.to_string(), mult.to_string());
}

#[test]
fn write_into_fmt_buffer() {
    let mult = Multiplication::from_strs("5", "79").unwrap();
    let mut buf = String::new();
    write_diagram(&mult, &mut buf).unwrap();
    assert_eq!(buf, mult.to_string());
    assert!(buf.ends_with("= 395 ---> Final result\n"));
}

#[test]
fn display_operation() {
    let mult = Multiplication::from_strs("5", "79").unwrap();
    assert_eq!(mult.operations()[0].to_string(), "(55, 340, 395)");
}
