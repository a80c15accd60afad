//! Decimal helpers shared by the generator, the column addition
//! and the diagram layout

use crate::*;

pub(crate) mod addition;
pub(crate) mod multiplication;

/// `10^pow`
///
/// Powers below 10^20 come straight from a `u64`.
///
pub fn ten_to_the(pow: u64) -> BigUint {
    match u32::try_from(pow) {
        Ok(small) if small < 20 => BigUint::from(10u64.pow(small)),
        _ => num_traits::pow(BigUint::from(10u8), pow as usize),
    }
}

/// Number of decimal digits of `uint`, one for zero
pub fn count_decimal_digits(uint: &BigUint) -> u64 {
    if uint.is_zero() {
        return 1;
    }

    // bits * log10(2) is at most one below the digit count, never above
    let estimate = (uint.bits() as f64 / LOG2_10) as u64;
    if *uint >= ten_to_the(estimate) {
        estimate + 1
    } else {
        estimate
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< count_decimal_digits_ $name >]() {
                    let n = BigUint::from_str_radix($input, 10).unwrap();
                    assert_eq!(count_decimal_digits(&n), $expected);
                }
            }
        };
    }

    impl_case!(zero: "0" => 1);
    impl_case!(one: "1" => 1);
    impl_case!(nine: "9" => 1);
    impl_case!(ten: "10" => 2);
    impl_case!(ninety_nine: "99" => 2);
    impl_case!(hundred: "100" => 3);
    impl_case!(ten_digits: "1234567890" => 10);
    impl_case!(u64_max: "18446744073709551615" => 20);
    impl_case!(u64_max_plus_one: "18446744073709551616" => 20);
    impl_case!(ten_to_twenty: "100000000000000000000" => 21);
    impl_case!(forty_nines: "9999999999999999999999999999999999999999" => 40);

    #[test]
    fn count_decimal_digits_matches_string_length() {
        for pow in [0u64, 1, 5, 19, 20, 37, 100, 589, 590, 1000] {
            let n = ten_to_the(pow);
            assert_eq!(count_decimal_digits(&n), pow + 1);

            let below = n - 1u8;
            if pow > 0 {
                assert_eq!(count_decimal_digits(&below), pow);
            }
        }
    }

    #[test]
    fn ten_to_the_small_powers() {
        assert_eq!(ten_to_the(0), BigUint::one());
        assert_eq!(ten_to_the(1), BigUint::from(10u8));
        assert_eq!(ten_to_the(19), BigUint::from(10u64.pow(19)));
    }

    #[test]
    fn ten_to_the_large_powers() {
        for pow in [20u64, 38, 57, 589, 590, 600, 1234] {
            let expected = format!("1{}", "0".repeat(pow as usize));
            assert_eq!(ten_to_the(pow).to_string(), expected);
        }
    }
}
