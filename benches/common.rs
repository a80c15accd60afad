//! common routines to be included by benches

use long_multiplication::{Multiplication, Operand};


/// Random decimal digit strings of exactly `digits` digits
pub fn random_digit_strings(count: usize, digits: usize, seed: u64) -> Vec<String> {
    let mut rng = oorandom::Rand32::new(seed);

    (0..count)
        .map(|_| {
            (0..digits)
                .map(|i| {
                    // no leading zero
                    let low = if i == 0 { 1 } else { 0 };
                    char::from(b'0' + rng.rand_range(low..10) as u8)
                })
                .collect()
        })
        .collect()
}

/// Parse pairs of digit strings into operands
pub fn make_operand_pairs(multipliers: &[String], multiplicands: &[String]) -> Vec<(Operand, Operand)> {
    multipliers
        .iter()
        .zip(multiplicands.iter())
        .map(|(a, b)| (a.parse().unwrap(), b.parse().unwrap()))
        .collect()
}

/// Fully worked out multiplications, ready to render
pub fn make_multiplications(pairs: &[(Operand, Operand)]) -> Vec<Multiplication> {
    pairs
        .iter()
        .map(|(a, b)| Multiplication::new(a.clone(), b.clone()))
        .collect()
}
