#![allow(clippy::style)]

use std::env;
use std::fs;
use std::io;
use std::num::NonZeroU64;
use std::path::Path;

const MAX_DIGITS_VAR: &str = "RUST_LONG_MULTIPLICATION_MAX_OPERAND_DIGITS";
const MAX_DIGITS_FALLBACK: u64 = 4096;

fn main() -> io::Result<()> {
    let Some(outdir) = env::var_os("OUT_DIR") else {
        return Ok(());
    };

    let max_digits = match env::var(MAX_DIGITS_VAR) {
        Ok(text) => text
            .trim()
            .parse::<NonZeroU64>()
            .map(u64::from)
            .unwrap_or_else(|_| panic!("${} must be a positive integer, got {:?}", MAX_DIGITS_VAR, text)),
        Err(_) => MAX_DIGITS_FALLBACK,
    };

    let path = Path::new(&outdir).join("max_operand_digits.rs");
    let contents = format!("const DEFAULT_MAX_OPERAND_DIGITS: u64 = {};\n", max_digits);

    // leave an identical file alone, touching it triggers a rebuild
    if fs::read_to_string(&path).ok().as_deref() != Some(contents.as_str()) {
        fs::write(&path, contents)?;
    }

    println!("cargo:rerun-if-changed={}", path.display());
    println!("cargo:rerun-if-env-changed={}", MAX_DIGITS_VAR);
    Ok(())
}
