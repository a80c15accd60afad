//! The command line contract used by the CGI wrapper
//!
//! ```text
//! long-multiplication MULTIPLIER MULTIPLICAND OUTPUT_TYPE PRINT_DESCRIPTION
//! ```
//!
//! The response on standard output always starts with a
//! `Content-Type` header and a blank line. A valid request is answered
//! with `text/{OUTPUT_TYPE}` and the diagram. Every failure is answered
//! with `text/plain`, since the output type itself may be the missing
//! argument, followed by the diagnostic lines and `Exiting...`.

use crate::*;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::error::ErrorKind;
use clap::Parser;

pub const EXIT_SUCCESS: u8 = 0;
/// Invalid operand or output type, or an I/O failure
pub const EXIT_FAILURE: u8 = 1;
/// Missing, surplus or unknown arguments
pub const EXIT_ARGUMENTS: u8 = 2;


/// Render the long multiplication of two non-negative integers
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "long-multiplication", version, about, long_about = None)]
pub struct Args {
    /// Multiplier, as decimal digits
    #[arg(allow_negative_numbers = true)]
    pub multiplier: Option<String>,

    /// Multiplicand, as decimal digits
    #[arg(allow_negative_numbers = true)]
    pub multiplicand: Option<String>,

    /// Subtype of the text/* response, e.g. `plain`
    pub output_type: Option<String>,

    /// Anything starting with 'n' or 'N' hides the row descriptions
    pub print_description: Option<String>,

    /// Positional arguments past the fourth
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Also store the diagram, without the header, in this file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Longest operand accepted, in digits
    #[arg(long, value_name = "DIGITS")]
    pub max_digits: Option<u64>,
}

/// A complete set of arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub multiplier: String,
    pub multiplicand: String,
    pub output_type: String,
    pub context: Context,
    pub file: Option<PathBuf>,
}

/// Everything that ends an invocation early
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    /// 1-based positions of the absent arguments
    #[error("Some arguments are missing.")]
    MissingArguments { positions: Vec<usize> },

    #[error("Too many arguments supplied.")]
    TooManyArguments { count: usize },

    #[error("{0}")]
    Usage(String),

    #[error("The output type {0:?} is not a valid MIME subtype.")]
    InvalidOutputType(String),

    #[error("The {name} is not valid: {source}.")]
    Operand {
        name: &'static str,
        #[source]
        source: ParseOperandError,
    },

    #[error("Could not store the diagram in {}: {source}.", .path.display())]
    Store {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write the response: {0}.")]
    Io(#[from] io::Error),
}

impl InvocationError {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> u8 {
        use InvocationError::*;

        match *self {
            MissingArguments { .. } | TooManyArguments { .. } | Usage(_) => EXIT_ARGUMENTS,
            InvalidOutputType(_) | Operand { .. } | Store { .. } | Io(_) => EXIT_FAILURE,
        }
    }
}

impl Args {
    /// Check the positional arguments are all there, and nothing more
    pub fn into_request(self) -> Result<Request, InvocationError> {
        let (multiplier, multiplicand, output_type, print_description) = match (
            self.multiplier,
            self.multiplicand,
            self.output_type,
            self.print_description,
        ) {
            (Some(a), Some(b), Some(t), Some(d)) => (a, b, t, d),
            (a, b, t, d) => {
                let present = [a.is_some(), b.is_some(), t.is_some(), d.is_some()];
                let positions = present
                    .iter()
                    .enumerate()
                    .filter_map(|(i, is_present)| if *is_present { None } else { Some(i + 1) })
                    .collect();
                return Err(InvocationError::MissingArguments { positions });
            }
        };

        if !self.extra.is_empty() {
            return Err(InvocationError::TooManyArguments { count: 4 + self.extra.len() });
        }

        if !is_valid_output_type(&output_type) {
            return Err(InvocationError::InvalidOutputType(output_type));
        }

        let mut context = Context::from_description_flag(&print_description);
        if let Some(max_digits) = self.max_digits {
            context = context.with_max_operand_digits(max_digits);
        }

        Ok(Request {
            multiplier: multiplier,
            multiplicand: multiplicand,
            output_type: output_type,
            context: context,
            file: self.file,
        })
    }
}

impl Request {
    /// Parse the operands and work out the multiplication
    pub fn multiplication(&self) -> Result<Multiplication, InvocationError> {
        let max_digits = self.context.max_operand_digits;
        let multiplier = Operand::parse_with_limit(&self.multiplier, max_digits)
            .map_err(|source| InvocationError::Operand { name: "multiplier", source })?;
        let multiplicand = Operand::parse_with_limit(&self.multiplicand, max_digits)
            .map_err(|source| InvocationError::Operand { name: "multiplicand", source })?;

        let mut mult = Multiplication::new(multiplier, multiplicand);
        mult.set_printing_description(self.context.print_description);
        Ok(mult)
    }
}

/// MIME subtype token: letters, digits and `+ - .`
fn is_valid_output_type(output_type: &str) -> bool {
    !output_type.is_empty()
        && output_type
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}


/// Parse `args` (program name first), answer on `out`, and return
/// the exit status
pub fn run<I, T, W>(args: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let text = err.to_string();
            return match write_header(out, "plain").and_then(|_| out.write_all(text.as_bytes())) {
                Ok(()) => EXIT_SUCCESS,
                Err(io_err) => {
                    tracing::error!(error = %io_err, "could not write help text");
                    EXIT_FAILURE
                }
            };
        }
        Err(err) => {
            let message = err.to_string();
            let message = message.trim_end();
            let message = message.strip_prefix("error: ").unwrap_or(message);
            return fail(out, InvocationError::Usage(message.to_string()));
        }
    };

    match args.into_request().and_then(|request| respond(&request, out)) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => fail(out, err),
    }
}

/// Answer a complete request: header then diagram
pub fn respond<W: Write>(request: &Request, out: &mut W) -> Result<(), InvocationError> {
    let mult = request.multiplication()?;

    if let Some(path) = &request.file {
        store(&mult, path)?;
    }

    write_header(out, &request.output_type)?;
    mult.write_diagram(&mut *out)?;
    out.flush()?;

    tracing::debug!(output_type = %request.output_type, "response written");
    Ok(())
}

/// Write the diagram alone into the file at `path`
pub fn store(mult: &Multiplication, path: &Path) -> Result<(), InvocationError> {
    let to_store_error = |source| InvocationError::Store { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(to_store_error)?;
    let mut writer = BufWriter::new(file);
    mult.write_diagram(&mut writer).map_err(to_store_error)?;
    writer.flush().map_err(to_store_error)?;

    tracing::info!(path = %path.display(), "stored diagram");
    Ok(())
}

fn write_header<W: Write>(out: &mut W, output_type: &str) -> io::Result<()> {
    write!(out, "Content-Type: text/{};charset=UTF-8\n\n", output_type)
}

fn write_diagnostic<W: Write>(out: &mut W, err: &InvocationError) -> io::Result<()> {
    write_header(out, "plain")?;
    writeln!(out, "Error: {}", err)?;
    if let InvocationError::MissingArguments { positions } = err {
        for position in positions {
            writeln!(out, "The argument #{} is missing.", position)?;
        }
    }
    writeln!(out, "Exiting...")?;
    out.flush()
}

fn fail<W: Write>(out: &mut W, err: InvocationError) -> u8 {
    tracing::warn!(error = %err, "invocation failed");
    if let Err(io_err) = write_diagnostic(out, &err) {
        tracing::error!(error = %io_err, "could not write the diagnostic");
    }
    err.exit_code()
}


#[cfg(test)]
mod test {
    use super::*;

    fn invoke(args: &[&str]) -> (u8, String) {
        let mut out = Vec::new();
        let argv = std::iter::once("long-multiplication").chain(args.iter().copied());
        let code = run(argv, &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    const PLAIN_HEADER: &str = "Content-Type: text/plain;charset=UTF-8\n\n";

    #[test]
    fn renders_with_header() {
        let (code, out) = invoke(&["12", "34", "plain", "yes"]);
        assert_eq!(code, EXIT_SUCCESS);

        let mult = Multiplication::from_strs("12", "34").unwrap();
        assert_eq!(out, format!("{}{}", PLAIN_HEADER, mult));
        assert!(out.ends_with("= 408 ---> Final result\n"));
    }

    #[test]
    fn output_type_goes_into_header() {
        let (code, out) = invoke(&["5", "79", "html", "y"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.starts_with("Content-Type: text/html;charset=UTF-8\n\n   79 ---> Multiplicand => a\n"));
    }

    #[test]
    fn no_description() {
        let (code, described) = invoke(&["12", "34", "plain", "yes"]);
        assert_eq!(code, EXIT_SUCCESS);
        let (code, plain) = invoke(&["12", "34", "plain", "no"]);
        assert_eq!(code, EXIT_SUCCESS);

        assert!(!plain.contains("--->"));
        for (d, p) in described.lines().zip(plain.lines()) {
            assert!(d.starts_with(p));
        }
    }

    #[test]
    fn two_missing_arguments() {
        let (code, out) = invoke(&["12", "34"]);
        assert_eq!(code, EXIT_ARGUMENTS);
        assert_eq!(
            out,
            "Content-Type: text/plain;charset=UTF-8\n\
             \n\
             Error: Some arguments are missing.\n\
             The argument #3 is missing.\n\
             The argument #4 is missing.\n\
             Exiting...\n"
        );
    }

    #[test]
    fn no_arguments() {
        let (code, out) = invoke(&[]);
        assert_eq!(code, EXIT_ARGUMENTS);
        for position in 1..=4 {
            assert!(out.contains(&format!("The argument #{} is missing.\n", position)));
        }
        assert!(out.starts_with(PLAIN_HEADER));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn too_many_arguments() {
        let (code, out) = invoke(&["12", "34", "plain", "yes", "surplus"]);
        assert_eq!(code, EXIT_ARGUMENTS);
        assert_eq!(
            out,
            format!("{}Error: Too many arguments supplied.\nExiting...\n", PLAIN_HEADER)
        );
    }

    #[test]
    fn unknown_option() {
        let (code, out) = invoke(&["12", "34", "plain", "yes", "--bogus"]);
        assert_eq!(code, EXIT_ARGUMENTS);
        assert!(out.starts_with(PLAIN_HEADER));
        assert!(out.contains("--bogus"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[test]
    fn invalid_operand() {
        let (code, out) = invoke(&["12a", "34", "plain", "yes"]);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(
            out,
            format!(
                "{}Error: The multiplier is not valid: Invalid digit 'a' at position 2.\nExiting...\n",
                PLAIN_HEADER
            )
        );
    }

    #[test]
    fn negative_operands_are_invalid_digits() {
        let (code, out) = invoke(&["-12", "34", "plain", "yes"]);
        assert_eq!(code, EXIT_FAILURE);
        assert_eq!(
            out,
            format!(
                "{}Error: The multiplier is not valid: Invalid digit '-' at position 0.\nExiting...\n",
                PLAIN_HEADER
            )
        );

        let (code, out) = invoke(&["12", "-3.5", "plain", "yes"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.contains("The multiplicand is not valid: Invalid digit '-' at position 0."));
    }

    #[test]
    fn options_still_follow_a_negative_operand() {
        let (code, out) = invoke(&["-12", "34", "--max-digits", "1", "plain", "yes"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.contains("The multiplier is not valid"));
        assert!(!out.contains("unexpected argument"));
    }

    #[test]
    fn empty_multiplicand() {
        let (code, out) = invoke(&["12", "", "plain", "yes"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.contains("The multiplicand is not valid: Failed to parse empty operand."));
    }

    #[test]
    fn operand_limit() {
        let (code, out) = invoke(&["--max-digits", "2", "123", "4", "plain", "yes"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.contains("Operand has 3 digits, the limit is 2"));

        let (code, _) = invoke(&["--max-digits", "3", "123", "4", "plain", "yes"]);
        assert_eq!(code, EXIT_SUCCESS);
    }

    #[test]
    fn header_injection_is_rejected() {
        let (code, out) = invoke(&["12", "34", "plain\nSet-Cookie: x=1", "yes"]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.starts_with(PLAIN_HEADER));
        assert!(!out.contains("\nSet-Cookie"));
    }

    #[test]
    fn help_is_a_plain_response() {
        let (code, out) = invoke(&["--help"]);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.starts_with(PLAIN_HEADER));
        assert!(out.contains("MULTIPLIER"));
    }

    #[test]
    fn store_in_file() {
        let path = std::env::temp_dir()
            .join(format!("long-multiplication-test-{}.txt", std::process::id()));
        let path_str = path.to_str().unwrap();

        let (code, out) = invoke(&["8642", "13597", "plain", "no", "--file", path_str]);
        assert_eq!(code, EXIT_SUCCESS);

        let stored = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(format!("{}{}", PLAIN_HEADER, stored), out);
        assert!(stored.ends_with("= 117505274\n"));
    }

    #[test]
    fn store_failure() {
        let path = std::env::temp_dir()
            .join("long-multiplication-missing-dir")
            .join("nested")
            .join("diagram.txt");
        let (code, out) = invoke(&["1", "2", "plain", "no", "--file", path.to_str().unwrap()]);
        assert_eq!(code, EXIT_FAILURE);
        assert!(out.starts_with(PLAIN_HEADER));
        assert!(out.contains("Could not store the diagram"));
    }

    #[test]
    fn request_from_args() {
        let args = Args::try_parse_from(["prog", "1", "2", "plain", "No"]).unwrap();
        let request = args.into_request().unwrap();
        assert_eq!(request.multiplier, "1");
        assert_eq!(request.multiplicand, "2");
        assert_eq!(request.output_type, "plain");
        assert!(!request.context.print_description);
        assert_eq!(request.file, None);
    }

    #[test]
    fn exit_codes() {
        let missing = InvocationError::MissingArguments { positions: vec![4] };
        assert_eq!(missing.exit_code(), EXIT_ARGUMENTS);

        let operand = InvocationError::Operand { name: "multiplier", source: ParseOperandError::Empty };
        assert_eq!(operand.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn output_types() {
        assert!(is_valid_output_type("plain"));
        assert!(is_valid_output_type("html"));
        assert!(is_valid_output_type("vnd.example+text"));
        assert!(!is_valid_output_type(""));
        assert!(!is_valid_output_type("plain;charset=latin1"));
        assert!(!is_valid_output_type("a b"));
    }
}
