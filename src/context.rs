// \file src/context.rs

//! A `Context` object is the set of parameters that shape a rendered
//! diagram and bound the operands accepted for it.

use crate::DEFAULT_MAX_OPERAND_DIGITS;

/// Options for building and printing a multiplication
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// Append the explanatory labels (" ---> ...") to the rows
    pub print_description: bool,

    /// The maximum number of digits accepted in either operand
    pub max_operand_digits: u64,
}

impl Default for Context {
    fn default() -> Context {
        Context {
            print_description: true,
            max_operand_digits: DEFAULT_MAX_OPERAND_DIGITS,
        }
    }
}

impl Context {
    /// Default context, with descriptions controlled by `flag`
    pub fn from_description_flag(flag: &str) -> Context {
        Context::default().with_description_flag(flag)
    }

    pub fn with_print_description(mut self, print: bool) -> Context {
        self.print_description = print;
        self
    }

    /// Disable descriptions if `flag` starts with 'n' or 'N'
    ///
    /// Any other flag leaves the setting unchanged.
    ///
    pub fn with_description_flag(mut self, flag: &str) -> Context {
        if is_description_disabled(flag) {
            self.print_description = false;
        }
        self
    }

    pub fn with_max_operand_digits(mut self, max_digits: u64) -> Context {
        self.max_operand_digits = max_digits;
        self
    }
}

/// True if the first character of `flag` is 'n' or 'N'
pub(crate) fn is_description_disabled(flag: &str) -> bool {
    matches!(flag.chars().next(), Some('n') | Some('N'))
}
