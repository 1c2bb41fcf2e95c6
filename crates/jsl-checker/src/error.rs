//! Hard failures of the checker.
//!
//! Rule violations are diagnostics, not errors. A [`CheckError`] means the
//! syntax tree broke an invariant the parser is expected to guarantee.

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckError {
    /// A `return` statement with no enclosing function.
    ReturnOutsideFunction { file: String, line: u32 },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::ReturnOutsideFunction { file, line } => write!(
                f,
                "{file}:{line}: return statement outside of any function"
            ),
        }
    }
}

impl std::error::Error for CheckError {}
