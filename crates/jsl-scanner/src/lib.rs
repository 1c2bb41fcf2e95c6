//! Scanner/tokenizer for the jsl checker.
//!
//! This crate provides the lexical analysis phase:
//! - `SyntaxKind` - Token types
//! - `ScannerState` - Tokenizer state machine
//! - `char_codes` - Character classification utilities

pub mod char_codes;

mod syntax_kind;
pub use syntax_kind::SyntaxKind;

mod scanner;
pub use scanner::ScannerState;
