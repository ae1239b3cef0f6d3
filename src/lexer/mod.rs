//! Lexical analysis module.
//!
//! Converts Pascal source, one line at a time, into classified tokens:
//!
//! - `patterns` holds the ordered regex catalog and finds candidate matches
//! - `lexer` resolves overlapping candidates into the final tokens of a line
//! - `source` supplies lines from files or readers
//! - `tokens` defines token kinds, candidates and tokens

pub mod lexer;
pub mod patterns;
pub mod source;
pub mod tokens;
