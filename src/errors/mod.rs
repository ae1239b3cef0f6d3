//! Error types and error handling for the lexer.
//!
//! This module defines the errors that can surface while tokenizing:
//!
//! - I/O failures from the line source (open and read)
//! - Rejected pattern tables when building a custom catalog
//! - Error names and suggestions for reporting

pub mod errors;
