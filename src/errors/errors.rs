use std::{fmt::Display, io};

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn is_io(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::FileOpen { .. } | ErrorImpl::ReadLine { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::FileOpen { .. } => "FileOpen",
            ErrorImpl::ReadLine { .. } => "ReadLine",
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::MisorderedPattern { .. } => "MisorderedPattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::FileOpen { kind, .. } => match kind {
                io::ErrorKind::NotFound => {
                    ErrorTip::Suggestion(String::from("Check that the file path is correct"))
                }
                io::ErrorKind::PermissionDenied => {
                    ErrorTip::Suggestion(String::from("Check the file permissions"))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::ReadLine { kind, .. } => match kind {
                io::ErrorKind::InvalidData => {
                    ErrorTip::Suggestion(String::from("Source files must be valid UTF-8"))
                }
                _ => ErrorTip::None,
            },
            ErrorImpl::InvalidPattern { kind, .. } => ErrorTip::Suggestion(format!(
                "Fix the regular expression for `{}`",
                kind
            )),
            ErrorImpl::MisorderedPattern { kind, after } => ErrorTip::Suggestion(format!(
                "Rules for `{}` must be declared before rules for `{}`",
                kind, after
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.position.0 == 0 {
            write!(f, "{}: {}", self.position.1, self.internal_error)
        } else {
            write!(
                f,
                "{}:{}: {}",
                self.position.1, self.position.0, self.internal_error
            )
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("cannot open source: {reason}")]
    FileOpen { kind: io::ErrorKind, reason: String },
    #[error("cannot read line: {reason}")]
    ReadLine { kind: io::ErrorKind, reason: String },
    #[error("invalid pattern for {kind}: {reason}")]
    InvalidPattern { kind: TokenKind, reason: String },
    #[error("pattern for {kind} declared after pattern for {after}")]
    MisorderedPattern { kind: TokenKind, after: TokenKind },
}

impl ErrorImpl {
    pub fn file_open(err: &io::Error) -> Self {
        ErrorImpl::FileOpen {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }

    pub fn read_line(err: &io::Error) -> Self {
        ErrorImpl::ReadLine {
            kind: err.kind(),
            reason: err.to_string(),
        }
    }
}
