#![allow(clippy::module_inception)]

use std::{fmt::Write, io, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::tokens::{Token, TokenKind},
};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::{resolve_line, tokenize_file, tokenize_str, Lexer};
pub use lexer::patterns::{PatternCatalog, PatternRule, PASCAL_RULES};

/// Source line (1-based, 0 when not tied to a line) and source name.
#[derive(Debug, Clone)]
pub struct Position(pub usize, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }
}

/// Byte offsets into a line, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_comments: bool,
    pub positions: bool,
}

/// Renders one token per line. Comments are skipped unless asked for.
pub fn render_tokens(tokens: &[Token], options: RenderOptions) -> String {
    let mut out = String::new();

    for token in tokens {
        if token.is_comment() && !options.show_comments {
            continue;
        }

        if options.positions {
            let _ = write!(
                out,
                "{}:{}-{} ",
                token.line, token.span.start, token.span.end
            );
        }

        let _ = writeln!(out, "{}", token);
    }

    out
}

/// Token counts per kind, in priority order. Kinds with no tokens are left out.
pub fn summarize(tokens: &[Token]) -> Vec<(TokenKind, usize)> {
    TokenKind::ALL
        .iter()
        .map(|kind| {
            let count = tokens.iter().filter(|token| token.kind == *kind).count();
            (*kind, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Writes the rendered tokens, and the per-kind counts when `summary` is
/// set, stopping at the first write error.
pub fn write_tokens<W: io::Write>(
    out: &mut W,
    tokens: &[Token],
    options: RenderOptions,
    summary: bool,
) -> io::Result<()> {
    out.write_all(render_tokens(tokens, options).as_bytes())?;

    if summary {
        let mut counts = String::new();
        for (kind, count) in summarize(tokens) {
            let _ = writeln!(counts, "{:>18} {}", kind.to_string(), count);
        }
        out.write_all(counts.as_bytes())?;
    }

    out.flush()
}

pub fn display_error(error: &Error) {
    /*
        Error: ReadLine (Source files must be valid UTF-8)
        -> program.pas:12
           cannot read line: stream did not contain valid UTF-8
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }

    let position = error.get_position();
    if position.0 == 0 {
        eprintln!("-> {}", position.1);
    } else {
        eprintln!("-> {}:{}", position.1, position.0);
    }
    eprintln!("   {}", error.get_impl());
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::{render_tokens, summarize, tokenize_str, write_tokens, RenderOptions};
    use crate::lexer::tokens::TokenKind;

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_skips_comments() {
        let tokens = tokenize_str("x := 1; // counter");
        let rendered = render_tokens(&tokens, RenderOptions::default());

        assert_eq!(
            rendered,
            "Identifier 'x'\nOperator ':='\nNumber '1'\nSeparator ';'\n"
        );
    }

    #[test]
    fn test_render_with_comments_and_positions() {
        let tokens = tokenize_str("end. { done }");
        let rendered = render_tokens(
            &tokens,
            RenderOptions {
                show_comments: true,
                positions: true,
            },
        );

        assert_eq!(
            rendered,
            "1:0-3 ReservedWord 'end'\n1:3-4 Separator '.'\n1:5-13 Comment '{ done }'\n"
        );
    }

    #[test]
    fn test_summarize() {
        let tokens = tokenize_str("a := a + 1;");
        let summary = summarize(&tokens);

        assert_eq!(
            summary,
            vec![
                (TokenKind::Operator, 2),
                (TokenKind::Number, 1),
                (TokenKind::Separator, 1),
                (TokenKind::Identifier, 2),
            ]
        );
    }

    #[test]
    fn test_write_tokens_with_summary() {
        let tokens = tokenize_str("a := a;");
        let mut out: Vec<u8> = vec![];
        write_tokens(&mut out, &tokens, RenderOptions::default(), true).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("Identifier 'a'\nOperator ':='\n"));
        assert!(out.ends_with("Identifier 2\n"));
    }

    #[test]
    fn test_write_tokens_reports_write_failure() {
        let tokens = tokenize_str("x;");
        let err = write_tokens(&mut ClosedPipe, &tokens, RenderOptions::default(), false)
            .unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
