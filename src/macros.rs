//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance from a resolved candidate
//! - `MK_RULE!` - Creates a PatternRule entry for a catalog table

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$candidate` - The winning Candidate
/// * `$text` - The line the candidate was found in
/// * `$line` - The 1-based line number
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(candidate, "var x;", 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($candidate:expr, $text:expr, $line:expr) => {
        Token {
            kind: $candidate.kind,
            value: String::from(&$text[$candidate.span.start..$candidate.span.end]),
            line: $line,
            span: $candidate.span,
        }
    };
}

/// Creates a PatternRule for a catalog table.
///
/// # Example
///
/// ```ignore
/// const RULES: &[PatternRule] = &[MK_RULE!(TokenKind::Separator, "[;,]")];
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($kind:expr, $pattern:expr) => {
        PatternRule {
            kind: $kind,
            pattern: $pattern,
        }
    };
}
