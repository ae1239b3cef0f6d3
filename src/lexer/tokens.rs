use std::fmt::Display;

use crate::Span;

/// Category of a lexeme.
///
/// Declaration order is the catalog priority: when two candidates start and
/// end at the same offsets, the one whose kind is declared first wins. The
/// derived `Ord` follows declaration order, so `a < b` means `a` outranks `b`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum TokenKind {
    CompilerDirective,
    Comment,
    ReservedWord,
    Operator,
    Number,
    StringOrCharacter,
    Separator,
    Identifier,
    Invalid,
}

impl TokenKind {
    pub const ALL: [TokenKind; 9] = [
        TokenKind::CompilerDirective,
        TokenKind::Comment,
        TokenKind::ReservedWord,
        TokenKind::Operator,
        TokenKind::Number,
        TokenKind::StringOrCharacter,
        TokenKind::Separator,
        TokenKind::Identifier,
        TokenKind::Invalid,
    ];

    /// Tie-break rank, 0 is the highest priority.
    pub fn priority(&self) -> u8 {
        *self as u8
    }

    /// Returns true if `self` wins a tie against `other`.
    pub fn outranks(&self, other: &TokenKind) -> bool {
        self.priority() < other.priority()
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A raw match found by one pattern, before conflict resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub kind: TokenKind,
    pub span: Span,
}

impl Candidate {
    pub fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Candidate {
            kind,
            span: Span { start, end },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    /// 1-based source line.
    pub line: usize,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}'", self.kind, self.value)
    }
}

impl Token {
    pub fn is_comment(&self) -> bool {
        self.kind == TokenKind::Comment
    }

    pub fn len(&self) -> usize {
        self.span.end - self.span.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
