use std::{collections::BTreeMap, path::Path};

use crate::{errors::errors::Error, MK_TOKEN};

use super::{
    patterns::PatternCatalog,
    source::{LineSource, ReaderSource},
    tokens::{Candidate, Token, TokenKind},
};

/// Picks the winning candidate of every start offset and returns the
/// resulting tokens for one line.
///
/// Candidates are grouped by start offset and groups are visited in ascending
/// order. Inside a group the longest candidate wins, and equal lengths fall
/// back to catalog priority. A candidate is dropped when it would start
/// inside text an earlier token already claimed, so the output never
/// overlaps and is ordered by start offset.
pub fn resolve_line(line: &str, line_number: usize, candidates: Vec<Candidate>) -> Vec<Token> {
    let mut by_start: BTreeMap<usize, Vec<Candidate>> = BTreeMap::new();
    for candidate in candidates {
        by_start.entry(candidate.span.start).or_default().push(candidate);
    }

    let mut tokens = vec![];
    let mut last_end: Option<usize> = None;

    for (start, group) in by_start {
        let mut winner: Option<Candidate> = None;

        for candidate in group {
            if let Some(end) = last_end {
                if candidate.span.end <= end || candidate.span.start < end {
                    log::trace!(
                        "line {}: suppressed {} at {}..{}",
                        line_number,
                        candidate.kind,
                        candidate.span.start,
                        candidate.span.end
                    );
                    continue;
                }
            }

            let better = match &winner {
                None => true,
                Some(current) => {
                    candidate.span.end > current.span.end
                        || (candidate.span.end == current.span.end
                            && candidate.kind.outranks(&current.kind))
                }
            };

            if better {
                winner = Some(candidate);
            }
        }

        if let Some(candidate) = winner {
            let token = MK_TOKEN!(candidate, line, line_number);
            if token.kind == TokenKind::Invalid {
                log::warn!(
                    "line {}: invalid fragment '{}' at column {}",
                    line_number,
                    token.value,
                    start + 1
                );
            }

            last_end = Some(candidate.span.end);
            tokens.push(token);
        }
    }

    tokens
}

/// Drives a pattern catalog over lines of input.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'c> {
    catalog: &'c PatternCatalog,
}

impl Default for Lexer<'static> {
    fn default() -> Self {
        Lexer::new(PatternCatalog::pascal())
    }
}

impl<'c> Lexer<'c> {
    pub fn new(catalog: &'c PatternCatalog) -> Lexer<'c> {
        Lexer { catalog }
    }

    /// Tokenizes a single line. Lines are independent of each other.
    pub fn tokenize_line(&self, line: &str, line_number: usize) -> Vec<Token> {
        let candidates = self.catalog.find_candidates(line);
        let candidate_count = candidates.len();
        let tokens = resolve_line(line, line_number, candidates);

        log::debug!(
            "line {}: {} candidates resolved into {} tokens",
            line_number,
            candidate_count,
            tokens.len()
        );

        tokens
    }

    /// Lazily tokenizes `source`, one item per line.
    pub fn lines<S: LineSource>(&self, source: S) -> LineTokens<'c, S> {
        LineTokens {
            lexer: *self,
            source,
            failed: false,
        }
    }

    /// Tokenizes every line of `source`.
    ///
    /// On an I/O failure the tokens of the lines read so far are returned
    /// together with the error.
    pub fn tokenize<S: LineSource>(&self, source: S) -> (Vec<Token>, Option<Error>) {
        let mut tokens = vec![];

        for line in self.lines(source) {
            match line {
                Ok(line_tokens) => tokens.extend(line_tokens),
                Err(err) => return (tokens, Some(err)),
            }
        }

        (tokens, None)
    }
}

/// Iterator over the tokens of each line. Stops after the first error.
#[derive(Debug)]
pub struct LineTokens<'c, S> {
    lexer: Lexer<'c>,
    source: S,
    failed: bool,
}

impl<S: LineSource> Iterator for LineTokens<'_, S> {
    type Item = Result<Vec<Token>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.source.next_line() {
            Ok(Some(line)) => {
                let line_number = self.source.line_number();
                Some(Ok(self.lexer.tokenize_line(&line, line_number)))
            }
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Tokenizes in-memory text with the built-in Pascal catalog.
pub fn tokenize_str(source: &str) -> Vec<Token> {
    let lexer = Lexer::default();

    source
        .lines()
        .enumerate()
        .flat_map(|(index, line)| lexer.tokenize_line(line, index + 1))
        .collect()
}

/// Tokenizes a file with the built-in Pascal catalog.
pub fn tokenize_file<P: AsRef<Path>>(path: P) -> Result<Vec<Token>, Error> {
    let source = ReaderSource::open(path)?;

    match Lexer::default().tokenize(source) {
        (tokens, None) => Ok(tokens),
        (_, Some(err)) => Err(err),
    }
}
