use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_RULE};

use super::tokens::{Candidate, TokenKind};

/// Static configuration for one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternRule {
    pub kind: TokenKind,
    pub pattern: &'static str,
}

const DIRECTIVE_PATTERN: &str = concat!(
    r"(?i)\{\$(?:",
    "IMPLICITEXCEPTIONS|SAFEFPUEXCEPTIONS|WEAKPACKAGEUNIT|VARSTRINGCHECKS|MAXFPUREGISTERS|",
    "EXTENDEDSYNTAX|PASCALMAINNAME|OVERFLOWCHECKS|MINFPCONSTPREC|WRITEABLECONST|",
    "VARPROPSETTER|FRAMEWORKPATH|REFERENCEINFO|TYPEDADDRESS|LINKFRAMEWORK|MINSTACKSIZE|",
    "MAXSTACKSIZE|LOCALSYMBOLS|STRINGCHECKS|OPTIMIZATION|OBJECTCHECKS|CHECKPOINTER|",
    "POINTERMATH|OPENSTRINGS|LIBRARYPATH|INCLUDEPATH|DESCRIPTION|SCOPEDENUMS|RANGECHECKS|",
    "PACKRECORDS|MINENUMSIZE|LONGSTRINGS|EXTERNALSYM|EXTENDEDSYM|STACKFRAMES|",
    "THREADNAME|SETPEFLAGS|SCREENNAME|OBJECTPATH|MODESWITCH|SATURATION|IEEEERRORS|",
    "INTERFACES|COPERATORS|BITPACKING|ASSERTIONS|SMARTLINK|LIBSUFFIX|LIBPREFIX|IMAGEBASE|",
    "EXTENSION|DEBUGINFO|COPYRIGHT|LIBEXPORT|ENDREGION|CODEALIGN|UNITPATH|SYSCALLS|",
    "CODEPAGE|WARNINGS|RESOURCE|PACKENUM|NODEFINE|TYPEINFO|BOOLEVAL|IOCHECKS|VERSION|",
    "PROFILE|APPTYPE|APPNAME|WARNING|MESSAGE|LINKLIB|INCLUDE|HPPEMIT|FPUTYPE|DEFINEC|",
    "CALLING|ASMMODE|PACKSET|MEMORY|UNDEFC|REGION|INLINE|ERRORC|ELSEIF|DEFINE|IFNDEF|",
    "APPID|UNDEF|NOTES|MACRO|IFOPT|IFDEF|HINTS|FATAL|ERROR|ENDIF|ELIFC|ELSEC|ALIGN|",
    "MODE|WARN|WAIT|STOP|SETC|PUSH|NOTE|LINK|INFO|HINT|GOTO|ENDC|ELSE|IFC|PIC|POP|MMX|",
    "IF|Z4|Z2|Z1|OV|A8|A4|A2|A1|[A-JL-TV-Z]",
    r")(?:[+-]|\s[^}]*)?\}",
);

// Longer words come first: alternation is leftmost-first, so a keyword that
// is a prefix of another must follow it.
const RESERVED_PATTERN: &str = concat!(
    "(?i)(?:",
    "implementation|resourcestring|initialization|",
    "unimplemented|saveregisters|dispinterface|",
    "nostackframe|experimental|finalization|",
    "constructor|reintroduce|",
    "destructor|specialize|oldfpccall|implements|enumerator|deprecated|",
    "unaligned|softfloat|published|protected|otherwise|nodefault|interrupt|bitpacked|",
    "assembler|threadvar|procedure|interface|inherited|",
    "continue|function|absolute|safecall|register|platform|override|overload|noreturn|",
    "external|abstract|property|operator|",
    "forward|boolean|virtual|varargs|stdcall|private|message|iocheck|generic|dynamic|",
    "default|cppdecl|library|finally|exports|program|integer|writeln|",
    "downto|readln|winapi|strict|stored|static|result|public|pascal|helper|export|",
    "packed|inline|except|string|repeat|record|object|",
    "alias|const|begin|array|write|local|index|far16|cdecl|break|raise|class|while|",
    "until|label|",
    "goto|file|case|char|real|read|near|name|cvar|with|uses|unit|type|then|self|else|",
    "for|end|div|asm|and|far|try|out|xor|var|shr|shl|set|not|nil|mod|",
    "is|to|if|as|of|do|in|on|or",
    ")",
);

/// The built-in Pascal rule table, in priority order.
pub const PASCAL_RULES: &[PatternRule] = &[
    MK_RULE!(TokenKind::CompilerDirective, DIRECTIVE_PATTERN),
    MK_RULE!(TokenKind::Comment, r"\{(?:[^$}][^}]*)?\}"),
    MK_RULE!(TokenKind::Comment, r"\(\*.*?\*\)"),
    MK_RULE!(TokenKind::Comment, r"//.*"),
    MK_RULE!(TokenKind::ReservedWord, RESERVED_PATTERN),
    MK_RULE!(TokenKind::Operator, r":=|<=|>=|<>|><|\*\*|\+=|-=|\*=|/=|\.\.|[-+*/=<>\[\]^@$#&%]"),
    MK_RULE!(TokenKind::Number, r"\$[0-9A-Fa-f]+|&[0-7]+|%[01]+|\d+(?:\.\d+)?(?:[eE][-+]?\d+)?"),
    MK_RULE!(TokenKind::StringOrCharacter, r"(?:'(?:[^']|'')*'|#\$[0-9A-Fa-f]+|#\d+)+"),
    MK_RULE!(TokenKind::Separator, r"[{}(),;:.]"),
    MK_RULE!(TokenKind::Identifier, r"[A-Za-z_][A-Za-z0-9_]*"),
    MK_RULE!(TokenKind::Invalid, r#"["~`]+|\S"#),
];

lazy_static! {
    pub static ref PASCAL_CATALOG: PatternCatalog =
        PatternCatalog::new(PASCAL_RULES).expect("built-in Pascal patterns are valid");
}

#[derive(Debug, Clone)]
pub struct PatternDefinition {
    regex: Regex,
    kind: TokenKind,
}

impl PatternDefinition {
    pub fn new(kind: TokenKind, pattern: &str) -> Result<PatternDefinition, Error> {
        let regex = Regex::new(pattern).map_err(|err| {
            Error::new(
                ErrorImpl::InvalidPattern {
                    kind,
                    reason: err.to_string(),
                },
                catalog_position(),
            )
        })?;

        Ok(PatternDefinition { regex, kind })
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Every non-empty match of this rule in `line`, left to right.
    ///
    /// The search restarts one character after each match's start, so a
    /// match beginning inside an earlier one is still reported.
    pub fn find_matches<'a>(&'a self, line: &'a str) -> impl Iterator<Item = Candidate> + 'a {
        let mut pos = 0;

        std::iter::from_fn(move || {
            while pos <= line.len() {
                let found = self.regex.find_at(line, pos)?;
                pos = found.start()
                    + line[found.start()..]
                        .chars()
                        .next()
                        .map_or(1, |ch| ch.len_utf8());

                if !found.is_empty() {
                    return Some(Candidate::new(self.kind, found.start(), found.end()));
                }
            }

            None
        })
    }
}

/// Ordered, immutable set of pattern definitions.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    definitions: Vec<PatternDefinition>,
}

impl PatternCatalog {
    /// Compiles `rules` in order. Rules must be listed in priority order of
    /// their kinds; several rules may share a kind.
    pub fn new(rules: &[PatternRule]) -> Result<PatternCatalog, Error> {
        let mut definitions: Vec<PatternDefinition> = Vec::with_capacity(rules.len());

        for rule in rules {
            if let Some(previous) = definitions.last() {
                if rule.kind.outranks(&previous.kind) {
                    return Err(Error::new(
                        ErrorImpl::MisorderedPattern {
                            kind: rule.kind,
                            after: previous.kind,
                        },
                        catalog_position(),
                    ));
                }
            }

            definitions.push(PatternDefinition::new(rule.kind, rule.pattern)?);
        }

        log::debug!("built pattern catalog with {} definitions", definitions.len());
        Ok(PatternCatalog { definitions })
    }

    pub fn pascal() -> &'static PatternCatalog {
        &PASCAL_CATALOG
    }

    pub fn definitions(&self) -> &[PatternDefinition] {
        &self.definitions
    }

    /// All candidates of every definition, concatenated in catalog order.
    pub fn find_candidates(&self, line: &str) -> Vec<Candidate> {
        self.definitions
            .iter()
            .flat_map(|definition| definition.find_matches(line))
            .collect()
    }
}

fn catalog_position() -> Position {
    Position(0, Rc::new(String::from("<catalog>")))
}
