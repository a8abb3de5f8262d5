use core::fmt::{self, Display};

/// One of the fixed separator characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Separator {
    Dot,
    Hyphen,
    Plus,
    Underscore,
}

impl Separator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Separator::Dot),
            '-' => Some(Separator::Hyphen),
            '+' => Some(Separator::Plus),
            '_' => Some(Separator::Underscore),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// A run of ASCII digits.
    Numeric,

    /// A run of anything that is not a digit or separator. Usually letters, but characters outside
    /// the version alphabet land here too, so tokenizing never fails.
    Alphabetic,

    /// A single separator character.
    Separator(Separator),
}

/// A slice of a version string with its lexical class and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'vs> {
    pub(crate) kind: TokenKind,
    pub(crate) text: &'vs str,
    pub(crate) offset: usize,
}

impl<'vs> Token<'vs> {
    pub(crate) fn is_separator(&self, sep: Separator) -> bool {
        self.kind == TokenKind::Separator(sep)
    }

    /// Byte offset just past this token.
    pub(crate) fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl<'vs> Display for Token<'vs> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

fn classify(c: char) -> TokenKind {
    if c.is_ascii_digit() {
        TokenKind::Numeric
    } else if let Some(sep) = Separator::from_char(c) {
        TokenKind::Separator(sep)
    } else {
        TokenKind::Alphabetic
    }
}

/// Splits a version string into tokens covering all of it, left to right.
///
/// Concatenating the text of the returned tokens gives back `version_str` exactly.
pub(crate) fn tokenize(version_str: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenKind> = None;

    for (idx, c) in version_str.char_indices() {
        let kind = classify(c);
        match current {
            // runs of the same class keep growing. separators never do.
            Some(cur) if cur == kind && !matches!(kind, TokenKind::Separator(_)) => continue,
            Some(cur) => {
                tokens.push(Token {
                    kind: cur,
                    text: &version_str[start..idx],
                    offset: start,
                });
                start = idx;
            }
            None => {}
        }
        current = Some(kind);
    }

    if let Some(cur) = current {
        tokens.push(Token {
            kind: cur,
            text: &version_str[start..],
            offset: start,
        });
    }

    tokens
}
