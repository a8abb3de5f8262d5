use crate::error::{ParseError, Violation};
use crate::token::{tokenize, Separator, Token, TokenKind};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// A dot-separated pre-release identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    /// All digits, no leading zero. Compared numerically.
    Numeric(u64),

    /// Contains at least one letter or hyphen. Compared by bytes (ASCII order).
    AlphaNumeric(String),
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{n}"),
            Identifier::AlphaNumeric(s) => f.write_str(s),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        use Identifier::*;
        match (self, other) {
            (Numeric(a), Numeric(b)) => a.cmp(b),
            (Numeric(_), AlphaNumeric(_)) => Ordering::Less,
            (AlphaNumeric(_), Numeric(_)) => Ordering::Greater,
            (AlphaNumeric(a), AlphaNumeric(b)) => a.as_bytes().cmp(b.as_bytes()),
        }
    }
}

/// A version in the strict `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` grammar of
/// [Semantic Versioning 2.0.0](https://semver.org/).
///
/// Build metadata is kept for display, but it never takes part in comparisons, so
/// `1.2.3+a == 1.2.3+b`.
///
/// ```
/// use smartver::SemanticVersion;
///
/// let rc: SemanticVersion = "1.0.0-rc.1".parse().unwrap();
/// let release: SemanticVersion = "1.0.0+build.7".parse().unwrap();
/// assert!(rc < release);
/// assert_eq!("1.0.0+build.7", release.to_string());
/// ```
#[derive(Debug, Clone)]
pub struct SemanticVersion {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<Identifier>,
    build: Vec<String>,
}

impl SemanticVersion {
    /// Parses a version string with the strict semantic version grammar.
    ///
    /// # Errors
    ///
    /// - [`ParseError::EmptyInput`] if `version_str` is empty.
    /// - [`ParseError::InvalidFormat`] for anything that is not exactly semantic version syntax:
    ///   missing or extra core components, leading zeros in numeric values, empty identifiers,
    ///   characters outside `[0-9A-Za-z-]`, or numbers that do not fit in a `u64`.
    pub fn parse(version_str: &str) -> Result<Self, ParseError> {
        if version_str.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let tokens = tokenize(version_str);
        Parser::new(version_str, &tokens).parse()
    }

    /// The major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch component.
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The pre-release identifiers. Empty for a release.
    pub fn pre_release(&self) -> &[Identifier] {
        &self.pre
    }

    /// The build metadata identifiers, verbatim.
    pub fn build(&self) -> &[String] {
        &self.build
    }

    /// Returns true if this version has pre-release identifiers.
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }
}

struct Parser<'vs, 't> {
    version_str: &'vs str,
    tokens: &'t [Token<'vs>],
    pos: usize,
}

impl<'vs, 't> Parser<'vs, 't> {
    fn new(version_str: &'vs str, tokens: &'t [Token<'vs>]) -> Self {
        Self {
            version_str,
            tokens,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'t Token<'vs>> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'t Token<'vs>> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Builds an error pointing at `token`, or at the end of the input when there is none.
    fn error(&self, token: Option<&Token<'vs>>, violation: Violation) -> ParseError {
        let (position, fragment) = match token {
            Some(token) => (token.offset, token.text.to_owned()),
            None => (self.version_str.len(), String::new()),
        };
        ParseError::InvalidFormat {
            version: self.version_str.to_owned(),
            position,
            fragment,
            violation,
        }
    }

    fn parse(mut self) -> Result<SemanticVersion, ParseError> {
        let major = self.core_number()?;
        self.core_dot()?;
        let minor = self.core_number()?;
        self.core_dot()?;
        let patch = self.core_number()?;

        let mut pre = Vec::new();
        let mut build = Vec::new();

        match self.bump() {
            None => {}
            Some(token) if token.is_separator(Separator::Hyphen) => {
                pre = self
                    .identifiers(true)?
                    .into_iter()
                    .map(|ident| self.pre_release_identifier(ident))
                    .collect::<Result<_, _>>()?;
                if self.bump().is_some() {
                    // identifiers(true) only stops early at a plus
                    build = self.build_identifiers()?;
                }
            }
            Some(token) if token.is_separator(Separator::Plus) => {
                build = self.build_identifiers()?;
            }
            Some(token) if token.is_separator(Separator::Dot) => {
                return Err(self.error(Some(token), Violation::ExtraComponent));
            }
            Some(token) => return Err(self.error(Some(token), Violation::InvalidCharacter)),
        }

        Ok(SemanticVersion {
            major,
            minor,
            patch,
            pre,
            build,
        })
    }

    fn core_number(&mut self) -> Result<u64, ParseError> {
        match self.bump() {
            Some(token) if token.kind == TokenKind::Numeric => self.number(token),
            Some(token) if matches!(token.kind, TokenKind::Separator(_)) => {
                Err(self.error(Some(token), Violation::UnexpectedSeparator))
            }
            Some(token) => Err(self.error(Some(token), Violation::InvalidCharacter)),
            None => Err(self.error(None, Violation::MissingComponent)),
        }
    }

    fn core_dot(&mut self) -> Result<(), ParseError> {
        match self.bump() {
            Some(token) if token.is_separator(Separator::Dot) => Ok(()),
            Some(token) if token.kind == TokenKind::Alphabetic => {
                Err(self.error(Some(token), Violation::InvalidCharacter))
            }
            Some(token) => Err(self.error(Some(token), Violation::UnexpectedSeparator)),
            None => Err(self.error(None, Violation::MissingComponent)),
        }
    }

    fn number(&self, token: &Token<'vs>) -> Result<u64, ParseError> {
        if token.text.len() > 1 && token.text.starts_with('0') {
            return Err(self.error(Some(token), Violation::LeadingZero));
        }
        token
            .text
            .parse()
            .map_err(|_| self.error(Some(token), Violation::NumericOverflow))
    }

    /// Collects dot-separated identifiers as token slices. When `stop_at_plus` is true, a `+` ends
    /// the list and is left unconsumed; otherwise it is an invalid character.
    fn identifiers(&mut self, stop_at_plus: bool) -> Result<Vec<&'t [Token<'vs>]>, ParseError> {
        let mut identifiers = Vec::new();

        loop {
            let start = self.pos;
            while let Some(token) = self.peek() {
                match token.kind {
                    TokenKind::Numeric | TokenKind::Separator(Separator::Hyphen) => {}
                    TokenKind::Alphabetic => {
                        if !token.text.chars().all(|c| c.is_ascii_alphabetic()) {
                            return Err(self.error(Some(token), Violation::InvalidCharacter));
                        }
                    }
                    TokenKind::Separator(Separator::Dot) | TokenKind::Separator(Separator::Plus) => {
                        break
                    }
                    TokenKind::Separator(Separator::Underscore) => {
                        return Err(self.error(Some(token), Violation::InvalidCharacter));
                    }
                }
                self.pos += 1;
            }

            let identifier = &self.tokens[start..self.pos];
            if identifier.is_empty() {
                return Err(self.error(self.peek(), Violation::EmptyIdentifier));
            }
            identifiers.push(identifier);

            match self.peek() {
                Some(token) if token.is_separator(Separator::Dot) => self.pos += 1,
                Some(token) if token.is_separator(Separator::Plus) => {
                    if stop_at_plus {
                        break;
                    }
                    return Err(self.error(Some(token), Violation::InvalidCharacter));
                }
                _ => break,
            }
        }

        Ok(identifiers)
    }

    fn text_of(&self, identifier: &[Token<'vs>]) -> &'vs str {
        match (identifier.first(), identifier.last()) {
            (Some(first), Some(last)) => &self.version_str[first.offset..last.end()],
            _ => "",
        }
    }

    fn pre_release_identifier(&self, identifier: &[Token<'vs>]) -> Result<Identifier, ParseError> {
        match identifier {
            [token] if token.kind == TokenKind::Numeric => self.number(token).map(Identifier::Numeric),
            _ => Ok(Identifier::AlphaNumeric(self.text_of(identifier).to_owned())),
        }
    }

    fn build_identifiers(&mut self) -> Result<Vec<String>, ParseError> {
        Ok(self
            .identifiers(false)?
            .into_iter()
            .map(|ident| self.text_of(ident).to_owned())
            .collect())
    }
}

impl FromStr for SemanticVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (idx, ident) in self.pre.iter().enumerate() {
            f.write_str(if idx == 0 { "-" } else { "." })?;
            write!(f, "{ident}")?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

impl PartialEq for SemanticVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemanticVersion {}

impl PartialOrd for SemanticVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SemanticVersion {
    /// Semantic version precedence. Build metadata is ignored.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                // a release outranks any of its pre-releases
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(version_str: &str) -> SemanticVersion {
        SemanticVersion::parse(version_str).unwrap()
    }

    fn violation(version_str: &str) -> Option<Violation> {
        match SemanticVersion::parse(version_str) {
            Err(ParseError::InvalidFormat { violation, .. }) => Some(violation),
            _ => None,
        }
    }

    #[test]
    fn test_parts() {
        let version = parse("1.22.333-alpha.7.x-y+build.007");
        assert_eq!(1, version.major());
        assert_eq!(22, version.minor());
        assert_eq!(333, version.patch());
        assert_eq!(
            &[
                Identifier::AlphaNumeric("alpha".to_owned()),
                Identifier::Numeric(7),
                Identifier::AlphaNumeric("x-y".to_owned()),
            ],
            version.pre_release()
        );
        assert_eq!(&["build".to_owned(), "007".to_owned()], version.build());
        assert!(version.is_prerelease());
    }

    #[rstest]
    #[case("0.0.0")]
    #[case("1.2.3")]
    #[case("10.20.30")]
    #[case("1.0.0-alpha")]
    #[case("1.0.0-0.3.7")]
    #[case("1.0.0-x.7.z.92")]
    #[case("1.0.0-x-y-z.--")]
    #[case("1.0.0-alpha+001")]
    #[case("1.0.0+20130313144700")]
    #[case("1.0.0-beta+exp.sha.5114f85")]
    #[case("1.0.0+21AF26D3----117B344092BD")]
    #[case("1.0.0-rc.1+build.1")]
    #[case("18446744073709551615.0.0")]
    fn test_valid(#[case] version_str: &str) {
        let version = SemanticVersion::parse(version_str);
        assert!(version.is_ok(), "{version_str}: {version:?}");
        assert_eq!(version_str, version.unwrap().to_string());
    }

    #[rstest]
    #[case("1", Violation::MissingComponent)]
    #[case("1.0", Violation::MissingComponent)]
    #[case("1.0.", Violation::MissingComponent)]
    #[case("1.2.3.4", Violation::ExtraComponent)]
    #[case("01.0.0", Violation::LeadingZero)]
    #[case("1.02.0", Violation::LeadingZero)]
    #[case("1.0.00", Violation::LeadingZero)]
    #[case("1.0.0-01", Violation::LeadingZero)]
    #[case("1.0.0-", Violation::EmptyIdentifier)]
    #[case("1.0.0-a..b", Violation::EmptyIdentifier)]
    #[case("1.0.0+", Violation::EmptyIdentifier)]
    #[case("1.0.0-a.", Violation::EmptyIdentifier)]
    #[case("1.0.0-+b", Violation::EmptyIdentifier)]
    #[case("1.0.0-a_b", Violation::InvalidCharacter)]
    #[case("1.0.0+a+b", Violation::InvalidCharacter)]
    #[case("1.0.0-ä", Violation::InvalidCharacter)]
    #[case("1.0.0a", Violation::InvalidCharacter)]
    #[case("v1.0.0", Violation::InvalidCharacter)]
    #[case("1x.0.0", Violation::InvalidCharacter)]
    #[case(".1.0.0", Violation::UnexpectedSeparator)]
    #[case("1-0.0", Violation::UnexpectedSeparator)]
    #[case("18446744073709551616.0.0", Violation::NumericOverflow)]
    #[case("1.0.0-18446744073709551616", Violation::NumericOverflow)]
    fn test_invalid(#[case] version_str: &str, #[case] expected: Violation) {
        assert_eq!(Some(expected), violation(version_str), "{version_str}");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Err(ParseError::EmptyInput), SemanticVersion::parse(""));
    }

    #[test]
    fn test_error_position() {
        let err = SemanticVersion::parse("1.0.0-alpha..1").unwrap_err();
        assert_eq!(
            ParseError::InvalidFormat {
                version: "1.0.0-alpha..1".to_owned(),
                position: 12,
                fragment: ".".to_owned(),
                violation: Violation::EmptyIdentifier,
            },
            err
        );

        let err = SemanticVersion::parse("1.0").unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidFormat { position: 3, ref fragment, .. } if fragment.is_empty()
        ));
    }

    #[test]
    fn test_precedence_chain() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
            "1.0.1",
            "1.1.0",
            "2.0.0",
        ]
        .map(parse);

        for (idx, low) in chain.iter().enumerate() {
            for high in &chain[idx + 1..] {
                assert!(low < high, "expected {low} < {high}");
                assert!(high > low, "expected {high} > {low}");
            }
        }
    }

    #[rstest]
    #[case("1.2.3", "1.5.1", Ordering::Less)]
    #[case("2.2.3", "1.5.1", Ordering::Greater)]
    #[case("3.2.0-beta", "3.2.0-beta", Ordering::Equal)]
    #[case("4.2.0", "4.2.0-beta", Ordering::Greater)]
    #[case("4.2.0-beta.2", "4.2.0-beta.1", Ordering::Greater)]
    #[case("4.2.0-beta2", "4.2.0-beta1", Ordering::Greater)]
    #[case("4.2.0-beta", "4.2.0-beta.foo", Ordering::Less)]
    #[case("1.0.0-beta.-2", "1.0.0-beta.-3", Ordering::Less)]
    #[case("1.0.0-beta.4", "1.0.0-beta.-2", Ordering::Less)]
    #[case("1.0.0-Beta", "1.0.0-beta", Ordering::Less)]
    #[case("1.0.0-10", "1.0.0-9", Ordering::Greater)]
    #[case("1.2.0+bar", "1.2.0+baz", Ordering::Equal)]
    fn test_compare(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(expected, parse(a).cmp(&parse(b)));
        assert_eq!(expected.reverse(), parse(b).cmp(&parse(a)));
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(parse("1.2.3+build1"), parse("1.2.3+build2"));
        assert_eq!(parse("1.2.3-rc.1+a"), parse("1.2.3-rc.1"));
    }
}
