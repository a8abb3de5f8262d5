use crate::{error::ParseError, maven::MavenVersion, scheme::Scheme, semver::SemanticVersion};
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

/// A parsed version, tagged by the [Scheme] that produced it.
///
/// Versions are totally ordered. Two versions of the same scheme compare by that scheme's rules.
/// Versions of different schemes compare by their scheme alone (see [Scheme]), which keeps
/// [sorting](crate::sort) well-defined for mixed input without pretending the order is meaningful.
///
/// Equality is defined by the ordering: `a == b` exactly when `a.cmp(&b)` is `Equal`, so
/// `1.2.3+a == 1.2.3+b` and `1.0 == 1.0.0` (as Maven versions).
///
/// The canonical string only round-trips when parsed with the same scheme. A Maven version can print
/// as valid SemVer (`1.2.3.0` prints `1.2.3`), which auto-detection then reads as a different,
/// unequal [`Version::Semantic`].
///
/// # Examples
///
/// ```
/// use smartver::{Scheme, Version};
///
/// // auto-detected: strict semantic version first, Maven otherwise
/// let semantic: Version = "1.0.0-rc.1".parse().unwrap();
/// assert_eq!(Scheme::Semantic, semantic.scheme());
///
/// let maven: Version = "1.0-SNAPSHOT".parse().unwrap();
/// assert_eq!(Scheme::Maven, maven.scheme());
///
/// // or ask for a scheme
/// let a = Version::parse("1.0", Some(Scheme::Maven)).unwrap();
/// let b = Version::parse("1.0.0", Some(Scheme::Maven)).unwrap();
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub enum Version {
    /// A semantic version.
    Semantic(SemanticVersion),

    /// A Maven version.
    Maven(MavenVersion),
}

impl Version {
    /// Parses a version string.
    ///
    /// With `Some(scheme)`, only that scheme's parser runs. With `None`, the strict semantic
    /// version grammar is tried first, and the permissive Maven parser is used when it fails. A
    /// string valid under both is therefore a [`Version::Semantic`].
    ///
    /// # Errors
    ///
    /// Only when `scheme` is `Some(Scheme::Semantic)`: [`ParseError::EmptyInput`] or
    /// [`ParseError::InvalidFormat`].
    pub fn parse(version_str: &str, scheme: Option<Scheme>) -> Result<Self, ParseError> {
        match scheme {
            Some(Scheme::Semantic) => SemanticVersion::parse(version_str).map(Version::Semantic),
            Some(Scheme::Maven) => Ok(Version::Maven(MavenVersion::parse(version_str))),
            None => Ok(SemanticVersion::parse(version_str)
                .map(Version::Semantic)
                .unwrap_or_else(|err| {
                    log::trace!("falling back to maven for `{version_str}`: {err}");
                    Version::Maven(MavenVersion::parse(version_str))
                })),
        }
    }

    /// The scheme that produced this version.
    pub fn scheme(&self) -> Scheme {
        match self {
            Version::Semantic(_) => Scheme::Semantic,
            Version::Maven(_) => Scheme::Maven,
        }
    }

    /// Returns the semantic version, if this is one.
    pub fn as_semantic(&self) -> Option<&SemanticVersion> {
        match self {
            Version::Semantic(version) => Some(version),
            Version::Maven(_) => None,
        }
    }

    /// Returns the Maven version, if this is one.
    pub fn as_maven(&self) -> Option<&MavenVersion> {
        match self {
            Version::Semantic(_) => None,
            Version::Maven(version) => Some(version),
        }
    }
}

impl From<SemanticVersion> for Version {
    fn from(version: SemanticVersion) -> Self {
        Version::Semantic(version)
    }
}

impl From<MavenVersion> for Version {
    fn from(version: MavenVersion) -> Self {
        Version::Maven(version)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    /// Parses with scheme auto-detection. This never fails, since the Maven parser accepts
    /// anything.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None)
    }
}

impl Display for Version {
    /// Writes the canonical form. Parsing it with `Some(self.scheme())` gives back an equal
    /// version; parsing it with `None` may pick the other scheme.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Semantic(version) => write!(f, "{version}"),
            Version::Maven(version) => write!(f, "{version}"),
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Version::Semantic(a), Version::Semantic(b)) => a.cmp(b),
            (Version::Maven(a), Version::Maven(b)) => a.cmp(b),
            // different conventions: fixed, meaningless order by scheme
            _ => self.scheme().cmp(&other.scheme()),
        }
    }
}
