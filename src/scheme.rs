use crate::{error::ParseError, version::Version};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

/// A versioning convention.
///
/// The declaration order is also the fallback order used when versions of different schemes are
/// compared: every [`Scheme::Semantic`] version sorts before every [`Scheme::Maven`] version. That
/// order only keeps sorting total. It says nothing about which release is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    /// [Semantic Versioning 2.0.0](https://semver.org/). Strict: parsing can fail.
    Semantic,

    /// Maven's version order. Permissive: parsing never fails.
    Maven,
}

impl Scheme {
    /// All implemented schemes, in auto-detection order.
    pub const ALL: [Scheme; 2] = [Scheme::Semantic, Scheme::Maven];

    /// Returns the name of the scheme, as accepted by [`Scheme::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Scheme::Semantic => "semver",
            Scheme::Maven => "maven",
        }
    }

    /// Parses a version string with this scheme only.
    ///
    /// # Errors
    ///
    /// Only [`Scheme::Semantic`] can fail. See [`crate::SemanticVersion::parse`].
    pub fn parse_version(&self, version_str: &str) -> Result<Version, ParseError> {
        Version::parse(version_str, Some(*self))
    }
}

impl FromStr for Scheme {
    type Err = ParseError;

    /// Parses a scheme name, case-insensitively. `semver`, `sem` and `semantic` name
    /// [`Scheme::Semantic`]; `maven` and `mvn` name [`Scheme::Maven`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnsupportedScheme`] for any other name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "semver" | "sem" | "semantic" => Ok(Scheme::Semantic),
            "maven" | "mvn" => Ok(Scheme::Maven),
            _ => Err(ParseError::UnsupportedScheme { name: s.to_owned() }),
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
