//! # smartver
//!
//! A library for parsing, comparing and sorting version strings across versioning schemes.
//!
//! Two schemes are implemented:
//!
//! - [Semantic Versioning 2.0.0](https://semver.org/), parsed strictly: `1.0` and `01.0.0` are
//!   rejected, build metadata is kept but never participates in ordering.
//! - Maven's version order, parsed permissively: every string is a Maven version, and qualifiers
//!   like `alpha`, `RC` or `SNAPSHOT` have a well-known precedence. `1.0`, `1.0.0` and `1.0-ga` are
//!   all equal.
//!
//! ## Examples
//!
//! Parse with auto-detection, which tries the strict semantic grammar first and falls back to
//! Maven:
//!
//! ```
//! use smartver::prelude::*;
//!
//! let version = smartver::parse("1.2.3-beta.2", None).unwrap();
//! assert_eq!(Scheme::Semantic, version.scheme());
//!
//! let version = smartver::parse("1.2-SNAPSHOT", None).unwrap();
//! assert_eq!(Scheme::Maven, version.scheme());
//! assert_eq!("1.2-snapshot", version.to_string());
//! ```
//!
//! Or ask for a scheme:
//!
//! ```
//! use smartver::prelude::*;
//!
//! let err = smartver::parse("1.0", Some(Scheme::Semantic)).unwrap_err();
//! assert!(matches!(err, ParseError::InvalidFormat { .. }));
//!
//! let a = smartver::parse("1.0", Some(Scheme::Maven)).unwrap();
//! let b = smartver::parse("1.0.0-ga", Some(Scheme::Maven)).unwrap();
//! assert!(smartver::equals(&a, &b));
//! ```
//!
//! Compare and sort:
//!
//! ```
//! use smartver::prelude::*;
//! use std::cmp::Ordering;
//!
//! let a = smartver::parse("1.0.0-alpha", None).unwrap();
//! let b = smartver::parse("1.0.0", None).unwrap();
//! assert_eq!(Ordering::Less, smartver::compare(&a, &b));
//!
//! let sorted = smartver::sort(
//!     ["1.0-rc-1", "1.0-alpha-1", "1.0", "1.0-sp-1", "1.0-SNAPSHOT"]
//!         .iter()
//!         .map(|s| smartver::parse(s, Some(Scheme::Maven)).unwrap())
//!         .collect(),
//! );
//! let sorted: Vec<String> = sorted.iter().map(ToString::to_string).collect();
//! assert_eq!(sorted, ["1-alpha-1", "1-rc-1", "1-snapshot", "1", "1-sp-1"]);
//! ```
//!
//! ## Mixed schemes
//!
//! Comparison is total even across schemes, so any list of [`Version`]s can be sorted. When two
//! versions come from different schemes, the order is decided by the scheme alone: semantic
//! versions sort before Maven versions. That order is arbitrary and carries no release meaning.
//!
//! ## Maven qualifiers
//!
//! | Rank | Spellings (case-insensitive) |
//! |---|---|
//! | 1 | `alpha`, `a` when directly followed by a digit |
//! | 2 | `beta`, `b` when directly followed by a digit |
//! | 3 | `milestone`, `m` |
//! | 4 | `rc`, `cr` |
//! | 5 | anything else, ordered lexically |
//! | 6 | `snapshot` |
//! | 7 | `ga`, `final`, `release`, or nothing |
//! | 8 | `sp` |
//!
//! ## Prelude
//!
//! smartver provides a prelude module for convenience. It contains everything needed to interact
//! with the library.
//!
//! Use it with:
//!
//! ```
//! use smartver::prelude::*;
//! ```
#![warn(missing_docs)]

use core::cmp::Ordering;

mod error;
mod maven;
mod qualifier;
mod scheme;
mod semver;
mod token;
mod version;

pub use crate::error::{ParseError, Violation};
pub use crate::maven::{Item, MavenVersion};
pub use crate::qualifier::{Qualifier, Rank};
pub use crate::scheme::Scheme;
pub use crate::semver::{Identifier, SemanticVersion};
pub use crate::version::Version;

/// Parses a version string, with the given scheme or by auto-detection.
///
/// See [`Version::parse`].
///
/// # Errors
///
/// Only semantic parsing fails, so errors are only possible with `Some(Scheme::Semantic)`.
pub fn parse(version_str: &str, scheme: Option<Scheme>) -> Result<Version, ParseError> {
    Version::parse(version_str, scheme)
}

/// Parses a version string with a scheme given by name (e.g. `"semver"` or `"mvn"`).
///
/// # Errors
///
/// Returns [`ParseError::UnsupportedScheme`] if the name is not recognized, or any error of
/// [`parse`].
pub fn parse_with_scheme_name(version_str: &str, scheme_name: &str) -> Result<Version, ParseError> {
    parse(version_str, Some(scheme_name.parse()?))
}

/// Compares two versions. Same as [`Ord::cmp`].
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Returns true if both versions have equal precedence. Build metadata and Maven padding are
/// ignored, so this is not string equality.
pub fn equals(a: &Version, b: &Version) -> bool {
    compare(a, b) == Ordering::Equal
}

/// Sorts versions in ascending order. The sort is stable: versions that compare equal keep their
/// input order.
pub fn sort(mut versions: Vec<Version>) -> Vec<Version> {
    versions.sort();
    versions
}

/// Stably sorts arbitrary items by the version each one holds.
///
/// ```
/// let mut releases = vec![
///     ("b", smartver::parse("1.0.0+b", None).unwrap()),
///     ("old", smartver::parse("0.9.0", None).unwrap()),
///     ("a", smartver::parse("1.0.0+a", None).unwrap()),
/// ];
/// smartver::sort_by_version(&mut releases, |(_, version)| version);
/// let names: Vec<_> = releases.iter().map(|(name, _)| *name).collect();
/// assert_eq!(names, ["old", "b", "a"]);
/// ```
pub fn sort_by_version<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> &Version,
{
    items.sort_by(|a, b| compare(key(a), key(b)));
}

/// A convenience module appropriate for glob imports (`use smartver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Identifier;
    #[doc(no_inline)]
    pub use crate::Item;
    #[doc(no_inline)]
    pub use crate::MavenVersion;
    #[doc(no_inline)]
    pub use crate::ParseError;
    #[doc(no_inline)]
    pub use crate::Qualifier;
    #[doc(no_inline)]
    pub use crate::Rank;
    #[doc(no_inline)]
    pub use crate::Scheme;
    #[doc(no_inline)]
    pub use crate::SemanticVersion;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::Violation;
}
