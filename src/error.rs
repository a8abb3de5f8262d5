/// The grammar rule a strict version string broke. Carried by [`ParseError::InvalidFormat`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The version ended before all of `MAJOR.MINOR.PATCH` were present.
    #[error("expected a numeric component")]
    MissingComponent,

    /// Something other than `-` or `+` came after the patch component.
    #[error("expected `-`, `+`, or the end of the version after the patch component")]
    ExtraComponent,

    /// A numeric component or numeric pre-release identifier has a leading zero.
    #[error("numeric values must not have leading zeros")]
    LeadingZero,

    /// Two dots in a row, or a trailing `-`/`+`/`.`.
    #[error("identifiers must not be empty")]
    EmptyIdentifier,

    /// A character outside `[0-9A-Za-z-]`.
    #[error("only ASCII alphanumerics and hyphens are allowed")]
    InvalidCharacter,

    /// A numeric value does not fit in 64 bits.
    #[error("numeric value is too large")]
    NumericOverflow,

    /// A separator where a numeric component was expected.
    #[error("unexpected separator")]
    UnexpectedSeparator,
}

/// Errors that can occur when parsing a version string.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The strict semantic version parser was given an empty string.
    #[error("Version string should not be empty")]
    EmptyInput,

    /// The version string does not follow the semantic version grammar.
    #[error("Version `{version}` is not a valid semantic version at position {position} (`{fragment}`): {violation}")]
    InvalidFormat {
        /// The full version string.
        version: String,
        /// Byte offset of the offending text.
        position: usize,
        /// The offending text. Empty when the version ended too early.
        fragment: String,
        /// The rule that was broken.
        violation: Violation,
    },

    /// A scheme name that this library does not implement.
    #[error("Unsupported version scheme `{name}`, expected one of: semver, maven")]
    UnsupportedScheme {
        /// The name as given.
        name: String,
    },
}
