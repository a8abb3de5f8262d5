use core::{
    cmp::Ordering,
    fmt::{self, Display},
};

/// Canonical precedence of a Maven qualifier. Declaration order is precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// `alpha`, or `a` directly followed by a number.
    Alpha = 1,
    /// `beta`, or `b` directly followed by a number.
    Beta = 2,
    /// `milestone` or `m`.
    Milestone = 3,
    /// `rc` or `cr`.
    ReleaseCandidate = 4,
    /// Any qualifier not in the alias table. These order lexically among themselves.
    Unknown = 5,
    /// `snapshot`.
    Snapshot = 6,
    /// `ga`, `final`, `release`, or no qualifier at all.
    Release = 7,
    /// `sp`.
    ServicePack = 8,
}

impl Rank {
    /// The rank of a missing qualifier.
    pub const NULL: Rank = Rank::Release;
}

struct Alias {
    /// Lower-cased surface text.
    text: &'static str,
    rank: Rank,
}

/// Known qualifier spellings. Lookups happen after lower-casing.
static ALIASES: &[Alias] = &[
    Alias { text: "alpha", rank: Rank::Alpha },
    Alias { text: "beta", rank: Rank::Beta },
    Alias { text: "milestone", rank: Rank::Milestone },
    Alias { text: "m", rank: Rank::Milestone },
    Alias { text: "rc", rank: Rank::ReleaseCandidate },
    Alias { text: "cr", rank: Rank::ReleaseCandidate },
    Alias { text: "snapshot", rank: Rank::Snapshot },
    Alias { text: "", rank: Rank::Release },
    Alias { text: "ga", rank: Rank::Release },
    Alias { text: "final", rank: Rank::Release },
    Alias { text: "release", rank: Rank::Release },
    Alias { text: "sp", rank: Rank::ServicePack },
];

/// A non-numeric Maven version item, e.g. `alpha` or `SNAPSHOT`.
///
/// Known qualifiers keep only their rank and print with a canonical name; unknown ones keep their
/// lower-cased text, which breaks ties between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Qualifier {
    rank: Rank,
    text: String,
}

impl Qualifier {
    /// Resolves a qualifier through the alias table (case-insensitively).
    ///
    /// `followed_by_digit` enables the single-letter shorthands `a` and `b`, as in `1a1` or `2.0b3`.
    pub fn new(text: &str, followed_by_digit: bool) -> Self {
        let lower = text.to_lowercase();
        let lookup = match lower.as_str() {
            "a" if followed_by_digit => "alpha",
            "b" if followed_by_digit => "beta",
            other => other,
        };

        match ALIASES.iter().find(|alias| alias.text == lookup) {
            Some(alias) => Self {
                rank: alias.rank,
                text: String::new(),
            },
            None => Self {
                rank: Rank::Unknown,
                text: lower,
            },
        }
    }

    /// The canonical rank of this qualifier.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns true if this qualifier is equivalent to no qualifier at all (`ga`, `final`, ...).
    pub fn is_null(&self) -> bool {
        self.rank == Rank::NULL
    }

    /// Compares this qualifier against a missing one.
    pub(crate) fn cmp_null(&self) -> Ordering {
        self.rank.cmp(&Rank::NULL)
    }
}

impl Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.rank {
            Rank::Alpha => "alpha",
            Rank::Beta => "beta",
            Rank::Milestone => "milestone",
            Rank::ReleaseCandidate => "rc",
            Rank::Unknown => self.text.as_str(),
            Rank::Snapshot => "snapshot",
            Rank::Release => "ga",
            Rank::ServicePack => "sp",
        };
        f.write_str(name)
    }
}

impl PartialOrd for Qualifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Qualifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.text.cmp(&other.text))
    }
}
