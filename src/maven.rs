use crate::qualifier::Qualifier;
use crate::token::{tokenize, Separator, TokenKind};
use core::{
    cmp::Ordering,
    convert::Infallible,
    fmt::{self, Display},
    str::FromStr,
};
use itertools::{EitherOrBoth, Itertools};

/// One component of a Maven version.
#[derive(Debug, Clone)]
pub enum Item {
    /// A number that fits in a `u64`.
    Integer(u64),

    /// A number larger than `u64::MAX`, as its decimal digits without leading zeros.
    BigInteger(String),

    /// A non-numeric component, such as `alpha` or `SNAPSHOT`.
    Qualifier(Qualifier),

    /// A nested list, opened by `-`, by a digit/letter transition, or by a qualifier after a dot.
    List(Vec<Item>),
}

impl Item {
    fn number(digits: &str) -> Self {
        match digits.parse() {
            Ok(value) => Item::Integer(value),
            // digits are all ASCII, so this can only be an overflow
            Err(_) => Item::BigInteger(digits.trim_start_matches('0').to_owned()),
        }
    }

    /// Returns true if this item is the null element for its type: `0`, a release qualifier such
    /// as `ga`, or an empty list.
    pub fn is_null(&self) -> bool {
        match self {
            Item::Integer(value) => *value == 0,
            Item::BigInteger(_) => false,
            Item::Qualifier(qualifier) => qualifier.is_null(),
            Item::List(items) => items.is_empty(),
        }
    }

    /// Compares this item against a missing one, e.g. the third item of `1.0.1` against `1.0`.
    fn cmp_null(&self) -> Ordering {
        match self {
            Item::Integer(0) => Ordering::Equal,
            Item::Integer(_) | Item::BigInteger(_) => Ordering::Greater,
            Item::Qualifier(qualifier) => qualifier.cmp_null(),
            // the whole list decides, not only its head: 1-0.alpha < 1
            Item::List(items) => items
                .iter()
                .map(Item::cmp_null)
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal),
        }
    }
}

fn cmp_items(left: &[Item], right: &[Item]) -> Ordering {
    left.iter()
        .zip_longest(right)
        .map(|pair| match pair {
            EitherOrBoth::Both(l, r) => l.cmp(r),
            EitherOrBoth::Left(l) => l.cmp_null(),
            EitherOrBoth::Right(r) => r.cmp_null().reverse(),
        })
        .find(|ord| ord.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn cmp_big(left: &str, right: &str) -> Ordering {
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Item {}

impl PartialOrd for Item {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Item {
    fn cmp(&self, other: &Self) -> Ordering {
        use Item::*;
        match (self, other) {
            (Integer(l), Integer(r)) => l.cmp(r),
            (Integer(_), BigInteger(_)) => Ordering::Less,
            (BigInteger(_), Integer(_)) => Ordering::Greater,
            (BigInteger(l), BigInteger(r)) => cmp_big(l, r),

            // 1.1 > 1-sp > 1.sp
            (Integer(_) | BigInteger(_), Qualifier(_) | List(_)) => Ordering::Greater,
            (Qualifier(_) | List(_), Integer(_) | BigInteger(_)) => Ordering::Less,

            (Qualifier(l), Qualifier(r)) => l.cmp(r),
            (Qualifier(_), List(_)) => Ordering::Less,
            (List(_), Qualifier(_)) => Ordering::Greater,

            (List(l), List(r)) => cmp_items(l, r),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Item]) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        match item {
            // always mark a list, even as a first item, so that re-parsing rebuilds the nesting
            Item::List(_) => f.write_str("-")?,
            _ if idx > 0 => f.write_str(".")?,
            _ => {}
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Integer(value) => write!(f, "{value}"),
            Item::BigInteger(digits) => f.write_str(digits),
            Item::Qualifier(qualifier) => write!(f, "{qualifier}"),
            Item::List(items) => write_items(f, items),
        }
    }
}

/// Removes trailing null items from a list. Non-null lists are stepped over, so `1.0-1` trims the
/// `0` in front of its `-1` sub-list; the first non-null, non-list item stops the walk.
fn normalize(items: &mut Vec<Item>) {
    let mut idx = items.len();
    while idx > 0 {
        idx -= 1;
        if items[idx].is_null() {
            items.remove(idx);
        } else if !matches!(items[idx], Item::List(_)) {
            break;
        }
    }
}

/// Deepest list nesting a parse produces, counting the top-level list. Comparison, display and drop
/// all recurse through nested lists, so the depth must stay bounded whatever the input length.
pub(crate) const MAX_DEPTH: usize = 128;

/// Collects items into a stack of open lists. Each opened list becomes the last item of the list
/// below it once parsing is done.
struct ListBuilder {
    stack: Vec<Vec<Item>>,
}

impl ListBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Vec::new()],
        }
    }

    fn push(&mut self, item: Item) {
        if let Some(list) = self.stack.last_mut() {
            list.push(item);
        }
    }

    fn is_empty(&self) -> bool {
        self.stack.last().map_or(true, Vec::is_empty)
    }

    /// Opens a nested list. At [`MAX_DEPTH`] this does nothing and later items stay siblings in
    /// the innermost list.
    fn open(&mut self) {
        if self.stack.len() < MAX_DEPTH {
            self.stack.push(Vec::new());
        }
    }

    /// Closes all lists, normalizing from the innermost one outward.
    fn finish(mut self) -> Vec<Item> {
        let mut child: Option<Vec<Item>> = None;
        while let Some(mut list) = self.stack.pop() {
            if let Some(mut inner) = child.take() {
                normalize(&mut inner);
                list.push(Item::List(inner));
            }
            child = Some(list);
        }

        let mut items = child.unwrap_or_default();
        normalize(&mut items);
        if items.is_empty() {
            items.push(Item::Integer(0));
        }
        items
    }
}

/// A version ordered by the rules of Maven's
/// [version order specification](https://maven.apache.org/pom.html#version-order-specification).
///
/// Parsing never fails. Components are split on `.`, while `-` (and `_` or `+`) and transitions
/// between digits and letters open nested lists. A qualifier after a dot is read as if it followed a
/// hyphen, so `2.0.rc` is `2-rc`. Trailing null components are trimmed, so `1`, `1.0`, `1.0.0` and
/// `1-ga` are all the same version.
///
/// Nesting stops at a fixed depth of 128 lists. Past it, `-` and digit/letter transitions no longer
/// open a list, so an absurdly long input like `1-1-1-...` still parses, compares and prints.
///
/// ```
/// use smartver::MavenVersion;
///
/// let snapshot = MavenVersion::parse("1.0-SNAPSHOT");
/// let release = MavenVersion::parse("1.0.0");
/// let patch = MavenVersion::parse("1.0-1");
/// assert!(snapshot < release);
/// assert!(release < patch);
/// assert_eq!("1-snapshot", snapshot.to_string());
/// ```
#[derive(Debug, Clone)]
pub struct MavenVersion {
    items: Vec<Item>,
}

impl MavenVersion {
    /// Parses any string into a Maven version. Strings with no usable components (such as an empty
    /// string) become the null version `0`.
    pub fn parse(version_str: &str) -> Self {
        let tokens = tokenize(version_str);
        let mut builder = ListBuilder::new();
        let mut at_segment_start = true;

        for (idx, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Separator(sep) => {
                    if at_segment_start {
                        // empty segment, as in `1..2` or `-1`
                        builder.push(Item::Integer(0));
                    }
                    if sep != Separator::Dot {
                        builder.open();
                    }
                    at_segment_start = true;
                }
                TokenKind::Numeric => {
                    if !at_segment_start {
                        // letter to digit: 1.0rc2 => 1.0-rc-2
                        builder.open();
                    }
                    builder.push(Item::number(token.text));
                    at_segment_start = false;
                }
                TokenKind::Alphabetic => {
                    // digit to letter (1a => 1-a), and a qualifier after a dot (1.0.rc => 1.0-rc).
                    // either way the current list already holds something.
                    if !builder.is_empty() {
                        builder.open();
                    }
                    let followed_by_digit = tokens
                        .get(idx + 1)
                        .is_some_and(|next| next.kind == TokenKind::Numeric);
                    builder.push(Item::Qualifier(Qualifier::new(
                        token.text,
                        followed_by_digit,
                    )));
                    at_segment_start = false;
                }
            }
        }

        Self {
            items: builder.finish(),
        }
    }

    /// The normalized components. Never empty: the null version is a single `0`.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

impl FromStr for MavenVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl PartialEq for MavenVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MavenVersion {}

impl PartialOrd for MavenVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MavenVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_items(&self.items, &other.items)
    }
}

impl Display for MavenVersion {
    /// Writes the canonical form: trailing nulls dropped, qualifiers lower-cased and un-aliased.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_items(f, &self.items)
    }
}
