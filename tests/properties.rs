use itertools::Itertools;
use rstest::rstest;
use smartver::prelude::*;
use std::cmp::Ordering;

fn semantic(version_str: &str) -> Version {
    smartver::parse(version_str, Some(Scheme::Semantic)).unwrap()
}

fn maven(version_str: &str) -> Version {
    smartver::parse(version_str, Some(Scheme::Maven)).unwrap()
}

fn auto(version_str: &str) -> Version {
    smartver::parse(version_str, None).unwrap()
}

fn assert_chain(chain: &[Version]) {
    for (low, high) in chain.iter().tuple_combinations() {
        assert_eq!(Ordering::Less, smartver::compare(low, high), "{low} < {high}");
        assert_eq!(Ordering::Greater, smartver::compare(high, low), "{high} > {low}");
    }
}

fn semantic_versions() -> Vec<Version> {
    [
        "0.0.0",
        "0.0.1",
        "1.0.0-0",
        "1.0.0-1",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-alpha.beta",
        "1.0.0-beta",
        "1.0.0-beta.2",
        "1.0.0-beta.11",
        "1.0.0-rc.1",
        "1.0.0",
        "1.0.0+build.1",
        "1.0.1",
        "2.0.0-x-y.3",
        "10.0.0",
    ]
    .map(semantic)
    .to_vec()
}

fn maven_versions() -> Vec<Version> {
    [
        "",
        "0.1",
        "1.0-alpha-1",
        "1.0-alpha-1-SNAPSHOT",
        "1a2",
        "1.0-beta-1",
        "1.0-m3",
        "1.0-CR1",
        "1.0-redhat",
        "1.0-SNAPSHOT",
        "1.0",
        "1.0.0.RELEASE",
        "1.0-sp",
        "1.0-1",
        "1.0.0.1",
        "1.1",
        "2.0.rc",
        "123456789012345678901234567890",
    ]
    .map(maven)
    .to_vec()
}

#[rstest]
#[case::semantic(semantic_versions())]
#[case::maven(maven_versions())]
fn total_order(#[case] versions: Vec<Version>) {
    for a in &versions {
        assert_eq!(Ordering::Equal, smartver::compare(a, a), "{a}");
    }
    for (a, b) in versions.iter().tuple_combinations() {
        assert_eq!(
            smartver::compare(a, b) == Ordering::Less,
            smartver::compare(b, a) == Ordering::Greater,
            "{a} vs {b}"
        );
    }
    for (a, b, c) in versions.iter().permutations(3).map(|p| (p[0], p[1], p[2])) {
        if a <= b && b <= c {
            assert!(a <= c, "{a} <= {b} <= {c}");
        }
    }
}

#[rstest]
#[case::semantic(semantic_versions())]
#[case::maven(maven_versions())]
fn round_trip(#[case] versions: Vec<Version>) {
    for version in versions {
        let reparsed = smartver::parse(&version.to_string(), Some(version.scheme())).unwrap();
        assert!(smartver::equals(&version, &reparsed), "{version} vs {reparsed}");
    }
}

#[test]
fn idempotent_normalization() {
    for version in maven_versions() {
        let once = version.to_string();
        let twice = maven(&once).to_string();
        assert_eq!(once, twice);
    }
}

#[test]
fn build_metadata_irrelevance() {
    assert_eq!(
        Ordering::Equal,
        smartver::compare(&auto("1.2.3+build1"), &auto("1.2.3+build2"))
    );
}

#[test]
fn semantic_precedence_chain() {
    assert_chain(
        &[
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-rc.1",
            "1.0.0",
        ]
        .map(auto),
    );
}

#[test]
fn maven_qualifier_chain() {
    assert_chain(&["1.0-alpha-1", "1.0", "1.0-1", "1.1"].map(auto));
}

#[test]
fn maven_equivalence() {
    assert!(smartver::equals(&maven("1.0"), &maven("1.0.0")));
    assert!(smartver::equals(&auto("1.0-SNAPSHOT"), &auto("1.0-snapshot")));
}

#[test]
fn sort_stability() {
    let sorted = smartver::sort(["1.0.0", "1.0.0+b", "1.0.0+a"].map(semantic).to_vec());

    for (a, b) in sorted.iter().tuple_combinations() {
        assert!(smartver::equals(a, b));
    }
    let builds: Vec<&[String]> = sorted
        .iter()
        .filter_map(Version::as_semantic)
        .map(SemanticVersion::build)
        .collect();
    assert_eq!(builds, [&[][..], &["b".to_owned()][..], &["a".to_owned()][..]]);
}

#[rstest]
#[case("1.0", Violation::MissingComponent)]
#[case("01.0.0", Violation::LeadingZero)]
fn strict_parser_rejection(#[case] version_str: &str, #[case] expected: Violation) {
    match smartver::parse(version_str, Some(Scheme::Semantic)) {
        Err(ParseError::InvalidFormat { violation, .. }) => assert_eq!(expected, violation),
        other => panic!("expected InvalidFormat for {version_str}, got {other:?}"),
    }
}

#[test]
fn empty_input() {
    assert_eq!(
        Err(ParseError::EmptyInput),
        smartver::parse("", Some(Scheme::Semantic))
    );
    // the permissive parser yields the null version instead
    assert!(smartver::equals(&maven(""), &maven("0")));
}

#[test]
fn unsupported_scheme() {
    assert!(matches!(
        smartver::parse_with_scheme_name("1.0", "pep440"),
        Err(ParseError::UnsupportedScheme { name }) if name == "pep440"
    ));
}

#[test]
fn cross_scheme_order_is_total() {
    let mut versions = semantic_versions();
    versions.extend(maven_versions());
    let sorted = smartver::sort(versions);

    let boundary = sorted
        .iter()
        .position(|version| version.scheme() == Scheme::Maven)
        .unwrap();
    assert!(sorted[..boundary]
        .iter()
        .all(|version| version.scheme() == Scheme::Semantic));
    assert!(sorted[boundary..]
        .iter()
        .all(|version| version.scheme() == Scheme::Maven));
    assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
}
