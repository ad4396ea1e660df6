//! Algebraic properties of versions and variances over a sample set.

use exportver::{Version, VersionVariance};
use rstest::rstest;

const SAMPLES: &[&str] = &[
    "0", "1", "1.2", "1.2.3", "1.2.3.a", "1.2.3.b", "1.10.0", "2.0.0.SNAPSHOT", "10.0.1",
];

#[rstest]
#[case("1", "1.0.0")]
#[case("1.2", "1.2.0")]
#[case("1.2.3", "1.2.3")]
#[case("1.2.3.rc-1", "1.2.3.rc-1")]
#[case("007.08", "7.8.0")]
fn test_parse_normalizes(#[case] text: &str, #[case] expected: &str) {
    assert_eq!(Version::parse(text).unwrap().to_string(), expected);
}

#[test]
fn test_variance_laws() {
    for sample in SAMPLES {
        let version = Version::parse(sample).unwrap();
        assert_eq!(VersionVariance::None.apply(&version), version);

        let major = VersionVariance::Major.apply(&version);
        assert_eq!(major.major(), version.major() + 1);
        assert_eq!((major.minor(), major.micro()), (0, 0));
        assert_eq!(major.qualifier(), version.qualifier());

        for variance in VersionVariance::ALL {
            assert!(variance.apply(&version) >= version);
        }
    }
}

#[test]
fn test_ordering_is_total() {
    let versions: Vec<Version> = SAMPLES.iter().map(|s| Version::parse(s).unwrap()).collect();

    for a in &versions {
        for b in &versions {
            let relations = [a < b, a == b, a > b];
            assert_eq!(relations.iter().filter(|r| **r).count(), 1, "{a} vs {b}");

            for c in &versions {
                if a < b && b < c {
                    assert!(a < c, "{a} < {b} < {c}");
                }
            }
        }
    }
}
