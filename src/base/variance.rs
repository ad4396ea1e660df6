//! Automatic increment policy for versions.

use std::fmt;
use std::str::FromStr;

use super::error::VersionError;
use super::version::Version;

/// The declared size of a change, applied to a baseline to get a resolution.
///
/// Variants are ordered `None < Micro < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum VersionVariance {
    /// No change, the baseline is kept.
    #[default]
    None,
    /// Bump the micro number.
    Micro,
    /// Bump the minor number and reset micro.
    Minor,
    /// Bump the major number and reset minor and micro.
    Major,
}

impl VersionVariance {
    /// All variances in ascending order.
    pub const ALL: [VersionVariance; 4] = [Self::None, Self::Micro, Self::Minor, Self::Major];

    /// Derive the bumped version. The qualifier is always preserved.
    pub fn apply(self, version: &Version) -> Version {
        match self {
            Self::None => version.clone(),
            Self::Micro => version.with_micro(version.micro().saturating_add(1)),
            Self::Minor => version
                .with_minor(version.minor().saturating_add(1))
                .with_micro(0),
            Self::Major => version
                .with_major(version.major().saturating_add(1))
                .with_minor(0)
                .with_micro(0),
        }
    }

    /// Lowercase keyword as written in source files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Micro => "micro",
            Self::Minor => "minor",
            Self::Major => "major",
        }
    }
}

impl fmt::Display for VersionVariance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionVariance {
    type Err = VersionError;

    /// Case-insensitive match against the four keywords.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variance| variance.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| VersionError::UnknownVariance(s.to_string()))
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for VersionVariance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
