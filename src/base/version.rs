//! Version value type: `major.minor.micro[.qualifier]`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use smol_str::SmolStr;

use super::error::VersionError;
use super::static_pattern;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    static_pattern(
        r"^(?P<major>[0-9]+)(?:\.(?P<minor>[0-9]+))?(?:\.(?P<micro>[0-9]+))?(?:\.(?P<qualifier>\S+))?$",
    )
});

/// An immutable version number.
///
/// Ordering compares `major`, `minor` and `micro` numerically; a missing
/// qualifier sorts below any present qualifier, present qualifiers compare
/// lexicographically. The derived ordering relies on the field order below
/// and on `None < Some(_)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: Option<SmolStr>,
}

impl Version {
    /// `0.0.0`, the default baseline.
    pub const ZERO: Version = Version::from_parts(0, 0, 0);

    /// Create an unqualified version.
    pub const fn from_parts(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: None,
        }
    }

    /// Create a version with an optional qualifier.
    ///
    /// The qualifier may be absent, but when present it must be non-empty and
    /// free of whitespace.
    pub fn new(
        major: u32,
        minor: u32,
        micro: u32,
        qualifier: Option<&str>,
    ) -> Result<Self, VersionError> {
        let qualifier = qualifier.map(check_qualifier).transpose()?;
        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }

    /// Parse `major(.minor)?(.micro)?(.qualifier)?`; omitted numbers are zero.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let captures = VERSION_PATTERN
            .captures(text)
            .ok_or_else(|| VersionError::not_a_version(text))?;

        let number = |name: &str| -> Result<u32, VersionError> {
            match captures.name(name) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| VersionError::not_a_version(text)),
                None => Ok(0),
            }
        };

        let major = number("major")?;
        let minor = number("minor")?;
        let micro = number("micro")?;
        Self::new(
            major,
            minor,
            micro,
            captures.name("qualifier").map(|m| m.as_str()),
        )
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn micro(&self) -> u32 {
        self.micro
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Copy with a different major number.
    pub fn with_major(&self, value: u32) -> Self {
        Self {
            major: value,
            ..self.clone()
        }
    }

    /// Copy with a different minor number.
    pub fn with_minor(&self, value: u32) -> Self {
        Self {
            minor: value,
            ..self.clone()
        }
    }

    /// Copy with a different micro number.
    pub fn with_micro(&self, value: u32) -> Self {
        Self {
            micro: value,
            ..self.clone()
        }
    }

    /// Copy with a different (or no) qualifier.
    pub fn with_qualifier(&self, value: Option<&str>) -> Result<Self, VersionError> {
        Self::new(self.major, self.minor, self.micro, value)
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(qualifier) = &self.qualifier {
            write!(f, ".{qualifier}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn check_qualifier(qualifier: &str) -> Result<SmolStr, VersionError> {
    if qualifier.is_empty() {
        return Err(VersionError::InvalidVersion(
            "qualifier may be missing, but not empty".to_string(),
        ));
    }
    if qualifier.chars().any(char::is_whitespace) {
        return Err(VersionError::InvalidVersion(format!(
            "qualifier '{qualifier}' contains whitespace"
        )));
    }
    Ok(SmolStr::new(qualifier))
}
