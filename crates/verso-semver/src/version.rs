//! The parsed version value and its canonical rendering

use std::fmt;
use std::str::FromStr;

use crate::version_parser::{VersionParser, VersionParserError};

/// A version that matched the Semantic Versioning 2.0.0 grammar.
///
/// Every field keeps its original text. Numeric fields are never converted to
/// machine integers because the grammar allows digit strings of any length.
/// An empty `prerelease` or `build_metadata` means the part is absent.
///
/// Equality is field-wise and includes build metadata. Precedence is a
/// separate concern handled by [`Comparator`](crate::Comparator), which is
/// why `Version` does not implement `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    major: String,
    minor: String,
    patch: String,
    prerelease: String,
    build_metadata: String,
}

impl Version {
    /// Parse a version string.
    pub fn parse(version: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(version)
    }

    /// Build a version from fields the caller already trusts.
    ///
    /// No validation is performed. Comparing or rendering a value whose
    /// fields break the grammar gives an unspecified result.
    pub fn from_parts(
        major: impl Into<String>,
        minor: impl Into<String>,
        patch: impl Into<String>,
        prerelease: impl Into<String>,
        build_metadata: impl Into<String>,
    ) -> Self {
        Version {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            prerelease: prerelease.into(),
            build_metadata: build_metadata.into(),
        }
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn patch(&self) -> &str {
        &self.patch
    }

    /// The prerelease part without its leading `-`, empty when absent
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// The build metadata without its leading `+`, empty when absent
    pub fn build_metadata(&self) -> &str {
        &self.build_metadata
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    pub fn has_build_metadata(&self) -> bool {
        !self.build_metadata.is_empty()
    }

    /// Dot-separated prerelease identifiers, in order
    pub fn prerelease_identifiers(&self) -> impl Iterator<Item = &str> {
        split_identifiers(&self.prerelease)
    }

    /// Dot-separated build metadata identifiers, in order
    pub fn build_identifiers(&self) -> impl Iterator<Item = &str> {
        split_identifiers(&self.build_metadata)
    }

    /// Render `major.minor.patch`
    pub fn core(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Render the full version string.
    ///
    /// For any value produced by the parser, parsing the result again yields
    /// an equal value.
    pub fn render(&self) -> String {
        let mut version = self.core();
        if !self.prerelease.is_empty() {
            version.push('-');
            version.push_str(&self.prerelease);
        }
        if !self.build_metadata.is_empty() {
            version.push('+');
            version.push_str(&self.build_metadata);
        }
        version
    }
}

fn split_identifiers(part: &str) -> impl Iterator<Item = &str> {
    part.split('.').filter(move |_| !part.is_empty())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_ignores_suffixes() {
        let v = Version::from_parts("1", "1", "2", "prerelease", "meta");
        assert_eq!(v.core(), "1.1.2");
    }

    #[test]
    fn test_render() {
        assert_eq!(Version::from_parts("1", "2", "3", "", "").render(), "1.2.3");
        assert_eq!(Version::from_parts("1", "2", "3", "rc.1", "").render(), "1.2.3-rc.1");
        assert_eq!(Version::from_parts("1", "2", "3", "", "build.5").render(), "1.2.3+build.5");
        assert_eq!(
            Version::from_parts("1", "0", "0", "alpha-a.b-c-somethinglong", "build.1-aef.1-its-okay").render(),
            "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay"
        );
    }

    #[test]
    fn test_display_matches_render() {
        let v = Version::from_parts("2", "0", "0", "rc.1", "build.123");
        assert_eq!(v.to_string(), v.render());
    }

    #[test]
    fn test_from_str() {
        let v: Version = "1.0.0-beta+exp.sha.5114f85".parse().unwrap();
        assert_eq!(v.prerelease(), "beta");
        assert_eq!(v.build_metadata(), "exp.sha.5114f85");
        assert!("1.0".parse::<Version>().is_err());
    }

    #[test]
    fn test_status_helpers() {
        let release = Version::from_parts("1", "2", "3", "", "");
        assert!(!release.is_prerelease());
        assert!(!release.has_build_metadata());

        let pre = Version::from_parts("1", "2", "3", "alpha", "meta");
        assert!(pre.is_prerelease());
        assert!(pre.has_build_metadata());
    }

    #[test]
    fn test_identifiers() {
        let v = Version::from_parts("1", "0", "0", "alpha.1.x-y", "build.007");
        assert_eq!(v.prerelease_identifiers().collect::<Vec<_>>(), vec!["alpha", "1", "x-y"]);
        assert_eq!(v.build_identifiers().collect::<Vec<_>>(), vec!["build", "007"]);

        let bare = Version::from_parts("1", "0", "0", "", "");
        assert_eq!(bare.prerelease_identifiers().count(), 0);
        assert_eq!(bare.build_identifiers().count(), 0);
    }

    #[test]
    fn test_equality_includes_build_metadata() {
        let a = Version::from_parts("1", "0", "0", "", "a");
        let b = Version::from_parts("1", "0", "0", "", "b");
        assert_ne!(a, b);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_as_string() {
        let v = Version::parse("1.2.3-rc.1+build.9").unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "\"1.2.3-rc.1+build.9\"");

        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        assert!(serde_json::from_str::<Version>("\"01.2.3\"").is_err());
    }
}
