//! Version string parsing

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    /// The input does not wholly match the semantic version grammar
    #[error("Invalid version string \"{0}\"")]
    MalformedVersion(String),
}

lazy_static! {
    // Numeric identifier: 0 or no leading zero. Classes are spelled out
    // because `\d` would also accept non-ASCII digits.
    static ref NUMERIC: &'static str = r"0|[1-9][0-9]*";

    // Prerelease identifier: numeric, or alphanumeric with at least one non-digit
    static ref PRERELEASE_IDENTIFIER: String = format!(r"(?:{}|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)", *NUMERIC);

    static ref BUILD_IDENTIFIER: &'static str = r"[0-9a-zA-Z-]+";

    static ref SEMVER_RE: Regex = Regex::new(&format!(
        r"^(?P<major>{n})\.(?P<minor>{n})\.(?P<patch>{n})(?:-(?P<prerelease>{pre}(?:\.{pre})*))?(?:\+(?P<buildmetadata>{build}(?:\.{build})*))?$",
        n = *NUMERIC,
        pre = *PRERELEASE_IDENTIFIER,
        build = *BUILD_IDENTIFIER,
    )).unwrap();
}

/// Parser for Semantic Versioning 2.0.0 strings.
///
/// The grammar is compiled once per process and shared; a `VersionParser` is
/// free to create and safe to use from any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new VersionParser
    pub fn new() -> Self {
        VersionParser
    }

    /// Parse a version string.
    ///
    /// The whole input must match: nothing is trimmed, stripped or
    /// case-folded beforehand.
    pub fn parse(&self, version: &str) -> Result<Version, VersionParserError> {
        let caps = SEMVER_RE
            .captures(version)
            .ok_or_else(|| VersionParserError::MalformedVersion(version.to_string()))?;

        let group = |name: &str| caps.name(name).map(|m| m.as_str()).unwrap_or("");

        Ok(Version::from_parts(
            group("major"),
            group("minor"),
            group("patch"),
            group("prerelease"),
            group("buildmetadata"),
        ))
    }

    /// Check whether a string is a valid version without building the value
    pub fn is_valid(&self, version: &str) -> bool {
        SEMVER_RE.is_match(version)
    }
}
