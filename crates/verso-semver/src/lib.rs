//! Semantic Versioning 2.0.0 parsing and precedence
//!
//! This crate validates version strings against the Semantic Versioning 2.0.0
//! grammar, keeps every field as text so numbers of any length survive, and
//! orders versions either byte-wise ([`CompareMode::Compatible`], the default)
//! or by full semver precedence ([`CompareMode::Precedence`]).
//!
//! ```
//! use verso_semver::{parse, Comparator, CompareMode};
//!
//! let a = parse("1.0.0-beta.2").unwrap();
//! let b = parse("1.0.0-beta.11").unwrap();
//! assert!(Comparator::new(CompareMode::Precedence).less_than(&a, &b));
//! assert_eq!(a.core(), "1.0.0");
//! ```

mod comparator;
mod semver;
mod version;
mod version_parser;

pub use comparator::{compare, Comparator, CompareMode, InvalidCompareModeError};
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{VersionParser, VersionParserError};

/// Parse a version string
pub fn parse(version: &str) -> Result<Version, VersionParserError> {
    VersionParser::new().parse(version)
}
