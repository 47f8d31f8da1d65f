//! Version precedence

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Version;

/// How two versions are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CompareMode {
    /// Byte-wise comparison of the numeric fields and of the whole
    /// prerelease string, with the prerelease operands swapped.
    ///
    /// `10.0.0` sorts below `9.0.0`, and `1.0.0-beta` below `1.0.0-alpha`.
    /// A release still outranks any prerelease of the same core.
    #[default]
    Compatible,
    /// Semantic Versioning 2.0.0 precedence: numeric fields by magnitude,
    /// prerelease identifiers one by one.
    Precedence,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid compare mode \"{0}\", expected \"compatible\" or \"precedence\"")]
pub struct InvalidCompareModeError(pub String);

impl CompareMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareMode::Compatible => "compatible",
            CompareMode::Precedence => "precedence",
        }
    }
}

impl FromStr for CompareMode {
    type Err = InvalidCompareModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compatible" => Ok(CompareMode::Compatible),
            "precedence" => Ok(CompareMode::Precedence),
            _ => Err(InvalidCompareModeError(s.to_string())),
        }
    }
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparator for ordering parsed versions.
///
/// Build metadata never takes part in the comparison. Inputs are not
/// re-validated: values built with [`Version::from_parts`] that break the
/// grammar compare in an unspecified (but non-panicking) way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Comparator {
    mode: CompareMode,
}

impl Comparator {
    pub fn new(mode: CompareMode) -> Self {
        Comparator { mode }
    }

    pub fn mode(&self) -> CompareMode {
        self.mode
    }

    /// Order `a` relative to `b`
    pub fn compare(&self, a: &Version, b: &Version) -> Ordering {
        match self.mode {
            CompareMode::Compatible => compare_compatible(a, b),
            CompareMode::Precedence => compare_precedence(a, b),
        }
    }

    /// Order `a` relative to `b` as `-1`, `0` or `1`
    pub fn compare_i32(&self, a: &Version, b: &Version) -> i32 {
        match self.compare(a, b) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Check if a > b
    pub fn greater_than(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Check if a >= b
    pub fn greater_than_or_equal_to(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) != Ordering::Less
    }

    /// Check if a < b
    pub fn less_than(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Check if a <= b
    pub fn less_than_or_equal_to(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) != Ordering::Greater
    }

    /// Check if a and b have the same precedence
    pub fn equal_to(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Check if a and b differ in precedence
    pub fn not_equal_to(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) != Ordering::Equal
    }
}

/// Order two versions in [`CompareMode::Compatible`] mode
pub fn compare(a: &Version, b: &Version) -> Ordering {
    compare_compatible(a, b)
}

fn compare_compatible(a: &Version, b: &Version) -> Ordering {
    a.major()
        .cmp(b.major())
        .then_with(|| a.minor().cmp(b.minor()))
        .then_with(|| a.patch().cmp(b.patch()))
        .then_with(|| match (a.is_prerelease(), b.is_prerelease()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            _ => b.prerelease().cmp(a.prerelease()),
        })
}

fn compare_precedence(a: &Version, b: &Version) -> Ordering {
    compare_numeric(a.major(), b.major())
        .then_with(|| compare_numeric(a.minor(), b.minor()))
        .then_with(|| compare_numeric(a.patch(), b.patch()))
        .then_with(|| match (a.is_prerelease(), b.is_prerelease()) {
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (true, true) => compare_prerelease(a, b),
        })
}

/// Magnitude order of two digit strings without leading zeros
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

fn compare_prerelease(a: &Version, b: &Version) -> Ordering {
    let mut left = a.prerelease_identifiers();
    let mut right = b.prerelease_identifiers();

    loop {
        let ordering = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            // A shorter identifier list sorts lower when its prefix is equal
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match (is_numeric(x), is_numeric(y)) {
                (true, true) => compare_numeric(x, y),
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (false, false) => x.cmp(y),
            },
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
}
