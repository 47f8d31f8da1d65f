//! Semver facade for working with lists of version strings

use crate::{Comparator, CompareMode, Version, VersionParser};

/// High-level operations over version strings
pub struct Semver;

impl Semver {
    /// Sort versions in ascending order, dropping strings that fail to parse
    pub fn sort(versions: &[&str], mode: CompareMode) -> Vec<String> {
        Self::usort(versions, mode, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str], mode: CompareMode) -> Vec<String> {
        Self::usort(versions, mode, false)
    }

    /// Sort parsed versions in place, ascending.
    ///
    /// The sort is stable: versions of equal precedence keep their order.
    pub fn sort_versions(versions: &mut [Version], mode: CompareMode) {
        let comparator = Comparator::new(mode);
        versions.sort_by(|a, b| comparator.compare(a, b));
    }

    /// Return the versions that parse, in input order
    pub fn valid(versions: &[&str]) -> Vec<String> {
        let parser = VersionParser::new();
        versions
            .iter()
            .filter(|v| parser.is_valid(v))
            .map(|v| v.to_string())
            .collect()
    }

    /// Return the greatest valid version, or `None` if nothing parses.
    ///
    /// Among versions of equal precedence the last one wins.
    pub fn max(versions: &[&str], mode: CompareMode) -> Option<String> {
        let comparator = Comparator::new(mode);
        Self::parsed(versions)
            .into_iter()
            .max_by(|(a, _), (b, _)| comparator.compare(a, b))
            .map(|(_, i)| versions[i].to_string())
    }

    fn usort(versions: &[&str], mode: CompareMode, ascending: bool) -> Vec<String> {
        let comparator = Comparator::new(mode);

        // Keep the original index so the input strings are returned as given
        let mut parsed = Self::parsed(versions);

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = comparator.compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }

    fn parsed(versions: &[&str]) -> Vec<(Version, usize)> {
        let parser = VersionParser::new();
        versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| parser.parse(v).ok().map(|version| (version, i)))
            .collect()
    }
}
