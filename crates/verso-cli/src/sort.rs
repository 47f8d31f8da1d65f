//! Sort and max commands - order a list of versions.

use anyhow::{bail, Result};
use clap::Args;

use verso_semver::{CompareMode, Semver, VersionParser};

use crate::config::VersoConfig;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(required = true, allow_hyphen_values = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,

    /// Fail on malformed versions instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Ordering rules: compatible or precedence
    #[arg(short, long)]
    pub mode: Option<CompareMode>,
}

#[derive(Args, Debug)]
pub struct MaxArgs {
    /// Candidate versions
    #[arg(required = true, allow_hyphen_values = true)]
    pub versions: Vec<String>,

    /// Ordering rules: compatible or precedence
    #[arg(short, long)]
    pub mode: Option<CompareMode>,
}

pub fn execute(args: SortArgs, config: &VersoConfig) -> Result<i32> {
    let mode = config.compare_mode(args.mode);
    for version in sort(&args.versions, mode, args.reverse, args.strict)? {
        println!("{}", version);
    }
    Ok(0)
}

pub fn execute_max(args: MaxArgs, config: &VersoConfig) -> Result<i32> {
    let mode = config.compare_mode(args.mode);
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    warn_malformed(&versions);

    match Semver::max(&versions, mode) {
        Some(max) => {
            println!("{}", max);
            Ok(0)
        }
        None => {
            eprintln!("No valid version given");
            Ok(1)
        }
    }
}

fn sort(versions: &[String], mode: CompareMode, reverse: bool, strict: bool) -> Result<Vec<String>> {
    let versions: Vec<&str> = versions.iter().map(String::as_str).collect();

    let malformed = warn_malformed(&versions);
    if strict && !malformed.is_empty() {
        bail!("Malformed versions: {}", malformed.join(", "));
    }

    log::debug!("Sorting {} versions ({}, reverse: {})", versions.len(), mode, reverse);
    Ok(if reverse {
        Semver::rsort(&versions, mode)
    } else {
        Semver::sort(&versions, mode)
    })
}

/// Log and return the inputs that fail to parse
fn warn_malformed<'a>(versions: &[&'a str]) -> Vec<&'a str> {
    let parser = VersionParser::new();
    let malformed: Vec<&str> = versions
        .iter()
        .copied()
        .filter(|v| !parser.is_valid(v))
        .collect();
    for version in &malformed {
        log::warn!("Skipping malformed version \"{}\"", version);
    }
    malformed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sort_skips_malformed() {
        let versions = strings(&["2.0.0", "junk", "1.0.0", "1.0.0-rc.1"]);
        let sorted = sort(&versions, CompareMode::Precedence, false, false).unwrap();
        assert_eq!(sorted, vec!["1.0.0-rc.1", "1.0.0", "2.0.0"]);
    }

    #[test]
    fn test_sort_reverse() {
        let versions = strings(&["2.0.0", "1.0.0", "1.0.0-rc.1"]);
        let sorted = sort(&versions, CompareMode::Precedence, true, false).unwrap();
        assert_eq!(sorted, vec!["2.0.0", "1.0.0", "1.0.0-rc.1"]);
    }

    #[test]
    fn test_sort_strict_rejects_malformed() {
        let versions = strings(&["1.0.0", "1.2", "01.1.1"]);
        let err = sort(&versions, CompareMode::Compatible, false, true).unwrap_err();
        assert_eq!(err.to_string(), "Malformed versions: 1.2, 01.1.1");
    }

    #[test]
    fn test_execute_max() {
        let args = MaxArgs { versions: strings(&["1.2", "nope"]), mode: None };
        assert_eq!(execute_max(args, &VersoConfig::default()).unwrap(), 1);

        let args = MaxArgs { versions: strings(&["1.0.0", "2.0.0"]), mode: None };
        assert_eq!(execute_max(args, &VersoConfig::default()).unwrap(), 0);
    }
}
