//! Compare command - order two versions.

use anyhow::{Context, Result};
use clap::Args;

use verso_semver::{Comparator, CompareMode, Version};

use crate::config::VersoConfig;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(allow_hyphen_values = true)]
    pub a: String,

    /// Right-hand version
    #[arg(allow_hyphen_values = true)]
    pub b: String,

    /// Ordering rules: compatible or precedence
    #[arg(short, long)]
    pub mode: Option<CompareMode>,
}

pub fn execute(args: CompareArgs, config: &VersoConfig) -> Result<i32> {
    let mode = config.compare_mode(args.mode);
    println!("{}", compare(&args.a, &args.b, mode)?);
    Ok(0)
}

/// Compare two version strings, returning -1, 0 or 1
fn compare(a: &str, b: &str, mode: CompareMode) -> Result<i32> {
    let left = Version::parse(a).context("Failed to parse left-hand version")?;
    let right = Version::parse(b).context("Failed to parse right-hand version")?;

    let result = Comparator::new(mode).compare_i32(&left, &right);
    log::debug!("compare {} {} ({}) = {}", left, right, mode, result);
    Ok(result)
}
