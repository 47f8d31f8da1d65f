//! Valid command - check version strings against the grammar.

use anyhow::Result;
use clap::Args;
use console::style;

use verso_semver::VersionParser;

#[derive(Args, Debug)]
pub struct ValidArgs {
    /// Version strings to check
    #[arg(required = true, allow_hyphen_values = true)]
    pub versions: Vec<String>,

    /// Only set the exit code, print nothing
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn execute(args: ValidArgs) -> Result<i32> {
    let results = check(&args.versions);

    if !args.quiet {
        for (version, ok) in &results {
            if *ok {
                println!("{} {}", style("valid").green(), version);
            } else {
                println!("{} {}", style("invalid").red(), version);
            }
        }
    }

    let invalid = results.iter().filter(|(_, ok)| !ok).count();
    log::debug!("{} of {} versions invalid", invalid, results.len());

    Ok(if invalid == 0 { 0 } else { 1 })
}

fn check(versions: &[String]) -> Vec<(&str, bool)> {
    let parser = VersionParser::new();
    versions
        .iter()
        .map(|v| (v.as_str(), parser.is_valid(v)))
        .collect()
}
