//! Parse command - show the fields of a version.

use anyhow::Result;
use clap::Args;
use console::style;
use serde_json::json;

use verso_semver::{Version, VersionParser};

use crate::config::{OutputFormat, VersoConfig};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version string to parse
    pub version: String,

    /// Output format: text or json
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn execute(args: ParseArgs, config: &VersoConfig) -> Result<i32> {
    let version = match VersionParser::new().parse(&args.version) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            return Ok(1);
        }
    };

    let format = config.output_format(args.format);
    log::debug!("Parsed {} (format: {:?})", version, format);

    match format {
        OutputFormat::Text => print!("{}", render_text(&version)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&render_json(&version))?),
    }

    Ok(0)
}

fn render_text(version: &Version) -> String {
    let mut out = String::new();
    for (label, value) in [
        ("major", version.major()),
        ("minor", version.minor()),
        ("patch", version.patch()),
        ("prerelease", version.prerelease()),
        ("build", version.build_metadata()),
    ] {
        out.push_str(&format!("{:<11} {}\n", label, value));
    }
    out.push_str(&format!("{:<11} {}\n", "core", version.core()));
    out
}

fn render_json(version: &Version) -> serde_json::Value {
    json!({
        "version": version,
        "major": version.major(),
        "minor": version.minor(),
        "patch": version.patch(),
        "prerelease": version.prerelease(),
        "build_metadata": version.build_metadata(),
        "core": version.core(),
        "is_prerelease": version.is_prerelease(),
    })
}
