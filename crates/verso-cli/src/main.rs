mod compare;
mod config;
mod parse;
mod sort;
mod valid;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::VersoConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "verso")]
#[command(about = "Validate, compare and sort semantic versions")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Directory to start searching for verso.toml from
    #[arg(short = 'd', long, global = true, default_value = ".")]
    working_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a version and print its fields
    Parse(parse::ParseArgs),

    /// Check whether versions are valid
    Valid(valid::ValidArgs),

    /// Compare two versions, printing -1, 0 or 1
    Compare(compare::CompareArgs),

    /// Sort versions
    Sort(sort::SortArgs),

    /// Print the greatest of the given versions
    Max(sort::MaxArgs),
}

impl Commands {
    /// Whether the command reads verso.toml
    fn uses_config(&self) -> bool {
        !matches!(self, Commands::Valid(_))
    }
}

fn load_config(working_dir: &Path) -> Result<VersoConfig> {
    Ok(match VersoConfig::load(working_dir)? {
        Some((config, path)) => {
            log::debug!("Loaded configuration from {}", path.display());
            config
        }
        None => {
            log::debug!("No {} found, using defaults", config::CONFIG_FILE);
            VersoConfig::default()
        }
    })
}

fn run() -> Result<i32> {
    let args = Args::parse();

    let config = if args.command.uses_config() {
        load_config(&args.working_dir)?
    } else {
        VersoConfig::default()
    };

    match args.command {
        Commands::Parse(parse_args) => parse::execute(parse_args, &config),
        Commands::Valid(valid_args) => valid::execute(valid_args),
        Commands::Compare(compare_args) => compare::execute(compare_args, &config),
        Commands::Sort(sort_args) => sort::execute(sort_args, &config),
        Commands::Max(max_args) => sort::execute_max(max_args, &config),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
