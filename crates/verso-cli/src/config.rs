use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use verso_semver::CompareMode;

pub const CONFIG_FILE: &str = "verso.toml";

/// The verso configuration file structure (verso.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VersoConfig {
    /// Ordering settings
    pub compare: CompareConfig,

    /// Output settings
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Default compare mode ("compatible" or "precedence")
    pub mode: Option<CompareMode>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format for `verso parse`
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl VersoConfig {
    /// Load configuration from verso.toml, searching upward from the given directory.
    /// Returns the config and the file it was read from.
    /// Relative paths are resolved against the current working directory.
    pub fn load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Self::load_in(&cwd, start_dir)
    }

    fn load_in(cwd: &Path, start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        // Walking up needs an absolute path: popping "." ends immediately
        let start = cwd.join(start_dir);
        let mut current = start
            .canonicalize()
            .with_context(|| format!("Failed to resolve working directory {}", start.display()))?;

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.is_file() {
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: VersoConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                return Ok(Some((config, config_path)));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Command line flag first, then the config file, then the built-in default
    pub fn compare_mode(&self, flag: Option<CompareMode>) -> CompareMode {
        flag.or(self.compare.mode).unwrap_or_default()
    }

    pub fn output_format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.output.format).unwrap_or_default()
    }
}
