//! Command-line arguments.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use cyclebench_config::{BenchConfig, ConfigError, OutputFormat};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "cyclebench.toml";

/// Times explicit loops against iterator chains and charts the difference.
#[derive(Debug, Parser)]
#[command(name = "cyclebench", version, about)]
pub struct Cli {
    /// TOML or YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile to run (repeatable); runs every configured profile by default
    #[arg(short, long = "profile", value_name = "NAME")]
    pub profiles: Vec<String>,

    /// Timed calls per strategy per size
    #[arg(short, long, value_name = "N")]
    pub repetitions: Option<u32>,

    /// Directory artifacts are written to
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Artifact format (repeatable)
    #[arg(short, long = "format", value_enum, value_name = "FORMAT")]
    pub formats: Vec<FormatArg>,

    /// Print the configured profiles and exit
    #[arg(long)]
    pub list_profiles: bool,

    /// Show raw batch times for every size
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress progress output; only the written paths are printed
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Svg,
    Csv,
    Markdown,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Loads the configuration and applies command-line overrides.
    ///
    /// `cwd` is where the default config file is looked up.
    pub fn resolve_config(&self, cwd: &Path) -> Result<BenchConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)?,
            None => {
                let default = cwd.join(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    BenchConfig::load(default)?
                } else {
                    BenchConfig::default()
                }
            }
        };

        if let Some(repetitions) = self.repetitions {
            config = config.with_repetitions(repetitions);
        }
        if let Some(dir) = &self.output_dir {
            config = config.with_output_dir(dir);
        }
        if !self.formats.is_empty() {
            config = config.with_formats(self.formats.iter().map(|&f| f.into()).collect());
        }

        config.validate()?;
        Ok(config)
    }
}
