//! Configuration system for cyclebench.
//!
//! Load benchmark configuration from TOML or YAML files to control the
//! repetition count, sweep profiles and output formats without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use cyclebench_config::{BenchConfig, OutputFormat};
//!
//! let config = BenchConfig::from_toml_str(r#"
//!     repetitions = 50
//!     formats = ["svg", "csv"]
//!
//!     [[profiles]]
//!     name = "tiny"
//!     count = 5
//!     step = 2
//! "#).unwrap();
//!
//! assert_eq!(config.repetitions, 50);
//! assert_eq!(config.formats, vec![OutputFormat::Svg, OutputFormat::Csv]);
//! assert_eq!((config.profiles[0].count, config.profiles[0].step), (5, 2));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use cyclebench_config::BenchConfig;
//!
//! let config = BenchConfig::load("cyclebench.toml").unwrap_or_default();
//! assert_eq!(config.repetitions, 100);
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of timed calls per strategy per size.
pub const DEFAULT_REPETITIONS: u32 = 100;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct BenchConfig {
    /// Timed calls per strategy, per size.
    #[serde(default = "default_repetitions")]
    pub repetitions: u32,

    /// Directory the artifacts are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Artifact formats written for each profile.
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,

    /// Sweep profiles, run in order.
    #[serde(default = "default_profiles")]
    pub profiles: Vec<ProfileConfig>,
}

fn default_repetitions() -> u32 {
    DEFAULT_REPETITIONS
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Svg]
}

fn default_profiles() -> Vec<ProfileConfig> {
    vec![ProfileConfig::small(), ProfileConfig::big()]
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repetitions: default_repetitions(),
            output_dir: default_output_dir(),
            formats: default_formats(),
            profiles: default_profiles(),
        }
    }
}

impl BenchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file, picking the parser by extension.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, doesn't parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the repetition count.
    pub fn with_repetitions(mut self, repetitions: u32) -> Self {
        self.repetitions = repetitions;
        self
    }

    /// Sets the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replaces the output formats.
    pub fn with_formats(mut self, formats: Vec<OutputFormat>) -> Self {
        self.formats = formats;
        self
    }

    /// Replaces the profiles with a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use cyclebench_config::{BenchConfig, ProfileConfig};
    ///
    /// let config = BenchConfig::new().with_only_profile(ProfileConfig::new("quick", 3, 100));
    /// assert_eq!(config.profiles.len(), 1);
    /// assert_eq!(config.profiles[0].name, "quick");
    /// ```
    pub fn with_only_profile(mut self, profile: ProfileConfig) -> Self {
        self.profiles = vec![profile];
        self
    }

    /// Looks up a profile by name.
    pub fn profile(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.iter().find(|p| p.name == name)
    }

    /// Returns the named profiles in the requested order, or every profile
    /// when `names` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown profile name.
    pub fn select_profiles(&self, names: &[String]) -> Result<Vec<&ProfileConfig>, ConfigError> {
        if names.is_empty() {
            return Ok(self.profiles.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                self.profile(name).ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "unknown profile '{}' (available: {})",
                        name,
                        self.profile_names().join(", ")
                    ))
                })
            })
            .collect()
    }

    fn profile_names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Checks the configuration for values the harness cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repetitions == 0 {
            return Err(ConfigError::Invalid("repetitions must be > 0".into()));
        }
        if self.formats.is_empty() {
            return Err(ConfigError::Invalid("at least one output format is required".into()));
        }
        if self.profiles.is_empty() {
            return Err(ConfigError::Invalid("at least one profile is required".into()));
        }

        let mut seen = HashSet::new();
        for profile in &self.profiles {
            profile.validate()?;
            if !seen.insert(profile.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate profile name '{}'",
                    profile.name
                )));
            }
        }
        Ok(())
    }
}

/// A named, evenly spaced size sweep.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProfileConfig {
    /// Profile name, selectable from the command line.
    pub name: String,

    /// Number of sizes in the sweep.
    pub count: usize,

    /// Spacing between sizes; the first size equals the step.
    pub step: usize,

    /// Artifact file stem. Defaults to `comprehension_vs_cycle_<name>`.
    #[serde(default)]
    pub output: Option<String>,
}

impl ProfileConfig {
    pub fn new(name: impl Into<String>, count: usize, step: usize) -> Self {
        Self {
            name: name.into(),
            count,
            step,
            output: None,
        }
    }

    /// 100 points spaced by 10.
    pub fn small() -> Self {
        Self::new("small", 100, 10)
    }

    /// 10 points spaced by 10 000.
    pub fn big() -> Self {
        Self::new("big", 10, 10_000)
    }

    /// Returns the artifact file stem.
    ///
    /// ```
    /// use cyclebench_config::ProfileConfig;
    ///
    /// assert_eq!(ProfileConfig::small().artifact_name(), "comprehension_vs_cycle_small");
    ///
    /// let custom = ProfileConfig {
    ///     output: Some("large".into()),
    ///     ..ProfileConfig::big()
    /// };
    /// assert_eq!(custom.artifact_name(), "large");
    /// ```
    pub fn artifact_name(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("comprehension_vs_cycle_{}", self.name))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("profile name must not be empty".into()));
        }
        if self.count == 0 {
            return Err(ConfigError::Invalid(format!(
                "profile '{}': count must be > 0",
                self.name
            )));
        }
        if self.step == 0 {
            return Err(ConfigError::Invalid(format!(
                "profile '{}': step must be > 0",
                self.name
            )));
        }
        if self.count.checked_mul(self.step).is_none() {
            return Err(ConfigError::Invalid(format!(
                "profile '{}': count * step overflows",
                self.name
            )));
        }
        Ok(())
    }
}

/// Artifact format produced by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Line chart.
    Svg,
    /// One row per size, one column per operation.
    Csv,
    /// Summary and per-size tables.
    Markdown,
    /// Sizes plus every series.
    Json,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}
