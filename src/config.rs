use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use seoprompt_reports::{DownloadFormat, DEFAULT_FILE_STEM};

use crate::cli::args::GenerateArgs;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SeoPromptConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where and how downloads are written
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// Directory the download files are written into
    #[serde(default = "default_output_directory")]
    pub directory: PathBuf,

    /// "both", "md", "txt" or "none"
    #[serde(default = "default_formats")]
    pub formats: String,

    /// File name without extension
    #[serde(default = "default_file_stem")]
    pub file_stem: String,
}

/// Values prefilled into the form when the CLI does not provide them
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct DefaultsConfig {
    pub target_audience: Option<String>,
    pub target_keyword: Option<String>,
    pub tone: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Print only the rendered prompt
    #[serde(default)]
    pub quiet: bool,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_output_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_formats() -> String {
    "both".to_string()
}

fn default_file_stem() -> String {
    DEFAULT_FILE_STEM.to_string()
}

fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            formats: default_formats(),
            file_stem: default_file_stem(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            color: default_color(),
        }
    }
}

impl OutputConfig {
    /// Download formats selected by `formats`, Markdown first.
    pub fn download_formats(&self) -> Result<Vec<DownloadFormat>, ConfigError> {
        match self.formats.trim().to_lowercase().as_str() {
            "both" | "all" => Ok(DownloadFormat::ALL.to_vec()),
            "none" => Ok(Vec::new()),
            other => DownloadFormat::parse(other)
                .map(|format| vec![format])
                .map_err(|_| ConfigError::InvalidValue {
                    field: "output.formats".to_string(),
                    value: self.formats.clone(),
                    expected: "both, md, txt or none".to_string(),
                }),
        }
    }
}

/// One config file as written on disk.
///
/// Every value is optional so a layer only overrides what it actually sets,
/// including values equal to the built-in default.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ConfigLayer {
    #[serde(default)]
    pub output: OutputLayer,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub display: DisplayLayer,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct OutputLayer {
    pub directory: Option<PathBuf>,
    pub formats: Option<String>,
    pub file_stem: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct DisplayLayer {
    pub quiet: Option<bool>,
    pub color: Option<bool>,
}

impl ConfigLayer {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let layer: ConfigLayer = toml::from_str(&content)?;
        Ok(layer)
    }
}

impl SeoPromptConfig {
    /// Merge a config layer into this one (the layer wins for every value it sets)
    pub fn merge(&mut self, other: &ConfigLayer) {
        if let Some(ref directory) = other.output.directory {
            self.output.directory = directory.clone();
        }
        if let Some(ref formats) = other.output.formats {
            self.output.formats = formats.clone();
        }
        if let Some(ref file_stem) = other.output.file_stem {
            self.output.file_stem = file_stem.clone();
        }

        if other.defaults.target_audience.is_some() {
            self.defaults.target_audience = other.defaults.target_audience.clone();
        }
        if other.defaults.target_keyword.is_some() {
            self.defaults.target_keyword = other.defaults.target_keyword.clone();
        }
        if other.defaults.tone.is_some() {
            self.defaults.tone = other.defaults.tone.clone();
        }

        if let Some(quiet) = other.display.quiet {
            self.display.quiet = quiet;
        }
        if let Some(color) = other.display.color {
            self.display.color = color;
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value in {field}: {value} (expected {expected})")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Empty value in {field}")]
    EmptyValue { field: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl SeoPromptConfig {
    pub fn generate_default_config() -> String {
        let default_config = Self::default();
        toml::to_string_pretty(&default_config).unwrap_or_else(|_| {
            r#"# seoprompt configuration file

[output]
directory = "."
formats = "both"
file_stem = "seo_prompt"

[defaults]
# target_audience = "30대 직장인"
# target_keyword = "재테크 방법"
# tone = "친근하고 쉬운 설명체"

[display]
quiet = false
color = true
"#
            .to_string()
        })
    }

    /// Load a single file on top of the built-in defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge(&ConfigLayer::load_from_file(path)?);
        Ok(config)
    }

    /// Get the user config file path (~/.config/seoprompt/config.toml)
    pub fn get_user_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/seoprompt/config.toml"))
    }

    /// Get the current directory config file path (./seoprompt.toml)
    pub fn get_current_config_path() -> PathBuf {
        PathBuf::from("./seoprompt.toml")
    }

    /// Ensure user config file exists, creating it if necessary
    /// Returns the path to the user config file
    pub fn ensure_user_config_exists() -> Result<PathBuf> {
        let user_config_path = Self::get_user_config_path()
            .ok_or_else(|| anyhow!("Could not determine home directory"))?;

        if !user_config_path.exists() {
            if let Some(parent) = user_config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(&user_config_path, Self::generate_default_config())?;

            tracing::info!("Created user config file at: {}", user_config_path.display());
        }

        Ok(user_config_path)
    }

    /// Load and merge configs from all sources with priority:
    /// 1. User config (~/.config/seoprompt/config.toml) - lowest priority
    /// 2. Current directory (./seoprompt.toml)
    pub fn load_with_merged_configs() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(user_path) = Self::get_user_config_path() {
            if user_path.exists() {
                match ConfigLayer::load_from_file(&user_path) {
                    Ok(user_config) => {
                        config.merge(&user_config);
                        tracing::debug!("Loaded user config from: {}", user_path.display());
                    }
                    Err(e) => {
                        tracing::warn!("Ignoring user config {}: {}", user_path.display(), e)
                    }
                }
            }
        }

        let current_path = Self::get_current_config_path();
        if current_path.exists() {
            match ConfigLayer::load_from_file(&current_path) {
                Ok(current_config) => {
                    config.merge(&current_config);
                    tracing::debug!(
                        "Loaded current directory config from: {}",
                        current_path.display()
                    );
                }
                Err(e) => {
                    tracing::warn!("Ignoring config {}: {}", current_path.display(), e)
                }
            }
        }

        Ok(config)
    }

    pub fn apply_env_vars(&mut self, env_vars: &HashMap<String, String>) -> Result<()> {
        for (key, value) in env_vars {
            if let Some(config_key) = key.strip_prefix("SEOPROMPT_") {
                match config_key {
                    "OUTPUT_DIRECTORY" => self.output.directory = PathBuf::from(value),
                    "OUTPUT_FORMATS" => self.output.formats = value.clone(),
                    "OUTPUT_FILE_STEM" => self.output.file_stem = value.clone(),
                    "DEFAULTS_TARGET_AUDIENCE" => {
                        self.defaults.target_audience = Some(value.clone())
                    }
                    "DEFAULTS_TARGET_KEYWORD" => self.defaults.target_keyword = Some(value.clone()),
                    "DEFAULTS_TONE" => self.defaults.tone = Some(value.clone()),
                    "DISPLAY_QUIET" => {
                        self.display.quiet = value
                            .parse()
                            .map_err(|_| anyhow!("Invalid quiet value: {}", value))?;
                    }
                    "DISPLAY_COLOR" => {
                        self.display.color = value
                            .parse()
                            .map_err(|_| anyhow!("Invalid color value: {}", value))?;
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn apply_generate_args(&mut self, args: &GenerateArgs) {
        if let Some(ref output_dir) = args.output_dir {
            self.output.directory = output_dir.clone();
        }
        if let Some(ref format) = args.format {
            self.output.formats = format.clone();
        }
        if let Some(ref file_stem) = args.file_stem {
            self.output.file_stem = file_stem.clone();
        }
        if args.quiet {
            self.display.quiet = true;
        }
    }

    /// Load configuration with full precedence chain:
    /// 1. Default values (lowest)
    /// 2. User config (~/.config/seoprompt/config.toml)
    /// 3. Current directory (./seoprompt.toml)
    /// 4. Explicit --config file
    /// 5. Environment variables (SEOPROMPT_*)
    /// 6. CLI arguments (highest)
    pub fn load_with_precedence(
        config_path: Option<&Path>,
        cli_args: Option<&GenerateArgs>,
        env_vars: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut config = Self::load_with_merged_configs().unwrap_or_default();

        if let Some(path) = config_path {
            let explicit_config = ConfigLayer::load_from_file(path)
                .map_err(|e| anyhow!("Failed to load config file {}: {}", path.display(), e))?;
            config.merge(&explicit_config);
            tracing::debug!("Loaded explicit config from: {}", path.display());
        }

        config.apply_env_vars(env_vars)?;
        if let Some(args) = cli_args {
            config.apply_generate_args(args);
        }
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output.directory.as_os_str().is_empty() {
            return Err(ConfigError::EmptyValue {
                field: "output.directory".to_string(),
            });
        }

        self.output.download_formats()?;

        Ok(())
    }
}
