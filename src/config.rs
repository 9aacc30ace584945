use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::wizard::draft::{
    DEFAULT_FONT_FAMILY, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR, DEFAULT_TEMPLATE,
};
use crate::wizard::{DeckTemplate, GatePolicy, PitchDraft};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Wizard behaviour and the defaults a new draft starts from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Block `advance` until the current step's required fields are filled
    #[serde(default)]
    pub enforce_gates: bool,
    /// Template pre-selected on the first step
    #[serde(default = "default_template")]
    pub default_template: String,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

fn default_primary_color() -> String {
    DEFAULT_PRIMARY_COLOR.to_string()
}

fn default_secondary_color() -> String {
    DEFAULT_SECONDARY_COLOR.to_string()
}

fn default_font_family() -> String {
    DEFAULT_FONT_FAMILY.to_string()
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            enforce_gates: false,
            default_template: default_template(),
            primary_color: default_primary_color(),
            secondary_color: default_secondary_color(),
            font_family: default_font_family(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Where exported decks are written
    #[serde(default = "default_output_dir")]
    pub output: String,
    /// Saved drafts and logs
    #[serde(default = "default_state_dir")]
    pub state: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_state_dir() -> String {
    ".pitchdeck".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output: default_output_dir(),
            state: default_state_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll interval for the TUI loop
    #[serde(default = "default_refresh_rate")]
    pub refresh_rate_ms: u64,
}

fn default_refresh_rate() -> u64 {
    250
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            refresh_rate_ms: default_refresh_rate(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to log to file in TUI mode (false = stderr for debugging)
    #[serde(default = "default_log_to_file")]
    pub to_file: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: default_log_to_file(),
        }
    }
}

impl Config {
    /// Path to the project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(".pitchdeck/config.toml")
    }

    pub fn load(config_path: Option<&str>) -> Result<Self> {
        // Start with embedded defaults so pitchdeck works without config files
        let defaults = Config::default();
        let defaults_json =
            serde_json::to_string(&defaults).context("Failed to serialize default config")?;

        let mut builder = config::Config::builder().add_source(config::File::from_str(
            &defaults_json,
            config::FileFormat::Json,
        ));

        let project_config = Self::project_config_path();
        if project_config.exists() {
            builder = builder.add_source(config::File::from(project_config));
        }

        // User config in ~/.config/pitchdeck/ (optional global overrides)
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("pitchdeck").join("config.toml");
            if user_config.exists() {
                builder = builder.add_source(config::File::from(user_config));
            }
        }

        // Explicit config file (CLI override)
        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path));
        }

        // Environment variables, e.g. PITCHDECK__WIZARD__ENFORCE_GATES=true
        builder = builder.add_source(
            config::Environment::with_prefix("PITCHDECK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: Config = builder
            .build()
            .context("Failed to load configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Save config to .pitchdeck/config.toml
    pub fn save(&self) -> Result<()> {
        let config_path = Self::project_config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_str =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        std::fs::write(&config_path, toml_str).context("Failed to write config file")?;

        Ok(())
    }

    /// Reject colors that aren't `#rrggbb` and templates missing from the catalog
    pub fn validate(&self) -> Result<()> {
        let hex = Regex::new(r"^#[0-9a-fA-F]{6}$").context("Invalid color pattern")?;

        for (name, value) in [
            ("wizard.primary_color", &self.wizard.primary_color),
            ("wizard.secondary_color", &self.wizard.secondary_color),
        ] {
            if !hex.is_match(value) {
                bail!("{} must be a #rrggbb color, got '{}'", name, value);
            }
        }

        if DeckTemplate::find(&self.wizard.default_template).is_none() {
            let known: Vec<&str> = DeckTemplate::all().iter().map(|t| t.id).collect();
            bail!(
                "wizard.default_template '{}' is not one of: {}",
                self.wizard.default_template,
                known.join(", ")
            );
        }

        if self.wizard.font_family.trim().is_empty() {
            bail!("wizard.font_family must not be empty");
        }

        Ok(())
    }

    pub fn gate_policy(&self) -> GatePolicy {
        GatePolicy::from_enforce(self.wizard.enforce_gates)
    }

    /// Draft a new wizard session starts from
    pub fn initial_draft(&self) -> PitchDraft {
        PitchDraft {
            selected_template: self.wizard.default_template.clone(),
            primary_color: self.wizard.primary_color.clone(),
            secondary_color: self.wizard.secondary_color.clone(),
            font_family: self.wizard.font_family.clone(),
            ..PitchDraft::default()
        }
    }

    fn absolute(path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            std::env::current_dir().unwrap_or_default().join(path)
        }
    }

    /// Get absolute path to the export directory
    pub fn output_path(&self) -> PathBuf {
        Self::absolute(&self.paths.output)
    }

    /// Get absolute path to state directory
    pub fn state_path(&self) -> PathBuf {
        Self::absolute(&self.paths.state)
    }

    /// Get absolute path to logs directory
    pub fn logs_path(&self) -> PathBuf {
        self.state_path().join("logs")
    }

    /// Where Ctrl-S saves the in-progress draft
    pub fn draft_path(&self) -> PathBuf {
        self.state_path().join("draft.toml")
    }
}
