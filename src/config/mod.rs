// ABOUTME: Configuration management for botdesk
// Handles pricing parameters, mock key format, dashboard defaults and UI preferences

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::TimeRange;
use crate::pricing::PricingCalculator;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Plan pricing parameters
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Shape of the mock API key
    #[serde(default)]
    pub token: TokenConfig,

    /// Dashboard defaults
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Integration snippet settings
    #[serde(default)]
    pub integration: IntegrationConfig,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Smallest monthly message volume on the slider
    #[serde(default = "default_min_volume")]
    pub min_volume: u64,

    /// Largest monthly message volume on the slider
    #[serde(default = "default_max_volume")]
    pub max_volume: u64,

    /// Slider increment
    #[serde(default = "default_step")]
    pub step: u64,

    /// Dollars charged per thousand messages (29 => $0.029 per message)
    #[serde(default = "default_price_per_thousand")]
    pub price_per_thousand: u64,

    /// API requests per minute granted per thousand monthly messages
    #[serde(default = "default_base_rate_per_minute")]
    pub base_rate_per_minute: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_volume: default_min_volume(),
            max_volume: default_max_volume(),
            step: default_step(),
            price_per_thousand: default_price_per_thousand(),
            base_rate_per_minute: default_base_rate_per_minute(),
        }
    }
}

impl PricingConfig {
    /// Reject bounds the slider cannot represent
    pub fn validate(&self) -> Result<()> {
        if self.min_volume == 0 {
            bail!("pricing.min_volume must be at least 1");
        }
        if self.step == 0 {
            bail!("pricing.step must be at least 1");
        }
        if self.min_volume > self.max_volume {
            bail!(
                "pricing.min_volume ({}) exceeds pricing.max_volume ({})",
                self.min_volume,
                self.max_volume
            );
        }
        // Price and rate limit grow with volume, so the top of the range decides
        if PricingCalculator::new(self.clone()).quote(self.max_volume).is_err() {
            bail!(
                "pricing.max_volume ({}) is too large for the configured rates",
                self.max_volume
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    #[serde(default = "default_token_prefix")]
    pub prefix: String,

    #[serde(default = "default_suffix_length")]
    pub suffix_length: usize,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            prefix: default_token_prefix(),
            suffix_length: default_suffix_length(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Range selected when the dashboard opens
    #[serde(default)]
    pub default_range: TimeRange,

    /// Monthly message allowance used for the usage gauge
    #[serde(default = "default_monthly_limit")]
    pub monthly_message_limit: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_range: TimeRange::default(),
            monthly_message_limit: default_monthly_limit(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Base URL shown in the generated snippets
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for IntegrationConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

/// Which screen the TUI opens on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Onboarding,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Open the key help overlay on launch
    #[serde(default)]
    pub show_help_on_start: bool,

    #[serde(default)]
    pub start_view: StartView,
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

const fn default_min_volume() -> u64 {
    1_000
}

const fn default_max_volume() -> u64 {
    100_000
}

const fn default_step() -> u64 {
    1_000
}

const fn default_price_per_thousand() -> u64 {
    29
}

const fn default_base_rate_per_minute() -> u64 {
    60
}

fn default_token_prefix() -> String {
    "sk-".to_string()
}

const fn default_suffix_length() -> usize {
    13
}

const fn default_monthly_limit() -> u64 {
    100_000
}

fn default_api_base_url() -> String {
    "https://api.chatbot.com/v1".to_string()
}

impl AppConfig {
    /// Load configuration from the user config file, falling back to defaults
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit path; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config
            .pricing
            .validate()
            .with_context(|| format!("Invalid pricing in {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the user config file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        Ok(())
    }

    /// Base botdesk directory (~/.botdesk)
    pub fn base_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".botdesk"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            pricing: PricingConfig::default(),
            token: TokenConfig::default(),
            dashboard: DashboardConfig::default(),
            integration: IntegrationConfig::default(),
            ui_preferences: UiPreferences::default(),
        }
    }
}
