//! User configuration, stored as TOML in the user's config directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use foodcheck_client::DEFAULT_BASE_URL;
use foodcheck_core::{CALORIE_LIMIT, ClassifierRules, RESTRICTED_TERMS, SEARCH_DEBOUNCE, Viewport};
use foodcheck_model::{DEFAULT_PAGE_SIZE, UNSPECIFIED};

const CONFIG_FILE: &str = "config.toml";

// =============================================================================
// ROOT CONFIG
// =============================================================================

/// Complete configuration; every section falls back to defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoodcheckConfig {
    pub api: ApiSettings,
    pub display: DisplaySettings,
    pub search: SearchSettings,
    pub rules: RuleSettings,
}

/// Values given on the command line, applied over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_url: Option<String>,
    pub per_page: Option<u32>,
    pub narrow: bool,
}

impl FoodcheckConfig {
    /// Loads from `explicit` when given, otherwise from the default location.
    ///
    /// An explicit file must exist and parse. A missing default file yields
    /// defaults; an unreadable one is reported and ignored.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        let Some(path) = Self::config_path() else {
            debug!("no config directory available, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path).or_else(|error| {
            warn!(path = %path.display(), error = %format!("{error:#}"), "ignoring unreadable config");
            Ok(Self::default())
        })
    }

    /// Loads and validates a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("load config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("parse TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Default config file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "foodcheck", "foodcheck")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.per_page == 0 {
            bail!("display.per_page must be at least 1");
        }
        if !self.rules.calorie_limit.is_finite() {
            bail!("rules.calorie_limit must be a finite number");
        }
        Ok(())
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) -> Result<()> {
        if let Some(url) = &overrides.api_url {
            self.api.base_url.clone_from(url);
        }
        if let Some(per_page) = overrides.per_page {
            self.display.per_page = per_page;
        }
        if overrides.narrow {
            self.display.narrow = true;
        }
        self.validate()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::from_narrow(self.display.narrow)
    }

    pub fn classifier_rules(&self) -> ClassifierRules {
        ClassifierRules::new(&self.rules.restricted_terms, self.rules.calorie_limit)
    }
}

// =============================================================================
// SECTIONS
// =============================================================================

/// Where the food service lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Rows per page.
    pub per_page: u32,
    /// Show three page numbers instead of five.
    pub narrow: bool,
    /// Marker for attributes that could not be resolved.
    pub placeholder: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PAGE_SIZE,
            narrow: false,
            placeholder: UNSPECIFIED.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet time before typed text is searched, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: SEARCH_DEBOUNCE.as_millis() as u64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    pub restricted_terms: Vec<String>,
    pub calorie_limit: f64,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            restricted_terms: RESTRICTED_TERMS.iter().map(ToString::to_string).collect(),
            calorie_limit: CALORIE_LIMIT,
        }
    }
}
