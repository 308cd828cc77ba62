use better_reading_engine::{
    Category, CategorySet, ContextFilter, Granularity, HighlightError, RuleSet, ScriptCoverage,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides the settings file location; shell variables and `~` are expanded.
pub const CONFIG_ENV: &str = "BETTER_READING_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read settings file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Persisted user settings.
///
/// Every field has a default, so a partial file only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub better_reading_mode: bool,
    pub coverage: ScriptCoverage,
    /// Replaces the live view's excluded categories when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_categories: Option<Vec<Category>>,
    pub exclude_headings: bool,
    pub granularity: Granularity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            better_reading_mode: false,
            coverage: ScriptCoverage::default(),
            excluded_categories: None,
            exclude_headings: false,
            granularity: Granularity::default(),
        }
    }
}

impl Settings {
    /// Missing file → defaults.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })
    }

    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        if let Ok(custom) = std::env::var(CONFIG_ENV) {
            let custom = PathBuf::from(custom);
            return Self::expand_path(&custom).unwrap_or(custom);
        }
        let config_dir = shellexpand::tilde("~/.config/better-reading");
        PathBuf::from(config_dir.as_ref()).join("settings.toml")
    }

    /// Flips the mode flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.better_reading_mode = !self.better_reading_mode;
        self.better_reading_mode
    }

    /// Status bar text for the current mode.
    pub fn status_label(&self) -> &'static str {
        if self.better_reading_mode {
            "BttRead Mode"
        } else {
            "Normal Mode"
        }
    }

    pub fn rule_set(&self) -> Result<RuleSet, HighlightError> {
        RuleSet::for_coverage(self.coverage)
    }

    pub fn live_filter(&self) -> ContextFilter {
        let excluded = match &self.excluded_categories {
            Some(categories) => categories.iter().copied().collect(),
            None => ContextFilter::live_default().excluded(),
        };
        ContextFilter::new(self.with_headings(excluded)).with_granularity(self.granularity)
    }

    pub fn rendered_filter(&self) -> ContextFilter {
        ContextFilter::new(self.with_headings(ContextFilter::rendered_default().excluded()))
    }

    fn with_headings(&self, excluded: CategorySet) -> CategorySet {
        if self.exclude_headings {
            excluded.with(Category::Heading)
        } else {
            excluded
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
