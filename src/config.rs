use std::path::Path;

use crate::error::ConfigError;

/// Search depth per difficulty level, and pacing for computer moves.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub easy_depth: u32,
    pub medium_depth: u32,
    pub hard_depth: u32,
    /// Pause between computer moves in AI vs AI, in milliseconds.
    pub move_delay_ms: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            easy_depth: 1,
            medium_depth: 3,
            hard_depth: 5,
            move_delay_ms: 500,
        }
    }
}

/// Game-session defaults.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pick the starting player at random; Red starts when false.
    pub random_start: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { random_start: true }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, depth) in [
            ("ai.easy_depth", self.ai.easy_depth),
            ("ai.medium_depth", self.ai.medium_depth),
            ("ai.hard_depth", self.ai.hard_depth),
        ] {
            if depth == 0 {
                return Err(ConfigError::Validation(format!("{name} must be >= 1")));
            }
            // The search is full-width; deeper than this stops being
            // interactive.
            if depth > 10 {
                return Err(ConfigError::Validation(format!("{name} must be <= 10")));
            }
        }
        Ok(())
    }
}
