use crate::core::matcher::DEFAULT_PARALLEL_MIN_CANDIDATES;
use crate::models::FeatureImportance;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Threshold used when a request does not carry one
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,
    /// Reject thresholds outside [0, 1] instead of passing them through
    #[serde(default)]
    pub validate_threshold: bool,
    #[serde(default = "default_parallel_min_candidates")]
    pub parallel_min_candidates: usize,
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_threshold: default_threshold(),
            validate_threshold: false,
            parallel_min_candidates: default_parallel_min_candidates(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_threshold() -> f64 { 0.5 }
fn default_parallel_min_candidates() -> usize { DEFAULT_PARALLEL_MIN_CANDIDATES }
fn default_max_candidates() -> usize { 10_000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    /// Per-feature weight overrides, keyed by feature name
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct (plus `PORT` for the server port)
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with NAMEMATCH_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_default("server.port", port)?;
        }

        let settings: Settings = builder
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., NAMEMATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Default weights with the configured overrides applied
    pub fn feature_importance(&self) -> Result<FeatureImportance, ConfigError> {
        FeatureImportance::default()
            .with_overrides(
                self.scoring
                    .weights
                    .iter()
                    .map(|(name, weight)| (name.as_str(), *weight)),
            )
            .map_err(|e| ConfigError::Message(format!("scoring.weights: {}", e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.feature_importance()?;

        if !self.matching.default_threshold.is_finite() {
            return Err(ConfigError::Message(
                "matching.default_threshold must be a finite number".to_string(),
            ));
        }

        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("NAMEMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeatureKey;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.matching.default_threshold, 0.5);
        assert!(!settings.matching.validate_threshold);
        assert_eq!(settings.matching.max_candidates, 10_000);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_weight_overrides() {
        let mut settings = Settings::default();
        settings.scoring.weights.insert("common_bigrams".to_string(), 0.01);

        let importance = settings.feature_importance().unwrap();
        assert_eq!(importance.get(FeatureKey::CommonBigrams), Some(0.01));
        assert_eq!(importance.get(FeatureKey::LevenshteinRatio), Some(0.226));
    }

    #[test]
    fn test_invalid_weight_overrides_rejected() {
        let mut settings = Settings::default();
        settings.scoring.weights.insert("soundex".to_string(), 0.1);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.scoring.weights.insert("len_diff".to_string(), -1.0);
        assert!(settings.validate().is_err());
    }
}
