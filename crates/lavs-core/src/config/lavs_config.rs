//! Top-level LAVS configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::fusion_config::DEFAULT_PROFILE;
use super::{BehavioralConfig, FusionConfig, ProducerConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::types::ContentType;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LAVS_*`)
/// 3. Project config (`lavs.toml` in project root)
/// 4. User config (`~/.lavs/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct LavsConfig {
    pub fusion: FusionConfig,
    pub behavioral: BehavioralConfig,
    pub producers: ProducerConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub neutral_prior: Option<f64>,
    pub max_top_signals: Option<usize>,
    pub producers_parallel: Option<bool>,
}

impl LavsConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "ignoring unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &LavsConfig) -> Result<(), ConfigError> {
        for (profile, weights) in &config.fusion.weights {
            let known = profile == DEFAULT_PROFILE
                || ContentType::ALL.iter().any(|ct| ct.name() == profile.as_str());
            if !known {
                return Err(ConfigError::InvalidValue {
                    field: format!("fusion.weights.{profile}"),
                    message: "profile must be one of default, image, video, audio, url"
                        .to_string(),
                });
            }
            if !weights.is_valid() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("fusion.weights.{profile}"),
                    message: "weights must be finite and non-negative".to_string(),
                });
            }
        }

        let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
        if let Some(prior) = config.fusion.neutral_prior {
            if !in_range(prior) {
                return Err(ConfigError::ValidationFailed {
                    field: "fusion.neutral_prior".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        let real_max = config.fusion.effective_real_max_risk();
        let suspicious_max = config.fusion.effective_suspicious_max_risk();
        if !in_range(real_max) || !in_range(suspicious_max) {
            return Err(ConfigError::ValidationFailed {
                field: "fusion.real_max_risk".to_string(),
                message: "band thresholds must be between 0 and 100".to_string(),
            });
        }
        if real_max >= suspicious_max {
            return Err(ConfigError::ValidationFailed {
                field: "fusion.suspicious_max_risk".to_string(),
                message: "must be greater than fusion.real_max_risk".to_string(),
            });
        }

        if let Some(threshold) = config.behavioral.variance_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "behavioral.variance_threshold".to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
        }
        if let Some(penalty) = config.behavioral.penalty {
            if !(0..=100).contains(&penalty) {
                return Err(ConfigError::ValidationFailed {
                    field: "behavioral.penalty".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }

        if let Some(penalty) = config.producers.failure_penalty {
            if !in_range(penalty) {
                return Err(ConfigError::ValidationFailed {
                    field: "producers.failure_penalty".to_string(),
                    message: "must be between 0 and 100".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.lavs/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut LavsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LavsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut LavsConfig, other: &LavsConfig) {
        // Fusion
        for (profile, weights) in &other.fusion.weights {
            base.fusion.weights.insert(profile.clone(), *weights);
        }
        if other.fusion.neutral_prior.is_some() {
            base.fusion.neutral_prior = other.fusion.neutral_prior;
        }
        if other.fusion.real_max_risk.is_some() {
            base.fusion.real_max_risk = other.fusion.real_max_risk;
        }
        if other.fusion.suspicious_max_risk.is_some() {
            base.fusion.suspicious_max_risk = other.fusion.suspicious_max_risk;
        }
        if other.fusion.max_top_signals.is_some() {
            base.fusion.max_top_signals = other.fusion.max_top_signals;
        }

        // Behavioral
        if other.behavioral.variance_threshold.is_some() {
            base.behavioral.variance_threshold = other.behavioral.variance_threshold;
        }
        if other.behavioral.penalty.is_some() {
            base.behavioral.penalty = other.behavioral.penalty;
        }
        if other.behavioral.min_regularity_mentions.is_some() {
            base.behavioral.min_regularity_mentions = other.behavioral.min_regularity_mentions;
        }

        // Producers
        if other.producers.failure_penalty.is_some() {
            base.producers.failure_penalty = other.producers.failure_penalty;
        }
        if other.producers.parallel.is_some() {
            base.producers.parallel = other.producers.parallel;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LAVS_FUSION_NEUTRAL_PRIOR`, `LAVS_BEHAVIORAL_PENALTY`, etc.
    fn apply_env_overrides(config: &mut LavsConfig) {
        if let Some(v) = env_parse::<f64>("LAVS_FUSION_NEUTRAL_PRIOR") {
            config.fusion.neutral_prior = Some(v);
        }
        if let Some(v) = env_parse::<f64>("LAVS_FUSION_REAL_MAX_RISK") {
            config.fusion.real_max_risk = Some(v);
        }
        if let Some(v) = env_parse::<f64>("LAVS_FUSION_SUSPICIOUS_MAX_RISK") {
            config.fusion.suspicious_max_risk = Some(v);
        }
        if let Some(v) = env_parse::<usize>("LAVS_FUSION_MAX_TOP_SIGNALS") {
            config.fusion.max_top_signals = Some(v);
        }
        if let Some(v) = env_parse::<f64>("LAVS_BEHAVIORAL_VARIANCE_THRESHOLD") {
            config.behavioral.variance_threshold = Some(v);
        }
        if let Some(v) = env_parse::<i64>("LAVS_BEHAVIORAL_PENALTY") {
            config.behavioral.penalty = Some(v);
        }
        if let Some(v) = env_parse::<f64>("LAVS_PRODUCERS_FAILURE_PENALTY") {
            config.producers.failure_penalty = Some(v);
        }
        if let Some(v) = env_parse::<bool>("LAVS_PRODUCERS_PARALLEL") {
            config.producers.parallel = Some(v);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut LavsConfig, cli: &CliOverrides) {
        if let Some(v) = cli.neutral_prior {
            config.fusion.neutral_prior = Some(v);
        }
        if let Some(v) = cli.max_top_signals {
            config.fusion.max_top_signals = Some(v);
        }
        if let Some(v) = cli.producers_parallel {
            config.producers.parallel = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse an environment variable, ignoring unset or unparseable values.
fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse::<T>().ok())
}

/// Returns the user-level config directory: `~/.lavs/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".lavs"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
