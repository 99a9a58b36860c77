use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{ScoreCaps, ScoringConfig, ScoringWeights};

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
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
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
    /// Upper bound on candidates scored per ranking request
    #[serde(default = "default_max_candidates")]
    pub max_candidates: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_candidates: default_max_candidates(),
        }
    }
}

fn default_limit() -> u32 { 20 }
fn default_max_limit() -> u32 { 100 }
fn default_max_candidates() -> usize { 5000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub caps: CapsConfig,
}

impl ScoringSettings {
    /// Build the engine's weights/caps structure
    pub fn to_scoring_config(&self) -> ScoringConfig {
        ScoringConfig {
            weights: ScoringWeights {
                skill_match: self.weights.skill_match,
                mutual_benefit: self.weights.mutual_benefit,
                reputation: self.weights.reputation,
                activity: self.weights.activity,
                location: self.weights.location,
            },
            caps: ScoreCaps {
                skill_match: self.caps.skill_match,
                mutual_benefit: self.caps.mutual_benefit,
                reputation: self.caps.reputation,
                activity: self.caps.activity,
                location: self.caps.location,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skill_match_weight")]
    pub skill_match: f64,
    #[serde(default = "default_mutual_benefit_weight")]
    pub mutual_benefit: f64,
    #[serde(default = "default_reputation_weight")]
    pub reputation: f64,
    #[serde(default = "default_activity_weight")]
    pub activity: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skill_match: default_skill_match_weight(),
            mutual_benefit: default_mutual_benefit_weight(),
            reputation: default_reputation_weight(),
            activity: default_activity_weight(),
            location: default_location_weight(),
        }
    }
}

fn default_skill_match_weight() -> f64 { 0.40 }
fn default_mutual_benefit_weight() -> f64 { 0.30 }
fn default_reputation_weight() -> f64 { 0.15 }
fn default_activity_weight() -> f64 { 0.10 }
fn default_location_weight() -> f64 { 0.05 }

#[derive(Debug, Clone, Deserialize)]
pub struct CapsConfig {
    #[serde(default = "default_skill_match_cap")]
    pub skill_match: f64,
    #[serde(default = "default_mutual_benefit_cap")]
    pub mutual_benefit: f64,
    #[serde(default = "default_ten_point_cap")]
    pub reputation: f64,
    #[serde(default = "default_ten_point_cap")]
    pub activity: f64,
    #[serde(default = "default_ten_point_cap")]
    pub location: f64,
}

impl Default for CapsConfig {
    fn default() -> Self {
        Self {
            skill_match: default_skill_match_cap(),
            mutual_benefit: default_mutual_benefit_cap(),
            reputation: default_ten_point_cap(),
            activity: default_ten_point_cap(),
            location: default_ten_point_cap(),
        }
    }
}

fn default_skill_match_cap() -> f64 { 20.0 }
fn default_mutual_benefit_cap() -> f64 { 25.0 }
fn default_ten_point_cap() -> f64 { 10.0 }

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
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SKILLSWAP_)
    /// 5. Plain PORT, as set by most container platforms
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SKILLSWAP__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SKILLSWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        substitute_env_vars(settings)?.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SKILLSWAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn scoring_config(&self) -> ScoringConfig {
        self.scoring.to_scoring_config()
    }
}

/// Apply a plain PORT environment override on top of loaded settings
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
        builder = builder.set_override("server.port", i64::from(port))?;
    }

    builder.build()
}
