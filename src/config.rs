use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub table: TableSettings,
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseSettings {
    pub url: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableSettings {
    #[serde(default = "default_mentees_table")]
    pub mentees: String,
    #[serde(default = "default_mentors_table")]
    pub mentors: String,
    #[serde(default = "default_matches_table")]
    pub matches: String,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            mentees: default_mentees_table(),
            mentors: default_mentors_table(),
            matches: default_matches_table(),
        }
    }
}

fn default_mentees_table() -> String {
    "mentees".to_string()
}
fn default_mentors_table() -> String {
    "mentors".to_string()
}
fn default_matches_table() -> String {
    "matches".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_specialty_weight")]
    pub specialty: f64,
    #[serde(default = "default_help_areas_weight")]
    pub help_areas: f64,
    #[serde(default = "default_timeline_weight")]
    pub timeline: f64,
    #[serde(default = "default_mentorship_style_weight")]
    pub mentorship_style: f64,
    #[serde(default = "default_communication_weight")]
    pub communication: f64,
    #[serde(default = "default_degree_track_weight")]
    pub degree_track: f64,
    #[serde(default = "default_background_weight")]
    pub background: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            specialty: default_specialty_weight(),
            help_areas: default_help_areas_weight(),
            timeline: default_timeline_weight(),
            mentorship_style: default_mentorship_style_weight(),
            communication: default_communication_weight(),
            degree_track: default_degree_track_weight(),
            background: default_background_weight(),
        }
    }
}

fn default_specialty_weight() -> f64 {
    9.0
}
fn default_help_areas_weight() -> f64 {
    9.0
}
fn default_timeline_weight() -> f64 {
    7.0
}
fn default_mentorship_style_weight() -> f64 {
    7.0
}
fn default_communication_weight() -> f64 {
    7.0
}
fn default_degree_track_weight() -> f64 {
    6.0
}
fn default_background_weight() -> f64 {
    6.0
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

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides
    /// earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with MEDBRIDGE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with MEDBRIDGE_)
            // e.g., MEDBRIDGE_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("MEDBRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MEDBRIDGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Overlay the well-known Supabase environment variables
///
/// SUPABASE_URL / SUPABASE_API_KEY take effect without the MEDBRIDGE_
/// prefix, matching how the hosted client is configured.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let supabase_url = env::var("SUPABASE_URL")
        .or_else(|_| env::var("MEDBRIDGE_SUPABASE__URL"))
        .ok();
    let supabase_api_key = env::var("SUPABASE_API_KEY")
        .or_else(|_| env::var("MEDBRIDGE_SUPABASE__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = supabase_url {
        builder = builder.set_override("supabase.url", url)?;
    }
    if let Some(api_key) = supabase_api_key {
        builder = builder.set_override("supabase.api_key", api_key)?;
    }

    builder.build()
}
