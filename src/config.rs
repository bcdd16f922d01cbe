use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};
use url::Url;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub submit: SubmitConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SubmitConfig {
    /// Endpoint receiving the JSON-encoded form
    pub endpoint: String,
    pub timeout_secs: u64,
    /// Delay between a successful send and the "Message sent" confirmation
    #[serde(default = "default_confirmation_delay_ms")]
    pub confirmation_delay_ms: u64,
}

impl SubmitConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }
}

fn default_confirmation_delay_ms() -> u64 {
    500
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CONTACTFORM__SUBMIT__ENDPOINT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("submit.endpoint", "http://127.0.0.1:3000/api/contact")?
            .set_default("submit.timeout_secs", 10)?
            .set_default("submit.confirmation_delay_ms", 500)?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file leaves the defaults in place
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CONTACTFORM")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.submit.endpoint.is_empty() {
            return Err("Submit endpoint must not be empty".to_string());
        }
        let endpoint = Url::parse(&self.submit.endpoint)
            .map_err(|e| format!("Submit endpoint is not a valid URL: {e}"))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(format!(
                "Submit endpoint must use http or https, got {}",
                endpoint.scheme()
            ));
        }
        if self.submit.timeout_secs == 0 {
            return Err("Submit timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}
