use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub share: ShareConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let pkm_base_url = env::var("APP_PKM_SHARE_URL")
            .unwrap_or_else(|_| "https://record-dna.example.com".to_string());
        let ai_base_url = env::var("APP_AI_SHARE_URL")
            .unwrap_or_else(|_| "https://record-dna.example.com/ai-test".to_string());
        validate_base_url("APP_PKM_SHARE_URL", &pkm_base_url)?;
        validate_base_url("APP_AI_SHARE_URL", &ai_base_url)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            share: ShareConfig {
                pkm_base_url,
                ai_base_url,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Base URLs share links are built against, one per quiz surface.
#[derive(Debug, Clone)]
pub struct ShareConfig {
    pub pkm_base_url: String,
    pub ai_base_url: String,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn validate_base_url(variable: &'static str, value: &str) -> Result<(), ConfigError> {
    // The codec owns the query string; a base URL carrying one would collide
    // with the `r` parameter.
    if !(value.starts_with("http://") || value.starts_with("https://")) || value.contains('?') {
        return Err(ConfigError::InvalidBaseUrl {
            variable,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidBaseUrl {
        variable: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBaseUrl { variable, value } => {
                write!(
                    f,
                    "{variable} must be an http(s) URL without a query string, got '{value}'"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
