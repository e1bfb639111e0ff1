use crate::presentation::config::LoggingSettings;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub default_directives: String,
}

impl TracingConfig {
    pub fn from_settings(environment: &str, logging: &LoggingSettings) -> Self {
        Self {
            environment: environment.to_string(),
            json_format: logging.enable_json,
            default_directives: format!("{},cjk_lens=debug", logging.level),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_directives: "info,cjk_lens=debug".to_string(),
        }
    }
}
