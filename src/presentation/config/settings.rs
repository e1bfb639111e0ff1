use config::{Config, File, FileFormat};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub recognition: RecognitionSettings,
    pub logging: LoggingSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionSettings {
    pub provider: RecognitionProvider,
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecognitionProvider {
    Gemini,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    pub output_dir: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

const DEFAULTS: &str = r#"
[recognition]
provider = "gemini"
model = "gemini-3-flash-preview"
base_url = "https://generativelanguage.googleapis.com"
timeout_secs = 300

[logging]
level = "info"
enable_json = false

[export]
output_dir = "exports"
"#;

impl Settings {
    /// Defaults, then `appsettings.{environment}` if present, then `APP_*`
    /// environment variables (`APP_RECOGNITION__API_KEY`, ...).
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(File::with_name(&environment.config_file_name()).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(configuration.try_deserialize()?)
    }

    /// Defaults overlaid with a TOML document.
    pub fn from_toml(overrides: &str) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(File::from_str(overrides, FileFormat::Toml))
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}
