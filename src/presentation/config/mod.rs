mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExportSettings, LoggingSettings, RecognitionProvider, RecognitionSettings, Settings,
    SettingsError,
};
