pub mod config;
pub mod state;

pub use config::{Environment, RecognitionProvider, Settings};
pub use state::{AppState, AppStateError};
