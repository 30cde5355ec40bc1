use thiserror::Error;

/// Errors from the engine's configuration-loading surface. The computation
/// path itself is total and never raises: degenerate settings (disabled,
/// zero period, period longer than the series) produce empty series instead.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("Settings format error: {source}")]
    SettingsFormatError {
        #[from]
        source: serde_json::Error,
    },
}
