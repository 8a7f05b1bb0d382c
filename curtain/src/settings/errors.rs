use thiserror::Error;

/// Errors emitted while reading the settings file.
#[derive(Debug, Error)]
pub(crate) enum SettingsError {
    /// Filesystem operation failed.
    #[error("settings IO failed")]
    Io(#[from] std::io::Error),
}
