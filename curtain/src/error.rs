use curtain_surface::PanelError;
use thiserror::Error;

/// Fatal start-up errors.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    /// The configured page lacks an element the panels are wired to.
    #[error("page wiring failed: {0}")]
    Panels(#[from] PanelError),
    /// The UI runtime failed to start or crashed.
    #[error("ui runtime failed: {0}")]
    Ui(#[from] iced::Error),
}
