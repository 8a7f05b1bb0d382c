use thiserror::Error;

/// Errors raised while wiring or configuring panel surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    #[error("required element `{selector}` is missing from the page")]
    MissingElement { selector: &'static str },

    #[error("unknown transition mode `{0}`")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, PanelError>;
