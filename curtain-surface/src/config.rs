use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::PanelError;

/// Delay before the `open` class is applied, so the renderer registers the
/// initial `display: block` state first.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(10);
/// Delay before `display: none` is applied after a close; matches the CSS
/// transition duration.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(200);

/// How surfaces switch between closed and open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionMode {
    /// Toggle the `open` class synchronously.
    Immediate,
    /// Set inline `display: initial` on open and clear it on close.
    InlineDisplay,
    /// Set `display: block` first, then apply the class after a reveal
    /// delay; on close drop the class and hide after a hide delay.
    #[default]
    Transitioned,
}

impl TransitionMode {
    #[inline]
    pub fn is_transitioned(self) -> bool {
        self == Self::Transitioned
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::InlineDisplay => "inline-display",
            Self::Transitioned => "transitioned",
        }
    }
}

impl fmt::Display for TransitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionMode {
    type Err = PanelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "immediate" => Ok(Self::Immediate),
            "inline-display" | "inline_display" => Ok(Self::InlineDisplay),
            "transitioned" => Ok(Self::Transitioned),
            _ => Err(PanelError::UnknownMode(value.to_string())),
        }
    }
}

/// Transition policy shared by every surface of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub mode: TransitionMode,
    pub reveal_delay: Duration,
    pub hide_delay: Duration,
}

impl TransitionConfig {
    pub fn new(mode: TransitionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn immediate() -> Self {
        Self::new(TransitionMode::Immediate)
    }

    pub fn with_delays(mut self, reveal: Duration, hide: Duration) -> Self {
        self.reveal_delay = reveal;
        self.hide_delay = hide;
        self
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            mode: TransitionMode::default(),
            reveal_delay: DEFAULT_REVEAL_DELAY,
            hide_delay: DEFAULT_HIDE_DELAY,
        }
    }
}
