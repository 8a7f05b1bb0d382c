use std::fmt;

/// Visibility phase of a single surface.
///
/// `Opening` and `Closing` only occur while a transition timer is pending;
/// immediate modes move straight between `Closed` and `Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PanelPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

impl PanelPhase {
    /// Whether the surface is heading to, or already in, the open state.
    #[inline]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }

    #[inline]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    #[inline]
    pub fn is_closed(self) -> bool {
        self == Self::Closed
    }

    /// Whether no transition is in flight.
    #[inline]
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Closed | Self::Open)
    }
}

impl fmt::Display for PanelPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Closed => "closed",
            Self::Opening => "opening",
            Self::Open => "open",
            Self::Closing => "closing",
        };
        f.write_str(name)
    }
}
