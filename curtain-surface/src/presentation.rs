//! Pure mapping from surface phase to rendered attributes.

use crate::config::TransitionMode;
use crate::phase::PanelPhase;

/// Class name that marks a surface as open; stylesheets key the visible
/// (and transitioned-to) appearance on it.
pub const OPEN_CLASS: &str = "open";

/// Inline `display` value applied to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Display {
    /// No inline value; the stylesheet decides.
    #[default]
    Unset,
    Initial,
    Block,
    None,
}

impl Display {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Initial => "initial",
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

/// Attributes a surface renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Presentation {
    pub open_class: bool,
    pub display: Display,
}

impl Presentation {
    /// Whether the surface takes part in layout at all.
    ///
    /// Surfaces are hidden by the stylesheet unless an inline display or
    /// the `open` class says otherwise.
    pub fn is_rendered(self) -> bool {
        match self.display {
            Display::Block | Display::Initial => true,
            Display::None => false,
            Display::Unset => self.open_class,
        }
    }

    /// Whether the surface is rendered in its fully visible appearance.
    pub fn is_visible(self) -> bool {
        self.is_rendered()
            && (self.open_class || self.display == Display::Initial)
    }

    /// Opacity the surface is drawn with: transitioned surfaces sit at `0.0`
    /// while `display: block` is set without the `open` class.
    pub fn opacity(self) -> f32 {
        if self.is_visible() { 1.0 } else { 0.0 }
    }

    /// Full class attribute for an element with `base` class.
    pub fn class_attr(self, base: &str) -> String {
        if self.open_class {
            format!("{base} {OPEN_CLASS}")
        } else {
            base.to_string()
        }
    }

    /// Inline style attribute, `None` when no inline display is set.
    pub fn style_attr(self) -> Option<String> {
        match self.display {
            Display::Unset => None,
            display => Some(format!("display: {}", display.as_css())),
        }
    }
}

/// Map a surface phase to its presentation under `mode`.
pub fn present(phase: PanelPhase, mode: TransitionMode) -> Presentation {
    match mode {
        TransitionMode::Immediate => Presentation {
            open_class: phase.is_shown(),
            display: Display::Unset,
        },
        TransitionMode::InlineDisplay => Presentation {
            open_class: false,
            display: if phase.is_shown() {
                Display::Initial
            } else {
                Display::Unset
            },
        },
        TransitionMode::Transitioned => match phase {
            PanelPhase::Closed => Presentation {
                open_class: false,
                display: Display::None,
            },
            PanelPhase::Opening | PanelPhase::Closing => Presentation {
                open_class: false,
                display: Display::Block,
            },
            PanelPhase::Open => Presentation {
                open_class: true,
                display: Display::Block,
            },
        },
    }
}
