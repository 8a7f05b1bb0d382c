use crate::surface::PageElements;

/// Click sources wired to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// A plan-selection button (`.plan button`) was pressed.
    PlanSelected { plan: usize },
    /// The modal's negative action was pressed.
    CloseAction,
    /// The backdrop was clicked.
    Backdrop,
    /// The nav toggle button was pressed.
    NavToggle,
}

impl Trigger {
    /// Element the trigger originates from, `None` for plan buttons which
    /// are not part of the inventory.
    pub fn source(self) -> Option<PageElements> {
        match self {
            Self::PlanSelected { .. } => None,
            Self::CloseAction => Some(PageElements::CLOSE_ACTION),
            Self::Backdrop => Some(PageElements::BACKDROP),
            Self::NavToggle => Some(PageElements::NAV_TOGGLE),
        }
    }
}
