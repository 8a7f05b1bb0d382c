use curtain_surface::{TimerTicket, Trigger};

/// Intent events handled by the panels widget.
#[derive(Debug, Clone)]
pub(crate) enum PanelsIntent {
    /// A click on one of the wired page elements.
    Trigger(Trigger),
    /// The modal's positive action was pressed.
    ConfirmPlan,
    /// A link inside the nav drawer was pressed.
    SelectNavLink { index: usize },
    /// A deferred transition callback fired.
    TimerElapsed(TimerTicket),
}

/// Effect events produced by the panels reducer.
#[derive(Debug, Clone)]
pub(crate) enum PanelsEffect {
    PlanConfirmed,
    ModalDismissed,
    NavLinkSelected { index: usize },
}

/// Panels event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PanelsEvent {
    /// Intent event reduced by the panels widget.
    Intent(PanelsIntent),
    /// External effect orchestrated by app-level routing.
    Effect(PanelsEffect),
}
