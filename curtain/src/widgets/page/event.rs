/// Intent events handled by the page widget.
#[derive(Debug, Clone)]
pub(crate) enum PageIntent {
    ChoosePlan { index: usize },
    ConfirmCandidate,
    DiscardCandidate,
    SelectSection { index: usize },
    NavTogglePressed,
}

/// Effect events produced by the page reducer.
#[derive(Debug, Clone)]
pub(crate) enum PageEffect {
    PlanChosen { index: usize },
    NavTogglePressed,
}

/// Page event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum PageEvent {
    /// Intent event reduced by the page widget.
    Intent(PageIntent),
    /// External effect orchestrated by app-level routing.
    Effect(PageEffect),
}
