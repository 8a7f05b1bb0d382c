use curtain_surface::Presentation;

/// View model for the panels widget.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PanelsViewModel {
    pub(crate) modal: Presentation,
    pub(crate) nav_drawer: Presentation,
    pub(crate) backdrop: Presentation,
    pub(crate) has_close_action: bool,
}
