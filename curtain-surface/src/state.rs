use crate::phase::PanelPhase;
use crate::surface::SurfaceKind;

/// Snapshot of every surface phase owned by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UiPanelState {
    pub modal: PanelPhase,
    pub nav_drawer: PanelPhase,
    pub backdrop: PanelPhase,
}

impl UiPanelState {
    pub fn phase(&self, kind: SurfaceKind) -> PanelPhase {
        match kind {
            SurfaceKind::Modal => self.modal,
            SurfaceKind::NavDrawer => self.nav_drawer,
            SurfaceKind::Backdrop => self.backdrop,
        }
    }

    /// Whether any panel (modal or nav drawer) is shown.
    pub fn any_panel_shown(&self) -> bool {
        self.modal.is_shown() || self.nav_drawer.is_shown()
    }

    /// Whether no transition is pending on any surface.
    pub fn is_settled(&self) -> bool {
        SurfaceKind::ALL
            .iter()
            .all(|kind| self.phase(*kind).is_settled())
    }

    /// Whether the backdrop agrees with the panels: shown iff a panel is.
    pub fn is_consistent(&self) -> bool {
        self.backdrop.is_shown() == self.any_panel_shown()
    }
}
