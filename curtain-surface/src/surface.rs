use std::fmt;

use bitflags::bitflags;

/// Surfaces whose visibility the controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    Modal,
    NavDrawer,
    Backdrop,
}

impl SurfaceKind {
    pub const ALL: [Self; 3] = [Self::Modal, Self::NavDrawer, Self::Backdrop];

    /// Page element that renders this surface.
    pub fn element(self) -> PageElements {
        match self {
            Self::Modal => PageElements::MODAL,
            Self::NavDrawer => PageElements::NAV_DRAWER,
            Self::Backdrop => PageElements::BACKDROP,
        }
    }

    /// Base class name the surface is styled by.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Modal => "modal",
            Self::NavDrawer => "mobile-nav",
            Self::Backdrop => "backdrop",
        }
    }
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

bitflags! {
    /// Inventory of the elements a page provides.
    ///
    /// Not every page includes a modal or its close action; the backdrop,
    /// the nav drawer and its toggle are required.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PageElements: u8 {
        const BACKDROP     = 1;
        const MODAL        = 1 << 1;
        const NAV_DRAWER   = 1 << 2;
        const NAV_TOGGLE   = 1 << 3;
        const CLOSE_ACTION = 1 << 4;
        /// Elements a controller cannot be wired without.
        const REQUIRED     = Self::BACKDROP.bits()
                           | Self::NAV_DRAWER.bits()
                           | Self::NAV_TOGGLE.bits();
    }
}

const SELECTORS: [(PageElements, &str); 5] = [
    (PageElements::BACKDROP, ".backdrop"),
    (PageElements::MODAL, ".modal"),
    (PageElements::NAV_DRAWER, ".mobile-nav"),
    (PageElements::NAV_TOGGLE, ".toggle-button"),
    (PageElements::CLOSE_ACTION, ".modal__action--negative"),
];

impl PageElements {
    /// Selector of a single element flag, `None` for combined or empty sets.
    pub fn selector(self) -> Option<&'static str> {
        SELECTORS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, selector)| *selector)
    }

    /// First required element absent from this inventory.
    pub fn first_missing_required(self) -> Option<Self> {
        SELECTORS
            .iter()
            .map(|(flag, _)| *flag)
            .filter(|flag| Self::REQUIRED.contains(*flag))
            .find(|flag| !self.contains(*flag))
    }
}

impl Default for PageElements {
    fn default() -> Self {
        Self::all()
    }
}
