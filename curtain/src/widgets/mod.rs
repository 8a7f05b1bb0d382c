pub(crate) mod page;
pub(crate) mod panels;

pub(crate) struct Widgets {
    pub(crate) page: page::PageWidget,
    pub(crate) panels: panels::PanelsWidget,
}
