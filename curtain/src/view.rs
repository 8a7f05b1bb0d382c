use iced::widget::Stack;
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::widgets::page::{self, PageEvent};
use crate::widgets::panels::view::{backdrop, modal, nav_drawer};
use crate::widgets::panels::{PanelsEvent, PanelsIntent};

/// Render the page with the panel layers stacked on top of it.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let page_vm = app.widgets.page.vm();
    let panels_vm = app.widgets.panels.vm();

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![
            page::view::view(page::view::PageViewProps { vm: page_vm })
            .map(|intent| AppEvent::Page(PageEvent::Intent(intent))),
        ];

    if panels_vm.backdrop.is_rendered() {
        layers.push(
            backdrop::view(backdrop::BackdropProps {
                presentation: panels_vm.backdrop,
            })
            .map(panels_intent),
        );
    }

    if panels_vm.nav_drawer.is_visible() {
        layers.push(
            nav_drawer::view(nav_drawer::NavDrawerProps {
                links: page_vm.nav_links,
                active: page_vm.active_section,
            })
            .map(panels_intent),
        );
    }

    if panels_vm.modal.is_visible() {
        layers.push(
            modal::view(modal::ModalProps {
                plan_title: page_vm.candidate.map(|plan| plan.title.as_str()),
                has_close_action: panels_vm.has_close_action,
            })
            .map(panels_intent),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn panels_intent(intent: PanelsIntent) -> AppEvent {
    AppEvent::Panels(PanelsEvent::Intent(intent))
}
