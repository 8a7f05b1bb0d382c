pub(crate) mod header;
pub(crate) mod plans;

use iced::widget::column;
use iced::{Element, Length, Theme};

use super::event::PageIntent;
use super::model::PageViewModel;

/// Props for the page view aggregator.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageViewProps<'a> {
    pub(crate) vm: PageViewModel<'a>,
}

/// Render the header above the plan cards.
pub(crate) fn view<'a>(
    props: PageViewProps<'a>,
) -> Element<'a, PageIntent, Theme, iced::Renderer> {
    let header = header::view(header::HeaderProps {
        confirmed: props.vm.confirmed,
        active_section: props
            .vm
            .active_section
            .and_then(|index| props.vm.nav_links.get(index))
            .map(String::as_str),
    });
    let plans = plans::view(plans::PlansProps {
        plans: props.vm.plans,
        candidate: props.vm.candidate,
    });

    column![header, plans]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
