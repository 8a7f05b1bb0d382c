use iced::widget::{Row, Space, button, container, text};
use iced::{Element, Length, Theme, alignment};

use crate::settings::PlanData;
use crate::style;
use crate::widgets::page::event::PageIntent;

const HEADER_HEIGHT: f32 = 56.0;
const HEADER_PADDING: f32 = 12.0;
const HEADER_SPACING: f32 = 16.0;

/// Props for the page header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) confirmed: Option<&'a PlanData>,
    pub(crate) active_section: Option<&'a str>,
}

pub(crate) fn view<'a>(
    props: HeaderProps<'a>,
) -> Element<'a, PageIntent, Theme, iced::Renderer> {
    let toggle = button(text("Menu"))
        .style(button::secondary)
        .on_press(PageIntent::NavTogglePressed);

    let mut content = Row::new()
        .spacing(HEADER_SPACING)
        .align_y(alignment::Vertical::Center)
        .push(toggle)
        .push(text("curtain hosting").size(22));
    if let Some(section) = props.active_section {
        content = content.push(text(section));
    }

    let status = match props.confirmed {
        Some(plan) => text(format!("Your plan: {}", plan.title)),
        None => text("No plan chosen"),
    };
    content = content.push(Space::new().width(Length::Fill)).push(status);

    container(content)
        .padding(HEADER_PADDING)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .align_y(alignment::Vertical::Center)
        .style(style::header)
        .into()
}
