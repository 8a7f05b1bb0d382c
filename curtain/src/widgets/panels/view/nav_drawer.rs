use iced::widget::{Column, button, container, opaque, text};
use iced::{Element, Length, Theme, alignment};

use crate::style;
use crate::widgets::panels::PanelsIntent;

const DRAWER_WIDTH: f32 = 260.0;
const DRAWER_PADDING: f32 = 16.0;
const LINK_SPACING: f32 = 4.0;

/// Props for the mobile nav drawer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavDrawerProps<'a> {
    pub(crate) links: &'a [String],
    pub(crate) active: Option<usize>,
}

/// Render the drawer pinned to the left edge.
pub(crate) fn view<'a>(
    props: NavDrawerProps<'a>,
) -> Element<'a, PanelsIntent, Theme, iced::Renderer> {
    let links = props.links.iter().enumerate().map(|(index, link)| {
        let link_style: fn(&Theme, button::Status) -> button::Style =
            if props.active == Some(index) {
                button::primary
            } else {
                button::text
            };
        button(text(link.as_str()))
            .width(Length::Fill)
            .style(link_style)
            .on_press(PanelsIntent::SelectNavLink { index })
            .into()
    });

    let drawer = container(Column::with_children(links).spacing(LINK_SPACING))
        .padding(DRAWER_PADDING)
        .width(Length::Fixed(DRAWER_WIDTH))
        .height(Length::Fill)
        .style(style::nav_drawer);

    container(opaque(drawer))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .into()
}
