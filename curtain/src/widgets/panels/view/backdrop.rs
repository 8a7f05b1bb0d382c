use curtain_surface::{Presentation, Trigger};
use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length, Theme};

use crate::style;
use crate::widgets::panels::PanelsIntent;

/// Props for the backdrop layer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BackdropProps {
    pub(crate) presentation: Presentation,
}

/// Render the click-catching dim layer. A transparent backdrop still
/// catches clicks while it fades.
pub(crate) fn view<'a>(
    props: BackdropProps,
) -> Element<'a, PanelsIntent, Theme, iced::Renderer> {
    let layer = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::backdrop(props.presentation.opacity()));

    mouse_area(layer)
        .on_press(PanelsIntent::Trigger(Trigger::Backdrop))
        .into()
}
