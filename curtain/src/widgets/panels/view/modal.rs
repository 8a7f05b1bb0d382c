use curtain_surface::Trigger;
use iced::widget::{Row, button, column, container, opaque, text};
use iced::{Element, Length, Theme};

use crate::style;
use crate::widgets::panels::PanelsIntent;

const MODAL_WIDTH: f32 = 420.0;
const MODAL_PADDING: f32 = 24.0;
const MODAL_SPACING: f32 = 16.0;
const ACTION_SPACING: f32 = 8.0;

/// Props for the plan confirmation modal.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ModalProps<'a> {
    pub(crate) plan_title: Option<&'a str>,
    pub(crate) has_close_action: bool,
}

/// Render the centered confirmation dialog.
pub(crate) fn view<'a>(
    props: ModalProps<'a>,
) -> Element<'a, PanelsIntent, Theme, iced::Renderer> {
    let heading = text("Do you want to continue?").size(20);
    let detail = match props.plan_title {
        Some(title) => text(format!("You picked the {title} plan.")),
        None => text("No plan picked yet."),
    };

    let mut actions = Row::new().spacing(ACTION_SPACING);
    if props.has_close_action {
        actions = actions.push(
            button(text("No"))
                .style(button::danger)
                .on_press(PanelsIntent::Trigger(Trigger::CloseAction)),
        );
    }
    actions = actions.push(
        button(text("Yes"))
            .style(button::success)
            .on_press(PanelsIntent::ConfirmPlan),
    );

    let content = column![heading, detail, actions].spacing(MODAL_SPACING);
    let card = container(content)
        .padding(MODAL_PADDING)
        .width(Length::Fixed(MODAL_WIDTH))
        .style(style::modal);

    container(opaque(card)).center(Length::Fill).into()
}
