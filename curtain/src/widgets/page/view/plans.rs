use iced::widget::{Column, Row, button, column, container, text};
use iced::{Element, Length, Theme, alignment};

use crate::settings::PlanData;
use crate::style;
use crate::widgets::page::event::PageIntent;

const CARD_WIDTH: f32 = 240.0;
const CARD_PADDING: f32 = 20.0;
const CARD_SPACING: f32 = 24.0;
const SECTION_PADDING: f32 = 32.0;

/// Props for the plan card row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PlansProps<'a> {
    pub(crate) plans: &'a [PlanData],
    pub(crate) candidate: Option<&'a PlanData>,
}

/// Render one card per plan, each with its own choose button.
pub(crate) fn view<'a>(
    props: PlansProps<'a>,
) -> Element<'a, PageIntent, Theme, iced::Renderer> {
    let cards = props
        .plans
        .iter()
        .enumerate()
        .map(|(index, plan)| plan_card(index, plan, props.candidate));

    let heading = text("Choose your plan").size(28);
    let row = Row::with_children(cards).spacing(CARD_SPACING);

    container(
        column![heading, row]
            .spacing(CARD_SPACING)
            .align_x(alignment::Horizontal::Center),
    )
    .padding(SECTION_PADDING)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn plan_card<'a>(
    index: usize,
    plan: &'a PlanData,
    candidate: Option<&'a PlanData>,
) -> Element<'a, PageIntent, Theme, iced::Renderer> {
    let features = plan
        .features
        .iter()
        .map(|feature| text(feature.as_str()).into());

    let label = if candidate == Some(plan) {
        "Selected"
    } else {
        "Choose plan"
    };

    let content = column![
        text(plan.title.as_str()).size(22),
        text(plan.price.as_str()).size(18),
        Column::with_children(features).spacing(4),
        button(text(label))
            .style(button::primary)
            .on_press(PageIntent::ChoosePlan { index }),
    ]
    .spacing(12)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .padding(CARD_PADDING)
        .width(Length::Fixed(CARD_WIDTH))
        .style(style::plan_card(plan.highlighted))
        .into()
}
