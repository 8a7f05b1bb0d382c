use iced::widget::container;
use iced::{Border, Color, Shadow, Theme, Vector};

const BACKDROP_ALPHA: f32 = 0.5;
const CARD_RADIUS: f32 = 4.0;

/// Dimming layer drawn behind open panels.
pub(crate) fn backdrop(
    opacity: f32,
) -> impl Fn(&Theme) -> container::Style + 'static {
    move |_theme: &Theme| container::Style {
        background: Some(
            Color {
                a: BACKDROP_ALPHA * opacity,
                ..Color::BLACK
            }
            .into(),
        ),
        ..Default::default()
    }
}

/// Raised card used by the modal.
pub(crate) fn modal(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.text),
        border: Border {
            width: 1.0,
            color: Color {
                a: 0.2,
                ..palette.text
            },
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.26,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Full-height slide-in panel holding the nav links.
pub(crate) fn nav_drawer(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.text),
        ..Default::default()
    }
}

/// Page header bar.
pub(crate) fn header(theme: &Theme) -> container::Style {
    let palette = theme.palette();
    container::Style {
        background: Some(palette.primary.into()),
        text_color: Some(Color::WHITE),
        ..Default::default()
    }
}

/// Pricing card; the highlighted plan gets an accent border.
pub(crate) fn plan_card(
    is_highlighted: bool,
) -> impl Fn(&Theme) -> container::Style + 'static {
    move |theme: &Theme| {
        let palette = theme.palette();
        let border_color = if is_highlighted {
            palette.primary
        } else {
            Color {
                a: 0.2,
                ..palette.text
            }
        };

        container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.text),
            border: Border {
                width: if is_highlighted { 2.0 } else { 1.0 },
                color: border_color,
                radius: CARD_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}
