use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::theme::ThemeProps;

const CARD_RADIUS: f32 = 8.0;
const CONTROL_RADIUS: f32 = 6.0;

/// White rounded panel used for page bodies and dialogs.
pub(crate) fn card_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = *theme.theme.iced_palette();
    move |_theme: &Theme| container::Style {
        background: Some(palette.surface.into()),
        text_color: Some(palette.text),
        border: Border {
            width: 1.0,
            color: palette.border_neutral,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.12,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind a modal dialog.
pub(crate) fn backdrop_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme) -> container::Style + 'static {
    let palette = *theme.theme.iced_palette();
    move |_theme: &Theme| container::Style {
        background: Some(palette.overlay.into()),
        ..Default::default()
    }
}

/// Filled brand button.
pub(crate) fn primary_button_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme, button::Status) -> button::Style + 'static {
    let palette = *theme.theme.iced_palette();
    move |_theme: &Theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                palette.primary_hover
            },
            _ => palette.primary,
        };
        button::Style {
            background: Some(background.into()),
            text_color: palette.surface,
            border: Border {
                radius: CONTROL_RADIUS.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Outlined brand button for secondary actions.
pub(crate) fn outline_button_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme, button::Status) -> button::Style + 'static {
    let palette = *theme.theme.iced_palette();
    move |_theme: &Theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: 0.08,
                ..palette.primary
            },
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(background.into()),
            text_color: palette.primary,
            border: Border {
                width: 1.0,
                color: palette.primary,
                radius: CONTROL_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

/// Borderless icon button.
pub(crate) fn ghost_button_style()
-> impl Fn(&Theme, button::Status) -> button::Style + 'static {
    |_theme: &Theme, _status| button::Style {
        background: None,
        border: Border::default(),
        ..Default::default()
    }
}

pub(crate) fn text_input_style(
    theme: ThemeProps<'_>,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style + 'static {
    let palette = *theme.theme.iced_palette();
    move |base: &Theme, status| {
        let mut style = text_input::default(base, status);
        style.background = palette.surface.into();
        style.border = Border {
            width: 1.0,
            color: match status {
                text_input::Status::Focused { .. } => palette.primary,
                _ => palette.border_neutral,
            },
            radius: CONTROL_RADIUS.into(),
        };
        style.value = palette.text;
        style.placeholder = palette.text_muted;
        style.selection = Color {
            a: 0.3,
            ..palette.primary
        };
        style
    }
}
