use iced::widget::{MouseArea, Space, button, container, row, svg, text};
use iced::{
    Border, Color, Element, Length, Shadow, Theme, Vector, alignment, mouse,
};

use super::super::event::ChromeIntent;
use super::super::model::ChromeViewModel;
use crate::shared::i18n::{Language, translate};
use crate::shared::icons::LOGO;
use crate::shared::theme::ThemeProps;

pub(crate) const HEADER_HEIGHT: f32 = 64.0;
const HEADER_HORIZONTAL_PADDING: f32 = 24.0;
const LOGO_SIZE: f32 = 32.0;
const TITLE_SIZE: f32 = 20.0;
const LANGUAGE_BUTTON_WIDTH: f32 = 44.0;
const LANGUAGE_BUTTON_HEIGHT: f32 = 28.0;

/// Props for rendering the header.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) vm: ChromeViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the header: home logo, title and language toggle.
pub(crate) fn view(
    props: HeaderProps<'_>,
) -> Element<'_, ChromeIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.vm.language;

    let logo = svg::Svg::new(svg::Handle::from_memory(LOGO))
        .width(Length::Fixed(LOGO_SIZE))
        .height(Length::Fixed(LOGO_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.primary),
        });
    let title = text(translate("menu.commex", language))
        .size(TITLE_SIZE)
        .color(palette.primary);
    let home = MouseArea::new(
        row![logo, title]
            .spacing(12)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(ChromeIntent::LogoPressed)
    .interaction(mouse::Interaction::Pointer);

    let mut languages = row![].spacing(6).align_y(alignment::Vertical::Center);
    for option in Language::ALL {
        languages = languages.push(language_button(
            option,
            option == language,
            props.theme,
        ));
    }

    let content = row![home, Space::new().width(Length::Fill), languages]
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_HEIGHT))
        .padding([0.0, HEADER_HORIZONTAL_PADDING])
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            shadow: Shadow {
                color: Color {
                    a: 0.3,
                    ..Color::BLACK
                },
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            ..Default::default()
        })
        .into()
}

fn language_button<'a>(
    language: Language,
    is_selected: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, ChromeIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    let (background, foreground) = if is_selected {
        (palette.primary, palette.surface)
    } else {
        (Color::TRANSPARENT, palette.primary)
    };

    let label = container(text(language.code()).size(12).color(foreground))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(label)
        .on_press(ChromeIntent::SelectLanguage(language))
        .padding(0)
        .width(Length::Fixed(LANGUAGE_BUTTON_WIDTH))
        .height(Length::Fixed(LANGUAGE_BUTTON_HEIGHT))
        .style(move |_, _| button::Style {
            background: Some(background.into()),
            border: Border {
                color: palette.primary,
                width: 1.0,
                radius: (LANGUAGE_BUTTON_HEIGHT / 2.0).into(),
            },
            ..Default::default()
        })
        .into()
}
