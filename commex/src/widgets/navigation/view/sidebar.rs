use iced::widget::{
    Space, button, column, container, row, scrollable, svg, text,
};
use iced::{Border, Color, Element, Length, Theme, alignment};

use crate::navigation::{MENU, MenuEntry};
use crate::shared::i18n::{Language, translate};
use crate::shared::icons;
use crate::shared::theme::ThemeProps;
use crate::widgets::navigation::event::NavigationIntent;
use crate::widgets::navigation::model::NavigationViewModel;

const ENTRY_HEIGHT: f32 = 44.0;
const CHILD_HEIGHT: f32 = 36.0;
const ICON_SIZE: f32 = 20.0;
const CHEVRON_SIZE: f32 = 14.0;
const ENTRY_PADDING_X: f32 = 16.0;
const CHILD_INDENT: f32 = 52.0;
const ACTIVE_BORDER_WIDTH: f32 = 3.0;
const LABEL_SIZE: f32 = 14.0;
const CHILD_LABEL_SIZE: f32 = 13.0;

/// Props for the sidebar menu view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: NavigationViewModel<'a>,
    pub(crate) language: Language,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the menu table with the active entry highlighted.
pub(crate) fn view(
    props: SidebarProps<'_>,
) -> Element<'_, NavigationIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let mut entries = column![].spacing(2).width(Length::Fill);

    for entry in MENU {
        entries = entries.push(entry_button(entry, props));

        if entry.has_children()
            && props.vm.sidebar_expanded
            && props.vm.is_group_expanded(entry.route)
        {
            for child in entry.children {
                let is_active = props.vm.active == child.route;
                let label = translate(child.label_key, props.language);
                entries = entries.push(child_button(
                    label,
                    is_active,
                    props,
                    NavigationIntent::SelectChild {
                        parent: entry.route,
                        child: child.route,
                    },
                ));
            }
        }
    }

    let menu = scrollable::Scrollable::with_direction(
        entries,
        scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(0)
                .scroller_width(0)
                .margin(0),
        ),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let toggle_icon = if props.vm.sidebar_expanded {
        icons::SIDEBAR_COLLAPSE
    } else {
        icons::SIDEBAR_EXPAND
    };
    let toggle = button(
        container(icon(toggle_icon, ICON_SIZE, palette.primary))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(NavigationIntent::ToggleSidebar)
    .padding(ENTRY_PADDING_X / 2.0)
    .width(Length::Fill)
    .style(|_, _| button::Style {
        background: None,
        border: Border::default(),
        ..Default::default()
    });

    container(column![menu, toggle].height(Length::Fill))
        .width(Length::Fixed(props.vm.sidebar_width()))
        .height(Length::Fill)
        .padding([12, 0])
        .style(move |_| container::Style {
            background: Some(palette.surface.into()),
            border: Border {
                color: palette.border_neutral,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn entry_button<'a>(
    entry: &'static MenuEntry,
    props: SidebarProps<'a>,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let is_active = entry.is_active(props.vm.active);
    let foreground = if is_active {
        palette.primary
    } else {
        palette.text
    };

    let entry_icon = icon(icons::menu_icon(entry.icon), ICON_SIZE, foreground);
    let mut content = row![entry_icon]
        .spacing(12)
        .align_y(alignment::Vertical::Center)
        .height(Length::Fill);

    if props.vm.sidebar_expanded {
        content = content.push(
            text(translate(entry.label_key, props.language))
                .size(LABEL_SIZE)
                .color(foreground)
                .width(Length::Fill),
        );
        if entry.has_children() {
            let chevron = if props.vm.is_group_expanded(entry.route) {
                icons::CHEVRON_DOWN
            } else {
                icons::CHEVRON_RIGHT
            };
            content = content.push(
                button(icon(chevron, CHEVRON_SIZE, foreground))
                    .on_press(NavigationIntent::ToggleGroup(entry.route))
                    .padding(4)
                    .style(|_, _| button::Style {
                        background: None,
                        border: Border::default(),
                        ..Default::default()
                    }),
            );
        }
    }

    let body = container(content)
        .padding([0.0, ENTRY_PADDING_X])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(if props.vm.sidebar_expanded {
            alignment::Horizontal::Left
        } else {
            alignment::Horizontal::Center
        });

    let marker_color = if is_active {
        palette.primary
    } else {
        Color::TRANSPARENT
    };
    let marker = container(Space::new())
        .width(Length::Fixed(ACTIVE_BORDER_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(marker_color.into()),
            ..Default::default()
        });

    let highlight = if is_active {
        Color {
            a: 0.08,
            ..palette.primary
        }
    } else {
        Color::TRANSPARENT
    };

    button(row![marker, body].height(Length::Fill))
        .on_press(NavigationIntent::SelectEntry(entry.route))
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(ENTRY_HEIGHT))
        .style(move |_, status| {
            let background = match status {
                button::Status::Hovered if !is_active => Color {
                    a: 0.05,
                    ..palette.primary
                },
                _ => highlight,
            };
            button::Style {
                background: Some(background.into()),
                border: Border::default(),
                ..Default::default()
            }
        })
        .into()
}

fn child_button<'a>(
    label: &'a str,
    is_active: bool,
    props: SidebarProps<'a>,
    on_press: NavigationIntent,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let foreground = if is_active {
        palette.primary
    } else {
        palette.text_muted
    };

    let label = text(label).size(CHILD_LABEL_SIZE).color(foreground);
    let content = container(label)
        .padding([0.0, CHILD_INDENT])
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(on_press)
        .padding(0)
        .width(Length::Fill)
        .height(Length::Fixed(CHILD_HEIGHT))
        .style(|_, _| button::Style {
            background: None,
            border: Border::default(),
            ..Default::default()
        })
        .into()
}

fn icon<'a>(
    bytes: &'static [u8],
    size: f32,
    color: Color,
) -> Element<'a, NavigationIntent, Theme, iced::Renderer> {
    svg::Svg::new(svg::Handle::from_memory(bytes))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}
