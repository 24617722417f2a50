use iced::widget::{
    Column, Row, Space, button, column, container, row, svg, text,
    text_input,
};
use iced::{Border, Color, Element, Length, Theme, alignment};

use super::page::PageProps;
use crate::shared::i18n::{Language, translate};
use crate::shared::icons;
use crate::shared::list::FilteredList;
use crate::shared::style;
use crate::shared::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::pages::event::PagesIntent;
use crate::widgets::pages::model::{
    self, ListTab, PatientRow, RowAction, RowStatus,
};

const ROW_HEIGHT: f32 = 52.0;
const ROW_PADDING_X: f32 = 24.0;
const HEADER_SIZE: f32 = 11.0;
const NAME_SIZE: f32 = 14.0;
const TAB_SIZE: f32 = 18.0;
const ACTION_SIZE: f32 = 32.0;
const ACTION_ICON_SIZE: f32 = 16.0;
const STATUS_WIDTH: f32 = 180.0;
const ACTIONS_WIDTH: f32 = 140.0;
const SEARCH_WIDTH: f32 = 260.0;
const CHECKBOX_SIZE: f32 = 18.0;

/// Render tabs, search box, pager and the rows of the current page.
pub(crate) fn view<'a>(
    props: PageProps<'a>,
    list: &'a FilteredList<PatientRow>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;

    let search = text_input(
        translate("common.pesquise-paciente", language),
        list.query(),
    )
    .on_input(PagesIntent::Search)
    .padding([10, 14])
    .width(Length::Fixed(SEARCH_WIDTH))
    .style(style::text_input_style(props.theme));

    let toolbar =
        row![tab_strip(props), Space::new().width(Length::Fill), search]
            .align_y(alignment::Vertical::Center);

    let selectable = props.vm.tab.is_some_and(|tab| tab.is_selectable());
    let rows = list.page_rows();
    let mut body = Column::new().width(Length::Fill);
    body = body.push(header_row(list, selectable, props));
    if rows.is_empty() {
        body = body.push(
            container(
                text(translate("common.nenhum-resultado", language))
                    .color(palette.text_muted),
            )
            .padding([16.0, ROW_PADDING_X]),
        );
    }
    for (index, patient) in rows.into_iter().enumerate() {
        body = body.push(patient_row(
            index,
            patient,
            selectable && list.is_selected(patient.id),
            selectable,
            props,
        ));
    }

    let table = container(body)
        .width(Length::Fill)
        .style(style::card_style(props.theme));

    column![toolbar, table].spacing(16).into()
}

fn tab_strip(
    props: PageProps<'_>,
) -> Element<'_, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let mut strip = Row::new().spacing(24);
    for &tab in model::tabs(props.vm.screen) {
        let is_active = props.vm.tab == Some(tab);
        strip =
            strip.push(tab_button(tab, is_active, props.language, palette));
    }
    strip.into()
}

fn tab_button<'a>(
    tab: ListTab,
    is_active: bool,
    language: Language,
    palette: IcedColorPalette,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let color = if is_active {
        palette.primary
    } else {
        palette.text_muted
    };
    let underline = if is_active {
        palette.primary
    } else {
        Color::TRANSPARENT
    };

    let label = column![
        text(translate(tab.label_key(), language))
            .size(TAB_SIZE)
            .color(color),
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(3.0))
            .style(move |_| container::Style {
                background: Some(underline.into()),
                ..Default::default()
            }),
    ]
    .spacing(4)
    .width(Length::Shrink);

    button(label)
        .on_press(PagesIntent::SelectTab(tab))
        .padding(0)
        .style(style::ghost_button_style())
        .into()
}

fn header_row<'a>(
    list: &FilteredList<PatientRow>,
    selectable: bool,
    props: PageProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;
    let heading = |key: &'static str| {
        text(translate(key, language).to_uppercase())
            .size(HEADER_SIZE)
            .color(palette.primary)
    };

    let pager = row![
        pager_button("<", PagesIntent::PreviousPage, props.theme),
        text(format!("{} / {}", list.page() + 1, list.page_count()))
            .size(HEADER_SIZE)
            .color(palette.primary),
        pager_button(">", PagesIntent::NextPage, props.theme),
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    let middle = if selectable {
        text(format!(
            "{} ({})",
            translate("button.finalizar", language).to_uppercase(),
            list.selected_count()
        ))
        .size(HEADER_SIZE)
        .color(palette.primary)
    } else {
        heading("common.status")
    };

    let content = row![
        heading("common.paciente").width(Length::Fill),
        pager,
        container(middle)
            .width(Length::Fixed(STATUS_WIDTH))
            .align_x(alignment::Horizontal::Center),
        container(heading("common.acoes"))
            .width(Length::Fixed(ACTIONS_WIDTH))
            .align_x(alignment::Horizontal::Center),
    ]
    .spacing(16)
    .align_y(alignment::Vertical::Center);

    container(content)
        .padding([16.0, ROW_PADDING_X])
        .width(Length::Fill)
        .into()
}

fn pager_button<'a>(
    label: &'a str,
    on_press: PagesIntent,
    theme: ThemeProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *theme.theme.iced_palette();
    button(text(label).size(HEADER_SIZE).color(palette.primary))
        .on_press(on_press)
        .padding([2, 6])
        .style(style::ghost_button_style())
        .into()
}

fn patient_row<'a>(
    index: usize,
    patient: &'a PatientRow,
    is_selected: bool,
    selectable: bool,
    props: PageProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;

    let mut name = row![].spacing(8).align_y(alignment::Vertical::Center);
    if patient.alert {
        name = name.push(icon(icons::ALERT, ACTION_ICON_SIZE, palette.accent));
    }
    name = name.push(text(patient.name).size(NAME_SIZE).color(palette.text));

    let middle = match (selectable, patient.status) {
        (true, _) => checkbox(patient.id, is_selected, palette),
        (false, Some(status)) => text(translate(status.label_key(), language))
            .size(NAME_SIZE)
            .color(status_color(status, palette))
            .into(),
        (false, None) => text("-").color(palette.text).into(),
    };

    let mut actions = Row::new().spacing(8);
    for &action in patient.actions {
        actions = actions.push(action_button(patient.id, action, palette));
    }

    let content = row![
        container(name).width(Length::Fill),
        container(middle)
            .width(Length::Fixed(STATUS_WIDTH))
            .align_x(alignment::Horizontal::Center),
        container(actions)
            .width(Length::Fixed(ACTIONS_WIDTH))
            .align_x(alignment::Horizontal::Right),
    ]
    .spacing(16)
    .align_y(alignment::Vertical::Center);

    let background = if index % 2 == 1 {
        Color {
            a: 0.05,
            ..palette.primary
        }
    } else {
        palette.surface
    };

    container(content)
        .padding([0.0, ROW_PADDING_X])
        .height(Length::Fixed(ROW_HEIGHT))
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}

fn status_color(status: RowStatus, palette: IcedColorPalette) -> Color {
    match status {
        RowStatus::DivergentRelease => palette.warning,
        RowStatus::PendingBalance => palette.accent,
    }
}

fn checkbox<'a>(
    row_id: &'a str,
    is_selected: bool,
    palette: IcedColorPalette,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let (background, mark) = if is_selected {
        (palette.primary, Some(palette.surface))
    } else {
        (palette.surface, None)
    };
    let inner: Element<'a, PagesIntent, Theme, iced::Renderer> = match mark {
        Some(color) => icon(icons::CHECK, CHECKBOX_SIZE - 4.0, color),
        None => Space::new().into(),
    };

    button(
        container(inner)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(PagesIntent::ToggleRow(row_id.to_string()))
    .padding(0)
    .width(Length::Fixed(CHECKBOX_SIZE))
    .height(Length::Fixed(CHECKBOX_SIZE))
    .style(move |_, _| button::Style {
        background: Some(background.into()),
        border: Border {
            width: 1.0,
            color: palette.primary,
            radius: 3.0.into(),
        },
        ..Default::default()
    })
    .into()
}

fn action_button<'a>(
    row_id: &'a str,
    action: RowAction,
    palette: IcedColorPalette,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let (bytes, color) = match action {
        RowAction::Add => (icons::PLUS, palette.primary),
        RowAction::Search => (icons::SEARCH, palette.primary),
        RowAction::Info => (icons::INFO, palette.primary),
        RowAction::Delete => (icons::TRASH, palette.text_muted),
    };

    button(
        container(icon(bytes, ACTION_ICON_SIZE, color))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(PagesIntent::RowAction {
        row_id: row_id.to_string(),
        action,
    })
    .padding(0)
    .width(Length::Fixed(ACTION_SIZE))
    .height(Length::Fixed(ACTION_SIZE))
    .style(move |_, status| button::Style {
        background: Some(
            match status {
                button::Status::Hovered => Color { a: 0.1, ..color },
                _ => Color::TRANSPARENT,
            }
            .into(),
        ),
        border: Border {
            width: 1.0,
            color,
            radius: (ACTION_SIZE / 2.0).into(),
        },
        ..Default::default()
    })
    .into()
}

fn icon<'a>(
    bytes: &'static [u8],
    size: f32,
    color: Color,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    svg::Svg::new(svg::Handle::from_memory(bytes))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_, _| svg::Style { color: Some(color) })
        .into()
}
