use iced::widget::{
    Column, Row, Space, button, column, container, row, text, text_input,
};
use iced::{Border, Element, Length, Theme, alignment};

use super::page::PageProps;
use crate::shared::i18n::{Language, translate};
use crate::shared::style;
use crate::widgets::pages::calendar::{CalendarBoard, WEEKDAY_KEYS};
use crate::widgets::pages::event::PagesIntent;

const MONTH_SIZE: f32 = 18.0;
const WEEKDAY_SIZE: f32 = 11.0;
const DAY_SIZE: f32 = 13.0;
const EVENT_SIZE: f32 = 11.0;
const CELL_HEIGHT: f32 = 96.0;
const SEARCH_WIDTH: f32 = 260.0;

/// Render the month grid with the events of each day.
pub(crate) fn view<'a>(
    props: PageProps<'a>,
    board: &'a CalendarBoard,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;
    let month = board.month();

    let name = translate(month.label_key(), language).to_uppercase();
    let label = match language {
        Language::PtBr => format!("{name} DE {}", month.year()),
        Language::EnUs => format!("{name} {}", month.year()),
    };
    let step = |arrow: &'a str, delta: i32| {
        button(text(arrow).color(palette.primary))
            .on_press(PagesIntent::ShiftMonth(delta))
            .padding([4, 10])
            .style(style::outline_button_style(props.theme))
    };
    let search =
        text_input(translate("common.buscar", language), board.query())
            .on_input(PagesIntent::Search)
            .padding([10, 14])
            .width(Length::Fixed(SEARCH_WIDTH))
            .style(style::text_input_style(props.theme));

    let toolbar = row![
        step("<", -1),
        text(label).size(MONTH_SIZE).color(palette.primary),
        step(">", 1),
        Space::new().width(Length::Fill),
        search,
    ]
    .spacing(12)
    .align_y(alignment::Vertical::Center);

    let mut weekdays = Row::new().spacing(4);
    for key in WEEKDAY_KEYS {
        weekdays = weekdays.push(
            text(translate(key, language).to_uppercase())
                .size(WEEKDAY_SIZE)
                .color(palette.text_muted)
                .width(Length::FillPortion(1)),
        );
    }

    let mut grid = Column::new().spacing(4).push(weekdays);
    for week in month.grid().chunks(7) {
        let mut line = Row::new().spacing(4);
        for &day in week {
            line = line.push(day_cell(board, day, props));
        }
        grid = grid.push(line);
    }

    container(column![toolbar, grid].spacing(16))
        .padding(24)
        .width(Length::Fill)
        .style(style::card_style(props.theme))
        .into()
}

fn day_cell<'a>(
    board: &'a CalendarBoard,
    day: Option<u32>,
    props: PageProps<'a>,
) -> Element<'a, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let mut content = Column::new().spacing(4);
    if let Some(day) = day {
        content = content
            .push(text(day.to_string()).size(DAY_SIZE).color(palette.text));
        for event in board.events_on(day) {
            let label = match event.time {
                Some(time) => format!("{time} {}", event.title),
                None => event.title.to_string(),
            };
            content = content
                .push(text(label).size(EVENT_SIZE).color(palette.primary));
        }
    }

    container(content)
        .padding(6)
        .width(Length::FillPortion(1))
        .height(Length::Fixed(CELL_HEIGHT))
        .style(move |_| container::Style {
            border: Border {
                width: 1.0,
                color: palette.border_neutral,
                radius: 4.0.into(),
            },
            ..Default::default()
        })
        .into()
}
