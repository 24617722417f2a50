use iced::widget::{Column, Row, Space, column, container, text};
use iced::{Element, Length, Theme};

use super::page::PageProps;
use crate::shared::i18n::translate;
use crate::shared::style;
use crate::widgets::pages::event::PagesIntent;
use crate::widgets::pages::model::BID_TASKS;

const TAB_SIZE: f32 = 18.0;
const TASK_SIZE: f32 = 14.0;
const TASKS_PER_ROW: usize = 3;

/// Render the bids task tab and its shortcut cards.
pub(crate) fn view(
    props: PageProps<'_>,
) -> Element<'_, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let language = props.language;

    let tab = column![
        text(translate("page.tarefas", language))
            .size(TAB_SIZE)
            .color(palette.primary),
        container(Space::new())
            .width(Length::Fixed(72.0))
            .height(Length::Fixed(3.0))
            .style(move |_| container::Style {
                background: Some(palette.primary.into()),
                ..Default::default()
            }),
    ]
    .spacing(4);

    let mut grid = Column::new().spacing(16);
    for chunk in BID_TASKS.chunks(TASKS_PER_ROW) {
        let mut line = Row::new().spacing(16);
        for &key in chunk {
            line = line.push(
                container(
                    text(translate(key, language))
                        .size(TASK_SIZE)
                        .color(palette.text),
                )
                .padding(20)
                .width(Length::FillPortion(1))
                .style(style::card_style(props.theme)),
            );
        }
        for _ in chunk.len()..TASKS_PER_ROW {
            line = line.push(Space::new().width(Length::FillPortion(1)));
        }
        grid = grid.push(line);
    }

    column![tab, grid].spacing(24).into()
}
