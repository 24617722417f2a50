use iced::widget::{Column, Space, column, row, text};
use iced::{Element, Length, Theme};

use super::page::PageProps;
use crate::shared::i18n::translate;
use crate::widgets::pages::event::PagesIntent;
use crate::widgets::pages::model;

const LABEL_SIZE: f32 = 11.0;
const VALUE_SIZE: f32 = 14.0;

/// Render the read-only header fields of the screen, two per line.
pub(crate) fn view(
    props: PageProps<'_>,
) -> Element<'_, PagesIntent, Theme, iced::Renderer> {
    let palette = *props.theme.theme.iced_palette();
    let fields = model::detail_fields(props.vm.screen);

    let mut lines = Column::new().spacing(16);
    for pair in fields.chunks(2) {
        let mut line = row![].spacing(24);
        for &(label_key, value) in pair {
            line = line.push(
                column![
                    text(translate(label_key, props.language).to_uppercase())
                        .size(LABEL_SIZE)
                        .color(palette.text_muted),
                    text(value).size(VALUE_SIZE).color(palette.text),
                ]
                .spacing(4)
                .width(Length::FillPortion(1)),
            );
        }
        if pair.len() == 1 {
            line = line.push(Space::new().width(Length::FillPortion(1)));
        }
        lines = lines.push(line);
    }
    lines.into()
}
